// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use bizbook::{cli, commands, db, state::AppState};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let mut state = AppState::new(conn);

    match matches.subcommand() {
        Some(("init", sub)) => {
            if sub.get_flag("sample") {
                state.seed_sample_data();
            }
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("customer", sub)) => commands::customers::handle(&mut state, sub)?,
        Some(("party", sub)) => commands::parties::handle(&mut state, sub)?,
        Some(("product", sub)) => commands::products::handle(&mut state, sub)?,
        Some(("invoice", sub)) => commands::invoices::handle(&mut state, sub)?,
        Some(("po", sub)) => commands::purchase_orders::handle(&mut state, sub)?,
        Some(("bank", sub)) => commands::bank::handle(&mut state, sub)?,
        Some(("settings", sub)) => commands::settings::handle(&mut state, sub)?,
        Some(("report", sub)) => commands::reports::handle(&state, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&state, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&state)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
