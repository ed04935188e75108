// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::NewCustomer;
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("rm", sub)) => rm(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let customer = state.add_customer(NewCustomer {
        name: sub.get_one::<String>("name").unwrap().clone(),
        email: sub.get_one::<String>("email").unwrap().clone(),
        phone: sub.get_one::<String>("phone").unwrap().clone(),
        address: sub.get_one::<String>("address").cloned(),
        gst_number: sub.get_one::<String>("gst").cloned(),
    });
    println!("Added customer '{}' ({})", customer.name, customer.id);
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &state.customers)? {
        let ccy = &state.settings.currency;
        let rows: Vec<Vec<String>> = state
            .customers
            .iter()
            .map(|c| {
                vec![
                    c.id.clone(),
                    c.name.clone(),
                    c.email.clone(),
                    c.phone.clone(),
                    c.total_invoices.to_string(),
                    fmt_money(&c.total_amount, ccy),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Email", "Phone", "Invoices", "Billed"], rows)
        );
    }
    Ok(())
}

fn rm(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if state.delete_customer(id) {
        println!("Removed customer '{}'", id);
    } else {
        println!("Customer '{}' not found", id);
    }
    Ok(())
}
