// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::SettingsPatch;
use crate::state::AppState;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(state, sub)?,
        Some(("set", sub)) => set(state, sub)?,
        Some(("reset", _)) => {
            state.reset_settings();
            println!("Settings restored to defaults");
        }
        _ => {}
    }
    Ok(())
}

fn show(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &state.settings)? {
        return Ok(());
    }
    let s = &state.settings;
    let rows = vec![
        vec!["Company".to_string(), s.company_name.clone()],
        vec!["GST number".to_string(), s.gst_number.clone()],
        vec!["Address".to_string(), s.address.clone()],
        vec!["Bank".to_string(), s.bank_name.clone()],
        vec!["Account".to_string(), s.account_number.clone()],
        vec!["IFSC".to_string(), s.ifsc_code.clone()],
        vec!["Currency".to_string(), s.currency.clone()],
        vec!["Tax rate".to_string(), format!("{}%", s.tax_rate)],
        vec!["Invoice prefix".to_string(), s.invoice_prefix.clone()],
        vec![
            "Notifications".to_string(),
            s.enable_notifications.to_string(),
        ],
        vec![
            "Profile".to_string(),
            format!("{} <{}>", s.user_profile.name, s.user_profile.email),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}

fn set(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let patch = SettingsPatch {
        company_name: sub.get_one::<String>("company").cloned(),
        gst_number: sub.get_one::<String>("gst").cloned(),
        address: sub.get_one::<String>("address").cloned(),
        bank_name: sub.get_one::<String>("bank-name").cloned(),
        account_number: sub.get_one::<String>("account").cloned(),
        ifsc_code: sub.get_one::<String>("ifsc").cloned(),
        currency: sub.get_one::<String>("currency").cloned(),
        tax_rate: sub
            .get_one::<String>("tax-rate")
            .map(|s| parse_decimal(s))
            .transpose()?,
        invoice_prefix: sub.get_one::<String>("prefix").cloned(),
        enable_notifications: sub.get_one::<bool>("notifications").copied(),
        user_profile: None,
    };
    state.update_settings(patch);
    println!("Settings updated");
    Ok(())
}
