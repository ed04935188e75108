// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BalanceType, NewParty, PartyType};
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};

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
    let balance_type_s = sub.get_one::<String>("balance-type").unwrap();
    let balance_type = BalanceType::parse(balance_type_s)
        .with_context(|| format!("Invalid balance type '{}' (use to-collect|to-pay)", balance_type_s))?;
    let party_type_s = sub.get_one::<String>("type").unwrap();
    let party_type = PartyType::parse(party_type_s)
        .with_context(|| format!("Invalid party type '{}' (use customer|vendor|both)", party_type_s))?;

    let billing = sub.get_one::<String>("billing").unwrap().clone();
    let same_as_billing = sub.get_flag("same-as-billing");
    let shipping = sub
        .get_one::<String>("shipping")
        .cloned()
        .unwrap_or_else(|| billing.clone());

    let party = state.add_party(NewParty {
        party_name: sub.get_one::<String>("name").unwrap().clone(),
        mobile_number: sub.get_one::<String>("mobile").unwrap().clone(),
        email: sub.get_one::<String>("email").unwrap().clone(),
        opening_balance: parse_decimal(sub.get_one::<String>("opening-balance").unwrap())?,
        balance_type,
        gstin: sub.get_one::<String>("gstin").cloned(),
        pan_number: sub.get_one::<String>("pan").cloned(),
        party_type,
        party_category: sub.get_one::<String>("category").cloned(),
        billing_address: billing,
        shipping_address: shipping,
        same_as_billing,
        credit_period: *sub.get_one::<u32>("credit-period").unwrap(),
        credit_limit: parse_decimal(sub.get_one::<String>("credit-limit").unwrap())?,
    });
    println!("Added party '{}' ({})", party.party_name, party.id);
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &state.parties)? {
        let ccy = &state.settings.currency;
        let rows: Vec<Vec<String>> = state
            .parties
            .iter()
            .map(|p| {
                vec![
                    p.id.clone(),
                    p.party_name.clone(),
                    p.party_type.to_string(),
                    p.mobile_number.clone(),
                    fmt_money(&p.opening_balance, ccy),
                    p.balance_type.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Name", "Type", "Mobile", "Opening", "Balance"],
                rows
            )
        );
    }
    Ok(())
}

fn rm(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if state.delete_party(id) {
        println!("Removed party '{}'", id);
    } else {
        println!("Party '{}' not found", id);
    }
    Ok(())
}
