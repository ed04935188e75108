// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{EntryType, NewBankTransaction, NewBookEntry, TxnType};
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use serde_json::json;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add-txn", sub)) => add_txn(state, sub)?,
        Some(("add-entry", sub)) => add_entry(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("candidates", sub)) => candidates(state, sub)?,
        Some(("match", sub)) => match_pair(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn add_txn(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let type_s = sub.get_one::<String>("type").unwrap();
    let txn_type = TxnType::parse(type_s)
        .with_context(|| format!("Invalid transaction type '{}' (use credit|debit)", type_s))?;
    let txn = state.add_bank_transaction(NewBankTransaction {
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        description: sub.get_one::<String>("description").unwrap().clone(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        txn_type,
    });
    println!("Recorded bank transaction {}", txn.id);
    Ok(())
}

fn add_entry(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let type_s = sub.get_one::<String>("type").unwrap();
    let entry_type = EntryType::parse(type_s)
        .with_context(|| format!("Invalid entry type '{}' (use income|expense)", type_s))?;
    let entry = state.add_book_entry(NewBookEntry {
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        description: sub.get_one::<String>("description").unwrap().clone(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        entry_type,
        invoice_id: sub.get_one::<String>("invoice").cloned(),
        po_id: sub.get_one::<String>("po").cloned(),
    });
    println!("Recorded book entry {}", entry.id);
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(
        json_flag,
        jsonl_flag,
        &json!({
            "transactions": &state.bank_transactions,
            "entries": &state.book_entries,
        }),
    )? {
        return Ok(());
    }

    let ccy = &state.settings.currency;
    let txn_rows: Vec<Vec<String>> = state
        .bank_transactions
        .iter()
        .map(|t| {
            vec![
                t.id.clone(),
                t.date.to_string(),
                t.description.clone(),
                fmt_money(&t.amount, ccy),
                t.txn_type.to_string(),
                if t.matched {
                    t.matched_with.clone().unwrap_or_default()
                } else {
                    "unmatched".to_string()
                },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Description", "Amount", "Type", "Matched with"],
            txn_rows
        )
    );

    let entry_rows: Vec<Vec<String>> = state
        .book_entries
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.date.to_string(),
                e.description.clone(),
                fmt_money(&e.amount, ccy),
                e.entry_type.to_string(),
                if e.matched {
                    e.matched_with.clone().unwrap_or_default()
                } else {
                    "unmatched".to_string()
                },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Description", "Amount", "Type", "Matched with"],
            entry_rows
        )
    );
    Ok(())
}

fn candidates(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let candidates = state.match_candidates(id);
    if !maybe_print_json(json_flag, jsonl_flag, &candidates)? {
        let ccy = &state.settings.currency;
        let rows: Vec<Vec<String>> = candidates
            .iter()
            .map(|e| {
                vec![
                    e.id.clone(),
                    e.date.to_string(),
                    e.description.clone(),
                    fmt_money(&e.amount, ccy),
                    e.entry_type.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Description", "Amount", "Type"], rows)
        );
    }
    Ok(())
}

fn match_pair(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let bank_id = sub.get_one::<String>("bank").unwrap().clone();
    let book_id = sub.get_one::<String>("book").unwrap().clone();
    if state.match_bank_entry(&bank_id, &book_id)? {
        println!("Matched {} with {}", bank_id, book_id);
    } else {
        println!("No match recorded: check that both ids exist");
    }
    Ok(())
}
