// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::invoices::build_items;
use crate::models::{NewPurchaseOrder, PoStatus, PurchaseOrderPatch};
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("receive", sub)) => receive(state, sub)?,
        Some(("cancel", sub)) => cancel(state, sub)?,
        Some(("rm", sub)) => rm(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let specs: Vec<&String> = sub
        .get_many::<String>("item")
        .map(|v| v.collect())
        .unwrap_or_default();
    if specs.is_empty() {
        anyhow::bail!("A purchase order needs at least one --item PRODUCT-ID:QTY line");
    }
    let items = build_items(state, &specs)?;
    let total: Decimal = items.iter().map(|i| i.total).sum();

    let po = state.add_purchase_order(NewPurchaseOrder {
        vendor_name: sub.get_one::<String>("vendor").unwrap().clone(),
        date,
        items,
        total,
        status: PoStatus::Pending,
    });
    println!(
        "Created {} for '{}': {}",
        po.po_number,
        po.vendor_name,
        fmt_money(&po.total, &state.settings.currency)
    );
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &state.purchase_orders)? {
        let ccy = &state.settings.currency;
        let rows: Vec<Vec<String>> = state
            .purchase_orders
            .iter()
            .map(|po| {
                vec![
                    po.po_number.clone(),
                    po.date.to_string(),
                    po.vendor_name.clone(),
                    po.status.to_string(),
                    fmt_money(&po.total, ccy),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Number", "Date", "Vendor", "Status", "Total"], rows)
        );
    }
    Ok(())
}

fn receive(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().clone();
    let was_pending = state
        .get_purchase_order_by_id(&id)
        .map(|p| p.status == PoStatus::Pending);
    match state.receive_stock(&id)? {
        Some(po) if was_pending == Some(true) => {
            println!("{} received, stock updated", po.po_number)
        }
        Some(po) => println!("{} is {}, nothing to receive", po.po_number, po.status),
        None => println!("Purchase order '{}' not found", id),
    }
    Ok(())
}

fn cancel(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().clone();
    let patch = PurchaseOrderPatch {
        status: Some(PoStatus::Cancelled),
        ..Default::default()
    };
    match state.update_purchase_order(&id, patch) {
        Some(po) => println!("{} cancelled", po.po_number),
        None => println!("Purchase order '{}' not found", id),
    }
    Ok(())
}

fn rm(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().clone();
    if state.delete_purchase_order(&id) {
        println!("Removed purchase order '{}'", id);
    } else {
        println!("Purchase order '{}' not found", id);
    }
    Ok(())
}
