// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::PoStatus;
use crate::state::AppState;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("pnl", sub)) => pnl(state, sub)?,
        Some(("gst", sub)) => gst(state, sub)?,
        Some(("low-stock", sub)) => low_stock(state, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct PnlRow {
    pub month: String,
    pub revenue: Decimal,
    pub purchases: Decimal,
    pub net: Decimal,
}

/// Revenue is the invoiced total per month; purchases count only orders
/// whose stock was actually received. Newest month first.
pub fn monthly_pnl(state: &AppState, months: usize) -> Vec<PnlRow> {
    let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for inv in &state.invoices {
        let month = inv.date.format("%Y-%m").to_string();
        map.entry(month).or_default().0 += inv.total;
    }
    for po in &state.purchase_orders {
        if po.status == PoStatus::Received {
            let month = po.date.format("%Y-%m").to_string();
            map.entry(month).or_default().1 += po.total;
        }
    }
    map.into_iter()
        .rev()
        .take(months)
        .map(|(month, (revenue, purchases))| PnlRow {
            month,
            revenue,
            purchases,
            net: revenue - purchases,
        })
        .collect()
}

fn pnl(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap();
    let data = monthly_pnl(state, months);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.month.clone(),
                    format!("{:.2}", r.revenue),
                    format!("{:.2}", r.purchases),
                    format!("{:.2}", r.net),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Revenue", "Purchases", "Net"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct GstRow {
    pub month: String,
    pub taxable: Decimal,
    pub tax: Decimal,
}

/// Taxable value (subtotal) and tax collected per month, over all invoices.
pub fn gst_summary(state: &AppState) -> Vec<GstRow> {
    let mut map: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for inv in &state.invoices {
        let month = inv.date.format("%Y-%m").to_string();
        let entry = map.entry(month).or_default();
        entry.0 += inv.subtotal;
        entry.1 += inv.tax;
    }
    map.into_iter()
        .map(|(month, (taxable, tax))| GstRow { month, taxable, tax })
        .collect()
}

fn gst(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = gst_summary(state);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.month.clone(),
                    format!("{:.2}", r.taxable),
                    format!("{:.2}", r.tax),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Taxable value", "Tax collected"], rows)
        );
    }
    Ok(())
}

fn low_stock(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let low = state.get_low_stock_products();
    if !maybe_print_json(json_flag, jsonl_flag, &low)? {
        let rows: Vec<Vec<String>> = low
            .iter()
            .map(|p| {
                vec![
                    p.sku.clone(),
                    p.name.clone(),
                    p.stock.to_string(),
                    p.threshold.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["SKU", "Name", "Stock", "Threshold"], rows)
        );
    }
    Ok(())
}
