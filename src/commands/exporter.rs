// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::AppState;
use anyhow::Result;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("invoices", sub)) => export_invoices(state, sub),
        Some(("po", sub)) => export_purchase_orders(state, sub),
        _ => Ok(()),
    }
}

fn export_invoices(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "invoice_number",
                "date",
                "customer",
                "status",
                "subtotal",
                "tax",
                "total",
            ])?;
            for inv in &state.invoices {
                wtr.write_record([
                    inv.invoice_number.clone(),
                    inv.date.to_string(),
                    inv.customer_name.clone(),
                    inv.status.to_string(),
                    inv.subtotal.to_string(),
                    inv.tax.to_string(),
                    inv.total.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&state.invoices)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported invoices to {}", out);
    Ok(())
}

fn export_purchase_orders(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["po_number", "date", "vendor", "status", "total"])?;
            for po in &state.purchase_orders {
                wtr.write_record([
                    po.po_number.clone(),
                    po.date.to_string(),
                    po.vendor_name.clone(),
                    po.status.to_string(),
                    po.total.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&state.purchase_orders)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported purchase orders to {}", out);
    Ok(())
}
