// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc;
use crate::models::{InvoicePatch, InvoiceStatus, LineItem, NewInvoice};
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_quantity, pretty_table};
use anyhow::{Context, Result};
use rust_decimal::Decimal;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("show", sub)) => show(state, sub)?,
        Some(("status", sub)) => status(state, sub)?,
        Some(("rm", sub)) => rm(state, sub)?,
        _ => {}
    }
    Ok(())
}

/// `PRODUCT-ID:QTY`.
fn parse_item_spec(spec: &str) -> Result<(String, i64)> {
    let (id, qty) = spec
        .split_once(':')
        .with_context(|| format!("Invalid item '{}', expected PRODUCT-ID:QTY", spec))?;
    Ok((id.to_string(), parse_quantity(qty)?))
}

/// Resolve item specs against the product directory, snapshotting name and
/// price per line. Shared with purchase-order creation.
pub fn build_items(state: &AppState, specs: &[&String]) -> Result<Vec<LineItem>> {
    let mut items = Vec::new();
    for spec in specs {
        let (product_id, quantity) = parse_item_spec(spec)?;
        let product = state
            .get_product_by_id(&product_id)
            .with_context(|| format!("Product '{}' not found", product_id))?;
        items.push(LineItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            price: product.price,
            total: calc::line_total(product.price, quantity),
        });
    }
    Ok(items)
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let customer_id = sub.get_one::<String>("customer").unwrap();
    let customer = state
        .get_customer_by_id(customer_id)
        .with_context(|| format!("Customer '{}' not found", customer_id))?
        .clone();

    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let due_date = sub.get_one::<String>("due").map(|s| parse_date(s)).transpose()?;
    let status_s = sub.get_one::<String>("status").unwrap();
    let status = InvoiceStatus::parse(status_s)
        .with_context(|| format!("Invalid status '{}' (use draft|sent|paid|overdue)", status_s))?;

    let specs: Vec<&String> = sub
        .get_many::<String>("item")
        .map(|v| v.collect())
        .unwrap_or_default();
    if specs.is_empty() {
        anyhow::bail!("An invoice needs at least one --item PRODUCT-ID:QTY line");
    }
    let items = build_items(state, &specs)?;

    let invoice = state.add_invoice(NewInvoice {
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        date,
        due_date,
        items,
        subtotal: Decimal::ZERO,
        tax: Decimal::ZERO,
        total: Decimal::ZERO,
        status,
        notes: sub.get_one::<String>("notes").cloned(),
    })?;
    println!(
        "Recorded {} for '{}': {}",
        invoice.invoice_number,
        invoice.customer_name,
        fmt_money(&invoice.total, &state.settings.currency)
    );
    Ok(())
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &state.invoices)? {
        let ccy = &state.settings.currency;
        let rows: Vec<Vec<String>> = state
            .invoices
            .iter()
            .map(|inv| {
                vec![
                    inv.invoice_number.clone(),
                    inv.date.to_string(),
                    inv.customer_name.clone(),
                    inv.status.to_string(),
                    fmt_money(&inv.total, ccy),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Number", "Date", "Customer", "Status", "Total"], rows)
        );
    }
    Ok(())
}

fn show(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let Some(invoice) = state.get_invoice_by_id(id) else {
        println!("Invoice '{}' not found", id);
        return Ok(());
    };
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, invoice)? {
        return Ok(());
    }

    let ccy = &state.settings.currency;
    println!(
        "{} - {} ({}) [{}]",
        invoice.invoice_number, invoice.customer_name, invoice.date, invoice.status
    );
    let rows: Vec<Vec<String>> = invoice
        .items
        .iter()
        .map(|i| {
            vec![
                i.product_name.clone(),
                i.quantity.to_string(),
                fmt_money(&i.price, ccy),
                fmt_money(&i.total, ccy),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Item", "Qty", "Price", "Total"], rows));
    println!(
        "Subtotal {}  Tax {}  Total {}",
        fmt_money(&invoice.subtotal, ccy),
        fmt_money(&invoice.tax, ccy),
        fmt_money(&invoice.total, ccy)
    );
    Ok(())
}

fn status(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().clone();
    let status_s = sub.get_one::<String>("status").unwrap();
    let status = InvoiceStatus::parse(status_s)
        .with_context(|| format!("Invalid status '{}' (use draft|sent|paid|overdue)", status_s))?;
    let patch = InvoicePatch {
        status: Some(status),
        ..Default::default()
    };
    match state.update_invoice(&id, patch)? {
        Some(inv) => println!("{} is now {}", inv.invoice_number, inv.status),
        None => println!("Invoice '{}' not found", id),
    }
    Ok(())
}

fn rm(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().clone();
    if state.delete_invoice(&id)? {
        println!("Removed invoice '{}' (stock and customer totals reversed)", id);
    } else {
        println!("Invoice '{}' not found", id);
    }
    Ok(())
}
