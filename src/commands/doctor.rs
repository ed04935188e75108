// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::AppState;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

/// Audit the stored data for drift the normal flow should never produce:
/// invoice totals out of step with their own lines, customer aggregates out
/// of step with the invoice collection, line items pointing at deleted
/// products, half-matched reconciliation pairs.
pub fn handle(state: &AppState) -> Result<()> {
    let mut rows = Vec::new();

    for inv in &state.invoices {
        let line_sum: Decimal = inv.items.iter().map(|i| i.total).sum();
        if line_sum != inv.subtotal {
            rows.push(vec![
                "invoice_subtotal_drift".into(),
                format!("{}: subtotal {} vs line sum {}", inv.invoice_number, inv.subtotal, line_sum),
            ]);
        }
        if inv.subtotal + inv.tax != inv.total {
            rows.push(vec![
                "invoice_total_drift".into(),
                format!("{}: {} + {} != {}", inv.invoice_number, inv.subtotal, inv.tax, inv.total),
            ]);
        }
        for item in &inv.items {
            if state.get_product_by_id(&item.product_id).is_none() {
                rows.push(vec![
                    "orphan_product_ref".into(),
                    format!("{}: {}", inv.invoice_number, item.product_id),
                ]);
            }
        }
    }

    for po in &state.purchase_orders {
        for item in &po.items {
            if state.get_product_by_id(&item.product_id).is_none() {
                rows.push(vec![
                    "orphan_product_ref".into(),
                    format!("{}: {}", po.po_number, item.product_id),
                ]);
            }
        }
    }

    for c in &state.customers {
        let issued: Vec<_> = state
            .invoices
            .iter()
            .filter(|i| i.customer_id == c.id)
            .collect();
        let count = issued.len() as u32;
        let amount: Decimal = issued.iter().map(|i| i.total).sum();
        if count != c.total_invoices || amount != c.total_amount {
            rows.push(vec![
                "customer_aggregate_drift".into(),
                format!(
                    "{}: stored {}/{} vs derived {}/{}",
                    c.id, c.total_invoices, c.total_amount, count, amount
                ),
            ]);
        }
    }

    for t in &state.bank_transactions {
        let symmetric = match (&t.matched, &t.matched_with) {
            (false, None) => true,
            (true, Some(book_id)) => state
                .book_entries
                .iter()
                .any(|e| &e.id == book_id && e.matched && e.matched_with.as_deref() == Some(&t.id)),
            _ => false,
        };
        if !symmetric {
            rows.push(vec!["half_matched_txn".into(), t.id.clone()]);
        }
    }
    for e in &state.book_entries {
        let symmetric = match (&e.matched, &e.matched_with) {
            (false, None) => true,
            (true, Some(bank_id)) => state.bank_transactions.iter().any(|t| {
                &t.id == bank_id && t.matched && t.matched_with.as_deref() == Some(&e.id)
            }),
            _ => false,
        };
        if !symmetric {
            rows.push(vec!["half_matched_entry".into(), e.id.clone()]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
