// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Cross-entity consistency rules. Every operation here touches more than
//! one collection and runs inside a single sqlite transaction, so no reader
//! ever observes an invoice without its stock and customer side effects.

use crate::calc;
use crate::models::{Invoice, InvoicePatch, NewInvoice, PoStatus, PurchaseOrder, PurchaseOrderPatch};
use crate::storage::{bank, customers, invoices, products, purchase_orders, settings};
use anyhow::Result;
use rusqlite::Connection;

/// Record an invoice: recompute totals at the current tax rate, insert, then
/// bump the customer's aggregates and decrement stock for every line.
///
/// A customer id that no longer resolves leaves the aggregates untouched;
/// the invoice still records the snapshot name. Missing products are
/// silently skipped, and stock may go negative.
pub fn create_invoice(conn: &mut Connection, input: NewInvoice) -> Result<Invoice> {
    let tx = conn.transaction()?;

    let tax_rate = settings::get(&tx).tax_rate;
    let totals = calc::calculate_invoice_total(&input.items, tax_rate);
    let invoice = invoices::add(
        &tx,
        NewInvoice {
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            ..input
        },
    );

    customers::adjust_aggregates(&tx, &invoice.customer_id, 1, invoice.total);
    for item in &invoice.items {
        products::update_stock(&tx, &item.product_id, -item.quantity);
    }

    tx.commit()?;
    Ok(invoice)
}

/// Shallow-merge a patch. A patch that replaces the item list also
/// recomputes totals at the current tax rate, returns the old lines to
/// stock, draws down the new ones, and moves the customer's total_amount by
/// the delta. total_invoices is unchanged: it is still one invoice.
pub fn update_invoice(
    conn: &mut Connection,
    id: &str,
    mut patch: InvoicePatch,
) -> Result<Option<Invoice>> {
    let tx = conn.transaction()?;

    let Some(existing) = invoices::get_by_id(&tx, id) else {
        return Ok(None);
    };

    if let Some(ref new_items) = patch.items {
        let tax_rate = settings::get(&tx).tax_rate;
        let totals = calc::calculate_invoice_total(new_items, tax_rate);
        patch.subtotal = Some(totals.subtotal);
        patch.tax = Some(totals.tax);
        patch.total = Some(totals.total);

        for item in &existing.items {
            products::update_stock(&tx, &item.product_id, item.quantity);
        }
        for item in new_items {
            products::update_stock(&tx, &item.product_id, -item.quantity);
        }
        customers::adjust_aggregates(&tx, &existing.customer_id, 0, totals.total - existing.total);
    }

    let updated = invoices::update(&tx, id, patch);
    tx.commit()?;
    Ok(updated)
}

/// Remove an invoice and reverse its bookkeeping: stock is restored per
/// line and the customer's aggregates are decremented by exactly what the
/// creation added.
pub fn delete_invoice(conn: &mut Connection, id: &str) -> Result<bool> {
    let tx = conn.transaction()?;

    let Some(existing) = invoices::get_by_id(&tx, id) else {
        return Ok(false);
    };

    for item in &existing.items {
        products::update_stock(&tx, &item.product_id, item.quantity);
    }
    customers::adjust_aggregates(&tx, &existing.customer_id, -1, -existing.total);

    let removed = invoices::delete(&tx, id);
    tx.commit()?;
    Ok(removed)
}

/// pending -> received, incrementing each referenced product's stock by the
/// line quantity. Idempotent: a non-pending order is returned unchanged and
/// stock is not touched again. A missing id mutates nothing.
pub fn receive_stock(conn: &mut Connection, id: &str) -> Result<Option<PurchaseOrder>> {
    let tx = conn.transaction()?;

    let Some(po) = purchase_orders::get_by_id(&tx, id) else {
        return Ok(None);
    };
    if po.status != PoStatus::Pending {
        return Ok(Some(po));
    }

    for item in &po.items {
        products::update_stock(&tx, &item.product_id, item.quantity);
    }
    let updated = purchase_orders::update(
        &tx,
        id,
        PurchaseOrderPatch {
            status: Some(PoStatus::Received),
            ..Default::default()
        },
    );

    tx.commit()?;
    Ok(updated)
}

/// Commit a user-selected reconciliation pair. Both sides must exist or
/// nothing is mutated; on success both records carry matched = true and
/// each other's id, persisted together.
pub fn match_transaction(conn: &mut Connection, bank_id: &str, book_id: &str) -> Result<bool> {
    let tx = conn.transaction()?;

    let mut txns = bank::get_transactions(&tx);
    let mut entries = bank::get_entries(&tx);

    let Some(txn) = txns.iter_mut().find(|t| t.id == bank_id) else {
        return Ok(false);
    };
    let Some(entry) = entries.iter_mut().find(|e| e.id == book_id) else {
        return Ok(false);
    };

    txn.matched = true;
    txn.matched_with = Some(book_id.to_string());
    entry.matched = true;
    entry.matched_with = Some(bank_id.to_string());

    bank::save_transactions(&tx, &txns);
    bank::save_entries(&tx, &entries);

    tx.commit()?;
    Ok(true)
}
