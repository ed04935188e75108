// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{self, keys};
use crate::models::{Invoice, InvoicePatch, NewInvoice};
use crate::storage::settings;
use rusqlite::Connection;

pub fn get_all(conn: &Connection) -> Vec<Invoice> {
    db::kv_get(conn, keys::INVOICES, Vec::new())
}

pub fn save(conn: &Connection, invoices: &[Invoice]) {
    db::kv_set(conn, keys::INVOICES, invoices);
}

/// Insert only. Assigns the id and the invoice number from their persisted
/// sequences; numbers are never reused after a deletion. Cross-entity side
/// effects (customer aggregates, stock) belong to the ledger.
pub fn add(conn: &Connection, input: NewInvoice) -> Invoice {
    let mut invoices = get_all(conn);
    let prefix = settings::get(conn).invoice_prefix;
    let invoice = Invoice {
        id: format!("INV-{}", db::next_seq(conn, "INV")),
        invoice_number: format!("{}-{:04}", prefix, db::next_seq(conn, "invoice_no")),
        customer_id: input.customer_id,
        customer_name: input.customer_name,
        date: input.date,
        due_date: input.due_date,
        items: input.items,
        subtotal: input.subtotal,
        tax: input.tax,
        total: input.total,
        status: input.status,
        notes: input.notes,
    };
    invoices.push(invoice.clone());
    save(conn, &invoices);
    invoice
}

pub fn update(conn: &Connection, id: &str, patch: InvoicePatch) -> Option<Invoice> {
    let mut invoices = get_all(conn);
    let inv = invoices.iter_mut().find(|i| i.id == id)?;
    if let Some(customer_id) = patch.customer_id {
        inv.customer_id = customer_id;
    }
    if let Some(customer_name) = patch.customer_name {
        inv.customer_name = customer_name;
    }
    if let Some(date) = patch.date {
        inv.date = date;
    }
    if let Some(due_date) = patch.due_date {
        inv.due_date = Some(due_date);
    }
    if let Some(items) = patch.items {
        inv.items = items;
    }
    if let Some(subtotal) = patch.subtotal {
        inv.subtotal = subtotal;
    }
    if let Some(tax) = patch.tax {
        inv.tax = tax;
    }
    if let Some(total) = patch.total {
        inv.total = total;
    }
    if let Some(status) = patch.status {
        inv.status = status;
    }
    if let Some(notes) = patch.notes {
        inv.notes = Some(notes);
    }
    let updated = inv.clone();
    save(conn, &invoices);
    Some(updated)
}

pub fn delete(conn: &Connection, id: &str) -> bool {
    let mut invoices = get_all(conn);
    let before = invoices.len();
    invoices.retain(|i| i.id != id);
    if invoices.len() == before {
        return false;
    }
    save(conn, &invoices);
    true
}

pub fn get_by_id(conn: &Connection, id: &str) -> Option<Invoice> {
    get_all(conn).into_iter().find(|i| i.id == id)
}
