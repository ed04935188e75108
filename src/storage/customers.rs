// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{self, keys};
use crate::models::{Customer, CustomerPatch, NewCustomer};
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn get_all(conn: &Connection) -> Vec<Customer> {
    db::kv_get(conn, keys::CUSTOMERS, Vec::new())
}

pub fn save(conn: &Connection, customers: &[Customer]) {
    db::kv_set(conn, keys::CUSTOMERS, customers);
}

pub fn add(conn: &Connection, input: NewCustomer) -> Customer {
    let mut customers = get_all(conn);
    let customer = Customer {
        id: format!("CUST-{}", db::next_seq(conn, "CUST")),
        name: input.name,
        email: input.email,
        phone: input.phone,
        address: input.address,
        gst_number: input.gst_number,
        total_invoices: 0,
        total_amount: Decimal::ZERO,
    };
    customers.push(customer.clone());
    save(conn, &customers);
    customer
}

pub fn update(conn: &Connection, id: &str, patch: CustomerPatch) -> Option<Customer> {
    let mut customers = get_all(conn);
    let c = customers.iter_mut().find(|c| c.id == id)?;
    if let Some(name) = patch.name {
        c.name = name;
    }
    if let Some(email) = patch.email {
        c.email = email;
    }
    if let Some(phone) = patch.phone {
        c.phone = phone;
    }
    if let Some(address) = patch.address {
        c.address = Some(address);
    }
    if let Some(gst) = patch.gst_number {
        c.gst_number = Some(gst);
    }
    let updated = c.clone();
    save(conn, &customers);
    Some(updated)
}

pub fn delete(conn: &Connection, id: &str) -> bool {
    let mut customers = get_all(conn);
    let before = customers.len();
    customers.retain(|c| c.id != id);
    if customers.len() == before {
        return false;
    }
    save(conn, &customers);
    true
}

pub fn get_by_id(conn: &Connection, id: &str) -> Option<Customer> {
    get_all(conn).into_iter().find(|c| c.id == id)
}

/// Adjust the derived invoice aggregates. Called only by the ledger:
/// +1/+total when an invoice is recorded, -1/-total when one is removed.
/// A missing customer is skipped and reported as `None`.
pub fn adjust_aggregates(
    conn: &Connection,
    id: &str,
    count_delta: i64,
    amount_delta: Decimal,
) -> Option<Customer> {
    let mut customers = get_all(conn);
    let c = customers.iter_mut().find(|c| c.id == id)?;
    c.total_invoices = if count_delta >= 0 {
        c.total_invoices.saturating_add(count_delta as u32)
    } else {
        c.total_invoices.saturating_sub(count_delta.unsigned_abs() as u32)
    };
    c.total_amount += amount_delta;
    let updated = c.clone();
    save(conn, &customers);
    Some(updated)
}
