// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{self, keys};
use crate::models::{NewPurchaseOrder, PurchaseOrder, PurchaseOrderPatch};
use rusqlite::Connection;

pub fn get_all(conn: &Connection) -> Vec<PurchaseOrder> {
    db::kv_get(conn, keys::PURCHASE_ORDERS, Vec::new())
}

pub fn save(conn: &Connection, orders: &[PurchaseOrder]) {
    db::kv_set(conn, keys::PURCHASE_ORDERS, orders);
}

/// Insert only; orders start life as whatever status the input carries
/// (normally pending). Stock receipt is a ledger operation.
pub fn add(conn: &Connection, input: NewPurchaseOrder) -> PurchaseOrder {
    let mut orders = get_all(conn);
    let order = PurchaseOrder {
        id: format!("PORD-{}", db::next_seq(conn, "PORD")),
        po_number: format!("PO-{}", 1000 + db::next_seq(conn, "po_no")),
        vendor_name: input.vendor_name,
        date: input.date,
        items: input.items,
        total: input.total,
        status: input.status,
    };
    orders.push(order.clone());
    save(conn, &orders);
    order
}

pub fn update(conn: &Connection, id: &str, patch: PurchaseOrderPatch) -> Option<PurchaseOrder> {
    let mut orders = get_all(conn);
    let po = orders.iter_mut().find(|p| p.id == id)?;
    if let Some(vendor_name) = patch.vendor_name {
        po.vendor_name = vendor_name;
    }
    if let Some(date) = patch.date {
        po.date = date;
    }
    if let Some(items) = patch.items {
        po.items = items;
    }
    if let Some(total) = patch.total {
        po.total = total;
    }
    if let Some(status) = patch.status {
        po.status = status;
    }
    let updated = po.clone();
    save(conn, &orders);
    Some(updated)
}

pub fn delete(conn: &Connection, id: &str) -> bool {
    let mut orders = get_all(conn);
    let before = orders.len();
    orders.retain(|p| p.id != id);
    if orders.len() == before {
        return false;
    }
    save(conn, &orders);
    true
}

pub fn get_by_id(conn: &Connection, id: &str) -> Option<PurchaseOrder> {
    get_all(conn).into_iter().find(|p| p.id == id)
}
