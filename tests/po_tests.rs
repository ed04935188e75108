// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bizbook::calc::line_total;
use bizbook::db;
use bizbook::models::*;
use bizbook::state::AppState;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn setup() -> AppState {
    AppState::new(db::open_in_memory().expect("in-memory db"))
}

fn sample_product(state: &mut AppState, stock: i64, threshold: i64) -> Product {
    state.add_product(NewProduct {
        sku: "CBL-001".to_string(),
        name: "HDMI Cable".to_string(),
        category: "Electronics".to_string(),
        stock,
        threshold,
        price: Decimal::from(250),
        unit: "pcs".to_string(),
        description: None,
    })
}

fn new_po(product: &Product, quantity: i64) -> NewPurchaseOrder {
    let item = LineItem {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        quantity,
        price: product.price,
        total: line_total(product.price, quantity),
    };
    NewPurchaseOrder {
        vendor_name: "Cable Works".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
        total: item.total,
        items: vec![item],
        status: PoStatus::Pending,
    }
}

#[test]
fn receiving_moves_stock_and_clears_low_stock() {
    let mut state = setup();
    let product = sample_product(&mut state, 2, 10);
    assert_eq!(state.get_low_stock_products().len(), 1);

    let po = state.add_purchase_order(new_po(&product, 20));
    assert_eq!(po.status, PoStatus::Pending);
    // Nothing moves until the stock is received.
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 2);

    let received = state
        .receive_stock(&po.id)
        .expect("receive")
        .expect("order exists");
    assert_eq!(received.status, PoStatus::Received);
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 22);
    assert!(state.get_low_stock_products().is_empty());
}

#[test]
fn receiving_twice_is_a_no_op() {
    let mut state = setup();
    let product = sample_product(&mut state, 0, 0);
    let po = state.add_purchase_order(new_po(&product, 5));

    state.receive_stock(&po.id).expect("receive").expect("order exists");
    let again = state
        .receive_stock(&po.id)
        .expect("receive")
        .expect("order exists");

    assert_eq!(again.status, PoStatus::Received);
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 5);
}

#[test]
fn receiving_a_missing_order_mutates_nothing() {
    let mut state = setup();
    let product = sample_product(&mut state, 3, 0);
    state.add_purchase_order(new_po(&product, 5));

    assert!(state.receive_stock("PORD-404").expect("receive").is_none());
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 3);
}

#[test]
fn cancelled_orders_never_touch_stock() {
    let mut state = setup();
    let product = sample_product(&mut state, 3, 0);
    let po = state.add_purchase_order(new_po(&product, 5));

    let cancelled = state.update_purchase_order(
        &po.id,
        PurchaseOrderPatch {
            status: Some(PoStatus::Cancelled),
            ..Default::default()
        },
    );
    assert!(cancelled.is_some());
    // Receiving a cancelled order is refused by the idempotency guard.
    let after = state
        .receive_stock(&po.id)
        .expect("receive")
        .expect("order exists");

    assert_eq!(after.status, PoStatus::Cancelled);
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 3);
}

#[test]
fn po_numbers_count_up_from_1001_and_survive_deletion() {
    let mut state = setup();
    let product = sample_product(&mut state, 0, 0);

    let first = state.add_purchase_order(new_po(&product, 1));
    let second = state.add_purchase_order(new_po(&product, 1));
    assert_eq!(first.po_number, "PO-1001");
    assert_eq!(second.po_number, "PO-1002");

    assert!(state.delete_purchase_order(&second.id));
    let third = state.add_purchase_order(new_po(&product, 1));
    assert_eq!(third.po_number, "PO-1003");
}

#[test]
fn deleting_a_received_order_keeps_the_stock() {
    let mut state = setup();
    let product = sample_product(&mut state, 0, 0);
    let po = state.add_purchase_order(new_po(&product, 5));
    state.receive_stock(&po.id).expect("receive").expect("order exists");

    assert!(state.delete_purchase_order(&po.id));
    assert!(state.get_purchase_order_by_id(&po.id).is_none());
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 5);
}

#[test]
fn absent_order_update_and_delete_are_no_ops() {
    let mut state = setup();
    let product = sample_product(&mut state, 0, 0);
    state.add_purchase_order(new_po(&product, 1));

    let patch = PurchaseOrderPatch {
        vendor_name: Some("Someone Else".to_string()),
        ..Default::default()
    };
    assert!(state.update_purchase_order("PORD-404", patch).is_none());
    assert!(!state.delete_purchase_order("PORD-404"));
    assert_eq!(state.purchase_orders.len(), 1);
}
