// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bizbook::calc::line_total;
use bizbook::commands::reports::{gst_summary, monthly_pnl};
use bizbook::db;
use bizbook::models::*;
use bizbook::state::AppState;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn setup() -> AppState {
    AppState::new(db::open_in_memory().expect("in-memory db"))
}

fn seed_invoice(state: &mut AppState, date: NaiveDate, price: i64, qty: i64) {
    let customer = state.add_customer(NewCustomer {
        name: "Acme Traders".to_string(),
        email: "billing@acme.example".to_string(),
        phone: "+91 90000 00001".to_string(),
        address: None,
        gst_number: None,
    });
    let product = state.add_product(NewProduct {
        sku: format!("SKU-{}", state.products.len() + 1),
        name: "Widget".to_string(),
        category: "General".to_string(),
        stock: 100,
        threshold: 0,
        price: Decimal::from(price),
        unit: "pcs".to_string(),
        description: None,
    });
    state
        .add_invoice(NewInvoice {
            customer_id: customer.id,
            customer_name: customer.name,
            date,
            due_date: None,
            items: vec![LineItem {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity: qty,
                price: product.price,
                total: line_total(product.price, qty),
            }],
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
            status: InvoiceStatus::Sent,
            notes: None,
        })
        .expect("create invoice");
}

fn seed_po(state: &mut AppState, date: NaiveDate, total: i64, receive: bool) {
    let po = state.add_purchase_order(NewPurchaseOrder {
        vendor_name: "Cable Works".to_string(),
        date,
        items: Vec::new(),
        total: Decimal::from(total),
        status: PoStatus::Pending,
    });
    if receive {
        state.receive_stock(&po.id).expect("receive").expect("order exists");
    }
}

#[test]
fn pnl_nets_revenue_against_received_purchases_per_month() {
    let mut state = setup();
    let jan = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    let feb = NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date");

    seed_invoice(&mut state, jan, 100, 3); // 354 with 18% tax
    seed_po(&mut state, jan, 2000, true);
    seed_invoice(&mut state, feb, 50, 2); // 118

    let rows = monthly_pnl(&state, 12);
    assert_eq!(rows.len(), 2);

    // Newest month first.
    assert_eq!(rows[0].month, "2024-02");
    assert_eq!(rows[0].revenue, Decimal::from(118));
    assert_eq!(rows[0].purchases, Decimal::ZERO);

    assert_eq!(rows[1].month, "2024-01");
    assert_eq!(rows[1].revenue, Decimal::from(354));
    assert_eq!(rows[1].purchases, Decimal::from(2000));
    assert_eq!(rows[1].net, Decimal::from(-1646));
}

#[test]
fn pnl_ignores_pending_and_cancelled_orders() {
    let mut state = setup();
    let jan = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    seed_po(&mut state, jan, 2000, false);

    let rows = monthly_pnl(&state, 12);
    assert!(rows.is_empty() || rows.iter().all(|r| r.purchases == Decimal::ZERO));
}

#[test]
fn pnl_window_keeps_the_most_recent_months() {
    let mut state = setup();
    for month in 1..=4 {
        let date = NaiveDate::from_ymd_opt(2024, month, 1).expect("valid date");
        seed_invoice(&mut state, date, 100, 1);
    }

    let rows = monthly_pnl(&state, 2);
    let months: Vec<&str> = rows.iter().map(|r| r.month.as_str()).collect();
    assert_eq!(months, vec!["2024-04", "2024-03"]);
}

#[test]
fn gst_summary_splits_taxable_value_from_tax() {
    let mut state = setup();
    let jan = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    seed_invoice(&mut state, jan, 100, 3);
    seed_invoice(&mut state, jan, 200, 1);

    let rows = gst_summary(&state);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].month, "2024-01");
    assert_eq!(rows[0].taxable, Decimal::from(500));
    assert_eq!(rows[0].tax, Decimal::from(90));
}
