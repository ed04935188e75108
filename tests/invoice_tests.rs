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

fn sample_customer(state: &mut AppState) -> Customer {
    state.add_customer(NewCustomer {
        name: "Acme Traders".to_string(),
        email: "billing@acme.example".to_string(),
        phone: "+91 90000 00001".to_string(),
        address: None,
        gst_number: None,
    })
}

fn sample_product(state: &mut AppState, stock: i64, threshold: i64, price: i64) -> Product {
    state.add_product(NewProduct {
        sku: "WID-001".to_string(),
        name: "Widget".to_string(),
        category: "General".to_string(),
        stock,
        threshold,
        price: Decimal::from(price),
        unit: "pcs".to_string(),
        description: None,
    })
}

fn line(product: &Product, quantity: i64) -> LineItem {
    LineItem {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        quantity,
        price: product.price,
        total: line_total(product.price, quantity),
    }
}

fn new_invoice(customer: &Customer, items: Vec<LineItem>) -> NewInvoice {
    NewInvoice {
        customer_id: customer.id.clone(),
        customer_name: customer.name.clone(),
        date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        due_date: None,
        items,
        subtotal: Decimal::ZERO,
        tax: Decimal::ZERO,
        total: Decimal::ZERO,
        status: InvoiceStatus::Draft,
        notes: None,
    }
}

#[test]
fn creating_invoice_totals_stock_and_customer_move_together() {
    let mut state = setup();
    let customer = sample_customer(&mut state);
    let product = sample_product(&mut state, 10, 5, 100);

    let invoice = state
        .add_invoice(new_invoice(&customer, vec![line(&product, 3)]))
        .expect("create invoice");

    assert_eq!(invoice.invoice_number, "INV-0001");
    assert_eq!(invoice.subtotal, Decimal::from(300));
    assert_eq!(invoice.tax, Decimal::from(54));
    assert_eq!(invoice.total, Decimal::from(354));

    let product = state.get_product_by_id(&product.id).expect("product");
    assert_eq!(product.stock, 7);

    let customer = state.get_customer_by_id(&customer.id).expect("customer");
    assert_eq!(customer.total_invoices, 1);
    assert_eq!(customer.total_amount, Decimal::from(354));
}

#[test]
fn stock_may_go_negative() {
    let mut state = setup();
    let customer = sample_customer(&mut state);
    let product = sample_product(&mut state, 2, 0, 50);

    state
        .add_invoice(new_invoice(&customer, vec![line(&product, 5)]))
        .expect("create invoice");

    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, -3);
}

#[test]
fn unknown_customer_still_records_the_invoice() {
    let mut state = setup();
    let known = sample_customer(&mut state);
    let product = sample_product(&mut state, 10, 0, 100);

    let mut input = new_invoice(&known, vec![line(&product, 1)]);
    input.customer_id = "CUST-999".to_string();
    input.customer_name = "Ghost Ltd".to_string();
    let invoice = state.add_invoice(input).expect("create invoice");

    assert!(state.get_invoice_by_id(&invoice.id).is_some());
    // Stock still moves, no customer aggregates to bump.
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 9);
    let known = state.get_customer_by_id(&known.id).expect("customer");
    assert_eq!(known.total_invoices, 0);
}

#[test]
fn line_for_deleted_product_is_skipped_not_rejected() {
    let mut state = setup();
    let customer = sample_customer(&mut state);
    let product = sample_product(&mut state, 10, 0, 100);

    let mut ghost = line(&product, 2);
    ghost.product_id = "PROD-999".to_string();
    let invoice = state
        .add_invoice(new_invoice(&customer, vec![line(&product, 1), ghost]))
        .expect("create invoice");

    // Both lines priced into the totals, only the live product's stock moves.
    assert_eq!(invoice.subtotal, Decimal::from(300));
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 9);
}

#[test]
fn invoice_numbers_are_never_reused() {
    let mut state = setup();
    let customer = sample_customer(&mut state);
    let product = sample_product(&mut state, 100, 0, 10);

    let first = state
        .add_invoice(new_invoice(&customer, vec![line(&product, 1)]))
        .expect("create invoice");
    assert_eq!(first.invoice_number, "INV-0001");

    assert!(state.delete_invoice(&first.id).expect("delete invoice"));

    let second = state
        .add_invoice(new_invoice(&customer, vec![line(&product, 1)]))
        .expect("create invoice");
    assert_eq!(second.invoice_number, "INV-0002");
}

#[test]
fn invoice_number_uses_the_configured_prefix() {
    let mut state = setup();
    let customer = sample_customer(&mut state);
    let product = sample_product(&mut state, 10, 0, 10);

    state.update_settings(SettingsPatch {
        invoice_prefix: Some("ACME".to_string()),
        ..Default::default()
    });

    let invoice = state
        .add_invoice(new_invoice(&customer, vec![line(&product, 1)]))
        .expect("create invoice");
    assert_eq!(invoice.invoice_number, "ACME-0001");
}

#[test]
fn deleting_an_invoice_reverses_its_side_effects() {
    let mut state = setup();
    let customer = sample_customer(&mut state);
    let product = sample_product(&mut state, 10, 5, 100);

    let invoice = state
        .add_invoice(new_invoice(&customer, vec![line(&product, 3)]))
        .expect("create invoice");
    assert!(state.delete_invoice(&invoice.id).expect("delete invoice"));

    assert!(state.get_invoice_by_id(&invoice.id).is_none());
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 10);
    let customer = state.get_customer_by_id(&customer.id).expect("customer");
    assert_eq!(customer.total_invoices, 0);
    assert_eq!(customer.total_amount, Decimal::ZERO);
}

#[test]
fn updating_items_reconciles_stock_and_amounts() {
    let mut state = setup();
    let customer = sample_customer(&mut state);
    let product = sample_product(&mut state, 10, 5, 100);

    let invoice = state
        .add_invoice(new_invoice(&customer, vec![line(&product, 3)]))
        .expect("create invoice");
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 7);

    let fresh = state.get_product_by_id(&product.id).expect("product").clone();
    let updated = state
        .update_invoice(
            &invoice.id,
            InvoicePatch {
                items: Some(vec![line(&fresh, 5)]),
                ..Default::default()
            },
        )
        .expect("update invoice")
        .expect("invoice exists");

    // Old lines restored, new lines applied: 10 - 5.
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 5);
    assert_eq!(updated.total, Decimal::from(590));

    let customer = state.get_customer_by_id(&customer.id).expect("customer");
    assert_eq!(customer.total_invoices, 1);
    assert_eq!(customer.total_amount, Decimal::from(590));
}

#[test]
fn status_change_leaves_stock_and_aggregates_alone() {
    let mut state = setup();
    let customer = sample_customer(&mut state);
    let product = sample_product(&mut state, 10, 5, 100);

    let invoice = state
        .add_invoice(new_invoice(&customer, vec![line(&product, 3)]))
        .expect("create invoice");
    let updated = state
        .update_invoice(
            &invoice.id,
            InvoicePatch {
                status: Some(InvoiceStatus::Paid),
                ..Default::default()
            },
        )
        .expect("update invoice")
        .expect("invoice exists");

    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 7);
    let customer = state.get_customer_by_id(&customer.id).expect("customer");
    assert_eq!(customer.total_amount, Decimal::from(354));
}

#[test]
fn absent_invoice_update_and_delete_are_no_ops() {
    let mut state = setup();
    let customer = sample_customer(&mut state);
    let product = sample_product(&mut state, 10, 5, 100);
    state
        .add_invoice(new_invoice(&customer, vec![line(&product, 1)]))
        .expect("create invoice");

    let patch = InvoicePatch {
        status: Some(InvoiceStatus::Paid),
        ..Default::default()
    };
    assert!(state.update_invoice("INV-404", patch).expect("update").is_none());
    assert!(!state.delete_invoice("INV-404").expect("delete"));
    assert_eq!(state.invoices.len(), 1);
    assert_eq!(state.get_product_by_id(&product.id).expect("product").stock, 9);
}

#[test]
fn cli_rejects_an_invoice_with_no_items() {
    let mut state = setup();
    let customer = sample_customer(&mut state);

    let matches = bizbook::cli::build_cli().get_matches_from([
        "bizbook", "invoice", "add", "--customer", &customer.id,
    ]);
    let Some(("invoice", sub)) = matches.subcommand() else {
        panic!("expected invoice subcommand");
    };
    assert!(bizbook::commands::invoices::handle(&mut state, sub).is_err());
    assert!(state.invoices.is_empty());
}
