// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bizbook::db::{self, keys};
use bizbook::models::*;
use bizbook::storage::{customers, parties, products, settings};
use rust_decimal::Decimal;

fn conn() -> rusqlite::Connection {
    db::open_in_memory().expect("in-memory db")
}

fn new_customer(name: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "+91 90000 00000".to_string(),
        address: None,
        gst_number: None,
    }
}

fn new_product(sku: &str, stock: i64, threshold: i64) -> NewProduct {
    NewProduct {
        sku: sku.to_string(),
        name: "Thing".to_string(),
        category: "General".to_string(),
        stock,
        threshold,
        price: Decimal::from(100),
        unit: "pcs".to_string(),
        description: None,
    }
}

#[test]
fn ids_come_from_persisted_sequences() {
    let conn = conn();
    let a = customers::add(&conn, new_customer("Alpha"));
    let b = customers::add(&conn, new_customer("Beta"));
    assert_eq!(a.id, "CUST-1");
    assert_eq!(b.id, "CUST-2");

    // Deleting never frees a number.
    assert!(customers::delete(&conn, &b.id));
    let c = customers::add(&conn, new_customer("Gamma"));
    assert_eq!(c.id, "CUST-3");
}

#[test]
fn sequences_are_independent_per_prefix() {
    let conn = conn();
    assert_eq!(db::next_seq(&conn, "invoice_no"), 1);
    assert_eq!(db::next_seq(&conn, "invoice_no"), 2);
    assert_eq!(db::next_seq(&conn, "po_no"), 1);
    assert_eq!(db::next_seq(&conn, "invoice_no"), 3);
}

#[test]
fn update_and_delete_on_absent_ids_are_no_ops() {
    let conn = conn();
    customers::add(&conn, new_customer("Alpha"));
    products::add(&conn, new_product("SKU-1", 5, 0));

    let patch = CustomerPatch {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    assert!(customers::update(&conn, "CUST-404", patch).is_none());
    assert!(!customers::delete(&conn, "CUST-404"));
    assert_eq!(customers::get_all(&conn).len(), 1);

    assert!(products::update_stock(&conn, "PROD-404", 3).is_none());
    assert!(!products::delete(&conn, "PROD-404"));
    assert_eq!(products::get_all(&conn)[0].stock, 5);
}

#[test]
fn patch_only_overwrites_provided_fields() {
    let conn = conn();
    let added = customers::add(&conn, new_customer("Alpha"));

    let updated = customers::update(
        &conn,
        &added.id,
        CustomerPatch {
            phone: Some("+91 91111 11111".to_string()),
            ..Default::default()
        },
    )
    .expect("customer exists");

    assert_eq!(updated.phone, "+91 91111 11111");
    assert_eq!(updated.name, added.name);
    assert_eq!(updated.email, added.email);
}

#[test]
fn corrupt_stored_value_falls_back_to_default() {
    let conn = conn();
    conn.execute(
        "INSERT INTO kv(key, value) VALUES(?1, 'not json at all')",
        [keys::CUSTOMERS],
    )
    .expect("raw insert");

    assert!(customers::get_all(&conn).is_empty());

    // The collection heals on the next write.
    customers::add(&conn, new_customer("Alpha"));
    assert_eq!(customers::get_all(&conn).len(), 1);
}

#[test]
fn kv_round_trips_json() {
    let conn = conn();
    db::kv_set(&conn, "scratch", &vec![1u32, 2, 3]);
    let back: Vec<u32> = db::kv_get(&conn, "scratch", Vec::new());
    assert_eq!(back, vec![1, 2, 3]);
}

#[test]
fn shipping_address_mirrors_billing_when_flagged() {
    let conn = conn();
    let added = parties::add(
        &conn,
        NewParty {
            party_name: "Vendor One".to_string(),
            mobile_number: "+91 92222 22222".to_string(),
            email: "vendor@example.com".to_string(),
            opening_balance: Decimal::ZERO,
            balance_type: BalanceType::ToPay,
            gstin: None,
            pan_number: None,
            party_type: PartyType::Vendor,
            party_category: None,
            billing_address: "12 Market Road".to_string(),
            shipping_address: "ignored".to_string(),
            same_as_billing: true,
            credit_period: 30,
            credit_limit: Decimal::from(10000),
        },
    );
    assert_eq!(added.shipping_address, "12 Market Road");

    let updated = parties::update(
        &conn,
        &added.id,
        PartyPatch {
            billing_address: Some("99 New Street".to_string()),
            ..Default::default()
        },
    )
    .expect("party exists");
    assert_eq!(updated.shipping_address, "99 New Street");
}

#[test]
fn low_stock_is_strictly_below_threshold() {
    let conn = conn();
    products::add(&conn, new_product("SKU-1", 5, 5));
    let low = products::add(&conn, new_product("SKU-2", 4, 5));

    let flagged = products::get_low_stock(&conn);
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].id, low.id);
}

#[test]
fn settings_patch_keeps_unrelated_fields() {
    let conn = conn();
    let s = settings::save(
        &conn,
        SettingsPatch {
            tax_rate: Some(Decimal::from(5)),
            ..Default::default()
        },
    );
    assert_eq!(s.tax_rate, Decimal::from(5));
    assert_eq!(s.currency, "INR");
    assert_eq!(s.invoice_prefix, "INV");
    assert!(s.enable_notifications);

    // Persisted, not just returned.
    assert_eq!(settings::get(&conn).tax_rate, Decimal::from(5));
}

#[test]
fn partially_stored_settings_gain_new_defaults() {
    let conn = conn();
    conn.execute(
        "INSERT INTO kv(key, value) VALUES(?1, '{\"taxRate\":\"5\"}')",
        [keys::SETTINGS],
    )
    .expect("raw insert");

    let s = settings::get(&conn);
    assert_eq!(s.tax_rate, Decimal::from(5));
    assert_eq!(s.currency, "INR");
    assert_eq!(s.user_profile, UserProfile::default());
}

#[test]
fn settings_reset_restores_defaults() {
    let conn = conn();
    settings::save(
        &conn,
        SettingsPatch {
            currency: Some("USD".to_string()),
            invoice_prefix: Some("BILL".to_string()),
            ..Default::default()
        },
    );
    let s = settings::reset(&conn);
    assert_eq!(s, AppSettings::default());
    assert_eq!(settings::get(&conn), AppSettings::default());
}
