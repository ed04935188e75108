// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bizbook::calc::{calculate_invoice_total, line_total};
use bizbook::models::LineItem;
use rust_decimal::Decimal;

fn item(price: i64, qty: i64) -> LineItem {
    let price = Decimal::from(price);
    LineItem {
        product_id: "PROD-1".to_string(),
        product_name: "Widget".to_string(),
        quantity: qty,
        price,
        total: line_total(price, qty),
    }
}

#[test]
fn totals_sum_lines_and_apply_tax() {
    let items = vec![item(100, 3)];
    let t = calculate_invoice_total(&items, Decimal::from(18));
    assert_eq!(t.subtotal, Decimal::from(300));
    assert_eq!(t.tax, Decimal::from(54));
    assert_eq!(t.total, Decimal::from(354));
}

#[test]
fn empty_items_yield_zeros() {
    let t = calculate_invoice_total(&[], Decimal::from(18));
    assert_eq!(t.subtotal, Decimal::ZERO);
    assert_eq!(t.tax, Decimal::ZERO);
    assert_eq!(t.total, Decimal::ZERO);
}

#[test]
fn multiple_lines_accumulate() {
    let items = vec![item(5500, 2), item(350, 4)];
    let t = calculate_invoice_total(&items, Decimal::from(18));
    assert_eq!(t.subtotal, Decimal::from(12400));
    assert_eq!(t.tax, Decimal::from(2232));
    assert_eq!(t.total, Decimal::from(14632));
}

#[test]
fn zero_rate_means_no_tax() {
    let items = vec![item(250, 2)];
    let t = calculate_invoice_total(&items, Decimal::ZERO);
    assert_eq!(t.tax, Decimal::ZERO);
    assert_eq!(t.total, t.subtotal);
}

#[test]
fn fractional_tax_keeps_decimal_precision() {
    let items = vec![item(199, 1)];
    let t = calculate_invoice_total(&items, Decimal::from(5));
    assert_eq!(t.tax, Decimal::from_str_exact("9.95").unwrap());
    assert_eq!(t.total, Decimal::from_str_exact("208.95").unwrap());
}
