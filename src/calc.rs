// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::LineItem;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Line total for a unit price and quantity. Recomputed whenever a line's
/// product or quantity changes; the price itself stays a snapshot.
pub fn line_total(price: Decimal, quantity: i64) -> Decimal {
    price * Decimal::from(quantity)
}

/// Subtotal/tax/total for a sequence of lines. `tax_rate` is a percentage
/// (18 means 18%). An empty item list yields zeros; rejecting empty input
/// is the caller's concern, not this function's.
///
/// Stored totals are not rounded; rounding to two fraction digits happens
/// only at display time.
pub fn calculate_invoice_total(items: &[LineItem], tax_rate: Decimal) -> Totals {
    let subtotal: Decimal = items.iter().map(|i| i.total).sum();
    let tax = subtotal * tax_rate / Decimal::ONE_HUNDRED;
    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
