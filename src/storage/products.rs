// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{self, keys};
use crate::models::{NewProduct, Product, ProductPatch};
use rusqlite::Connection;

pub fn get_all(conn: &Connection) -> Vec<Product> {
    db::kv_get(conn, keys::PRODUCTS, Vec::new())
}

pub fn save(conn: &Connection, products: &[Product]) {
    db::kv_set(conn, keys::PRODUCTS, products);
}

pub fn add(conn: &Connection, input: NewProduct) -> Product {
    let mut products = get_all(conn);
    let product = Product {
        id: format!("PROD-{}", db::next_seq(conn, "PROD")),
        sku: input.sku,
        name: input.name,
        category: input.category,
        stock: input.stock,
        threshold: input.threshold,
        price: input.price,
        unit: input.unit,
        description: input.description,
    };
    products.push(product.clone());
    save(conn, &products);
    product
}

pub fn update(conn: &Connection, id: &str, patch: ProductPatch) -> Option<Product> {
    let mut products = get_all(conn);
    let p = products.iter_mut().find(|p| p.id == id)?;
    if let Some(sku) = patch.sku {
        p.sku = sku;
    }
    if let Some(name) = patch.name {
        p.name = name;
    }
    if let Some(category) = patch.category {
        p.category = category;
    }
    if let Some(stock) = patch.stock {
        p.stock = stock;
    }
    if let Some(threshold) = patch.threshold {
        p.threshold = threshold;
    }
    if let Some(price) = patch.price {
        p.price = price;
    }
    if let Some(unit) = patch.unit {
        p.unit = unit;
    }
    if let Some(description) = patch.description {
        p.description = Some(description);
    }
    let updated = p.clone();
    save(conn, &products);
    Some(updated)
}

pub fn delete(conn: &Connection, id: &str) -> bool {
    let mut products = get_all(conn);
    let before = products.len();
    products.retain(|p| p.id != id);
    if products.len() == before {
        return false;
    }
    save(conn, &products);
    true
}

pub fn get_by_id(conn: &Connection, id: &str) -> Option<Product> {
    get_all(conn).into_iter().find(|p| p.id == id)
}

/// Add `delta` (signed) to the product's stock. No floor: stock may go
/// negative, recording oversold inventory instead of blocking the sale.
pub fn update_stock(conn: &Connection, id: &str, delta: i64) -> Option<Product> {
    let mut products = get_all(conn);
    let p = products.iter_mut().find(|p| p.id == id)?;
    p.stock += delta;
    let updated = p.clone();
    save(conn, &products);
    Some(updated)
}

pub fn get_low_stock(conn: &Connection) -> Vec<Product> {
    get_all(conn)
        .into_iter()
        .filter(|p| p.stock < p.threshold)
        .collect()
}
