// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::NewProduct;
use crate::state::AppState;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        Some(("stock", sub)) => stock(state, sub)?,
        Some(("low-stock", sub)) => low_stock(state, sub)?,
        Some(("rm", sub)) => rm(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let product = state.add_product(NewProduct {
        sku: sub.get_one::<String>("sku").unwrap().clone(),
        name: sub.get_one::<String>("name").unwrap().clone(),
        category: sub.get_one::<String>("category").unwrap().clone(),
        stock: *sub.get_one::<i64>("stock").unwrap(),
        threshold: *sub.get_one::<i64>("threshold").unwrap(),
        price: parse_decimal(sub.get_one::<String>("price").unwrap())?,
        unit: sub.get_one::<String>("unit").unwrap().clone(),
        description: sub.get_one::<String>("description").cloned(),
    });
    println!("Added product '{}' ({})", product.name, product.id);
    Ok(())
}

fn product_rows(state: &AppState, products: &[crate::models::Product]) -> Vec<Vec<String>> {
    let ccy = &state.settings.currency;
    products
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.sku.clone(),
                p.name.clone(),
                p.category.clone(),
                p.stock.to_string(),
                p.threshold.to_string(),
                fmt_money(&p.price, ccy),
                p.unit.clone(),
            ]
        })
        .collect()
}

const PRODUCT_HEADERS: [&str; 8] = [
    "Id", "SKU", "Name", "Category", "Stock", "Threshold", "Price", "Unit",
];

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &state.products)? {
        println!(
            "{}",
            pretty_table(&PRODUCT_HEADERS, product_rows(state, &state.products))
        );
    }
    Ok(())
}

fn stock(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let delta = *sub.get_one::<i64>("delta").unwrap();
    match state.adjust_stock(id, delta) {
        Some(p) => println!("Stock for '{}' is now {}", p.name, p.stock),
        None => println!("Product '{}' not found", id),
    }
    Ok(())
}

fn low_stock(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let low = state.get_low_stock_products();
    if !maybe_print_json(json_flag, jsonl_flag, &low)? {
        println!("{}", pretty_table(&PRODUCT_HEADERS, product_rows(state, &low)));
    }
    Ok(())
}

fn rm(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if state.delete_product(id) {
        println!("Removed product '{}'", id);
    } else {
        println!("Product '{}' not found", id);
    }
    Ok(())
}
