// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.bizbook", "Bizbook", "bizbook"));

/// Logical collection keys. Exactly one JSON value is stored per key.
pub mod keys {
    pub const CUSTOMERS: &str = "customers";
    pub const PARTIES: &str = "parties";
    pub const PRODUCTS: &str = "products";
    pub const INVOICES: &str = "invoices";
    pub const PURCHASE_ORDERS: &str = "purchase_orders";
    pub const BANK_TRANSACTIONS: &str = "bank_transactions";
    pub const BOOK_ENTRIES: &str = "book_entries";
    pub const SETTINGS: &str = "settings";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("bizbook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

/// In-memory database with the same schema; used by the test suite.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS sequences(
        prefix TEXT PRIMARY KEY,
        next INTEGER NOT NULL
    );
    "#,
    )?;
    Ok(())
}

fn kv_read(conn: &Connection, key: &str) -> Result<Option<String>, StoreError> {
    let v = conn
        .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(v)
}

/// Read the JSON value stored under `key`, falling back to `default` on a
/// missing key or a decode failure. Failures are logged, never propagated.
pub fn kv_get<T: DeserializeOwned>(conn: &Connection, key: &str, default: T) -> T {
    match kv_read(conn, key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored value is not valid JSON, using default");
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(key, error = %e, "read failed, using default");
            default
        }
    }
}

/// Serialize `value` to JSON and persist it under `key`. A persistence
/// failure is logged and swallowed: the in-memory state stays valid for the
/// rest of the session even if this write is lost.
pub fn kv_set<T: Serialize + ?Sized>(conn: &Connection, key: &str, value: &T) {
    let res: Result<(), StoreError> = (|| {
        let raw = serde_json::to_string(value)?;
        conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, raw],
        )?;
        Ok(())
    })();
    if let Err(e) = res {
        tracing::warn!(key, error = %e, "persist failed, keeping in-memory state");
    }
}

/// Allocate the next value of the persisted monotonic sequence for `prefix`.
/// Sequences back entity ids and document numbers, so deletions never cause
/// a number to be reused.
pub fn next_seq(conn: &Connection, prefix: &str) -> i64 {
    let res = conn.query_row(
        "INSERT INTO sequences(prefix, next) VALUES(?1, 1)
         ON CONFLICT(prefix) DO UPDATE SET next = next + 1
         RETURNING next",
        params![prefix],
        |r| r.get(0),
    );
    match res {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(prefix, error = %e, "sequence allocation failed");
            0
        }
    }
}
