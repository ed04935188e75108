// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{self, keys};
use crate::models::{BankTransaction, BookEntry, NewBankTransaction, NewBookEntry};
use rusqlite::Connection;

pub fn get_transactions(conn: &Connection) -> Vec<BankTransaction> {
    db::kv_get(conn, keys::BANK_TRANSACTIONS, Vec::new())
}

pub fn save_transactions(conn: &Connection, txns: &[BankTransaction]) {
    db::kv_set(conn, keys::BANK_TRANSACTIONS, txns);
}

pub fn get_entries(conn: &Connection) -> Vec<BookEntry> {
    db::kv_get(conn, keys::BOOK_ENTRIES, Vec::new())
}

pub fn save_entries(conn: &Connection, entries: &[BookEntry]) {
    db::kv_set(conn, keys::BOOK_ENTRIES, entries);
}

pub fn add_transaction(conn: &Connection, input: NewBankTransaction) -> BankTransaction {
    let mut txns = get_transactions(conn);
    let txn = BankTransaction {
        id: format!("BTXN-{}", db::next_seq(conn, "BTXN")),
        date: input.date,
        description: input.description,
        amount: input.amount,
        txn_type: input.txn_type,
        matched: false,
        matched_with: None,
    };
    txns.push(txn.clone());
    save_transactions(conn, &txns);
    txn
}

pub fn add_entry(conn: &Connection, input: NewBookEntry) -> BookEntry {
    let mut entries = get_entries(conn);
    let entry = BookEntry {
        id: format!("BOOK-{}", db::next_seq(conn, "BOOK")),
        date: input.date,
        description: input.description,
        amount: input.amount,
        entry_type: input.entry_type,
        matched: false,
        matched_with: None,
        invoice_id: input.invoice_id,
        po_id: input.po_id,
    };
    entries.push(entry.clone());
    save_entries(conn, &entries);
    entry
}

/// Book entries that may be paired with the given bank transaction:
/// unmatched entries of exactly equal amount. No date or description
/// weighting, no tolerance. An unknown transaction id yields no candidates.
pub fn match_candidates(conn: &Connection, bank_id: &str) -> Vec<BookEntry> {
    let txns = get_transactions(conn);
    let Some(txn) = txns.iter().find(|t| t.id == bank_id) else {
        return Vec::new();
    };
    get_entries(conn)
        .into_iter()
        .filter(|e| !e.matched && e.amount == txn.amount)
        .collect()
}
