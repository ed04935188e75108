// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{self, keys};
use crate::models::{AppSettings, SettingsPatch};
use rusqlite::Connection;

/// Defaults overlaid by whatever was stored. Fields missing from the stored
/// record (added after an older save) come back with their default value.
pub fn get(conn: &Connection) -> AppSettings {
    db::kv_get(conn, keys::SETTINGS, AppSettings::default())
}

/// Shallow-merge the patch onto the current record and persist the full
/// result. Returns the merged settings.
pub fn save(conn: &Connection, patch: SettingsPatch) -> AppSettings {
    let mut s = get(conn);
    if let Some(company_name) = patch.company_name {
        s.company_name = company_name;
    }
    if let Some(gst_number) = patch.gst_number {
        s.gst_number = gst_number;
    }
    if let Some(address) = patch.address {
        s.address = address;
    }
    if let Some(bank_name) = patch.bank_name {
        s.bank_name = bank_name;
    }
    if let Some(account_number) = patch.account_number {
        s.account_number = account_number;
    }
    if let Some(ifsc_code) = patch.ifsc_code {
        s.ifsc_code = ifsc_code;
    }
    if let Some(currency) = patch.currency {
        s.currency = currency;
    }
    if let Some(tax_rate) = patch.tax_rate {
        s.tax_rate = tax_rate;
    }
    if let Some(invoice_prefix) = patch.invoice_prefix {
        s.invoice_prefix = invoice_prefix;
    }
    if let Some(enable_notifications) = patch.enable_notifications {
        s.enable_notifications = enable_notifications;
    }
    if let Some(user_profile) = patch.user_profile {
        s.user_profile = user_profile;
    }
    db::kv_set(conn, keys::SETTINGS, &s);
    s
}

pub fn reset(conn: &Connection) -> AppSettings {
    let s = AppSettings::default();
    db::kv_set(conn, keys::SETTINGS, &s);
    s
}
