// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::{self, keys};
use crate::models::{NewParty, Party, PartyPatch};
use rusqlite::Connection;

pub fn get_all(conn: &Connection) -> Vec<Party> {
    db::kv_get(conn, keys::PARTIES, Vec::new())
}

pub fn save(conn: &Connection, parties: &[Party]) {
    db::kv_set(conn, keys::PARTIES, parties);
}

pub fn add(conn: &Connection, input: NewParty) -> Party {
    let mut parties = get_all(conn);
    let shipping_address = if input.same_as_billing {
        input.billing_address.clone()
    } else {
        input.shipping_address
    };
    let party = Party {
        id: format!("PARTY-{}", db::next_seq(conn, "PARTY")),
        party_name: input.party_name,
        mobile_number: input.mobile_number,
        email: input.email,
        opening_balance: input.opening_balance,
        balance_type: input.balance_type,
        gstin: input.gstin,
        pan_number: input.pan_number,
        party_type: input.party_type,
        party_category: input.party_category,
        billing_address: input.billing_address,
        shipping_address,
        same_as_billing: input.same_as_billing,
        credit_period: input.credit_period,
        credit_limit: input.credit_limit,
    };
    parties.push(party.clone());
    save(conn, &parties);
    party
}

pub fn update(conn: &Connection, id: &str, patch: PartyPatch) -> Option<Party> {
    let mut parties = get_all(conn);
    let p = parties.iter_mut().find(|p| p.id == id)?;
    if let Some(name) = patch.party_name {
        p.party_name = name;
    }
    if let Some(mobile) = patch.mobile_number {
        p.mobile_number = mobile;
    }
    if let Some(email) = patch.email {
        p.email = email;
    }
    if let Some(balance) = patch.opening_balance {
        p.opening_balance = balance;
    }
    if let Some(bt) = patch.balance_type {
        p.balance_type = bt;
    }
    if let Some(gstin) = patch.gstin {
        p.gstin = Some(gstin);
    }
    if let Some(pan) = patch.pan_number {
        p.pan_number = Some(pan);
    }
    if let Some(pt) = patch.party_type {
        p.party_type = pt;
    }
    if let Some(cat) = patch.party_category {
        p.party_category = Some(cat);
    }
    if let Some(billing) = patch.billing_address {
        p.billing_address = billing;
    }
    if let Some(shipping) = patch.shipping_address {
        p.shipping_address = shipping;
    }
    if let Some(flag) = patch.same_as_billing {
        p.same_as_billing = flag;
    }
    if p.same_as_billing {
        p.shipping_address = p.billing_address.clone();
    }
    if let Some(period) = patch.credit_period {
        p.credit_period = period;
    }
    if let Some(limit) = patch.credit_limit {
        p.credit_limit = limit;
    }
    let updated = p.clone();
    save(conn, &parties);
    Some(updated)
}

pub fn delete(conn: &Connection, id: &str) -> bool {
    let mut parties = get_all(conn);
    let before = parties.len();
    parties.retain(|p| p.id != id);
    if parties.len() == before {
        return false;
    }
    save(conn, &parties);
    true
}

pub fn get_by_id(conn: &Connection, id: &str) -> Option<Party> {
    get_all(conn).into_iter().find(|p| p.id == id)
}
