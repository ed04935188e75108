// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One repository module per entity kind. Each collection is owned by its
//! repository and persisted as a single JSON value in the kv store;
//! repositories never touch another repository's collection. Cross-entity
//! rules live in [`crate::ledger`].

pub mod bank;
pub mod customers;
pub mod invoices;
pub mod parties;
pub mod products;
pub mod purchase_orders;
pub mod settings;
