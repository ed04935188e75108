// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bank;
pub mod customers;
pub mod doctor;
pub mod exporter;
pub mod invoices;
pub mod parties;
pub mod products;
pub mod purchase_orders;
pub mod reports;
pub mod settings;
