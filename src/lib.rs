// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod calc;
pub mod cli;
pub mod commands;
pub mod db;
pub mod ledger;
pub mod models;
pub mod state;
pub mod storage;
pub mod utils;
