// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger;
use crate::models::*;
use crate::storage::{bank, customers, invoices, parties, products, purchase_orders, settings};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// In-memory cache of every collection, one facade for the presentation
/// layer. The repositories stay the source of truth: any operation with
/// cross-entity side effects triggers a full reload rather than a local
/// cache patch, so the cache can never diverge from what was persisted.
pub struct AppState {
    conn: Connection,
    pub customers: Vec<Customer>,
    pub parties: Vec<Party>,
    pub products: Vec<Product>,
    pub invoices: Vec<Invoice>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub bank_transactions: Vec<BankTransaction>,
    pub book_entries: Vec<BookEntry>,
    pub settings: AppSettings,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        let mut state = AppState {
            conn,
            customers: Vec::new(),
            parties: Vec::new(),
            products: Vec::new(),
            invoices: Vec::new(),
            purchase_orders: Vec::new(),
            bank_transactions: Vec::new(),
            book_entries: Vec::new(),
            settings: AppSettings::default(),
        };
        state.reload();
        state
    }

    pub fn reload(&mut self) {
        self.customers = customers::get_all(&self.conn);
        self.parties = parties::get_all(&self.conn);
        self.products = products::get_all(&self.conn);
        self.invoices = invoices::get_all(&self.conn);
        self.purchase_orders = purchase_orders::get_all(&self.conn);
        self.bank_transactions = bank::get_transactions(&self.conn);
        self.book_entries = bank::get_entries(&self.conn);
        self.settings = settings::get(&self.conn);
    }

    // Customers

    pub fn add_customer(&mut self, input: NewCustomer) -> Customer {
        let customer = customers::add(&self.conn, input);
        self.customers.push(customer.clone());
        customer
    }

    pub fn update_customer(&mut self, id: &str, patch: CustomerPatch) -> Option<Customer> {
        let updated = customers::update(&self.conn, id, patch);
        if let Some(ref c) = updated {
            if let Some(slot) = self.customers.iter_mut().find(|x| x.id == id) {
                *slot = c.clone();
            }
        }
        updated
    }

    pub fn delete_customer(&mut self, id: &str) -> bool {
        let removed = customers::delete(&self.conn, id);
        if removed {
            self.customers.retain(|c| c.id != id);
        }
        removed
    }

    pub fn get_customer_by_id(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    // Parties

    pub fn add_party(&mut self, input: NewParty) -> Party {
        let party = parties::add(&self.conn, input);
        self.parties.push(party.clone());
        party
    }

    pub fn update_party(&mut self, id: &str, patch: PartyPatch) -> Option<Party> {
        let updated = parties::update(&self.conn, id, patch);
        if let Some(ref p) = updated {
            if let Some(slot) = self.parties.iter_mut().find(|x| x.id == id) {
                *slot = p.clone();
            }
        }
        updated
    }

    pub fn delete_party(&mut self, id: &str) -> bool {
        let removed = parties::delete(&self.conn, id);
        if removed {
            self.parties.retain(|p| p.id != id);
        }
        removed
    }

    pub fn get_party_by_id(&self, id: &str) -> Option<&Party> {
        self.parties.iter().find(|p| p.id == id)
    }

    // Products

    pub fn add_product(&mut self, input: NewProduct) -> Product {
        let product = products::add(&self.conn, input);
        self.products.push(product.clone());
        product
    }

    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> Option<Product> {
        let updated = products::update(&self.conn, id, patch);
        if let Some(ref p) = updated {
            if let Some(slot) = self.products.iter_mut().find(|x| x.id == id) {
                *slot = p.clone();
            }
        }
        updated
    }

    pub fn delete_product(&mut self, id: &str) -> bool {
        let removed = products::delete(&self.conn, id);
        if removed {
            self.products.retain(|p| p.id != id);
        }
        removed
    }

    pub fn get_product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Manual stock correction (stocktake, breakage). Invoice and
    /// purchase-order movements go through the ledger instead.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> Option<Product> {
        let updated = products::update_stock(&self.conn, id, delta);
        if let Some(ref p) = updated {
            if let Some(slot) = self.products.iter_mut().find(|x| x.id == id) {
                *slot = p.clone();
            }
        }
        updated
    }

    pub fn get_low_stock_products(&self) -> Vec<Product> {
        products::get_low_stock(&self.conn)
    }

    // Invoices. These have cross-entity effects on customers and products,
    // so every mutation reloads all collections.

    pub fn add_invoice(&mut self, input: NewInvoice) -> Result<Invoice> {
        let invoice = ledger::create_invoice(&mut self.conn, input)?;
        self.reload();
        Ok(invoice)
    }

    pub fn update_invoice(&mut self, id: &str, patch: InvoicePatch) -> Result<Option<Invoice>> {
        let updated = ledger::update_invoice(&mut self.conn, id, patch)?;
        if updated.is_some() {
            self.reload();
        }
        Ok(updated)
    }

    pub fn delete_invoice(&mut self, id: &str) -> Result<bool> {
        let removed = ledger::delete_invoice(&mut self.conn, id)?;
        if removed {
            self.reload();
        }
        Ok(removed)
    }

    pub fn get_invoice_by_id(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id == id)
    }

    // Purchase orders

    pub fn add_purchase_order(&mut self, input: NewPurchaseOrder) -> PurchaseOrder {
        let po = purchase_orders::add(&self.conn, input);
        self.reload();
        po
    }

    pub fn update_purchase_order(
        &mut self,
        id: &str,
        patch: PurchaseOrderPatch,
    ) -> Option<PurchaseOrder> {
        let updated = purchase_orders::update(&self.conn, id, patch);
        if updated.is_some() {
            self.reload();
        }
        updated
    }

    pub fn delete_purchase_order(&mut self, id: &str) -> bool {
        let removed = purchase_orders::delete(&self.conn, id);
        if removed {
            self.reload();
        }
        removed
    }

    pub fn get_purchase_order_by_id(&self, id: &str) -> Option<&PurchaseOrder> {
        self.purchase_orders.iter().find(|p| p.id == id)
    }

    pub fn receive_stock(&mut self, id: &str) -> Result<Option<PurchaseOrder>> {
        let updated = ledger::receive_stock(&mut self.conn, id)?;
        if updated.is_some() {
            self.reload();
        }
        Ok(updated)
    }

    // Bank reconciliation

    pub fn add_bank_transaction(&mut self, input: NewBankTransaction) -> BankTransaction {
        let txn = bank::add_transaction(&self.conn, input);
        self.bank_transactions.push(txn.clone());
        txn
    }

    pub fn add_book_entry(&mut self, input: NewBookEntry) -> BookEntry {
        let entry = bank::add_entry(&self.conn, input);
        self.book_entries.push(entry.clone());
        entry
    }

    pub fn match_candidates(&self, bank_id: &str) -> Vec<BookEntry> {
        bank::match_candidates(&self.conn, bank_id)
    }

    pub fn match_bank_entry(&mut self, bank_id: &str, book_id: &str) -> Result<bool> {
        let matched = ledger::match_transaction(&mut self.conn, bank_id, book_id)?;
        if matched {
            self.bank_transactions = bank::get_transactions(&self.conn);
            self.book_entries = bank::get_entries(&self.conn);
        }
        Ok(matched)
    }

    // Settings

    pub fn update_settings(&mut self, patch: SettingsPatch) -> AppSettings {
        self.settings = settings::save(&self.conn, patch);
        self.settings.clone()
    }

    pub fn reset_settings(&mut self) -> AppSettings {
        self.settings = settings::reset(&self.conn);
        self.settings.clone()
    }

    /// Demo records for a fresh database; each collection is seeded only if
    /// it is still empty.
    pub fn seed_sample_data(&mut self) {
        if self.customers.is_empty() {
            self.add_customer(NewCustomer {
                name: "Tech Solutions Ltd".to_string(),
                email: "contact@techsolutions.com".to_string(),
                phone: "+91 98765 43210".to_string(),
                address: Some("123 Tech Park, Bangalore".to_string()),
                gst_number: Some("29ABCDE1234F1Z5".to_string()),
            });
            self.add_customer(NewCustomer {
                name: "Global Traders".to_string(),
                email: "info@globaltraders.com".to_string(),
                phone: "+91 98765 43211".to_string(),
                address: Some("456 Trade Center, Mumbai".to_string()),
                gst_number: Some("27FGHIJ5678K2Y4".to_string()),
            });
        }
        if self.products.is_empty() {
            self.add_product(NewProduct {
                sku: "OFF-CHR-001".to_string(),
                name: "Office Chair".to_string(),
                category: "Furniture".to_string(),
                stock: 15,
                threshold: 10,
                price: Decimal::from(5500),
                unit: "pcs".to_string(),
                description: Some("Ergonomic office chair with lumbar support".to_string()),
            });
            self.add_product(NewProduct {
                sku: "STA-PEN-002".to_string(),
                name: "Premium Pen Set".to_string(),
                category: "Stationery".to_string(),
                stock: 45,
                threshold: 20,
                price: Decimal::from(350),
                unit: "sets".to_string(),
                description: Some("Set of 5 premium ballpoint pens".to_string()),
            });
        }
        if self.bank_transactions.is_empty() && self.book_entries.is_empty() {
            let d1 = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
            let d2 = NaiveDate::from_ymd_opt(2024, 1, 16).expect("valid date");
            self.add_bank_transaction(NewBankTransaction {
                date: d1,
                description: "Tech Solutions Ltd".to_string(),
                amount: Decimal::from(45000),
                txn_type: TxnType::Credit,
            });
            self.add_bank_transaction(NewBankTransaction {
                date: d2,
                description: "Office Supplies Purchase".to_string(),
                amount: Decimal::from(8500),
                txn_type: TxnType::Debit,
            });
            self.add_book_entry(NewBookEntry {
                date: d1,
                description: "Invoice Payment".to_string(),
                amount: Decimal::from(45000),
                entry_type: EntryType::Income,
                invoice_id: None,
                po_id: None,
            });
            self.add_book_entry(NewBookEntry {
                date: d2,
                description: "Purchase Order".to_string(),
                amount: Decimal::from(8500),
                entry_type: EntryType::Expense,
                invoice_id: None,
                po_id: None,
            });
        }
    }
}
