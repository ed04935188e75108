// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub gst_number: Option<String>,
    /// Count of invoices issued to this customer. Maintained by the ledger.
    pub total_invoices: u32,
    /// Sum of invoice totals issued to this customer. Maintained by the ledger.
    pub total_amount: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub gst_number: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gst_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BalanceType {
    ToCollect,
    ToPay,
}

impl BalanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceType::ToCollect => "to-collect",
            BalanceType::ToPay => "to-pay",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "to-collect" | "toCollect" => Some(BalanceType::ToCollect),
            "to-pay" | "toPay" => Some(BalanceType::ToPay),
            _ => None,
        }
    }
}

impl fmt::Display for BalanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyType {
    Customer,
    Vendor,
    Both,
}

impl PartyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartyType::Customer => "customer",
            PartyType::Vendor => "vendor",
            PartyType::Both => "both",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(PartyType::Customer),
            "vendor" => Some(PartyType::Vendor),
            "both" => Some(PartyType::Both),
            _ => None,
        }
    }
}

impl fmt::Display for PartyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory record for the parties ledger. Independent of [`Customer`]:
/// no relationship is enforced between the two directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub party_name: String,
    pub mobile_number: String,
    pub email: String,
    /// Signed by `balance_type`.
    pub opening_balance: Decimal,
    pub balance_type: BalanceType,
    pub gstin: Option<String>,
    pub pan_number: Option<String>,
    pub party_type: PartyType,
    pub party_category: Option<String>,
    pub billing_address: String,
    /// Mirrors `billing_address` while `same_as_billing` is set.
    pub shipping_address: String,
    pub same_as_billing: bool,
    /// Days.
    pub credit_period: u32,
    pub credit_limit: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewParty {
    pub party_name: String,
    pub mobile_number: String,
    pub email: String,
    pub opening_balance: Decimal,
    pub balance_type: BalanceType,
    pub gstin: Option<String>,
    pub pan_number: Option<String>,
    pub party_type: PartyType,
    pub party_category: Option<String>,
    pub billing_address: String,
    pub shipping_address: String,
    pub same_as_billing: bool,
    pub credit_period: u32,
    pub credit_limit: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct PartyPatch {
    pub party_name: Option<String>,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
    pub opening_balance: Option<Decimal>,
    pub balance_type: Option<BalanceType>,
    pub gstin: Option<String>,
    pub pan_number: Option<String>,
    pub party_type: Option<PartyType>,
    pub party_category: Option<String>,
    pub billing_address: Option<String>,
    pub shipping_address: Option<String>,
    pub same_as_billing: Option<bool>,
    pub credit_period: Option<u32>,
    pub credit_limit: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    /// May go negative: oversold inventory is recorded, not blocked.
    pub stock: i64,
    /// Low-stock trigger: low stock means `stock < threshold`.
    pub threshold: i64,
    pub price: Decimal,
    pub unit: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub threshold: i64,
    pub price: Decimal,
    pub unit: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i64>,
    pub threshold: Option<i64>,
    pub price: Option<Decimal>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

/// One invoice or purchase-order line. `product_name` and `price` are
/// snapshots taken when the line's product was selected; they are not
/// re-fetched if the product changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub price: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(InvoiceStatus::Draft),
            "sent" => Some(InvoiceStatus::Sent),
            "paid" => Some(InvoiceStatus::Paid),
            "overdue" => Some(InvoiceStatus::Overdue),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    /// `{prefix}-{4-digit sequence}`.
    pub invoice_number: String,
    pub customer_id: String,
    /// Snapshot of the customer name at creation time.
    pub customer_name: String,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
}

/// Invoice minus the server-assigned fields (`id`, `invoice_number`).
/// Totals are recomputed by the ledger before insertion.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub customer_id: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct InvoicePatch {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub items: Option<Vec<LineItem>>,
    pub subtotal: Option<Decimal>,
    pub tax: Option<Decimal>,
    pub total: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoStatus {
    Pending,
    Received,
    Cancelled,
}

impl PoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoStatus::Pending => "pending",
            PoStatus::Received => "received",
            PoStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for PoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    /// `PO-{1000 + sequence}`.
    pub po_number: String,
    /// Free text; no party/vendor reference is kept.
    pub vendor_name: String,
    pub date: NaiveDate,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub status: PoStatus,
}

#[derive(Debug, Clone)]
pub struct NewPurchaseOrder {
    pub vendor_name: String,
    pub date: NaiveDate,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub status: PoStatus,
}

#[derive(Debug, Clone, Default)]
pub struct PurchaseOrderPatch {
    pub vendor_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub items: Option<Vec<LineItem>>,
    pub total: Option<Decimal>,
    pub status: Option<PoStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    Credit,
    Debit,
}

impl TxnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxnType::Credit => "credit",
            TxnType::Debit => "debit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "credit" => Some(TxnType::Credit),
            "debit" => Some(TxnType::Debit),
            _ => None,
        }
    }
}

impl fmt::Display for TxnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "income",
            EntryType::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(EntryType::Income),
            "expense" => Some(EntryType::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statement line imported from the bank side of a reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    /// Unsigned; direction is carried by `txn_type`.
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    pub matched: bool,
    /// Id of the matched [`BookEntry`]; mutual with its `matched_with`.
    pub matched_with: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewBankTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub txn_type: TxnType,
}

/// Book side of a reconciliation, optionally pointing back at the invoice
/// or purchase order it records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntry {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub matched: bool,
    pub matched_with: Option<String>,
    pub invoice_id: Option<String>,
    pub po_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewBookEntry {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub entry_type: EntryType,
    pub invoice_id: Option<String>,
    pub po_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: "Admin User".to_string(),
            email: "admin@business.com".to_string(),
            phone: "+91 98765 43210".to_string(),
        }
    }
}

/// Process-wide singleton settings record. Container-level `default` keeps
/// the merge direction defaults-then-stored: fields added after a save
/// still surface with their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub company_name: String,
    pub gst_number: String,
    pub address: String,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub currency: String,
    /// Percent: 18 means 18%.
    pub tax_rate: Decimal,
    pub invoice_prefix: String,
    pub enable_notifications: bool,
    pub user_profile: UserProfile,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            company_name: String::new(),
            gst_number: String::new(),
            address: String::new(),
            bank_name: String::new(),
            account_number: String::new(),
            ifsc_code: String::new(),
            currency: "INR".to_string(),
            tax_rate: Decimal::from(18),
            invoice_prefix: "INV".to_string(),
            enable_notifications: true,
            user_profile: UserProfile::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub company_name: Option<String>,
    pub gst_number: Option<String>,
    pub address: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub ifsc_code: Option<String>,
    pub currency: Option<String>,
    pub tax_rate: Option<Decimal>,
    pub invoice_prefix: Option<String>,
    pub enable_notifications: Option<bool>,
    pub user_profile: Option<UserProfile>,
}
