// Copyright (c) 2025 Bizbook.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(c: Command) -> Command {
    c.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn customer_cmd() -> Command {
    Command::new("customer")
        .about("Customer directory")
        .subcommand(
            Command::new("add")
                .about("Add a customer")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("phone").long("phone").required(true))
                .arg(Arg::new("address").long("address"))
                .arg(Arg::new("gst").long("gst").help("GST number")),
        )
        .subcommand(json_flags(Command::new("list").about("List customers")))
        .subcommand(
            Command::new("rm")
                .about("Delete a customer (invoices are kept)")
                .arg(Arg::new("id").long("id").required(true)),
        )
}

fn party_cmd() -> Command {
    Command::new("party")
        .about("Party directory (customers and vendors)")
        .subcommand(
            Command::new("add")
                .about("Add a party")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("mobile").long("mobile").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(
                    Arg::new("opening-balance")
                        .long("opening-balance")
                        .default_value("0"),
                )
                .arg(
                    Arg::new("balance-type")
                        .long("balance-type")
                        .default_value("to-collect")
                        .help("to-collect|to-pay"),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .default_value("customer")
                        .help("customer|vendor|both"),
                )
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("gstin").long("gstin"))
                .arg(Arg::new("pan").long("pan"))
                .arg(Arg::new("billing").long("billing").required(true))
                .arg(Arg::new("shipping").long("shipping"))
                .arg(
                    Arg::new("same-as-billing")
                        .long("same-as-billing")
                        .action(ArgAction::SetTrue)
                        .help("Shipping address mirrors the billing address"),
                )
                .arg(
                    Arg::new("credit-period")
                        .long("credit-period")
                        .default_value("0")
                        .value_parser(value_parser!(u32))
                        .help("Days"),
                )
                .arg(
                    Arg::new("credit-limit")
                        .long("credit-limit")
                        .default_value("0"),
                ),
        )
        .subcommand(json_flags(Command::new("list").about("List parties")))
        .subcommand(
            Command::new("rm")
                .about("Delete a party")
                .arg(Arg::new("id").long("id").required(true)),
        )
}

fn product_cmd() -> Command {
    Command::new("product")
        .about("Product inventory")
        .subcommand(
            Command::new("add")
                .about("Add a product")
                .arg(Arg::new("sku").long("sku").required(true))
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(
                    Arg::new("stock")
                        .long("stock")
                        .default_value("0")
                        .value_parser(value_parser!(i64)),
                )
                .arg(
                    Arg::new("threshold")
                        .long("threshold")
                        .default_value("0")
                        .value_parser(value_parser!(i64))
                        .help("Low-stock trigger"),
                )
                .arg(Arg::new("price").long("price").required(true))
                .arg(Arg::new("unit").long("unit").default_value("pcs"))
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(json_flags(Command::new("list").about("List products")))
        .subcommand(
            Command::new("stock")
                .about("Manual stock correction")
                .arg(Arg::new("id").long("id").required(true))
                .arg(
                    Arg::new("delta")
                        .long("delta")
                        .required(true)
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .help("Signed stock adjustment"),
                ),
        )
        .subcommand(json_flags(
            Command::new("low-stock").about("Products below their threshold"),
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete a product")
                .arg(Arg::new("id").long("id").required(true)),
        )
}

fn invoice_cmd() -> Command {
    Command::new("invoice")
        .about("Invoice lifecycle")
        .subcommand(
            Command::new("add")
                .about("Record an invoice (decrements stock, bumps customer totals)")
                .arg(Arg::new("customer").long("customer").required(true).help("Customer id"))
                .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                .arg(Arg::new("due").long("due").help("Due date YYYY-MM-DD"))
                .arg(
                    Arg::new("status")
                        .long("status")
                        .default_value("draft")
                        .help("draft|sent|paid|overdue"),
                )
                .arg(Arg::new("notes").long("notes"))
                .arg(
                    Arg::new("item")
                        .long("item")
                        .action(ArgAction::Append)
                        .help("PRODUCT-ID:QTY, repeatable"),
                ),
        )
        .subcommand(json_flags(Command::new("list").about("List invoices")))
        .subcommand(
            json_flags(Command::new("show").about("Show one invoice"))
                .arg(Arg::new("id").long("id").required(true)),
        )
        .subcommand(
            Command::new("status")
                .about("Set invoice status")
                .arg(Arg::new("id").long("id").required(true))
                .arg(Arg::new("status").long("status").required(true)),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete an invoice (restores stock, reverses customer totals)")
                .arg(Arg::new("id").long("id").required(true)),
        )
}

fn po_cmd() -> Command {
    Command::new("po")
        .about("Purchase orders")
        .subcommand(
            Command::new("add")
                .about("Create a pending purchase order")
                .arg(Arg::new("vendor").long("vendor").required(true))
                .arg(Arg::new("date").long("date").help("YYYY-MM-DD, default today"))
                .arg(
                    Arg::new("item")
                        .long("item")
                        .action(ArgAction::Append)
                        .help("PRODUCT-ID:QTY, repeatable"),
                ),
        )
        .subcommand(json_flags(Command::new("list").about("List purchase orders")))
        .subcommand(
            Command::new("receive")
                .about("Receive stock for a pending order")
                .arg(Arg::new("id").long("id").required(true)),
        )
        .subcommand(
            Command::new("cancel")
                .about("Cancel an order (no stock effect)")
                .arg(Arg::new("id").long("id").required(true)),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete an order (no stock effect)")
                .arg(Arg::new("id").long("id").required(true)),
        )
}

fn bank_cmd() -> Command {
    Command::new("bank")
        .about("Bank reconciliation")
        .subcommand(
            Command::new("add-txn")
                .about("Record a bank statement line")
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("description").long("description").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("type").long("type").required(true).help("credit|debit")),
        )
        .subcommand(
            Command::new("add-entry")
                .about("Record a book entry")
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("description").long("description").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("type").long("type").required(true).help("income|expense"))
                .arg(Arg::new("invoice").long("invoice").help("Related invoice id"))
                .arg(Arg::new("po").long("po").help("Related purchase order id")),
        )
        .subcommand(json_flags(
            Command::new("list").about("List transactions and book entries"),
        ))
        .subcommand(
            json_flags(Command::new("candidates").about("Unmatched book entries of equal amount"))
                .arg(Arg::new("id").long("id").required(true).help("Bank transaction id")),
        )
        .subcommand(
            Command::new("match")
                .about("Match a bank transaction with a book entry")
                .arg(Arg::new("bank").long("bank").required(true))
                .arg(Arg::new("book").long("book").required(true)),
        )
}

fn settings_cmd() -> Command {
    Command::new("settings")
        .about("Company settings")
        .subcommand(json_flags(Command::new("show").about("Show settings")))
        .subcommand(
            Command::new("set")
                .about("Update settings fields")
                .arg(Arg::new("company").long("company"))
                .arg(Arg::new("gst").long("gst"))
                .arg(Arg::new("address").long("address"))
                .arg(Arg::new("bank-name").long("bank-name"))
                .arg(Arg::new("account").long("account"))
                .arg(Arg::new("ifsc").long("ifsc"))
                .arg(Arg::new("currency").long("currency"))
                .arg(Arg::new("tax-rate").long("tax-rate").help("Percent"))
                .arg(Arg::new("prefix").long("prefix").help("Invoice number prefix"))
                .arg(
                    Arg::new("notifications")
                        .long("notifications")
                        .value_parser(value_parser!(bool)),
                ),
        )
        .subcommand(Command::new("reset").about("Restore defaults"))
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Reports")
        .subcommand(
            json_flags(Command::new("pnl").about("Monthly revenue vs purchases")).arg(
                Arg::new("months")
                    .long("months")
                    .default_value("12")
                    .value_parser(value_parser!(usize)),
            ),
        )
        .subcommand(json_flags(
            Command::new("gst").about("Monthly taxable value and tax collected"),
        ))
        .subcommand(json_flags(
            Command::new("low-stock").about("Products below their threshold"),
        ))
}

fn export_cmd() -> Command {
    Command::new("export")
        .about("Export collections to files")
        .subcommand(
            Command::new("invoices")
                .arg(Arg::new("format").long("format").default_value("csv").help("csv|json"))
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("po")
                .arg(Arg::new("format").long("format").default_value("csv").help("csv|json"))
                .arg(Arg::new("out").long("out").required(true)),
        )
}

pub fn build_cli() -> Command {
    Command::new("bizbook")
        .about("Offline small-business invoicing, inventory, and bank reconciliation")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("init").about("Initialize the database").arg(
                Arg::new("sample")
                    .long("sample")
                    .action(ArgAction::SetTrue)
                    .help("Seed demo data into empty collections"),
            ),
        )
        .subcommand(customer_cmd())
        .subcommand(party_cmd())
        .subcommand(product_cmd())
        .subcommand(invoice_cmd())
        .subcommand(po_cmd())
        .subcommand(bank_cmd())
        .subcommand(settings_cmd())
        .subcommand(report_cmd())
        .subcommand(export_cmd())
        .subcommand(Command::new("doctor").about("Audit stored data for inconsistencies"))
}
