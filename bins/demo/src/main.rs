//! Ledger showcase for Folio development and testing.
//!
//! Seeds a small chart of accounts, posts a month of activity, and prints
//! projected ledger views, including the filtered views export
//! collaborators would consume.
//!
//! Usage: cargo run --bin demo

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::ledger::{
    AccountType, GeneralLedger, JournalLine, LedgerQuery, LedgerRow, Side,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_core=info,demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ledger = GeneralLedger::new();

    println!("Seeding chart of accounts...");
    seed_accounts(&ledger)?;

    println!("Posting January activity...");
    post_activity(&ledger)?;
    let entries = ledger.entry_count()?;
    info!(entries, "ledger populated");

    println!();
    println!("Full ledger:");
    print_rows(&ledger.query_ledger(&LedgerQuery::default())?);

    println!();
    println!("Cash only:");
    print_rows(&ledger.query_ledger(&LedgerQuery::for_account("1000"))?);

    println!();
    println!("January 10-20 window:");
    let window = LedgerQuery::between(date(2026, 1, 10)?, date(2026, 1, 20)?);
    print_rows(&ledger.query_ledger(&window)?);

    println!();
    println!("Rejected entry:");
    let err = ledger
        .post_entry(
            date(2026, 1, 31)?,
            "Does not balance",
            vec![
                JournalLine::new("1000", Side::Debit, Decimal::new(5000, 2)),
                JournalLine::new("4000", Side::Credit, Decimal::new(4000, 2)),
            ],
        )
        .expect_err("unbalanced entry must be rejected");
    println!("  {} ({})", err, err.error_code());

    println!();
    println!("Export sample (first row as JSON):");
    let rows = ledger.query_ledger(&LedgerQuery::default())?;
    if let Some(first) = rows.first() {
        println!("  {}", serde_json::to_string(first)?);
    }

    println!();
    println!("Showcase complete!");
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).context("invalid calendar date")
}

fn seed_accounts(ledger: &GeneralLedger) -> anyhow::Result<()> {
    ledger.create_account("1000", "Cash", AccountType::Asset, Decimal::new(150_000, 2))?;
    ledger.create_account("1200", "Accounts Receivable", AccountType::Asset, Decimal::ZERO)?;
    ledger.create_account("2000", "Accounts Payable", AccountType::Liability, Decimal::ZERO)?;
    ledger.create_account("3000", "Owner Equity", AccountType::Equity, Decimal::new(150_000, 2))?;
    ledger.create_account("4000", "Sales", AccountType::Revenue, Decimal::ZERO)?;
    ledger.create_account("5000", "Rent Expense", AccountType::Expense, Decimal::ZERO)?;
    ledger.create_account("5100", "Supplies Expense", AccountType::Expense, Decimal::ZERO)?;

    for account in ledger.list_accounts(None)? {
        println!("  {} {} ({})", account.id, account.name, account.account_type);
    }
    Ok(())
}

fn post_activity(ledger: &GeneralLedger) -> anyhow::Result<()> {
    // Cash sale.
    ledger.post_entry(
        date(2026, 1, 5)?,
        "Cash sale",
        vec![
            JournalLine::new("1000", Side::Debit, Decimal::new(80_000, 2)),
            JournalLine::new("4000", Side::Credit, Decimal::new(80_000, 2)),
        ],
    )?;

    // Sale on credit, partly received in cash.
    ledger.post_entry(
        date(2026, 1, 12)?,
        "Invoice 2026-001",
        vec![
            JournalLine::new("1000", Side::Debit, Decimal::new(20_000, 2)),
            JournalLine::new("1200", Side::Debit, Decimal::new(30_000, 2)),
            JournalLine::new("4000", Side::Credit, Decimal::new(50_000, 2)),
        ],
    )?;

    // Office rent, on account.
    ledger.post_entry(
        date(2026, 1, 15)?,
        "January rent",
        vec![
            JournalLine::new("5000", Side::Debit, Decimal::new(45_000, 2)),
            JournalLine::new("2000", Side::Credit, Decimal::new(45_000, 2)),
        ],
    )?;

    // Supplies paid in cash.
    ledger.post_entry(
        date(2026, 1, 18)?,
        "Office supplies",
        vec![
            JournalLine::new("5100", Side::Debit, Decimal::new(12_500, 2)),
            JournalLine::new("1000", Side::Credit, Decimal::new(12_500, 2)),
        ],
    )?;

    // Partial refund of the cash sale.
    ledger.post_entry(
        date(2026, 1, 25)?,
        "Refund on cash sale",
        vec![
            JournalLine::new("4000", Side::Debit, Decimal::new(10_000, 2)),
            JournalLine::new("1000", Side::Credit, Decimal::new(10_000, 2)),
        ],
    )?;

    Ok(())
}

fn print_rows(rows: &[LedgerRow]) {
    println!(
        "  {:<10} {:<22} {:<20} {:>10} {:>10} {:>12}",
        "Date", "Account", "Description", "Debit", "Credit", "Balance"
    );
    for row in rows {
        let (debit, credit) = match row.side {
            Side::Debit => (row.amount.to_string(), String::new()),
            Side::Credit => (String::new(), row.amount.to_string()),
        };
        let date = row.date.to_string();
        let balance = row.running_balance.to_string();
        println!(
            "  {:<10} {:<22} {:<20} {:>10} {:>10} {:>12}",
            date, row.account_name, row.description, debit, credit, balance
        );
    }
}
