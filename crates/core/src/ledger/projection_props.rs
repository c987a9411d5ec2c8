//! Property-based tests for the running-balance projection.

use std::collections::HashMap;

use chrono::{Days, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::account::{Account, AccountType, NormalBalance};
use super::entry::{JournalEntry, JournalLine, Side};
use super::id::EntryId;
use super::projection::{LedgerQuery, project};

const ACCOUNT_IDS: [&str; 5] = ["asset", "liability", "equity", "revenue", "expense"];
const ACCOUNT_TYPES: [AccountType; 5] = [
    AccountType::Asset,
    AccountType::Liability,
    AccountType::Equity,
    AccountType::Revenue,
    AccountType::Expense,
];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
}

fn five_accounts(openings: [Decimal; 5]) -> Vec<Account> {
    ACCOUNT_IDS
        .iter()
        .zip(ACCOUNT_TYPES)
        .zip(openings)
        .map(|((id, account_type), opening_balance)| Account {
            id: (*id).into(),
            name: id.to_uppercase(),
            account_type,
            opening_balance,
            created_at: Utc::now(),
        })
        .collect()
}

/// One random movement: day offset, debit account, credit account, cents.
type Movement = (u64, usize, usize, i64);

fn movements_strategy() -> impl Strategy<Value = Vec<Movement>> {
    prop::collection::vec((0u64..28, 0usize..5, 0usize..5, 1i64..1_000_000i64), 0..12)
}

fn openings_strategy() -> impl Strategy<Value = [Decimal; 5]> {
    prop::array::uniform5((-100_000i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2)))
}

/// Builds entries in acceptance order with dates deliberately unrelated to
/// that order.
fn build_entries(movements: &[Movement]) -> Vec<JournalEntry> {
    movements
        .iter()
        .enumerate()
        .map(|(index, (day_offset, debit_idx, credit_idx, cents))| {
            let amount = Decimal::new(*cents, 2);
            JournalEntry {
                id: EntryId::new(),
                seq: index as u64 + 1,
                date: base_date() + Days::new(*day_offset),
                description: format!("movement {index}"),
                lines: vec![
                    JournalLine::new(ACCOUNT_IDS[*debit_idx], Side::Debit, amount),
                    JournalLine::new(ACCOUNT_IDS[*credit_idx], Side::Credit, amount),
                ],
                posted_at: Utc::now(),
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Identical inputs always produce identical output, down to the
    /// serialized bytes.
    #[test]
    fn prop_projection_deterministic(
        openings in openings_strategy(),
        movements in movements_strategy(),
    ) {
        let accounts = five_accounts(openings);
        let entries = build_entries(&movements);
        let query = LedgerQuery::default();

        let first = project(&entries, &accounts, &query).unwrap();
        let second = project(&entries, &accounts, &query).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Every projection emits one row per line of every entry.
    #[test]
    fn prop_row_per_line(
        openings in openings_strategy(),
        movements in movements_strategy(),
    ) {
        let accounts = five_accounts(openings);
        let entries = build_entries(&movements);

        let rows = project(&entries, &accounts, &LedgerQuery::default()).unwrap();
        let line_count: usize = entries.iter().map(|e| e.lines.len()).sum();
        prop_assert_eq!(rows.len(), line_count);
    }

    /// Rows come out ordered by date, same-date ties by acceptance seq.
    #[test]
    fn prop_rows_chronologically_ordered(
        openings in openings_strategy(),
        movements in movements_strategy(),
    ) {
        let accounts = five_accounts(openings);
        let entries = build_entries(&movements);
        let seq_of: HashMap<EntryId, u64> = entries.iter().map(|e| (e.id, e.seq)).collect();

        let rows = project(&entries, &accounts, &LedgerQuery::default()).unwrap();
        let keys: Vec<(NaiveDate, u64)> = rows
            .iter()
            .map(|row| (row.date, seq_of[&row.entry_id]))
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    /// Narrowing to one account returns exactly that account's rows with
    /// running balances identical to the unfiltered projection.
    #[test]
    fn prop_account_filter_never_alters_fold(
        openings in openings_strategy(),
        movements in movements_strategy(),
        chosen in 0usize..5,
    ) {
        let accounts = five_accounts(openings);
        let entries = build_entries(&movements);
        let account_id = ACCOUNT_IDS[chosen];

        let unfiltered = project(&entries, &accounts, &LedgerQuery::default()).unwrap();
        let filtered = project(&entries, &accounts, &LedgerQuery::for_account(account_id)).unwrap();

        let expected: Vec<_> = unfiltered
            .into_iter()
            .filter(|row| row.account_id.as_str() == account_id)
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    /// A date window returns exactly the in-window rows of the unfiltered
    /// projection, balances untouched.
    #[test]
    fn prop_date_filter_never_alters_fold(
        openings in openings_strategy(),
        movements in movements_strategy(),
        from_offset in 0u64..28,
        window in 0u64..28,
    ) {
        let accounts = five_accounts(openings);
        let entries = build_entries(&movements);
        let from = base_date() + Days::new(from_offset);
        let to = from + Days::new(window);

        let unfiltered = project(&entries, &accounts, &LedgerQuery::default()).unwrap();
        let windowed = project(&entries, &accounts, &LedgerQuery::between(from, to)).unwrap();

        let expected: Vec<_> = unfiltered
            .into_iter()
            .filter(|row| row.date >= from && row.date <= to)
            .collect();
        prop_assert_eq!(windowed, expected);
    }

    /// Along each account's rows, consecutive running balances differ by
    /// exactly the signed line amount.
    #[test]
    fn prop_running_balance_chain_consistent(
        openings in openings_strategy(),
        movements in movements_strategy(),
    ) {
        let accounts = five_accounts(openings);
        let entries = build_entries(&movements);
        let rows = project(&entries, &accounts, &LedgerQuery::default()).unwrap();

        for account in &accounts {
            let convention = account.account_type.normal_balance();
            let mut balance = account.opening_balance;
            for row in rows.iter().filter(|row| row.account_id == account.id) {
                balance += convention.balance_change(row.side, row.amount);
                prop_assert_eq!(row.running_balance, balance);
            }
        }
    }

    /// With balanced entries, total debit-normal movement equals total
    /// credit-normal movement (the books stay in equation).
    #[test]
    fn prop_accounting_equation_holds(
        openings in openings_strategy(),
        movements in movements_strategy(),
    ) {
        let accounts = five_accounts(openings);
        let entries = build_entries(&movements);
        let rows = project(&entries, &accounts, &LedgerQuery::default()).unwrap();

        let final_balance = |account: &Account| {
            rows.iter()
                .rev()
                .find(|row| row.account_id == account.id)
                .map_or(account.opening_balance, |row| row.running_balance)
        };

        let mut debit_normal_movement = Decimal::ZERO;
        let mut credit_normal_movement = Decimal::ZERO;
        for account in &accounts {
            let movement = final_balance(account) - account.opening_balance;
            match account.account_type.normal_balance() {
                NormalBalance::DebitNormal => debit_normal_movement += movement,
                NormalBalance::CreditNormal => credit_normal_movement += movement,
            }
        }

        prop_assert_eq!(debit_normal_movement, credit_normal_movement);
    }
}
