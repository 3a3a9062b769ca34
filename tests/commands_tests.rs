// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finledger::commands::{add, view};
use finledger::config::StoreConfig;
use finledger::prompt::Prompter;
use finledger::{Category, Transaction, TransactionStore, cli};
use rust_decimal::Decimal;
use std::io::Cursor;
use std::str::FromStr;
use tempfile::{TempDir, tempdir};

fn setup() -> (TempDir, TransactionStore) {
    let dir = tempdir().unwrap();
    let store = TransactionStore::new(StoreConfig::new(dir.path().join("finance_data.csv")));
    store.initialize().unwrap();
    (dir, store)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
}

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn collect(args: &[&str], input: &str) -> (anyhow::Result<Transaction>, String) {
    let mut argv = vec!["finledger", "add"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("add", add_m)) = matches.subcommand() else {
        panic!("no add subcommand");
    };
    let mut p = prompter(input);
    let res = add::collect(add_m, &mut p, today());
    (res, String::from_utf8(p.into_writer()).unwrap())
}

fn run_view(store: &TransactionStore, args: &[&str]) -> String {
    let mut argv = vec!["finledger", "view"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("view", view_m)) = matches.subcommand() else {
        panic!("no view subcommand");
    };
    let mut out = Vec::new();
    view::run(store, view_m, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn add_with_flags_does_not_prompt() {
    let (res, out) = collect(
        &[
            "--date",
            " 15-06-2024 ",
            "--amount",
            "1000.00",
            "--category",
            "i",
            "--description",
            "salary",
        ],
        "",
    );
    let t = res.unwrap();
    assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    assert_eq!(t.amount, Decimal::from_str("1000.00").unwrap());
    assert_eq!(t.category, Category::Income);
    assert_eq!(t.description, "salary");
    assert!(out.is_empty());
}

#[test]
fn add_scripted_defaults_date_and_description() {
    let (res, _) = collect(&["--amount", "3", "--category", "E"], "");
    let t = res.unwrap();
    assert_eq!(t.date, today());
    assert_eq!(t.description, "");
    assert_eq!(t.category, Category::Expense);
}

#[test]
fn add_rejects_bad_flag_values() {
    let (res, _) = collect(&["--amount", "-5", "--category", "E"], "");
    assert!(res.unwrap_err().to_string().contains("non-zero"));
    let (res, _) = collect(&["--amount", "5", "--category", "X"], "");
    assert!(res.is_err());
    let (res, _) = collect(&["--date", "31-02-2024", "--amount", "5", "--category", "I"], "");
    assert!(res.is_err());
}

#[test]
fn add_prompts_for_missing_fields_until_valid() {
    let (res, out) = collect(&["--amount", "12.5"], "\nq\ne\nlunch, with team\n");
    let t = res.unwrap();
    assert_eq!(t.date, today());
    assert_eq!(t.category, Category::Expense);
    assert_eq!(t.description, "lunch, with team");
    assert!(out.contains(add::CATEGORY_PROMPT));
    assert!(out.contains("Invalid category 'q'"));
    assert!(!out.contains(add::AMOUNT_PROMPT));
}

#[test]
fn view_prints_table_and_summary() {
    let (_dir, store) = setup();
    let d = |s| finledger::validate::parse_date(s).unwrap();
    store
        .append(
            &Transaction::new(d("15-06-2024"), Decimal::from(1000), Category::Income, "salary")
                .unwrap(),
        )
        .unwrap();
    store
        .append(
            &Transaction::new(
                d("16-06-2024"),
                Decimal::from_str("250.50").unwrap(),
                Category::Expense,
                "groceries",
            )
            .unwrap(),
        )
        .unwrap();

    let out = run_view(&store, &["--start", "01-06-2024", "--end", "30-06-2024"]);
    assert!(out.contains("Transactions from 01-06-2024 to 30-06-2024"));
    assert!(out.contains("groceries"));
    assert!(out.contains("Total Income: $1000.00"));
    assert!(out.contains("Total Expense: $250.50"));
    assert!(out.contains("Net Savings: $749.50"));
    assert!(!out.contains("Income and Expense Over Time"));

    let charted = run_view(
        &store,
        &["--start", "01-06-2024", "--end", "30-06-2024", "--chart"],
    );
    assert!(charted.contains("Income and Expense Over Time"));
}

#[test]
fn view_reports_empty_range() {
    let (_dir, store) = setup();
    let out = run_view(&store, &["--start", "01-01-2024", "--end", "31-12-2024"]);
    assert_eq!(out, "No transactions found in the given date range.\n");
}

#[test]
fn view_json_includes_summary() {
    let (_dir, store) = setup();
    let t = Transaction::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        Decimal::from_str("19.99").unwrap(),
        Category::Expense,
        "books",
    )
    .unwrap();
    store.append(&t).unwrap();

    let out = run_view(&store, &["--start", "01-03-2024", "--end", "01-03-2024", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "transactions": [
                {"date": "01-03-2024", "amount": "19.99", "category": "Expense", "description": "books"}
            ],
            "summary": {"total_income": "0", "total_expense": "19.99", "net": "-19.99"}
        })
    );

    let lines = run_view(&store, &["--start", "01-03-2024", "--end", "01-03-2024", "--jsonl"]);
    assert_eq!(lines.lines().count(), 1);
    assert!(lines.contains("\"description\":\"books\""));
}

#[test]
fn view_rejects_malformed_bounds() {
    let (_dir, store) = setup();
    let matches = cli::build_cli().get_matches_from([
        "finledger", "view", "--start", "2024-01-01", "--end", "31-12-2024",
    ]);
    let Some(("view", view_m)) = matches.subcommand() else {
        panic!("no view subcommand");
    };
    assert!(view::query(&store, view_m).is_err());
}
