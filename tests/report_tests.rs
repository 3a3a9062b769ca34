// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finledger::models::DailyBucket;
use finledger::report::{daily_series, write_chart};
use finledger::{Category, Transaction};
use rust_decimal::Decimal;

fn t(day: u32, amount: i64, category: Category) -> Transaction {
    Transaction::new(
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
        Decimal::from(amount),
        category,
        "",
    )
    .unwrap()
}

#[test]
fn daily_series_fills_gaps_and_sums_per_day() {
    let txns = vec![
        t(3, 100, Category::Income),
        t(1, 10, Category::Expense),
        t(3, 5, Category::Expense),
        t(3, 20, Category::Income),
        t(5, 7, Category::Expense),
    ];
    let series = daily_series(&txns);
    let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
    assert_eq!(
        series,
        vec![
            DailyBucket { date: day(1), income: Decimal::ZERO, expense: Decimal::from(10) },
            DailyBucket { date: day(2), income: Decimal::ZERO, expense: Decimal::ZERO },
            DailyBucket { date: day(3), income: Decimal::from(120), expense: Decimal::from(5) },
            DailyBucket { date: day(4), income: Decimal::ZERO, expense: Decimal::ZERO },
            DailyBucket { date: day(5), income: Decimal::ZERO, expense: Decimal::from(7) },
        ]
    );
}

#[test]
fn daily_series_of_nothing_is_empty() {
    assert!(daily_series(&[]).is_empty());
}

#[test]
fn chart_scales_bars_to_largest_day() {
    let series = daily_series(&[t(1, 200, Category::Income), t(2, 50, Category::Expense)]);
    let mut out = Vec::new();
    write_chart(&mut out, &series).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Income and Expense Over Time\n"));
    assert!(text.contains(&"+".repeat(40)));
    assert!(text.contains(&"-".repeat(10)));
    assert!(!text.contains(&"-".repeat(11)));
    assert!(text.contains("01-06-2024"));
    assert!(text.contains("200.00"));
}

#[test]
fn sparse_long_span_keeps_only_active_days() {
    let txns = vec![
        Transaction::new(
            NaiveDate::from_ymd_opt(1, 1, 1).unwrap(),
            Decimal::from(1),
            Category::Income,
            "",
        )
        .unwrap(),
        Transaction::new(
            NaiveDate::from_ymd_opt(9999, 12, 31).unwrap(),
            Decimal::from(2),
            Category::Expense,
            "",
        )
        .unwrap(),
    ];
    let series = daily_series(&txns);
    assert_eq!(series.len(), 2);
    assert_eq!(series[1].expense, Decimal::from(2));

    let edge = vec![
        t(1, 1, Category::Income),
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
                + chrono::Days::new(finledger::report::MAX_FILLED_DAYS as u64),
            Decimal::from(1),
            Category::Income,
            "",
        )
        .unwrap(),
    ];
    assert_eq!(
        daily_series(&edge).len(),
        finledger::report::MAX_FILLED_DAYS as usize + 1
    );
}
