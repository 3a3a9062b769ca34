// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, DailyBucket, QueryResult, Transaction, add_capped};
use crate::utils::{fmt_money, pretty_table};
use crate::validate::format_date;
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;
use std::io::Write;

const BAR_WIDTH: usize = 40;

/// Longest span, in days, that [`daily_series`] pads with empty days.
pub const MAX_FILLED_DAYS: i64 = 3660;

pub fn write_transactions(
    out: &mut impl Write,
    start: NaiveDate,
    end: NaiveDate,
    result: &QueryResult,
) -> Result<()> {
    if result.is_empty() {
        writeln!(out, "No transactions found in the given date range.")?;
        return Ok(());
    }
    writeln!(
        out,
        "Transactions from {} to {}",
        format_date(start),
        format_date(end)
    )?;
    let rows: Vec<Vec<String>> = result
        .transactions
        .iter()
        .map(|t| {
            vec![
                format_date(t.date),
                t.amount.to_string(),
                t.category.to_string(),
                t.description.clone(),
            ]
        })
        .collect();
    writeln!(
        out,
        "{}",
        pretty_table(&["Date", "Amount", "Category", "Description"], rows)
    )?;

    let s = &result.summary;
    writeln!(out, "\nSummary:")?;
    writeln!(out, "Total Income: {}", fmt_money(&s.total_income))?;
    writeln!(out, "Total Expense: {}", fmt_money(&s.total_expense))?;
    writeln!(out, "Net Savings: {}", fmt_money(&s.net))?;
    Ok(())
}

/// Sums amounts per calendar day and category, one bucket for every day
/// from the earliest to the latest transaction. Spans longer than
/// [`MAX_FILLED_DAYS`] get buckets only for days that have transactions.
pub fn daily_series(txns: &[Transaction]) -> Vec<DailyBucket> {
    let mut by_day: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for t in txns {
        let entry = by_day.entry(t.date).or_insert((Decimal::ZERO, Decimal::ZERO));
        match t.category {
            Category::Income => entry.0 = add_capped(entry.0, t.amount),
            Category::Expense => entry.1 = add_capped(entry.1, t.amount),
        }
    }
    let (Some(first), Some(last)) = (
        by_day.keys().next().copied(),
        by_day.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    if (last - first).num_days() > MAX_FILLED_DAYS {
        return by_day
            .into_iter()
            .map(|(date, (income, expense))| DailyBucket {
                date,
                income,
                expense,
            })
            .collect();
    }

    first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|date| {
            let (income, expense) = by_day
                .get(&date)
                .copied()
                .unwrap_or((Decimal::ZERO, Decimal::ZERO));
            DailyBucket {
                date,
                income,
                expense,
            }
        })
        .collect()
}

fn bar(value: Decimal, max: Decimal, glyph: char) -> String {
    if max.is_zero() || value.is_zero() {
        return String::new();
    }
    let ratio = (value / max).to_f64().unwrap_or(0.0);
    let len = ((ratio * BAR_WIDTH as f64).round() as usize).max(1);
    std::iter::repeat_n(glyph, len).collect()
}

/// One table row per bucket; the row count follows [`daily_series`].
pub fn write_chart(out: &mut impl Write, buckets: &[DailyBucket]) -> Result<()> {
    if buckets.is_empty() {
        writeln!(out, "Nothing to chart.")?;
        return Ok(());
    }
    let max = buckets
        .iter()
        .flat_map(|b| [b.income, b.expense])
        .max()
        .unwrap_or(Decimal::ZERO);

    let rows: Vec<Vec<String>> = buckets
        .iter()
        .map(|b| {
            vec![
                format_date(b.date),
                format!("{:.2}", b.income.round_dp(2)),
                bar(b.income, max, '+'),
                format!("{:.2}", b.expense.round_dp(2)),
                bar(b.expense, max, '-'),
            ]
        })
        .collect();
    writeln!(out, "Income and Expense Over Time")?;
    writeln!(
        out,
        "{}",
        pretty_table(&["Date", "Income", "", "Expense", ""], rows)
    )?;
    Ok(())
}
