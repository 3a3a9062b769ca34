// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::QueryResult;
use crate::report::{daily_series, write_chart, write_transactions};
use crate::store::TransactionStore;
use crate::utils::maybe_write_json;
use crate::validate::parse_date;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{self, Write};

pub fn handle(store: &TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    let stdout = io::stdout();
    run(store, m, &mut stdout.lock())
}

pub fn run(store: &TransactionStore, m: &clap::ArgMatches, out: &mut impl Write) -> Result<()> {
    let (start, end, result) = query(store, m)?;
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    if maybe_write_json(out, json_flag, false, &result)?
        || maybe_write_json(out, false, jsonl_flag, &result.transactions)?
    {
        return Ok(());
    }
    write_transactions(out, start, end, &result)?;
    if m.get_flag("chart") && !result.is_empty() {
        writeln!(out)?;
        write_chart(out, &daily_series(&result.transactions))?;
    }
    Ok(())
}

pub fn query(
    store: &TransactionStore,
    m: &clap::ArgMatches,
) -> Result<(NaiveDate, NaiveDate, QueryResult)> {
    let start = parse_date(m.get_one::<String>("start").context("--start is required")?)?;
    let end = parse_date(m.get_one::<String>("end").context("--end is required")?)?;
    let result = store
        .query_range(start, end)
        .context("Failed to read transactions")?;
    Ok((start, end, result))
}
