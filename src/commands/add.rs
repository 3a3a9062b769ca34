// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use crate::prompt::Prompter;
use crate::store::TransactionStore;
use crate::validate::{
    parse_date, today, validate_amount, validate_category, validate_date_on,
    validate_description,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

pub const DATE_PROMPT: &str =
    "Enter the date of the transaction (dd-mm-yyyy) or press enter for today's date: ";
pub const AMOUNT_PROMPT: &str = "Enter the amount: ";
pub const CATEGORY_PROMPT: &str = "Enter the category ('I' for Income or 'E' for Expense): ";
pub const DESCRIPTION_PROMPT: &str = "Enter a description (optional): ";

pub fn handle(store: &TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    let stdin = io::stdin();
    let mut p = Prompter::new(stdin.lock(), io::stdout().lock());
    let txn = collect(m, &mut p, today())?;
    store.append(&txn).context("Failed to record transaction")?;
    writeln!(p.writer(), "Entry added successfully!")?;
    Ok(())
}

/// Builds a transaction from the `add` flags. With both `--amount` and
/// `--category` given nothing is prompted; otherwise every absent field is.
pub fn collect<R: BufRead, W: Write>(
    m: &clap::ArgMatches,
    p: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<Transaction> {
    let flag = |name| arg(m, name);
    let scripted = flag("amount").is_some() && flag("category").is_some();

    let date = match flag("date") {
        Some(d) => parse_date(&validate_date_on(d, true, today)?)?,
        None if scripted => today,
        None => prompt_date(p, DATE_PROMPT, Some(today))?,
    };
    let amount = match flag("amount") {
        Some(a) => validate_amount(a)?,
        None => p.ask_until(AMOUNT_PROMPT, validate_amount)?,
    };
    let category = match flag("category") {
        Some(c) => validate_category(c)?,
        None => p.ask_until(CATEGORY_PROMPT, validate_category)?,
    };
    let description = match flag("description") {
        Some(d) => validate_description(d)?,
        None if scripted => String::new(),
        None => p.ask_until(DESCRIPTION_PROMPT, validate_description)?,
    };
    Ok(Transaction::new(date, amount, category, description)?)
}

fn arg<'a>(m: &'a clap::ArgMatches, name: &str) -> Option<&'a str> {
    m.get_one::<String>(name).map(|s| s.as_str())
}

/// Prompts for every field in turn.
pub fn prompt_transaction<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<Transaction> {
    let date = prompt_date(p, DATE_PROMPT, Some(today))?;
    let amount = p.ask_until(AMOUNT_PROMPT, validate_amount)?;
    let category = p.ask_until(CATEGORY_PROMPT, validate_category)?;
    let description = p.ask_until(DESCRIPTION_PROMPT, validate_description)?;
    Ok(Transaction::new(date, amount, category, description)?)
}

/// Asks for a date until one parses. With `default` set, an empty answer picks it.
pub fn prompt_date<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    message: &str,
    default: Option<NaiveDate>,
) -> Result<NaiveDate> {
    p.ask_until(message, |s| match default {
        Some(today) => validate_date_on(s, true, today).and_then(|c| parse_date(&c)),
        None => parse_date(s),
    })
}
