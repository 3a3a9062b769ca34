// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Interactive add / view / exit loop used when no subcommand is given.

use crate::commands::add::{prompt_date, prompt_transaction};
use crate::prompt::Prompter;
use crate::report::{daily_series, write_chart, write_transactions};
use crate::store::TransactionStore;
use crate::validate::today;
use anyhow::Result;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::error;

pub fn handle(store: &TransactionStore) -> Result<()> {
    let stdin = io::stdin();
    let mut p = Prompter::new(stdin.lock(), io::stdout().lock());
    run(store, &mut p, today())
}

pub fn run<R: BufRead, W: Write>(
    store: &TransactionStore,
    p: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<()> {
    loop {
        let out = p.writer();
        writeln!(out, "\n1. Add a new transaction.")?;
        writeln!(out, "2. View transactions and summary within a date range.")?;
        writeln!(out, "3. Exit")?;

        let Some(choice) = p.ask_opt("Enter your choice (1-3): ")? else {
            writeln!(p.writer())?;
            return Ok(());
        };
        match choice.trim() {
            "1" => add_entries(store, p, today)?,
            "2" => view_range(store, p)?,
            "3" => {
                writeln!(p.writer(), "Exiting...")?;
                return Ok(());
            }
            _ => writeln!(p.writer(), "Invalid choice. Please enter 1, 2 or 3.")?,
        }
    }
}

fn add_entries<R: BufRead, W: Write>(
    store: &TransactionStore,
    p: &mut Prompter<R, W>,
    today: NaiveDate,
) -> Result<()> {
    loop {
        let txn = prompt_transaction(p, today)?;
        if let Err(e) = store.append(&txn) {
            error!(error = %e, "append failed");
            writeln!(p.writer(), "Could not save the transaction: {}", e)?;
            return Ok(());
        }
        writeln!(p.writer(), "Entry added successfully!")?;

        if !p.confirm("Would you like to add another transaction (y/n)?: ")? {
            writeln!(p.writer(), "Thank you for using our finance tracker!")?;
            return Ok(());
        }
    }
}

fn view_range<R: BufRead, W: Write>(store: &TransactionStore, p: &mut Prompter<R, W>) -> Result<()> {
    let start = prompt_date(p, "Enter the start date (dd-mm-yyyy): ", None)?;
    let end = prompt_date(p, "Enter the end date (dd-mm-yyyy): ", None)?;

    let result = match store.query_range(start, end) {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "range query failed");
            writeln!(p.writer(), "Could not read transactions: {}", e)?;
            return Ok(());
        }
    };
    write_transactions(p.writer(), start, end, &result)?;

    if !result.is_empty()
        && p.confirm("Do you want to see a graph of the transaction history? (y/n) ")?
    {
        write_chart(p.writer(), &daily_series(&result.transactions))?;
    }
    Ok(())
}
