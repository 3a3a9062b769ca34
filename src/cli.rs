// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("finledger")
        .version(crate_version!())
        .about("Record income and expenses in a CSV ledger and summarize date ranges")
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Ledger CSV to use (default: $FINLEDGER_FILE or the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log output (-v info, -vv debug)"),
        )
        .subcommand(Command::new("init").about("Create the ledger file if it does not exist"))
        .subcommand(
            Command::new("add")
                .about("Record a transaction; missing fields are prompted for")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("DD-MM-YYYY")
                        .help("Transaction date (default: today)"),
                )
                .arg(Arg::new("amount").long("amount").allow_hyphen_values(true))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_name("I|E")
                        .help("'I' for Income or 'E' for Expense"),
                )
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(
            Command::new("view")
                .about("List transactions and totals within a date range")
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_name("DD-MM-YYYY")
                        .required(true),
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .value_name("DD-MM-YYYY")
                        .required(true),
                )
                .arg(
                    Arg::new("chart")
                        .long("chart")
                        .action(ArgAction::SetTrue)
                        .help("Draw daily income and expense bars"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("jsonl"),
                )
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
        )
}
