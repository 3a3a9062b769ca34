// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;

use finledger::config::{StoreConfig, resolve_store_path};
use finledger::{cli, commands, logging, store::TransactionStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();
    logging::init(matches.get_count("verbose"));

    let path = resolve_store_path(matches.get_one::<PathBuf>("file").map(|p| p.as_path()))?;
    let store = TransactionStore::new(StoreConfig::new(path));
    store
        .initialize()
        .with_context(|| format!("Initialize ledger at {}", store.path().display()))?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger initialized at {}", store.path().display());
        }
        Some(("add", sub)) => commands::add::handle(&store, sub)?,
        Some(("view", sub)) => commands::view::handle(&store, sub)?,
        _ => commands::menu::handle(&store)?,
    }
    Ok(())
}
