// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ConfigError;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fmt;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Finledger", "finledger"));

/// Environment variable that overrides the default ledger location.
pub const STORE_ENV: &str = "FINLEDGER_FILE";
pub const STORE_FILE_NAME: &str = "finance_data.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Amount,
    Category,
    Description,
}

impl Column {
    pub fn name(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Amount => "amount",
            Column::Category => "category",
            Column::Description => "description",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const DEFAULT_COLUMNS: [Column; 4] = [
    Column::Date,
    Column::Amount,
    Column::Category,
    Column::Description,
];

/// Where the ledger lives and the column order used when writing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    path: PathBuf,
    columns: [Column; 4],
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            columns: DEFAULT_COLUMNS,
        }
    }

    pub fn with_columns(mut self, columns: [Column; 4]) -> Result<Self, ConfigError> {
        for (i, c) in columns.iter().enumerate() {
            if columns[..i].contains(c) {
                return Err(ConfigError::DuplicateColumn(c.name().to_string()));
            }
        }
        self.columns = columns;
        Ok(self)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn columns(&self) -> &[Column; 4] {
        &self.columns
    }
}

pub fn default_store_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(ConfigError::NoDataDir)?;
    Ok(proj.data_dir().join(STORE_FILE_NAME))
}

/// Picks the ledger path: explicit flag, then `FINLEDGER_FILE`, then the platform data dir.
pub fn resolve_store_path(flag: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(p) = flag {
        return Ok(p.to_path_buf());
    }
    match std::env::var_os(STORE_ENV) {
        Some(v) if !v.is_empty() => Ok(PathBuf::from(v)),
        _ => default_store_path(),
    }
}
