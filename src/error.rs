// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Rejection of a single user-supplied field. Always recoverable by asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date '{0}'. Please enter the date in dd-mm-yyyy format")]
    InvalidFormat(String),
    #[error("Invalid amount '{0}'. Please enter a number")]
    NotNumeric(String),
    #[error("Amount must be a non-negative and non-zero value, got {0}")]
    NonPositive(Decimal),
    #[error("Amount {0} is larger than the 1000000000000000 allowed per transaction")]
    TooLarge(Decimal),
    #[error("Invalid category '{0}'. Please enter 'I' for Income or 'E' for Expense")]
    UnknownCategory(String),
}

/// Failure to read or write the ledger file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on ledger {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error in ledger {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Ledger {} has no '{column}' column in its header", .path.display())]
    MissingColumn { path: PathBuf, column: String },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        PersistenceError::Csv {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Column '{0}' appears more than once in the column order")]
    DuplicateColumn(String),
    #[error("Could not determine platform-specific data dir")]
    NoDataDir,
}
