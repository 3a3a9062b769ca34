// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! CSV-backed, append-only transaction ledger.
//!
//! Every query re-reads the whole file. Rows that cannot be parsed back into a
//! [`Transaction`] are skipped with a warning rather than failing the query.

use crate::config::{Column, StoreConfig};
use crate::error::{PersistenceError, ValidationError};
use crate::models::{Category, QueryResult, Transaction};
use crate::validate::{format_date, parse_date, validate_amount};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct TransactionStore {
    config: StoreConfig,
}

impl TransactionStore {
    pub fn new(config: StoreConfig) -> Self {
        TransactionStore { config }
    }

    pub fn path(&self) -> &Path {
        self.config.path()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Creates the ledger with only a header row. An existing file is left as is.
    pub fn initialize(&self) -> Result<(), PersistenceError> {
        let path = self.path();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| PersistenceError::io(dir, e))?;
        }
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "ledger already exists");
                return Ok(());
            }
            Err(e) => return Err(PersistenceError::io(path, e)),
        };
        let header = encode_row(self.config.columns().iter().map(|c| c.name()))
            .map_err(|e| PersistenceError::csv(path, e))?;
        file.write_all(&header)
            .and_then(|_| file.sync_data())
            .map_err(|e| PersistenceError::io(path, e))?;
        info!(path = %path.display(), "created ledger");
        Ok(())
    }

    /// Writes one row after the existing content. The ledger must already exist.
    pub fn append(&self, txn: &Transaction) -> Result<(), PersistenceError> {
        let path = self.path();
        let fields = self.config.columns().iter().map(|c| match c {
            Column::Date => format_date(txn.date),
            Column::Amount => txn.amount.to_string(),
            Column::Category => txn.category.to_string(),
            Column::Description => txn.description.clone(),
        });
        let mut row = encode_row(fields).map_err(|e| PersistenceError::csv(path, e))?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(path)
            .map_err(|e| PersistenceError::io(path, e))?;
        if !ends_with_newline(&mut file).map_err(|e| PersistenceError::io(path, e))? {
            row.insert(0, b'\n');
        }
        // One write for the whole row, then flush it to disk.
        file.write_all(&row)
            .and_then(|_| file.sync_data())
            .map_err(|e| PersistenceError::io(path, e))?;
        debug!(
            path = %path.display(),
            date = %format_date(txn.date),
            amount = %txn.amount,
            category = %txn.category,
            "appended transaction"
        );
        Ok(())
    }

    /// Transactions dated within `[start, end]`, in ledger order, with totals.
    pub fn query_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<QueryResult, PersistenceError> {
        let matching: Vec<Transaction> = self
            .load_all()?
            .into_iter()
            .filter(|t| start <= t.date && t.date <= end)
            .collect();
        debug!(
            start = %format_date(start),
            end = %format_date(end),
            matched = matching.len(),
            "range query"
        );
        Ok(QueryResult::new(matching))
    }

    pub fn load_all(&self) -> Result<Vec<Transaction>, PersistenceError> {
        let path = self.path();
        let file = File::open(path).map_err(|e| PersistenceError::io(path, e))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = rdr
            .headers()
            .map_err(|e| PersistenceError::csv(path, e))?
            .clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        let index = ColumnIndex::locate(&headers, path)?;

        let mut out = Vec::new();
        for result in rdr.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) if e.is_io_error() => return Err(PersistenceError::csv(path, e)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable ledger row");
                    continue;
                }
            };
            match index.parse(&record) {
                Ok(t) => out.push(t),
                Err(e) => {
                    let line = record.position().map(|p| p.line()).unwrap_or_default();
                    warn!(path = %path.display(), line, error = %e, "skipping malformed ledger row");
                }
            }
        }
        Ok(out)
    }
}

/// Field positions of each column in the file's own header.
struct ColumnIndex {
    date: usize,
    amount: usize,
    category: usize,
    description: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord, path: &Path) -> Result<Self, PersistenceError> {
        let find = |col: Column| {
            headers
                .iter()
                .position(|h| h.trim() == col.name())
                .ok_or_else(|| PersistenceError::MissingColumn {
                    path: path.to_path_buf(),
                    column: col.name().to_string(),
                })
        };
        Ok(ColumnIndex {
            date: find(Column::Date)?,
            amount: find(Column::Amount)?,
            category: find(Column::Category)?,
            description: find(Column::Description)?,
        })
    }

    fn parse(&self, record: &StringRecord) -> Result<Transaction, ValidationError> {
        let field = |i: usize| record.get(i).unwrap_or("");
        let date = parse_date(field(self.date))?;
        let amount = validate_amount(field(self.amount))?;
        let category: Category = field(self.category).trim().parse()?;
        Transaction::new(date, amount, category, field(self.description))
    }
}

fn encode_row<I, T>(fields: I) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = T>,
    T: AsRef<[u8]>,
{
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(fields)?;
    wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}

fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
