// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use crate::validate::{MAX_AMOUNT, format_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the stored spelling only (`Income` / `Expense`). User input goes
/// through `validate::validate_category` instead.
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Category::Income),
            "Expense" => Ok(Category::Expense),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
}

impl Transaction {
    /// Builds a transaction, rejecting amounts that are zero, negative or
    /// above [`MAX_AMOUNT`].
    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        category: Category,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositive(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(ValidationError::TooLarge(amount));
        }
        Ok(Transaction {
            date,
            amount,
            category,
            description: description.into(),
        })
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_date(*date))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net: Decimal,
}

impl Summary {
    /// Totals saturate at `Decimal::MAX` instead of overflowing.
    pub fn from_transactions<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        for t in txns {
            match t.category {
                Category::Income => total_income = add_capped(total_income, t.amount),
                Category::Expense => total_expense = add_capped(total_expense, t.amount),
            }
        }
        Summary {
            total_income,
            total_expense,
            net: total_income
                .checked_sub(total_expense)
                .unwrap_or(Decimal::MIN),
        }
    }
}

pub(crate) fn add_capped(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or(Decimal::MAX)
}

/// Matching transactions in ledger order plus their totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub transactions: Vec<Transaction>,
    pub summary: Summary,
}

impl QueryResult {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let summary = Summary::from_transactions(&transactions);
        QueryResult {
            transactions,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Income and expense totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBucket {
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}
