// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Single-field validators. Each one either returns the canonical value or
//! says why the input was rejected; none of them prompt or retry.

use crate::error::ValidationError;
use crate::models::Category;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Canonical date layout for both input and storage.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidFormat(s.to_string()))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Only truly empty text picks the default. Surrounding whitespace is
/// trimmed before parsing, so `" 15-06-2024 "` is accepted but `"   "` is not.
pub fn validate_date(s: &str, allow_default: bool) -> Result<String, ValidationError> {
    validate_date_on(s, allow_default, today())
}

/// Same as [`validate_date`] with the fallback date supplied by the caller.
pub fn validate_date_on(
    s: &str,
    allow_default: bool,
    today: NaiveDate,
) -> Result<String, ValidationError> {
    if allow_default && s.is_empty() {
        return Ok(format_date(today));
    }
    parse_date(s).map(format_date)
}

/// Largest amount a single transaction may carry. Keeps every ledger total
/// far below `Decimal::MAX`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2764472320, 232830, 0, false, 0);

pub fn validate_amount(s: &str) -> Result<Decimal, ValidationError> {
    let raw = s.trim();
    let amount = raw
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ValidationError::NotNumeric(s.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositive(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::TooLarge(amount));
    }
    Ok(amount)
}

pub fn validate_category(s: &str) -> Result<Category, ValidationError> {
    match s.trim().to_uppercase().as_str() {
        "I" => Ok(Category::Income),
        "E" => Ok(Category::Expense),
        _ => Err(ValidationError::UnknownCategory(s.to_string())),
    }
}

pub fn validate_description(s: &str) -> Result<String, ValidationError> {
    Ok(s.to_string())
}
