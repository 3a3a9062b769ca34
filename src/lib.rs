// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod report;
pub mod store;
pub mod utils;
pub mod validate;

pub use error::{ConfigError, PersistenceError, ValidationError};
pub use models::{Category, QueryResult, Summary, Transaction};
pub use store::TransactionStore;
