// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidFormat(String),
    #[error("Invalid month number {0}")]
    InvalidMonth(u32),
    #[error("Year {0} is out of range")]
    OutOfRange(i32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Transaction name must not be empty")]
    EmptyName,
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(String),
    #[error("Amount {0} exceeds the maximum of {1}")]
    AmountTooLarge(String, String),
    #[error("{0}")]
    InvalidType(String),
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown locale '{0}', expected pt-BR or en-US")]
    UnknownLocale(String),
    #[error("Category table is empty")]
    EmptyCategories,
    #[error("Duplicate category key '{0}'")]
    DuplicateCategory(String),
    #[error("Invalid category file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Could not read category file: {0}")]
    Io(#[from] std::io::Error),
}
