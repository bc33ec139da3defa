// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PeriodError;
use crate::utils::{lenient_amount, lenient_datetime, lenient_type, serialize_datetime};

/// Direction of a movement. Stored as `positive`/`negative`; the register
/// form's `up`/`down` are accepted when reading. Anything that is not an
/// inflow counts as an outflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "positive", alias = "up")]
    Inflow,
    #[default]
    #[serde(rename = "negative", alias = "down")]
    Outflow,
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "up" | "income" | "inflow" => Ok(TransactionType::Inflow),
            "negative" | "down" | "outcome" | "outflow" | "expense" => {
                Ok(TransactionType::Outflow)
            }
            other => Err(format!(
                "Invalid transaction type '{}', expected income|outcome",
                other
            )),
        }
    }
}

/// One stored movement. Fields are read leniently: a bad amount becomes zero,
/// a bad date becomes `None` and an unknown type becomes an outflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "lenient_type")]
    pub r#type: TransactionType,
    #[serde(default)]
    pub category: String,
    #[serde(
        default,
        deserialize_with = "lenient_datetime",
        serialize_with = "serialize_datetime"
    )]
    pub date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub color: String,
}

/// A calendar month, used as the window for category breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Months are 1-based; the year must be one chrono can represent.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(PeriodError::OutOfRange(year));
        }
        Ok(Self { year, month })
    }

    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(self) -> Result<Self, PeriodError> {
        self.shift(1)
    }

    pub fn prev(self) -> Result<Self, PeriodError> {
        self.shift(-1)
    }

    pub fn shift(self, months: i32) -> Result<Self, PeriodError> {
        let idx = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        let year =
            i32::try_from(idx.div_euclid(12)).map_err(|_| PeriodError::OutOfRange(self.year))?;
        Period::new(year, idx.rem_euclid(12) as u32 + 1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (y, m) = s
            .split_once('-')
            .ok_or_else(|| PeriodError::InvalidFormat(s.to_string()))?;
        let year: i32 = y
            .parse()
            .map_err(|_| PeriodError::InvalidFormat(s.to_string()))?;
        let month: u32 = m
            .parse()
            .map_err(|_| PeriodError::InvalidFormat(s.to_string()))?;
        Period::new(year, month)
    }
}

/// A dashboard card: a formatted amount and a "last movement" label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub amount: String,
    pub last_transaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transaction_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlights {
    pub entries: Highlight,
    pub expensives: Highlight,
    pub total: Highlight,
}

/// Spend of one category inside a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub name: String,
    pub color: String,
    pub total: Decimal,
    pub total_formatted: String,
    pub percent: String,
}

/// A transaction as shown in the dashboard listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub name: String,
    pub amount: String,
    pub r#type: TransactionType,
    pub category: String,
    pub date: String,
}
