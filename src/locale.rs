// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Locale-aware rendering of amounts, dates and dashboard labels.

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ConfigError;
use crate::models::Period;

const NBSP: char = '\u{a0}';

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

const EN_US_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Brazilian Portuguese, amounts in Brazilian Real.
    #[default]
    PtBr,
    /// US English, amounts in US Dollar.
    EnUs,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    fn separators(&self) -> (char, char) {
        // (thousands, decimal)
        match self {
            Locale::PtBr => ('.', ','),
            Locale::EnUs => (',', '.'),
        }
    }

    fn currency_prefix(&self) -> String {
        match self {
            Locale::PtBr => format!("R${}", NBSP),
            Locale::EnUs => "$".to_string(),
        }
    }

    /// Formats an amount as currency, rounded to cents. Negative values keep
    /// the sign in front of the symbol (`-R$ 350,00`).
    pub fn format_currency(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let (thousands, decimal) = self.separators();
        format!(
            "{}{}{}{}{}",
            sign,
            self.currency_prefix(),
            group_thousands(int_part, thousands),
            decimal,
            frac_part
        )
    }

    /// Formats a share already scaled to 0..100 as a whole percentage.
    pub fn format_percent(&self, share: Decimal) -> String {
        let whole = share.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{}%", whole.normalize())
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::PtBr => PT_BR_MONTHS[idx],
            Locale::EnUs => EN_US_MONTHS[idx],
        }
    }

    /// `5 de março` / `March 5`
    pub fn day_month<D: Datelike>(&self, date: &D) -> String {
        let month = self.month_name(date.month());
        match self {
            Locale::PtBr => format!("{} de {}", date.day(), month),
            Locale::EnUs => format!("{} {}", month, date.day()),
        }
    }

    /// Two-digit day, month and year in the locale's order.
    pub fn short_date<D: Datelike>(&self, date: &D) -> String {
        let yy = date.year().rem_euclid(100);
        match self {
            Locale::PtBr => format!("{:02}/{:02}/{:02}", date.day(), date.month(), yy),
            Locale::EnUs => format!("{:02}/{:02}/{:02}", date.month(), date.day(), yy),
        }
    }

    /// `março, 2024` / `March, 2024`
    pub fn period_label(&self, period: &Period) -> String {
        format!("{}, {}", self.month_name(period.month), period.year)
    }

    pub fn no_records(&self) -> &'static str {
        match self {
            Locale::PtBr => "Sem registros",
            Locale::EnUs => "No records",
        }
    }

    pub fn last_inflow_label<D: Datelike>(&self, date: &D) -> String {
        match self {
            Locale::PtBr => format!("Última entrada {}", self.day_month(date)),
            Locale::EnUs => format!("Last inflow {}", self.day_month(date)),
        }
    }

    pub fn last_outflow_label<D: Datelike>(&self, date: &D) -> String {
        match self {
            Locale::PtBr => format!("Última saída {}", self.day_month(date)),
            Locale::EnUs => format!("Last outflow {}", self.day_month(date)),
        }
    }

    /// From the first of the month up to `date`: `01 à 10 de março`.
    pub fn interval_label<D: Datelike>(&self, date: &D) -> String {
        match self {
            Locale::PtBr => format!("01 à {}", self.day_month(date)),
            Locale::EnUs => format!(
                "{} 01 to {}",
                self.month_name(date.month()),
                date.day()
            ),
        }
    }
}

fn group_thousands(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }
}
