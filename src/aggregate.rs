// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derivations over a user's stored transactions: dashboard highlights,
//! the monthly category breakdown and the formatted listing.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::locale::Locale;
use crate::models::{
    Category, CategorySummary, Highlight, Highlights, Period, Transaction, TransactionRow,
    TransactionType,
};

/// Sums without panicking: past `Decimal`'s range the total saturates at
/// `Decimal::MAX` (or `Decimal::MIN`).
pub fn saturating_sum<I: IntoIterator<Item = Decimal>>(amounts: I) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(amount))
}

pub fn sum_by_type(records: &[Transaction], kind: TransactionType) -> Decimal {
    saturating_sum(
        records
            .iter()
            .filter(|t| t.r#type == kind)
            .map(|t| t.amount),
    )
}

/// `part` as a percentage of `total`; saturates instead of overflowing.
fn share_percent(part: Decimal, total: Decimal) -> Decimal {
    part.checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
}

/// Latest known date among records of `kind`. Records without a readable
/// date are ignored.
pub fn last_transaction_date(
    records: &[Transaction],
    kind: TransactionType,
) -> Option<NaiveDateTime> {
    records
        .iter()
        .filter(|t| t.r#type == kind)
        .filter_map(|t| t.date)
        .max()
}

pub fn compute_highlights(records: &[Transaction], locale: Locale) -> Highlights {
    let entries_total = sum_by_type(records, TransactionType::Inflow);
    let expensives_total = sum_by_type(records, TransactionType::Outflow);

    let last_entry = last_transaction_date(records, TransactionType::Inflow);
    let last_expensive = last_transaction_date(records, TransactionType::Outflow);

    let no_records = || locale.no_records().to_string();

    Highlights {
        entries: Highlight {
            amount: locale.format_currency(entries_total),
            last_transaction: last_entry
                .map(|d| locale.last_inflow_label(&d))
                .unwrap_or_else(no_records),
            last_transaction_date: last_entry,
        },
        expensives: Highlight {
            amount: locale.format_currency(expensives_total),
            last_transaction: last_expensive
                .map(|d| locale.last_outflow_label(&d))
                .unwrap_or_else(no_records),
            last_transaction_date: last_expensive,
        },
        // The overall window closes on the last outflow, not the last movement.
        total: Highlight {
            amount: locale.format_currency(entries_total.saturating_sub(expensives_total)),
            last_transaction: last_expensive
                .map(|d| locale.interval_label(&d))
                .unwrap_or_else(no_records),
            last_transaction_date: last_expensive,
        },
    }
}

/// Outflow spend per category inside `period`, in category-table order.
/// Categories without spend are left out. Nothing is emitted when the
/// period has no positive outflow total.
pub fn compute_category_breakdown(
    records: &[Transaction],
    categories: &[Category],
    period: Period,
    locale: Locale,
) -> Vec<CategorySummary> {
    let expensives: Vec<&Transaction> = records
        .iter()
        .filter(|t| t.r#type == TransactionType::Outflow)
        .filter(|t| t.date.is_some_and(|d| period.contains(&d)))
        .collect();

    let expensives_total = saturating_sum(expensives.iter().map(|t| t.amount));
    if expensives_total <= Decimal::ZERO {
        return Vec::new();
    }

    let mut out = Vec::new();
    for category in categories {
        let category_sum = saturating_sum(
            expensives
                .iter()
                .filter(|t| t.category == category.key)
                .map(|t| t.amount),
        );

        if category_sum > Decimal::ZERO {
            out.push(CategorySummary {
                key: category.key.clone(),
                name: category.name.clone(),
                color: category.color.clone(),
                total: category_sum,
                total_formatted: locale.format_currency(category_sum),
                percent: locale.format_percent(share_percent(category_sum, expensives_total)),
            });
        }
    }
    out
}

/// The dashboard listing, in stored order.
pub fn format_transactions(
    records: &[Transaction],
    categories: &[Category],
    locale: Locale,
) -> Vec<TransactionRow> {
    records
        .iter()
        .map(|t| {
            let category = categories
                .iter()
                .find(|c| c.key == t.category)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| t.category.clone());
            TransactionRow {
                id: t.id.clone(),
                name: t.name.clone(),
                amount: locale.format_currency(t.amount),
                r#type: t.r#type,
                category,
                date: t.date.map(|d| locale.short_date(&d)).unwrap_or_default(),
            }
        })
        .collect()
}
