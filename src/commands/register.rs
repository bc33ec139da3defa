// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::commands::required;
use crate::config::{find_category, Config};
use crate::db::{append_transaction, KeyValueStore};
use crate::error::RegisterError;
use crate::models::{Category, Transaction, TransactionType};
use crate::utils::{parse_date, parse_decimal};

/// Largest amount a single record may carry: 10_000_000_000.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

/// Raw form input, validated by [`register`].
#[derive(Debug, Clone, Default)]
pub struct NewTransaction {
    pub name: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
    pub date: Option<NaiveDateTime>,
}

pub fn handle(store: &dyn KeyValueStore, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let user = required(sub, "user")?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?.and_hms_opt(0, 0, 0),
        None => None,
    };
    let form = NewTransaction {
        name: required(sub, "name")?.to_string(),
        amount: required(sub, "amount")?.to_string(),
        kind: required(sub, "type")?.to_string(),
        category: required(sub, "category")?.to_string(),
        date,
    };
    let tx = register(store, &config.categories, user, form)?;
    println!(
        "Recorded {} '{}' of {} in {}",
        if tx.r#type == TransactionType::Inflow {
            "income"
        } else {
            "outcome"
        },
        tx.name,
        config.locale.format_currency(tx.amount),
        tx.category
    );
    Ok(())
}

pub fn validate(categories: &[Category], form: &NewTransaction) -> Result<Transaction, RegisterError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(RegisterError::EmptyName);
    }
    let amount = parse_decimal(&form.amount)
        .map_err(|_| RegisterError::InvalidAmount(form.amount.clone()))?;
    if amount <= Decimal::ZERO {
        return Err(RegisterError::NonPositiveAmount(amount.to_string()));
    }
    if amount > MAX_AMOUNT {
        return Err(RegisterError::AmountTooLarge(
            amount.to_string(),
            MAX_AMOUNT.to_string(),
        ));
    }
    let kind: TransactionType = form.kind.parse().map_err(RegisterError::InvalidType)?;
    let category = form.category.trim();
    if find_category(categories, category).is_none() {
        return Err(RegisterError::UnknownCategory(category.to_string()));
    }

    Ok(Transaction {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        amount,
        r#type: kind,
        category: category.to_string(),
        date: Some(form.date.unwrap_or_else(|| Utc::now().naive_utc())),
    })
}

/// Validates the form and appends the new record to the user's list.
pub fn register(
    store: &dyn KeyValueStore,
    categories: &[Category],
    user_id: &str,
    form: NewTransaction,
) -> Result<Transaction> {
    let tx = validate(categories, &form)?;
    append_transaction(store, user_id, &tx)?;
    info!(user = user_id, id = %tx.id, "registered transaction");
    Ok(tx)
}
