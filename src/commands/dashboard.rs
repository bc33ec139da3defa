// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::aggregate::{compute_highlights, format_transactions};
use crate::commands::required;
use crate::config::Config;
use crate::db::{load_transactions, KeyValueStore};
use crate::locale::Locale;
use crate::models::{Highlights, TransactionRow, TransactionType};
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub highlights: Highlights,
    pub transactions: Vec<TransactionRow>,
}

pub fn handle(store: &dyn KeyValueStore, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = required(sub, "user")?;
    let view = build_view(store, config, user);
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    let (entries, expensives, total) = card_titles(config.locale);
    let h = &view.highlights;
    let cards = vec![
        vec![
            entries.to_string(),
            h.entries.amount.clone(),
            h.entries.last_transaction.clone(),
        ],
        vec![
            expensives.to_string(),
            h.expensives.amount.clone(),
            h.expensives.last_transaction.clone(),
        ],
        vec![
            total.to_string(),
            h.total.amount.clone(),
            h.total.last_transaction.clone(),
        ],
    ];
    println!("{}", pretty_table(&["", "Amount", "Period"], cards));

    let rows: Vec<Vec<String>> = view
        .transactions
        .iter()
        .map(|r| {
            let amount = match r.r#type {
                TransactionType::Inflow => r.amount.clone(),
                TransactionType::Outflow => format!("- {}", r.amount),
            };
            vec![r.date.clone(), r.name.clone(), r.category.clone(), amount]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Name", "Category", "Amount"], rows)
    );
    Ok(())
}

/// Loads the user's records and derives the whole dashboard from them.
pub fn build_view(store: &dyn KeyValueStore, config: &Config, user_id: &str) -> DashboardView {
    let records = load_transactions(store, user_id);
    DashboardView {
        highlights: compute_highlights(&records, config.locale),
        transactions: format_transactions(&records, &config.categories, config.locale),
    }
}

fn card_titles(locale: Locale) -> (&'static str, &'static str, &'static str) {
    match locale {
        Locale::PtBr => ("Entradas", "Saídas", "Total"),
        Locale::EnUs => ("Inflows", "Outflows", "Total"),
    }
}
