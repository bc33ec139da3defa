// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{compute_category_breakdown, saturating_sum};
use crate::commands::required;
use crate::config::Config;
use crate::db::{load_transactions, KeyValueStore};
use crate::models::{CategorySummary, Period};
use crate::utils::{maybe_print_json, pretty_table};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Serialize)]
pub struct ResumeView {
    pub period: Period,
    pub label: String,
    pub categories: Vec<CategorySummary>,
}

pub fn handle(store: &dyn KeyValueStore, config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = required(sub, "user")?;
    let period = resolve_period(sub, Utc::now().date_naive())?;
    let view = build_view(store, config, user, period);
    if maybe_print_json(json_flag, jsonl_flag, &view)? {
        return Ok(());
    }

    println!("{}", view.label);
    let total = saturating_sum(view.categories.iter().map(|c| c.total));
    let rows: Vec<Vec<String>> = view
        .categories
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.total_formatted.clone(),
                c.percent.clone(),
                share_bar(c.total, total),
                c.color.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Total", "Share", "", "Color"], rows)
    );
    Ok(())
}

/// `--month` picks the window (default: the month of `today`), then
/// `--prev`/`--next` step through months from there.
pub fn resolve_period(sub: &clap::ArgMatches, today: NaiveDate) -> Result<Period> {
    let base = match sub.get_one::<String>("month") {
        Some(m) => m.parse::<Period>()?,
        None => Period::of(&today),
    };
    let back = sub.get_one::<i32>("prev").copied().unwrap_or(0);
    let forward = sub.get_one::<i32>("next").copied().unwrap_or(0);
    Ok(base.shift(forward - back)?)
}

pub fn build_view(
    store: &dyn KeyValueStore,
    config: &Config,
    user_id: &str,
    period: Period,
) -> ResumeView {
    let records = load_transactions(store, user_id);
    ResumeView {
        period,
        label: config.locale.period_label(&period),
        categories: compute_category_breakdown(
            &records,
            &config.categories,
            period,
            config.locale,
        ),
    }
}

fn share_bar(part: Decimal, total: Decimal) -> String {
    if total <= Decimal::ZERO {
        return String::new();
    }
    let cells = part
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(BAR_WIDTH)))
        .and_then(|cells| cells.round().to_usize())
        .unwrap_or(0)
        .min(BAR_WIDTH);
    "█".repeat(cells)
}
