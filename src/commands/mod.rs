// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod dashboard;
pub mod register;
pub mod resume;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{load_categories, Config};
use crate::db::{get_locale, set_locale, SqliteStore};
use crate::locale::Locale;

pub(crate) fn required<'a>(sub: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    sub.get_one::<String>(name)
        .with_context(|| format!("Missing required argument --{}", name))
}

/// Locale: `--locale` (persisted), then the stored setting, then pt-BR.
/// Categories: `--categories` file, else the built-in table.
pub fn load_config(store: &SqliteStore, m: &clap::ArgMatches) -> Result<Config> {
    let locale = match m.get_one::<String>("locale") {
        Some(code) => {
            let locale: Locale = code.parse()?;
            set_locale(store, locale)?;
            locale
        }
        None => get_locale(store)?.unwrap_or_default(),
    };
    let mut config = Config {
        locale,
        ..Config::default()
    };
    if let Some(path) = m.get_one::<PathBuf>("category_file") {
        config.categories = load_categories(path)
            .with_context(|| format!("Load categories from {}", path.display()))?;
    }
    Ok(config)
}
