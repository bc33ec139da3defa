// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::ConfigError;
use crate::locale::Locale;
use crate::models::Category;

static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    [
        ("purchases", "Compras", "shopping-bag", "#5636D3"),
        ("food", "Alimentação", "coffee", "#FF872C"),
        ("salary", "Salário", "dollar-sign", "#12A454"),
        ("car", "Carro", "crosshair", "#E83F5B"),
        ("leisure", "Lazer", "heart", "#26195C"),
        ("studies", "Estudos", "book", "#9C001A"),
    ]
    .into_iter()
    .map(|(key, name, icon, color)| Category {
        key: key.into(),
        name: name.into(),
        icon: icon.into(),
        color: color.into(),
    })
    .collect()
});

/// Settings resolved once at start and handed to every command.
#[derive(Debug, Clone)]
pub struct Config {
    pub locale: Locale,
    pub categories: Vec<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            categories: default_categories(),
        }
    }
}

pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES.clone()
}

/// Reads an ordered JSON array of `{key, name, icon?, color}`.
pub fn load_categories(path: &Path) -> Result<Vec<Category>, ConfigError> {
    let raw = fs::read_to_string(path)?;
    let categories: Vec<Category> = serde_json::from_str(&raw)?;
    validate_categories(&categories)?;
    debug!(path = %path.display(), count = categories.len(), "loaded category table");
    Ok(categories)
}

pub fn validate_categories(categories: &[Category]) -> Result<(), ConfigError> {
    if categories.is_empty() {
        return Err(ConfigError::EmptyCategories);
    }
    let mut seen = HashSet::new();
    for c in categories {
        if !seen.insert(c.key.as_str()) {
            return Err(ConfigError::DuplicateCategory(c.key.clone()));
        }
    }
    Ok(())
}

pub fn find_category<'a>(categories: &'a [Category], key: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.key == key)
}
