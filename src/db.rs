// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::locale::Locale;
use crate::models::Transaction;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "GoFinances", "gofinances"));

pub const NAMESPACE: &str = "@gofinances";

/// Minimal persistence contract: string values under string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub fn transactions_key(user_id: &str) -> String {
    format!("{}:transactions_user:{}", NAMESPACE, user_id)
}

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("gofinances.sqlite"))
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let conn =
            Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
            .with_context(|| format!("Read key '{}'", key))?;
        Ok(v)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv(key, value) VALUES(?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value, updated_at=datetime('now')",
                params![key, value],
            )
            .with_context(|| format!("Write key '{}'", key))?;
        Ok(())
    }
}

/// In-process store, mostly for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// Locale setting. An unreadable stored value is ignored.
pub fn get_locale(store: &SqliteStore) -> Result<Option<Locale>> {
    let v: Option<String> = store
        .conn
        .query_row("SELECT value FROM settings WHERE key='locale'", [], |r| {
            r.get(0)
        })
        .optional()?;
    match v {
        Some(code) => match code.parse::<Locale>() {
            Ok(locale) => Ok(Some(locale)),
            Err(error) => {
                warn!(%code, "ignoring stored locale: {error}");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

pub fn set_locale(store: &SqliteStore, locale: Locale) -> Result<()> {
    store.conn.execute(
        "INSERT INTO settings(key, value) VALUES('locale', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![locale.code()],
    )?;
    Ok(())
}

/// Decodes a stored blob. A blob that is not a JSON array decodes to nothing;
/// entries that are not JSON objects are skipped.
pub fn parse_transactions(raw: &str) -> Vec<Transaction> {
    let items: Vec<Value> = match serde_json::from_str(raw) {
        Ok(items) => items,
        Err(error) => {
            warn!("stored transactions are not a JSON array, ignoring: {error}");
            return Vec::new();
        }
    };
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Transaction>(item) {
            Ok(tx) => Some(tx),
            Err(error) => {
                warn!(index, "skipping unreadable transaction: {error}");
                None
            }
        })
        .collect()
}

/// Never fails: read errors and corrupt blobs yield an empty list.
pub fn load_transactions<S: KeyValueStore + ?Sized>(store: &S, user_id: &str) -> Vec<Transaction> {
    let key = transactions_key(user_id);
    let raw = match store.get(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            warn!(%key, "storage read failed, treating as empty: {error:#}");
            return Vec::new();
        }
    };
    let records = parse_transactions(&raw);
    debug!(%key, count = records.len(), "loaded transactions");
    records
}

/// Appends to the user's list. Existing entries are written back untouched,
/// including ones this build cannot read.
pub fn append_transaction<S: KeyValueStore + ?Sized>(
    store: &S,
    user_id: &str,
    tx: &Transaction,
) -> Result<()> {
    let key = transactions_key(user_id);
    let mut items: Vec<Value> = match store.get(&key)? {
        Some(raw) => serde_json::from_str(&raw)
            .with_context(|| format!("Stored transactions under '{}' are corrupt", key))?,
        None => Vec::new(),
    };
    items.push(serde_json::to_value(tx)?);
    store.set(&key, &serde_json::to_string(&items)?)?;
    Ok(())
}
