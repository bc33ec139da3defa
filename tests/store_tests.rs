// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Result};
use gofinances::aggregate::compute_highlights;
use gofinances::db::{
    append_transaction, get_locale, load_transactions, set_locale, transactions_key,
    KeyValueStore, MemoryStore, SqliteStore,
};
use gofinances::locale::Locale;
use gofinances::models::{Transaction, TransactionType};
use gofinances::utils::parse_datetime;
use rust_decimal::Decimal;
use std::str::FromStr;
use tempfile::tempdir;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!("disk unplugged"))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("disk unplugged"))
    }
}

fn sample(amount: &str, kind: TransactionType) -> Transaction {
    Transaction {
        id: "1".into(),
        name: "Lunch".into(),
        amount: Decimal::from_str(amount).unwrap(),
        r#type: kind,
        category: "food".into(),
        date: parse_datetime("2024-03-05T12:00:00.000Z"),
    }
}

#[test]
fn key_is_namespaced_per_user() {
    assert_eq!(
        transactions_key("42"),
        "@gofinances:transactions_user:42"
    );
}

#[test]
fn sqlite_get_set_overwrites() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "one").unwrap();
    store.set("k", "two").unwrap();
    assert_eq!(store.get("k").unwrap(), Some("two".to_string()));
}

#[test]
fn missing_user_loads_empty() {
    let store = MemoryStore::new();
    assert!(load_transactions(&store, "nobody").is_empty());
}

#[test]
fn read_failure_loads_empty() {
    assert!(load_transactions(&BrokenStore, "u1").is_empty());
}

#[test]
fn corrupt_blob_loads_empty() {
    let store = MemoryStore::new();
    store.set(&transactions_key("u1"), "{not json").unwrap();
    assert!(load_transactions(&store, "u1").is_empty());
    store.set(&transactions_key("u1"), r#"{"id":"1"}"#).unwrap();
    assert!(load_transactions(&store, "u1").is_empty());
}

#[test]
fn amounts_are_coerced_leniently() {
    let store = MemoryStore::new();
    let blob = r#"[
        {"id":"a","name":"Salary","amount":"1500.50","type":"positive","category":"salary","date":"2024-03-01T10:00:00.000Z"},
        {"id":"b","name":"Lunch","amount":35,"type":"negative","category":"food","date":"2024-03-02T10:00:00.000Z"},
        {"id":"c","name":"Bad","amount":"abc","type":"negative","category":"food","date":"2024-03-03T10:00:00.000Z"},
        {"id":"d","name":"Missing","type":"negative","category":"food","date":"2024-03-04"},
        {"id":"e","name":"Float","amount":12.25,"type":"down","category":"car","date":"garbage"}
    ]"#;
    store.set(&transactions_key("u1"), blob).unwrap();
    let records = load_transactions(&store, "u1");
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].amount, Decimal::from_str("1500.50").unwrap());
    assert_eq!(records[1].amount, Decimal::from(35));
    assert_eq!(records[2].amount, Decimal::ZERO);
    assert_eq!(records[3].amount, Decimal::ZERO);
    assert_eq!(records[4].amount, Decimal::from_str("12.25").unwrap());
    assert_eq!(records[4].r#type, TransactionType::Outflow);
    assert!(records[4].date.is_none());
    assert_eq!(records[3].date, parse_datetime("2024-03-04"));
}

#[test]
fn unknown_or_missing_type_counts_as_outflow() {
    let store = MemoryStore::new();
    let blob = r#"[
        {"id":"a","amount":"40","type":"negative","category":"food","date":"2024-03-01"},
        {"id":"b","amount":"60","type":"weird","category":"food","date":"2024-03-02"},
        {"id":"c","amount":"5","category":"food","date":"2024-03-03"},
        {"id":"d","amount":"7","type":"up","category":"salary","date":"2024-03-03"},
        42
    ]"#;
    store.set(&transactions_key("u1"), blob).unwrap();
    let records = load_transactions(&store, "u1");
    assert_eq!(records.len(), 4);
    assert_eq!(records[1].r#type, TransactionType::Outflow);
    assert_eq!(records[2].r#type, TransactionType::Outflow);
    assert_eq!(records[3].r#type, TransactionType::Inflow);

    let h = compute_highlights(&records, Locale::PtBr);
    assert_eq!(h.expensives.amount, "R$\u{a0}105,00");
    assert_eq!(h.entries.amount, "R$\u{a0}7,00");
}

#[test]
fn append_keeps_existing_entries() {
    let store = SqliteStore::open_in_memory().unwrap();
    let raw_key = transactions_key("u1");
    store
        .set(&raw_key, r#"[{"id":"legacy","type":"sideways"}]"#)
        .unwrap();

    append_transaction(&store, "u1", &sample("10", TransactionType::Outflow)).unwrap();

    let raw = store.get(&raw_key).unwrap().unwrap();
    let items: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "legacy");
    assert_eq!(items[0]["type"], "sideways");
    assert_eq!(items[1]["type"], "negative");
    assert_eq!(items[1]["date"], "2024-03-05T12:00:00.000Z");

    let records = load_transactions(&store, "u1");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].amount, Decimal::ZERO);
    assert_eq!(records[1].name, "Lunch");
}

#[test]
fn append_refuses_to_clobber_corrupt_blob() {
    let store = MemoryStore::new();
    store.set(&transactions_key("u1"), "oops").unwrap();
    let err = append_transaction(&store, "u1", &sample("10", TransactionType::Inflow)).unwrap_err();
    assert!(err.to_string().contains("corrupt"));
    assert_eq!(
        store.get(&transactions_key("u1")).unwrap(),
        Some("oops".to_string())
    );
}

#[test]
fn users_are_isolated() {
    let store = MemoryStore::new();
    append_transaction(&store, "alice", &sample("10", TransactionType::Inflow)).unwrap();
    append_transaction(&store, "bob", &sample("20", TransactionType::Inflow)).unwrap();
    append_transaction(&store, "bob", &sample("30", TransactionType::Outflow)).unwrap();
    assert_eq!(load_transactions(&store, "alice").len(), 1);
    assert_eq!(load_transactions(&store, "bob").len(), 2);
}

#[test]
fn sqlite_file_persists_between_opens() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gofinances.sqlite");
    {
        let store = SqliteStore::open(&path).unwrap();
        append_transaction(&store, "u1", &sample("99.90", TransactionType::Outflow)).unwrap();
        set_locale(&store, Locale::EnUs).unwrap();
    }
    let store = SqliteStore::open(&path).unwrap();
    let records = load_transactions(&store, "u1");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].amount, Decimal::from_str("99.90").unwrap());
    assert_eq!(get_locale(&store).unwrap(), Some(Locale::EnUs));
}

#[test]
fn locale_setting_defaults_to_none() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(get_locale(&store).unwrap(), None);
    set_locale(&store, Locale::PtBr).unwrap();
    set_locale(&store, Locale::EnUs).unwrap();
    assert_eq!(get_locale(&store).unwrap(), Some(Locale::EnUs));
}

#[test]
fn unreadable_locale_setting_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gofinances.sqlite");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE settings(key TEXT PRIMARY KEY, value TEXT NOT NULL);
             INSERT INTO settings(key, value) VALUES('locale', 'klingon');",
        )
        .unwrap();
    }
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(get_locale(&store).unwrap(), None);

    set_locale(&store, Locale::EnUs).unwrap();
    assert_eq!(get_locale(&store).unwrap(), Some(Locale::EnUs));
}
