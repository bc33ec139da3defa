// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use gofinances::commands::register::{self, NewTransaction};
use gofinances::config::{default_categories, Config};
use gofinances::db::{load_transactions, MemoryStore, SqliteStore};
use gofinances::error::RegisterError;
use gofinances::models::TransactionType;
use gofinances::{cli, utils::parse_datetime};
use rust_decimal::Decimal;

fn form(name: &str, amount: &str, kind: &str, category: &str) -> NewTransaction {
    NewTransaction {
        name: name.into(),
        amount: amount.into(),
        kind: kind.into(),
        category: category.into(),
        date: parse_datetime("2024-03-05"),
    }
}

#[test]
fn register_appends_valid_transaction() {
    let store = MemoryStore::new();
    let categories = default_categories();
    let tx = register::register(
        &store,
        &categories,
        "u1",
        form("  Almoço ", "35.90", "outcome", "food"),
    )
    .unwrap();
    assert_eq!(tx.name, "Almoço");
    assert_eq!(tx.r#type, TransactionType::Outflow);
    assert_eq!(tx.id.len(), 36);

    let stored = load_transactions(&store, "u1");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, tx.id);
    assert_eq!(stored[0].amount, Decimal::new(3590, 2));
    assert_eq!(stored[0].date, parse_datetime("2024-03-05"));
}

#[test]
fn register_accepts_form_type_aliases() {
    let categories = default_categories();
    for (kind, expected) in [
        ("up", TransactionType::Inflow),
        ("income", TransactionType::Inflow),
        ("positive", TransactionType::Inflow),
        ("down", TransactionType::Outflow),
        ("Outcome", TransactionType::Outflow),
        ("negative", TransactionType::Outflow),
    ] {
        let tx = register::validate(&categories, &form("x", "1", kind, "salary")).unwrap();
        assert_eq!(tx.r#type, expected, "kind {}", kind);
    }
}

#[test]
fn register_rejects_bad_input() {
    let categories = default_categories();
    assert_eq!(
        register::validate(&categories, &form("  ", "1", "up", "food")).unwrap_err(),
        RegisterError::EmptyName
    );
    assert_eq!(
        register::validate(&categories, &form("x", "abc", "up", "food")).unwrap_err(),
        RegisterError::InvalidAmount("abc".into())
    );
    assert_eq!(
        register::validate(&categories, &form("x", "0", "up", "food")).unwrap_err(),
        RegisterError::NonPositiveAmount("0".into())
    );
    assert_eq!(
        register::validate(&categories, &form("x", "-5", "up", "food")).unwrap_err(),
        RegisterError::NonPositiveAmount("-5".into())
    );
    assert!(matches!(
        register::validate(&categories, &form("x", "5", "sideways", "food")).unwrap_err(),
        RegisterError::InvalidType(_)
    ));
    assert_eq!(
        register::validate(&categories, &form("x", "5", "up", "transport")).unwrap_err(),
        RegisterError::UnknownCategory("transport".into())
    );
}

#[test]
fn register_caps_amounts() {
    let categories = default_categories();
    let tx = register::validate(&categories, &form("Casa", "10000000000", "down", "purchases"))
        .unwrap();
    assert_eq!(tx.amount, register::MAX_AMOUNT);

    assert_eq!(
        register::validate(&categories, &form("x", "10000000000.01", "down", "food"))
            .unwrap_err(),
        RegisterError::AmountTooLarge("10000000000.01".into(), "10000000000".into())
    );

    let store = MemoryStore::new();
    let huge = form("x", "50000000000000000000000000000", "outcome", "food");
    assert!(register::register(&store, &categories, "u1", huge.clone()).is_err());
    assert!(register::register(&store, &categories, "u1", huge).is_err());
    assert!(load_transactions(&store, "u1").is_empty());
}

#[test]
fn rejected_register_leaves_store_untouched() {
    let store = MemoryStore::new();
    let categories = default_categories();
    assert!(register::register(&store, &categories, "u1", form("x", "0", "up", "food")).is_err());
    assert!(load_transactions(&store, "u1").is_empty());
}

#[test]
fn register_command_parses_cli_args() {
    let store = SqliteStore::open_in_memory().unwrap();
    let config = Config::default();
    let matches = cli::build_cli().get_matches_from([
        "gofinances",
        "register",
        "--user",
        "u7",
        "--name",
        "Freela",
        "--amount",
        "1200",
        "--type",
        "income",
        "--category",
        "salary",
        "--date",
        "2024-02-29",
    ]);
    if let Some(("register", sub)) = matches.subcommand() {
        register::handle(&store, &config, sub).unwrap();
    } else {
        panic!("register subcommand not parsed");
    }
    let stored = load_transactions(&store, "u7");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Freela");
    assert_eq!(stored[0].date, parse_datetime("2024-02-29"));
}

#[test]
fn register_command_rejects_negative_amount() {
    let store = SqliteStore::open_in_memory().unwrap();
    let config = Config::default();
    let matches = cli::build_cli().get_matches_from([
        "gofinances",
        "register",
        "-u",
        "u7",
        "--name",
        "Oops",
        "--amount",
        "-10",
        "--type",
        "outcome",
        "--category",
        "food",
    ]);
    if let Some(("register", sub)) = matches.subcommand() {
        let err = register::handle(&store, &config, sub).unwrap_err();
        assert!(err.to_string().contains("Amount must be positive"));
    } else {
        panic!("register subcommand not parsed");
    }
}
