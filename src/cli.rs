// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Upper bound for `--prev`/`--next`, in months.
pub const MAX_MONTH_STEP: i64 = 12 * 10_000;

fn user_arg() -> Arg {
    Arg::new("user")
        .long("user")
        .short('u')
        .required(true)
        .help("User id the transactions belong to")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("gofinances")
        .version(clap::crate_version!())
        .about("Record income and expenses, then review highlights and monthly spend by category")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("SQLite database file (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .global(true)
                .value_name("pt-BR|en-US")
                .help("Formatting locale; remembered for later runs"),
        )
        .arg(
            Arg::new("category_file")
                .long("categories")
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("JSON category table replacing the built-in one"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("register")
                .about("Record a new income or outcome")
                .arg(user_arg())
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .required(true)
                        .value_name("income|outcome"),
                )
                .arg(Arg::new("category").long("category").required(true))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .help("Defaults to now"),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Inflow, outflow and balance highlights plus the transaction list")
                .arg(user_arg())
                .args(json_args()),
        )
        .subcommand(
            Command::new("resume")
                .about("Spend by category for one month")
                .arg(user_arg())
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_name("YYYY-MM")
                        .help("Defaults to the current month"),
                )
                .arg(
                    Arg::new("prev")
                        .long("prev")
                        .value_name("N")
                        .value_parser(value_parser!(i32).range(0..=MAX_MONTH_STEP))
                        .conflicts_with("next")
                        .help("Go back N months"),
                )
                .arg(
                    Arg::new("next")
                        .long("next")
                        .value_name("N")
                        .value_parser(value_parser!(i32).range(0..=MAX_MONTH_STEP))
                        .help("Go forward N months"),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("categories")
                .about("Show the category table")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as pretty JSON"),
                ),
        )
}
