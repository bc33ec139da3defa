// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::stderr;
use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use gofinances::db::{self, SqliteStore};
use gofinances::{cli, commands};

fn main() -> Result<()> {
    setup_logging();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let db_file = match matches.get_one::<PathBuf>("db") {
        Some(path) => path.clone(),
        None => db::db_path()?,
    };
    let store = SqliteStore::open(&db_file)?;
    let config = commands::load_config(&store, &matches)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db_file.display());
        }
        Some(("register", sub)) => commands::register::handle(&store, &config, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, &config, sub)?,
        Some(("resume", sub)) => commands::resume::handle(&store, &config, sub)?,
        Some(("categories", sub)) => commands::categories::handle(&config, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn setup_logging() {
    // stdout carries --json output, so logs go to stderr
    let filter = EnvFilter::try_from_env("GOFINANCES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(stderr))
        .init();
}
