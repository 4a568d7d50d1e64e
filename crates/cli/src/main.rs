// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod render;

use agency_dash_snapshot::Snapshot;
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use commands::Command;
use std::path::PathBuf;
use time::{Date, OffsetDateTime, macros::format_description};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Agency Dash - headline figures, filtered lists and boards for an agency snapshot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the snapshot JSON document
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Evaluate overdue invoices as of the start of this day (YYYY-MM-DD, UTC).
    /// Defaults to the current time.
    #[arg(long, value_parser = parse_as_of)]
    as_of: Option<OffsetDateTime>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Parses a calendar date into the instant at which that day starts in UTC.
fn parse_as_of(value: &str) -> Result<OffsetDateTime, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map(|date| date.midnight().assume_utc())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn run(args: &Args) -> Result<String> {
    let snapshot: Snapshot = Snapshot::load(&args.snapshot)
        .wrap_err_with(|| format!("Failed to load snapshot {}", args.snapshot.display()))?;
    let reference_time: OffsetDateTime = args.as_of.unwrap_or_else(OffsetDateTime::now_utc);

    info!(%reference_time, command = ?args.command, "Running command");

    commands::run(&snapshot, &args.command, reference_time, args.json)
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout stays clean for --json output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = Args::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            error!("{e:#}");
            Err(e)
        }
    }
}
