// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! `cargo xtask ci` runs the same steps as CI, in order: lint, dependency
//! checks, tests and a demo run of the `agency-dash` CLI against the data
//! in `demos/`. Each step is also available on its own.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing_log::AsTrace;

const DEMO_SNAPSHOT: &str = "demos/agency_snapshot.json";
const DEMO_COSTS: &str = "demos/costs.csv";
const DEMO_AS_OF: &str = "2025-01-15";

/// CLI invocations exercised by `cargo xtask demo`, each run as text and JSON.
const DEMO_RUNS: [&[&str]; 7] = [
    &["summary"],
    &["customers", "--query", "sharjah"],
    &["invoices", "--overdue"],
    &["tasks", "--project", "prj-1"],
    &["tasks", "--kanban"],
    &["packages"],
    &["import-costs", DEMO_COSTS],
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Command {
    /// Run every CI step: lint, deny, machete, test, demo
    CI,

    /// Clippy, rustdoc, rustfmt and typos
    #[command(visible_alias = "l")]
    Lint,

    /// Reformat the workspace with nightly rustfmt
    #[command(visible_alias = "fmt")]
    Format,

    /// Check licenses and advisories with cargo-deny
    Deny,

    /// Check for unused dependencies with cargo-machete
    Machete,

    /// Run unit and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Write an lcov report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,

    /// Run the CLI against the demo snapshot
    Demo,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => [Self::Lint, Self::Deny, Self::Machete, Self::Test, Self::Demo]
                .into_iter()
                .try_for_each(Self::run),
            Self::Lint => lint(),
            Self::Format => cargo_nightly(&["fmt", "--all"]),
            Self::Deny => cargo(&["deny", "check"]),
            Self::Machete => {
                cmd!("cargo-machete").run_with_trace()?;
                Ok(())
            }
            Self::Test => {
                cargo(&["test", "--all-targets", "--all-features"])?;
                cargo(&["test", "--doc", "--all-features"])
            }
            Self::Coverage => cargo(&[
                "llvm-cov",
                "--lcov",
                "--output-path",
                "target/lcov.info",
                "--all-features",
            ]),
            Self::Demo => demo(),
        }
    }
}

fn lint() -> Result<()> {
    cargo(&["clippy", "--all-targets", "--all-features", "--", "-D", "warnings"])?;
    cargo_nightly(&["fmt", "--all", "--check"])?;
    cmd!("typos").run_with_trace()?;

    // Build docs per package with the flags docs.rs uses.
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;
    for package in meta.workspace_default_packages() {
        cmd!("cargo", "doc", "--no-deps", "--all-features", "--package", package.name.as_str())
            .env_remove("CARGO")
            .env("RUSTUP_TOOLCHAIN", "nightly")
            .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
            .run_with_trace()?;
    }

    Ok(())
}

fn demo() -> Result<()> {
    for run in DEMO_RUNS {
        for json in [false, true] {
            let mut args: Vec<&str> = vec![
                "run",
                "--quiet",
                "--package",
                "agency-dash-cli",
                "--",
                "--snapshot",
                DEMO_SNAPSHOT,
                "--as-of",
                DEMO_AS_OF,
            ];
            if json {
                args.push("--json");
            }
            args.extend_from_slice(run);
            cargo(&args)?;
        }
    }

    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // Set by cargo for subcommands; would pin the stable toolchain.
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
