// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Workspace automation: `cargo xtask <command>`.
//!
//! Everything here shells out to cargo or a linter. `cargo xtask ci` is what
//! the CI workflow runs; `cargo xtask demo` exercises the storefront binary
//! end to end against the bundled seed file, using a throwaway store
//! directory under `target/`.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, path::PathBuf, process::Output};

use cargo_metadata::{Metadata, MetadataCommand};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.run() {
        tracing::error!("{err}");
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

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Lint, build, test, then run the demo
    CI,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Write an lcov report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,

    /// Audit dependencies with cargo-deny
    #[command(visible_alias = "cd")]
    Deny,

    /// Run the storefront binary against the bundled seeds
    Demo,

    /// Clippy, docs, formatting, and typos
    #[command(visible_alias = "l")]
    Lint,

    /// Clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs the way docs.rs does
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Check spelling
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Apply clippy suggestions
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Apply rustfmt
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Unit, integration, and doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Doc tests only
    #[command(visible_alias = "td")]
    TestDocs,

    /// Everything except doc tests
    #[command(visible_alias = "tl")]
    TestLibs,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => run_cargo(&["build", "--all-targets", "--all-features"]),
            Self::Check => run_cargo(&["check", "--all-targets", "--all-features"]),
            Self::Coverage => run_cargo(&[
                "llvm-cov",
                "--workspace",
                "--lcov",
                "--output-path",
                "target/lcov.info",
            ]),
            Self::Deny => run_cargo(&["deny", "check"]),
            Self::Demo => demo(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => run_cargo_nightly(&["fmt", "--all", "--check"]),
            Self::LintTypos => {
                cmd!("typos").run_with_trace()?;
                Ok(())
            }
            Self::FixClippy => run_cargo(&[
                "clippy",
                "--all-targets",
                "--all-features",
                "--fix",
                "--allow-dirty",
                "--allow-staged",
            ]),
            Self::FixFormatting => run_cargo_nightly(&["fmt", "--all"]),
            Self::Test => {
                test_libs()?;
                test_docs()
            }
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
        }
    }
}

fn ci() -> Result<()> {
    lint()?;
    run_cargo(&["build", "--all-targets", "--all-features"])?;
    test_libs()?;
    test_docs()?;
    demo()
}

fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    run_cargo_nightly(&["fmt", "--all", "--check"])?;
    if let Err(err) = cmd!("typos").run_with_trace() {
        tracing::warn!("typos is not installed or reported problems: {err}");
    }
    Ok(())
}

fn lint_clippy() -> Result<()> {
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Builds each default member's docs on nightly with `--cfg docsrs`.
fn lint_docs() -> Result<()> {
    let meta: Metadata = MetadataCommand::new()
        .exec()
        .wrap_err("failed to read cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd!("cargo", "doc", "--no-deps", "--package", package.name.as_str())
            .env_remove("CARGO")
            .env("RUSTUP_TOOLCHAIN", "nightly")
            .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
            .run_with_trace()?;
    }
    Ok(())
}

fn test_docs() -> Result<()> {
    run_cargo(&["test", "--doc", "--all-features"])
}

fn test_libs() -> Result<()> {
    run_cargo(&["test", "--all-targets", "--all-features"])
}

/// Lists a few catalog products, then adds one to a fresh cart twice and
/// shows the merged line.
fn demo() -> Result<()> {
    let meta: Metadata = MetadataCommand::new()
        .exec()
        .wrap_err("failed to read cargo metadata")?;
    let root: PathBuf = meta.workspace_root.into_std_path_buf();
    let store_dir: PathBuf = meta.target_directory.into_std_path_buf().join("demo-store");
    if store_dir.exists() {
        std::fs::remove_dir_all(&store_dir)
            .wrap_err_with(|| format!("failed to clear {}", store_dir.display()))?;
    }

    let seeds: String = root.join("data/seeds.json").display().to_string();
    let store: String = store_dir.display().to_string();
    let storefront = |args: &[&str]| -> Result<()> {
        let mut full: Vec<&str> = vec![
            "run",
            "--quiet",
            "--package",
            "storefront-cli",
            "--",
            "--seeds",
            seeds.as_str(),
            "--store-dir",
            store.as_str(),
        ];
        full.extend_from_slice(args);
        run_cargo(&full)
    };

    storefront(&["catalog", "--search", "tomato", "--limit", "3"])?;
    storefront(&["cart", "add", "1"])?;
    storefront(&["cart", "add", "1", "--quantity", "2"])?;
    storefront(&["wishlist", "toggle", "4"])?;
    storefront(&["wishlist", "move-to-cart", "4"])?;
    storefront(&["cart", "show"])
}

fn run_cargo(args: &[&str]) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

fn run_cargo_nightly(args: &[&str]) -> Result<()> {
    cmd("cargo", args)
        // Set by the outer cargo; it would pin the stable toolchain
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct` expression before running it.
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
