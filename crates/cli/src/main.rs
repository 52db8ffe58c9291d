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
mod error;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use commands::{
    CartCommand, CatalogQuery, WishlistCommand, load_catalog, run_cart, run_catalog, run_wishlist,
};
use std::path::PathBuf;
use storefront_catalog::{CatalogConfig, CatalogStore, DEFAULT_TARGET_SIZE};
use storefront_persistence::{CartSession, FileStore, WishlistSession};
use tracing::info;

/// Storefront - browse the generated catalog and manage a persisted cart
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed product file (`.json` or `.csv`)
    #[arg(long, default_value = "data/seeds.json")]
    seeds: PathBuf,

    /// Random seed for nutrition jitter and variant prices
    #[arg(long, default_value_t = 42)]
    rng_seed: u64,

    /// Number of products in the generated catalog
    #[arg(long, default_value_t = DEFAULT_TARGET_SIZE)]
    target: usize,

    /// Directory holding the persisted cart and wishlist
    #[arg(long, default_value = ".storefront")]
    store_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog products as JSON
    Catalog(CatalogQuery),
    /// Change or show the cart
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },
    /// Change or show the wishlist
    Wishlist {
        #[command(subcommand)]
        command: WishlistCommand,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: CatalogConfig = CatalogConfig {
        target_size: args.target,
        ..CatalogConfig::seeded(args.rng_seed)
    };
    let catalog: CatalogStore = load_catalog(&args.seeds, &config)?;
    let store: FileStore = FileStore::new(args.store_dir);
    info!(store = %store.root().display(), "Using file-backed session storage");

    let output: String = match args.command {
        Command::Catalog(query) => run_catalog(&catalog, &query)?,
        Command::Cart { command } => {
            let mut cart: CartSession<FileStore> = CartSession::open(store);
            run_cart(&mut cart, &catalog, command)?
        }
        Command::Wishlist { command } => {
            let mut wishlist: WishlistSession<FileStore> = WishlistSession::open(store.clone());
            let mut cart: CartSession<FileStore> = CartSession::open(store);
            run_wishlist(&mut wishlist, &mut cart, &catalog, command)?
        }
    };

    println!("{output}");
    Ok(())
}
