// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command handlers.
//!
//! Each handler performs one command against the catalog and the sessions
//! and returns the JSON to print.

use crate::error::CliError;
use clap::{Args, Subcommand};
use storefront::{CartAction, CartState, WishlistAction};
use std::path::Path;
use storefront_catalog::{CatalogConfig, CatalogStore, load_seeds};
use storefront_domain::{Category, GeneratedProduct, ProductDescriptor, ProductSeed};
use storefront_persistence::{CartSession, KeyValueStore, WishlistSession};
use tracing::info;

/// Filters for listing the catalog.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Only products in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only products whose name contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// At most this many products
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CartCommand {
    /// Add a catalog product to the cart
    Add {
        id: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product's line
    Remove { id: String },
    /// Set a line's quantity; below 1 removes the line
    Update {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Print the cart
    Show,
}

#[derive(Subcommand, Debug, Clone)]
pub enum WishlistCommand {
    /// Save a product, or unsave it if already saved
    Toggle { id: String },
    /// Add one of a saved product to the cart and unsave it
    MoveToCart { id: String },
    /// Unsave everything
    Clear,
    /// Print the saved product ids
    Show,
}

/// Loads seeds from `path` and builds the catalog.
///
/// # Errors
///
/// Returns an error if the seed file cannot be loaded.
pub fn load_catalog(path: &Path, config: &CatalogConfig) -> Result<CatalogStore, CliError> {
    let seeds: Vec<ProductSeed> = load_seeds(path)?;
    Ok(CatalogStore::build(&seeds, config))
}

fn descriptor(catalog: &CatalogStore, id: &str) -> Result<ProductDescriptor, CliError> {
    catalog
        .descriptor(id)
        .ok_or_else(|| CliError::UnknownProduct(id.to_string()))
}

/// Lists catalog products matching `query`.
///
/// # Errors
///
/// Returns an error if the output cannot be rendered.
pub fn run_catalog(catalog: &CatalogStore, query: &CatalogQuery) -> Result<String, CliError> {
    let category: Option<Category> = query.category.as_deref().map(Category::parse);
    let candidates: Vec<&GeneratedProduct> = match &query.search {
        Some(term) => catalog.search(term),
        None => catalog.products().iter().collect(),
    };

    let products: Vec<&GeneratedProduct> = candidates
        .into_iter()
        .filter(|product| {
            category
                .as_ref()
                .is_none_or(|wanted| &product.product.category == wanted)
        })
        .take(query.limit.unwrap_or(usize::MAX))
        .collect();

    Ok(serde_json::to_string_pretty(&products)?)
}

/// Runs a cart command and returns the resulting cart.
///
/// # Errors
///
/// Returns an error if the product is unknown, the action is rejected, or
/// the output cannot be rendered.
pub fn run_cart<S: KeyValueStore>(
    cart: &mut CartSession<S>,
    catalog: &CatalogStore,
    command: CartCommand,
) -> Result<String, CliError> {
    let state: &CartState = match command {
        CartCommand::Add { id, quantity } => cart.dispatch(CartAction::AddItem {
            product: descriptor(catalog, &id)?,
            quantity,
        })?,
        CartCommand::Remove { id } => cart.dispatch(CartAction::remove(&id))?,
        CartCommand::Update { id, quantity } => {
            cart.dispatch(CartAction::update_quantity(&id, quantity))?
        }
        CartCommand::Clear => cart.dispatch(CartAction::ClearCart)?,
        CartCommand::Show => cart.state(),
    };

    Ok(serde_json::to_string_pretty(state)?)
}

/// Runs a wishlist command and returns the resulting wishlist.
///
/// # Errors
///
/// Returns an error if the product is unknown, an action is rejected, or
/// the output cannot be rendered.
pub fn run_wishlist<S: KeyValueStore>(
    wishlist: &mut WishlistSession<S>,
    cart: &mut CartSession<S>,
    catalog: &CatalogStore,
    command: WishlistCommand,
) -> Result<String, CliError> {
    match command {
        WishlistCommand::Toggle { id } => {
            descriptor(catalog, &id)?;
            wishlist.dispatch(WishlistAction::Toggle(id))?;
        }
        WishlistCommand::MoveToCart { id } => {
            let product: ProductDescriptor = descriptor(catalog, &id)?;
            cart.dispatch(CartAction::add(product))?;
            wishlist.dispatch(WishlistAction::Remove(id.clone()))?;
            info!(id = %id, cart_lines = cart.state().lines().len(), "Moved product to cart");
        }
        WishlistCommand::Clear => {
            wishlist.dispatch(WishlistAction::Clear)?;
        }
        WishlistCommand::Show => {}
    }

    Ok(serde_json::to_string_pretty(wishlist.state())?)
}
