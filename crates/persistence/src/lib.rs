// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the storefront.
//!
//! The cart and wishlist each live in one slot of a string key-value store
//! (browser local storage in a web deployment, a directory of JSON
//! files or a map here). Sessions own the in-memory state, apply
//! transitions through the pure reducers in `storefront`, and write the
//! full state back after every change.
//!
//! ## Failure Semantics
//!
//! - Writes are best-effort: a failed write is logged and the in-memory
//!   state is kept. Nothing retries.
//! - A slot that cannot be read or parsed is treated as absent.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod codec;
mod error;
mod session;
mod store;

#[cfg(test)]
mod tests;

pub use codec::{decode_cart, decode_wishlist, encode_cart, encode_wishlist};
pub use error::PersistenceError;
pub use session::{CartSession, WishlistSession};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Storage slot holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Storage slot holding the serialized wishlist.
pub const WISHLIST_KEY: &str = "wishlist";
