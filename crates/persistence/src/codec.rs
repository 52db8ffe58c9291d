// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON encoding of persisted slots.

use crate::error::PersistenceError;
use storefront::{CartState, WishlistState};

/// Serializes a cart, totals included.
///
/// # Errors
///
/// Returns `PersistenceError::Serialization` if encoding fails.
pub fn encode_cart(state: &CartState) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(state)?)
}

/// Parses a persisted cart. Totals are taken as written.
///
/// # Errors
///
/// Returns `PersistenceError::Serialization` if `raw` is not a valid cart.
pub fn decode_cart(raw: &str) -> Result<CartState, PersistenceError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serializes a wishlist.
///
/// # Errors
///
/// Returns `PersistenceError::Serialization` if encoding fails.
pub fn encode_wishlist(state: &WishlistState) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(state)?)
}

/// Parses a persisted wishlist.
///
/// # Errors
///
/// Returns `PersistenceError::Serialization` if `raw` is not a valid wishlist.
pub fn decode_wishlist(raw: &str) -> Result<WishlistState, PersistenceError> {
    Ok(serde_json::from_str(raw)?)
}
