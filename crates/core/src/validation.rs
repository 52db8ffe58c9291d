// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Checks applied to state read back from storage before it is installed.
//!
//! Persisted totals are trusted as stored; only the lines and ids are
//! checked.

use crate::error::CoreError;
use crate::state::CartState;
use crate::wishlist::WishlistState;
use std::collections::HashSet;
use storefront_domain::{DomainError, validate_cart_line, validate_product_id};

/// Validates a persisted cart.
///
/// # Errors
///
/// Returns an error if any line has an empty id, an invalid price, or a
/// zero quantity, or if two lines share an id.
pub fn validate_persisted_cart(state: &CartState) -> Result<(), CoreError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(state.lines().len());
    for line in state.lines() {
        validate_cart_line(line)?;
        if !seen.insert(line.id.as_str()) {
            return Err(DomainError::DuplicateProductId {
                id: line.id.clone(),
            }
            .into());
        }
    }
    Ok(())
}

/// Validates a persisted wishlist.
///
/// # Errors
///
/// Returns an error if an id is blank or appears twice.
pub fn validate_persisted_wishlist(state: &WishlistState) -> Result<(), CoreError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(state.len());
    for id in state.product_ids() {
        validate_product_id(id)?;
        if !seen.insert(id.as_str()) {
            return Err(DomainError::DuplicateProductId { id: id.clone() }.into());
        }
    }
    Ok(())
}
