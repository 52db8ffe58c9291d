// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The wishlist: an ordered set of saved product ids.

use crate::error::CoreError;
use crate::validation::validate_persisted_wishlist;
use serde::{Deserialize, Serialize};
use storefront_domain::validate_product_id;

/// Saved products, in the order they were saved. Ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistState {
    product_ids: Vec<String>,
}

impl WishlistState {
    /// Creates an empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            product_ids: Vec::new(),
        }
    }

    /// Saved ids in insertion order.
    #[must_use]
    pub fn product_ids(&self) -> &[String] {
        &self.product_ids
    }

    /// Returns whether `id` is saved.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.product_ids.iter().any(|saved| saved == id)
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    /// Returns whether nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}

/// Wishlist intent as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishlistAction {
    /// Save `id` if absent, unsave it if present.
    Toggle(String),
    /// Save `id`; no-op if already saved.
    Add(String),
    /// Unsave `id`; no-op if absent.
    Remove(String),
    /// Unsave everything.
    Clear,
    /// Replace the wishlist wholesale with a persisted one.
    Restore(WishlistState),
}

/// The result of a wishlist transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistTransition {
    /// The wishlist after the transition.
    pub new_state: WishlistState,
    /// Whether anything changed.
    pub changed: bool,
}

/// Applies a wishlist action.
///
/// # Errors
///
/// Returns an error if a `Toggle` or `Add` action carries a blank id, or a
/// `Restore` carries a blank or repeated id.
pub fn apply_wishlist(
    state: &WishlistState,
    action: WishlistAction,
) -> Result<WishlistTransition, CoreError> {
    match action {
        WishlistAction::Toggle(id) => {
            validate_product_id(&id)?;
            if state.contains(&id) {
                Ok(without(state, &id))
            } else {
                Ok(with(state, id))
            }
        }
        WishlistAction::Add(id) => {
            validate_product_id(&id)?;
            if state.contains(&id) {
                Ok(WishlistTransition {
                    new_state: state.clone(),
                    changed: false,
                })
            } else {
                Ok(with(state, id))
            }
        }
        WishlistAction::Remove(id) => {
            if state.contains(&id) {
                Ok(without(state, &id))
            } else {
                Ok(WishlistTransition {
                    new_state: state.clone(),
                    changed: false,
                })
            }
        }
        WishlistAction::Clear => Ok(WishlistTransition {
            new_state: WishlistState::new(),
            changed: true,
        }),
        WishlistAction::Restore(restored) => {
            validate_persisted_wishlist(&restored)?;
            Ok(WishlistTransition {
                new_state: restored,
                changed: true,
            })
        }
    }
}

fn with(state: &WishlistState, id: String) -> WishlistTransition {
    let mut product_ids: Vec<String> = state.product_ids.clone();
    product_ids.push(id);
    WishlistTransition {
        new_state: WishlistState { product_ids },
        changed: true,
    }
}

fn without(state: &WishlistState, id: &str) -> WishlistTransition {
    let product_ids: Vec<String> = state
        .product_ids
        .iter()
        .filter(|saved| saved.as_str() != id)
        .cloned()
        .collect();
    WishlistTransition {
        new_state: WishlistState { product_ids },
        changed: true,
    }
}
