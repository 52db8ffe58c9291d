// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::CartState;
use storefront_domain::ProductDescriptor;

/// A cart action represents caller intent as data only.
///
/// Actions are the only way to request cart changes.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add units of a product, merging into an existing line with the same id.
    AddItem {
        /// The product, with its price as of this call.
        product: ProductDescriptor,
        /// Units to add; must be at least 1.
        quantity: u32,
    },
    /// Delete the line for a product id.
    RemoveItem {
        /// The product id.
        id: String,
    },
    /// Set the quantity of a line. Values below 1 remove the line.
    UpdateQuantity {
        /// The product id.
        id: String,
        /// The new quantity.
        quantity: i64,
    },
    /// Remove every line.
    ClearCart,
    /// Replace the cart wholesale with a previously persisted state.
    Restore(CartState),
}

impl CartAction {
    /// Adds a single unit of a product.
    #[must_use]
    pub const fn add(product: ProductDescriptor) -> Self {
        Self::AddItem {
            product,
            quantity: 1,
        }
    }

    /// Removes the line for `id`.
    #[must_use]
    pub fn remove(id: &str) -> Self {
        Self::RemoveItem { id: id.to_string() }
    }

    /// Sets the quantity of the line for `id`.
    #[must_use]
    pub fn update_quantity(id: &str, quantity: i64) -> Self {
        Self::UpdateQuantity {
            id: id.to_string(),
            quantity,
        }
    }

    /// Returns the action's name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddItem { .. } => "AddItem",
            Self::RemoveItem { .. } => "RemoveItem",
            Self::UpdateQuantity { .. } => "UpdateQuantity",
            Self::ClearCart => "ClearCart",
            Self::Restore(_) => "Restore",
        }
    }
}
