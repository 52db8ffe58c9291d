// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A product identifier is empty.
    EmptyProductId,
    /// A product name is empty.
    EmptyProductName {
        /// The product identifier.
        id: String,
    },
    /// A price is negative, NaN, or infinite.
    InvalidPrice {
        /// The product identifier.
        id: String,
        /// The rejected price.
        price: f64,
    },
    /// A quantity delta of zero was supplied when adding to the cart.
    InvalidQuantity {
        /// The product identifier.
        id: String,
        /// The rejected quantity.
        quantity: u32,
    },
    /// The same product id appears twice where ids must be unique.
    DuplicateProductId {
        /// The repeated identifier.
        id: String,
    },
    /// Adding or updating a product would push the cart total past the
    /// largest representable amount.
    TotalOverflow {
        /// The product being added or updated.
        id: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProductId => write!(f, "Product id cannot be empty"),
            Self::EmptyProductName { id } => {
                write!(f, "Product '{id}' has an empty name")
            }
            Self::InvalidPrice { id, price } => {
                write!(
                    f,
                    "Product '{id}' has invalid price {price}: must be a finite, non-negative number"
                )
            }
            Self::InvalidQuantity { id, quantity } => {
                write!(
                    f,
                    "Invalid quantity {quantity} for product '{id}': must be at least 1"
                )
            }
            Self::DuplicateProductId { id } => {
                write!(f, "Product '{id}' appears more than once")
            }
            Self::TotalOverflow { id } => {
                write!(f, "Cart total overflows when changing product '{id}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
