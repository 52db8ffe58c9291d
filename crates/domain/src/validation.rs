// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CartLine, ProductDescriptor, ProductSeed};

/// Validates a product descriptor before it is added to the cart.
///
/// # Arguments
///
/// * `product` - The descriptor to validate
///
/// # Errors
///
/// Returns an error if:
/// - The product id is empty
/// - The unit price is negative, NaN, or infinite
pub fn validate_descriptor(product: &ProductDescriptor) -> Result<(), DomainError> {
    validate_product_id(&product.id)?;
    validate_price(&product.id, product.unit_price)
}

/// Validates the quantity delta of an add-to-cart request.
///
/// # Errors
///
/// Returns `DomainError::InvalidQuantity` if `delta` is zero.
pub fn validate_quantity_delta(id: &str, delta: u32) -> Result<(), DomainError> {
    if delta == 0 {
        return Err(DomainError::InvalidQuantity {
            id: id.to_string(),
            quantity: delta,
        });
    }
    Ok(())
}

/// Validates a cart line read back from storage.
///
/// # Errors
///
/// Returns an error if:
/// - The product id is empty
/// - The unit price is negative, NaN, or infinite
/// - The quantity is zero
pub fn validate_cart_line(line: &CartLine) -> Result<(), DomainError> {
    validate_product_id(&line.id)?;
    validate_price(&line.id, line.unit_price)?;
    validate_quantity_delta(&line.id, line.quantity)
}

/// Validates a seed product loaded from an external source.
///
/// The catalog generator itself accepts any seed; this check is applied
/// where seed data enters the system.
///
/// # Errors
///
/// Returns an error if:
/// - The id is empty
/// - The name is empty
/// - The price is negative, NaN, or infinite
pub fn validate_seed(seed: &ProductSeed) -> Result<(), DomainError> {
    validate_product_id(&seed.id)?;

    if seed.name.trim().is_empty() {
        return Err(DomainError::EmptyProductName {
            id: seed.id.clone(),
        });
    }

    validate_price(&seed.id, seed.price)
}

/// Validates that a product identifier is not blank.
///
/// # Errors
///
/// Returns `DomainError::EmptyProductId` if `id` is empty or whitespace.
pub fn validate_product_id(id: &str) -> Result<(), DomainError> {
    if id.trim().is_empty() {
        return Err(DomainError::EmptyProductId);
    }
    Ok(())
}

fn validate_price(id: &str, price: f64) -> Result<(), DomainError> {
    // Rule: prices are finite and non-negative
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::InvalidPrice {
            id: id.to_string(),
            price,
        });
    }
    Ok(())
}
