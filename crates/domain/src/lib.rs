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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod nutrition;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use nutrition::{
    NUTRIENT_MAX, NUTRIENT_MIN, Nutrient, NutrientLevels, NutritionProfile, clamp_level,
};
pub use types::{CartLine, Category, GeneratedProduct, ProductDescriptor, ProductSeed};
pub use validation::{
    validate_cart_line, validate_descriptor, validate_product_id, validate_quantity_delta,
    validate_seed,
};
