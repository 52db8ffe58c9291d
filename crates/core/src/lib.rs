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

mod action;
mod apply;
mod error;
mod state;
mod totals;
mod validation;
mod wishlist;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use action::CartAction;
pub use apply::apply;
pub use error::CoreError;
pub use state::{CartState, TransitionResult};
pub use totals::{COMMISSION_PERCENT, Totals, commission_for, compute_totals};
pub use validation::{validate_persisted_cart, validate_persisted_wishlist};
pub use wishlist::{WishlistAction, WishlistState, WishlistTransition, apply_wishlist};
