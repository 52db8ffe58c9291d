// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::totals::{Totals, compute_totals};
use serde::{Deserialize, Serialize};
use storefront_domain::CartLine;

/// The shopping cart: ordered line items plus derived totals.
///
/// Lines are kept in insertion order and no two lines share an id.
/// Totals are recomputed in full by every mutating transition; the only
/// way to hold totals that were not computed here is a restore from
/// persisted data (see [`CartState::from_persisted`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    lines: Vec<CartLine>,
    subtotal: f64,
    commission_fee: f64,
    grand_total: f64,
}

impl CartState {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            subtotal: 0.0,
            commission_fee: 0.0,
            grand_total: 0.0,
        }
    }

    /// Builds a cart from lines, recomputing totals.
    #[must_use]
    pub(crate) fn with_lines(lines: Vec<CartLine>) -> Self {
        let totals: Totals = compute_totals(&lines);
        Self {
            lines,
            subtotal: totals.subtotal,
            commission_fee: totals.commission_fee,
            grand_total: totals.grand_total,
        }
    }

    /// Rebuilds a cart exactly as it was persisted, totals included.
    ///
    /// No recomputation happens here; the caller vouches for the values.
    #[must_use]
    pub const fn from_persisted(
        lines: Vec<CartLine>,
        subtotal: f64,
        commission_fee: f64,
        grand_total: f64,
    ) -> Self {
        Self {
            lines,
            subtotal,
            commission_fee,
            grand_total,
        }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up the line for a product id.
    #[must_use]
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub const fn subtotal(&self) -> f64 {
        self.subtotal
    }

    /// The rounded commission on the subtotal.
    #[must_use]
    pub const fn commission_fee(&self) -> f64 {
        self.commission_fee
    }

    /// `subtotal + commission_fee`.
    #[must_use]
    pub const fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Returns whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns whether the stored totals match a fresh recomputation.
    ///
    /// Always true for states produced by `apply`; a restored state may
    /// carry whatever totals were persisted.
    #[must_use]
    pub fn totals_consistent(&self) -> bool {
        let totals: Totals = compute_totals(&self.lines);
        totals.subtotal.to_bits() == self.subtotal.to_bits()
            && totals.commission_fee.to_bits() == self.commission_fee.to_bits()
            && totals.grand_total.to_bits() == self.grand_total.to_bits()
    }

    pub(crate) fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }
}

/// The result of a cart transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The cart after the transition.
    pub new_state: CartState,
    /// Whether the transition changed anything worth persisting.
    ///
    /// `false` only for removals and quantity updates that target an id
    /// not present in the cart.
    pub changed: bool,
}
