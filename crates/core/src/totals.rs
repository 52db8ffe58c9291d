// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived monetary totals for a cart.

use storefront_domain::CartLine;

/// Commission charged on the cart subtotal, in percent.
pub const COMMISSION_PERCENT: f64 = 2.0;

/// Subtotal, commission and grand total for a set of lines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// Sum of `unit_price * quantity` over all lines.
    pub subtotal: f64,
    /// `round(subtotal * 2%)`.
    pub commission_fee: f64,
    /// `subtotal + commission_fee`.
    pub grand_total: f64,
}

/// Returns the commission fee for a subtotal.
///
/// Rounds half away from zero. The percentage is applied as `* 2 / 100`
/// rather than `* 0.02` so exact half-unit results (a subtotal of 25, say)
/// land on .5 and round up instead of being nudged by the binary
/// representation of 0.02.
#[must_use]
pub fn commission_for(subtotal: f64) -> f64 {
    (subtotal * COMMISSION_PERCENT / 100.0).round()
}

/// Recomputes all totals from scratch.
#[must_use]
pub fn compute_totals(lines: &[CartLine]) -> Totals {
    let subtotal: f64 = lines
        .iter()
        .fold(0.0, |acc: f64, line: &CartLine| acc + line.line_total());
    let commission_fee: f64 = commission_for(subtotal);
    Totals {
        subtotal,
        commission_fee,
        grand_total: subtotal + commission_fee,
    }
}
