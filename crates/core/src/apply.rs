// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::CartAction;
use crate::error::CoreError;
use crate::state::{CartState, TransitionResult};
use crate::validation::validate_persisted_cart;
use storefront_domain::{CartLine, DomainError, validate_descriptor, validate_quantity_delta};

/// Applies an action to the cart, producing a new cart.
///
/// Every transition except `Restore` recomputes totals from the resulting
/// lines. `Restore` checks the persisted lines and then installs the given
/// state verbatim.
///
/// # Arguments
///
/// * `state` - The current cart (immutable)
/// * `action` - The action to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new cart and whether it changed
/// * `Err(CoreError)` if the action's input is invalid
///
/// # Errors
///
/// Returns an error if:
/// - An `AddItem` action carries an empty product id, a negative or
///   non-finite unit price, or a zero quantity
/// - An `AddItem` or `UpdateQuantity` would make the totals non-finite
/// - A `Restore` carries a line that fails validation, or two lines with
///   the same id
pub fn apply(state: &CartState, action: CartAction) -> Result<TransitionResult, CoreError> {
    match action {
        CartAction::AddItem { product, quantity } => {
            validate_descriptor(&product)?;
            validate_quantity_delta(&product.id, quantity)?;

            let mut lines: Vec<CartLine> = state.clone().into_lines();
            let id: String = product.id.clone();
            if let Some(line) = lines.iter_mut().find(|line| line.id == product.id) {
                // Existing lines keep the price they were added at
                line.quantity = line.quantity.saturating_add(quantity);
            } else {
                lines.push(CartLine::from_descriptor(product, quantity));
            }

            recomputed(lines, &id)
        }
        CartAction::RemoveItem { id } => Ok(remove_line(state, &id)),
        CartAction::UpdateQuantity { id, quantity } => {
            if quantity < 1 {
                return Ok(remove_line(state, &id));
            }

            if state.line(&id).is_none() {
                return Ok(unchanged(state));
            }

            let quantity: u32 = u32::try_from(quantity).unwrap_or(u32::MAX);
            let mut lines: Vec<CartLine> = state.clone().into_lines();
            if let Some(line) = lines.iter_mut().find(|line| line.id == id) {
                line.quantity = quantity;
            }

            recomputed(lines, &id)
        }
        CartAction::ClearCart => Ok(TransitionResult {
            new_state: CartState::new(),
            changed: true,
        }),
        CartAction::Restore(restored) => {
            validate_persisted_cart(&restored)?;
            Ok(TransitionResult {
                new_state: restored,
                changed: true,
            })
        }
    }
}

/// Builds the cart for `lines`, rejecting totals that overflowed.
fn recomputed(lines: Vec<CartLine>, id: &str) -> Result<TransitionResult, CoreError> {
    let new_state: CartState = CartState::with_lines(lines);
    if !new_state.grand_total().is_finite() {
        return Err(DomainError::TotalOverflow { id: id.to_string() }.into());
    }
    Ok(TransitionResult {
        new_state,
        changed: true,
    })
}

fn remove_line(state: &CartState, id: &str) -> TransitionResult {
    if state.line(id).is_none() {
        return unchanged(state);
    }

    let lines: Vec<CartLine> = state
        .lines()
        .iter()
        .filter(|line| line.id != id)
        .cloned()
        .collect();

    TransitionResult {
        new_state: CartState::with_lines(lines),
        changed: true,
    }
}

fn unchanged(state: &CartState) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        changed: false,
    }
}
