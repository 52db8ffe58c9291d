// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CartAction, CartState, apply};
use storefront_domain::ProductDescriptor;

pub fn create_test_product(id: &str, unit_price: f64) -> ProductDescriptor {
    ProductDescriptor::new(id, &format!("Product {id}"), unit_price, &format!("{id}.jpg"))
}

/// Applies a sequence of actions, panicking on any error.
pub fn apply_all(actions: Vec<CartAction>) -> CartState {
    let mut state: CartState = CartState::new();
    for action in actions {
        state = apply(&state, action).unwrap().new_state;
    }
    state
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
