// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{apply_all, assert_close, create_test_product};
use crate::{CartAction, CartState, CoreError, TransitionResult, apply};
use storefront_domain::{CartLine, DomainError, ProductDescriptor};

#[test]
fn test_add_item_appends_new_line() {
    let state: CartState = CartState::new();
    let result: TransitionResult =
        apply(&state, CartAction::add(create_test_product("x", 40.0))).unwrap();

    assert!(result.changed);
    assert_eq!(result.new_state.lines().len(), 1);
    assert_eq!(result.new_state.lines()[0].id, "x");
    assert_eq!(result.new_state.lines()[0].quantity, 1);
    assert_eq!(result.new_state.lines()[0].image_ref, "x.jpg");
}

#[test]
fn test_add_same_item_twice_merges_lines() {
    let state: CartState = apply_all(vec![
        CartAction::add(create_test_product("x", 40.0)),
        CartAction::add(create_test_product("x", 40.0)),
    ]);

    assert_eq!(state.lines().len(), 1);
    assert_eq!(state.lines()[0].quantity, 2);
    assert_close(state.subtotal(), 80.0);
    assert_close(state.commission_fee(), 2.0);
    assert_close(state.grand_total(), 82.0);
}

#[test]
fn test_add_is_associative_on_quantity() {
    let twice: CartState = apply_all(vec![
        CartAction::add(create_test_product("x", 40.0)),
        CartAction::add(create_test_product("x", 40.0)),
    ]);
    let once: CartState = apply_all(vec![CartAction::AddItem {
        product: create_test_product("x", 40.0),
        quantity: 2,
    }]);

    assert_eq!(twice, once);
}

#[test]
fn test_add_keeps_original_price_for_existing_line() {
    let state: CartState = apply_all(vec![
        CartAction::add(create_test_product("x", 40.0)),
        CartAction::add(create_test_product("x", 55.0)),
    ]);

    let line: &CartLine = state.line("x").unwrap();
    assert_close(line.unit_price, 40.0);
    assert_close(state.subtotal(), 80.0);
}

#[test]
fn test_add_preserves_insertion_order() {
    let state: CartState = apply_all(vec![
        CartAction::add(create_test_product("b", 10.0)),
        CartAction::add(create_test_product("a", 20.0)),
        CartAction::add(create_test_product("c", 30.0)),
        CartAction::add(create_test_product("a", 20.0)),
    ]);

    let ids: Vec<&str> = state.lines().iter().map(|line| line.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
    assert_eq!(state.item_count(), 4);
}

#[test]
fn test_add_with_zero_quantity_is_rejected() {
    let state: CartState = CartState::new();
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        CartAction::AddItem {
            product: create_test_product("x", 40.0),
            quantity: 0,
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidQuantity { .. }))
    ));
}

#[test]
fn test_add_with_negative_price_is_rejected() {
    let state: CartState = CartState::new();
    let product: ProductDescriptor = create_test_product("x", -5.0);
    let result: Result<TransitionResult, CoreError> = apply(&state, CartAction::add(product));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidPrice { .. }))
    ));
}

#[test]
fn test_remove_item_deletes_line_and_recomputes() {
    let state: CartState = apply_all(vec![
        CartAction::add(create_test_product("x", 40.0)),
        CartAction::add(create_test_product("y", 60.0)),
        CartAction::remove("x"),
    ]);

    assert_eq!(state.lines().len(), 1);
    assert!(state.line("x").is_none());
    assert_close(state.subtotal(), 60.0);
    assert_close(state.commission_fee(), 1.0);
    assert_close(state.grand_total(), 61.0);
}

#[test]
fn test_remove_absent_item_is_noop() {
    let state: CartState = apply_all(vec![CartAction::add(create_test_product("x", 40.0))]);
    let result: TransitionResult = apply(&state, CartAction::remove("missing")).unwrap();

    assert!(!result.changed);
    assert_eq!(result.new_state, state);
}

#[test]
fn test_remove_is_idempotent() {
    let state: CartState = apply_all(vec![
        CartAction::add(create_test_product("x", 40.0)),
        CartAction::add(create_test_product("y", 10.0)),
    ]);
    let once: CartState = apply(&state, CartAction::remove("x")).unwrap().new_state;
    let twice: TransitionResult = apply(&once, CartAction::remove("x")).unwrap();

    assert!(!twice.changed);
    assert_eq!(twice.new_state, once);
}

#[test]
fn test_update_quantity_sets_quantity() {
    let state: CartState = apply_all(vec![
        CartAction::add(create_test_product("x", 25.0)),
        CartAction::update_quantity("x", 4),
    ]);

    assert_eq!(state.line("x").unwrap().quantity, 4);
    assert_close(state.subtotal(), 100.0);
    assert_close(state.commission_fee(), 2.0);
    assert_close(state.grand_total(), 102.0);
}

#[test]
fn test_update_quantity_to_zero_removes_line() {
    let state: CartState = apply_all(vec![
        CartAction::add(create_test_product("x", 100.0)),
        CartAction::update_quantity("x", 0),
    ]);

    assert!(state.is_empty());
    assert_close(state.subtotal(), 0.0);
    assert_close(state.commission_fee(), 0.0);
    assert_close(state.grand_total(), 0.0);
}

#[test]
fn test_update_quantity_below_one_matches_remove() {
    let base: CartState = apply_all(vec![
        CartAction::add(create_test_product("x", 100.0)),
        CartAction::add(create_test_product("y", 30.0)),
    ]);

    let removed: TransitionResult = apply(&base, CartAction::remove("x")).unwrap();
    for quantity in [0, -1, -50] {
        let updated: TransitionResult =
            apply(&base, CartAction::update_quantity("x", quantity)).unwrap();
        assert_eq!(updated, removed);
    }
}

#[test]
fn test_update_quantity_of_absent_item_is_noop() {
    let state: CartState = apply_all(vec![CartAction::add(create_test_product("x", 40.0))]);
    let result: TransitionResult = apply(&state, CartAction::update_quantity("y", 3)).unwrap();

    assert!(!result.changed);
    assert_eq!(result.new_state, state);
}

#[test]
fn test_clear_cart_empties_lines() {
    let state: CartState = apply_all(vec![
        CartAction::add(create_test_product("x", 40.0)),
        CartAction::add(create_test_product("y", 40.0)),
    ]);
    let result: TransitionResult = apply(&state, CartAction::ClearCart).unwrap();

    assert!(result.changed);
    assert_eq!(result.new_state, CartState::new());
}

#[test]
fn test_clear_empty_cart_still_reports_change() {
    let result: TransitionResult = apply(&CartState::new(), CartAction::ClearCart).unwrap();
    assert!(result.changed);
}

#[test]
fn test_restore_installs_state_verbatim() {
    let lines: Vec<CartLine> = vec![CartLine::from_descriptor(
        create_test_product("x", 40.0),
        2,
    )];
    // Totals deliberately disagree with the lines
    let persisted: CartState = CartState::from_persisted(lines, 999.0, 7.0, 1006.0);

    let result: TransitionResult =
        apply(&CartState::new(), CartAction::Restore(persisted.clone())).unwrap();

    assert_eq!(result.new_state, persisted);
    assert_close(result.new_state.subtotal(), 999.0);
    assert!(!result.new_state.totals_consistent());
}

#[test]
fn test_mutation_after_restore_recomputes_totals() {
    let lines: Vec<CartLine> = vec![CartLine::from_descriptor(
        create_test_product("x", 40.0),
        2,
    )];
    let persisted: CartState = CartState::from_persisted(lines, 999.0, 7.0, 1006.0);
    let state: CartState = apply_all(vec![
        CartAction::Restore(persisted),
        CartAction::add(create_test_product("y", 20.0)),
    ]);

    assert!(state.totals_consistent());
    assert_close(state.subtotal(), 100.0);
}

#[test]
fn test_action_names() {
    assert_eq!(CartAction::ClearCart.name(), "ClearCart");
    assert_eq!(CartAction::remove("x").name(), "RemoveItem");
    assert_eq!(CartAction::update_quantity("x", 2).name(), "UpdateQuantity");
}

#[test]
fn test_state_serializes_with_camel_case_totals() {
    let state: CartState = apply_all(vec![CartAction::add(create_test_product("x", 40.0))]);
    let value: serde_json::Value = serde_json::to_value(&state).unwrap();

    assert_eq!(value["lines"][0]["unitPrice"], 40.0);
    assert_eq!(value["commissionFee"], 1.0);
    assert_eq!(value["grandTotal"], 41.0);
}

#[test]
fn test_add_rejects_total_overflow() {
    let state: CartState = apply_all(vec![CartAction::add(create_test_product("a", 10.0))]);
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        CartAction::AddItem {
            product: create_test_product("x", 1e308),
            quantity: 2,
        },
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::TotalOverflow {
            id: String::from("x"),
        }))
    );
}

#[test]
fn test_update_rejects_total_overflow() {
    let state: CartState = apply_all(vec![CartAction::add(create_test_product("x", 1e300))]);
    let result: Result<TransitionResult, CoreError> =
        apply(&state, CartAction::update_quantity("x", i64::MAX));

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::TotalOverflow { .. }))
    ));
    assert_eq!(state.line("x").unwrap().quantity, 1);
}

#[test]
fn test_restore_rejects_zero_quantity_line() {
    let lines: Vec<CartLine> = vec![CartLine::from_descriptor(create_test_product("x", 10.0), 0)];
    let persisted: CartState = CartState::from_persisted(lines, 0.0, 0.0, 0.0);

    assert!(matches!(
        apply(&CartState::new(), CartAction::Restore(persisted)),
        Err(CoreError::DomainViolation(DomainError::InvalidQuantity { .. }))
    ));
}

#[test]
fn test_restore_rejects_negative_price_line() {
    let lines: Vec<CartLine> = vec![CartLine::from_descriptor(create_test_product("x", -5.0), 3)];
    let persisted: CartState = CartState::from_persisted(lines, -15.0, 0.0, -15.0);

    assert!(matches!(
        apply(&CartState::new(), CartAction::Restore(persisted)),
        Err(CoreError::DomainViolation(DomainError::InvalidPrice { .. }))
    ));
}

#[test]
fn test_restore_rejects_repeated_ids() {
    let lines: Vec<CartLine> = vec![
        CartLine::from_descriptor(create_test_product("x", 10.0), 1),
        CartLine::from_descriptor(create_test_product("x", 10.0), 2),
    ];
    let persisted: CartState = CartState::from_persisted(lines, 30.0, 1.0, 31.0);

    assert_eq!(
        apply(&CartState::new(), CartAction::Restore(persisted)),
        Err(CoreError::DomainViolation(DomainError::DuplicateProductId {
            id: String::from("x"),
        }))
    );
}
