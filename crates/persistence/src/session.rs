// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-writer owners of the cart and wishlist.
//!
//! Each session holds the authoritative in-memory state and is the only
//! path through which it changes. Transitions are applied one at a time
//! through `&mut self`; hosts that dispatch from several threads must
//! funnel actions through one owner (for example behind a `Mutex`).

use crate::codec::{decode_cart, decode_wishlist, encode_cart, encode_wishlist};
use crate::error::PersistenceError;
use crate::store::KeyValueStore;
use crate::{CART_KEY, WISHLIST_KEY};
use storefront::{
    CartAction, CartState, CoreError, TransitionResult, WishlistAction, WishlistState,
    WishlistTransition, apply, apply_wishlist,
};
use tracing::{debug, info, warn};

/// Reads a slot, treating read failures like an empty slot.
fn read_slot<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "Failed to read storage slot; treating as empty");
            None
        }
    }
}

/// Writes a slot, logging and swallowing failures.
fn write_slot<S: KeyValueStore>(
    store: &mut S,
    key: &str,
    encoded: Result<String, PersistenceError>,
) {
    let result: Result<(), PersistenceError> = encoded.and_then(|value| store.set(key, &value));
    if let Err(err) = result {
        warn!(key, error = %err, "Failed to persist storage slot; keeping in-memory state");
    }
}

/// Owns the shopping cart and its storage slot.
#[derive(Debug)]
pub struct CartSession<S> {
    store: S,
    state: CartState,
}

impl<S: KeyValueStore> CartSession<S> {
    /// Creates a session with an empty cart, without reading storage.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            state: CartState::new(),
        }
    }

    /// Creates a session and restores any persisted cart.
    ///
    /// This is the application-start path.
    #[must_use]
    pub fn open(store: S) -> Self {
        let mut session: Self = Self::new(store);
        session.restore();
        session
    }

    /// Reloads the cart from storage.
    ///
    /// Called at start-up and whenever the surrounding application signals
    /// that a user session was restored. If the slot holds a parsable cart it
    /// replaces the current one verbatim. An absent slot, a malformed one, or
    /// one whose lines fail validation (zero quantity, bad price, repeated
    /// id) leaves the current cart untouched. Nothing is written back.
    ///
    /// Returns whether a persisted cart was installed.
    pub fn restore(&mut self) -> bool {
        let Some(raw) = read_slot(&self.store, CART_KEY) else {
            debug!("No persisted cart found");
            return false;
        };

        let persisted: CartState = match decode_cart(&raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, "Discarding malformed persisted cart");
                return false;
            }
        };

        match apply(&self.state, CartAction::Restore(persisted)) {
            Ok(result) => {
                self.state = result.new_state;
                info!(
                    lines = self.state.lines().len(),
                    grand_total = self.state.grand_total(),
                    "Restored persisted cart"
                );
                true
            }
            Err(err) => {
                warn!(error = %err, "Discarding invalid persisted cart");
                false
            }
        }
    }

    /// Applies an action and persists the result if anything changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the action's input is invalid; the cart is left
    /// unchanged. Storage failures are not errors.
    pub fn dispatch(&mut self, action: CartAction) -> Result<&CartState, CoreError> {
        let name: &'static str = action.name();
        let result: TransitionResult = apply(&self.state, action)?;
        self.state = result.new_state;

        debug!(
            action = name,
            changed = result.changed,
            lines = self.state.lines().len(),
            subtotal = self.state.subtotal(),
            "Applied cart action"
        );

        if result.changed {
            write_slot(&mut self.store, CART_KEY, encode_cart(&self.state));
        }
        Ok(&self.state)
    }

    /// The current cart.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session, returning the backing store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Owns the wishlist and its storage slot.
#[derive(Debug)]
pub struct WishlistSession<S> {
    store: S,
    state: WishlistState,
}

impl<S: KeyValueStore> WishlistSession<S> {
    /// Creates a session with an empty wishlist, without reading storage.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            state: WishlistState::new(),
        }
    }

    /// Creates a session and restores any persisted wishlist.
    #[must_use]
    pub fn open(store: S) -> Self {
        let mut session: Self = Self::new(store);
        session.restore();
        session
    }

    /// Reloads the wishlist from storage, with the same rules as
    /// [`CartSession::restore`].
    pub fn restore(&mut self) -> bool {
        let Some(raw) = read_slot(&self.store, WISHLIST_KEY) else {
            return false;
        };

        match decode_wishlist(&raw) {
            Ok(persisted) => match apply_wishlist(&self.state, WishlistAction::Restore(persisted))
            {
                Ok(result) => {
                    self.state = result.new_state;
                    info!(saved = self.state.len(), "Restored persisted wishlist");
                    true
                }
                Err(err) => {
                    warn!(error = %err, "Discarding invalid persisted wishlist");
                    false
                }
            },
            Err(err) => {
                warn!(error = %err, "Discarding malformed persisted wishlist");
                false
            }
        }
    }

    /// Applies an action and persists the result if anything changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the action's input is invalid.
    pub fn dispatch(&mut self, action: WishlistAction) -> Result<&WishlistState, CoreError> {
        let result: WishlistTransition = apply_wishlist(&self.state, action)?;
        self.state = result.new_state;

        if result.changed {
            write_slot(&mut self.store, WISHLIST_KEY, encode_wishlist(&self.state));
        }
        Ok(&self.state)
    }

    /// The current wishlist.
    #[must_use]
    pub const fn state(&self) -> &WishlistState {
        &self.state
    }

    /// Consumes the session, returning the backing store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
