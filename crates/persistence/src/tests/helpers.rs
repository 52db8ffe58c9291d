// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{KeyValueStore, PersistenceError};
use std::path::PathBuf;
use storefront_domain::ProductDescriptor;

pub fn create_test_product(id: &str, unit_price: f64) -> ProductDescriptor {
    ProductDescriptor::new(id, &format!("Product {id}"), unit_price, &format!("{id}.jpg"))
}

/// A unique, not yet existing directory under the system temp dir.
pub fn unique_temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("storefront-test-{}", rand::random::<u64>()))
}

/// A store whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub attempts: usize,
    pub seeded: Option<String>,
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.seeded.clone())
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), PersistenceError> {
        self.attempts += 1;
        Err(PersistenceError::Io {
            key: key.to_string(),
            source: std::io::Error::other("disk full"),
        })
    }
}

/// A store whose reads always fail.
#[derive(Debug, Default)]
pub struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Err(PersistenceError::Io {
            key: key.to_string(),
            source: std::io::Error::other("permission denied"),
        })
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
        Ok(())
    }
}
