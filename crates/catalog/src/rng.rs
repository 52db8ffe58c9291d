// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use tracing::debug;

/// The random source behind nutrition jitter and variant pricing.
#[derive(Debug)]
pub struct CatalogRng {
    inner: StdRng,
}

impl CatalogRng {
    /// A reproducible source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Uses `seed` when given, otherwise draws one.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        let seed: u64 = seed.unwrap_or_else(|| {
            let drawn: u64 = rand::random();
            debug!(seed = drawn, "No catalog seed configured; drew one");
            drawn
        });
        Self::seeded(seed)
    }

    /// Draws uniformly from `[low, high)`.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let unit: f64 = StandardUniform.sample(&mut self.inner);
        (high - low).mul_add(unit, low)
    }
}
