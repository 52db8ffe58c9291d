// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog generation for the storefront.
//!
//! A small list of seed products is expanded into a fixed-size catalog:
//!
//! 1. Image references are normalized against a fixed host and base path.
//! 2. Each seed gets a nutrition profile derived from its category and
//!    name keywords, with a small random jitter.
//! 3. Name/price variants of the seeds are generated until the catalog
//!    reaches its target size.
//!
//! Generation never fails on well-formed seeds. Unknown categories get a
//! generic nutrition baseline and a placeholder image.

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
#![allow(clippy::multiple_crate_versions)]

mod catalog;
mod config;
mod images;
mod nutrition;
mod rng;
mod seeds;
mod variants;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogStore, build_catalog};
pub use config::{CatalogConfig, DEFAULT_TARGET_SIZE, ImageConfig};
pub use images::normalize_image_ref;
pub use nutrition::{
    KEYWORD_OVERRIDES, KeywordOverride, apply_keyword_overrides, baseline_levels, derive_nutrition,
};
pub use rng::CatalogRng;
pub use seeds::{SeedLoadError, load_seeds, parse_csv_seeds, parse_json_seeds};
pub use variants::{VARIANT_PRICE_MAX, VARIANT_PRICE_MIN, variant_prefixes, variants_per_seed};
