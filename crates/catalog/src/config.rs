// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Catalog size produced when no target is configured.
pub const DEFAULT_TARGET_SIZE: usize = 500;

/// Settings for catalog generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Exact number of products to produce (fewer only if there are no seeds).
    pub target_size: usize,
    /// Seed for the jitter and price draws. `None` draws a fresh seed.
    pub rng_seed: Option<u64>,
    /// Image resolution settings.
    pub images: ImageConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            rng_seed: None,
            images: ImageConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Default settings with a fixed random seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
            ..Self::default()
        }
    }
}

/// Where product images live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// Scheme and host, without a trailing slash.
    pub base_host: String,
    /// Path under the host for bare image file names, with leading and trailing slash.
    pub base_path: String,
    /// Prefixes of references that are already paths on the host.
    pub host_relative_prefixes: Vec<String>,
    /// Image used when a product has no usable reference.
    pub placeholder: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_host: String::from("https://static.storefront.example"),
            base_path: String::from("/images/products/"),
            host_relative_prefixes: vec![
                String::from("images/"),
                String::from("/images/"),
                String::from("assets/"),
                String::from("/assets/"),
            ],
            placeholder: String::from(
                "https://static.storefront.example/images/placeholder.svg",
            ),
        }
    }
}
