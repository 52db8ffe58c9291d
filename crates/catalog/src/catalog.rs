// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::CatalogConfig;
use crate::images::normalize_image_ref;
use crate::nutrition::derive_nutrition;
use crate::rng::CatalogRng;
use crate::variants::{expand, variants_per_seed};
use std::collections::HashMap;
use storefront_domain::{
    Category, GeneratedProduct, NutritionProfile, ProductDescriptor, ProductSeed,
};
use tracing::{debug, info, warn};

/// Expands seed products into a catalog of `config.target_size` products.
///
/// The result lists every seed first (up to the target), in input order,
/// followed by generated variants. Apart from the random draws, which are
/// reproducible when `config.rng_seed` is set, the output depends only on
/// the seeds and their order.
///
/// # Arguments
///
/// * `seeds` - The seed products
/// * `config` - Target size, random seed, and image settings
#[must_use]
pub fn build_catalog(seeds: &[ProductSeed], config: &CatalogConfig) -> Vec<GeneratedProduct> {
    let mut rng: CatalogRng = CatalogRng::from_seed_option(config.rng_seed);
    let target: usize = config.target_size;

    let prepared: Vec<GeneratedProduct> = seeds
        .iter()
        .map(|seed| prepare_seed(seed, config, &mut rng))
        .collect();

    let mut catalog: Vec<GeneratedProduct> = prepared.iter().take(target).cloned().collect();
    expand(&mut catalog, &prepared, target, &mut rng);

    info!(
        seeds = seeds.len(),
        products = catalog.len(),
        variants_per_seed = variants_per_seed(target, seeds.len()),
        "Built catalog"
    );
    catalog
}

/// Normalizes a seed and attaches its nutrition profile.
fn prepare_seed(
    seed: &ProductSeed,
    config: &CatalogConfig,
    rng: &mut CatalogRng,
) -> GeneratedProduct {
    if !seed.category.is_recognized() {
        debug!(
            id = %seed.id,
            category = %seed.category,
            "Unrecognized category; using generic nutrition and placeholder image"
        );
    }

    let mut product: ProductSeed = seed.clone();
    product.image_ref = normalize_image_ref(&seed.image_ref, &seed.category, &config.images);
    let nutrition: NutritionProfile = derive_nutrition(&seed.name, &seed.category, rng);

    GeneratedProduct {
        product,
        nutrition,
        variant_of: None,
    }
}

/// A built catalog with lookups.
///
/// Built once at start-up and shared by reference; it is never rebuilt.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<GeneratedProduct>,
    by_id: HashMap<String, usize>,
}

impl CatalogStore {
    /// Builds the catalog from seeds.
    #[must_use]
    pub fn build(seeds: &[ProductSeed], config: &CatalogConfig) -> Self {
        Self::from_products(build_catalog(seeds, config))
    }

    /// Wraps an already generated product list.
    ///
    /// If two products share an id, lookups by id return the first.
    #[must_use]
    pub fn from_products(products: Vec<GeneratedProduct>) -> Self {
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if by_id.contains_key(product.id()) {
                warn!(id = product.id(), "Duplicate product id in catalog");
                continue;
            }
            by_id.insert(product.id().to_string(), position);
        }
        Self { products, by_id }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[GeneratedProduct] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks a product up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GeneratedProduct> {
        self.by_id.get(id).map(|&position| &self.products[position])
    }

    /// Products in one category, in catalog order.
    pub fn by_category<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a GeneratedProduct> + 'a {
        self.products
            .iter()
            .filter(move |product| &product.product.category == category)
    }

    /// Products whose name contains `term`, ignoring case.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&GeneratedProduct> {
        let term: String = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|product| product.name().to_lowercase().contains(&term))
            .collect()
    }

    /// The cart-facing descriptor for a product, priced as listed.
    #[must_use]
    pub fn descriptor(&self, id: &str) -> Option<ProductDescriptor> {
        self.get(id).map(|product| product.product.descriptor())
    }
}
