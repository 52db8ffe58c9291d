// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Name and price variants of seed products.

use crate::rng::CatalogRng;
use storefront_domain::{Category, GeneratedProduct, ProductSeed};

/// Lower bound of the variant price factor.
pub const VARIANT_PRICE_MIN: f64 = 0.8;
/// Upper bound of the variant price factor.
pub const VARIANT_PRICE_MAX: f64 = 1.2;

/// Name prefixes for variants of a category, cycled by variant number.
#[must_use]
pub const fn variant_prefixes(category: &Category) -> &'static [&'static str] {
    match category {
        Category::Vegetables => &[
            "Organic ",
            "Farm Fresh ",
            "Premium ",
            "Local ",
            "Hand-picked ",
        ],
        Category::Fruits => &["Organic ", "Seasonal ", "Premium ", "Juicy ", "Orchard "],
        Category::Staples => &[
            "Premium ",
            "Classic ",
            "Organic ",
            "Family Pack ",
            "Stone-ground ",
        ],
        Category::Dairy => &["Farm ", "Fresh ", "Organic ", "Creamy ", "Double "],
        Category::Spices => &["Aromatic ", "Premium ", "Hand-pounded ", "Organic ", "Whole "],
        Category::Beverages => &["Chilled ", "Classic ", "Premium ", "Natural ", "Fresh "],
        Category::Snacks => &["Crunchy ", "Classic ", "Spicy ", "Party Pack ", "Baked "],
        Category::Other | Category::Unrecognized(_) => {
            &["Premium ", "Classic ", "Select ", "Value ", "Special "]
        }
    }
}

/// How many variants each seed may contribute.
///
/// `ceil((target - seeds) / seeds)`, or zero when there are no seeds or the
/// seeds already fill the target.
#[must_use]
pub const fn variants_per_seed(target: usize, seed_count: usize) -> usize {
    if seed_count == 0 || seed_count >= target {
        return 0;
    }
    (target - seed_count).div_ceil(seed_count)
}

/// Builds variant `number` (1-based) of `seed`.
pub(crate) fn make_variant(
    seed: &GeneratedProduct,
    number: usize,
    rng: &mut CatalogRng,
) -> GeneratedProduct {
    let prefixes: &[&str] = variant_prefixes(&seed.product.category);
    let prefix: &str = prefixes[number % prefixes.len()];
    let factor: f64 = rng.uniform(VARIANT_PRICE_MIN, VARIANT_PRICE_MAX);

    let mut product: ProductSeed = seed.product.clone();
    product.id = format!("{}-v{number}", seed.product.id);
    product.name = format!("{prefix}{}", seed.product.name);
    product.price = (seed.product.price * factor).round();

    GeneratedProduct {
        product,
        nutrition: seed.nutrition,
        variant_of: Some(seed.product.id.clone()),
    }
}

/// Appends variants to `catalog` until it holds `target` products.
///
/// Seeds are visited in order and each contributes variants `1..=per_seed`;
/// generation stops as soon as the catalog is full, possibly partway
/// through a seed, so later seeds may contribute fewer variants.
pub(crate) fn expand(
    catalog: &mut Vec<GeneratedProduct>,
    seeds: &[GeneratedProduct],
    target: usize,
    rng: &mut CatalogRng,
) {
    let per_seed: usize = variants_per_seed(target, seeds.len());

    'seeds: for seed in seeds {
        for number in 1..=per_seed {
            if catalog.len() >= target {
                break 'seeds;
            }
            catalog.push(make_variant(seed, number, rng));
        }
    }

    catalog.truncate(target);
}
