// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_seeds;
use crate::{
    CatalogConfig, VARIANT_PRICE_MAX, VARIANT_PRICE_MIN, build_catalog, variant_prefixes,
    variants_per_seed,
};
use storefront_domain::{Category, GeneratedProduct, ProductSeed};

#[test]
fn test_variants_per_seed_rounds_up() {
    assert_eq!(variants_per_seed(500, 60), 8);
    assert_eq!(variants_per_seed(500, 100), 4);
    assert_eq!(variants_per_seed(500, 499), 1);
    assert_eq!(variants_per_seed(10, 3), 3);
}

#[test]
fn test_variants_per_seed_degenerate_cases() {
    assert_eq!(variants_per_seed(500, 0), 0);
    assert_eq!(variants_per_seed(500, 500), 0);
    assert_eq!(variants_per_seed(500, 900), 0);
}

#[test]
fn test_expansion_stops_mid_seed() {
    let seeds: Vec<ProductSeed> = create_test_seeds(3);
    let config: CatalogConfig = CatalogConfig {
        target_size: 10,
        ..CatalogConfig::seeded(1)
    };
    let catalog: Vec<GeneratedProduct> = build_catalog(&seeds, &config);

    let count_for = |seed_id: &str| {
        catalog
            .iter()
            .filter(|product| product.variant_of.as_deref() == Some(seed_id))
            .count()
    };

    assert_eq!(catalog.len(), 10);
    assert_eq!(count_for("1"), 3);
    assert_eq!(count_for("2"), 3);
    assert_eq!(count_for("3"), 1);
}

#[test]
fn test_variant_fields_derive_from_seed() {
    let seeds: Vec<ProductSeed> = create_test_seeds(60);
    let catalog: Vec<GeneratedProduct> = build_catalog(&seeds, &CatalogConfig::seeded(9));
    let seed: &GeneratedProduct = &catalog[0];
    let variants: Vec<&GeneratedProduct> = catalog
        .iter()
        .filter(|product| product.variant_of.as_deref() == Some(seed.id()))
        .collect();
    let prefixes: &[&str] = variant_prefixes(&Category::Vegetables);

    assert_eq!(variants.len(), 8);
    for (offset, variant) in variants.iter().enumerate() {
        let number: usize = offset + 1;
        assert_eq!(variant.id(), format!("1-v{number}"));
        assert_eq!(
            variant.name(),
            format!("{}{}", prefixes[number % prefixes.len()], seed.name())
        );
        assert_eq!(variant.product.category, seed.product.category);
        assert_eq!(variant.product.image_ref, seed.product.image_ref);
        assert_eq!(variant.nutrition, seed.nutrition);
    }
}

#[test]
fn test_variant_prices_are_rounded_and_bounded() {
    let seeds: Vec<ProductSeed> = create_test_seeds(60);
    let catalog: Vec<GeneratedProduct> = build_catalog(&seeds, &CatalogConfig::seeded(17));

    for variant in catalog.iter().filter(|product| product.is_variant()) {
        let base: f64 = seeds
            .iter()
            .find(|seed| Some(seed.id.as_str()) == variant.variant_of.as_deref())
            .unwrap()
            .price;
        let price: f64 = variant.product.price;

        assert!((price - price.round()).abs() < f64::EPSILON);
        assert!(price >= (base * VARIANT_PRICE_MIN).round());
        assert!(price <= (base * VARIANT_PRICE_MAX).round());
    }
}

#[test]
fn test_every_category_has_prefixes() {
    for category in Category::KNOWN {
        assert!(!variant_prefixes(&category).is_empty());
    }
    assert!(!variant_prefixes(&Category::parse("gadgets")).is_empty());
}
