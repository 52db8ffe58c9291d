// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use storefront_domain::{Category, ProductSeed};

const NAMES: [(&str, &str); 6] = [
    ("Fresh Tomato", "vegetables"),
    ("Alphonso Mango", "fruits"),
    ("Basmati Rice", "staples"),
    ("Toned Milk", "dairy"),
    ("Turmeric Powder", "spices"),
    ("Masala Chips", "snacks"),
];

/// `count` seeds with ids "1".."count", cycling through a few categories.
pub fn create_test_seeds(count: usize) -> Vec<ProductSeed> {
    (1..=count)
        .map(|n| {
            let (name, category) = NAMES[(n - 1) % NAMES.len()];
            let price: f64 = f64::from(u32::try_from(n).unwrap() * 10);
            ProductSeed::new(
                &n.to_string(),
                name,
                price,
                &format!("product-{n}.jpg"),
                Category::parse(category),
            )
        })
        .collect()
}

pub fn tomato_seed() -> ProductSeed {
    ProductSeed::new("1", "Fresh Tomato", 40.0, "tomato.jpg", Category::Vegetables)
}
