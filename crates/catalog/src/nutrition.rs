// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nutrition profiles derived from category and name keywords.

use crate::rng::CatalogRng;
use storefront_domain::{Category, Nutrient, NutrientLevels, NutritionProfile, clamp_level};

/// Multiplicative jitter applied to every dimension: `value * U[1 - J, 1 + J)`.
const JITTER: f64 = 0.10;

/// A name keyword and the dimensions it pins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordOverride {
    /// Lowercase substring matched against the lowercased product name.
    pub keyword: &'static str,
    /// Dimensions to overwrite when the keyword matches.
    pub levels: &'static [(Nutrient, f64)],
}

/// Keyword overrides, applied in declaration order.
///
/// Every matching entry is applied; when two matching entries set the same
/// dimension, the one declared later wins.
pub const KEYWORD_OVERRIDES: &[KeywordOverride] = &[
    KeywordOverride {
        keyword: "tomato",
        levels: &[
            (Nutrient::Vitamins, 75.0),
            (Nutrient::Water, 90.0),
            (Nutrient::Fiber, 40.0),
        ],
    },
    KeywordOverride {
        keyword: "potato",
        levels: &[
            (Nutrient::Calories, 45.0),
            (Nutrient::Carbs, 80.0),
            (Nutrient::Fiber, 35.0),
            (Nutrient::Water, 70.0),
        ],
    },
    KeywordOverride {
        keyword: "onion",
        levels: &[(Nutrient::Vitamins, 40.0), (Nutrient::Fiber, 45.0)],
    },
    KeywordOverride {
        keyword: "garlic",
        levels: &[(Nutrient::Minerals, 60.0), (Nutrient::Vitamins, 50.0)],
    },
    KeywordOverride {
        keyword: "spinach",
        levels: &[
            (Nutrient::Calories, 10.0),
            (Nutrient::Fiber, 65.0),
            (Nutrient::Vitamins, 90.0),
            (Nutrient::Minerals, 85.0),
        ],
    },
    KeywordOverride {
        keyword: "carrot",
        levels: &[
            (Nutrient::Carbs, 35.0),
            (Nutrient::Fiber, 55.0),
            (Nutrient::Vitamins, 90.0),
        ],
    },
    KeywordOverride {
        keyword: "cucumber",
        levels: &[(Nutrient::Calories, 8.0), (Nutrient::Water, 95.0)],
    },
    KeywordOverride {
        keyword: "chilli",
        levels: &[(Nutrient::Vitamins, 70.0)],
    },
    KeywordOverride {
        keyword: "apple",
        levels: &[
            (Nutrient::Fiber, 55.0),
            (Nutrient::Vitamins, 60.0),
            (Nutrient::Water, 85.0),
        ],
    },
    KeywordOverride {
        keyword: "banana",
        levels: &[
            (Nutrient::Calories, 55.0),
            (Nutrient::Carbs, 80.0),
            (Nutrient::Minerals, 60.0),
        ],
    },
    KeywordOverride {
        keyword: "mango",
        levels: &[(Nutrient::Carbs, 70.0), (Nutrient::Vitamins, 85.0)],
    },
    KeywordOverride {
        keyword: "orange",
        levels: &[(Nutrient::Vitamins, 95.0), (Nutrient::Water, 85.0)],
    },
    KeywordOverride {
        keyword: "lemon",
        levels: &[(Nutrient::Calories, 10.0), (Nutrient::Vitamins, 90.0)],
    },
    KeywordOverride {
        keyword: "coconut",
        levels: &[(Nutrient::Fat, 75.0), (Nutrient::Water, 60.0)],
    },
    KeywordOverride {
        keyword: "rice",
        levels: &[
            (Nutrient::Calories, 85.0),
            (Nutrient::Protein, 25.0),
            (Nutrient::Carbs, 90.0),
            (Nutrient::Fiber, 15.0),
        ],
    },
    KeywordOverride {
        keyword: "wheat",
        levels: &[
            (Nutrient::Protein, 45.0),
            (Nutrient::Carbs, 80.0),
            (Nutrient::Fiber, 60.0),
        ],
    },
    KeywordOverride {
        keyword: "atta",
        levels: &[
            (Nutrient::Protein, 45.0),
            (Nutrient::Carbs, 80.0),
            (Nutrient::Fiber, 60.0),
        ],
    },
    KeywordOverride {
        keyword: "dal",
        levels: &[(Nutrient::Protein, 80.0), (Nutrient::Fiber, 65.0)],
    },
    KeywordOverride {
        keyword: "lentil",
        levels: &[(Nutrient::Protein, 80.0), (Nutrient::Fiber, 65.0)],
    },
    KeywordOverride {
        keyword: "almond",
        levels: &[(Nutrient::Protein, 65.0), (Nutrient::Fat, 80.0)],
    },
    KeywordOverride {
        keyword: "milk",
        levels: &[
            (Nutrient::Protein, 55.0),
            (Nutrient::Fat, 40.0),
            (Nutrient::Minerals, 75.0),
            (Nutrient::Water, 85.0),
        ],
    },
    KeywordOverride {
        keyword: "paneer",
        levels: &[(Nutrient::Protein, 85.0), (Nutrient::Fat, 70.0)],
    },
    KeywordOverride {
        keyword: "ghee",
        levels: &[
            (Nutrient::Calories, 95.0),
            (Nutrient::Fat, 95.0),
            (Nutrient::Water, 5.0),
        ],
    },
    KeywordOverride {
        keyword: "oil",
        levels: &[(Nutrient::Calories, 90.0), (Nutrient::Fat, 95.0)],
    },
    KeywordOverride {
        keyword: "sugar",
        levels: &[
            (Nutrient::Calories, 90.0),
            (Nutrient::Carbs, 95.0),
            (Nutrient::Fiber, 5.0),
            (Nutrient::Vitamins, 5.0),
        ],
    },
    KeywordOverride {
        keyword: "salt",
        levels: &[(Nutrient::Calories, 5.0), (Nutrient::Minerals, 95.0)],
    },
    KeywordOverride {
        keyword: "turmeric",
        levels: &[(Nutrient::Minerals, 65.0), (Nutrient::Vitamins, 55.0)],
    },
    KeywordOverride {
        keyword: "juice",
        levels: &[
            (Nutrient::Fiber, 10.0),
            (Nutrient::Vitamins, 70.0),
            (Nutrient::Water, 90.0),
        ],
    },
    KeywordOverride {
        keyword: "tea",
        levels: &[(Nutrient::Calories, 5.0), (Nutrient::Water, 95.0)],
    },
];

/// The starting vector for a category, in [`Nutrient::ALL`] order.
///
/// `Other` and unrecognized categories share the generic baseline.
#[must_use]
pub const fn baseline_levels(category: &Category) -> NutrientLevels {
    //                        cal   prot  carb  fat   fiber vit   min   water
    let values: [f64; 8] = match category {
        Category::Vegetables => [20.0, 15.0, 25.0, 5.0, 70.0, 65.0, 55.0, 85.0],
        Category::Fruits => [35.0, 8.0, 60.0, 5.0, 45.0, 80.0, 35.0, 80.0],
        Category::Staples => [80.0, 40.0, 85.0, 15.0, 50.0, 25.0, 45.0, 10.0],
        Category::Dairy => [55.0, 60.0, 30.0, 50.0, 5.0, 40.0, 70.0, 75.0],
        Category::Spices => [30.0, 20.0, 40.0, 25.0, 60.0, 45.0, 80.0, 10.0],
        Category::Beverages => [25.0, 5.0, 35.0, 5.0, 5.0, 30.0, 15.0, 95.0],
        Category::Snacks => [85.0, 20.0, 70.0, 60.0, 20.0, 15.0, 25.0, 5.0],
        Category::Other | Category::Unrecognized(_) => {
            [50.0, 30.0, 50.0, 25.0, 30.0, 40.0, 40.0, 50.0]
        }
    };
    NutrientLevels::new(values)
}

/// Applies every matching keyword override to `levels`, in table order.
#[must_use]
pub fn apply_keyword_overrides(levels: NutrientLevels, name: &str) -> NutrientLevels {
    let name: String = name.to_lowercase();
    let mut levels: NutrientLevels = levels;
    for entry in KEYWORD_OVERRIDES
        .iter()
        .filter(|entry| name.contains(entry.keyword))
    {
        for &(nutrient, value) in entry.levels {
            levels.set(nutrient, clamp_level(value));
        }
    }
    levels
}

/// Derives a product's nutrition profile.
///
/// Baseline by category, then keyword overrides, then an independent
/// ±10% multiplicative jitter per dimension, then clamp and round.
pub fn derive_nutrition(name: &str, category: &Category, rng: &mut CatalogRng) -> NutritionProfile {
    let levels: NutrientLevels = apply_keyword_overrides(baseline_levels(category), name);
    let jittered: NutrientLevels =
        levels.map(|_, value| value * rng.uniform(1.0 - JITTER, 1.0 + JITTER));
    NutritionProfile::from_levels(&jittered)
}
