// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{NUTRIENT_MAX, NUTRIENT_MIN, Nutrient, NutrientLevels, NutritionProfile, clamp_level};

#[test]
fn test_clamp_level_bounds() {
    assert!((clamp_level(0.0) - 5.0).abs() < f64::EPSILON);
    assert!((clamp_level(120.0) - 95.0).abs() < f64::EPSILON);
    assert!((clamp_level(42.5) - 42.5).abs() < f64::EPSILON);
    assert!((clamp_level(f64::NAN) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_profile_rounds_and_clamps() {
    let levels: NutrientLevels =
        NutrientLevels::new([-10.0, 2.4, 50.5, 94.6, 95.4, 200.0, 33.3, 70.0]);
    let profile: NutritionProfile = NutritionProfile::from_levels(&levels);

    assert_eq!(profile.values(), [5, 5, 51, 95, 95, 95, 33, 70]);
}

#[test]
fn test_profile_values_always_within_bounds() {
    let levels: NutrientLevels = NutrientLevels::new([f64::INFINITY; 8]);
    let profile: NutritionProfile = NutritionProfile::from_levels(&levels);

    for nutrient in Nutrient::ALL {
        let value: u8 = profile.get(nutrient);
        assert!((NUTRIENT_MIN..=NUTRIENT_MAX).contains(&value));
    }
}

#[test]
fn test_levels_set_and_map() {
    let mut levels: NutrientLevels = NutrientLevels::new([50.0; 8]);
    levels.set(Nutrient::Water, 90.0);
    let doubled: NutrientLevels = levels.map(|_, value| value * 2.0);

    assert!((doubled.get(Nutrient::Water) - 180.0).abs() < f64::EPSILON);
    assert!((doubled.get(Nutrient::Fiber) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_nutrient_index_matches_order() {
    for (position, nutrient) in Nutrient::ALL.iter().enumerate() {
        assert_eq!(nutrient.index(), position);
    }
    assert_eq!(Nutrient::Fiber.as_str(), "fiber");
}
