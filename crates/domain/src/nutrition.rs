// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use num_traits::ToPrimitive;
use serde::Serialize;

/// Lowest value any nutrition dimension may take.
pub const NUTRIENT_MIN: u8 = 5;
/// Highest value any nutrition dimension may take.
pub const NUTRIENT_MAX: u8 = 95;

/// One dimension of a nutrition profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Vitamins,
    Minerals,
    Water,
}

impl Nutrient {
    /// All dimensions in profile order.
    pub const ALL: [Self; 8] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::Fiber,
        Self::Vitamins,
        Self::Minerals,
        Self::Water,
    ];

    /// Position of this dimension in a level vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the dimension's name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::Fiber => "fiber",
            Self::Vitamins => "vitamins",
            Self::Minerals => "minerals",
            Self::Water => "water",
        }
    }
}

/// A working vector of unrounded nutrient levels on a 0-100 scale.
///
/// Used while deriving a profile; converted to a [`NutritionProfile`] once
/// all adjustments are applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientLevels([f64; 8]);

impl NutrientLevels {
    /// Creates levels from values in [`Nutrient::ALL`] order.
    #[must_use]
    pub const fn new(values: [f64; 8]) -> Self {
        Self(values)
    }

    /// Returns the level for one dimension.
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        self.0[nutrient.index()]
    }

    /// Overwrites the level for one dimension.
    pub const fn set(&mut self, nutrient: Nutrient, value: f64) {
        self.0[nutrient.index()] = value;
    }

    /// Applies `f` to every dimension.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(Nutrient, f64) -> f64) -> Self {
        let mut out: [f64; 8] = self.0;
        for nutrient in Nutrient::ALL {
            out[nutrient.index()] = f(nutrient, self.0[nutrient.index()]);
        }
        Self(out)
    }
}

/// Clamps a level into `[NUTRIENT_MIN, NUTRIENT_MAX]`.
///
/// NaN collapses to the lower bound.
#[must_use]
pub fn clamp_level(value: f64) -> f64 {
    if value.is_nan() {
        return f64::from(NUTRIENT_MIN);
    }
    value.clamp(f64::from(NUTRIENT_MIN), f64::from(NUTRIENT_MAX))
}

/// An eight-dimension descriptive nutrition vector.
///
/// Every dimension is an integer in `[NUTRIENT_MIN, NUTRIENT_MAX]`; the only
/// way to build one is through [`NutritionProfile::from_levels`], which clamps
/// and rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NutritionProfile {
    calories: u8,
    protein: u8,
    carbs: u8,
    fat: u8,
    fiber: u8,
    vitamins: u8,
    minerals: u8,
    water: u8,
}

impl NutritionProfile {
    /// Clamps, rounds and freezes a working vector.
    #[must_use]
    pub fn from_levels(levels: &NutrientLevels) -> Self {
        let finish = |nutrient: Nutrient| -> u8 {
            clamp_level(levels.get(nutrient))
                .round()
                .to_u8()
                .unwrap_or(NUTRIENT_MIN)
        };
        Self {
            calories: finish(Nutrient::Calories),
            protein: finish(Nutrient::Protein),
            carbs: finish(Nutrient::Carbs),
            fat: finish(Nutrient::Fat),
            fiber: finish(Nutrient::Fiber),
            vitamins: finish(Nutrient::Vitamins),
            minerals: finish(Nutrient::Minerals),
            water: finish(Nutrient::Water),
        }
    }

    /// Returns the value of one dimension.
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> u8 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Vitamins => self.vitamins,
            Nutrient::Minerals => self.minerals,
            Nutrient::Water => self.water,
        }
    }

    /// Returns all dimensions in [`Nutrient::ALL`] order.
    #[must_use]
    pub const fn values(&self) -> [u8; 8] {
        [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.fiber,
            self.vitamins,
            self.minerals,
            self.water,
        ]
    }
}
