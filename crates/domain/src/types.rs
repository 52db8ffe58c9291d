// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::nutrition::NutritionProfile;
use serde::{Deserialize, Serialize};

/// Product category.
///
/// Categories are matched case-insensitively. An empty category string is
/// treated as `Other`; any other unknown value is preserved verbatim in
/// `Unrecognized` so it can be displayed, but receives fallback treatment
/// (generic nutrition baseline, placeholder image) during catalog generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Fresh vegetables.
    Vegetables,
    /// Fresh fruits.
    Fruits,
    /// Grains, pulses, flours and other pantry staples.
    Staples,
    /// Milk, curd, cheese and the like.
    Dairy,
    /// Whole and ground spices.
    Spices,
    /// Drinks.
    Beverages,
    /// Packaged snacks.
    Snacks,
    /// Explicitly uncategorized products.
    #[default]
    Other,
    /// A category name the storefront does not know about.
    Unrecognized(String),
}

impl Category {
    /// Every category the storefront knows about, in display order.
    pub const KNOWN: [Self; 8] = [
        Self::Vegetables,
        Self::Fruits,
        Self::Staples,
        Self::Dairy,
        Self::Spices,
        Self::Beverages,
        Self::Snacks,
        Self::Other,
    ];

    /// Parses a category name. Never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let normalized: String = value.trim().to_lowercase();
        match normalized.as_str() {
            "" | "other" => Self::Other,
            "vegetables" => Self::Vegetables,
            "fruits" => Self::Fruits,
            "staples" => Self::Staples,
            "dairy" => Self::Dairy,
            "spices" => Self::Spices,
            "beverages" => Self::Beverages,
            "snacks" => Self::Snacks,
            _ => Self::Unrecognized(value.trim().to_string()),
        }
    }

    /// Returns the category's canonical name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vegetables => "vegetables",
            Self::Fruits => "fruits",
            Self::Staples => "staples",
            Self::Dairy => "dairy",
            Self::Spices => "spices",
            Self::Beverages => "beverages",
            Self::Snacks => "snacks",
            Self::Other => "other",
            Self::Unrecognized(name) => name,
        }
    }

    /// Returns whether this is one of the known categories.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A seed product as supplied to the catalog generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeed {
    /// Unique product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price in whole currency units.
    pub price: f64,
    /// Image reference; may be absolute, a bare filename, or a relative path.
    #[serde(default, alias = "image")]
    pub image_ref: String,
    /// Product category.
    #[serde(default)]
    pub category: Category,
    /// Optional long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional country or region of origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Optional stock flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl ProductSeed {
    /// Creates a seed with no description, origin, or stock flag.
    ///
    /// # Arguments
    ///
    /// * `id` - The product identifier
    /// * `name` - The display name
    /// * `price` - The unit price
    /// * `image_ref` - The raw image reference
    /// * `category` - The category
    #[must_use]
    pub fn new(id: &str, name: &str, price: f64, image_ref: &str, category: Category) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image_ref: image_ref.to_string(),
            category,
            description: None,
            origin: None,
            in_stock: None,
        }
    }

    /// Returns the cart-facing descriptor for this product.
    #[must_use]
    pub fn descriptor(&self) -> ProductDescriptor {
        ProductDescriptor {
            id: self.id.clone(),
            name: self.name.clone(),
            unit_price: self.price,
            image_ref: self.image_ref.clone(),
        }
    }
}

/// The subset of product data the cart needs at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDescriptor {
    /// Product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price captured at call time.
    pub unit_price: f64,
    /// Image reference.
    pub image_ref: String,
}

impl ProductDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(id: &str, name: &str, unit_price: f64, image_ref: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            unit_price,
            image_ref: image_ref.to_string(),
        }
    }
}

/// One product entry in the cart with an aggregated quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product identifier, unique within a cart.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price captured when the line was first added.
    pub unit_price: f64,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Image reference.
    pub image_ref: String,
}

impl CartLine {
    /// Creates a line from a product descriptor.
    #[must_use]
    pub fn from_descriptor(product: ProductDescriptor, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name,
            unit_price: product.unit_price,
            quantity,
            image_ref: product.image_ref,
        }
    }

    /// Returns `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A catalog entry: a seed or a generated variant of one, with nutrition attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProduct {
    /// Product fields after image normalization.
    #[serde(flatten)]
    pub product: ProductSeed,
    /// Derived nutrition profile.
    pub nutrition: NutritionProfile,
    /// The seed id this product was derived from, if it is a variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_of: Option<String>,
}

impl GeneratedProduct {
    /// Returns the product identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Returns whether this product is a generated variant.
    #[must_use]
    pub const fn is_variant(&self) -> bool {
        self.variant_of.is_some()
    }
}
