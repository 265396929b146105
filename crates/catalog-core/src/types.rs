//! # Domain Types
//!
//! Core domain types used throughout the catalog.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductDraft   │   │    Product      │   │  ProductPatch   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id: Option     │──►│  id (immutable) │◄──│  every field    │       │
//! │  │  all fields     │   │  name, price    │   │  optional, id   │       │
//! │  │                 │   │  quantity, ...  │   │  not patchable  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │       create()                                    update()              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! A product serializes as a flat camelCase JSON object. Snapshots written
//! with the older French field names (`nom`, `prix`, `quantite`,
//! `disponible`, `categorie`, `devise`) are still accepted on read.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::stats::StockLevel;
use crate::DEFAULT_CURRENCY;

// =============================================================================
// Category
// =============================================================================

/// Product category.
///
/// Five categories are recognized. Any other value passes through untouched
/// as [`Category::Custom`] and is displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Sport,
    Other,
    /// Unrecognized key, kept as written.
    Custom(String),
}

impl Category {
    /// The recognized categories, in display order.
    pub const KNOWN: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Sport,
        Category::Other,
    ];

    /// Returns the stored key (`"electronics"`, `"clothing"`, ...).
    pub fn key(&self) -> &str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Home => "home",
            Category::Sport => "sport",
            Category::Other => "other",
            Category::Custom(raw) => raw,
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Sport => "Sport",
            Category::Other => "Other",
            Category::Custom(raw) => raw,
        }
    }

    /// Whether this is one of the five recognized categories.
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        // Known and legacy keys match in any case; anything else is kept as written.
        match raw.to_lowercase().as_str() {
            "electronics" | "electronique" => Category::Electronics,
            "clothing" | "vetements" => Category::Clothing,
            "home" | "maison" => Category::Home,
            "sport" => Category::Sport,
            "other" | "autre" => Category::Other,
            _ => Category::Custom(raw),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(raw) => raw,
            known => known.key().to_string(),
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from(s.trim().to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
///
/// `available` is set by the user and is never derived from `quantity`;
/// a product can be flagged available with zero stock and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Opaque identifier, assigned once at creation.
    pub id: String,

    /// Display name.
    #[serde(alias = "nom")]
    pub name: String,

    /// Unit price, non-negative.
    #[serde(alias = "prix")]
    pub price: f64,

    /// Units in stock.
    #[serde(alias = "quantite")]
    pub quantity: u32,

    /// Free-text description.
    #[serde(default)]
    pub description: String,

    /// Encoded image (data URL), if any.
    #[serde(default)]
    pub image_data: Option<String>,

    /// Whether the product is offered for sale.
    #[serde(alias = "disponible")]
    pub available: bool,

    /// Category key; unknown keys pass through.
    #[serde(alias = "categorie")]
    #[ts(type = "string")]
    pub category: Category,

    /// Display currency symbol.
    #[serde(alias = "devise", default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Product {
    /// Returns the stock classification for this product.
    #[inline]
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_quantity(self.quantity)
    }

    /// Case-insensitive substring match over name, description and category.
    ///
    /// An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }

        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.category.key().to_lowercase().contains(&needle)
    }

    /// Formats the price with its currency, e.g. `"24.99 €"`.
    pub fn display_price(&self) -> String {
        format!("{} {}", self.price, self.currency)
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Input for creating a product.
///
/// `id` and `currency` are optional: the store fills them in when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_data: Option<String>,
    pub available: bool,
    pub category: Category,
    #[serde(default)]
    pub currency: Option<String>,
}

impl ProductDraft {
    /// Starts a draft with the required fields.
    ///
    /// The draft is marked available, in [`Category::Other`], with no
    /// description or image.
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        ProductDraft {
            id: None,
            name: name.into(),
            price,
            quantity,
            description: String::new(),
            image_data: None,
            available: true,
            category: Category::Other,
            currency: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_image_data(mut self, image_data: impl Into<String>) -> Self {
        self.image_data = Some(image_data.into());
        self
    }

    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Turns the draft into a product under `id`.
    ///
    /// A draft-supplied id is ignored here; the caller decides which id wins.
    pub fn into_product(self, id: String, default_currency: &str) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
            image_data: self.image_data,
            available: self.available,
            category: self.category,
            currency: self
                .currency
                .unwrap_or_else(|| default_currency.to_string()),
        }
    }
}

// =============================================================================
// Product Patch
// =============================================================================

/// A partial update: present fields overwrite, absent fields are kept.
///
/// ## Image Tri-State
/// ```text
/// imageData absent   → None           → keep current image
/// imageData: null    → Some(None)     → remove image
/// imageData: "data:" → Some(Some(..)) → replace image
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_data: Option<Option<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Distinguishes an explicit `null` from a missing field.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ProductPatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.description.is_none()
            && self.image_data.is_none()
            && self.available.is_none()
            && self.category.is_none()
            && self.currency.is_none()
    }

    /// Merges the present fields over `product`. The id is never touched.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(image_data) = &self.image_data {
            product.image_data = image_data.clone();
        }
        if let Some(available) = self.available {
            product.available = available;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(currency) = &self.currency {
            product.currency = currency.clone();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        ProductDraft::new("A", 10.0, 2)
            .with_description("first one")
            .into_product("1".to_string(), DEFAULT_CURRENCY)
    }

    #[test]
    fn test_category_keys_and_labels() {
        assert_eq!(Category::Electronics.key(), "electronics");
        assert_eq!(Category::Home.label(), "Home");
        assert_eq!("sport".parse::<Category>().unwrap(), Category::Sport);

        let custom: Category = "garden".parse().unwrap();
        assert_eq!(custom, Category::Custom("garden".to_string()));
        assert_eq!(custom.label(), "garden");
        assert!(!custom.is_known());
    }

    #[test]
    fn test_category_case() {
        assert_eq!(Category::from("Electronics".to_string()), Category::Electronics);
        assert_eq!(Category::from("MAISON".to_string()), Category::Home);

        let custom = Category::from("Garden Tools".to_string());
        assert_eq!(custom, Category::Custom("Garden Tools".to_string()));
        assert_eq!(String::from(custom), "Garden Tools");
    }

    #[test]
    fn test_category_accepts_legacy_keys() {
        assert_eq!(Category::from("electronique".to_string()), Category::Electronics);
        assert_eq!(Category::from("vetements".to_string()), Category::Clothing);
        assert_eq!(Category::from("maison".to_string()), Category::Home);
        assert_eq!(Category::from("autre".to_string()), Category::Other);
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["imageData"], serde_json::Value::Null);
        assert_eq!(json["category"], "other");
        assert_eq!(json["currency"], "€");
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_product_reads_legacy_field_names() {
        let raw = r#"{
            "id": "2",
            "nom": "T-shirt Cotton",
            "prix": 24.99,
            "quantite": 3,
            "description": "cotton",
            "imageData": null,
            "disponible": true,
            "categorie": "vetements",
            "devise": "€"
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.name, "T-shirt Cotton");
        assert_eq!(product.quantity, 3);
        assert_eq!(product.category, Category::Clothing);
        assert!(product.available);
    }

    #[test]
    fn test_matches_is_case_insensitive_over_three_fields() {
        let product = sample();
        assert!(product.matches("a"));
        assert!(product.matches("FIRST"));
        assert!(product.matches("oth"));
        assert!(product.matches(""));
        assert!(!product.matches("zzz"));
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let mut product = sample();
        let patch = ProductPatch {
            price: Some(20.0),
            ..Default::default()
        };
        patch.apply_to(&mut product);

        assert_eq!(product.id, "1");
        assert_eq!(product.name, "A");
        assert_eq!(product.price, 20.0);
        assert_eq!(product.quantity, 2);
    }

    #[test]
    fn test_patch_image_tri_state() {
        let mut product = sample();
        product.image_data = Some("data:image/png;base64,AAAA".to_string());

        let keep: ProductPatch = serde_json::from_str(r#"{"name":"B"}"#).unwrap();
        assert_eq!(keep.image_data, None);
        keep.apply_to(&mut product);
        assert!(product.image_data.is_some());

        let clear: ProductPatch = serde_json::from_str(r#"{"imageData":null}"#).unwrap();
        assert_eq!(clear.image_data, Some(None));
        clear.apply_to(&mut product);
        assert_eq!(product.image_data, None);
    }

    #[test]
    fn test_empty_patch() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            available: Some(false),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_draft_currency_defaults() {
        let product = ProductDraft::new("X", 1.0, 1).into_product("9".into(), "$");
        assert_eq!(product.currency, "$");

        let product = ProductDraft::new("X", 1.0, 1)
            .with_currency("£")
            .into_product("9".into(), "$");
        assert_eq!(product.currency, "£");
    }
}
