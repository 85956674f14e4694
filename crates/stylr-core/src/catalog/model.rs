//! Catalog domain model.
//!
//! Represents the static items (garments, accessories, car parts) that
//! replies reference. Items are immutable after load.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A price in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub u32);

impl Money {
    pub fn amount(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.map(|m| m.0).sum())
    }
}

/// A free-form attribute value attached to a catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    List(Vec<String>),
}

impl AttributeValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::List(values) => Some(values),
            AttributeValue::Text(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        AttributeValue::List(values.into_iter().map(str::to_string).collect())
    }
}

/// A product or part in a catalog.
///
/// `category_key` is the lookup key used by [`super::CatalogStore::get_by_category_key`]:
/// the normalized garment category for fashion items, the vehicle key
/// (e.g. `toyota_camry`) for car parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier within a catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Brand or manufacturer
    pub brand: String,
    /// Listed price
    pub price: Money,
    /// Image URI
    pub image: String,
    /// Key used for category lookups
    pub category_key: String,
    /// Domain-specific attributes (sizes, color, compatibility, ...)
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
    /// Recommended size or variant, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_variant: Option<String>,
}

impl CatalogItem {
    /// Returns a text attribute by name.
    pub fn text_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(AttributeValue::as_text)
    }

    /// Returns a list attribute by name, or an empty slice.
    pub fn list_attribute(&self, name: &str) -> &[String] {
        self.attributes
            .get(name)
            .and_then(AttributeValue::as_list)
            .unwrap_or(&[])
    }

    /// Recommended variant, falling back to `M` like the sizing guide does.
    pub fn variant_or_default(&self) -> &str {
        self.recommended_variant.as_deref().unwrap_or("M")
    }
}
