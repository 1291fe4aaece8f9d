//! Domain value objects: ProductField, ProductStatus, LooseNumber.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! hold NO validation rules. All rules live in `validation.rs` and their
//! messages in `rules.rs`. This file's only job is to define the types,
//! their string representations, and their parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProductField ──────────────────────────────────────────────────────────────

/// A key in a validation error mapping.
///
/// The first seven variants are the fields of a [`ProductDraft`]; the last
/// one is the dedicated key for the auxiliary detail-field requirement.
/// Declaration order is the order errors are reported in.
///
/// [`ProductDraft`]: crate::domain::ProductDraft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Title,
    Sku,
    CategoryId,
    BasePrice,
    CostPrice,
    ComparePrice,
    Description,
    SimpleFields,
}

impl ProductField {
    /// Fields carried by the draft itself, in validation order.
    pub const DRAFT_FIELDS: [Self; 7] = [
        Self::Title,
        Self::Sku,
        Self::CategoryId,
        Self::BasePrice,
        Self::CostPrice,
        Self::ComparePrice,
        Self::Description,
    ];

    /// Every key that can appear in an error mapping.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Sku,
        Self::CategoryId,
        Self::BasePrice,
        Self::CostPrice,
        Self::ComparePrice,
        Self::Description,
        Self::SimpleFields,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Sku => "sku",
            Self::CategoryId => "category_id",
            Self::BasePrice => "base_price",
            Self::CostPrice => "cost_price",
            Self::ComparePrice => "compare_price",
            Self::Description => "description",
            Self::SimpleFields => "simple_fields",
        }
    }

    /// Label shown next to the form control.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Sku => "SKU",
            Self::CategoryId => "Category",
            Self::BasePrice => "Selling price",
            Self::CostPrice => "Cost price",
            Self::ComparePrice => "MRP",
            Self::Description => "Description",
            Self::SimpleFields => "Product details",
        }
    }

    /// Whether the draft may omit this field entirely.
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Sku | Self::CostPrice | Self::ComparePrice)
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "title" => Ok(Self::Title),
            "sku" => Ok(Self::Sku),
            "category_id" | "categoryId" | "category" => Ok(Self::CategoryId),
            "base_price" | "basePrice" | "selling_price" => Ok(Self::BasePrice),
            "cost_price" | "costPrice" => Ok(Self::CostPrice),
            "compare_price" | "comparePrice" | "mrp" => Ok(Self::ComparePrice),
            "description" => Ok(Self::Description),
            "simple_fields" | "simpleFields" => Ok(Self::SimpleFields),
            other => Err(DomainError::UnknownField {
                field: other.to_string(),
            }),
        }
    }
}

// ── ProductStatus ─────────────────────────────────────────────────────────────

/// Publication status of a product. Never validated; filled from defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Draft,
    Active,
    Inactive,
}

impl ProductStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "active" | "published" => Ok(Self::Active),
            "inactive" | "archived" => Ok(Self::Inactive),
            other => Err(DomainError::InvalidStatus {
                status: other.to_string(),
            }),
        }
    }
}

// ── LooseNumber ───────────────────────────────────────────────────────────────

/// A numeric form input that may arrive as a number or as the raw text of an
/// input control.
///
/// Coercion is explicit and total: see [`LooseNumber::coerce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    /// Coerce to a finite number.
    ///
    /// Numbers pass through; text is trimmed and parsed. Blank text,
    /// non-numeric text and non-finite values all yield `None`, which every
    /// rule treats the same as an absent value.
    pub fn coerce(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok()?
            }
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for LooseNumber {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for LooseNumber {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Coerce an optional loose number; absent stays absent.
pub fn coerce(value: Option<&LooseNumber>) -> Option<f64> {
    value.and_then(LooseNumber::coerce)
}

/// Deserialize an optional text field that may have been sent as a number
/// (category identifiers in particular).
pub(crate) fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(Option::<Repr>::deserialize(deserializer)?.map(|repr| match repr {
        Repr::Text(s) => s,
        Repr::Integer(i) => i.to_string(),
        Repr::Float(f) => f.to_string(),
    }))
}
