//! Supplementary collections attached to a draft.
//!
//! Only `simple_fields` takes part in validation (it must be non-empty).
//! Variants, images and FAQs have their own shape and are carried through
//! untouched.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LooseNumber;

/// Collections authored alongside a draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryData {
    #[serde(default, alias = "simpleFields")]
    pub simple_fields: Vec<SimpleField>,

    #[serde(default)]
    pub variants: Vec<Variant>,

    #[serde(default)]
    pub images: Vec<ProductImage>,

    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl AuxiliaryData {
    /// Auxiliary data holding the given detail entries and nothing else.
    pub fn with_simple_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = SimpleField>,
    {
        Self {
            simple_fields: fields.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn has_details(&self) -> bool {
        !self.simple_fields.is_empty()
    }
}

/// A free-form detail entry such as `Weight: 500g`.
///
/// Accepted as `{ "key": .., "value": .. }` or as a bare string, which
/// becomes a key with an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SimpleFieldRepr")]
pub struct SimpleField {
    pub key: String,
    pub value: String,
}

impl SimpleField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<&str> for SimpleField {
    fn from(key: &str) -> Self {
        Self::new(key, "")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SimpleFieldRepr {
    Bare(String),
    Entry {
        key: String,
        #[serde(default)]
        value: String,
    },
}

impl From<SimpleFieldRepr> for SimpleField {
    fn from(repr: SimpleFieldRepr) -> Self {
        match repr {
            SimpleFieldRepr::Bare(key) => Self::new(key, ""),
            SimpleFieldRepr::Entry { key, value } => Self { key, value },
        }
    }
}

/// A purchasable variation of the product (size, colour, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<LooseNumber>,
    #[serde(default)]
    pub stock: Option<i64>,
}

/// A product image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub position: Option<u32>,
}

/// A question/answer pair shown on the product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_fields_accept_bare_strings_and_entries() {
        let aux: AuxiliaryData = serde_json::from_str(
            r#"{"simpleFields":["field1",{"key":"Weight","value":"500g"}]}"#,
        )
        .unwrap();

        assert_eq!(
            aux.simple_fields,
            vec![SimpleField::from("field1"), SimpleField::new("Weight", "500g")]
        );
        assert!(aux.has_details());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let aux: AuxiliaryData = serde_json::from_str("{}").unwrap();
        assert!(!aux.has_details());
        assert!(aux.variants.is_empty());
        assert!(aux.images.is_empty());
        assert!(aux.faqs.is_empty());
    }
}
