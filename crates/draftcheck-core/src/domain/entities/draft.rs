//! The `ProductDraft` entity and the caller-supplied defaults applied to it.
//!
//! A draft is the in-memory, not-yet-persisted product record a supplier is
//! authoring. Every field is optional at the type level: the rules in
//! `validation.rs` decide which absences are errors, so a draft can always
//! be constructed and then judged.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{LooseNumber, ProductStatus, coerce, loose_text};

/// A product record being authored through the supplier form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default, deserialize_with = "loose_text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    pub sku: Option<String>,

    #[serde(default, alias = "categoryId", deserialize_with = "loose_text")]
    pub category_id: Option<String>,

    /// Selling price.
    #[serde(default, alias = "basePrice", alias = "selling_price")]
    pub base_price: Option<LooseNumber>,

    #[serde(default, alias = "costPrice")]
    pub cost_price: Option<LooseNumber>,

    /// MRP (compare-at price).
    #[serde(default, alias = "comparePrice", alias = "mrp")]
    pub compare_price: Option<LooseNumber>,

    #[serde(default, deserialize_with = "loose_text")]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<ProductStatus>,
}

impl ProductDraft {
    /// Start the builder pattern for fluent construction.
    pub fn builder() -> ProductDraftBuilder {
        ProductDraftBuilder::default()
    }

    /// Coerced selling price, `None` when absent or non-numeric.
    pub fn base_price_value(&self) -> Option<f64> {
        coerce(self.base_price.as_ref())
    }

    /// Coerced cost price, `None` when absent or non-numeric.
    pub fn cost_price_value(&self) -> Option<f64> {
        coerce(self.cost_price.as_ref())
    }

    /// Coerced MRP, `None` when absent or non-numeric.
    pub fn compare_price_value(&self) -> Option<f64> {
        coerce(self.compare_price.as_ref())
    }

    /// Effective status (absent means draft).
    pub fn status(&self) -> ProductStatus {
        self.status.unwrap_or_default()
    }

    /// Fill absent fields from caller defaults. Present values always win.
    pub fn apply_defaults(&mut self, defaults: &DraftDefaults) {
        if self.status.is_none() {
            self.status = Some(defaults.status);
        }
        if self.cost_price.is_none() {
            self.cost_price = defaults.cost_price.map(LooseNumber::Number);
        }
        if self.compare_price.is_none() {
            self.compare_price = defaults.compare_price.map(LooseNumber::Number);
        }
    }

    /// Builder-style variant of [`Self::apply_defaults`].
    pub fn with_defaults(mut self, defaults: &DraftDefaults) -> Self {
        self.apply_defaults(defaults);
        self
    }
}

/// Values the surrounding form seeds a new draft with.
///
/// Defaults belong to the caller, never to the validator: they are applied
/// to a draft before it is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftDefaults {
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub cost_price: Option<f64>,
    #[serde(default)]
    pub compare_price: Option<f64>,
}

/// Fluent builder for [`ProductDraft`].
#[derive(Debug, Default)]
pub struct ProductDraftBuilder {
    draft: ProductDraft,
}

impl ProductDraftBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.draft.title = Some(title.into());
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.draft.sku = Some(sku.into());
        self
    }

    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.draft.category_id = Some(category_id.into());
        self
    }

    pub fn base_price(mut self, price: impl Into<LooseNumber>) -> Self {
        self.draft.base_price = Some(price.into());
        self
    }

    pub fn cost_price(mut self, price: impl Into<LooseNumber>) -> Self {
        self.draft.cost_price = Some(price.into());
        self
    }

    pub fn compare_price(mut self, price: impl Into<LooseNumber>) -> Self {
        self.draft.compare_price = Some(price.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.draft.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: ProductStatus) -> Self {
        self.draft.status = Some(status);
        self
    }

    pub fn build(self) -> ProductDraft {
        self.draft
    }
}
