use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::{
    entities::{AuxiliaryData, DraftSubmission, ProductDraft},
    error::DomainError,
    rules::{FieldError, MAX_SKU_LEN, MAX_TITLE_LEN},
    value_objects::{LooseNumber, ProductField, coerce},
};

// ── Error mapping ─────────────────────────────────────────────────────────────

/// Field key → the one violation reported on it.
///
/// Only failing fields are present; an empty mapping means the draft is
/// valid. Iteration follows `ProductField` declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<ProductField, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation under its own field, replacing any earlier one.
    pub fn record(&mut self, error: FieldError) -> Option<FieldError> {
        self.errors.insert(error.field(), error)
    }

    pub fn get(&self, field: ProductField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// The rendered message for `field`, if it failed.
    pub fn message(&self, field: ProductField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn contains(&self, field: ProductField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductField, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// Plain `field key → message` view, as rendered by a form.
    pub fn to_messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.record(error);
        }
        errors
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.as_str(), &error.to_string())?;
        }
        map.end()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

// ── FieldValidator ────────────────────────────────────────────────────────────

/// Single-field rules.
///
/// Each function maps one raw value to `None` (valid) or the first failing
/// check. No function looks at any other field.
pub struct FieldValidator;

impl FieldValidator {
    pub fn title(value: Option<&str>) -> Option<FieldError> {
        let value = value.unwrap_or_default();
        if value.trim().is_empty() {
            return Some(FieldError::TitleRequired);
        }
        if value.chars().count() > MAX_TITLE_LEN {
            return Some(FieldError::TitleTooLong);
        }
        if value.contains(['<', '>']) {
            return Some(FieldError::TitleContainsHtml);
        }
        None
    }

    pub fn sku(value: Option<&str>) -> Option<FieldError> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => return None,
        };
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Some(FieldError::SkuInvalidCharacters);
        }
        if value.chars().count() > MAX_SKU_LEN {
            return Some(FieldError::SkuTooLong);
        }
        None
    }

    pub fn category_id(value: Option<&str>) -> Option<FieldError> {
        match value {
            Some(v) if !v.is_empty() => None,
            _ => Some(FieldError::CategoryRequired),
        }
    }

    pub fn base_price(value: Option<&LooseNumber>) -> Option<FieldError> {
        match coerce(value) {
            Some(price) if price > 0.0 => None,
            _ => Some(FieldError::SellingPriceNotPositive),
        }
    }

    pub fn cost_price(value: Option<&LooseNumber>) -> Option<FieldError> {
        match coerce(value) {
            Some(price) if price < 0.0 => Some(FieldError::CostPriceNegative),
            _ => None,
        }
    }

    pub fn compare_price(value: Option<&LooseNumber>) -> Option<FieldError> {
        match coerce(value) {
            Some(price) if price < 0.0 => Some(FieldError::MrpNegative),
            _ => None,
        }
    }

    pub fn description(value: Option<&str>) -> Option<FieldError> {
        match value {
            Some(v) if !v.trim().is_empty() => None,
            _ => Some(FieldError::DescriptionRequired),
        }
    }

    /// Run the rule for one named field of `draft`.
    ///
    /// `SimpleFields` is not part of the draft; asking for it is an error.
    pub fn check(field: ProductField, draft: &ProductDraft) -> Result<Option<FieldError>, DomainError> {
        let outcome = match field {
            ProductField::Title => Self::title(draft.title.as_deref()),
            ProductField::Sku => Self::sku(draft.sku.as_deref()),
            ProductField::CategoryId => Self::category_id(draft.category_id.as_deref()),
            ProductField::BasePrice => Self::base_price(draft.base_price.as_ref()),
            ProductField::CostPrice => Self::cost_price(draft.cost_price.as_ref()),
            ProductField::ComparePrice => Self::compare_price(draft.compare_price.as_ref()),
            ProductField::Description => Self::description(draft.description.as_deref()),
            ProductField::SimpleFields => {
                return Err(DomainError::NotADraftField { field });
            }
        };
        Ok(outcome)
    }

    /// Like [`Self::check`], keyed by the field's wire name.
    pub fn check_named(name: &str, draft: &ProductDraft) -> Result<Option<FieldError>, DomainError> {
        Self::check(name.parse()?, draft)
    }
}

// ── FormValidator ─────────────────────────────────────────────────────────────

/// Whole-draft validation: every field rule, the price-ordering rule, and the
/// detail-fields requirement.
pub struct FormValidator;

impl FormValidator {
    /// Validate a draft and its auxiliary data.
    ///
    /// Never fails: rule violations come back as data. Calling it twice on
    /// the same input yields the same mapping.
    pub fn validate(draft: &ProductDraft, auxiliary: &AuxiliaryData) -> ValidationErrors {
        let mut errors: ValidationErrors = ProductField::DRAFT_FIELDS
            .into_iter()
            .filter_map(|field| Self::field_rule(field, draft))
            .collect();

        // Only when MRP passed its own check.
        if !errors.contains(ProductField::ComparePrice) {
            if let Some(error) = Self::price_ordering(draft) {
                errors.record(error);
            }
        }

        if let Some(error) = Self::details(auxiliary) {
            errors.record(error);
        }

        errors
    }

    pub fn validate_submission(submission: &DraftSubmission) -> ValidationErrors {
        Self::validate(&submission.draft, &submission.auxiliary)
    }

    /// MRP must not undercut the selling price.
    ///
    /// Skipped unless both prices are present and non-zero. Equal prices
    /// pass.
    pub fn price_ordering(draft: &ProductDraft) -> Option<FieldError> {
        let base = draft.base_price_value().filter(|p| *p != 0.0)?;
        let compare = draft.compare_price_value().filter(|p| *p != 0.0)?;
        (compare < base).then_some(FieldError::MrpBelowSellingPrice)
    }

    /// At least one detail entry is required.
    pub fn details(auxiliary: &AuxiliaryData) -> Option<FieldError> {
        (!auxiliary.has_details()).then_some(FieldError::DetailsRequired)
    }

    fn field_rule(field: ProductField, draft: &ProductDraft) -> Option<FieldError> {
        // DRAFT_FIELDS never contains SimpleFields.
        FieldValidator::check(field, draft).ok().flatten()
    }
}
