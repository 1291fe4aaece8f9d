//! Rule Service - read-only view of the rule set.
//!
//! Separated from ValidationService for single responsibility: this one
//! never sees a draft, it only describes what the rules are.

use serde::Serialize;

use crate::domain::{FieldError, ProductField};

/// Information about one rule for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub field: &'static str,
    pub label: &'static str,
    pub code: &'static str,
    pub message: String,
    pub optional_field: bool,
    pub cross_field: bool,
}

impl From<FieldError> for RuleInfo {
    fn from(error: FieldError) -> Self {
        let field = error.field();
        Self {
            field: field.as_str(),
            label: field.label(),
            code: error.code(),
            message: error.to_string(),
            optional_field: field.is_optional(),
            cross_field: error.is_cross_field(),
        }
    }
}

/// Service for rule catalogue queries.
pub struct RuleService;

impl RuleService {
    /// Every rule, grouped by field in check order.
    pub fn catalogue() -> Vec<RuleInfo> {
        FieldError::ALL.into_iter().map(RuleInfo::from).collect()
    }

    /// Rules reported on one field.
    pub fn for_field(field: ProductField) -> Vec<RuleInfo> {
        FieldError::for_field(field).map(RuleInfo::from).collect()
    }
}
