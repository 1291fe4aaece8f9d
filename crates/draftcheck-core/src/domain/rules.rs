//! The closed set of rule violations a product draft can produce.
//!
//! Each variant's `Display` text is the exact message rendered next to the
//! form control. Callers and tests may assert on these strings.

use thiserror::Error;

use crate::domain::value_objects::ProductField;

/// Longest accepted product title, counted in Unicode scalar values
/// (`str::chars`), not bytes or UTF-16 code units.
pub const MAX_TITLE_LEN: usize = 200;

/// Longest accepted SKU, counted like [`MAX_TITLE_LEN`].
pub const MAX_SKU_LEN: usize = 50;

/// A single rule violation, keyed to the field it is reported on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    #[error("Product title is required")]
    TitleRequired,

    #[error("Title must be less than 200 characters")]
    TitleTooLong,

    #[error("Title cannot contain HTML tags")]
    TitleContainsHtml,

    #[error("SKU can only contain letters, numbers, hyphens, and underscores")]
    SkuInvalidCharacters,

    #[error("SKU must be less than 50 characters")]
    SkuTooLong,

    #[error("Category is required")]
    CategoryRequired,

    #[error("Selling price must be greater than 0")]
    SellingPriceNotPositive,

    #[error("Cost price cannot be negative")]
    CostPriceNegative,

    #[error("MRP cannot be negative")]
    MrpNegative,

    #[error("MRP should be greater than or equal to selling price")]
    MrpBelowSellingPrice,

    #[error("Product description is required")]
    DescriptionRequired,

    #[error("Product details are required")]
    DetailsRequired,
}

impl FieldError {
    /// Every violation, grouped by field in reporting order.
    pub const ALL: [Self; 12] = [
        Self::TitleRequired,
        Self::TitleTooLong,
        Self::TitleContainsHtml,
        Self::SkuInvalidCharacters,
        Self::SkuTooLong,
        Self::CategoryRequired,
        Self::SellingPriceNotPositive,
        Self::CostPriceNegative,
        Self::MrpNegative,
        Self::MrpBelowSellingPrice,
        Self::DescriptionRequired,
        Self::DetailsRequired,
    ];

    /// The key this violation is reported under.
    pub const fn field(&self) -> ProductField {
        match self {
            Self::TitleRequired | Self::TitleTooLong | Self::TitleContainsHtml => {
                ProductField::Title
            }
            Self::SkuInvalidCharacters | Self::SkuTooLong => ProductField::Sku,
            Self::CategoryRequired => ProductField::CategoryId,
            Self::SellingPriceNotPositive => ProductField::BasePrice,
            Self::CostPriceNegative => ProductField::CostPrice,
            Self::MrpNegative | Self::MrpBelowSellingPrice => ProductField::ComparePrice,
            Self::DescriptionRequired => ProductField::Description,
            Self::DetailsRequired => ProductField::SimpleFields,
        }
    }

    /// Stable machine-readable code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TitleRequired => "title_required",
            Self::TitleTooLong => "title_too_long",
            Self::TitleContainsHtml => "title_contains_html",
            Self::SkuInvalidCharacters => "sku_invalid_characters",
            Self::SkuTooLong => "sku_too_long",
            Self::CategoryRequired => "category_required",
            Self::SellingPriceNotPositive => "selling_price_not_positive",
            Self::CostPriceNegative => "cost_price_negative",
            Self::MrpNegative => "mrp_negative",
            Self::MrpBelowSellingPrice => "mrp_below_selling_price",
            Self::DescriptionRequired => "description_required",
            Self::DetailsRequired => "details_required",
        }
    }

    /// Whether the rule looks at more than one field.
    pub const fn is_cross_field(&self) -> bool {
        matches!(self, Self::MrpBelowSellingPrice)
    }

    /// Violations that can be reported on `field`, in check order.
    pub fn for_field(field: ProductField) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |e| e.field() == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_at_least_one_rule() {
        for field in ProductField::ALL {
            assert!(
                FieldError::for_field(field).next().is_some(),
                "no rule for {field}"
            );
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = FieldError::ALL.iter().map(FieldError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), FieldError::ALL.len());
    }

    #[test]
    fn title_rules_in_check_order() {
        let rules: Vec<_> = FieldError::for_field(ProductField::Title).collect();
        assert_eq!(
            rules,
            vec![
                FieldError::TitleRequired,
                FieldError::TitleTooLong,
                FieldError::TitleContainsHtml
            ]
        );
    }

    #[test]
    fn only_price_ordering_is_cross_field() {
        let cross: Vec<_> = FieldError::ALL
            .into_iter()
            .filter(FieldError::is_cross_field)
            .collect();
        assert_eq!(cross, vec![FieldError::MrpBelowSellingPrice]);
    }
}
