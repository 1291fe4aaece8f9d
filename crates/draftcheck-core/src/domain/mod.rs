// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for draftcheck.
//!
//! This module contains the pure product-draft rules with no I/O. Loading
//! drafts and presenting results are handled via ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Stateless validators**: `FieldValidator` and `FormValidator` hold no data
//! - **Violations are data**: Broken rules are returned, never raised
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod rules;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    auxiliary::{AuxiliaryData, Faq, ProductImage, SimpleField, Variant},
    draft::{DraftDefaults, ProductDraft, ProductDraftBuilder},
    submission::DraftSubmission,
};

pub use error::{DomainError, ErrorCategory};

pub use rules::{FieldError, MAX_SKU_LEN, MAX_TITLE_LEN};

pub use validation::{FieldValidator, FormValidator, ValidationErrors};

pub use value_objects::{LooseNumber, ProductField, ProductStatus};
