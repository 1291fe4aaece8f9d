//! draftcheck Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for draftcheck,
//! the supplier product-draft validator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         draftcheck-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ValidationService, RuleService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: DraftSource)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    draftcheck-adapters (Infrastructure) │
//! │ (DocumentSource, DirectorySource, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProductDraft, FieldValidator,          │
//! │  FormValidator, ValidationErrors)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use draftcheck_core::prelude::*;
//!
//! let draft = ProductDraft::builder()
//!     .title("Valid Product Title")
//!     .category_id("electronics")
//!     .base_price(100)
//!     .compare_price(80)
//!     .description("Valid description")
//!     .build();
//! let details = AuxiliaryData::with_simple_fields([SimpleField::new("Weight", "500g")]);
//!
//! let errors = FormValidator::validate(&draft, &details);
//! assert_eq!(
//!     errors.message(ProductField::ComparePrice).as_deref(),
//!     Some("MRP should be greater than or equal to selling price"),
//! );
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BatchReport, RuleInfo, RuleService, SubmissionReport, ValidationService,
        ports::DraftSource,
    };
    pub use crate::domain::{
        AuxiliaryData, DraftDefaults, DraftSubmission, FieldError, FieldValidator,
        FormValidator, LooseNumber, ProductDraft, ProductField, ProductStatus, SimpleField,
        ValidationErrors,
    };
    pub use crate::error::{DraftcheckError, DraftcheckResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
