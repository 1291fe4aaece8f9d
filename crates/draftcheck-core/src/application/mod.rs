//! Application layer for draftcheck.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService, RuleService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BatchReport,
    RuleInfo, // DTO for rule catalogue entries
    RuleService,
    SubmissionReport,
    ValidationService,
};

// Re-export port traits (for adapter implementation)
pub use ports::DraftSource;

pub use error::ApplicationError;
