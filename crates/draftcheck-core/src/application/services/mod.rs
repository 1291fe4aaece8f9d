//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "check every draft in this folder" or
//! "describe the rules".

pub mod report;
pub mod rule_service;
pub mod validation_service;

pub use report::{BatchReport, SubmissionReport};
pub use rule_service::{RuleInfo, RuleService};
pub use validation_service::ValidationService;
