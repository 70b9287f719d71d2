// ABOUTME: Core types and utilities for Specgen
// ABOUTME: Foundational package shared across all Specgen packages

pub mod constants;
pub mod types;
pub mod utils;

// Re-export main types
pub use types::{
    BudgetRange, DomainType, GeneratedContent, ProcurementCategory, Specification,
    SpecificationStatus, StrategicPriority, SubmissionForm, UrgencyLevel,
};

// Re-export constants
pub use constants::{database_file, specgen_dir};

// Re-export utilities
pub use utils::generate_spec_id;
