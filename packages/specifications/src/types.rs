// ABOUTME: Re-exports of the shared domain types used throughout this package

pub use specgen_core::types::{
    BudgetRange, DomainType, GeneratedContent, ProcurementCategory, Specification,
    SpecificationStatus, StrategicPriority, SubmissionForm, UrgencyLevel,
};
