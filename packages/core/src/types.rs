use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Procurement categories supported by the form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProcurementCategory {
    ItServices,
    Consulting,
    Construction,
    Supplies,
    Maintenance,
    ProfessionalServices,
    Equipment,
    Software,
    Training,
}

impl fmt::Display for ProcurementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcurementCategory::ItServices => "it-services",
            ProcurementCategory::Consulting => "consulting",
            ProcurementCategory::Construction => "construction",
            ProcurementCategory::Supplies => "supplies",
            ProcurementCategory::Maintenance => "maintenance",
            ProcurementCategory::ProfessionalServices => "professional-services",
            ProcurementCategory::Equipment => "equipment",
            ProcurementCategory::Software => "software",
            ProcurementCategory::Training => "training",
        };
        write!(f, "{}", s)
    }
}

/// Budget buckets, ordered from smallest to largest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum BudgetRange {
    #[serde(rename = "under-10k")]
    Under10k,
    #[serde(rename = "10k-50k")]
    Range10k50k,
    #[serde(rename = "50k-100k")]
    Range50k100k,
    #[serde(rename = "100k-500k")]
    Range100k500k,
    #[serde(rename = "500k-1m")]
    Range500k1m,
    #[serde(rename = "over-1m")]
    Over1m,
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BudgetRange::Under10k => "under-10k",
            BudgetRange::Range10k50k => "10k-50k",
            BudgetRange::Range50k100k => "50k-100k",
            BudgetRange::Range100k500k => "100k-500k",
            BudgetRange::Range500k1m => "500k-1m",
            BudgetRange::Over1m => "over-1m",
        };
        write!(f, "{}", s)
    }
}

/// Urgency levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// Sector the submission belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    #[default]
    General,
    Mining,
    Municipal,
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DomainType::General => "general",
            DomainType::Mining => "mining",
            DomainType::Municipal => "municipal",
        };
        write!(f, "{}", s)
    }
}

/// Strategic priority declared by the submitter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StrategicPriority {
    CostOptimization,
    InnovationFocus,
    RiskMitigation,
    CapabilityBuilding,
    StrategicPartnership,
}

/// Status assigned to a stored specification. Records are created directly as
/// Generated or StrategicReview; Draft is never produced by the generation flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SpecificationStatus {
    Draft,
    Generated,
    StrategicReview,
}

impl fmt::Display for SpecificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpecificationStatus::Draft => "draft",
            SpecificationStatus::Generated => "generated",
            SpecificationStatus::StrategicReview => "strategic-review",
        };
        write!(f, "{}", s)
    }
}

/// Canonical, validated form submission. List fields are normalized so that a
/// single-string payload and a list payload produce the same shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionForm {
    #[serde(rename = "projectTitle")]
    pub project_title: String,
    pub category: ProcurementCategory,
    #[serde(rename = "budgetRange")]
    pub budget_range: BudgetRange,
    pub timeline: String,
    pub urgency: UrgencyLevel,
    #[serde(rename = "keyRequirements")]
    pub key_requirements: Vec<String>,
    #[serde(rename = "complianceRequirements")]
    pub compliance_requirements: Option<Vec<String>>,
    #[serde(rename = "successCriteria")]
    pub success_criteria: Option<Vec<String>>,
    #[serde(rename = "additionalNotes")]
    pub additional_notes: Option<String>,
    #[serde(rename = "contactPerson")]
    pub contact_person: String,
    pub department: String,
    pub domain: Option<DomainType>,
    #[serde(rename = "strategicPriority")]
    pub strategic_priority: Option<StrategicPriority>,
}

/// The eight named sections of a generated specification document.
/// Sections are never null; a section the extractor could not recover carries
/// a placeholder sentence instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedContent {
    #[serde(rename = "executiveSummary")]
    pub executive_summary: String,
    pub scope: String,
    pub requirements: String,
    #[serde(rename = "technicalSpecs")]
    pub technical_specs: String,
    pub compliance: String,
    pub evaluation: String,
    pub timeline: String,
    pub budget: String,
}

/// A stored specification record. Owns denormalized copies of the form and the
/// generated content; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specification {
    pub id: String,
    pub title: String,
    pub category: ProcurementCategory,
    pub status: SpecificationStatus,
    pub version: i64,
    #[serde(rename = "formData")]
    pub form_data: SubmissionForm,
    pub content: GeneratedContent,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
