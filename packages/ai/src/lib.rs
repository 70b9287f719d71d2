// ABOUTME: AI integration for Specgen: provider client, prompt assembly,
// ABOUTME: section extraction, strategic classification, and risk assessment

pub mod domain_prompts;
pub mod extractor;
pub mod prompts;
pub mod risk;
pub mod service;
pub mod strategic;

pub use extractor::extract_content;
pub use risk::{RiskAssessment, RiskAssessmentService, RiskCategory, RiskFactor, RiskOutcome};
pub use service::{AIResponse, AIService, AIServiceError, AIServiceResult, Usage};
pub use strategic::{is_strategic, requires_risk_assessment};
