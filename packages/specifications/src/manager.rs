// ABOUTME: Request-scoped orchestration of the generation flow
// ABOUTME: Validate, prompt, generate, extract, classify, assess risk, persist

use chrono::Utc;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use specgen_ai::prompts::{build_generation_prompt, SPEC_SYSTEM_PROMPT};
use specgen_ai::risk::{RiskAssessment, RiskAssessmentService};
use specgen_ai::{extract_content, requires_risk_assessment, AIServiceError};

use crate::db::DbState;
use crate::storage::StorageError;
use crate::types::{Specification, SpecificationStatus};
use crate::validator::validate_submission;

const SPEC_MAX_TOKENS: u32 = 4000;
const SPEC_TEMPERATURE: f32 = 0.3;

/// Placeholder id carried by a risk assessment until the specification row
/// exists; replaced by the stored id afterwards
const PENDING_SPEC_ID: &str = "pending";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Failed to generate specification: {0}")]
    Generation(#[from] AIServiceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result of a completed generation request
#[derive(Debug)]
pub struct GenerationOutcome {
    pub specification: Specification,
    pub is_strategic: bool,
    pub risk_assessment: Option<RiskAssessment>,
    pub degraded_risk: bool,
}

/// Run the full generation flow for a raw form payload.
///
/// Validation failures abort before any external call. A provider failure on
/// the primary generation aborts the request. A risk assessment failure never
/// does: the degraded fallback is carried instead. The specification insert
/// and the risk assessment id back-fill are separate steps, not a transaction.
pub async fn generate_specification(
    db: &DbState,
    payload: &Value,
) -> Result<GenerationOutcome, GenerateError> {
    let form = validate_submission(payload).map_err(GenerateError::Validation)?;

    info!("Generating specification for '{}'", form.project_title);

    let prompt = build_generation_prompt(&form);
    let response = db
        .ai
        .generate_text(
            prompt,
            Some(SPEC_SYSTEM_PROMPT.to_string()),
            SPEC_MAX_TOKENS,
            SPEC_TEMPERATURE,
        )
        .await?;

    info!(
        "Specification text generated ({} tokens)",
        response.usage.total_tokens()
    );

    let content = extract_content(&response.data);

    let strategic = specgen_ai::is_strategic(form.budget_range, form.urgency);

    let mut risk_assessment = None;
    let mut degraded_risk = false;
    if requires_risk_assessment(form.budget_range, form.urgency) {
        info!("Strategic submission, running risk assessment");
        let risk_service = RiskAssessmentService::new(db.ai.clone());
        let outcome = risk_service
            .generate_risk_assessment(PENDING_SPEC_ID, &form, &content)
            .await;
        if outcome.is_degraded() {
            warn!("Risk assessment degraded to fallback for '{}'", form.project_title);
            degraded_risk = true;
        }
        risk_assessment = Some(outcome.into_assessment());
    }

    let specification = Specification {
        id: specgen_core::generate_spec_id(),
        title: form.project_title.clone(),
        category: form.category,
        status: if strategic {
            SpecificationStatus::StrategicReview
        } else {
            SpecificationStatus::Generated
        },
        version: 1,
        form_data: form,
        content,
        created_at: Utc::now(),
    };

    db.spec_storage.create_specification(&specification).await?;

    // Back-fill the stored id into the assessment created before the insert
    if let Some(assessment) = risk_assessment.as_mut() {
        assessment.specification_id = specification.id.clone();
    }

    info!(
        "{} specification {} stored",
        if strategic { "Strategic" } else { "Standard" },
        specification.id
    );

    Ok(GenerationOutcome {
        specification,
        is_strategic: strategic,
        risk_assessment,
        degraded_risk,
    })
}

/// Fetch a stored specification by id
pub async fn get_specification(
    db: &DbState,
    id: &str,
) -> Result<Option<Specification>, StorageError> {
    db.spec_storage.get_specification(id).await
}

/// List recent specifications, newest first
pub async fn list_specifications(
    db: &DbState,
) -> Result<Vec<crate::storage::SpecificationSummary>, StorageError> {
    db.spec_storage.list_specifications().await
}
