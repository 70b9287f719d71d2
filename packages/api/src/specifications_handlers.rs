// ABOUTME: HTTP request handlers for specification generation and retrieval
// ABOUTME: Maps the generation flow and storage results onto JSON responses

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info};

use specgen_ai::risk::RiskAssessment;
use specgen_core::types::{DomainType, GeneratedContent, StrategicPriority, SubmissionForm};
use specgen_specifications::{manager, DbState, GenerateError};

/// Body of a successful generation response
#[derive(Serialize)]
struct GenerateResponse {
    id: String,
    #[serde(rename = "formData")]
    form_data: SubmissionForm,
    content: GeneratedContent,
    #[serde(rename = "isStrategic")]
    is_strategic: bool,
    #[serde(rename = "riskAssessment")]
    risk_assessment: Option<RiskAssessment>,
    #[serde(rename = "generatedAt")]
    generated_at: DateTime<Utc>,
    version: i64,
    metadata: GenerateMetadata,
}

#[derive(Serialize)]
struct GenerateMetadata {
    domain: DomainType,
    #[serde(rename = "strategicPriority")]
    strategic_priority: Option<StrategicPriority>,
    #[serde(rename = "enhancedFeatures")]
    enhanced_features: bool,
}

fn generate_error_response(error: GenerateError) -> axum::response::Response {
    match error {
        GenerateError::Validation(details) => {
            info!("Validation failed: {:?}", details);
            (
                StatusCode::BAD_REQUEST,
                ResponseJson(json!({
                    "error": "Validation failed",
                    "details": details,
                })),
            )
                .into_response()
        }
        GenerateError::Generation(e) => {
            error!("Generation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseJson(json!({
                    "error": "Failed to generate specification",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
        GenerateError::Storage(e) => {
            error!("Storage failure during generation: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseJson(json!({
                    "error": "Failed to generate specification",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// Generate a new specification from a raw form payload
pub async fn generate_specification(
    State(db): State<DbState>,
    Json(payload): Json<Value>,
) -> impl IntoResponse {
    match manager::generate_specification(&db, &payload).await {
        Ok(outcome) => {
            let spec = outcome.specification;
            let response = GenerateResponse {
                id: spec.id.clone(),
                metadata: GenerateMetadata {
                    domain: spec.form_data.domain.unwrap_or_default(),
                    strategic_priority: spec.form_data.strategic_priority,
                    enhanced_features: outcome.is_strategic,
                },
                form_data: spec.form_data,
                content: spec.content,
                is_strategic: outcome.is_strategic,
                risk_assessment: outcome.risk_assessment,
                generated_at: spec.created_at,
                version: spec.version,
            };
            (StatusCode::OK, ResponseJson(response)).into_response()
        }
        Err(e) => generate_error_response(e),
    }
}

fn is_well_formed_id(id: &str) -> bool {
    id.len() == 8 && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Fetch a stored specification, reshaped for the client
pub async fn get_specification(
    State(db): State<DbState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    if !is_well_formed_id(&id) {
        return (
            StatusCode::BAD_REQUEST,
            ResponseJson(json!({"error": "Invalid specification ID"})),
        )
            .into_response();
    }

    match manager::get_specification(&db, &id).await {
        Ok(Some(spec)) => (
            StatusCode::OK,
            ResponseJson(json!({
                "id": spec.id,
                "formData": spec.form_data,
                "content": spec.content,
                "generatedAt": spec.created_at,
                "version": spec.version,
            })),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            ResponseJson(json!({"error": "Specification not found"})),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to fetch specification {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseJson(json!({"error": "Failed to fetch specification"})),
            )
                .into_response()
        }
    }
}

/// List the ten most recent specifications
pub async fn list_specifications(State(db): State<DbState>) -> impl IntoResponse {
    match manager::list_specifications(&db).await {
        Ok(specifications) => {
            info!("Listed {} specifications", specifications.len());
            (
                StatusCode::OK,
                ResponseJson(json!({ "specifications": specifications })),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to list specifications: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseJson(json!({"error": "Failed to list specifications"})),
            )
                .into_response()
        }
    }
}
