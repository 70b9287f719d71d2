// ABOUTME: HTTP request handlers for specification export
// ABOUTME: Renders stored records as downloadable text or HTML attachments

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use specgen_specifications::export::{render_html, render_text, sanitize_filename};
use specgen_specifications::{manager, DbState};

#[derive(Deserialize)]
pub struct ExportRequest {
    #[serde(rename = "specificationId")]
    specification_id: Option<String>,
}

enum ExportFormat {
    Html,
    Text,
}

impl ExportFormat {
    fn name(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Text => "text",
        }
    }

    fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Html => "text/html",
            ExportFormat::Text => "text/plain",
        }
    }

    fn filename(&self, title: &str) -> String {
        match self {
            ExportFormat::Html => format!("{}.html", sanitize_filename(title)),
            ExportFormat::Text => format!("{}_specification.txt", sanitize_filename(title)),
        }
    }
}

async fn export_specification(
    db: DbState,
    request: ExportRequest,
    format: ExportFormat,
) -> axum::response::Response {
    let Some(id) = request.specification_id else {
        return (
            StatusCode::BAD_REQUEST,
            ResponseJson(json!({"error": "Specification ID is required"})),
        )
            .into_response();
    };

    let spec = match manager::get_specification(&db, &id).await {
        Ok(Some(spec)) => spec,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                ResponseJson(json!({"error": "Specification not found"})),
            )
                .into_response();
        }
        Err(e) => {
            error!("Failed to load specification {} for export: {}", id, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                ResponseJson(json!({"error": "Failed to export specification"})),
            )
                .into_response();
        }
    };

    let body = match format {
        ExportFormat::Html => render_html(&spec),
        ExportFormat::Text => render_text(&spec),
    };
    let filename = format.filename(&spec.title);

    if let Err(e) = db
        .spec_storage
        .record_export(&spec.id, format.name(), &filename, body.len() as i64)
        .await
    {
        warn!("Failed to log export of {}: {}", spec.id, e);
    }

    info!("Exported specification {} as {}", spec.id, format.name());

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// Export a stored specification as a standalone HTML document
pub async fn export_html(
    State(db): State<DbState>,
    Json(request): Json<ExportRequest>,
) -> impl IntoResponse {
    export_specification(db, request, ExportFormat::Html).await
}

/// Export a stored specification as a flat text document
pub async fn export_text(
    State(db): State<DbState>,
    Json(request): Json<ExportRequest>,
) -> impl IntoResponse {
    export_specification(db, request, ExportFormat::Text).await
}
