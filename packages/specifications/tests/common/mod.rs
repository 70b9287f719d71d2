// ABOUTME: Common test utilities for integration tests
// ABOUTME: Test server setup with in-memory database and HTTP client helpers

use axum::Router;
use serde_json::json;
use sqlx::SqlitePool;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use specgen_ai::AIService;
use specgen_api::{create_exports_router, create_specifications_router};
use specgen_specifications::DbState;

/// Test context containing server URL and database pool
pub struct TestContext {
    pub base_url: String,
    #[allow(dead_code)]
    pub pool: SqlitePool,
}

/// Create an isolated in-memory database pool with migrations applied
pub async fn setup_test_pool() -> SqlitePool {
    // A single connection keeps the in-memory database alive and shared
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .unwrap();

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create a test server whose AI client points at the given provider URL
#[allow(dead_code)]
pub async fn setup_test_server(provider_url: &str) -> TestContext {
    let pool = setup_test_pool().await;

    let ai = AIService::with_base_url("test-key".to_string(), provider_url.to_string());
    let db_state = DbState::new(pool.clone(), ai);

    let app = Router::new()
        .nest("/api/specifications", create_specifications_router())
        .nest("/api/exports", create_exports_router())
        .with_state(db_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestContext { base_url, pool }
}

/// A generated document using bold numbered headers for every section
#[allow(dead_code)]
pub fn spec_document() -> String {
    let titles = [
        "Executive Summary",
        "Project Scope",
        "Requirements",
        "Technical Specifications",
        "Compliance & Standards",
        "Evaluation Criteria",
        "Timeline & Milestones",
        "Budget Considerations",
    ];
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            format!(
                "**{}. {}:**\nDetailed {} content generated for this procurement, long enough to clear the extraction threshold.\n\n",
                i + 1,
                title,
                title
            )
        })
        .collect()
}

/// A risk response with one high-scoring and one low-scoring category
#[allow(dead_code)]
pub fn risk_document() -> String {
    let body = json!({
        "overallRiskScore": 72,
        "riskLevel": "high",
        "categories": [
            {
                "type": "financial",
                "score": 75,
                "impact": "high",
                "probability": "likely",
                "factors": [
                    {"name": "Cost escalation", "description": "Prices may rise", "severity": 8, "likelihood": 7, "evidenceSource": "Market data"},
                    {"name": "Hidden costs", "description": "Unbudgeted extras", "severity": 6, "likelihood": 6, "evidenceSource": "History"},
                    {"name": "Budget overrun", "description": "Scope growth", "severity": 7, "likelihood": 5, "evidenceSource": "Analysis"}
                ]
            },
            {
                "type": "technical",
                "score": 40,
                "impact": "medium",
                "probability": "possible",
                "factors": [
                    {"name": "Integration", "description": "Legacy systems", "severity": 5, "likelihood": 4, "evidenceSource": "Review"}
                ]
            }
        ]
    });
    format!("Here is the requested assessment:\n\n{}\n", body)
}

fn messages_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "msg_test",
        "content": [{"type": "text", "text": text}],
        "usage": {"input_tokens": 100, "output_tokens": 400}
    }))
}

/// Mount provider mocks: the risk prompt is matched first by its marker text,
/// everything else gets the specification document
#[allow(dead_code)]
pub async fn mount_provider(server: &MockServer, risk_text: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(body_string_contains("PROCUREMENT RISK ASSESSMENT REQUEST"))
        .respond_with(messages_response(risk_text))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(messages_response(&spec_document()))
        .mount(server)
        .await;
}

/// Helper to make GET requests
#[allow(dead_code)]
pub async fn get(base_url: &str, path: &str) -> reqwest::Response {
    let client = reqwest::Client::new();
    client
        .get(format!("{}{}", base_url, path))
        .send()
        .await
        .expect("Failed to make GET request")
}

/// Helper to make POST requests with JSON body
#[allow(dead_code)]
pub async fn post_json<T: serde::Serialize>(
    base_url: &str,
    path: &str,
    body: &T,
) -> reqwest::Response {
    let client = reqwest::Client::new();
    client
        .post(format!("{}{}", base_url, path))
        .json(body)
        .send()
        .await
        .expect("Failed to make POST request")
}

/// The end-to-end sample submission
#[allow(dead_code)]
pub fn fleet_upgrade_payload() -> serde_json::Value {
    json!({
        "projectTitle": "Fleet Upgrade",
        "category": "equipment",
        "budgetRange": "over-1m",
        "timeline": "12 months",
        "urgency": "high",
        "keyRequirements": ["GPS tracking", "EV compatibility"],
        "contactPerson": "A. Lee",
        "department": "Fleet Services"
    })
}
