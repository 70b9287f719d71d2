// ABOUTME: Integration tests for the SQLite storage layer
// ABOUTME: Covers record round-trips, listing order, page size, and export logs

mod common;

use chrono::{Duration, Utc};
use common::setup_test_pool;
use pretty_assertions::assert_eq;
use sqlx::Row;

use specgen_core::types::{
    BudgetRange, GeneratedContent, ProcurementCategory, Specification, SpecificationStatus,
    SubmissionForm, UrgencyLevel,
};
use specgen_specifications::SpecificationStorage;

fn sample_spec(id: &str, title: &str, offset_secs: i64) -> Specification {
    Specification {
        id: id.to_string(),
        title: title.to_string(),
        category: ProcurementCategory::Software,
        status: SpecificationStatus::Generated,
        version: 1,
        form_data: SubmissionForm {
            project_title: title.to_string(),
            category: ProcurementCategory::Software,
            budget_range: BudgetRange::Range50k100k,
            timeline: "3 months".to_string(),
            urgency: UrgencyLevel::Medium,
            key_requirements: vec!["Single sign-on".to_string()],
            compliance_requirements: Some(vec!["APP compliance".to_string()]),
            success_criteria: None,
            additional_notes: None,
            contact_person: "B. Chen".to_string(),
            department: "Digital Services".to_string(),
            domain: None,
            strategic_priority: None,
        },
        content: GeneratedContent {
            executive_summary: "Summary".to_string(),
            scope: "Scope".to_string(),
            requirements: "Requirements".to_string(),
            technical_specs: "Specs".to_string(),
            compliance: "Compliance".to_string(),
            evaluation: "Evaluation".to_string(),
            timeline: "Timeline".to_string(),
            budget: "Budget".to_string(),
        },
        created_at: Utc::now() + Duration::seconds(offset_secs),
    }
}

#[tokio::test]
async fn test_create_and_get_round_trip() {
    let pool = setup_test_pool().await;
    let storage = SpecificationStorage::new(pool);

    let spec = sample_spec("aaaa1111", "CRM Replacement", 0);
    storage.create_specification(&spec).await.unwrap();

    let loaded = storage.get_specification("aaaa1111").await.unwrap().unwrap();
    assert_eq!(loaded.id, spec.id);
    assert_eq!(loaded.title, spec.title);
    assert_eq!(loaded.category, spec.category);
    assert_eq!(loaded.status, spec.status);
    assert_eq!(loaded.version, 1);
    assert_eq!(loaded.form_data, spec.form_data);
    assert_eq!(loaded.content, spec.content);
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let pool = setup_test_pool().await;
    let storage = SpecificationStorage::new(pool);

    let loaded = storage.get_specification("missing1").await.unwrap();
    assert!(loaded.is_none());
}

#[tokio::test]
async fn test_list_newest_first_with_fixed_page_size() {
    let pool = setup_test_pool().await;
    let storage = SpecificationStorage::new(pool);

    for i in 0..12 {
        let spec = sample_spec(&format!("spec{:04}", i), &format!("Project {}", i), i);
        storage.create_specification(&spec).await.unwrap();
    }

    let listed = storage.list_specifications().await.unwrap();
    assert_eq!(listed.len(), 10);
    assert_eq!(listed[0].title, "Project 11");
    assert_eq!(listed[9].title, "Project 2");
}

#[tokio::test]
async fn test_record_export_logs_row() {
    let pool = setup_test_pool().await;
    let storage = SpecificationStorage::new(pool.clone());

    let spec = sample_spec("bbbb2222", "Waste Contract", 0);
    storage.create_specification(&spec).await.unwrap();
    storage
        .record_export("bbbb2222", "html", "Waste_Contract.html", 2048)
        .await
        .unwrap();

    let row = sqlx::query("SELECT format, filename, file_size FROM specification_exports")
        .fetch_one(&pool)
        .await
        .unwrap();
    let format: String = row.get("format");
    let filename: String = row.get("filename");
    let file_size: i64 = row.get("file_size");
    assert_eq!(format, "html");
    assert_eq!(filename, "Waste_Contract.html");
    assert_eq!(file_size, 2048);
}
