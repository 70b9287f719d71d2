// ABOUTME: SQLite persistence for specification records and export logs
// ABOUTME: Form and content are stored as opaque JSON alongside scalar identity fields

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use thiserror::Error;
use tracing::debug;

use crate::types::{
    GeneratedContent, ProcurementCategory, Specification, SpecificationStatus, SubmissionForm,
};

/// Fixed page size for listings
const LIST_PAGE_SIZE: i64 = 10;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Specification not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Listing entry returned by the index endpoint
#[derive(Debug, Clone, serde::Serialize)]
pub struct SpecificationSummary {
    pub id: String,
    pub title: String,
    pub category: ProcurementCategory,
    pub status: SpecificationStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub struct SpecificationStorage {
    pool: SqlitePool,
}

impl SpecificationStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new specification record. Each generation creates a fresh row;
    /// there is no update path.
    pub async fn create_specification(&self, spec: &Specification) -> StorageResult<()> {
        let form_json = serde_json::to_string(&spec.form_data)?;
        let content_json = serde_json::to_string(&spec.content)?;

        sqlx::query(
            r#"
            INSERT INTO specifications (id, title, category, status, version, form_data, content, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&spec.id)
        .bind(&spec.title)
        .bind(spec.category.to_string())
        .bind(spec.status.to_string())
        .bind(spec.version)
        .bind(&form_json)
        .bind(&content_json)
        // Fixed-width timestamps so lexicographic order matches chronological
        .bind(spec.created_at.to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await?;

        debug!("Stored specification {}", spec.id);
        Ok(())
    }

    /// Fetch a single specification by id
    pub async fn get_specification(&self, id: &str) -> StorageResult<Option<Specification>> {
        let row = sqlx::query("SELECT * FROM specifications WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(self.row_to_specification(&row)?)),
            None => Ok(None),
        }
    }

    /// List the most recent specifications, newest first, fixed page size
    pub async fn list_specifications(&self) -> StorageResult<Vec<SpecificationSummary>> {
        let rows = sqlx::query(
            "SELECT id, title, category, status, created_at FROM specifications
             ORDER BY created_at DESC LIMIT ?",
        )
        .bind(LIST_PAGE_SIZE)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(SpecificationSummary {
                    id: row.try_get("id")?,
                    title: row.try_get("title")?,
                    category: parse_enum_column(row, "category")?,
                    status: parse_enum_column(row, "status")?,
                    created_at: parse_timestamp(row, "created_at")?,
                })
            })
            .collect()
    }

    /// Log an export of a stored specification
    pub async fn record_export(
        &self,
        specification_id: &str,
        format: &str,
        filename: &str,
        file_size: i64,
    ) -> StorageResult<()> {
        sqlx::query(
            r#"
            INSERT INTO specification_exports (id, specification_id, format, filename, file_size, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(specgen_core::generate_spec_id())
        .bind(specification_id)
        .bind(format)
        .bind(filename)
        .bind(file_size)
        .bind(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    fn row_to_specification(&self, row: &SqliteRow) -> StorageResult<Specification> {
        let form_json: String = row.try_get("form_data")?;
        let content_json: String = row.try_get("content")?;

        let form_data: SubmissionForm = serde_json::from_str(&form_json)?;
        let content: GeneratedContent = serde_json::from_str(&content_json)?;

        Ok(Specification {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            category: parse_enum_column(row, "category")?,
            status: parse_enum_column(row, "status")?,
            version: row.try_get("version")?,
            form_data,
            content,
            created_at: parse_timestamp(row, "created_at")?,
        })
    }
}

fn parse_enum_column<T: serde::de::DeserializeOwned>(
    row: &SqliteRow,
    column: &str,
) -> StorageResult<T> {
    let value: String = row.try_get(column)?;
    serde_json::from_value(serde_json::Value::String(value.clone()))
        .map_err(|_| StorageError::Database(format!("Invalid {} value: {}", column, value)))
}

fn parse_timestamp(row: &SqliteRow, column: &str) -> StorageResult<DateTime<Utc>> {
    let value: String = row.try_get(column)?;
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StorageError::Database(format!("Invalid {} timestamp", column)))
}
