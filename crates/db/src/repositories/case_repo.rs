//! Repository for the `cases` table.

use districtops_core::cases::{search_pattern, DEFAULT_STATUS};
use districtops_core::priority::DEFAULT_PRIORITY;
use districtops_core::types::DbId;
use sqlx::PgPool;

use crate::models::case::{Case, CreateCase, UpdateCase};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, case_number, title, description, case_type, status, priority, \
                        assigned_to, reported_by, reported_at, closed_at, created_at, updated_at";

/// Provides CRUD and lookup operations for cases.
pub struct CaseRepo;

impl CaseRepo {
    /// Insert a new case, returning the created row.
    ///
    /// `reported_at` falls back to the insert time.
    pub async fn create(pool: &PgPool, input: &CreateCase) -> Result<Case, sqlx::Error> {
        let query = format!(
            "INSERT INTO cases
                (case_number, title, description, case_type, status, priority,
                 assigned_to, reported_by, reported_at, closed_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, NOW()), $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(&input.case_number)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.case_type)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(input.priority.as_deref().unwrap_or(DEFAULT_PRIORITY))
            .bind(input.assigned_to)
            .bind(&input.reported_by)
            .bind(input.reported_at)
            .bind(input.closed_at)
            .fetch_one(pool)
            .await
    }

    /// Find a case by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Case>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cases WHERE id = $1");
        sqlx::query_as::<_, Case>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cases, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cases ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Case>(&query).fetch_all(pool).await
    }

    /// The `limit` most recently created cases.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Case>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cases ORDER BY created_at DESC, id DESC LIMIT $1");
        sqlx::query_as::<_, Case>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List cases with the given status, most recently created first.
    pub async fn list_by_status(pool: &PgPool, status: &str) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cases WHERE status = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search over case number, title, and description.
    pub async fn search(pool: &PgPool, text: &str) -> Result<Vec<Case>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cases
             WHERE case_number ILIKE $1
                OR title ILIKE $1
                OR description ILIKE $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(search_pattern(text))
            .fetch_all(pool)
            .await
    }

    /// Update a case. Absent fields in `input` are left unchanged;
    /// an explicit `null` on a nullable column clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCase,
    ) -> Result<Option<Case>, sqlx::Error> {
        let query = format!(
            "UPDATE cases SET
                case_number = COALESCE($2, case_number),
                title = COALESCE($3, title),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                case_type = COALESCE($6, case_type),
                status = COALESCE($7, status),
                priority = COALESCE($8, priority),
                assigned_to = CASE WHEN $9 THEN $10 ELSE assigned_to END,
                reported_by = CASE WHEN $11 THEN $12 ELSE reported_by END,
                reported_at = COALESCE($13, reported_at),
                closed_at = CASE WHEN $14 THEN $15 ELSE closed_at END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Case>(&query)
            .bind(id)
            .bind(&input.case_number)
            .bind(&input.title)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(&input.case_type)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.assigned_to.is_some())
            .bind(input.assigned_to.flatten())
            .bind(input.reported_by.is_some())
            .bind(input.reported_by.as_ref().and_then(|v| v.as_deref()))
            .bind(input.reported_at)
            .bind(input.closed_at.is_some())
            .bind(input.closed_at.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a case. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cases WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
