//! Repository for the `alerts` table.

use districtops_core::priority::DEFAULT_PRIORITY;
use districtops_core::types::DbId;
use sqlx::PgPool;

use crate::models::alert::{Alert, CreateAlert, UpdateAlert};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, message, alert_type, priority, sent_by, recipients, is_read, created_at";

/// Provides CRUD operations for alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Insert a new alert, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAlert) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (title, message, alert_type, priority, sent_by, recipients, is_read)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.alert_type)
            .bind(input.priority.as_deref().unwrap_or(DEFAULT_PRIORITY))
            .bind(input.sent_by)
            .bind(&input.recipients)
            .bind(input.is_read.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find an alert by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alerts WHERE id = $1");
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all alerts, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM alerts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Alert>(&query).fetch_all(pool).await
    }

    /// List alerts that have not been marked read, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Alert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM alerts WHERE is_read = false ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Alert>(&query).fetch_all(pool).await
    }

    /// Update an alert. Absent fields in `input` are left unchanged;
    /// an explicit `null` on a nullable column clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAlert,
    ) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!(
            "UPDATE alerts SET
                title = COALESCE($2, title),
                message = COALESCE($3, message),
                alert_type = COALESCE($4, alert_type),
                priority = COALESCE($5, priority),
                sent_by = CASE WHEN $6 THEN $7 ELSE sent_by END,
                recipients = CASE WHEN $8 THEN $9 ELSE recipients END,
                is_read = COALESCE($10, is_read)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.alert_type)
            .bind(&input.priority)
            .bind(input.sent_by.is_some())
            .bind(input.sent_by.flatten())
            .bind(input.recipients.is_some())
            .bind(input.recipients.as_ref().and_then(Option::as_ref))
            .bind(input.is_read)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an alert. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM alerts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
