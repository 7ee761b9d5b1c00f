//! Repository for the `communications` table.

use districtops_core::communications::DEFAULT_STATUS;
use districtops_core::types::DbId;
use sqlx::PgPool;

use crate::models::communication::{Communication, CreateCommunication, UpdateCommunication};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, comm_type, subject, message, sender, recipients, status, sent_at, created_at";

/// Provides CRUD operations for communications.
pub struct CommunicationRepo;

impl CommunicationRepo {
    /// Insert a new communication, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommunication,
    ) -> Result<Communication, sqlx::Error> {
        let query = format!(
            "INSERT INTO communications (comm_type, subject, message, sender, recipients, status, sent_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Communication>(&query)
            .bind(&input.comm_type)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(input.sender)
            .bind(&input.recipients)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(input.sent_at)
            .fetch_one(pool)
            .await
    }

    /// Find a communication by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Communication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM communications WHERE id = $1");
        sqlx::query_as::<_, Communication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all communications, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Communication>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM communications ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Communication>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a communication. Absent fields in `input` are left unchanged;
    /// an explicit `null` on a nullable column clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCommunication,
    ) -> Result<Option<Communication>, sqlx::Error> {
        let query = format!(
            "UPDATE communications SET
                comm_type = COALESCE($2, comm_type),
                subject = CASE WHEN $3 THEN $4 ELSE subject END,
                message = COALESCE($5, message),
                sender = CASE WHEN $6 THEN $7 ELSE sender END,
                recipients = CASE WHEN $8 THEN $9 ELSE recipients END,
                status = COALESCE($10, status),
                sent_at = CASE WHEN $11 THEN $12 ELSE sent_at END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Communication>(&query)
            .bind(id)
            .bind(&input.comm_type)
            .bind(input.subject.is_some())
            .bind(input.subject.as_ref().and_then(|v| v.as_deref()))
            .bind(&input.message)
            .bind(input.sender.is_some())
            .bind(input.sender.flatten())
            .bind(input.recipients.is_some())
            .bind(input.recipients.as_ref().and_then(Option::as_ref))
            .bind(&input.status)
            .bind(input.sent_at.is_some())
            .bind(input.sent_at.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a communication. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM communications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
