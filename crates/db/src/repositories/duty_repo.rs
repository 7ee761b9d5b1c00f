//! Repository for the `duties` table.

use districtops_core::duties::{DEFAULT_STATUS, STATUS_PENDING};
use districtops_core::types::DbId;
use sqlx::PgPool;

use crate::models::duty::{CreateDuty, Duty, UpdateDuty};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, assigned_to, location, start_time, end_time, \
                        status, created_by, created_at, updated_at";

/// Provides CRUD operations for duty assignments.
pub struct DutyRepo;

impl DutyRepo {
    /// Insert a new duty, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDuty) -> Result<Duty, sqlx::Error> {
        let query = format!(
            "INSERT INTO duties
                (title, description, assigned_to, location, start_time, end_time, status, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Duty>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.assigned_to)
            .bind(&input.location)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a duty by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Duty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM duties WHERE id = $1");
        sqlx::query_as::<_, Duty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all duties, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Duty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM duties ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Duty>(&query).fetch_all(pool).await
    }

    /// List duties assigned to one officer, earliest start first.
    pub async fn list_by_personnel(
        pool: &PgPool,
        personnel_id: DbId,
    ) -> Result<Vec<Duty>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM duties WHERE assigned_to = $1 ORDER BY start_time, id"
        );
        sqlx::query_as::<_, Duty>(&query)
            .bind(personnel_id)
            .fetch_all(pool)
            .await
    }

    /// List duties still in the `pending` state, earliest start first.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Duty>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM duties WHERE status = $1 ORDER BY start_time, id");
        sqlx::query_as::<_, Duty>(&query)
            .bind(STATUS_PENDING)
            .fetch_all(pool)
            .await
    }

    /// Update a duty. Absent fields in `input` are left unchanged;
    /// an explicit `null` on a nullable column clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDuty,
    ) -> Result<Option<Duty>, sqlx::Error> {
        let query = format!(
            "UPDATE duties SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                assigned_to = CASE WHEN $5 THEN $6 ELSE assigned_to END,
                location = CASE WHEN $7 THEN $8 ELSE location END,
                start_time = COALESCE($9, start_time),
                end_time = COALESCE($10, end_time),
                status = COALESCE($11, status),
                created_by = CASE WHEN $12 THEN $13 ELSE created_by END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Duty>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.assigned_to.is_some())
            .bind(input.assigned_to.flatten())
            .bind(input.location.is_some())
            .bind(input.location.as_ref().and_then(|v| v.as_deref()))
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.status)
            .bind(input.created_by.is_some())
            .bind(input.created_by.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a duty. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM duties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
