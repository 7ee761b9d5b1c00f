//! Repository for the `personnel` table.

use districtops_core::personnel::DEFAULT_STATUS;
use districtops_core::types::DbId;
use sqlx::PgPool;

use crate::models::personnel::{CreatePersonnel, Personnel, UpdatePersonnel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, badge_number, first_name, last_name, rank, unit, \
                        phone, email, status, is_on_duty, current_location, created_at, updated_at";

/// Provides CRUD operations for the officer roster.
pub struct PersonnelRepo;

impl PersonnelRepo {
    /// Insert a new personnel record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePersonnel) -> Result<Personnel, sqlx::Error> {
        let query = format!(
            "INSERT INTO personnel
                (user_id, badge_number, first_name, last_name, rank, unit,
                 phone, email, status, is_on_duty, current_location)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(input.user_id)
            .bind(&input.badge_number)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.rank)
            .bind(&input.unit)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(input.is_on_duty.unwrap_or(false))
            .bind(&input.current_location)
            .fetch_one(pool)
            .await
    }

    /// Find a personnel record by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel WHERE id = $1");
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all personnel, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Personnel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personnel ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Personnel>(&query).fetch_all(pool).await
    }

    /// List personnel currently flagged as on duty.
    pub async fn list_on_duty(pool: &PgPool) -> Result<Vec<Personnel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM personnel WHERE is_on_duty = true ORDER BY last_name, first_name"
        );
        sqlx::query_as::<_, Personnel>(&query).fetch_all(pool).await
    }

    /// Update a personnel record. Absent fields in `input` are left unchanged;
    /// an explicit `null` on a nullable column clears it.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePersonnel,
    ) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!(
            "UPDATE personnel SET
                user_id = CASE WHEN $2 THEN $3 ELSE user_id END,
                badge_number = COALESCE($4, badge_number),
                first_name = COALESCE($5, first_name),
                last_name = COALESCE($6, last_name),
                rank = COALESCE($7, rank),
                unit = COALESCE($8, unit),
                phone = CASE WHEN $9 THEN $10 ELSE phone END,
                email = CASE WHEN $11 THEN $12 ELSE email END,
                status = COALESCE($13, status),
                is_on_duty = COALESCE($14, is_on_duty),
                current_location = CASE WHEN $15 THEN $16 ELSE current_location END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .bind(input.user_id.is_some())
            .bind(input.user_id.flatten())
            .bind(&input.badge_number)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.rank)
            .bind(&input.unit)
            .bind(input.phone.is_some())
            .bind(input.phone.as_ref().and_then(|v| v.as_deref()))
            .bind(input.email.is_some())
            .bind(input.email.as_ref().and_then(|v| v.as_deref()))
            .bind(&input.status)
            .bind(input.is_on_duty)
            .bind(input.current_location.is_some())
            .bind(input.current_location.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    /// Set the on-duty flag and replace the current location in one statement.
    ///
    /// A `None` location clears the column.
    pub async fn update_duty_status(
        pool: &PgPool,
        id: DbId,
        is_on_duty: bool,
        location: Option<&str>,
    ) -> Result<Option<Personnel>, sqlx::Error> {
        let query = format!(
            "UPDATE personnel SET
                is_on_duty = $2,
                current_location = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Personnel>(&query)
            .bind(id)
            .bind(is_on_duty)
            .bind(location)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a personnel record. Returns `true` if a row was removed.
    ///
    /// Cases and duties assigned to the officer keep their rows with
    /// `assigned_to` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM personnel WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
