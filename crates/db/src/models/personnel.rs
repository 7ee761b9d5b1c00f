//! Personnel (officer roster) model and DTOs.

use districtops_core::personnel::validate_personnel_status;
use districtops_core::types::{DbId, Timestamp};
use districtops_core::validation::check_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `personnel` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Personnel {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub badge_number: String,
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    pub unit: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: String,
    pub is_on_duty: bool,
    pub current_location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a personnel record.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonnel {
    pub user_id: Option<DbId>,
    #[validate(
        length(min = 1, max = 32),
        custom(function = "check_not_blank")
    )]
    pub badge_number: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub rank: String,
    #[validate(length(min = 1))]
    pub unit: String,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    /// Defaults to `active` if omitted.
    #[validate(custom(function = "validate_personnel_status"))]
    pub status: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_on_duty: Option<bool>,
    pub current_location: Option<String>,
}

/// DTO for updating a personnel record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonnel {
    #[serde(default, deserialize_with = "super::nullable")]
    pub user_id: Option<Option<DbId>>,
    #[validate(
        length(min = 1, max = 32),
        custom(function = "check_not_blank")
    )]
    pub badge_number: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[validate(length(min = 1))]
    pub rank: Option<String>,
    #[validate(length(min = 1))]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub phone: Option<Option<String>>,
    #[validate(email)]
    #[serde(default, deserialize_with = "super::nullable")]
    pub email: Option<Option<String>>,
    #[validate(custom(function = "validate_personnel_status"))]
    pub status: Option<String>,
    pub is_on_duty: Option<bool>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub current_location: Option<Option<String>>,
}

/// Body of `PUT /personnel/{id}/duty-status`.
///
/// `location` replaces the current location outright; omitting it clears it.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DutyStatusUpdate {
    pub is_on_duty: bool,
    pub location: Option<String>,
}
