//! Case model and DTOs.

use districtops_core::cases::validate_case_status;
use districtops_core::priority::validate_priority;
use districtops_core::types::{DbId, Timestamp};
use districtops_core::validation::check_not_blank;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `cases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: DbId,
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    /// Offence category, e.g. `theft`, `assault`, `traffic_accident`.
    #[serde(rename = "type")]
    pub case_type: String,
    pub status: String,
    pub priority: String,
    pub assigned_to: Option<DbId>,
    pub reported_by: Option<String>,
    pub reported_at: Timestamp,
    pub closed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for opening a new case.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCase {
    #[validate(length(min = 1), custom(function = "check_not_blank"))]
    pub case_number: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub case_type: String,
    /// Defaults to `open`.
    #[validate(custom(function = "validate_case_status"))]
    pub status: Option<String>,
    /// Defaults to `medium`.
    #[validate(custom(function = "validate_priority"))]
    pub priority: Option<String>,
    pub assigned_to: Option<DbId>,
    pub reported_by: Option<String>,
    /// Defaults to the insert time.
    pub reported_at: Option<Timestamp>,
    pub closed_at: Option<Timestamp>,
}

/// DTO for updating a case. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCase {
    #[validate(length(min = 1), custom(function = "check_not_blank"))]
    pub case_number: Option<String>,
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub case_type: Option<String>,
    #[validate(custom(function = "validate_case_status"))]
    pub status: Option<String>,
    #[validate(custom(function = "validate_priority"))]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub assigned_to: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub reported_by: Option<Option<String>>,
    pub reported_at: Option<Timestamp>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub closed_at: Option<Option<Timestamp>>,
}
