//! Alert model and DTOs.

use districtops_core::alerts::validate_alert_type;
use districtops_core::priority::validate_priority;
use districtops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `alerts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: DbId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub priority: String,
    pub sent_by: Option<DbId>,
    pub recipients: Option<Vec<String>>,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for raising an alert.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlert {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub message: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_alert_type"))]
    pub alert_type: String,
    /// Defaults to `medium`.
    #[validate(custom(function = "validate_priority"))]
    pub priority: Option<String>,
    /// Filled from the authenticated user when omitted.
    pub sent_by: Option<DbId>,
    pub recipients: Option<Vec<String>>,
    pub is_read: Option<bool>,
}

/// DTO for updating an alert. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlert {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub message: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_alert_type"))]
    pub alert_type: Option<String>,
    #[validate(custom(function = "validate_priority"))]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sent_by: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub recipients: Option<Option<Vec<String>>>,
    pub is_read: Option<bool>,
}
