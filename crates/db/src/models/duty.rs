//! Duty assignment model and DTOs.

use districtops_core::duties::{validate_duty_status, validate_duty_window};
use districtops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A row from the `duties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Duty {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<DbId>,
    pub location: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub status: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for scheduling a duty.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "check_create_window"))]
pub struct CreateDuty {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<DbId>,
    pub location: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// Defaults to `pending`.
    #[validate(custom(function = "validate_duty_status"))]
    pub status: Option<String>,
    /// Filled from the authenticated user when omitted.
    pub created_by: Option<DbId>,
}

/// DTO for updating a duty. All fields are optional.
///
/// Only a window with both ends supplied is checked here; the handler checks
/// a single moved end against the stored row.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "check_update_window"))]
pub struct UpdateDuty {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub assigned_to: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub location: Option<Option<String>>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    #[validate(custom(function = "validate_duty_status"))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub created_by: Option<Option<DbId>>,
}

fn check_create_window(input: &CreateDuty) -> Result<(), ValidationError> {
    validate_duty_window(input.start_time, input.end_time)
}

fn check_update_window(input: &UpdateDuty) -> Result<(), ValidationError> {
    match (input.start_time, input.end_time) {
        (Some(start), Some(end)) => validate_duty_window(start, end),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn create(start: Timestamp, end: Timestamp) -> CreateDuty {
        CreateDuty {
            title: "Market patrol".to_string(),
            description: None,
            assigned_to: None,
            location: Some("Market Square".to_string()),
            start_time: start,
            end_time: end,
            status: None,
            created_by: None,
        }
    }

    #[test]
    fn inverted_window_is_rejected() {
        let now = Utc::now();
        let input = create(now, now - Duration::hours(1));
        let errors = input.validate().unwrap_err();
        assert!(errors.errors().contains_key("__all__"));
    }

    #[test]
    fn forward_window_passes() {
        let now = Utc::now();
        assert!(create(now, now + Duration::hours(4)).validate().is_ok());
    }

    #[test]
    fn partial_update_window_is_not_checked() {
        let update = UpdateDuty {
            end_time: Some(Utc::now() - Duration::days(365)),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let now = Utc::now();
        let mut input = create(now, now + Duration::hours(1));
        input.status = Some("finished".to_string());
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("status"));
    }
}
