//! Communication (SMS / email / circular) model and DTOs.

use districtops_core::communications::{validate_communication_status, validate_communication_type};
use districtops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `communications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    pub id: DbId,
    #[serde(rename = "type")]
    pub comm_type: String,
    pub subject: Option<String>,
    pub message: String,
    pub sender: Option<DbId>,
    pub recipients: Option<Vec<String>>,
    pub status: String,
    pub sent_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for recording an outgoing communication.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommunication {
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_communication_type"))]
    pub comm_type: String,
    pub subject: Option<String>,
    #[validate(length(min = 1))]
    pub message: String,
    /// Filled from the authenticated user when omitted.
    pub sender: Option<DbId>,
    pub recipients: Option<Vec<String>>,
    /// Defaults to `pending`.
    #[validate(custom(function = "validate_communication_status"))]
    pub status: Option<String>,
    pub sent_at: Option<Timestamp>,
}

/// DTO for updating a communication. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommunication {
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_communication_type"))]
    pub comm_type: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub subject: Option<Option<String>>,
    #[validate(length(min = 1))]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sender: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub recipients: Option<Option<Vec<String>>>,
    #[validate(custom(function = "validate_communication_status"))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub sent_at: Option<Option<Timestamp>>,
}
