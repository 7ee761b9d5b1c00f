//! Duty assignment constants and validators.

use std::borrow::Cow;

use validator::ValidationError;

use crate::types::Timestamp;
use crate::validation::check_one_of;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid duty statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

pub const DEFAULT_STATUS: &str = STATUS_PENDING;

pub fn validate_duty_status(status: &str) -> Result<(), ValidationError> {
    check_one_of(status, VALID_STATUSES)
}

/// A duty window must end strictly after it starts.
pub fn validate_duty_window(start: Timestamp, end: Timestamp) -> Result<(), ValidationError> {
    if end > start {
        return Ok(());
    }
    let mut err = ValidationError::new("duty_window");
    err.message = Some(Cow::Borrowed("endTime must be after startTime"));
    Err(err)
}
