//! Alert broadcast constants and validators.

use validator::ValidationError;

use crate::validation::check_one_of;

pub const TYPE_EMERGENCY: &str = "emergency";
pub const TYPE_WARNING: &str = "warning";
pub const TYPE_INFO: &str = "info";

/// All valid alert types.
pub const VALID_TYPES: &[&str] = &[TYPE_EMERGENCY, TYPE_WARNING, TYPE_INFO];

pub fn validate_alert_type(alert_type: &str) -> Result<(), ValidationError> {
    check_one_of(alert_type, VALID_TYPES)
}
