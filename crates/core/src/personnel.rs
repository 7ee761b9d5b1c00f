//! Personnel roster constants and validators.

use validator::ValidationError;

use crate::validation::check_one_of;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_ON_LEAVE: &str = "on_leave";
pub const STATUS_SUSPENDED: &str = "suspended";

/// All valid personnel statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_ON_LEAVE, STATUS_SUSPENDED];

pub const DEFAULT_STATUS: &str = STATUS_ACTIVE;

pub fn validate_personnel_status(status: &str) -> Result<(), ValidationError> {
    check_one_of(status, VALID_STATUSES)
}
