//! Internal communication constants and validators.

use validator::ValidationError;

use crate::validation::check_one_of;

pub const TYPE_SMS: &str = "sms";
pub const TYPE_EMAIL: &str = "email";
pub const TYPE_CIRCULAR: &str = "circular";

/// All valid communication channels.
pub const VALID_TYPES: &[&str] = &[TYPE_SMS, TYPE_EMAIL, TYPE_CIRCULAR];

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_SENT: &str = "sent";
pub const STATUS_FAILED: &str = "failed";

/// All valid delivery statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_SENT, STATUS_FAILED];

pub const DEFAULT_STATUS: &str = STATUS_PENDING;

pub fn validate_communication_type(comm_type: &str) -> Result<(), ValidationError> {
    check_one_of(comm_type, VALID_TYPES)
}

pub fn validate_communication_status(status: &str) -> Result<(), ValidationError> {
    check_one_of(status, VALID_STATUSES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_and_status_sets_are_disjoint_from_each_other() {
        assert!(validate_communication_type("circular").is_ok());
        assert!(validate_communication_type("sent").is_err());
        assert!(validate_communication_status("sent").is_ok());
        assert!(validate_communication_status("email").is_err());
    }
}
