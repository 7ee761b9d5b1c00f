//! Priority levels shared by cases and alerts.

use validator::ValidationError;

use crate::validation::check_one_of;

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_URGENT: &str = "urgent";

/// All valid priorities, lowest first.
pub const VALID_PRIORITIES: &[&str] = &[
    PRIORITY_LOW,
    PRIORITY_MEDIUM,
    PRIORITY_HIGH,
    PRIORITY_URGENT,
];

/// Priority applied when a create request omits one.
pub const DEFAULT_PRIORITY: &str = PRIORITY_MEDIUM;

pub fn validate_priority(priority: &str) -> Result<(), ValidationError> {
    check_one_of(priority, VALID_PRIORITIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_levels_accepted() {
        for p in VALID_PRIORITIES {
            assert!(validate_priority(p).is_ok(), "{p} should be valid");
        }
    }

    #[test]
    fn unknown_level_rejected() {
        assert!(validate_priority("critical").is_err());
    }
}
