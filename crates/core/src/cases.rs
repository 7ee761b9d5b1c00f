//! Case lifecycle constants, validators, and query limits.

use validator::ValidationError;

use crate::validation::check_one_of;

pub const STATUS_OPEN: &str = "open";
pub const STATUS_UNDER_INVESTIGATION: &str = "under_investigation";
pub const STATUS_CLOSED: &str = "closed";

/// All valid case statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_OPEN, STATUS_UNDER_INVESTIGATION, STATUS_CLOSED];

/// Statuses counted as "active" on the dashboard.
pub const ACTIVE_STATUSES: &[&str] = &[STATUS_OPEN, STATUS_UNDER_INVESTIGATION];

pub const DEFAULT_STATUS: &str = STATUS_OPEN;

/// Default number of rows returned by the recent-cases listing.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Upper bound on the recent-cases listing.
pub const MAX_RECENT_LIMIT: i64 = 100;

pub fn validate_case_status(status: &str) -> Result<(), ValidationError> {
    check_one_of(status, VALID_STATUSES)
}

/// Resolve a caller-supplied `limit` into the range `1..=MAX_RECENT_LIMIT`.
pub fn clamp_recent_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT)
}

/// Build an `ILIKE` pattern that matches `query` anywhere in a column.
///
/// `%`, `_` and `\` in the query are escaped so they match literally.
pub fn search_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for ch in query.trim().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_statuses_are_valid_statuses() {
        for s in ACTIVE_STATUSES {
            assert!(VALID_STATUSES.contains(s));
        }
        assert!(!ACTIVE_STATUSES.contains(&STATUS_CLOSED));
    }

    #[test]
    fn case_status_validation() {
        assert!(validate_case_status("under_investigation").is_ok());
        assert!(validate_case_status("pending").is_err());
    }

    #[test]
    fn recent_limit_defaults_and_clamps() {
        assert_eq!(clamp_recent_limit(None), DEFAULT_RECENT_LIMIT);
        assert_eq!(clamp_recent_limit(Some(0)), 1);
        assert_eq!(clamp_recent_limit(Some(-5)), 1);
        assert_eq!(clamp_recent_limit(Some(25)), 25);
        assert_eq!(clamp_recent_limit(Some(10_000)), MAX_RECENT_LIMIT);
    }

    #[test]
    fn search_pattern_wraps_and_escapes() {
        assert_eq!(search_pattern("theft"), "%theft%");
        assert_eq!(search_pattern("  market "), "%market%");
        assert_eq!(search_pattern("50%_off"), "%50\\%\\_off%");
    }
}
