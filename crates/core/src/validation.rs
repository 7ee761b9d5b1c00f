//! Helpers for building field-level [`ValidationError`]s.
//!
//! Request DTOs derive `validator::Validate`; the enum-like string columns
//! (status, priority, type, role) plug into it through `custom` functions
//! that delegate to [`check_one_of`].

use std::borrow::Cow;

use validator::ValidationError;

/// Accept `value` only if it is one of `allowed`.
///
/// The returned error carries code `one_of`, a readable message, and the
/// rejected value as a param so clients can point at it.
pub fn check_one_of(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    let mut err = ValidationError::new("one_of");
    err.message = Some(Cow::Owned(format!(
        "must be one of: {}",
        allowed.join(", ")
    )));
    err.add_param(Cow::Borrowed("value"), &value);
    Err(err)
}

/// Reject empty or whitespace-only strings.
pub fn check_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowed_value() {
        assert!(check_one_of("open", &["open", "closed"]).is_ok());
    }

    #[test]
    fn rejects_unknown_value_with_message() {
        let err = check_one_of("reopened", &["open", "closed"]).unwrap_err();
        assert_eq!(err.code, "one_of");
        let msg = err.message.expect("message should be set");
        assert!(msg.contains("open, closed"));
        assert_eq!(err.params["value"], "reopened");
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(check_one_of("Open", &["open"]).is_err());
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(check_not_blank("").is_err());
        assert!(check_not_blank("   ").is_err());
        assert!(check_not_blank("B001").is_ok());
    }
}
