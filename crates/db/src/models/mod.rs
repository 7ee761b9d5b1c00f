//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches;
//!   nullable columns use `Option<Option<T>>` via [`nullable`] so `null` clears
//!
//! Everything crossing the HTTP boundary uses camelCase keys.

pub mod alert;
pub mod case;
pub mod communication;
pub mod dashboard;
pub mod duty;
pub mod personnel;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializer for update fields on nullable columns.
///
/// Used as `#[serde(default, deserialize_with = "super::nullable")]` on an
/// `Option<Option<T>>`: an absent key stays `None` (leave the column alone),
/// an explicit `null` becomes `Some(None)` (clear it), and a value becomes
/// `Some(Some(v))`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::case::UpdateCase;
    use super::personnel::UpdatePersonnel;
    use validator::Validate;

    #[test]
    fn absent_key_leaves_field_untouched() {
        let input: UpdateCase = serde_json::from_str(r#"{"title":"Burglary"}"#).unwrap();
        assert_eq!(input.assigned_to, None);
        assert_eq!(input.closed_at, None);
    }

    #[test]
    fn explicit_null_requests_clear() {
        let input: UpdateCase =
            serde_json::from_str(r#"{"assignedTo":null,"closedAt":null}"#).unwrap();
        assert_eq!(input.assigned_to, Some(None));
        assert_eq!(input.closed_at, Some(None));
    }

    #[test]
    fn value_is_wrapped_twice() {
        let input: UpdateCase = serde_json::from_str(r#"{"assignedTo":7}"#).unwrap();
        assert_eq!(input.assigned_to, Some(Some(7)));
    }

    #[test]
    fn cleared_email_passes_validation() {
        let input: UpdatePersonnel = serde_json::from_str(r#"{"email":null}"#).unwrap();
        assert_eq!(input.email, Some(None));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn supplied_email_is_still_checked() {
        let input: UpdatePersonnel = serde_json::from_str(r#"{"email":"nope"}"#).unwrap();
        assert!(input.validate().is_err());
    }
}
