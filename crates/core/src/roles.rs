//! Well-known user role names.
//!
//! Roles are stored as plain text on the `users` row. No route currently
//! restricts access by role; they are carried for display and future use.

use validator::ValidationError;

use crate::validation::check_one_of;

pub const ROLE_PERSONNEL: &str = "personnel";
pub const ROLE_SUPERVISOR: &str = "supervisor";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_COMMANDER: &str = "commander";

/// All roles accepted at signup.
pub const VALID_ROLES: &[&str] = &[ROLE_PERSONNEL, ROLE_SUPERVISOR, ROLE_ADMIN, ROLE_COMMANDER];

/// Role assigned when signup omits one.
pub const DEFAULT_ROLE: &str = ROLE_PERSONNEL;

pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    check_one_of(role, VALID_ROLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_pass() {
        for role in VALID_ROLES {
            assert!(validate_role(role).is_ok());
        }
    }

    #[test]
    fn default_role_is_valid() {
        assert!(validate_role(DEFAULT_ROLE).is_ok());
    }

    #[test]
    fn legacy_role_names_are_rejected() {
        assert!(validate_role("district_commander").is_err());
        assert!(validate_role("unit_supervisor").is_err());
    }
}
