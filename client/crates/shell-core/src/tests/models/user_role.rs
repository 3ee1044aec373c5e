use crate::{CoreError, UserRole};

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Admin.as_str(), "admin");
    assert_eq!(UserRole::User.as_str(), "user");
    assert_eq!(UserRole::Moderator.as_str(), "moderator");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
    assert_eq!(UserRole::from_str("moderator").unwrap(), UserRole::Moderator);
}

#[test]
fn test_user_role_rejects_manager() {
    let err = UserRole::from_str("manager").unwrap_err();
    assert!(matches!(err, CoreError::InvalidUserRole { ref value, .. } if value == "manager"));
}

#[test]
fn test_user_role_default() {
    assert_eq!(UserRole::default(), UserRole::User);
}

#[test]
fn test_user_role_deserializes_lowercase() {
    let role: UserRole = serde_json::from_str("\"moderator\"").unwrap();
    assert_eq!(role, UserRole::Moderator);
    assert!(serde_json::from_str::<UserRole>("\"Admin\"").is_err());
}

proptest! {
    #[test]
    fn given_unknown_role_when_parsed_then_fails(role in "[a-z]{3,12}") {
        if !["admin", "user", "moderator"].contains(&role.as_str()) {
            prop_assert!(UserRole::from_str(&role).is_err());
        }
    }
}
