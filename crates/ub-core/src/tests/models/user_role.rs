use crate::UserRole;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::Admin.as_str(), "ADMIN");
    assert_eq!(UserRole::User.as_str(), "USER");
    assert_eq!(UserRole::Guest.as_str(), "GUEST");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("ADMIN").unwrap(), UserRole::Admin);
    assert_eq!(UserRole::from_str("guest").unwrap(), UserRole::Guest);
    assert_eq!(UserRole::from_str(" User ").unwrap(), UserRole::User);
    assert!(UserRole::from_str("root").is_err());
}

#[test]
fn test_user_role_default() {
    assert_eq!(UserRole::default(), UserRole::User);
}

#[test]
fn given_role_when_serialized_then_uppercase_string() {
    let json = serde_json::to_string(&UserRole::Admin).unwrap();

    assert_that!(json, eq("\"ADMIN\""));
}
