use crate::{RoleFilter, UserRole};

use googletest::prelude::*;

#[test]
fn test_role_filter_from_str() {
    assert_eq!("ALL".parse::<RoleFilter>().unwrap(), RoleFilter::All);
    assert_eq!("all".parse::<RoleFilter>().unwrap(), RoleFilter::All);
    assert_eq!(
        "ADMIN".parse::<RoleFilter>().unwrap(),
        RoleFilter::Role(UserRole::Admin)
    );
    assert!("everyone".parse::<RoleFilter>().is_err());
}

#[test]
fn test_role_filter_display() {
    assert_eq!(RoleFilter::All.to_string(), "ALL");
    assert_eq!(RoleFilter::Role(UserRole::Guest).to_string(), "GUEST");
}

#[test]
fn given_unknown_filter_when_parsed_then_user_message_lists_choices() {
    let result = "staff".parse::<RoleFilter>();

    assert_that!(result, err(anything()));
    let message = result.unwrap_err().user_message().to_string();
    assert_that!(message, contains_substring("ALL"));
}
