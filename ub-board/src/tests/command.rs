use crate::command::{Command, CommandError, DraftField};

use ub_core::{RoleFilter, UserRole};

use googletest::prelude::*;

#[test]
fn test_simple_commands_parse() {
    assert_eq!("list".parse::<Command>().unwrap(), Command::List);
    assert_eq!("  STATS ".parse::<Command>().unwrap(), Command::Stats);
    assert_eq!("save".parse::<Command>().unwrap(), Command::Save);
    assert_eq!("cancel".parse::<Command>().unwrap(), Command::Cancel);
    assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
}

#[test]
fn given_filter_argument_when_parsed_then_role_filter() {
    assert_eq!(
        "filter guest".parse::<Command>().unwrap(),
        Command::Filter(RoleFilter::Role(UserRole::Guest))
    );
    assert_eq!(
        "filter ALL".parse::<Command>().unwrap(),
        Command::Filter(RoleFilter::All)
    );
}

#[test]
fn given_filter_without_argument_when_parsed_then_missing_argument() {
    let result = "filter".parse::<Command>();

    assert!(matches!(
        result,
        Err(CommandError::MissingArgument {
            command: "filter",
            ..
        })
    ));
}

#[test]
fn given_add_with_fields_when_parsed_then_fields_trimmed() {
    let command = "add Lena | lena@example.com | admin"
        .parse::<Command>()
        .unwrap();

    assert_eq!(
        command,
        Command::Add(Some((
            "Lena".to_string(),
            "lena@example.com".to_string(),
            UserRole::Admin
        )))
    );
}

#[test]
fn given_add_without_role_when_parsed_then_default_role() {
    let command = "add Lena|lena@example.com".parse::<Command>().unwrap();

    assert_eq!(
        command,
        Command::Add(Some((
            "Lena".to_string(),
            "lena@example.com".to_string(),
            UserRole::User
        )))
    );
}

#[test]
fn given_bare_add_when_parsed_then_submits_existing_draft() {
    assert_eq!("add".parse::<Command>().unwrap(), Command::Add(None));
}

#[test]
fn given_set_commands_when_parsed_then_draft_fields() {
    assert_eq!(
        "set name Anna Smith".parse::<Command>().unwrap(),
        Command::Set(DraftField::Name("Anna Smith".to_string()))
    );
    assert_eq!(
        "set role guest".parse::<Command>().unwrap(),
        Command::Set(DraftField::Role(UserRole::Guest))
    );
    assert!("set phone 123".parse::<Command>().is_err());
}

#[test]
fn given_id_commands_when_parsed_then_ids_extracted() {
    assert_eq!("edit 3".parse::<Command>().unwrap(), Command::Edit(3));
    assert_eq!("toggle 4".parse::<Command>().unwrap(), Command::Toggle(4));
    assert_eq!("rm 5".parse::<Command>().unwrap(), Command::Delete(5));
}

#[test]
fn given_non_numeric_id_when_parsed_then_invalid_id() {
    let result = "toggle abc".parse::<Command>();

    assert!(matches!(result, Err(CommandError::InvalidId(ref id)) if id == "abc"));
}

#[test]
fn given_unknown_word_when_parsed_then_unknown_error_mentions_help() {
    let result = "frobnicate".parse::<Command>();

    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().to_string(), contains_substring("help"));
}

#[test]
fn given_invalid_role_when_parsed_then_user_message_shown() {
    let err = "filter staff".parse::<Command>().unwrap_err();

    assert_that!(err.to_string(), contains_substring("ALL, ADMIN, USER or GUEST"));
}
