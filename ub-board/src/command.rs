//! One line of board input, parsed.

use std::str::FromStr;

use thiserror::Error;
use ub_core::{CoreError, RoleFilter, UserRole};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command: {0} (try 'help')")]
    Unknown(String),

    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("{}", .0.user_message())]
    Core(#[from] CoreError),
}

/// Draft form field addressed by `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Name(String),
    Email(String),
    Role(UserRole),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Stats,
    Filter(RoleFilter),
    /// Submit the draft, optionally filling it first from `name|email[|role]`
    Add(Option<(String, String, UserRole)>),
    Set(DraftField),
    Draft,
    Edit(i64),
    Save,
    Cancel,
    Toggle(i64),
    Delete(i64),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                          show users passing the current filter
  stats                         active count, percentage and per-role stats
  filter ALL|ADMIN|USER|GUEST   change the filter
  add [name|email[|role]]       submit the draft (optionally filling it first)
  set name|email|role <value>   edit one draft field
  draft                         show the draft form
  edit <id>                     start editing a user
  save                          apply the draft to the user being edited
  cancel                        leave edit mode and clear the draft
  toggle <id>                   flip a user's active flag
  delete <id>                   delete a user (asks for confirmation)
  help                          this text
  quit                          leave";

fn parse_id(command: &'static str, arg: &str) -> Result<i64, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "<id>",
        });
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidId(arg.to_string()))
}

fn parse_add(arg: &str) -> Result<Option<(String, String, UserRole)>, CommandError> {
    if arg.is_empty() {
        return Ok(None);
    }

    let mut parts = arg.splitn(3, '|');
    let name = parts.next().unwrap_or_default().trim().to_string();
    let email = parts.next().unwrap_or_default().trim().to_string();
    let role = match parts.next().map(str::trim) {
        Some(role) if !role.is_empty() => role.parse()?,
        _ => UserRole::default(),
    };
    Ok(Some((name, email, role)))
}

fn parse_set(arg: &str) -> Result<DraftField, CommandError> {
    let (field, value) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
    let value = value.trim();

    match field.to_lowercase().as_str() {
        "name" => Ok(DraftField::Name(value.to_string())),
        "email" => Ok(DraftField::Email(value.to_string())),
        "role" => Ok(DraftField::Role(value.parse()?)),
        _ => Err(CommandError::MissingArgument {
            command: "set",
            expected: "name|email|role <value>",
        }),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = arg.trim();

        match word.to_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "stats" => Ok(Self::Stats),
            "filter" => {
                if arg.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "filter",
                        expected: "ALL|ADMIN|USER|GUEST",
                    });
                }
                Ok(Self::Filter(arg.parse()?))
            }
            "add" => Ok(Self::Add(parse_add(arg)?)),
            "set" => Ok(Self::Set(parse_set(arg)?)),
            "draft" => Ok(Self::Draft),
            "edit" => Ok(Self::Edit(parse_id("edit", arg)?)),
            "save" => Ok(Self::Save),
            "cancel" => Ok(Self::Cancel),
            "toggle" => Ok(Self::Toggle(parse_id("toggle", arg)?)),
            "delete" | "rm" => Ok(Self::Delete(parse_id("delete", arg)?)),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
