use crate::{CoreError, Result as CoreErrorResult, User, UserRole};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// View-only predicate restricting which records are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Role(UserRole),
}

impl RoleFilter {
    pub fn matches(&self, user: &User) -> bool {
        match self {
            Self::All => true,
            Self::Role(role) => user.role == *role,
        }
    }
}

impl From<UserRole> for RoleFilter {
    fn from(role: UserRole) -> Self {
        Self::Role(role)
    }
}

impl FromStr for RoleFilter {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        if s.trim().eq_ignore_ascii_case("ALL") {
            return Ok(Self::All);
        }

        let location = Location::caller();
        s.parse::<UserRole>()
            .map(Self::Role)
            .map_err(|_| CoreError::InvalidFilter {
                value: s.to_string(),
                location: ErrorLocation::from(location),
            })
    }
}

impl std::fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "ALL"),
            Self::Role(role) => write!(f, "{role}"),
        }
    }
}
