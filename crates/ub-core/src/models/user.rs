//! User entity - a single record on the board.

use crate::{UserDto, UserRole};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user record: identity, profile fields, role and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Epoch milliseconds at creation, bumped past any id already in use
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl User {
    /// Create an active user stamped with `now`, with an id unused in `existing`.
    pub fn new(
        name: String,
        email: String,
        role: UserRole,
        existing: &[User],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: next_id(existing, now),
            name,
            email,
            role,
            created_at: now,
            active: true,
        }
    }

    pub fn from_dto(dto: UserDto, existing: &[User], now: DateTime<Utc>) -> Self {
        let mut user = Self::new(dto.name, dto.email, dto.role, existing, now);
        user.active = dto.active.unwrap_or(true);
        user
    }

    /// Creation time as `dd.mm.yyyy, HH:MM`
    pub fn created_at_display(&self) -> String {
        self.created_at.format("%d.%m.%Y, %H:%M").to_string()
    }
}

/// Next record id: the creation time in milliseconds, or one past the
/// highest held id when the clock has not moved on.
pub fn next_id(existing: &[User], now: DateTime<Utc>) -> i64 {
    let candidate = now.timestamp_millis();
    match existing.iter().map(|u| u.id).max() {
        Some(max) if max >= candidate => max + 1,
        _ => candidate,
    }
}
