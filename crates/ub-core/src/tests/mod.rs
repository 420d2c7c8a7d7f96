mod models;
mod stats;

use crate::{User, UserRole};

use chrono::{TimeZone, Utc};

/// Record with fixed timestamp; only id, role and status vary.
pub(crate) fn user(id: i64, role: UserRole, active: bool) -> User {
    User {
        id,
        name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        role,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        active,
    }
}

/// `[{1,ADMIN,true},{2,USER,false},{3,USER,true}]`
pub(crate) fn sample_users() -> Vec<User> {
    vec![
        user(1, UserRole::Admin, true),
        user(2, UserRole::User, false),
        user(3, UserRole::User, true),
    ]
}
