//! Fixed five-record collection the board starts from.

use crate::{User, UserRole};

use chrono::{DateTime, NaiveDate, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn user(
    id: i64,
    name: &str,
    email: &str,
    role: UserRole,
    created_at: DateTime<Utc>,
    active: bool,
) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        created_at,
        active,
    }
}

pub fn initial_users() -> Vec<User> {
    vec![
        user(
            1,
            "Ivan (Spring Developer)",
            "ivan@springboot.com",
            UserRole::Admin,
            at(2024, 1, 15, 10, 30),
            true,
        ),
        user(
            2,
            "Maria (React Developer)",
            "maria@react.com",
            UserRole::User,
            at(2024, 2, 20, 14, 45),
            true,
        ),
        user(
            3,
            "Alex (Angular Developer)",
            "alex@angular.com",
            UserRole::User,
            at(2024, 3, 10, 9, 15),
            false,
        ),
        user(
            4,
            "Kate (Full Stack)",
            "kate@fullstack.com",
            UserRole::Admin,
            at(2024, 1, 25, 16, 20),
            true,
        ),
        user(
            5,
            "Dmitry (DevOps)",
            "dmitry@devops.com",
            UserRole::Guest,
            at(2024, 3, 1, 11, 0),
            true,
        ),
    ]
}
