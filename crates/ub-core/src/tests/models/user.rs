use crate::tests::user;
use crate::{User, UserDto, UserPatch, UserRole, next_id};

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_no_users_when_next_id_then_uses_timestamp_millis() {
    let now = Utc::now();

    assert_that!(next_id(&[], now), eq(now.timestamp_millis()));
}

#[test]
fn given_id_at_current_millis_when_next_id_then_bumps_past_it() {
    let now = Utc::now();
    let existing = vec![user(now.timestamp_millis(), UserRole::User, true)];

    assert_that!(next_id(&existing, now), eq(now.timestamp_millis() + 1));
}

#[test]
fn given_older_ids_when_next_id_then_uses_timestamp_millis() {
    let now = Utc::now();
    let existing = vec![user(1, UserRole::User, true), user(2, UserRole::Admin, true)];

    assert_that!(next_id(&existing, now), eq(now.timestamp_millis()));
}

#[test]
fn test_user_new_is_active() {
    let now = Utc::now();
    let created = User::new(
        "Ann".to_string(),
        "ann@example.com".to_string(),
        UserRole::Guest,
        &[],
        now,
    );

    assert!(created.active);
    assert_eq!(created.created_at, now);
    assert_eq!(created.role, UserRole::Guest);
}

#[test]
fn given_dto_with_inactive_flag_when_from_dto_then_inactive() {
    let mut dto = UserDto::new("Bob", "bob@example.com", UserRole::User);
    dto.active = Some(false);

    let created = User::from_dto(dto, &[], Utc::now());

    assert_that!(created.active, eq(false));
}

#[test]
fn given_patch_when_applied_then_only_set_fields_change() {
    let mut target = user(7, UserRole::User, true);
    let before = target.clone();

    UserPatch {
        email: Some("new@example.com".to_string()),
        active: Some(false),
        ..UserPatch::default()
    }
    .apply(&mut target);

    assert_that!(target.email, eq("new@example.com"));
    assert_that!(target.active, eq(false));
    assert_that!(target.name, eq(&before.name));
    assert_that!(target.role, eq(before.role));
    assert_that!(target.id, eq(before.id));
    assert_that!(target.created_at, eq(before.created_at));
}

#[test]
fn test_created_at_display() {
    let mut target = user(1, UserRole::Admin, true);
    target.created_at = Utc.with_ymd_and_hms(2024, 3, 1, 11, 0, 0).unwrap() + Duration::minutes(5);

    assert_eq!(target.created_at_display(), "01.03.2024, 11:05");
}

#[test]
fn given_user_when_serialized_then_uses_camel_case_fields() {
    let json = serde_json::to_value(user(1, UserRole::Admin, true)).unwrap();

    assert_that!(json.get("createdAt"), some(anything()));
    assert_that!(json["role"].as_str(), some(eq("ADMIN")));
}
