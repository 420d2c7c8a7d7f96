use crate::stats::{active_count, active_percentage, filter_users, role_stats};
use crate::tests::{sample_users, user};
use crate::{RoleFilter, RoleStats, UserRole};

use googletest::prelude::*;

#[test]
fn given_sample_users_when_deriving_then_matches_expected_values() {
    let users = sample_users();

    assert_that!(active_count(&users), eq(2));
    assert_that!(active_percentage(&users), eq(67));

    let ids: Vec<i64> = filter_users(&users, RoleFilter::Role(UserRole::User))
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn given_empty_collection_when_percentage_then_zero() {
    assert_that!(active_percentage(&[]), eq(0));
}

#[test]
fn given_no_active_users_when_percentage_then_zero() {
    let users = vec![user(1, UserRole::User, false), user(2, UserRole::Guest, false)];

    assert_that!(active_percentage(&users), eq(0));
}

#[test]
fn given_half_active_when_percentage_then_rounds_half_up() {
    // 1/8 = 12.5%
    let mut users: Vec<_> = (1..=8).map(|id| user(id, UserRole::User, false)).collect();
    users[0].active = true;

    assert_that!(active_percentage(&users), eq(13));
}

#[test]
fn given_all_filter_when_filtering_then_full_collection_in_order() {
    let users = sample_users();

    let filtered: Vec<i64> = filter_users(&users, RoleFilter::All)
        .iter()
        .map(|u| u.id)
        .collect();

    assert_eq!(filtered, vec![1, 2, 3]);
}

#[test]
fn given_role_without_records_when_filtering_then_empty() {
    let users = sample_users();

    assert!(filter_users(&users, RoleFilter::Role(UserRole::Guest)).is_empty());
}

#[test]
fn test_role_stats() {
    let users = sample_users();

    assert_eq!(
        role_stats(&users, UserRole::User),
        RoleStats {
            count: 2,
            active: 1
        }
    );
    assert_eq!(
        role_stats(&users, UserRole::Admin),
        RoleStats {
            count: 1,
            active: 1
        }
    );
    assert_eq!(role_stats(&users, UserRole::Guest), RoleStats::default());
}
