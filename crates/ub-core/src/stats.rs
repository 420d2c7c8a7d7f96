//! Values derived from a collection. Nothing here is cached; callers
//! recompute on every read.

use crate::{RoleFilter, RoleStats, User, UserRole};

pub fn active_count(users: &[User]) -> usize {
    users.iter().filter(|u| u.active).count()
}

/// `round(active / total * 100)`, halves rounding up; 0 for an empty collection.
pub fn active_percentage(users: &[User]) -> u32 {
    let total = users.len();
    if total == 0 {
        return 0;
    }
    let active = active_count(users);
    ((active * 200 + total) / (2 * total)) as u32
}

/// Records passing `filter`, in collection order.
pub fn filter_users(users: &[User], filter: RoleFilter) -> Vec<&User> {
    users.iter().filter(|u| filter.matches(u)).collect()
}

pub fn role_stats(users: &[User], role: UserRole) -> RoleStats {
    users
        .iter()
        .filter(|u| u.role == role)
        .fold(RoleStats::default(), |mut stats, u| {
            stats.count += 1;
            if u.active {
                stats.active += 1;
            }
            stats
        })
}
