pub mod error;
pub mod fixture;
pub mod models;
pub mod stats;
pub mod view_model;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::delete_outcome::{Confirmation, DeleteOutcome, PendingDelete};
pub use models::role_filter::RoleFilter;
pub use models::role_stats::RoleStats;
pub use models::user::{User, next_id};
pub use models::user_draft::UserDraft;
pub use models::user_dto::{UserDto, UserPatch};
pub use models::user_role::UserRole;
pub use view_model::UserViewModel;
