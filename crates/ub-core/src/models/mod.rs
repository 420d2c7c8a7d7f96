pub mod delete_outcome;
pub mod role_filter;
pub mod role_stats;
pub mod user;
pub mod user_draft;
pub mod user_dto;
pub mod user_role;
