mod role_filter;
mod user;
mod user_role;
