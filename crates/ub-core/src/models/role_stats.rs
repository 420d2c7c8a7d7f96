use serde::Serialize;

/// Per-role head count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RoleStats {
    pub count: usize,
    pub active: usize,
}
