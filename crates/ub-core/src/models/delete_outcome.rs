use crate::User;

/// Answer gathered by the caller for a pending delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

/// A delete waiting on the caller's consent. Only the view-model creates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub(crate) id: i64,
    pub(crate) name: String,
}

impl PendingDelete {
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Name of the targeted record, for the confirmation prompt.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    ConfirmationRequired(PendingDelete),
    Deleted(User),
    Declined,
    NotFound,
}
