//! Board state: the record collection, the draft form, the edit cursor and
//! the active filter. Derived values are recomputed from this state on
//! every read.

use crate::{
    Confirmation, CoreError, DeleteOutcome, PendingDelete, Result as CoreErrorResult, RoleFilter,
    RoleStats, User, UserDraft, UserRole, fixture, stats,
};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, info};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill name and email fields";

#[derive(Debug)]
pub struct UserViewModel {
    users: Vec<User>,
    filter: RoleFilter,
    draft: UserDraft,
    editing_id: Option<i64>,
    loading: bool,
}

impl Default for UserViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl UserViewModel {
    /// Empty board, still flagged as loading
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            filter: RoleFilter::All,
            draft: UserDraft::default(),
            editing_id: None,
            loading: true,
        }
    }

    /// Board over an explicit collection, already loaded.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            loading: false,
            ..Self::new()
        }
    }

    /// Load the fixture, hold the loading flag for `loading_delay`, then clear it.
    pub async fn init(&mut self, loading_delay: Duration) {
        self.load_initial();
        tokio::time::sleep(loading_delay).await;
        self.finish_loading();
    }

    /// Replace the collection with the fixed five-record fixture.
    pub fn load_initial(&mut self) {
        self.users = fixture::initial_users();
        debug!("Loaded {} initial users", self.users.len());
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // --------------------------------------------------------------------- //
    // Draft form / edit cursor
    // --------------------------------------------------------------------- //

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut UserDraft {
        &mut self.draft
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Append a record built from the draft and reset the draft.
    ///
    /// Fails with [`CoreError::Validation`] when name or email is blank; the
    /// collection and the draft are left as they were.
    #[track_caller]
    pub fn add_user(&mut self) -> CoreErrorResult<User> {
        if !self.draft.is_complete() {
            return Err(CoreError::Validation {
                message: MISSING_FIELDS_MESSAGE.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let user = User::new(
            self.draft.name.clone(),
            self.draft.email.clone(),
            self.draft.role,
            &self.users,
            Utc::now(),
        );
        self.users.push(user.clone());
        self.draft.reset();

        info!("User added: id={} name={}", user.id, user.name);
        Ok(user)
    }

    /// Point the edit cursor at `id` and pre-fill the draft from it.
    /// Returns false, changing nothing, when no such record exists.
    pub fn start_edit(&mut self, id: i64) -> bool {
        let Some(user) = self.find(id) else {
            return false;
        };
        self.draft = UserDraft::from_user(user);
        self.editing_id = Some(id);
        debug!("Editing user {id}");
        true
    }

    /// Apply the draft's name, email and role to the record under the edit
    /// cursor, then leave edit mode. Id, creation time and status are kept.
    pub fn update_user(&mut self) -> Option<User> {
        let id = self.editing_id?;

        let updated = self.users.iter_mut().find(|u| u.id == id).map(|user| {
            user.name = self.draft.name.clone();
            user.email = self.draft.email.clone();
            user.role = self.draft.role;
            user.clone()
        });

        if let Some(ref user) = updated {
            info!("User updated: id={} name={}", user.id, user.name);
        }

        self.cancel_edit();
        updated
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.draft.reset();
    }

    // --------------------------------------------------------------------- //
    // Status / removal
    // --------------------------------------------------------------------- //

    /// Flip the active flag of `id`, returning the new value.
    pub fn toggle_active(&mut self, id: i64) -> Option<bool> {
        let user = self.users.iter_mut().find(|u| u.id == id)?;
        user.active = !user.active;
        debug!("User {id} active={}", user.active);
        Some(user.active)
    }

    /// Ask to delete `id`. Never mutates; the caller gathers consent and
    /// passes the pending delete to [`Self::confirm_delete`].
    pub fn delete_user(&self, id: i64) -> DeleteOutcome {
        match self.find(id) {
            Some(user) => DeleteOutcome::ConfirmationRequired(PendingDelete {
                id,
                name: user.name.clone(),
            }),
            None => DeleteOutcome::NotFound,
        }
    }

    pub fn confirm_delete(
        &mut self,
        pending: PendingDelete,
        confirmation: Confirmation,
    ) -> DeleteOutcome {
        if confirmation == Confirmation::Declined {
            return DeleteOutcome::Declined;
        }

        match self.users.iter().position(|u| u.id == pending.id) {
            Some(index) => {
                let removed = self.users.remove(index);
                if self.editing_id == Some(removed.id) {
                    self.cancel_edit();
                }
                info!("User deleted with id: {}", removed.id);
                DeleteOutcome::Deleted(removed)
            }
            None => DeleteOutcome::NotFound,
        }
    }

    // --------------------------------------------------------------------- //
    // Filter / derived values
    // --------------------------------------------------------------------- //

    pub fn set_filter(&mut self, filter: RoleFilter) {
        debug!("Filter set to {filter}");
        self.filter = filter;
    }

    pub fn filter(&self) -> RoleFilter {
        self.filter
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn total(&self) -> usize {
        self.users.len()
    }

    pub fn active_count(&self) -> usize {
        stats::active_count(&self.users)
    }

    pub fn active_percentage(&self) -> u32 {
        stats::active_percentage(&self.users)
    }

    pub fn filtered_users(&self) -> Vec<&User> {
        stats::filter_users(&self.users, self.filter)
    }

    pub fn role_stats(&self, role: UserRole) -> RoleStats {
        stats::role_stats(&self.users, role)
    }
}
