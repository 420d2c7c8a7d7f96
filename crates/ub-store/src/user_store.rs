use crate::{Result as StoreResult, StoreError, StoreLatency};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, warn};
use tokio::sync::RwLock;
use ub_core::{User, UserDto, UserPatch};

/// In-memory user collection behind an async CRUD facade.
///
/// Every call resolves after the configured latency. Safe to share through
/// an `Arc`; writers are serialized by the inner lock.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
    latency: StoreLatency,
}

impl UserStore {
    pub fn new(latency: StoreLatency) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            latency,
        }
    }

    pub fn latency(&self) -> StoreLatency {
        self.latency
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Snapshot of every held record, in insertion order.
    pub async fn get_users(&self) -> Vec<User> {
        let users = self.users.read().await.clone();
        tokio::time::sleep(self.latency.read).await;
        users
    }

    pub async fn create_user(&self, dto: UserDto) -> User {
        let user = {
            let mut users = self.users.write().await;
            let user = User::from_dto(dto, &users, Utc::now());
            users.push(user.clone());
            user
        };
        debug!("Store created user {}", user.id);

        tokio::time::sleep(self.latency.write).await;
        user
    }

    /// Apply `patch` to the record with `id`.
    ///
    /// Fails immediately with [`StoreError::NotFound`] when no record matches.
    #[track_caller]
    pub fn update_user(
        &self,
        id: i64,
        patch: UserPatch,
    ) -> impl Future<Output = StoreResult<User>> + '_ {
        let location = Location::caller();
        async move {
            let updated = {
                let mut users = self.users.write().await;
                let Some(user) = users.iter_mut().find(|u| u.id == id) else {
                    warn!("Store update for unknown user {id}");
                    return Err(StoreError::NotFound {
                        id,
                        location: ErrorLocation::from(location),
                    });
                };
                patch.apply(user);
                user.clone()
            };
            debug!("Store updated user {id}");

            tokio::time::sleep(self.latency.write).await;
            Ok(updated)
        }
    }

    /// Remove the record with `id`; absent ids are ignored.
    pub async fn delete_user(&self, id: i64) {
        let removed = {
            let mut users = self.users.write().await;
            let before = users.len();
            users.retain(|u| u.id != id);
            before != users.len()
        };
        debug!("Store delete user {id} (removed: {removed})");

        tokio::time::sleep(self.latency.write).await;
    }
}
