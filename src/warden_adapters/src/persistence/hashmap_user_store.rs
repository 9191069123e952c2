use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use warden_core::{User, UserStore, UserStoreError, Username};

/// In-memory user store. The existence check and the insert happen under a
/// single write lock, which makes `insert_if_absent` atomic.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Username, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    #[tracing::instrument(name = "HashMapUserStore::insert_if_absent", skip_all)]
    async fn insert_if_absent(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.username().clone(), user);
        Ok(())
    }

    #[tracing::instrument(name = "HashMapUserStore::get_user", skip_all)]
    async fn get_user(&self, username: &Username) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(username)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}
