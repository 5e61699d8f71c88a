use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::application::ports::{UserStore, UserStoreError};
use crate::domain::entities::User;

/// Process-local account collection
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: &User) -> Result<User, UserStoreError> {
        let mut users = self.users.write();
        if users.contains_key(user.email()) {
            return Err(UserStoreError::DuplicateEmail(user.email().to_string()));
        }

        let mut stored = user.clone();
        if users.is_empty() {
            stored.promote_to_admin();
        }
        users.insert(stored.email().to_string(), stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.read().get(email).cloned())
    }
}
