//! In-memory `UserStore`
//!
//! Mirrors the PostgreSQL store's semantics (unique usernames, partial
//! updates, token expiry) so HTTP tests can run without a database.

use std::collections::HashMap;
use std::sync::Mutex;

use account_service::backend::auth::users::{
    NewUser, Session, StoreError, StoreResult, User, UserChanges, UserStore,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current row for `username`, bypassing the trait
    pub fn snapshot(&self, username: &str) -> Option<User> {
        self.users.lock().unwrap().get(username).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn count_by_username(&self, username: &str) -> StoreResult<i64> {
        Ok(self.users.lock().unwrap().contains_key(username) as i64)
    }

    async fn insert(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.username) {
            return Err(StoreError::Duplicate("username".to_string()));
        }

        let now = Utc::now();
        let row = User {
            id: Uuid::new_v4(),
            username: user.username.clone(),
            name: user.name,
            password: user.password,
            token: None,
            token_expires_at: None,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.username, row.clone());

        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.snapshot(username))
    }

    async fn find_by_token(&self, token: &str, now: DateTime<Utc>) -> StoreResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|user| {
                user.token.as_deref() == Some(token)
                    && user.token_expires_at.map_or(true, |expires| expires > now)
            })
            .cloned())
    }

    async fn update(&self, username: &str, changes: UserChanges) -> StoreResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(username)
            .ok_or_else(|| StoreError::NotFound(username.to_string()))?;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(password) = changes.password {
            user.password = password;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn set_session(&self, username: &str, session: Option<Session>) -> StoreResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(username)
            .ok_or_else(|| StoreError::NotFound(username.to_string()))?;

        match session {
            Some(session) => {
                user.token = Some(session.token);
                user.token_expires_at = session.expires_at;
            }
            None => {
                user.token = None;
                user.token_expires_at = None;
            }
        }

        Ok(())
    }

    async fn delete(&self, username: &str) -> StoreResult<u64> {
        Ok(self.users.lock().unwrap().remove(username).is_some() as u64)
    }
}
