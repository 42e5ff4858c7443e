/**
 * User Model and Persistence
 *
 * This module defines the `User` record, the `UserStore` trait through which
 * the service layer reads and writes users, and `PgUserStore`, the
 * PostgreSQL implementation used by the server.
 *
 * The store is an explicit handle: it is built once at startup from the
 * connection pool and shared with every request through `AppState`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Surrogate key, never exposed through the API
    #[serde(skip_serializing)]
    pub id: Uuid,
    /// Unique, case-sensitive login identifier
    pub username: String,
    /// Display name
    pub name: String,
    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password: String,
    /// Active session token, `None` when logged out
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Instant after which `token` is no longer accepted
    #[serde(skip_serializing)]
    pub token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert a user
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    /// Already hashed
    pub password: String,
}

/// Partial update of a user; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    /// Already hashed
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none()
    }
}

/// A token together with its expiry
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("duplicate value for {0}")]
    Duplicate(String),

    #[error("user not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations needed by the account services
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Number of users registered under `username` (0 or 1)
    async fn count_by_username(&self, username: &str) -> StoreResult<i64>;

    /// Insert a user; fails with `StoreError::Duplicate` if the username is taken
    async fn insert(&self, user: NewUser) -> StoreResult<User>;

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Find the user holding `token`, ignoring tokens that expired before `now`
    async fn find_by_token(&self, token: &str, now: DateTime<Utc>) -> StoreResult<Option<User>>;

    /// Apply `changes` and return the updated row
    async fn update(&self, username: &str, changes: UserChanges) -> StoreResult<User>;

    /// Replace the session token; `None` logs the user out
    async fn set_session(&self, username: &str, session: Option<Session>) -> StoreResult<()>;

    /// Remove a user; only used by test teardown
    async fn delete(&self, username: &str) -> StoreResult<u64>;
}

const USER_COLUMNS: &str =
    "id, username, name, password, token, token_expires_at, created_at, updated_at";

/// PostgreSQL-backed [`UserStore`]
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::Duplicate("username".to_string())
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn count_by_username(&self, username: &str) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert(&self, user: NewUser) -> StoreResult<User> {
        let now = Utc::now();

        let query = format!(
            r#"
            INSERT INTO users (id, username, name, password, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.password)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(map_insert_error)
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");

        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_token(&self, token: &str, now: DateTime<Utc>) -> StoreResult<Option<User>> {
        let query = format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE token = $1 AND (token_expires_at IS NULL OR token_expires_at > $2)
            "#
        );

        let user = sqlx::query_as::<_, User>(&query)
            .bind(token)
            .bind(now)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn update(&self, username: &str, changes: UserChanges) -> StoreResult<User> {
        // COALESCE keeps the stored value for fields that were not supplied
        let query = format!(
            r#"
            UPDATE users
            SET name = COALESCE($1, name), password = COALESCE($2, password), updated_at = $3
            WHERE username = $4
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&query)
            .bind(changes.name)
            .bind(changes.password)
            .bind(Utc::now())
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(username.to_string()))
    }

    async fn set_session(&self, username: &str, session: Option<Session>) -> StoreResult<()> {
        let (token, expires_at) = match session {
            Some(session) => (Some(session.token), session.expires_at),
            None => (None, None),
        };

        let result = sqlx::query(
            r#"
            UPDATE users
            SET token = $1, token_expires_at = $2, updated_at = $3
            WHERE username = $4
            "#,
        )
        .bind(token)
        .bind(expires_at)
        .bind(Utc::now())
        .bind(username)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(username.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, username: &str) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
