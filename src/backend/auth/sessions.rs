/**
 * Session Tokens
 *
 * Tokens are opaque random strings (UUID v4) stored on the user row and
 * compared verbatim on every authenticated request. An optional time-to-live
 * bounds how long a token is accepted.
 */

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::backend::auth::users::Session;

/// Session lifetime policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPolicy {
    /// `None` issues tokens that never expire
    pub ttl: Option<Duration>,
}

impl TokenPolicy {
    pub fn new(ttl: Option<Duration>) -> Self {
        Self { ttl }
    }

    /// Issue a fresh session starting at `now`
    pub fn issue(&self, now: DateTime<Utc>) -> Session {
        Session {
            token: create_token(),
            expires_at: self.ttl.map(|ttl| now + ttl),
        }
    }
}

impl Default for TokenPolicy {
    /// 30 days
    fn default() -> Self {
        Self::new(Some(Duration::days(30)))
    }
}

/// Generate a new opaque token
pub fn create_token() -> String {
    Uuid::new_v4().to_string()
}
