//! Authentication Module
//!
//! This module handles user registration, login, session tokens and the
//! current-user operations.
//!
//! # Architecture
//!
//! - **`users`** - User model, `UserStore` trait and its PostgreSQL implementation
//! - **`sessions`** - Opaque token generation and expiry policy
//! - **`service`** - `AccountService`, the business logic of every endpoint
//! - **`handlers`** - HTTP handlers for the account endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, password and name → user created (no token)
//! 2. **Login**: username and password verified → random token stored and returned
//! 3. **Current user**: token in `Authorization` header → user resolved → projection returned
//! 4. **Logout**: token cleared → later requests with it get 401
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are random, stored server side and expire after a configurable TTL
//! - Invalid credentials return 401 (no information leakage)

/// User data model and persistence
pub mod users;

/// Session token generation and expiry
pub mod sessions;

/// Account business logic
pub mod service;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{
    LoginUserRequest, RegisterUserRequest, TokenResponse, UpdateUserRequest, UserResponse,
    WebResponse,
};
pub use handlers::{get_current, login, logout, register, update_current};
pub use service::AccountService;
pub use sessions::TokenPolicy;
pub use users::{PgUserStore, User, UserStore};
