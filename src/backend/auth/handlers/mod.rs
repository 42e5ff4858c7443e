//! Account Handlers Module
//!
//! This module contains all HTTP handlers for the `/api/users` endpoints.
//! Handlers only decode the request and shape the response; the work is done
//! by `auth::service::AccountService`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request schemas and response payloads
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── current.rs  - Get and update current user handlers
//! └── logout.rs   - Logout handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/users - User registration
//! - **`login`** - POST /api/users/login - User authentication
//! - **`get_current`** - GET /api/users/current - Get current user info
//! - **`update_current`** - PATCH /api/users/current - Update name and/or password
//! - **`logout`** - DELETE /api/users/logout - End the session

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handlers
pub mod current;

/// Logout handler
pub mod logout;

// Re-export commonly used types
pub use types::{
    LoginUserRequest, RegisterUserRequest, TokenResponse, UpdateUserRequest, UserResponse,
    WebResponse,
};

// Re-export handlers
pub use current::{get_current, update_current};
pub use login::login;
pub use logout::logout;
pub use register::register;
