//! Common test utilities and helpers
//!
//! - `memory_store` - In-memory `UserStore` fixture
//! - `TestApp` - The real router over a fresh store, driven with `oneshot`
//! - Test user helpers mirroring the fixtures used by the API tests

#![allow(dead_code)]

pub mod memory_store;

use std::sync::Arc;

use account_service::backend::auth::sessions::TokenPolicy;
use account_service::backend::auth::users::{NewUser, Session, User, UserStore};
use account_service::backend::{create_router, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub use memory_store::MemoryUserStore;

/// Lowest cost bcrypt accepts, keeps tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_USERNAME: &str = "test";
pub const TEST_PASSWORD: &str = "password";
pub const TEST_NAME: &str = "test";
pub const TEST_TOKEN: &str = "test";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryUserStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryUserStore::new());
        let state = AppState::new(store.clone(), TokenPolicy::default(), TEST_BCRYPT_COST);
        Self {
            router: create_router(state),
            store,
        }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, token);
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, None, Some(body)).await
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn patch(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(token), None).await
    }

    /// Insert the standard test user, logged in with `TEST_TOKEN`
    pub async fn create_test_user(&self) -> User {
        create_test_user(self.store.as_ref()).await
    }

    pub fn get_test_user(&self) -> User {
        self.store
            .snapshot(TEST_USERNAME)
            .expect("test user should exist")
    }
}

/// Insert `test`/`password`/`test` with the non-expiring token `test`
pub async fn create_test_user(store: &dyn UserStore) -> User {
    let password = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST).unwrap();
    store
        .insert(NewUser {
            username: TEST_USERNAME.to_string(),
            name: TEST_NAME.to_string(),
            password,
        })
        .await
        .expect("Failed to create test user");

    store
        .set_session(
            TEST_USERNAME,
            Some(Session {
                token: TEST_TOKEN.to_string(),
                expires_at: None,
            }),
        )
        .await
        .expect("Failed to set test token");

    store
        .find_by_username(TEST_USERNAME)
        .await
        .unwrap()
        .expect("test user should exist")
}

/// Remove the standard test user
pub async fn remove_test_user(store: &dyn UserStore) {
    store
        .delete(TEST_USERNAME)
        .await
        .expect("Failed to remove test user");
}
