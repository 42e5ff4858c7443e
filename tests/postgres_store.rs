//! `PgUserStore` against a live PostgreSQL database
//!
//! Requires `DATABASE_URL`; run with `cargo test -- --ignored`.

mod common;

use chrono::{Duration, Utc};
use serial_test::serial;
use sqlx::postgres::PgPoolOptions;

use account_service::backend::auth::users::{
    NewUser, PgUserStore, Session, StoreError, UserChanges, UserStore,
};
use common::{create_test_user, remove_test_user, TEST_TOKEN, TEST_USERNAME};

async fn setup_store() -> PgUserStore {
    dotenv::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!().run(&pool).await.expect("Failed to run migrations");

    let store = PgUserStore::new(pool);
    remove_test_user(&store).await;
    store
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_insert_and_find() {
    let store = setup_store().await;

    let created = create_test_user(&store).await;
    assert_eq!(created.username, TEST_USERNAME);
    assert_eq!(store.count_by_username(TEST_USERNAME).await.unwrap(), 1);

    let found = store.find_by_username(TEST_USERNAME).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);

    remove_test_user(&store).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_insert_duplicate_username() {
    let store = setup_store().await;
    create_test_user(&store).await;

    let result = store
        .insert(NewUser {
            username: TEST_USERNAME.to_string(),
            name: "other".to_string(),
            password: "hash".to_string(),
        })
        .await;

    assert!(matches!(result, Err(StoreError::Duplicate(_))));

    remove_test_user(&store).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_find_by_token_respects_expiry() {
    let store = setup_store().await;
    create_test_user(&store).await;

    let found = store.find_by_token(TEST_TOKEN, Utc::now()).await.unwrap();
    assert!(found.is_some());

    store
        .set_session(
            TEST_USERNAME,
            Some(Session {
                token: TEST_TOKEN.to_string(),
                expires_at: Some(Utc::now() - Duration::minutes(1)),
            }),
        )
        .await
        .unwrap();

    let found = store.find_by_token(TEST_TOKEN, Utc::now()).await.unwrap();
    assert!(found.is_none());

    remove_test_user(&store).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_update_is_partial() {
    let store = setup_store().await;
    let created = create_test_user(&store).await;

    let updated = store
        .update(
            TEST_USERNAME,
            UserChanges {
                name: Some("rama".to_string()),
                password: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "rama");
    assert_eq!(updated.password, created.password);

    remove_test_user(&store).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_clear_session() {
    let store = setup_store().await;
    create_test_user(&store).await;

    store.set_session(TEST_USERNAME, None).await.unwrap();

    let user = store.find_by_username(TEST_USERNAME).await.unwrap().unwrap();
    assert!(user.token.is_none());
    assert!(user.token_expires_at.is_none());
    assert!(store.find_by_token(TEST_TOKEN, Utc::now()).await.unwrap().is_none());

    remove_test_user(&store).await;
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_update_missing_user() {
    let store = setup_store().await;

    let result = store.update("missing-user", UserChanges::default()).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));

    assert_eq!(store.delete("missing-user").await.unwrap(), 0);
}
