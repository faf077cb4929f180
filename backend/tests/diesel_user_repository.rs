//! Integration tests for `DieselUserRepository` against a live PostgreSQL.
//!
//! Point `USERS_API_TEST_DATABASE_URL` at a disposable database to run them.
//! When it is unset each test prints a `SKIP-TEST-DATABASE` marker and
//! returns early.

use diesel_async::SimpleAsyncConnection;
use rstest::rstest;
use uuid::Uuid;

use users_api::domain::ports::{UserPersistenceError, UserRepository};
use users_api::domain::{NewUser, UserId};
use users_api::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};

const TEST_DATABASE_URL: &str = "USERS_API_TEST_DATABASE_URL";
const USERS_DDL: &str = include_str!("../sql/users.sql");

async fn repository() -> Option<DieselUserRepository> {
    let Ok(url) = std::env::var(TEST_DATABASE_URL) else {
        eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL} is not set");
        return None;
    };
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("pool builds");
    pool.probe().await.expect("database reachable");
    let mut conn = pool.get().await.expect("connection");
    conn.batch_execute(USERS_DDL).await.expect("schema applies");
    drop(conn);
    Some(DieselUserRepository::new(pool))
}

fn unique_email() -> String {
    format!("{}@example.com", Uuid::new_v4().simple())
}

#[rstest]
#[tokio::test]
async fn created_user_is_found_with_same_fields() {
    let Some(repo) = repository().await else {
        return;
    };
    let candidate = NewUser::new(
        "Ada Lovelace",
        unique_email(),
        Some("https://example.com/ada.png".to_owned()),
    );

    let id = repo.create(&candidate).await.expect("insert");
    let found = repo
        .find_by_id(id)
        .await
        .expect("lookup")
        .expect("row present");

    assert_eq!(found, candidate.with_id(id));
}

#[rstest]
#[tokio::test]
async fn identifiers_are_distinct() {
    let Some(repo) = repository().await else {
        return;
    };
    let first = repo
        .create(&NewUser::new("First", unique_email(), None))
        .await
        .expect("first insert");
    let second = repo
        .create(&NewUser::new("Second", unique_email(), None))
        .await
        .expect("second insert");

    assert_ne!(first, second);
}

#[rstest]
#[tokio::test]
async fn list_contains_created_user() {
    let Some(repo) = repository().await else {
        return;
    };
    let candidate = NewUser::new("Listed", unique_email(), None);
    let id = repo.create(&candidate).await.expect("insert");

    let users = repo.list().await.expect("list");

    assert!(users.contains(&candidate.with_id(id)));
}

#[rstest]
#[tokio::test]
async fn absent_identifier_is_none() {
    let Some(repo) = repository().await else {
        return;
    };

    let found = repo.find_by_id(UserId::new(-1)).await.expect("lookup");

    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_a_query_error() {
    let Some(repo) = repository().await else {
        return;
    };
    let candidate = NewUser::new("Dup", unique_email(), None);
    repo.create(&candidate).await.expect("first insert");

    let err = repo.create(&candidate).await.expect_err("unique violation");

    assert!(matches!(err, UserPersistenceError::Query { .. }));
    assert!(err.message().contains("duplicate key"), "{err}");
}
