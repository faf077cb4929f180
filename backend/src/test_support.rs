//! Repository doubles shared by unit tests and integration tests.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature so files
//! under `backend/tests/` can drive the full router without PostgreSQL.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

#[derive(Debug)]
struct MemoryState {
    rows: Vec<User>,
    next_id: i64,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory stand-in for the `users` table.
///
/// Assigns ascending identifiers from 1 and rejects duplicate emails the way
/// the recommended unique index does.
///
/// # Examples
///
/// ```
/// use users_api::domain::NewUser;
/// use users_api::domain::ports::UserRepository;
/// use users_api::test_support::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::default();
/// let id = repo
///     .create(&NewUser::new("Ada", "ada@example.com", None))
///     .await
///     .expect("insert succeeds");
/// assert_eq!(id.get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryUserRepository {
    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, UserPersistenceError> {
        self.state
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.clone())
    }

    async fn create(&self, candidate: &NewUser) -> Result<UserId, UserPersistenceError> {
        let mut state = self.lock()?;
        if state
            .rows
            .iter()
            .any(|row| row.email() == candidate.email())
        {
            return Err(UserPersistenceError::query(
                "duplicate key value violates unique constraint \"users_email_key\"",
            ));
        }
        let id = UserId::new(state.next_id);
        state.next_id += 1;
        state.rows.push(candidate.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.rows.iter().find(|row| row.id() == id).cloned())
    }
}

/// Repository whose every call fails with the configured error, simulating
/// an unreachable store.
#[derive(Debug, Clone)]
pub struct FailingUserRepository {
    error: UserPersistenceError,
}

impl FailingUserRepository {
    /// Fail every call with `error`.
    pub fn new(error: UserPersistenceError) -> Self {
        Self { error }
    }
}

impl Default for FailingUserRepository {
    fn default() -> Self {
        Self::new(UserPersistenceError::connection("connection refused"))
    }
}

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Err(self.error.clone())
    }

    async fn create(&self, _candidate: &NewUser) -> Result<UserId, UserPersistenceError> {
        Err(self.error.clone())
    }

    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identifiers_are_unique_and_ascending() {
        let repo = InMemoryUserRepository::default();
        let first = repo
            .create(&NewUser::new("Ada", "ada@example.com", None))
            .await
            .expect("first insert");
        let second = repo
            .create(&NewUser::new("Grace", "grace@example.com", None))
            .await
            .expect("second insert");
        assert!(second > first);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::default();
        let candidate = NewUser::new("Ada", "ada@example.com", None);
        repo.create(&candidate).await.expect("first insert");
        let err = repo.create(&candidate).await.expect_err("duplicate");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
