//! User domain service.
//!
//! Implements the driving ports by forwarding to the [`UserRepository`]. The
//! only logic of its own is copying the store-assigned identifier onto a
//! created user so callers need not fetch it again.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserId};

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
pub struct UserService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

/// Keep the driver's message; every persistence failure is internal.
fn map_persistence_error(error: UserPersistenceError) -> Error {
    Error::internal(error.message())
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, candidate: NewUser) -> Result<User, Error> {
        let id = self
            .repository
            .create(&candidate)
            .await
            .map_err(map_persistence_error)?;
        Ok(candidate.with_id(id))
    }
}
