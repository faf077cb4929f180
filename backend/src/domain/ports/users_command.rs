//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// Domain use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a candidate and return it with its store-assigned identifier.
    async fn create_user(&self, candidate: NewUser) -> Result<User, Error>;
}
