//! Driving port for user-facing queries.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return all users; empty when none exist.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the user with the given identifier, or `None` when absent.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error>;
}
