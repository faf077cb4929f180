//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    ///
    /// `message` is the raw text reported by the driver or pool.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution, including constraint
        /// violations and row decode failures.
        Query { message: String } => "user repository query failed: {message}",
    }
}

impl UserPersistenceError {
    /// Raw driver message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Connection { message } | Self::Query { message } => message.as_str(),
        }
    }
}

/// Driven port over the `users` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in the store's natural order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a candidate and return the identifier the store assigned.
    async fn create(&self, candidate: &NewUser) -> Result<UserId, UserPersistenceError>;

    /// Fetch a user by identifier.
    ///
    /// Returns `Ok(None)` when no row matches; errors are reserved for
    /// genuine failures.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}
