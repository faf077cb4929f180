//! User data model.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Store-assigned user identifier.
///
/// Identifiers are allocated by the store on insert and never change
/// afterwards. Any `i64` parses; lookups for identifiers the store never
/// issued simply find nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Candidate user awaiting insertion; carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    img_url: Option<String>,
}

impl NewUser {
    /// Build a candidate from its fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>, img_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            img_url,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email, stored as given.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Optional avatar URL.
    pub fn img_url(&self) -> Option<&str> {
        self.img_url.as_deref()
    }

    /// Attach the store-assigned identifier, producing a persisted [`User`].
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::{NewUser, UserId};
    ///
    /// let user = NewUser::new("Ada", "ada@example.com", None).with_id(UserId::new(7));
    /// assert_eq!(user.id(), UserId::new(7));
    /// assert_eq!(user.name(), "Ada");
    /// ```
    pub fn with_id(self, id: UserId) -> User {
        let Self {
            name,
            email,
            img_url,
        } = self;
        User {
            id,
            name,
            email,
            img_url,
        }
    }
}

/// Application user as persisted by the store.
///
/// ## Invariants
/// - `id` was assigned by the store and is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    img_url: Option<String>,
}

impl User {
    /// Rebuild a persisted user from stored fields.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        img_url: Option<String>,
    ) -> Self {
        NewUser::new(name, email, img_url).with_id(id)
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Optional avatar URL.
    pub fn img_url(&self) -> Option<&str> {
        self.img_url.as_deref()
    }
}
