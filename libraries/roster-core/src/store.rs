//! Store trait for user records

use crate::error::Result;
use crate::types::{CreateUser, UpdateUser, User};
use async_trait::async_trait;

/// Store providing access to the user collection
///
/// This trait abstracts the collection so the HTTP layer can work
/// against in-memory and future persistent implementations alike. The
/// store owns all invariants: id uniqueness, email uniqueness, and
/// required-field validation. Implementations must run each operation's
/// existence check, conflict check, and mutation as one critical
/// section.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users in insertion order
    async fn list(&self) -> Result<Vec<User>>;

    /// Get a user by id
    ///
    /// Fails with `UserNotFound` when no record has that id.
    async fn get(&self, id: &str) -> Result<User>;

    /// Create a new user
    ///
    /// Fails with `MissingFields` when name or email is absent or
    /// empty, and with `DuplicateEmail` when any live record already
    /// holds the email. On success the record carries a fresh id and
    /// `created_at` stamp.
    async fn create(&self, payload: CreateUser) -> Result<User>;

    /// Update a user's name and email in place
    ///
    /// Error precedence is fixed: `UserNotFound` before
    /// `MissingFields` before `DuplicateEmail`. Re-asserting the
    /// record's own email is not a conflict. On success `updated_at`
    /// is stamped; `id` and `created_at` are preserved.
    async fn update(&self, id: &str, payload: UpdateUser) -> Result<User>;

    /// Remove a user, returning the removed record
    ///
    /// Fails with `UserNotFound` when no record has that id.
    async fn delete(&self, id: &str) -> Result<User>;
}
