//! Roster Core
//!
//! Domain types, the store trait, and error handling for the Roster
//! user directory service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUser`, `UpdateUser`
//! - **Store Trait**: `UserStore`, implemented by `roster-store`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{new_user_id, User};
//!
//! let user = User {
//!     id: new_user_id(),
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     created_at: "2024-01-01T00:00:00.000Z".to_string(),
//!     updated_at: None,
//! };
//! assert!(user.updated_at.is_none());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use store::UserStore;
pub use types::{new_user_id, CreateUser, UpdateUser, User};
