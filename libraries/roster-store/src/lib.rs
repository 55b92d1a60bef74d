//! Roster Store
//!
//! In-memory storage layer for the Roster user directory.
//!
//! The collection lives for the lifetime of the process and is reset
//! only by a restart. A persistent implementation of
//! [`roster_core::UserStore`] would live in this crate as well.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{CreateUser, UserStore};
//! use roster_store::MemoryStore;
//!
//! # async fn example() -> roster_core::Result<()> {
//! let store = MemoryStore::new();
//!
//! let user = store
//!     .create(CreateUser {
//!         name: Some("Alice".to_string()),
//!         email: Some("alice@example.com".to_string()),
//!     })
//!     .await?;
//!
//! assert_eq!(store.get(&user.id).await?.email, "alice@example.com");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod memory;

pub use memory::MemoryStore;
