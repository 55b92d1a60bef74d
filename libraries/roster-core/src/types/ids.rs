//! Identifier generation

use uuid::Uuid;

/// Generate a fresh opaque user identifier.
///
/// A random 128-bit UUID in its hyphenated text form. Stateless and
/// infallible; collision probability is negligible.
pub fn new_user_id() -> String {
    Uuid::new_v4().to_string()
}
