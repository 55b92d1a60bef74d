/// User domain type
use serde::{Deserialize, Serialize};

/// A user record
///
/// `id` and `created_at` are assigned at creation and never change;
/// `updated_at` is absent until the first successful update and is
/// omitted from JSON while unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique opaque identifier
    pub id: String,

    /// Display name, never empty on a stored record
    pub name: String,

    /// Email address, unique across live records (case-sensitive)
    pub email: String,

    /// Creation timestamp (ISO-8601 string)
    pub created_at: String,

    /// Last update timestamp, absent until the first update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for creating a user
///
/// Fields are optional so that presence validation happens in the
/// store, not in the HTTP layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Payload for updating a user (full replacement of name and email)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}
