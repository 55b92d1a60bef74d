//! In-memory user store

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use roster_core::{new_user_id, CreateUser, Result, RosterError, UpdateUser, User, UserStore};
use tokio::sync::Mutex;

/// In-memory `UserStore` implementation
///
/// Holds the ordered collection behind a single mutex. Every operation
/// acquires the lock exactly once, so the existence check, the email
/// conflict check, and the mutation happen as one critical section
/// even on a multi-threaded runtime. No lock is held across an await.
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
}

impl MemoryStore {
    /// Create a store seeded with the two default records
    pub fn new() -> Self {
        let now = now_iso();
        Self {
            users: Mutex::new(vec![
                User {
                    id: "1".to_string(),
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                    created_at: now.clone(),
                    updated_at: None,
                },
                User {
                    id: "2".to_string(),
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                    created_at: now,
                    updated_at: None,
                },
            ]),
        }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list(&self) -> Result<Vec<User>> {
        let users = self.users.lock().await;
        Ok(users.clone())
    }

    async fn get(&self, id: &str) -> Result<User> {
        let users = self.users.lock().await;
        users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| RosterError::user_not_found(id))
    }

    async fn create(&self, payload: CreateUser) -> Result<User> {
        let (name, email) = require_fields(payload.name, payload.email)?;

        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.email == email) {
            return Err(RosterError::duplicate_email(email));
        }

        let user = User {
            id: new_user_id(),
            name,
            email,
            created_at: now_iso(),
            updated_at: None,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: &str, payload: UpdateUser) -> Result<User> {
        let mut users = self.users.lock().await;

        // Existence is checked before field presence: a malformed
        // request against an unknown id must report not-found.
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| RosterError::user_not_found(id))?;

        let (name, email) = require_fields(payload.name, payload.email)?;

        // Conflict only when a different record holds the email;
        // re-asserting the record's own email is fine.
        if users.iter().any(|u| u.email == email && u.id != id) {
            return Err(RosterError::duplicate_email(email));
        }

        let user = &mut users[index];
        user.name = name;
        user.email = email;
        user.updated_at = Some(now_iso());

        Ok(user.clone())
    }

    async fn delete(&self, id: &str) -> Result<User> {
        let mut users = self.users.lock().await;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| RosterError::user_not_found(id))?;

        Ok(users.remove(index))
    }
}

/// Collapse the optional payload fields, rejecting absent or empty values
fn require_fields(name: Option<String>, email: Option<String>) -> Result<(String, String)> {
    match (name, email) {
        (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => Ok((name, email)),
        _ => Err(RosterError::MissingFields),
    }
}

/// Current time as an ISO-8601 UTC string with millisecond precision
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
