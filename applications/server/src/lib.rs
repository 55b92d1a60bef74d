//! Roster Server Library
//!
//! HTTP binding for the Roster user directory: routing, response
//! envelopes, error translation, and configuration.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
