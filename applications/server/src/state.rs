/// Shared application state
use roster_core::UserStore;
use std::{sync::Arc, time::Instant};

/// Application state shared across all handlers
///
/// The store is injected here rather than living as module-global
/// state; its lifetime is the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub environment: String,
    pub verbose_errors: bool,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(
        store: Arc<dyn UserStore>,
        environment: impl Into<String>,
        verbose_errors: bool,
    ) -> Self {
        Self {
            store,
            environment: environment.into(),
            verbose_errors,
            started_at: Instant::now(),
        }
    }
}
