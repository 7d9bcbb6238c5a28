//! HTTP request handlers
//!
//! Handlers that map HTTP requests to `TriageService` operations. The
//! pipeline work is blocking (PDF reads, fitting), so it runs under
//! `spawn_blocking`.

mod classify;
mod relabel;
mod system;
mod train;

use crate::service::TriageService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TriageService>,
}

pub use classify::classify;
pub use relabel::relabel;
pub use system::health;
pub use train::train;
