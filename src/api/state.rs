//! Application state for the HR assistant API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::relay::ChatRelay;

/// Shared application state.
///
/// Contains the chat relay and the location of the prebuilt frontend.
#[derive(Clone)]
pub struct AppState {
    relay: Arc<ChatRelay>,
    dist_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    ///
    /// * `relay` - The chat relay every chat request goes through
    /// * `dist_dir` - Directory holding the frontend's `index.html` and
    ///   `assets/`; need not exist
    pub fn new(relay: ChatRelay, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            relay: Arc::new(relay),
            dist_dir: Arc::new(dist_dir.into()),
        }
    }

    /// Returns the chat relay.
    pub fn relay(&self) -> &ChatRelay {
        &self.relay
    }

    /// Returns the frontend bundle directory.
    pub fn dist_dir(&self) -> &Path {
        &self.dist_dir
    }
}
