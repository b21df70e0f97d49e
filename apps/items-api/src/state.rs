//! Application state management.
//!
//! This module defines the shared application state used to build the routers.
//! The state contains:
//! - Configuration
//! - The item service backed by the in-memory store

use domain_items::{InMemoryItemRepository, ItemService};

/// Shared application state.
///
/// Cloning is cheap: the item service shares one store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Item service over the process-wide in-memory store
    pub items: ItemService<InMemoryItemRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            items: ItemService::new(InMemoryItemRepository::new()),
        }
    }
}
