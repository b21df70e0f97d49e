//! Items API routes
//!
//! This module wires up the items domain to HTTP routes.

use axum::Router;
use domain_items::handlers;

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    // Return the domain's router over the shared service
    handlers::router(state.items.clone())
}
