//! Items Domain
//!
//! In-memory item store with CRUD, filtering and pagination, exposed over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage engine (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, filters
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{
//!     handlers,
//!     repository::InMemoryItemRepository,
//!     service::ItemService,
//! };
//!
//! // Each store is an explicitly constructed instance
//! let repository = InMemoryItemRepository::new();
//! let service = ItemService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemCountFilter, ItemFilter, MAX_LIST_LIMIT, UpdateItem};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
