//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemCountFilter, ItemFilter, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service layer validates input before it reaches the repository and
/// turns "absent" results into `ItemError::NotFound`.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;
        Ok(self.repository.create(input))
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub fn get_item(&self, id: u64) -> ItemResult<Item> {
        self.repository.get(id).ok_or(ItemError::NotFound(id))
    }

    /// List items with optional filters
    #[instrument(skip(self))]
    pub fn list_items(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        filter.validate()?;
        Ok(self.repository.list(&filter))
    }

    /// Update an existing item with the fields present in `input`
    #[instrument(skip(self, input))]
    pub fn update_item(&self, id: u64, input: UpdateItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository
            .update(id, input)?
            .ok_or(ItemError::NotFound(id))
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub fn delete_item(&self, id: u64) -> ItemResult<()> {
        if self.repository.delete(id) {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }

    /// Count items matching a filter
    #[instrument(skip(self))]
    pub fn count_items(&self, filter: ItemCountFilter) -> ItemResult<usize> {
        filter.validate()?;
        Ok(self.repository.count(&filter.into()))
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
