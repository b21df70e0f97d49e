use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, UpdateItem};

/// Repository trait for Item storage
///
/// Absence is reported as `None`/`false`, never as an error. Implementations
/// must serialize mutations against each other and against readers so no
/// caller observes a half-applied change.
#[cfg_attr(test, mockall::automock)]
pub trait ItemRepository: Send + Sync {
    /// Store a new item under the next id
    fn create(&self, input: CreateItem) -> Item;

    /// Get an item by ID
    fn get(&self, id: u64) -> Option<Item>;

    /// List items in creation order, filtered then paginated
    fn list(&self, filter: &ItemFilter) -> Vec<Item>;

    /// Merge the supplied fields into an existing item.
    /// Returns `Ok(None)` when the item does not exist.
    fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Option<Item>>;

    /// Delete an item by ID, returning whether it existed
    fn delete(&self, id: u64) -> bool;

    /// Count items matching the filter predicates, ignoring pagination
    fn count(&self, filter: &ItemFilter) -> usize;
}

#[derive(Debug, Default)]
struct Store {
    // Ids come from a strictly increasing counter, so key order is creation order.
    items: BTreeMap<u64, Item>,
    last_id: u64,
}

/// In-memory implementation of ItemRepository
///
/// Clones share the same underlying store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn create(&self, input: CreateItem) -> Item {
        let mut store = self.store.write();

        store.last_id += 1;
        let item = Item::from_create(store.last_id, input);
        store.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Created item");
        item
    }

    fn get(&self, id: u64) -> Option<Item> {
        self.store.read().items.get(&id).cloned()
    }

    fn list(&self, filter: &ItemFilter) -> Vec<Item> {
        let store = self.store.read();

        store
            .items
            .values()
            .filter(|item| filter.matches(item))
            .skip(filter.skip)
            .take(filter.limit)
            .cloned()
            .collect()
    }

    fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Option<Item>> {
        let mut store = self.store.write();

        let Some(existing) = store.items.get(&id) else {
            return Ok(None);
        };

        let merged = existing.merged(input);
        merged.validate().map_err(|e| {
            tracing::warn!(item_id = id, error = %e, "Rejected invalid item update");
            ItemError::from(e)
        })?;

        store.items.insert(id, merged.clone());

        tracing::info!(item_id = id, "Updated item");
        Ok(Some(merged))
    }

    fn delete(&self, id: u64) -> bool {
        let mut store = self.store.write();

        if store.items.remove(&id).is_some() {
            tracing::info!(item_id = id, "Deleted item");
            true
        } else {
            false
        }
    }

    fn count(&self, filter: &ItemFilter) -> usize {
        let store = self.store.read();
        store.items.values().filter(|item| filter.matches(item)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn create_input(name: &str, price: f64) -> CreateItem {
        CreateItem {
            name: name.to_string(),
            description: None,
            price,
            is_active: true,
        }
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_create_and_get_item() {
        let repo = InMemoryItemRepository::new();

        let input = CreateItem {
            name: "Sample".to_string(),
            description: Some("first".to_string()),
            price: 9.99,
            is_active: false,
        };

        let item = repo.create(input.clone());
        assert_eq!(item.id, 1);

        let fetched = repo.get(item.id).unwrap();
        assert_eq!(fetched, item);
        assert_eq!(fetched.name, input.name);
        assert_eq!(fetched.description, input.description);
        assert_eq!(fetched.price, input.price);
        assert_eq!(fetched.is_active, input.is_active);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let repo = InMemoryItemRepository::new();

        let ids: Vec<u64> = (0..5)
            .map(|i| repo.create(create_input(&format!("item-{i}"), 1.0)).id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let repo = InMemoryItemRepository::new();
        assert!(repo.get(42).is_none());
    }

    #[test]
    fn test_deleted_ids_are_never_reused() {
        let repo = InMemoryItemRepository::new();

        let first = repo.create(create_input("a", 1.0));
        let second = repo.create(create_input("b", 1.0));
        assert!(repo.delete(second.id));
        assert!(repo.delete(first.id));

        let third = repo.create(create_input("c", 1.0));
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_delete_twice() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(create_input("a", 1.0));

        assert!(repo.delete(item.id));
        assert!(!repo.delete(item.id));
        assert!(repo.get(item.id).is_none());
    }

    #[test]
    fn test_list_filters_by_name_case_insensitively() {
        let repo = InMemoryItemRepository::new();
        for name in ["Sample", "Example", "Other"] {
            repo.create(create_input(name, 1.0));
        }

        let filter = ItemFilter {
            name_contains: Some("sam".to_string()),
            ..Default::default()
        };

        assert_eq!(names(&repo.list(&filter)), vec!["Sample"]);

        let filter = ItemFilter {
            name_contains: Some("AMPLE".to_string()),
            ..Default::default()
        };
        assert_eq!(names(&repo.list(&filter)), vec!["Sample", "Example"]);
    }

    #[test]
    fn test_list_paginates_after_filtering() {
        let repo = InMemoryItemRepository::new();
        for i in 1..=5 {
            repo.create(create_input(&format!("item-{i}"), 1.0));
        }

        let filter = ItemFilter {
            skip: 2,
            limit: 2,
            ..Default::default()
        };
        let ids: Vec<u64> = repo.list(&filter).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 4]);

        let past_end = ItemFilter {
            skip: 10,
            ..Default::default()
        };
        assert!(repo.list(&past_end).is_empty());
    }

    #[test]
    fn test_list_filters_by_active_flag_before_slicing() {
        let repo = InMemoryItemRepository::new();
        for (name, active) in [("a", true), ("b", false), ("c", true), ("d", false), ("e", true)] {
            repo.create(CreateItem {
                is_active: active,
                ..create_input(name, 1.0)
            });
        }

        let filter = ItemFilter {
            skip: 1,
            limit: 5,
            is_active: Some(true),
            ..Default::default()
        };

        assert_eq!(names(&repo.list(&filter)), vec!["c", "e"]);
        assert_eq!(repo.count(&filter), 3);
    }

    #[test]
    fn test_list_order_is_stable_across_updates() {
        let repo = InMemoryItemRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(create_input(name, 1.0));
        }

        repo.update(
            1,
            UpdateItem {
                name: Some("z".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(names(&repo.list(&ItemFilter::default())), vec!["z", "b", "c"]);
    }

    #[test]
    fn test_partial_update_keeps_unsupplied_fields() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(CreateItem {
            name: "A".to_string(),
            description: Some("d".to_string()),
            price: 5.0,
            is_active: true,
        });

        let updated = repo
            .update(
                item.id,
                UpdateItem {
                    price: Some(9.0),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        let expected = Item {
            id: 1,
            name: "A".to_string(),
            description: Some("d".to_string()),
            price: 9.0,
            is_active: true,
        };
        assert_eq!(updated, expected);
        assert_eq!(repo.get(1).unwrap(), expected);
    }

    #[test]
    fn test_update_accepts_long_name() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(create_input(&"x".repeat(201), 2.0));

        let long_name = "y".repeat(300);
        let updated = repo
            .update(
                item.id,
                UpdateItem {
                    name: Some(long_name.clone()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, long_name);
        assert_eq!(repo.get(item.id).unwrap().name, long_name);
    }

    #[test]
    fn test_empty_update_returns_unchanged_item() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(create_input("a", 2.0));

        let updated = repo.update(item.id, UpdateItem::default()).unwrap();
        assert_eq!(updated, Some(item));
    }

    #[test]
    fn test_update_missing_item_changes_nothing() {
        let repo = InMemoryItemRepository::new();
        let existing = repo.create(create_input("a", 2.0));

        let result = repo
            .update(
                99,
                UpdateItem {
                    name: Some("b".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(result.is_none());

        assert_eq!(repo.get(existing.id).unwrap(), existing);
        assert_eq!(repo.create(create_input("c", 1.0)).id, 2);
    }

    #[test]
    fn test_invalid_merge_is_rejected_and_not_stored() {
        let repo = InMemoryItemRepository::new();
        let item = repo.create(create_input("a", 2.0));

        for update in [
            UpdateItem {
                price: Some(-1.0),
                ..Default::default()
            },
            UpdateItem {
                name: Some(String::new()),
                ..Default::default()
            },
        ] {
            let result = repo.update(item.id, update);
            assert!(matches!(result, Err(ItemError::Validation(_))));
        }

        assert_eq!(repo.get(item.id).unwrap(), item);
    }

    #[test]
    fn test_concurrent_creates_assign_unique_ids() {
        let repo = InMemoryItemRepository::new();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let repo = repo.clone();
                thread::spawn(move || {
                    (0..50)
                        .map(|i| repo.create(create_input(&format!("{t}-{i}"), 1.0)).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 400);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&400));
    }
}
