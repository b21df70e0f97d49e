use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Maximum number of items a single list request may return
pub const MAX_LIST_LIMIT: usize = 1000;

/// Custom validator for prices: finite and strictly positive
fn validate_price(price: f64) -> Result<(), validator::ValidationError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(validator::ValidationError::new("price_not_positive")
            .with_message("price must be greater than zero".into()));
    }
    Ok(())
}

/// Item entity - the record held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned by the store
    #[validate(range(min = 1))]
    #[schema(example = 1)]
    pub id: u64,
    /// Item name
    #[validate(length(min = 1))]
    #[schema(example = "Sample item")]
    pub name: String,
    /// Optional free-form description
    #[schema(example = "Some description")]
    pub description: Option<String>,
    /// Price, strictly greater than zero
    #[validate(custom(function = "validate_price"))]
    #[schema(example = 9.99)]
    pub price: f64,
    /// Whether the item is active
    pub is_active: bool,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1))]
    #[schema(example = "Sample item")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    #[schema(example = 9.99)]
    pub price: f64,
    #[serde(default = "default_is_active")]
    #[schema(default = true)]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

/// DTO for a partial update of an existing item
///
/// A field that is missing from the payload is left untouched. `description`
/// is the only nullable field: `null` clears it, so it carries three states
/// (`None` = unspecified, `Some(None)` = clear, `Some(Some(_))` = set).
/// The other fields reject an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[serde(default, deserialize_with = "present")]
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(custom(function = "validate_price"))]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub is_active: Option<bool>,
}

/// Deserializes a field that, when present, must hold a value
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Deserializes a present field, keeping `null` distinct from absence
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query filters and pagination for listing items
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemFilter {
    /// Number of matching items to skip
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of items to return (1..=1000)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub limit: usize,
    /// Case-insensitive substring match on the name; empty means no filter
    pub name_contains: Option<String>,
    /// Exact match on the active flag
    pub is_active: Option<bool>,
}

fn default_limit() -> usize {
    100
}

impl Default for ItemFilter {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            name_contains: None,
            is_active: None,
        }
    }
}

impl ItemFilter {
    /// Whether an item passes the filter predicates (pagination is not applied)
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(needle) = self.name_contains.as_deref().filter(|s| !s.is_empty()) {
            if !item.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if let Some(is_active) = self.is_active {
            if item.is_active != is_active {
                return false;
            }
        }
        true
    }
}

/// Query filters for counting items; pagination parameters do not apply
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemCountFilter {
    /// Case-insensitive substring match on the name; empty means no filter
    pub name_contains: Option<String>,
    /// Exact match on the active flag
    pub is_active: Option<bool>,
}

impl From<ItemCountFilter> for ItemFilter {
    fn from(filter: ItemCountFilter) -> Self {
        Self {
            name_contains: filter.name_contains,
            is_active: filter.is_active,
            ..Default::default()
        }
    }
}

impl Item {
    /// Build a stored item from a CreateItem DTO and a freshly allocated id
    pub fn from_create(id: u64, input: CreateItem) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            is_active: input.is_active,
        }
    }

    /// Return a copy of this item with the explicitly supplied fields of
    /// `update` applied. The id never changes.
    pub fn merged(&self, update: UpdateItem) -> Self {
        let mut item = self.clone();
        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(description) = update.description {
            item.description = description;
        }
        if let Some(price) = update.price {
            item.price = price;
        }
        if let Some(is_active) = update.is_active {
            item.is_active = is_active;
        }
        item
    }
}
