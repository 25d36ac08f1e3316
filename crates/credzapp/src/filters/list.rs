//! The list side of the engine: items under filter and the snapshot of what
//! produced them.

use super::SortOrder;

/// Searchable attributes attached to a [`FilterableItem`].
///
/// Search tags are the only thing free-text search looks at; the payload
/// itself is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemAttributes {
    pub search_tags: Vec<String>,
}

impl ItemAttributes {
    pub fn new(search_tags: Vec<String>) -> Self {
        Self { search_tags }
    }

    /// Case-insensitive substring match: true if ANY tag contains the
    /// (already lowercased) query.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.search_tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query_lower))
    }
}

/// One entry of a [`FilterableList`]: an opaque payload plus the attributes
/// the engine is allowed to look at.
#[derive(Debug, Clone)]
pub struct FilterableItem<T> {
    pub payload: T,
    pub attributes: ItemAttributes,
}

impl<T> FilterableItem<T> {
    pub fn new(payload: T, attributes: ItemAttributes) -> Self {
        Self {
            payload,
            attributes,
        }
    }
}

/// A `(group, item)` id pair recording one active selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSelection {
    pub group_id: String,
    pub item_id: String,
}

/// Snapshot of the query, selections and sort direction a list was produced
/// with. Carried by value on the result so consumers can tell *why* the list
/// looks the way it does without holding on to the configuration itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppliedFilters {
    pub query: Option<String>,
    pub selections: Vec<AppliedSelection>,
    pub sort_order: SortOrder,
}

/// An ordered sequence of filterable items.
///
/// Immutable value semantics: every transform consumes the list and returns
/// a new one; a list is never mutated in place once built.
#[derive(Debug, Clone)]
pub struct FilterableList<T> {
    pub items: Vec<FilterableItem<T>>,
    pub applied: AppliedFilters,
}

impl<T> FilterableList<T> {
    pub fn new(items: Vec<FilterableItem<T>>) -> Self {
        Self {
            items,
            applied: AppliedFilters::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The payloads in list order, consuming the list.
    pub fn into_payloads(self) -> Vec<T> {
        self.items.into_iter().map(|item| item.payload).collect()
    }
}
