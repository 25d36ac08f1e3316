//! # Filterable List Engine
//!
//! Generic search / filter / sort over a list of items, driving both the
//! document list and the transaction log. The engine is deliberately dumb:
//! it knows nothing about documents. Screens describe *what* can be filtered
//! by building a [`Filters`] configuration (named groups of selectable
//! items, each carrying a predicate or comparator), and the engine applies
//! the current selection to a [`FilterableList`].
//!
//! ## Data Model
//!
//! - [`FilterableList<T>`] — the items under scrutiny. Each
//!   [`FilterableItem`] wraps an opaque payload plus [`ItemAttributes`]
//!   (the search tags free-text search matches against).
//! - [`Filters<T>`] — ordered [`FilterGroup`]s of [`FilterItem`]s plus the
//!   current [`SortOrder`]. A group is either `Single` (radio) or
//!   `Multiple` (checkbox) selection.
//! - [`FilterAction<T>`] — what a selected item *does*: retain matching
//!   items (`Filter`) or reorder the list (`Sort`).
//!
//! ## Value Semantics
//!
//! Lists and filter configurations are immutable values. Every user
//! interaction (select, toggle, reset, re-sort, new search query) builds a
//! new configuration and re-runs the pipeline over a fresh snapshot; nothing
//! is mutated in place. The result list records which selections produced it
//! in its [`AppliedFilters`] snapshot.
//!
//! ## Pipeline Order
//!
//! [`apply_filters`] runs: search query → group filters → sort.
//!
//! - Within a group, selected filter items combine with OR (a document
//!   survives the "Category" group if it matches *any* chosen category).
//! - Across groups, AND.
//! - A group with nothing selected does not constrain the list.
//! - Sort runs last; with no sort item selected the order is untouched.
//!
//! ## Invariants
//!
//! - `Single` groups hold at most one selected item; [`Filters::select`]
//!   enforces this.
//! - All `Sort` actions live in one `Single` group, so at most one sort is
//!   active at a time by construction.
//!
//! The engine has no failure modes: a query nothing matches yields an empty
//! list, an empty configuration is the identity. All functions are pure and
//! synchronous.

mod action;
mod engine;
mod list;

pub use action::{FilterAction, FilterPredicate, SortComparator};
pub use engine::{apply_filters, apply_sort, facet_counts, filter_by_query, FacetCount, FilterResult};
pub use list::{AppliedFilters, AppliedSelection, FilterableItem, FilterableList, ItemAttributes};

/// Direction a selected sort action orders the list in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Ascending
    }
}

/// How many items of a group may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Radio-style: selecting an item deselects its siblings.
    Single,
    /// Checkbox-style: any number of items may be selected.
    Multiple,
}

/// One selectable choice inside a [`FilterGroup`].
#[derive(Debug, Clone)]
pub struct FilterItem<T> {
    /// Stable identifier, unique within the owning group.
    pub id: String,
    /// Display label.
    pub name: String,
    pub selected: bool,
    /// Whether [`Filters::reset`] selects this item.
    pub default_selected: bool,
    pub action: FilterAction<T>,
}

impl<T> FilterItem<T> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, action: FilterAction<T>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected: false,
            default_selected: false,
            action,
        }
    }

    /// Mark this item as part of the default selection (and select it).
    pub fn selected_by_default(mut self) -> Self {
        self.selected = true;
        self.default_selected = true;
        self
    }

    /// Whether this item's action would retain `item`.
    /// Sort actions never exclude anything.
    pub(crate) fn retains(&self, item: &FilterableItem<T>) -> bool {
        match &self.action {
            FilterAction::Filter(predicate) => predicate(item, self),
            FilterAction::Sort(_) => true,
        }
    }
}

/// A named cluster of mutually related filter choices (e.g. "Category").
#[derive(Debug, Clone)]
pub struct FilterGroup<T> {
    pub id: String,
    pub name: String,
    pub mode: SelectionMode,
    pub items: Vec<FilterItem<T>>,
}

impl<T> FilterGroup<T> {
    pub fn single(
        id: impl Into<String>,
        name: impl Into<String>,
        items: Vec<FilterItem<T>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mode: SelectionMode::Single,
            items,
        }
    }

    pub fn multiple(
        id: impl Into<String>,
        name: impl Into<String>,
        items: Vec<FilterItem<T>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mode: SelectionMode::Multiple,
            items,
        }
    }

    /// Apply this group's selected filter items to `list`.
    ///
    /// No selection leaves the list untouched. A single selection dispatches
    /// through [`FilterAction::apply`]; multiple selections OR their
    /// predicates together.
    pub fn apply(&self, order: SortOrder, list: FilterableList<T>) -> FilterableList<T> {
        let selected: Vec<&FilterItem<T>> = self
            .items
            .iter()
            .filter(|item| item.selected && matches!(item.action, FilterAction::Filter(_)))
            .collect();

        match selected.as_slice() {
            [] => list,
            [only] => only.action.apply(order, list, only),
            many => {
                let FilterableList { mut items, applied } = list;
                items.retain(|item| many.iter().any(|choice| choice.retains(item)));
                FilterableList { items, applied }
            }
        }
    }
}

/// The full filter configuration for one screenful of items: ordered groups
/// plus the current sort direction.
#[derive(Debug, Clone)]
pub struct Filters<T> {
    pub groups: Vec<FilterGroup<T>>,
    pub sort_order: SortOrder,
}

impl<T> Filters<T> {
    pub fn new(groups: Vec<FilterGroup<T>>, sort_order: SortOrder) -> Self {
        Self { groups, sort_order }
    }

    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            sort_order: SortOrder::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, id: &str) -> Option<&FilterGroup<T>> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// The currently selected sort item, if any.
    pub fn selected_sort(&self) -> Option<&FilterItem<T>> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|item| item.selected && matches!(item.action, FilterAction::Sort(_)))
    }

    /// Every selected item as a `(group, item)` id pair, in group order.
    pub fn selections(&self) -> Vec<AppliedSelection> {
        self.groups
            .iter()
            .flat_map(|group| {
                group.items.iter().filter(|item| item.selected).map(|item| {
                    AppliedSelection {
                        group_id: group.id.clone(),
                        item_id: item.id.clone(),
                    }
                })
            })
            .collect()
    }
}

impl<T: Clone> Filters<T> {
    /// Produce a new configuration with `item_id` in `group_id` set to
    /// `selected`. Selecting inside a `Single` group deselects its siblings.
    /// Unknown ids leave the configuration unchanged.
    pub fn select(&self, group_id: &str, item_id: &str, selected: bool) -> Self {
        let mut next = self.clone();
        if let Some(group) = next.groups.iter_mut().find(|g| g.id == group_id) {
            let known = group.items.iter().any(|i| i.id == item_id);
            if !known {
                return next;
            }
            if selected && group.mode == SelectionMode::Single {
                for item in &mut group.items {
                    item.selected = false;
                }
            }
            if let Some(item) = group.items.iter_mut().find(|i| i.id == item_id) {
                item.selected = selected;
            }
        }
        next
    }

    /// Flip the selection state of one item.
    pub fn toggle(&self, group_id: &str, item_id: &str) -> Self {
        let current = self
            .group(group_id)
            .and_then(|g| g.items.iter().find(|i| i.id == item_id))
            .map(|i| i.selected)
            .unwrap_or(false);
        self.select(group_id, item_id, !current)
    }

    /// Restore every item to its default selection state. The sort order is
    /// left as-is; callers that want the initial order rebuild the
    /// configuration.
    pub fn reset(&self) -> Self {
        let mut next = self.clone();
        for group in &mut next.groups {
            for item in &mut group.items {
                item.selected = item.default_selected;
            }
        }
        next
    }

    /// Produce a new configuration with a different sort direction.
    pub fn with_sort_order(&self, order: SortOrder) -> Self {
        let mut next = self.clone();
        next.sort_order = order;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes<T>() -> FilterAction<T> {
        FilterAction::filter(|_, _| true)
    }

    fn config() -> Filters<u32> {
        Filters::new(
            vec![
                FilterGroup::single(
                    "mode",
                    "Mode",
                    vec![
                        FilterItem::new("a", "A", yes()).selected_by_default(),
                        FilterItem::new("b", "B", yes()),
                        FilterItem::new("c", "C", yes()),
                    ],
                ),
                FilterGroup::multiple(
                    "flags",
                    "Flags",
                    vec![
                        FilterItem::new("x", "X", yes()),
                        FilterItem::new("y", "Y", yes()),
                    ],
                ),
            ],
            SortOrder::Descending,
        )
    }

    fn selected_ids(filters: &Filters<u32>, group: &str) -> Vec<String> {
        filters
            .group(group)
            .unwrap()
            .items
            .iter()
            .filter(|i| i.selected)
            .map(|i| i.id.clone())
            .collect()
    }

    #[test]
    fn single_group_selection_is_exclusive() {
        let filters = config().select("mode", "b", true);
        assert_eq!(selected_ids(&filters, "mode"), vec!["b"]);

        let filters = filters.select("mode", "c", true);
        assert_eq!(selected_ids(&filters, "mode"), vec!["c"]);
    }

    #[test]
    fn multiple_group_accumulates_selections() {
        let filters = config().select("flags", "x", true).select("flags", "y", true);
        assert_eq!(selected_ids(&filters, "flags"), vec!["x", "y"]);
    }

    #[test]
    fn toggle_flips_state() {
        let filters = config().toggle("flags", "x");
        assert_eq!(selected_ids(&filters, "flags"), vec!["x"]);
        let filters = filters.toggle("flags", "x");
        assert!(selected_ids(&filters, "flags").is_empty());
    }

    #[test]
    fn select_is_copy_on_write() {
        let original = config();
        let _changed = original.select("mode", "b", true);
        // The original snapshot is untouched.
        assert_eq!(selected_ids(&original, "mode"), vec!["a"]);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let filters = config().select("mode", "nope", true);
        assert_eq!(selected_ids(&filters, "mode"), vec!["a"]);

        let filters = config().select("nope", "a", true);
        assert_eq!(selected_ids(&filters, "mode"), vec!["a"]);
    }

    #[test]
    fn reset_restores_defaults() {
        let filters = config()
            .select("mode", "c", true)
            .select("flags", "y", true)
            .reset();
        assert_eq!(selected_ids(&filters, "mode"), vec!["a"]);
        assert!(selected_ids(&filters, "flags").is_empty());
    }

    #[test]
    fn selections_lists_group_item_pairs() {
        let filters = config().select("flags", "y", true);
        let selections = filters.selections();
        assert_eq!(selections.len(), 2);
        assert_eq!(selections[0].group_id, "mode");
        assert_eq!(selections[0].item_id, "a");
        assert_eq!(selections[1].group_id, "flags");
        assert_eq!(selections[1].item_id, "y");
    }

    #[test]
    fn selected_sort_finds_only_sort_actions() {
        // The config above holds only Filter actions.
        assert!(config().selected_sort().is_none());

        let filters = Filters::new(
            vec![FilterGroup::single(
                "sort",
                "Sort by",
                vec![FilterItem::new(
                    "sort:value",
                    "Value",
                    FilterAction::<u32>::sort_by_key(|item| item.payload),
                )
                .selected_by_default()],
            )],
            SortOrder::Ascending,
        );
        assert_eq!(filters.selected_sort().unwrap().id, "sort:value");
    }
}
