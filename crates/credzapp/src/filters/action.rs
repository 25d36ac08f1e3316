//! Filter actions: the behavior bound to a selectable filter item.
//!
//! [`FilterAction`] is a closed two-variant union: a selected item either
//! narrows the list (`Filter`) or reorders it (`Sort`). Dispatch happens by
//! pattern match in [`FilterAction::apply`]; there is no open trait
//! hierarchy to extend. Screens supply the concrete behavior as closures
//! when they build their [`Filters`](super::Filters) configuration.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::list::{FilterableItem, FilterableList};
use super::{FilterItem, SortOrder};

/// Decides whether an item stays in the list. Receives the selected filter
/// item too, so a predicate can read its id or name instead of capturing
/// them.
pub type FilterPredicate<T> = Arc<dyn Fn(&FilterableItem<T>, &FilterItem<T>) -> bool + Send + Sync>;

/// Orders two items; the engine flips the arguments for descending order.
pub type SortComparator<T> =
    Arc<dyn Fn(&FilterableItem<T>, &FilterableItem<T>) -> Ordering + Send + Sync>;

pub enum FilterAction<T> {
    /// Retain the items the predicate holds for.
    Filter(FilterPredicate<T>),
    /// Reorder the list with the comparator, honoring the current sort
    /// direction.
    Sort(SortComparator<T>),
}

impl<T> FilterAction<T> {
    pub fn filter(
        predicate: impl Fn(&FilterableItem<T>, &FilterItem<T>) -> bool + Send + Sync + 'static,
    ) -> Self {
        FilterAction::Filter(Arc::new(predicate))
    }

    pub fn sort(
        comparator: impl Fn(&FilterableItem<T>, &FilterableItem<T>) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        FilterAction::Sort(Arc::new(comparator))
    }

    /// Sort by a comparable key extracted from each item.
    pub fn sort_by_key<K: Ord>(
        key: impl Fn(&FilterableItem<T>) -> K + Send + Sync + 'static,
    ) -> Self {
        Self::sort(move |a, b| key(a).cmp(&key(b)))
    }

    /// Apply this action to `list` on behalf of `selected`.
    ///
    /// `Filter` retains matching items; `Sort` reorders (stable) in the
    /// given direction. Both consume the list and return a new one.
    pub fn apply(
        &self,
        order: SortOrder,
        list: FilterableList<T>,
        selected: &FilterItem<T>,
    ) -> FilterableList<T> {
        let FilterableList { mut items, applied } = list;
        match self {
            FilterAction::Filter(predicate) => {
                items.retain(|item| predicate(item, selected));
            }
            FilterAction::Sort(comparator) => {
                items.sort_by(|a, b| match order {
                    SortOrder::Ascending => comparator(a, b),
                    SortOrder::Descending => comparator(b, a),
                });
            }
        }
        FilterableList { items, applied }
    }
}

// Manual impls: the closures are behind Arc, so cloning never requires
// `T: Clone`, and Debug can only name the variant.

impl<T> Clone for FilterAction<T> {
    fn clone(&self) -> Self {
        match self {
            FilterAction::Filter(predicate) => FilterAction::Filter(predicate.clone()),
            FilterAction::Sort(comparator) => FilterAction::Sort(comparator.clone()),
        }
    }
}

impl<T> fmt::Debug for FilterAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterAction::Filter(_) => f.write_str("FilterAction::Filter"),
            FilterAction::Sort(_) => f.write_str("FilterAction::Sort"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ItemAttributes;

    fn list(values: &[i64]) -> FilterableList<i64> {
        FilterableList::new(
            values
                .iter()
                .map(|v| FilterableItem::new(*v, ItemAttributes::default()))
                .collect(),
        )
    }

    fn holder(action: FilterAction<i64>) -> FilterItem<i64> {
        FilterItem::new("it", "It", action)
    }

    #[test]
    fn filter_variant_retains_matching_items() {
        let action = FilterAction::filter(|item: &FilterableItem<i64>, _| item.payload % 2 == 0);
        let item = holder(action.clone());
        let out = action.apply(SortOrder::Ascending, list(&[1, 2, 3, 4]), &item);
        assert_eq!(out.into_payloads(), vec![2, 4]);
    }

    #[test]
    fn sort_variant_honors_order() {
        let action = FilterAction::<i64>::sort_by_key(|item| item.payload);
        let item = holder(action.clone());

        let asc = action.apply(SortOrder::Ascending, list(&[2, 3, 1]), &item);
        assert_eq!(asc.into_payloads(), vec![1, 2, 3]);

        let desc = action.apply(SortOrder::Descending, list(&[2, 3, 1]), &item);
        assert_eq!(desc.into_payloads(), vec![3, 2, 1]);
    }

    #[test]
    fn predicate_sees_the_selected_item() {
        // A predicate keying off the item id instead of a captured value.
        let action = FilterAction::filter(|item: &FilterableItem<i64>, selected: &FilterItem<i64>| {
            selected.id == "it" && item.payload > 0
        });
        let item = holder(action.clone());
        let out = action.apply(SortOrder::Ascending, list(&[-1, 1]), &item);
        assert_eq!(out.into_payloads(), vec![1]);
    }

    #[test]
    fn debug_names_the_variant() {
        let action = FilterAction::<i64>::filter(|_, _| true);
        assert_eq!(format!("{:?}", action), "FilterAction::Filter");
    }
}
