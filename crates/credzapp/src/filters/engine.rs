//! The engine operations: query search, group filtering, sorting and facet
//! counting over a [`FilterableList`].
//!
//! All operations are pure and infallible. The full pipeline is
//! [`apply_filters`]; the individual stages are public because screens
//! occasionally need just one (e.g. re-sorting on an order flip without
//! recomputing facets).

use super::list::FilterableList;
use super::{FilterAction, Filters};

/// Match count for one filter item, for badge display next to the choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCount {
    pub group_id: String,
    pub group_name: String,
    pub item_id: String,
    pub item_name: String,
    pub count: usize,
}

/// A filtered/sorted list plus the facet counts computed along the way.
#[derive(Debug, Clone)]
pub struct FilterResult<T> {
    pub list: FilterableList<T>,
    pub facets: Vec<FacetCount>,
}

/// Retain the items whose search tags contain `query`, ignoring case. An
/// item survives if ANY of its tags matches. The empty query is the
/// identity.
pub fn filter_by_query<T>(list: FilterableList<T>, query: &str) -> FilterableList<T> {
    if query.is_empty() {
        return list;
    }
    let needle = query.to_lowercase();
    let FilterableList { items, mut applied } = list;
    applied.query = Some(query.to_string());
    FilterableList {
        items: items
            .into_iter()
            .filter(|item| item.attributes.matches_query(&needle))
            .collect(),
        applied,
    }
}

/// Reorder the list with the currently selected sort action, honoring the
/// configuration's sort direction. With no sort item selected this is the
/// identity: same elements, same order.
pub fn apply_sort<T>(list: FilterableList<T>, filters: &Filters<T>) -> FilterableList<T> {
    match filters.selected_sort() {
        Some(item) => item.action.apply(filters.sort_order, list, item),
        None => list,
    }
}

/// Count, per filter item, how many items of `list` its predicate would
/// retain. Sort items carry no count. Counts are taken against the list as
/// given (callers pass the query-filtered base), so every badge answers
/// "how many results would this choice keep" independently of the other
/// groups' current selections.
pub fn facet_counts<T>(list: &FilterableList<T>, filters: &Filters<T>) -> Vec<FacetCount> {
    let mut facets = Vec::new();
    for group in &filters.groups {
        for item in &group.items {
            if let FilterAction::Filter(predicate) = &item.action {
                let count = list
                    .items
                    .iter()
                    .filter(|candidate| predicate(candidate, item))
                    .count();
                facets.push(FacetCount {
                    group_id: group.id.clone(),
                    group_name: group.name.clone(),
                    item_id: item.id.clone(),
                    item_name: item.name.clone(),
                    count,
                });
            }
        }
    }
    facets
}

/// The full pipeline: query → group filters → sort.
///
/// The result list's `applied` snapshot records the query, the active
/// selections and the sort direction that produced it.
pub fn apply_filters<T>(
    list: FilterableList<T>,
    filters: &Filters<T>,
    query: &str,
) -> FilterResult<T> {
    let searched = filter_by_query(list, query);
    let facets = facet_counts(&searched, filters);

    let mut current = searched;
    for group in &filters.groups {
        current = group.apply(filters.sort_order, current);
    }

    let mut sorted = apply_sort(current, filters);
    sorted.applied.selections = filters.selections();
    sorted.applied.sort_order = filters.sort_order;

    FilterResult {
        list: sorted,
        facets,
    }
}
