//! The transaction log command.
//!
//! The log is the second consumer of the filter engine, with
//! [`Transaction`] as the payload: filter by kind and status, search by
//! document name or counterparty, sort by time or document name. Same
//! pipeline, different screen.

use super::CmdResult;
use crate::error::Result;
use crate::filters::{
    apply_filters, FilterAction, FilterGroup, FilterItem, FilterableItem, FilterableList, Filters,
    ItemAttributes, SortOrder,
};
use crate::store::DataStore;
use crate::transactions::{Transaction, TransactionKind, TransactionStatus};

pub const SORT_GROUP: &str = "sort";
pub const KIND_GROUP: &str = "kind";
pub const STATUS_GROUP: &str = "status";

#[derive(Debug, Clone)]
pub struct LogQuery {
    pub search: Option<String>,
    pub kinds: Vec<TransactionKind>,
    pub statuses: Vec<TransactionStatus>,
    pub order: SortOrder,
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            search: None,
            kinds: Vec::new(),
            statuses: Vec::new(),
            order: SortOrder::Descending,
        }
    }
}

/// Build the filter configuration for the transaction log.
pub fn transaction_filters() -> Filters<Transaction> {
    let sort_group = FilterGroup::single(
        SORT_GROUP,
        "Sort by",
        vec![FilterItem::new(
            "sort:time",
            "Time",
            FilterAction::sort_by_key(|item: &FilterableItem<Transaction>| {
                item.payload.occurred_at
            }),
        )
        .selected_by_default()],
    );

    let kind_group = FilterGroup::multiple(
        KIND_GROUP,
        "Kind",
        TransactionKind::ALL
            .iter()
            .map(|kind| {
                let wanted = *kind;
                FilterItem::new(
                    format!("kind:{}", kind.slug()),
                    kind.label(),
                    FilterAction::filter(move |item: &FilterableItem<Transaction>, _| {
                        item.payload.kind == wanted
                    }),
                )
            })
            .collect(),
    );

    let status_group = FilterGroup::multiple(
        STATUS_GROUP,
        "Status",
        TransactionStatus::ALL
            .iter()
            .map(|status| {
                let wanted = *status;
                FilterItem::new(
                    format!("status:{}", status.slug()),
                    status.label(),
                    FilterAction::filter(move |item: &FilterableItem<Transaction>, _| {
                        item.payload.status == wanted
                    }),
                )
            })
            .collect(),
    );

    Filters::new(
        vec![sort_group, kind_group, status_group],
        SortOrder::Descending,
    )
}

pub fn run<S: DataStore>(store: &S, query: &LogQuery) -> Result<CmdResult> {
    let transactions = store.list_transactions()?;

    let mut filters = transaction_filters().with_sort_order(query.order);
    for kind in &query.kinds {
        filters = filters.select(KIND_GROUP, &format!("kind:{}", kind.slug()), true);
    }
    for status in &query.statuses {
        filters = filters.select(STATUS_GROUP, &format!("status:{}", status.slug()), true);
    }

    let list = FilterableList::new(
        transactions
            .into_iter()
            .map(|tx| {
                let attributes = ItemAttributes::new(tx.search_tags());
                FilterableItem::new(tx, attributes)
            })
            .collect(),
    );

    let result = apply_filters(list, &filters, query.search.as_deref().unwrap_or(""));

    Ok(CmdResult::default()
        .with_transactions(result.list.into_payloads())
        .with_facets(result.facets))
}
