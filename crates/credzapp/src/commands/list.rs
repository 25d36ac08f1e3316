//! The document list command: the wallet's main screen.
//!
//! `run` builds the full filter configuration for the document list (the
//! same groups a wallet's filter sheet shows), applies the caller's
//! selections to it, and hands the canonical list to the filter engine.
//!
//! ## Filter Sheet
//!
//! | Group     | Mode     | Choices                                      |
//! |-----------|----------|----------------------------------------------|
//! | Sort by   | single   | date issued (default), name, expiry date     |
//! | Category  | multiple | the fixed category set, empty ones included  |
//! | State     | multiple | issued / pending / revoked                   |
//! | Issuer    | multiple | distinct issuers present in the wallet       |
//! | Expiry    | single   | next 7 / 30 / 90 days, already expired       |
//!
//! The engine computes facet counts for every choice against the current
//! search, so a UI can show "Travel (3)" badges without a second pass.

use super::helpers;
use super::{CmdResult, ListedDocument};
use crate::config::WalletConfig;
use crate::error::Result;
use crate::filters::{
    apply_filters, FilterAction, FilterGroup, FilterItem, FilterableItem, FilterableList, Filters,
    ItemAttributes, SortOrder,
};
use crate::model::{DocumentCategory, DocumentState};
use crate::store::DataStore;
use chrono::{DateTime, Utc};

pub const SORT_GROUP: &str = "sort";
pub const CATEGORY_GROUP: &str = "category";
pub const STATE_GROUP: &str = "state";
pub const ISSUER_GROUP: &str = "issuer";
pub const EXPIRY_GROUP: &str = "expiry";

/// What the list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    IssuedAt,
    Name,
    ValidUntil,
}

impl SortField {
    pub fn item_id(&self) -> &'static str {
        match self {
            SortField::IssuedAt => "sort:issued",
            SortField::Name => "sort:name",
            SortField::ValidUntil => "sort:expiry",
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "issued" | "issued-at" | "date" => Ok(SortField::IssuedAt),
            "name" => Ok(SortField::Name),
            "expiry" | "valid-until" => Ok(SortField::ValidUntil),
            other => Err(format!(
                "Unknown sort field: {} (expected issued, name or expiry)",
                other
            )),
        }
    }
}

/// The single-selection expiry window choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryWindow {
    Days7,
    Days30,
    Days90,
    Expired,
}

impl ExpiryWindow {
    pub fn item_id(&self) -> &'static str {
        match self {
            ExpiryWindow::Days7 => "expiry:7",
            ExpiryWindow::Days30 => "expiry:30",
            ExpiryWindow::Days90 => "expiry:90",
            ExpiryWindow::Expired => "expiry:expired",
        }
    }
}

impl std::str::FromStr for ExpiryWindow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "7" => Ok(ExpiryWindow::Days7),
            "30" => Ok(ExpiryWindow::Days30),
            "90" => Ok(ExpiryWindow::Days90),
            "expired" => Ok(ExpiryWindow::Expired),
            other => Err(format!(
                "Unknown expiry window: {} (expected 7, 30, 90 or expired)",
                other
            )),
        }
    }
}

/// Caller-side description of a listing: the search query plus which filter
/// choices to select before running the engine.
#[derive(Debug, Clone)]
pub struct DocumentQuery {
    pub search: Option<String>,
    pub categories: Vec<DocumentCategory>,
    pub states: Vec<DocumentState>,
    pub issuers: Vec<String>,
    pub expiry: Option<ExpiryWindow>,
    pub sort: SortField,
    pub order: SortOrder,
}

impl Default for DocumentQuery {
    fn default() -> Self {
        Self {
            search: None,
            categories: Vec::new(),
            states: Vec::new(),
            issuers: Vec::new(),
            expiry: None,
            sort: SortField::IssuedAt,
            order: SortOrder::Descending,
        }
    }
}

impl DocumentQuery {
    /// A query seeded with the configured default sort field and order.
    pub fn from_config(config: &WalletConfig) -> Self {
        Self {
            sort: config.sort_field(),
            order: config.sort_order(),
            ..Default::default()
        }
    }
}

/// Build the full filter configuration for a document list.
///
/// `now` anchors the expiry predicates so one listing is internally
/// consistent (and tests control the clock). The issuer group is data-driven:
/// one choice per distinct issuer present in `documents`.
pub fn document_filters(
    documents: &[ListedDocument],
    now: DateTime<Utc>,
) -> Filters<ListedDocument> {
    let sort_group = FilterGroup::single(
        SORT_GROUP,
        "Sort by",
        vec![
            FilterItem::new(
                "sort:issued",
                "Date issued",
                FilterAction::sort_by_key(|item: &FilterableItem<ListedDocument>| {
                    item.payload.document.metadata.issued_at
                }),
            )
            .selected_by_default(),
            FilterItem::new(
                "sort:name",
                "Document name",
                FilterAction::sort_by_key(|item: &FilterableItem<ListedDocument>| {
                    item.payload.document.metadata.name.to_lowercase()
                }),
            ),
            FilterItem::new(
                "sort:expiry",
                "Expiry date",
                // Documents that never expire go last in ascending order.
                FilterAction::sort_by_key(|item: &FilterableItem<ListedDocument>| {
                    let metadata = &item.payload.document.metadata;
                    (metadata.valid_until.is_none(), metadata.valid_until)
                }),
            ),
        ],
    );

    let category_group = FilterGroup::multiple(
        CATEGORY_GROUP,
        "Category",
        DocumentCategory::ALL
            .iter()
            .map(|category| {
                let wanted = *category;
                FilterItem::new(
                    format!("category:{}", category.slug()),
                    category.label(),
                    FilterAction::filter(move |item: &FilterableItem<ListedDocument>, _| {
                        item.payload.document.metadata.category == wanted
                    }),
                )
            })
            .collect(),
    );

    let state_group = FilterGroup::multiple(
        STATE_GROUP,
        "State",
        DocumentState::ALL
            .iter()
            .map(|state| {
                let wanted = *state;
                FilterItem::new(
                    format!("state:{}", state.slug()),
                    state.label(),
                    FilterAction::filter(move |item: &FilterableItem<ListedDocument>, _| {
                        item.payload.document.metadata.state == wanted
                    }),
                )
            })
            .collect(),
    );

    let mut issuers: Vec<String> = documents
        .iter()
        .map(|d| d.document.metadata.issuer.clone())
        .collect();
    issuers.sort();
    issuers.dedup();
    let issuer_group = FilterGroup::multiple(
        ISSUER_GROUP,
        "Issuer",
        issuers
            .into_iter()
            .map(|issuer| {
                let wanted = issuer.clone();
                FilterItem::new(
                    format!("issuer:{}", issuer),
                    issuer,
                    FilterAction::filter(move |item: &FilterableItem<ListedDocument>, _| {
                        item.payload.document.metadata.issuer == wanted
                    }),
                )
            })
            .collect(),
    );

    let expiry_group = FilterGroup::single(
        EXPIRY_GROUP,
        "Expiry",
        vec![
            FilterItem::new(
                "expiry:7",
                "Next 7 days",
                FilterAction::filter(move |item: &FilterableItem<ListedDocument>, _| {
                    item.payload.document.metadata.expires_within(now, 7)
                }),
            ),
            FilterItem::new(
                "expiry:30",
                "Next 30 days",
                FilterAction::filter(move |item: &FilterableItem<ListedDocument>, _| {
                    item.payload.document.metadata.expires_within(now, 30)
                }),
            ),
            FilterItem::new(
                "expiry:90",
                "Next 90 days",
                FilterAction::filter(move |item: &FilterableItem<ListedDocument>, _| {
                    item.payload.document.metadata.expires_within(now, 90)
                }),
            ),
            FilterItem::new(
                "expiry:expired",
                "Already expired",
                FilterAction::filter(move |item: &FilterableItem<ListedDocument>, _| {
                    item.payload.document.metadata.is_expired(now)
                }),
            ),
        ],
    );

    Filters::new(
        vec![
            sort_group,
            category_group,
            state_group,
            issuer_group,
            expiry_group,
        ],
        SortOrder::Descending,
    )
}

pub fn run<S: DataStore>(store: &S, query: &DocumentQuery) -> Result<CmdResult> {
    let listed = helpers::canonical_documents(store)?;
    let now = Utc::now();

    let mut filters = document_filters(&listed, now).with_sort_order(query.order);
    filters = filters.select(SORT_GROUP, query.sort.item_id(), true);
    for category in &query.categories {
        filters = filters.select(CATEGORY_GROUP, &format!("category:{}", category.slug()), true);
    }
    for state in &query.states {
        filters = filters.select(STATE_GROUP, &format!("state:{}", state.slug()), true);
    }
    for issuer in &query.issuers {
        filters = filters.select(ISSUER_GROUP, &format!("issuer:{}", issuer), true);
    }
    if let Some(window) = query.expiry {
        filters = filters.select(EXPIRY_GROUP, window.item_id(), true);
    }

    let list = FilterableList::new(
        listed
            .into_iter()
            .map(|entry| {
                let attributes = ItemAttributes::new(entry.document.metadata.search_tags());
                FilterableItem::new(entry, attributes)
            })
            .collect(),
    );

    let result = apply_filters(list, &filters, query.search.as_deref().unwrap_or(""));

    Ok(CmdResult::default()
        .with_listed(result.list.into_payloads())
        .with_facets(result.facets))
}
