//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single entry
//! point for all credz operations, regardless of the UI driving it.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (user-facing selectors → document lookups)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It explicitly avoids business logic (that lives in `commands/*.rs`),
//! I/O, and presentation concerns.
//!
//! ## Selectors
//!
//! Users pick documents by canonical list position (`credz view 2`) or by
//! name (`credz view driving`). Parsing mirrors that fallback: if every
//! argument is a positive integer the inputs are positions (deduplicated,
//! order preserved); otherwise the whole input is joined into one name
//! search term.
//!
//! ## Generic Over DataStore
//!
//! `WalletApi<S: DataStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`. This keeps the
//! facade testable without touching the filesystem.

use crate::commands;
use crate::commands::helpers::DocSelector;
use crate::error::Result;
use crate::store::DataStore;

/// The main API facade for credz operations.
///
/// Generic over `DataStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct WalletApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> WalletApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_document(&mut self, new: commands::add::NewDocument) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, new)
    }

    pub fn list_documents(
        &self,
        query: &commands::list::DocumentQuery,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn view_documents<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        commands::view::run(&self.store, &selectors)
    }

    pub fn remove_documents<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors);
        commands::remove::run(&mut self.store, &selectors)
    }

    pub fn transactions(&self, query: &commands::log::LogQuery) -> Result<commands::CmdResult> {
        commands::log::run(&self.store, query)
    }

    pub fn doctor(&mut self) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store)
    }
}

/// Parse user selector strings.
///
/// 1. Try ALL inputs as 1-based positions, deduplicating while preserving
///    order.
/// 2. If any input is not a positive integer, treat the whole input as ONE
///    name search term (words joined with spaces).
fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<DocSelector> {
    let mut positions = Vec::new();

    for input in inputs {
        match input.as_ref().parse::<usize>() {
            Ok(n) if n > 0 => positions.push(n),
            _ => {
                let term = inputs
                    .iter()
                    .map(|s| s.as_ref())
                    .collect::<Vec<&str>>()
                    .join(" ");
                return vec![DocSelector::Name(term)];
            }
        }
    }

    let mut seen = std::collections::HashSet::new();
    positions
        .into_iter()
        .filter(|n| seen.insert(*n))
        .map(DocSelector::Position)
        .collect()
}

pub use crate::commands::add::NewDocument;
pub use crate::commands::list::{DocumentQuery, ExpiryWindow, SortField};
pub use crate::commands::log::LogQuery;
pub use crate::commands::{CmdMessage, CmdResult, ListedDocument, MessageLevel};
