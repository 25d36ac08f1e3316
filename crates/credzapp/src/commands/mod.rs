//! # Command Layer
//!
//! This module contains the core business logic of credz. Each command lives
//! in its own submodule and implements pure Rust functions that operate on
//! data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each operation
//! - Operate on `Document`, `Transaction` and the filter engine types
//! - Return structured `CmdResult` with affected documents and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: no stdout, stderr, file formatting or terminal concerns
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//! - **User interaction**: no prompts or confirmations
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. The UI layer decides how to
//! render:
//! - `affected`: documents that were modified, with their list position
//! - `listed`: documents to display, in final (filtered/sorted) order
//! - `transactions`: log entries to display
//! - `facets`: per-filter match counts from the engine
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! `InMemoryStore` fixtures to avoid filesystem dependencies and verify
//! `CmdResult` contents for every logic branch.

pub mod add;
pub mod doctor;
pub mod helpers;
pub mod list;
pub mod log;
pub mod remove;
pub mod view;

use crate::filters::FacetCount;
use crate::model::Document;
use crate::transactions::Transaction;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A document paired with its canonical list position (1-based).
///
/// Positions are assigned over the full, unfiltered list (newest issuance
/// first), so `credz remove 2` targets the same document regardless of the
/// filters currently narrowing the view. See [`helpers::canonical_documents`].
#[derive(Debug, Clone)]
pub struct ListedDocument {
    pub document: Document,
    pub position: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<ListedDocument>,
    pub listed: Vec<ListedDocument>,
    pub transactions: Vec<Transaction>,
    pub facets: Vec<FacetCount>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, documents: Vec<ListedDocument>) -> Self {
        self.affected = documents;
        self
    }

    pub fn with_listed(mut self, documents: Vec<ListedDocument>) -> Self {
        self.listed = documents;
        self
    }

    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_facets(mut self, facets: Vec<FacetCount>) -> Self {
        self.facets = facets;
        self
    }
}
