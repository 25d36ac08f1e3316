//! # Storage Layer
//!
//! This module defines the storage abstraction for credz. The [`DataStore`]
//! trait is what the command layer programs against; [`backend::StorageBackend`]
//! is the raw-I/O seam underneath it.
//!
//! ## Layout
//!
//! A wallet store is a single directory holding:
//!
//! ```text
//! <data dir>/
//! ├── index.json          # HashMap<Uuid, Metadata> — the browsing index
//! ├── log.json            # Vec<Transaction> — append-only event log
//! ├── credz.toml          # Configuration (see crate::config)
//! └── doc-{uuid}.cred     # One opaque credential payload per document
//! ```
//!
//! The index is authoritative: a document exists iff its metadata entry
//! does. Payload files are opaque blobs the organizer never parses, so
//! nothing can be reconstructed from a stray payload file.
//!
//! ## Consistency
//!
//! - All writes are atomic (write to a tmp file, then rename).
//! - Saves write the payload before the index entry: an interrupted save
//!   leaves an orphan payload file, never an index entry pointing at a
//!   missing credential.
//! - [`DataStore::doctor`] cleans up both failure residues: orphan payload
//!   files (no index entry) are deleted, zombie index entries (no payload
//!   file) are dropped.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store over [`fs_backend::FsBackend`].
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::Document;
use crate::transactions::Transaction;
use std::path::PathBuf;
use uuid::Uuid;

pub mod backend;
pub mod doc_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// Report from the `doctor` operation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DoctorReport {
    /// Payload files deleted because no index entry referenced them.
    pub removed_orphan_payloads: usize,
    /// Index entries dropped because their payload file was missing.
    pub removed_zombie_entries: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.removed_orphan_payloads == 0 && self.removed_zombie_entries == 0
    }
}

/// Abstract interface for wallet storage.
///
/// Implementations must handle persistence, retrieval, and consistency for
/// documents and the transaction log.
pub trait DataStore {
    /// Save a document (create or update).
    fn save_document(&mut self, document: &Document) -> Result<()>;

    /// Get a document by id.
    fn get_document(&self, id: &Uuid) -> Result<Document>;

    /// List all stored documents.
    fn list_documents(&self) -> Result<Vec<Document>>;

    /// Delete a document permanently.
    fn delete_document(&mut self, id: &Uuid) -> Result<()>;

    /// Get the payload file path for a document (for file-based stores).
    fn document_path(&self, id: &Uuid) -> Result<PathBuf>;

    /// Append an entry to the transaction log.
    fn record_transaction(&mut self, transaction: &Transaction) -> Result<()>;

    /// The transaction log, oldest first.
    fn list_transactions(&self) -> Result<Vec<Transaction>>;

    /// Verify and fix consistency issues.
    fn doctor(&mut self) -> Result<DoctorReport>;
}
