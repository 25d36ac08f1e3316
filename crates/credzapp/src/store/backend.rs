use crate::error::Result;
use crate::model::Metadata;
use crate::transactions::Transaction;
use std::collections::HashMap;
use std::path::PathBuf;
use uuid::Uuid;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::doc_store::DocStore`] handles the "what" (save ordering,
/// doctor, log append).
pub trait StorageBackend {
    // --- Index Operations ---

    /// Load the metadata index (index.json).
    fn load_index(&self) -> Result<HashMap<Uuid, Metadata>>;

    /// Save the metadata index.
    fn save_index(&self, index: &HashMap<Uuid, Metadata>) -> Result<()>;

    // --- Transaction Log Operations ---

    /// Load the transaction log (log.json), oldest first.
    fn load_log(&self) -> Result<Vec<Transaction>>;

    /// Save the transaction log.
    fn save_log(&self, log: &[Transaction]) -> Result<()>;

    // --- Payload Operations ---

    /// Read the raw payload for a document.
    /// Returns Ok(None) if the file does not exist (zombie detection).
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_payload(&self, id: &Uuid) -> Result<Option<String>>;

    /// Write a payload to storage.
    /// MUST be atomic (write to tmp then rename) to avoid partial writes.
    fn write_payload(&self, id: &Uuid, payload: &str) -> Result<()>;

    /// Delete a payload file. Deleting a missing payload is not an error.
    fn delete_payload(&self, id: &Uuid) -> Result<()>;

    // --- Discovery & Paths ---

    /// List all payload ids found in storage (for doctor).
    fn list_payload_ids(&self) -> Result<Vec<Uuid>>;

    /// The "file path" of a payload. For `FsBackend` this is the real path;
    /// for `MemBackend` a virtual one.
    fn payload_path(&self, id: &Uuid) -> Result<PathBuf>;
}
