use super::backend::StorageBackend;
use super::{DataStore, DoctorReport};
use crate::error::{Result, WalletError};
use crate::model::Document;
use crate::transactions::Transaction;
use std::path::PathBuf;
use uuid::Uuid;

pub struct DocStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> DocStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: StorageBackend> DataStore for DocStore<B> {
    fn save_document(&mut self, document: &Document) -> Result<()> {
        // Payload first: an interrupted save leaves an orphan payload file
        // (cleaned by doctor), never an index entry without its credential.
        self.backend
            .write_payload(&document.metadata.id, &document.payload)?;

        let mut index = self.backend.load_index()?;
        index.insert(document.metadata.id, document.metadata.clone());
        self.backend.save_index(&index)?;

        Ok(())
    }

    fn get_document(&self, id: &Uuid) -> Result<Document> {
        let index = self.backend.load_index()?;
        let metadata = index
            .get(id)
            .ok_or(WalletError::DocumentNotFound(*id))?
            .clone();

        // A missing payload is a zombie; surface the document anyway with an
        // empty payload and let doctor clean the entry up.
        let payload = self.backend.read_payload(id)?.unwrap_or_default();

        Ok(Document { metadata, payload })
    }

    fn list_documents(&self) -> Result<Vec<Document>> {
        let index = self.backend.load_index()?;
        let mut documents = Vec::with_capacity(index.len());

        for (id, metadata) in index {
            let payload = self.backend.read_payload(&id)?.unwrap_or_default();
            documents.push(Document { metadata, payload });
        }

        Ok(documents)
    }

    fn delete_document(&mut self, id: &Uuid) -> Result<()> {
        // Index first: once the entry is gone the document no longer exists,
        // and a leftover payload file is an orphan doctor can delete.
        let mut index = self.backend.load_index()?;
        if index.remove(id).is_none() {
            return Err(WalletError::DocumentNotFound(*id));
        }
        self.backend.save_index(&index)?;

        self.backend.delete_payload(id)?;

        Ok(())
    }

    fn document_path(&self, id: &Uuid) -> Result<PathBuf> {
        self.backend.payload_path(id)
    }

    fn record_transaction(&mut self, transaction: &Transaction) -> Result<()> {
        let mut log = self.backend.load_log()?;
        log.push(transaction.clone());
        self.backend.save_log(&log)
    }

    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.backend.load_log()
    }

    fn doctor(&mut self) -> Result<DoctorReport> {
        let mut index = self.backend.load_index()?;
        let payload_ids = self.backend.list_payload_ids()?;
        let mut report = DoctorReport::default();

        // 1. Orphan payloads: a payload file with no index entry. Payloads
        // are opaque, so nothing can be recovered from them; delete.
        for id in &payload_ids {
            if !index.contains_key(id) {
                self.backend.delete_payload(id)?;
                report.removed_orphan_payloads += 1;
            }
        }

        // 2. Zombie entries: an index entry whose payload file is missing.
        let ids: Vec<Uuid> = index.keys().copied().collect();
        let mut changed = false;
        for id in ids {
            if !payload_ids.contains(&id) {
                index.remove(&id);
                report.removed_zombie_entries += 1;
                changed = true;
            }
        }

        if changed {
            self.backend.save_index(&index)?;
        }

        Ok(report)
    }
}
