use super::backend::StorageBackend;
use crate::error::{Result, WalletError};
use crate::model::Metadata;
use crate::transactions::Transaction;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since credz is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    index: RefCell<HashMap<Uuid, Metadata>>,
    log: RefCell<Vec<Transaction>>,
    payloads: RefCell<HashMap<Uuid, String>>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            index: RefCell::new(HashMap::new()),
            log: RefCell::new(Vec::new()),
            payloads: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_index(&self) -> Result<HashMap<Uuid, Metadata>> {
        Ok(self.index.borrow().clone())
    }

    fn save_index(&self, new_index: &HashMap<Uuid, Metadata>) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(WalletError::Store("Simulated write error".to_string()));
        }
        *self.index.borrow_mut() = new_index.clone();
        Ok(())
    }

    fn load_log(&self) -> Result<Vec<Transaction>> {
        Ok(self.log.borrow().clone())
    }

    fn save_log(&self, new_log: &[Transaction]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(WalletError::Store("Simulated write error".to_string()));
        }
        *self.log.borrow_mut() = new_log.to_vec();
        Ok(())
    }

    fn read_payload(&self, id: &Uuid) -> Result<Option<String>> {
        Ok(self.payloads.borrow().get(id).cloned())
    }

    fn write_payload(&self, id: &Uuid, payload: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(WalletError::Store("Simulated write error".to_string()));
        }
        self.payloads.borrow_mut().insert(*id, payload.to_string());
        Ok(())
    }

    fn delete_payload(&self, id: &Uuid) -> Result<()> {
        self.payloads.borrow_mut().remove(id);
        Ok(())
    }

    fn list_payload_ids(&self) -> Result<Vec<Uuid>> {
        Ok(self.payloads.borrow().keys().copied().collect())
    }

    fn payload_path(&self, id: &Uuid) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("memory://doc-{}", id)))
    }
}
