use super::backend::StorageBackend;
use crate::error::{Result, WalletError};
use crate::model::Metadata;
use crate::transactions::Transaction;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const INDEX_FILE: &str = "index.json";
const LOG_FILE: &str = "log.json";
const PAYLOAD_EXT: &str = ".cred";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn payload_filename(&self, id: &Uuid) -> String {
        format!("doc-{}{}", id, PAYLOAD_EXT)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WalletError::Io)?;
        }
        Ok(())
    }

    fn write_atomic(&self, target: &Path, content: &str) -> Result<()> {
        self.ensure_dir()?;
        let tmp = self.root.join(format!(".write-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(WalletError::Io)?;
        fs::rename(&tmp, target).map_err(WalletError::Io)?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_index(&self) -> Result<HashMap<Uuid, Metadata>> {
        let index_file = self.root.join(INDEX_FILE);
        if !index_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(index_file).map_err(WalletError::Io)?;
        let index: HashMap<Uuid, Metadata> =
            serde_json::from_str(&content).map_err(WalletError::Serialization)?;
        Ok(index)
    }

    fn save_index(&self, index: &HashMap<Uuid, Metadata>) -> Result<()> {
        let content = serde_json::to_string_pretty(index).map_err(WalletError::Serialization)?;
        self.write_atomic(&self.root.join(INDEX_FILE), &content)
    }

    fn load_log(&self) -> Result<Vec<Transaction>> {
        let log_file = self.root.join(LOG_FILE);
        if !log_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(log_file).map_err(WalletError::Io)?;
        let log: Vec<Transaction> =
            serde_json::from_str(&content).map_err(WalletError::Serialization)?;
        Ok(log)
    }

    fn save_log(&self, log: &[Transaction]) -> Result<()> {
        let content = serde_json::to_string_pretty(log).map_err(WalletError::Serialization)?;
        self.write_atomic(&self.root.join(LOG_FILE), &content)
    }

    fn read_payload(&self, id: &Uuid) -> Result<Option<String>> {
        let path = self.root.join(self.payload_filename(id));
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(WalletError::Io)?;
        Ok(Some(content))
    }

    fn write_payload(&self, id: &Uuid, payload: &str) -> Result<()> {
        let target = self.root.join(self.payload_filename(id));
        self.write_atomic(&target, payload)
    }

    fn delete_payload(&self, id: &Uuid) -> Result<()> {
        let path = self.root.join(self.payload_filename(id));
        if path.exists() {
            fs::remove_file(path).map_err(WalletError::Io)?;
        }
        Ok(())
    }

    fn list_payload_ids(&self) -> Result<Vec<Uuid>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        let entries = fs::read_dir(&self.root).map_err(WalletError::Io)?;

        for entry in entries {
            let entry = entry.map_err(WalletError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                if let Some(middle) = name
                    .strip_prefix("doc-")
                    .and_then(|rest| rest.strip_suffix(PAYLOAD_EXT))
                {
                    if let Ok(id) = Uuid::parse_str(middle) {
                        ids.push(id);
                    }
                }
            }
        }
        Ok(ids)
    }

    fn payload_path(&self, id: &Uuid) -> Result<PathBuf> {
        Ok(self.root.join(self.payload_filename(id)))
    }
}
