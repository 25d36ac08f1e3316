use super::doc_store::DocStore;
use super::fs_backend::FsBackend;
use std::path::Path;

pub type FileStore = DocStore<FsBackend>;

impl FileStore {
    /// Open (or lazily create on first write) a wallet store rooted at
    /// `data_dir`.
    pub fn open(data_dir: &Path) -> Self {
        DocStore::with_backend(FsBackend::new(data_dir.to_path_buf()))
    }
}
