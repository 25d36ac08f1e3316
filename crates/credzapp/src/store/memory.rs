use super::doc_store::DocStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = DocStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        DocStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{CredentialFormat, Document, DocumentCategory, DocumentState, Metadata};
    use crate::store::DataStore;
    use crate::transactions::{Transaction, TransactionKind, TransactionStatus};
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn save(&mut self, metadata: Metadata) {
            let document = Document::new(metadata, r#"{"credential":"opaque"}"#);
            self.store.save_document(&document).unwrap();
        }

        pub fn with_document(
            mut self,
            name: &str,
            category: DocumentCategory,
            issuer: &str,
        ) -> Self {
            self.save(Metadata::new(
                name,
                "org.example.generic.1",
                CredentialFormat::SdJwtVc,
                category,
                issuer,
            ));
            self
        }

        pub fn with_expiring_document(mut self, name: &str, days_left: i64) -> Self {
            let mut metadata = Metadata::new(
                name,
                "org.iso.18013.5.1.mDL",
                CredentialFormat::MsoMdoc,
                DocumentCategory::Travel,
                "Utopia DMV",
            );
            metadata.valid_until = Some(Utc::now() + Duration::days(days_left));
            self.save(metadata);
            self
        }

        pub fn with_expired_document(mut self, name: &str) -> Self {
            let mut metadata = Metadata::new(
                name,
                "org.iso.18013.5.1.mDL",
                CredentialFormat::MsoMdoc,
                DocumentCategory::Travel,
                "Utopia DMV",
            );
            metadata.valid_until = Some(Utc::now() - Duration::days(1));
            self.save(metadata);
            self
        }

        pub fn with_revoked_document(mut self, name: &str) -> Self {
            let mut metadata = Metadata::new(
                name,
                "org.example.generic.1",
                CredentialFormat::SdJwtVc,
                DocumentCategory::Finance,
                "Utopia Bank",
            );
            metadata.state = DocumentState::Revoked;
            self.save(metadata);
            self
        }

        pub fn with_pending_document(mut self, name: &str) -> Self {
            let mut metadata = Metadata::new(
                name,
                "org.example.generic.1",
                CredentialFormat::SdJwtVc,
                DocumentCategory::Education,
                "Utopia University",
            );
            metadata.state = DocumentState::Pending;
            self.save(metadata);
            self
        }

        pub fn with_transaction(
            mut self,
            document_name: &str,
            party: &str,
            kind: TransactionKind,
            status: TransactionStatus,
        ) -> Self {
            let tx = Transaction::new(document_name, party, kind, status);
            self.store.record_transaction(&tx).unwrap();
            self
        }
    }
}
