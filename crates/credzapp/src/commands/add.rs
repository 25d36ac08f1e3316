use super::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, WalletError};
use crate::model::{CredentialFormat, Document, DocumentCategory, DocumentState, Metadata};
use crate::store::DataStore;
use crate::transactions::{Transaction, TransactionKind, TransactionStatus};
use chrono::{DateTime, Utc};

/// Input for adding a document to the wallet.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub name: String,
    pub doc_type: String,
    pub format: CredentialFormat,
    pub category: DocumentCategory,
    pub issuer: String,
    pub valid_until: Option<DateTime<Utc>>,
    pub pending: bool,
    /// The opaque credential payload, stored verbatim.
    pub payload: String,
}

pub fn run<S: DataStore>(store: &mut S, new: NewDocument) -> Result<CmdResult> {
    let name = new.name.trim();
    if name.is_empty() {
        return Err(WalletError::Api("Document name cannot be empty".to_string()));
    }
    let issuer = new.issuer.trim();
    if issuer.is_empty() {
        return Err(WalletError::Api("Issuer cannot be empty".to_string()));
    }

    let mut metadata = Metadata::new(name, new.doc_type, new.format, new.category, issuer);
    metadata.valid_until = new.valid_until;
    if new.pending {
        metadata.state = DocumentState::Pending;
    }

    let document = Document::new(metadata, new.payload);
    store.save_document(&document)?;

    // Every addition is an issuance event in the log.
    let tx = Transaction::new(
        &document.metadata.name,
        &document.metadata.issuer,
        TransactionKind::Issuance,
        TransactionStatus::Completed,
    );
    store.record_transaction(&tx)?;

    let affected = helpers::canonical_documents(store)?
        .into_iter()
        .filter(|d| d.document.metadata.id == document.metadata.id)
        .collect();

    let mut result = CmdResult::default().with_affected(affected);
    result.add_message(CmdMessage::success(format!(
        "Added \"{}\" from {}",
        document.metadata.name, document.metadata.issuer
    )));
    Ok(result)
}
