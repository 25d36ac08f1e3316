//! Transaction log support.
//!
//! Every issuance into and presentation out of the wallet leaves a log
//! entry. The log is append-only: entries record what happened and when,
//! and are never edited afterwards. Browsing the log goes through the same
//! filter engine as the document list (see [`crate::commands::log`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// A credential was issued into the wallet.
    Issuance,
    /// A credential was presented to a relying party.
    Presentation,
}

impl TransactionKind {
    pub const ALL: &'static [TransactionKind] =
        &[TransactionKind::Issuance, TransactionKind::Presentation];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Issuance => "Issuance",
            TransactionKind::Presentation => "Presentation",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            TransactionKind::Issuance => "issuance",
            TransactionKind::Presentation => "presentation",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        TransactionKind::ALL
            .iter()
            .find(|k| k.slug() == needle)
            .copied()
            .ok_or_else(|| format!("Unknown kind: {} (expected issuance or presentation)", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Failed,
}

impl TransactionStatus {
    pub const ALL: &'static [TransactionStatus] =
        &[TransactionStatus::Completed, TransactionStatus::Failed];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Failed => "Failed",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        TransactionStatus::ALL
            .iter()
            .find(|st| st.slug() == needle)
            .copied()
            .ok_or_else(|| format!("Unknown status: {} (expected completed or failed)", s))
    }
}

/// A single entry in the transaction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    /// Name of the document involved at the time of the event.
    pub document_name: String,
    /// The counterparty: the issuer for issuances, the relying party for
    /// presentations.
    pub party: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub occurred_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        document_name: impl Into<String>,
        party: impl Into<String>,
        kind: TransactionKind,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_name: document_name.into(),
            party: party.into(),
            kind,
            status,
            occurred_at: Utc::now(),
        }
    }

    /// The strings log search matches against: document name and party.
    pub fn search_tags(&self) -> Vec<String> {
        vec![self.document_name.clone(), self.party.clone()]
    }
}
