//! # Domain Model: Wallet Documents
//!
//! This module defines the core data structures for credz: [`Document`],
//! [`Metadata`], and the closed vocabularies they draw from
//! ([`DocumentCategory`], [`DocumentState`], [`CredentialFormat`]).
//!
//! ## Documents Are Opaque
//!
//! A document is whatever an issuer handed over: an mdoc, an SD-JWT VC, a
//! blob. Credz never interprets the payload. Everything the organizer needs
//! for browsing lives in [`Metadata`]:
//!
//! - **Identity**: a UUID, stable for the document's lifetime.
//! - **Display**: human-readable name and the issuer that produced it.
//! - **Classification**: a category from a fixed set, the raw document type
//!   string, and the credential format.
//! - **Lifecycle**: issuance timestamp, optional expiry, and a state
//!   (issued / pending / revoked).
//!
//! ## Search Tags
//!
//! List search matches against a document's *search tags*, not its payload.
//! The tags are the document name and the issuer name, the two things a
//! holder actually remembers about a credential. See
//! [`Metadata::search_tags`].
//!
//! ## Expiry
//!
//! `valid_until` is optional: plenty of credentials never expire. The expiry
//! helpers ([`Metadata::is_expired`], [`Metadata::expires_within`]) take the
//! reference instant as a parameter so callers (and tests) control the clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credential wire formats the wallet stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialFormat {
    /// ISO/IEC 18013-5 mobile document (CBOR/COSE).
    MsoMdoc,
    /// Selective-disclosure JWT verifiable credential.
    SdJwtVc,
}

impl CredentialFormat {
    pub fn label(&self) -> &'static str {
        match self {
            CredentialFormat::MsoMdoc => "mDoc",
            CredentialFormat::SdJwtVc => "SD-JWT VC",
        }
    }
}

impl std::str::FromStr for CredentialFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mso-mdoc" | "mdoc" => Ok(CredentialFormat::MsoMdoc),
            "sd-jwt-vc" | "sd-jwt" => Ok(CredentialFormat::SdJwtVc),
            other => Err(format!(
                "Unknown credential format: {} (expected mso-mdoc or sd-jwt-vc)",
                other
            )),
        }
    }
}

/// The fixed set of wallet categories a document can belong to.
///
/// Categories are a closed vocabulary: filters are built for every category
/// up front so empty ones still show up (with a zero count) in facet output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentCategory {
    Government,
    Travel,
    Finance,
    Education,
    Health,
    SocialSecurity,
    Retail,
    Other,
}

impl DocumentCategory {
    pub const ALL: &'static [DocumentCategory] = &[
        DocumentCategory::Government,
        DocumentCategory::Travel,
        DocumentCategory::Finance,
        DocumentCategory::Education,
        DocumentCategory::Health,
        DocumentCategory::SocialSecurity,
        DocumentCategory::Retail,
        DocumentCategory::Other,
    ];

    /// Display label for lists and facet headers.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::Government => "Government",
            DocumentCategory::Travel => "Travel",
            DocumentCategory::Finance => "Finance",
            DocumentCategory::Education => "Education",
            DocumentCategory::Health => "Health",
            DocumentCategory::SocialSecurity => "Social security",
            DocumentCategory::Retail => "Retail",
            DocumentCategory::Other => "Other",
        }
    }

    /// Stable kebab-case identifier used in filter item ids and CLI flags.
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentCategory::Government => "government",
            DocumentCategory::Travel => "travel",
            DocumentCategory::Finance => "finance",
            DocumentCategory::Education => "education",
            DocumentCategory::Health => "health",
            DocumentCategory::SocialSecurity => "social-security",
            DocumentCategory::Retail => "retail",
            DocumentCategory::Other => "other",
        }
    }
}

impl std::str::FromStr for DocumentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        DocumentCategory::ALL
            .iter()
            .find(|c| c.slug() == needle)
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Lifecycle state of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentState {
    /// Fully issued and usable.
    Issued,
    /// Issuance started but the credential has not arrived yet
    /// (deferred issuance).
    Pending,
    /// The issuer has revoked the credential.
    Revoked,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self::Issued
    }
}

impl DocumentState {
    pub const ALL: &'static [DocumentState] = &[
        DocumentState::Issued,
        DocumentState::Pending,
        DocumentState::Revoked,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentState::Issued => "Issued",
            DocumentState::Pending => "Pending",
            DocumentState::Revoked => "Revoked",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DocumentState::Issued => "issued",
            DocumentState::Pending => "pending",
            DocumentState::Revoked => "revoked",
        }
    }
}

impl std::str::FromStr for DocumentState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        DocumentState::ALL
            .iter()
            .find(|st| st.slug() == needle)
            .copied()
            .ok_or_else(|| format!("Unknown state: {} (expected issued, pending or revoked)", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: Uuid,
    /// Human-readable document name (e.g. "Mobile Driving Licence").
    pub name: String,
    /// Raw document type string as issued (e.g. "org.iso.18013.5.1.mDL").
    pub doc_type: String,
    pub format: CredentialFormat,
    pub category: DocumentCategory,
    /// Display name of the issuing authority.
    pub issuer: String,
    pub issued_at: DateTime<Utc>,
    /// Expiry instant; `None` for credentials that never expire.
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub state: DocumentState,
}

impl Metadata {
    pub fn new(
        name: impl Into<String>,
        doc_type: impl Into<String>,
        format: CredentialFormat,
        category: DocumentCategory,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            doc_type: doc_type.into(),
            format,
            category,
            issuer: issuer.into(),
            issued_at: Utc::now(),
            valid_until: None,
            state: DocumentState::Issued,
        }
    }

    /// The strings list search matches against: document name and issuer.
    pub fn search_tags(&self) -> Vec<String> {
        vec![self.name.clone(), self.issuer.clone()]
    }

    /// Whether the document's expiry lies at or before `now`.
    /// Documents without an expiry never count as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.valid_until, Some(until) if until <= now)
    }

    /// Whether the document is still valid at `now` but expires within the
    /// next `days` days. Documents without an expiry never match.
    pub fn expires_within(&self, now: DateTime<Utc>, days: i64) -> bool {
        match self.valid_until {
            Some(until) => until > now && until <= now + Duration::days(days),
            None => false,
        }
    }
}

/// A stored wallet document: browsing metadata plus the opaque credential
/// payload exactly as the issuer produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub metadata: Metadata,
    pub payload: String,
}

impl Document {
    pub fn new(metadata: Metadata, payload: impl Into<String>) -> Self {
        Self {
            metadata,
            payload: payload.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metadata {
        Metadata::new(
            "Mobile Driving Licence",
            "org.iso.18013.5.1.mDL",
            CredentialFormat::MsoMdoc,
            DocumentCategory::Travel,
            "Utopia DMV",
        )
    }

    #[test]
    fn new_metadata_defaults() {
        let meta = sample();
        assert_eq!(meta.state, DocumentState::Issued);
        assert!(meta.valid_until.is_none());
    }

    #[test]
    fn search_tags_are_name_and_issuer() {
        let meta = sample();
        assert_eq!(
            meta.search_tags(),
            vec!["Mobile Driving Licence".to_string(), "Utopia DMV".to_string()]
        );
    }

    #[test]
    fn expiry_without_valid_until_never_fires() {
        let meta = sample();
        let now = Utc::now();
        assert!(!meta.is_expired(now));
        assert!(!meta.expires_within(now, 365));
    }

    #[test]
    fn is_expired_at_boundary() {
        let mut meta = sample();
        let now = Utc::now();
        meta.valid_until = Some(now);
        assert!(meta.is_expired(now));

        meta.valid_until = Some(now + Duration::seconds(1));
        assert!(!meta.is_expired(now));
    }

    #[test]
    fn expires_within_window() {
        let mut meta = sample();
        let now = Utc::now();
        meta.valid_until = Some(now + Duration::days(10));

        assert!(meta.expires_within(now, 30));
        assert!(!meta.expires_within(now, 7));

        // Already expired documents are not "expiring".
        meta.valid_until = Some(now - Duration::days(1));
        assert!(!meta.expires_within(now, 30));
    }

    #[test]
    fn category_slug_roundtrip() {
        for category in DocumentCategory::ALL {
            let parsed: DocumentCategory = category.slug().parse().unwrap();
            assert_eq!(parsed, *category);
        }
        assert!("passport".parse::<DocumentCategory>().is_err());
    }

    #[test]
    fn state_parse_is_case_insensitive() {
        assert_eq!("Revoked".parse::<DocumentState>().unwrap(), DocumentState::Revoked);
        assert!("lost".parse::<DocumentState>().is_err());
    }

    #[test]
    fn format_parse_accepts_aliases() {
        assert_eq!(
            "mdoc".parse::<CredentialFormat>().unwrap(),
            CredentialFormat::MsoMdoc
        );
        assert_eq!(
            "sd-jwt".parse::<CredentialFormat>().unwrap(),
            CredentialFormat::SdJwtVc
        );
    }

    #[test]
    fn metadata_serialization_roundtrip() {
        let meta = sample();
        let json = serde_json::to_string(&meta).unwrap();
        let loaded: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, meta);
    }

    #[test]
    fn metadata_deserializes_without_state_or_expiry() {
        // Entries written before the state/expiry fields existed.
        let meta = sample();
        let mut value = serde_json::to_value(&meta).unwrap();
        value.as_object_mut().unwrap().remove("state");
        value.as_object_mut().unwrap().remove("valid_until");

        let loaded: Metadata = serde_json::from_value(value).unwrap();
        assert_eq!(loaded.state, DocumentState::Issued);
        assert!(loaded.valid_until.is_none());
    }
}
