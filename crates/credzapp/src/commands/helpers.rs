use super::ListedDocument;
use crate::error::{Result, WalletError};
use crate::store::DataStore;

/// All documents with their canonical positions assigned.
///
/// **Canonical ordering**: newest issuance first, ties broken by name (case
/// folded) and then by id, so positions are deterministic and stable across
/// invocations. Filters and searches never renumber the list: a document
/// keeps the position it has in the full, unfiltered view.
pub fn canonical_documents<S: DataStore>(store: &S) -> Result<Vec<ListedDocument>> {
    let mut documents = store.list_documents()?;
    documents.sort_by(|a, b| {
        b.metadata
            .issued_at
            .cmp(&a.metadata.issued_at)
            .then_with(|| {
                a.metadata
                    .name
                    .to_lowercase()
                    .cmp(&b.metadata.name.to_lowercase())
            })
            .then_with(|| a.metadata.id.cmp(&b.metadata.id))
    });
    Ok(documents
        .into_iter()
        .enumerate()
        .map(|(i, document)| ListedDocument {
            document,
            position: i + 1,
        })
        .collect())
}

/// A user input selecting a document: a canonical position or a name search
/// term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocSelector {
    Position(usize),
    Name(String),
}

impl std::fmt::Display for DocSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocSelector::Position(n) => write!(f, "{}", n),
            DocSelector::Name(term) => write!(f, "\"{}\"", term),
        }
    }
}

/// Resolve selectors against the canonical list.
///
/// Positions must exist. Name terms match case-insensitively against the
/// document name and must be unique: zero matches and ambiguous matches are
/// both errors, so destructive commands never act on a guess. Duplicate
/// resolutions are dropped, first occurrence wins.
pub fn resolve_selectors<S: DataStore>(
    store: &S,
    selectors: &[DocSelector],
) -> Result<Vec<ListedDocument>> {
    let listed = canonical_documents(store)?;
    let mut resolved: Vec<ListedDocument> = Vec::new();

    for selector in selectors {
        let found = match selector {
            DocSelector::Position(n) => listed
                .iter()
                .find(|d| d.position == *n)
                .ok_or_else(|| {
                    WalletError::Api(format!("Index {} not found in the wallet", n))
                })?,
            DocSelector::Name(term) => {
                let term_lower = term.to_lowercase();
                let matches: Vec<&ListedDocument> = listed
                    .iter()
                    .filter(|d| d.document.metadata.name.to_lowercase().contains(&term_lower))
                    .collect();
                match matches.len() {
                    0 => {
                        return Err(WalletError::Api(format!(
                            "No document found matching \"{}\"",
                            term
                        )))
                    }
                    1 => matches[0],
                    n => {
                        return Err(WalletError::Api(format!(
                            "Term \"{}\" matches {} documents. Please be more specific.",
                            term, n
                        )))
                    }
                }
            }
        };

        if !resolved
            .iter()
            .any(|d| d.document.metadata.id == found.document.metadata.id)
        {
            resolved.push(found.clone());
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentCategory;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::default()
            .with_document("PID", DocumentCategory::Government, "Utopia Registry")
            .with_document("Driving Licence", DocumentCategory::Travel, "Utopia DMV")
            .with_document("Diploma", DocumentCategory::Education, "Utopia University")
    }

    #[test]
    fn canonical_positions_are_newest_first() {
        let fixture = fixture();
        let listed = canonical_documents(&fixture.store).unwrap();

        assert_eq!(listed.len(), 3);
        // Documents were saved in sequence, so the last one is newest.
        assert_eq!(listed[0].document.metadata.name, "Diploma");
        assert_eq!(listed[0].position, 1);
        assert_eq!(listed[2].document.metadata.name, "PID");
        assert_eq!(listed[2].position, 3);
    }

    #[test]
    fn resolve_by_position() {
        let fixture = fixture();
        let resolved =
            resolve_selectors(&fixture.store, &[DocSelector::Position(2)]).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].document.metadata.name, "Driving Licence");
    }

    #[test]
    fn resolve_unknown_position_errors() {
        let fixture = fixture();
        let result = resolve_selectors(&fixture.store, &[DocSelector::Position(9)]);
        assert!(matches!(result, Err(WalletError::Api(_))));
    }

    #[test]
    fn resolve_by_unique_name() {
        let fixture = fixture();
        let resolved =
            resolve_selectors(&fixture.store, &[DocSelector::Name("diploma".into())]).unwrap();
        assert_eq!(resolved[0].document.metadata.name, "Diploma");
    }

    #[test]
    fn resolve_ambiguous_name_errors() {
        // "i" appears in all three names.
        let fixture = fixture();
        let result = resolve_selectors(&fixture.store, &[DocSelector::Name("i".into())]);
        assert!(matches!(result, Err(WalletError::Api(_))));
    }

    #[test]
    fn resolve_missing_name_errors() {
        let fixture = fixture();
        let result = resolve_selectors(&fixture.store, &[DocSelector::Name("passport".into())]);
        assert!(matches!(result, Err(WalletError::Api(_))));
    }

    #[test]
    fn resolve_deduplicates_repeated_selectors() {
        let fixture = fixture();
        let resolved = resolve_selectors(
            &fixture.store,
            &[
                DocSelector::Position(1),
                DocSelector::Position(1),
                DocSelector::Position(2),
            ],
        )
        .unwrap();
        assert_eq!(resolved.len(), 2);
    }
}
