//! End-to-end library flow: a file-backed wallet driven through the API
//! facade, exercising the full add → browse → filter → remove cycle.

use credzapp::api::{DocumentQuery, LogQuery, NewDocument, SortField, WalletApi};
use credzapp::filters::SortOrder;
use credzapp::model::{CredentialFormat, DocumentCategory};
use credzapp::store::fs::FileStore;
use tempfile::TempDir;

fn new_document(name: &str, category: DocumentCategory, issuer: &str) -> NewDocument {
    NewDocument {
        name: name.to_string(),
        doc_type: "org.example.generic.1".to_string(),
        format: CredentialFormat::SdJwtVc,
        category,
        issuer: issuer.to_string(),
        valid_until: None,
        pending: false,
        payload: format!(r#"{{"credential":"{}"}}"#, name),
    }
}

fn seeded_api() -> (TempDir, WalletApi<FileStore>) {
    let dir = TempDir::new().unwrap();
    let mut api = WalletApi::new(FileStore::open(dir.path()));

    api.add_document(new_document(
        "PID",
        DocumentCategory::Government,
        "Utopia Registry",
    ))
    .unwrap();
    api.add_document(new_document(
        "Driving Licence",
        DocumentCategory::Travel,
        "Utopia DMV",
    ))
    .unwrap();
    api.add_document(new_document(
        "Library Card",
        DocumentCategory::Other,
        "City Library",
    ))
    .unwrap();

    (dir, api)
}

fn listed_names(api: &WalletApi<FileStore>, query: &DocumentQuery) -> Vec<String> {
    api.list_documents(query)
        .unwrap()
        .listed
        .iter()
        .map(|d| d.document.metadata.name.clone())
        .collect()
}

#[test]
fn full_browse_flow() {
    let (_dir, api) = seeded_api();

    // Default listing: newest first.
    assert_eq!(
        listed_names(&api, &DocumentQuery::default()),
        vec!["Library Card", "Driving Licence", "PID"]
    );

    // Search hits name and issuer tags.
    let query = DocumentQuery {
        search: Some("utopia".into()),
        ..Default::default()
    };
    assert_eq!(
        listed_names(&api, &query),
        vec!["Driving Licence", "PID"]
    );

    // Category filter plus ascending name sort.
    let query = DocumentQuery {
        categories: vec![DocumentCategory::Travel, DocumentCategory::Other],
        sort: SortField::Name,
        order: SortOrder::Ascending,
        ..Default::default()
    };
    assert_eq!(
        listed_names(&api, &query),
        vec!["Driving Licence", "Library Card"]
    );
}

#[test]
fn facets_and_log_reflect_additions() {
    let (_dir, api) = seeded_api();

    let result = api.list_documents(&DocumentQuery::default()).unwrap();
    let government = result
        .facets
        .iter()
        .find(|f| f.item_id == "category:government")
        .unwrap();
    assert_eq!(government.count, 1);

    // Three additions → three issuance log entries, newest first.
    let log = api.transactions(&LogQuery::default()).unwrap();
    assert_eq!(log.transactions.len(), 3);
    assert_eq!(log.transactions[0].party, "City Library");
}

#[test]
fn removal_persists_across_reopen() {
    let (dir, mut api) = seeded_api();

    // Position 1 is the newest document (Library Card).
    api.remove_documents(&["1"]).unwrap();

    // Reopen the store from disk; the removal stuck.
    let api = WalletApi::new(FileStore::open(dir.path()));
    let names = listed_names(&api, &DocumentQuery::default());
    assert_eq!(names, vec!["Driving Licence", "PID"]);
}

#[test]
fn view_by_name_returns_payload() {
    let (_dir, api) = seeded_api();

    let result = api.view_documents(&["library"]).unwrap();
    assert_eq!(result.listed.len(), 1);
    assert_eq!(
        result.listed[0].document.payload,
        r#"{"credential":"Library Card"}"#
    );
}
