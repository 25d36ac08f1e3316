use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn credz_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("credz").unwrap();
    cmd.env("CREDZ_DATA", data_dir.path().as_os_str());
    cmd.env("NO_COLOR", "1");
    cmd
}

fn add_document(data_dir: &TempDir, name: &str, issuer: &str, category: &str) {
    credz_cmd(data_dir)
        .args(["add", name, "--issuer", issuer, "--category", category])
        .write_stdin(format!(r#"{{"credential":"{}"}}"#, name))
        .assert()
        .success()
        .stdout(predicate::str::contains("Added"));
}

#[test]
fn test_add_list_filter_workflow() {
    let data_dir = TempDir::new().unwrap();

    // 1. Init
    credz_cmd(&data_dir)
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized wallet"));

    // 2. Add three documents
    add_document(&data_dir, "PID", "Utopia Registry", "government");
    add_document(&data_dir, "Driving Licence", "Utopia DMV", "travel");
    add_document(&data_dir, "Library Card", "City Library", "other");

    // 3. Plain list shows all three
    credz_cmd(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("PID")
                .and(predicate::str::contains("Driving Licence"))
                .and(predicate::str::contains("Library Card")),
        );

    // 4. Category filter narrows
    credz_cmd(&data_dir)
        .args(["list", "--category", "travel"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Driving Licence")
                .and(predicate::str::contains("Library Card").not()),
        );

    // 5. Search matches the issuer tag
    credz_cmd(&data_dir)
        .args(["list", "--search", "registry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PID").and(predicate::str::contains("DMV").not()));

    // 6. Facets show per-category counts
    credz_cmd(&data_dir)
        .args(["list", "--facets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category").and(predicate::str::contains("Travel")));
}

#[test]
fn test_view_remove_and_log() {
    let data_dir = TempDir::new().unwrap();

    add_document(&data_dir, "PID", "Utopia Registry", "government");
    add_document(&data_dir, "Driving Licence", "Utopia DMV", "travel");

    // View by name prints the stored payload.
    credz_cmd(&data_dir)
        .args(["view", "driving"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"credential":"Driving Licence"}"#));

    // Remove the newest document (position 1 = Driving Licence).
    credz_cmd(&data_dir)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 document"));

    credz_cmd(&data_dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Driving Licence").not());

    // The log still remembers both issuances.
    credz_cmd(&data_dir)
        .args(["log"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Issuance")
                .and(predicate::str::contains("Utopia DMV"))
                .and(predicate::str::contains("Utopia Registry")),
        );

    // Kind filter on the log.
    credz_cmd(&data_dir)
        .args(["log", "--kind", "presentation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions recorded."));
}

#[test]
fn test_unknown_index_fails_with_message() {
    let data_dir = TempDir::new().unwrap();

    add_document(&data_dir, "PID", "Utopia Registry", "government");

    credz_cmd(&data_dir)
        .args(["remove", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 9 not found"));
}

#[test]
fn test_naked_execution_lists() {
    let data_dir = TempDir::new().unwrap();

    credz_cmd(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents found."));
}

#[test]
fn test_bad_category_is_an_error() {
    let data_dir = TempDir::new().unwrap();

    credz_cmd(&data_dir)
        .args(["add", "Thing", "--issuer", "Someone", "--category", "passport"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}
