use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn folio_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("folio"))
}

#[test]
fn test_query_lists_seeded_authors() {
    folio_cmd()
        .arg("query")
        .arg("{ authors { id name } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("J. K. Rowling"))
        .stdout(predicate::str::contains("J. R. R. Tolkien"))
        .stdout(predicate::str::contains("Brent Weeks"));
}

#[test]
fn test_query_resolves_nested_books() {
    folio_cmd()
        .arg("query")
        .arg("{ authors { name books { name } } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Two Towers"))
        .stdout(predicate::str::contains("Beyond the Shadows"));
}

#[test]
fn test_query_with_variables() {
    folio_cmd()
        .arg("query")
        .arg("query($id: Int!) { author(id: $id) { name } }")
        .arg("--variables")
        .arg(r#"{"id": 2}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("J. R. R. Tolkien"));
}

#[test]
fn test_mutate_adds_fourth_author() {
    folio_cmd()
        .arg("mutate")
        .arg(r#"addAuthor(name: "Brandon Sanderson") { id name }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Brandon Sanderson"))
        .stdout(predicate::str::contains("\"id\": 4"));
}

#[test]
fn test_mutate_missing_argument_reports_errors() {
    folio_cmd()
        .arg("mutate")
        .arg("addAuthor { id }")
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_schema_prints_sdl() {
    folio_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("authorId"))
        .stdout(predicate::str::contains("addBook"));
}

#[test]
fn test_explicit_config_file_must_exist() {
    folio_cmd()
        .arg("--config")
        .arg("/does/not/exist.yml")
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_file_is_parsed() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".folio.yml");
    std::fs::write(&config_path, "server:\n  port: 4100\n").unwrap();

    // A valid config file should not interfere with non-server commands.
    folio_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("query")
        .arg("{ books { id } }")
        .assert()
        .success()
        .stdout(predicate::str::contains("books"));
}
