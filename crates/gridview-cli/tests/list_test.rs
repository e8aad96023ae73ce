mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn lists_all_requests_as_json() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("list")
        .arg(fixture.requests_file())
        .arg("--entity")
        .arg("requests")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Parse failed");

    assert_eq!(result["total"], 5);
    assert_eq!(result["effective_mode"], "table");

    let rows = result["rows"].as_array().expect("Expected rows array");
    assert_eq!(rows.len(), 5);
    // Default sort: createdAt descending, newest request first
    assert_eq!(rows[0]["id"], "req-001");
}

#[test]
fn filter_and_search_narrow_to_one_record() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("list")
        .arg(fixture.requests_file())
        .arg("--entity")
        .arg("requests")
        .arg("--filter")
        .arg("status=Archived")
        .arg("--search")
        .arg("kitchen")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run list");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Parse failed");

    assert_eq!(result["total"], 1);
    let rows = result["rows"].as_array().expect("Expected rows array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "req-003");
}

#[test]
fn plain_table_shows_headers_and_summary() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .arg(fixture.requests_file())
        .arg("--entity")
        .arg("requests")
        .arg("--width")
        .arg("1200")
        .assert()
        .success()
        .stdout(predicate::str::contains("STATUS"))
        .stdout(predicate::str::contains("LEAD SOURCE"))
        .stdout(predicate::str::contains("12 Oak Lane"))
        .stdout(predicate::str::contains("5 requests"));
}

#[test]
fn narrow_viewport_hides_trailing_columns() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .arg(fixture.requests_file())
        .arg("--entity")
        .arg("requests")
        .arg("--width")
        .arg("800")
        .assert()
        .success()
        .stdout(predicate::str::contains("STATUS"))
        .stdout(predicate::str::contains("LEAD SOURCE").not());
}

#[test]
fn mobile_viewport_forces_cards() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .arg(fixture.requests_file())
        .arg("--entity")
        .arg("requests")
        .arg("--width")
        .arg("500")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 1"));
}

#[test]
fn cards_view_paginates() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .arg("list")
        .arg(fixture.requests_file())
        .arg("--entity")
        .arg("requests")
        .arg("--view")
        .arg("cards")
        .arg("--page-size")
        .arg("2")
        .arg("--page")
        .arg("1")
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run list");

    assert!(output.status.success());
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).expect("Parse failed");

    assert_eq!(result["effective_mode"], "cards");
    assert_eq!(result["page"], 1);
    assert_eq!(result["page_count"], 3);
    assert_eq!(result["rows"].as_array().map(|r| r.len()), Some(2));
}

#[test]
fn derived_customer_column_renders() {
    let fixture = TestFixture::new();
    let quotes = fixture.write_quotes_file();

    fixture
        .command()
        .arg("list")
        .arg(&quotes)
        .arg("--entity")
        .arg("quotes")
        .arg("--width")
        .arg("1200")
        .assert()
        .success()
        .stdout(predicate::str::contains("Q-2025-0101"))
        .stdout(predicate::str::contains("Dana Reyes"));
}

#[test]
fn unknown_entity_fails_with_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("list")
        .arg(fixture.requests_file())
        .arg("--entity")
        .arg("invoices")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown entity 'invoices'"));
}

#[test]
fn options_lists_distinct_values() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("options")
        .arg(fixture.requests_file())
        .arg("--entity")
        .arg("requests")
        .arg("--field")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived"))
        .stdout(predicate::str::contains("New"))
        .stdout(predicate::str::contains("Quoted"))
        .stdout(predicate::str::contains("3 distinct values"));
}

#[test]
fn entities_lists_builtin_configurations() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("entities")
        .assert()
        .success()
        .stdout(predicate::str::contains("requests"))
        .stdout(predicate::str::contains("quotes"))
        .stdout(predicate::str::contains("projects"));
}
