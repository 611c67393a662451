mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_list_empty_collection() {
    let fixture = TestFixture::new();

    let result = fixture.list_json();
    let tasks = result["content"]["tasks"].as_array().unwrap();

    assert_eq!(tasks.len(), 0);
    assert_eq!(result["content"]["total_count"], 0);
    assert!(
        result.get("badge").is_none(),
        "listing carries no status badge"
    );

    // Empty state points the user at 'add'.
    let suggestions = result["suggestions"].as_array().unwrap();
    assert!(!suggestions.is_empty());
    assert!(suggestions[0]["command"]
        .as_str()
        .unwrap()
        .contains("plandeck add"));
}

#[test]
fn test_list_preserves_insertion_order() {
    let fixture = TestFixture::new();

    for (title, date) in [
        ("first", "2024-01-01"),
        ("second", "2024-01-02"),
        ("third", "2024-01-03"),
    ] {
        fixture.add_task(title, "d", date);
    }

    let result = fixture.list_json();
    let titles: Vec<&str> = result["content"]["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn test_list_plain_format_renders_rows() {
    let fixture = TestFixture::new();
    fixture.add_task("Buy milk", "2 liters", "2024-01-01");

    fixture
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("1 task(s), 0 completed"));
}

#[test]
fn test_list_fails_loudly_on_corrupt_document() {
    let fixture = TestFixture::new();
    fixture.add_task("Buy milk", "2 liters", "2024-01-01");

    std::fs::write(fixture.tasks_path(), "{ not json").unwrap();

    fixture
        .command()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt task document"));

    // The broken document must not be rewritten.
    assert_eq!(fixture.read_document(), "{ not json");
}
