mod common;
use common::TestFixture;

#[test]
fn test_done_toggles_and_toggles_back() {
    let fixture = TestFixture::new();

    let added = fixture.add_task("Buy milk", "2 liters", "2024-01-01");
    let id = added["content"]["id"].as_str().unwrap().to_string();

    // First toggle: open -> done
    let output = fixture
        .command()
        .args(["done", id.as_str(), "--format", "json"])
        .output()
        .expect("Failed to run done");
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["content"]["action"], "completed");
    assert_eq!(result["badge"]["label"], "Task completed");

    let listed = fixture.list_json();
    assert_eq!(listed["content"]["tasks"][0]["is_completed"], true);
    assert_eq!(listed["content"]["completed_count"], 1);

    // Second toggle restores the original state.
    let output = fixture
        .command()
        .args(["done", id.as_str(), "--format", "json"])
        .output()
        .expect("Failed to run done");
    assert!(output.status.success());

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["content"]["action"], "reopened");
    assert_eq!(result["badge"]["label"], "Task reopened");

    let listed = fixture.list_json();
    assert_eq!(listed["content"]["tasks"][0]["is_completed"], false);
    assert_eq!(listed["content"]["completed_count"], 0);
}

#[test]
fn test_done_unknown_id_leaves_collection_unchanged() {
    let fixture = TestFixture::new();
    fixture.add_task("Buy milk", "2 liters", "2024-01-01");

    let output = fixture
        .command()
        .args(["done", "no-such-id", "--format", "json"])
        .output()
        .expect("Failed to run done");
    assert!(
        output.status.success(),
        "lookup miss is not a hard failure"
    );

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["badge"]["level"], "warning");
    assert!(result["content"]["task"].is_null());

    let listed = fixture.list_json();
    assert_eq!(listed["content"]["total_count"], 1);
    assert_eq!(listed["content"]["tasks"][0]["is_completed"], false);
}

#[test]
fn test_done_only_touches_the_matching_task() {
    let fixture = TestFixture::new();

    fixture.add_task("first", "d", "2024-01-01");
    let second = fixture.add_task("second", "d", "2024-01-02");
    let id = second["content"]["id"].as_str().unwrap().to_string();

    fixture.command().args(["done", id.as_str()]).assert().success();

    let listed = fixture.list_json();
    let tasks = listed["content"]["tasks"].as_array().unwrap();
    assert_eq!(tasks[0]["is_completed"], false);
    assert_eq!(tasks[1]["is_completed"], true);
}
