mod common;
use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_init_creates_config_and_task_document() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps:"));

    let config_path = fixture.data_dir().join("config.toml");
    assert!(
        config_path.exists(),
        "Config file should be created at {}",
        config_path.display()
    );

    assert!(
        fixture.tasks_path().exists(),
        "Task document should be created at {}",
        fixture.tasks_path().display()
    );

    let document: serde_json::Value = serde_json::from_str(&fixture.read_document()).unwrap();
    assert_eq!(document, serde_json::json!([]));
}

#[test]
fn test_init_is_idempotent_and_keeps_existing_tasks() {
    let fixture = TestFixture::new();

    fixture.command().arg("init").assert().success();
    fixture.add_task("Buy milk", "2 liters", "2024-01-01");

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("found at"));

    assert_eq!(fixture.list_json()["content"]["total_count"], 1);
}

#[test]
fn test_guidance_shown_without_command() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("plandeck init"));

    fixture.command().arg("init").assert().success();

    // After init, guidance switches to quick commands.
    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands:"));
}
