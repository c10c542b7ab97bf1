//! End-to-end tests for the `name` command.

mod fixtures;

use fixtures::*;

#[test]
fn test_name_exact_match() {
    let env = TestEnv::new();
    let result = env.run_json(&["name", "#ff6347", "--json"]);

    assert_eq!(result["input"], "#ff6347");
    assert_eq!(result["name"], "Tomato");
    assert_eq!(result["confidence"], 100);
    assert_eq!(result["level"], "high");
    assert_eq!(result["distance"], 0.0);
    assert_eq!(result["dataset_size"], 140);
}

#[test]
fn test_name_tie_keeps_first_entry() {
    let env = TestEnv::new();
    // Aqua and Cyan share a value; Aqua comes first
    let result = env.run_json(&["name", "#00ffff", "--json"]);
    assert_eq!(result["name"], "Aqua");

    let result = env.run_json(&["name", "#ff00ff", "--json"]);
    assert_eq!(result["name"], "Fuchsia");
}

#[test]
fn test_name_empty_dataset_is_unknown() {
    let env = TestEnv::new();
    let dataset = env.write_dataset("empty.json", "[]");

    let result = env.run_json(&["name", "#123456", "--json", "--dataset", dataset.to_str().unwrap()]);
    assert_eq!(result["name"], "Unknown");
    assert_eq!(result["confidence"], 0);
    assert_eq!(result["level"], "low");
    assert!(result.get("distance").is_none());
    assert_eq!(result["dataset_size"], 0);
}

#[test]
fn test_name_broken_dataset_falls_back_to_builtin() {
    let env = TestEnv::new();
    let dataset = env.write_dataset("broken.json", "{ not json");

    let result = env.run_json(&["name", "#ff0000", "--json", "--dataset", dataset.to_str().unwrap()]);
    assert_eq!(result["name"], "Red");
    assert_eq!(result["dataset_size"], 140);
}

#[test]
fn test_name_human_readable() {
    let env = TestEnv::new();
    let output = env.run(&["name", "rgb(255, 99, 71)"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Name:       Tomato"));
    assert!(stdout.contains("Confidence: 100% (high)"));
}

#[test]
fn test_name_invalid_color() {
    let env = TestEnv::new();
    let output = env.run(&["name", "blue"]);
    assert_eq!(output.status.code(), Some(1));
}
