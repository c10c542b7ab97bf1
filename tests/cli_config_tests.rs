//! End-to-end tests for the `config` commands.

mod fixtures;

use fixtures::*;

#[test]
fn test_config_show_defaults() {
    let env = TestEnv::new();
    let result = env.run_json(&["config", "show", "--json"]);

    assert!(result["paths"].get("dataset").is_none());
    assert_eq!(
        result["paths"]["config_dir"],
        env.config_dir().to_string_lossy().as_ref()
    );
    assert_eq!(result["history"]["enabled"], true);
    assert_eq!(result["history"]["max_size"], 10);
    assert_eq!(result["palette"]["default_scheme"], "monochromatic");
}

#[test]
fn test_config_show_human_readable() {
    let env = TestEnv::new();
    let output = env.run(&["config", "show"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PixelHue Configuration"));
    assert!(stdout.contains("(built-in CSS colors)"));
}

#[test]
fn test_config_set_persists() {
    let env = TestEnv::new();
    let output = env.run(&[
        "config",
        "set",
        "--history-size",
        "25",
        "--default-scheme",
        "analogous",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration updated successfully."));
    assert!(env.config_dir().join("config.toml").exists());

    let result = env.run_json(&["config", "show", "--json"]);
    assert_eq!(result["history"]["max_size"], 25);
    assert_eq!(result["palette"]["default_scheme"], "analogous");
}

#[test]
fn test_config_set_dataset() {
    let env = TestEnv::new();
    let dataset = env.write_dataset("primaries.json", PRIMARY_DATASET);

    let output = env.run(&["config", "set", "--dataset", dataset.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let result = env.run_json(&["name", "#0000fe", "--json"]);
    assert_eq!(result["name"], "Blue");
    assert_eq!(result["dataset_size"], 4);
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let env = TestEnv::new();

    let output = env.run(&["config", "set"]);
    assert_eq!(output.status.code(), Some(1));

    let output = env.run(&["config", "set", "--history-size", "0"]);
    assert_eq!(output.status.code(), Some(1));

    let output = env.run(&["config", "set", "--history-size", "101"]);
    assert_eq!(output.status.code(), Some(1));

    let output = env.run(&["config", "set", "--default-scheme", "pastel"]);
    assert_eq!(output.status.code(), Some(1));

    let empty = env.write_dataset("empty.json", "[]");
    let output = env.run(&["config", "set", "--dataset", empty.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    // Nothing was written
    assert!(!env.config_dir().join("config.toml").exists());
}

#[test]
fn test_invalid_config_file_falls_back_to_defaults() {
    let env = TestEnv::new();
    std::fs::write(env.config_dir().join("config.toml"), "[history]\nmax_size = 0\n").unwrap();

    let result = env.run_json(&["config", "show", "--json"]);
    assert_eq!(result["history"]["max_size"], 10);
}
