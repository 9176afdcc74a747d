//! Integration tests for the formgen CLI
//!
//! These tests invoke the actual formgen-cli binary and verify:
//! - Exit codes (0 = success, 1 = invalid input, 2 = usage or model error)
//! - stdout carries exactly one JSON object, logs stay on stderr
//! - Lexicon overrides from file and environment

use std::path::PathBuf;
use std::process::Command;

// ── Helpers ───────────────────────────────────────────────

fn formgen_bin() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_BIN_EXE_formgen-cli"));
    if !path.exists() {
        path = PathBuf::from("target/debug/formgen-cli");
    }
    path
}

fn command() -> Command {
    let mut cmd = Command::new(formgen_bin());
    cmd.env_remove("FORMGEN_LEXICON")
        .env_remove("FORMGEN_LOG")
        .current_dir(env!("CARGO_MANIFEST_DIR"));
    cmd
}

fn product_args(product_type: &str) -> Vec<String> {
    [
        "--category",
        "Electronics",
        "--productType",
        product_type,
        "--brand",
        "Sonic",
        "--name",
        "Sonic Air 2",
        "--description",
        "Noise-cancelling over-ear headphones",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn run_formgen(args: &[String]) -> std::process::Output {
    command()
        .args(args)
        .output()
        .expect("failed to execute formgen-cli")
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

fn temp_lexicon(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, contents).expect("write temp lexicon");
    path
}

// ── Version ───────────────────────────────────────────────

#[test]
fn test_version_flag() {
    let output = command().arg("--version").output().expect("run --version");
    assert!(output.status.success(), "--version should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "should contain version"
    );
}

// ── Form generation ───────────────────────────────────────

#[test]
fn test_headphones_end_to_end() {
    let output = run_formgen(&product_args("Wireless Bluetooth Headphones"));
    assert!(output.status.success(), "valid product should exit 0");

    let json = stdout_json(&output);
    assert_eq!(json["typeId"], "458be8997126");
    assert_eq!(json["representativeWord"], "headphone");
    assert_eq!(json["fields"].as_array().unwrap().len(), 11);
}

#[test]
fn test_output_keys_and_field_order() {
    let output = run_formgen(&product_args("blue cotton shirt"));
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let type_id = stdout.find("\"typeId\"").unwrap();
    let word = stdout.find("\"representativeWord\"").unwrap();
    let fields = stdout.find("\"fields\"").unwrap();
    assert!(type_id < word && word < fields, "keys should keep their order");

    let json = stdout_json(&output);
    assert_eq!(json["representativeWord"], "shirt");
    assert_eq!(json["typeId"], "a52514252adf");

    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields[0]["name"], "screenSizeInches");
    assert_eq!(fields[3]["name"], "ramGb");
    assert_eq!(fields[4]["name"], "productionYear");
    assert_eq!(fields[8]["type"], "List<String>");
    assert_eq!(fields[10]["name"], "imported");
    assert!(fields.iter().all(|f| f["name"] != "specifications"));
}

#[test]
fn test_compact_output_is_one_line() {
    let output = run_formgen(&product_args("fast wireless charger"));
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end().lines().count(), 1);
    assert_eq!(stdout_json(&output)["representativeWord"], "charger");
}

#[test]
fn test_pretty_output() {
    let mut args = product_args("fast wireless charger");
    args.push("--pretty".into());
    let output = run_formgen(&args);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().count() > 1, "pretty output should span lines");
    assert_eq!(stdout_json(&output)["typeId"], "38102b4b8d45");
}

#[test]
fn test_product_type_kebab_alias() {
    let mut args = product_args("ignored");
    args[2] = "--product-type".into();
    args[3] = "very fast".into();
    let output = run_formgen(&args);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["representativeWord"], "very");
}

#[test]
fn test_output_determinism() {
    let args = product_args("Men's Ultra-Light Running Shoes");
    let first = run_formgen(&args);
    assert!(first.status.success());
    for _ in 0..5 {
        let output = run_formgen(&args);
        assert_eq!(first.stdout, output.stdout, "output must be deterministic");
    }
}

// ── Input errors ──────────────────────────────────────────

#[test]
fn test_missing_argument_is_usage_error() {
    let args: Vec<String> = product_args("Headphones")
        .into_iter()
        .filter(|a| a != "--brand" && a != "Sonic")
        .collect();
    let output = run_formgen(&args);
    assert_eq!(output.status.code(), Some(2), "missing flag should exit 2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--brand"), "should name the missing flag");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_blank_product_type_is_invalid_input() {
    let output = run_formgen(&product_args("   "));
    assert_eq!(output.status.code(), Some(1), "blank product type should exit 1");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

// ── Lexicon ───────────────────────────────────────────────

#[test]
fn test_lexicon_flag_extends_model() {
    let without = run_formgen(&product_args("Gizmo Charger"));
    assert_eq!(stdout_json(&without)["representativeWord"], "gizmo");

    let path = temp_lexicon("formgen_cli_lexicon_flag.json", r#"{"adjectives": ["gizmo"]}"#);
    let mut args = product_args("Gizmo Charger");
    args.push("--lexicon".into());
    args.push(path.to_str().unwrap().into());
    let with = run_formgen(&args);
    assert!(with.status.success());
    assert_eq!(stdout_json(&with)["representativeWord"], "charger");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_lexicon_from_environment() {
    let path = temp_lexicon(
        "formgen_cli_lexicon_env.json",
        r#"{"proper_nouns": ["acme"], "adjectives": ["gizmo"]}"#,
    );
    let output = command()
        .args(product_args("Acme Gizmo Lamps"))
        .env("FORMGEN_LEXICON", &path)
        .output()
        .expect("run with env lexicon");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["representativeWord"], "lamp");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_lexicon_fails_fast() {
    let path = std::env::temp_dir().join("formgen_cli_no_such_lexicon.json");
    let _ = std::fs::remove_file(&path);
    let mut args = product_args("Headphones");
    args.push("--lexicon".into());
    args.push(path.to_str().unwrap().into());

    let output = run_formgen(&args);
    assert_eq!(output.status.code(), Some(2), "missing lexicon should exit 2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Model unavailable"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_lexicon_fails_fast() {
    let path = temp_lexicon("formgen_cli_bad_lexicon.json", "{ \"nouns\": [");
    let mut args = product_args("   ");
    args.push("--lexicon".into());
    args.push(path.to_str().unwrap().into());

    // Model errors win over input errors: the model loads first.
    let output = run_formgen(&args);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let _ = std::fs::remove_file(&path);
}

// ── Logging ───────────────────────────────────────────────

#[test]
fn test_logs_stay_off_stdout() {
    let mut args = product_args("Wireless Bluetooth Headphones");
    args.push("--log-level".into());
    args.push("debug".into());
    let output = run_formgen(&args);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["representativeWord"], "headphone");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("normalized phrase"), "stderr: {}", stderr);
}

#[test]
fn test_default_log_level_is_quiet() {
    let output = run_formgen(&product_args("Wireless Bluetooth Headphones"));
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "no logs expected at warn level");
}

#[test]
fn test_invalid_log_filter_warns() {
    let mut args = product_args("Wireless Bluetooth Headphones");
    args.push("--log-level".into());
    args.push("formgen_core=loudest".into());
    let output = run_formgen(&args);
    assert!(output.status.success(), "bad filter should not abort the run");
    assert_eq!(stdout_json(&output)["representativeWord"], "headphone");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid log filter"), "stderr: {}", stderr);
}
