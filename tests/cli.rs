use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use serde_json::{Value, json};
use std::fs;
use tempfile::tempdir;

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is JSON")
}

#[test]
fn dash_reads_stdin_and_writes_stdout() {
    let mut cmd = cargo_bin_cmd!("md2adf");
    cmd.arg("-").write_stdin("# Title\n* **a**");

    let output = cmd.assert().success().get_output().stdout.clone();
    let doc = stdout_json(&output);
    assert_eq!(doc["type"], "doc");
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["content"][0]["attrs"]["level"], 1);
    assert_eq!(
        doc["content"][1]["content"][0]["content"][0]["content"][0],
        json!({ "type": "text", "text": "a", "marks": [{ "type": "strong" }] })
    );
}

#[test]
fn missing_input_argument_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("md2adf");
    cmd.write_stdin("plain");

    let output = cmd.assert().success().get_output().stdout.clone();
    assert_eq!(
        stdout_json(&output)["content"][0]["content"][0]["text"],
        "plain"
    );
}

#[test]
fn flags_override_config_file() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("notes.md");
    fs::write(&input_path, "first\n\nrun `cargo`").unwrap();

    let config_path = dir.path().join("skip.toml");
    fs::write(
        &config_path,
        "[blocks]\nblank_lines = \"skip\"\n\n[inline]\ndialect = \"strong\"\n\n[output]\npretty = false\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("md2adf");
    cmd.arg(input_path.as_os_str())
        .arg("-c")
        .arg(config_path.as_os_str())
        .arg("--extended")
        .arg("--pretty");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("\n  \"content\""));

    let doc: Value = serde_json::from_str(&stdout).unwrap();
    let content = doc["content"].as_array().unwrap();
    assert_eq!(content.len(), 2);
    assert_eq!(
        content[1]["content"][1],
        json!({ "type": "text", "text": "cargo", "marks": [{ "type": "code" }] })
    );
}

#[test]
fn config_file_alone_applies() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("extended.toml");
    fs::write(&config_path, "[inline]\ndialect = \"extended\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2adf");
    cmd.arg("-c")
        .arg(config_path.as_os_str())
        .write_stdin("a\n\n*b*");

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);

    let doc: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["content"].as_array().unwrap().len(), 3);
    assert_eq!(doc["content"][2]["content"][0]["marks"][0]["type"], "em");
}

#[test]
fn output_flag_writes_file() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("doc.json");

    let mut cmd = cargo_bin_cmd!("md2adf");
    cmd.arg("-o")
        .arg(output_path.as_os_str())
        .write_stdin("Simple text");

    let stdout = cmd.assert().success().get_output().stdout.clone();
    assert!(stdout.is_empty());

    let written: Value = serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "paragraph",
                "content": [{ "type": "text", "text": "Simple text" }]
            }]
        })
    );
}

#[test]
fn missing_input_file_exits_with_error() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("absent.md");

    let mut cmd = cargo_bin_cmd!("md2adf");
    cmd.arg(input_path.as_os_str());

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"))
        .stderr(contains("absent.md"));
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "[inline]\ndialect = \"rich\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("md2adf");
    cmd.arg("-c").arg(config_path.as_os_str()).write_stdin("text");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("invalid config"))
        .stdout(predicates::str::is_empty());
}
