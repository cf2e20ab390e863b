//! CLI integration tests for audiodupes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command for the audiodupes binary, isolated from any user config.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("audiodupes").unwrap();
    cmd.env("AUDIODUPES_CONFIG", "/nonexistent/audiodupes/config.toml")
        .env_remove("AUDIODUPES_JSON")
        .env_remove("AUDIODUPES_LOG")
        .env_remove("AUDIODUPES_TIMING");
    cmd
}

const SONG_A: &str = r#"[{"id":"abcdefgh1","title":"Song A"},{"id":"ijklmnop2","title":"song a"},{"id":"qrstuvwx3","title":"Song B"}]"#;

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Report audio assets whose titles appear more than once",
        ));
}

#[test]
fn test_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("audiodupes"));
}

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn test_stdin_report() {
    cmd().write_stdin(SONG_A).assert().success().stdout(
        "Total audios: 3\n\
         Doublons trouvés: 1\n\
         \n\
         \x20 \"song a\": 2 copies\n\
         \x20   - ID: abcdefgh... | thumbnail: False | s3key: \n\
         \x20   - ID: ijklmnop... | thumbnail: False | s3key: \n",
    );
}

#[test]
fn test_empty_array() {
    cmd()
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("Total audios: 0\nDoublons trouvés: 0\n");
}

#[test]
fn test_input_file_and_dash() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("audios.json");
    fs::write(&input, SONG_A).unwrap();

    cmd()
        .arg(input.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Doublons trouvés: 1"));

    cmd()
        .arg("-")
        .write_stdin(SONG_A)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"song a\": 2 copies"));
}

#[test]
fn test_limit_flag() {
    let input = r#"[
        {"id":"a1","title":"b"},{"id":"a2","title":"B"},
        {"id":"a3","title":"a"},{"id":"a4","title":"A"}
    ]"#;
    cmd()
        .args(["--limit", "1"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Doublons trouvés: 2"))
        .stdout(predicate::str::contains("\"a\": 2 copies"))
        .stdout(predicate::str::contains("\"b\": 2 copies").not());
}

#[test]
fn test_group_by_s3key() {
    let input = r#"[
        {"id":"11111111","title":"One","s3key":"audio/shared.mp3"},
        {"id":"22222222","title":"Two","s3key":"audio/shared.mp3"}
    ]"#;
    cmd()
        .args(["--by", "s3key"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"audio/shared.mp3\": 2 copies"));
}

#[test]
fn test_suggest_keep() {
    let input = r#"[
        {"id":"noththumb","title":"x"},
        {"id":"withthumb","title":"x","thumbnail":"https://cdn.example.com/t.jpg"}
    ]"#;
    cmd()
        .arg("--suggest-keep")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "    - ID: withthum... | thumbnail: True | s3key:  | keep\n",
        ));
}

#[test]
fn test_json_output() {
    let input = r#"[{"id":"abcdefgh1","title":"Song A","category":"meditation","isPublished":false},{"id":"ijklmnop2","title":"song a"},{"id":"qrstuvwx3","title":"Song B"}]"#;
    let output = cmd().arg("--json").write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["data"]["total"], 3);
    assert_eq!(value["data"]["duplicates_found"], 1);
    assert_eq!(value["data"]["groups"][0]["key"], "song a");
    assert_eq!(value["data"]["groups"][0]["keep"], "abcdefgh1");
    let first = &value["data"]["groups"][0]["members"][0];
    assert_eq!(first["category"], "meditation");
    assert_eq!(first["is_published"], false);
    assert!(value["data"]["groups"][0]["members"][1].get("category").is_none());
}

#[test]
fn test_json_env_var() {
    cmd()
        .env("AUDIODUPES_JSON", "1")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_file_applies() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(
        &config,
        "[report]\nid_display_len = 4\n\n[normalize]\nspace_collapse = \"full\"\n",
    )
    .unwrap();

    cmd()
        .env("AUDIODUPES_CONFIG", config.to_str().unwrap())
        .write_stdin(r#"[{"id":"abcdefgh","title":"Foo    Bar"},{"id":"ijklmnop","title":"foo bar"}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"foo bar\": 2 copies"))
        .stdout(predicate::str::contains("- ID: abcd... |"));
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[normalize]\nspace_collapse = 3\n").unwrap();

    cmd()
        .env("AUDIODUPES_CONFIG", config.to_str().unwrap())
        .write_stdin("[]")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to load config"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_bare_object_fails() {
    cmd()
        .write_stdin(r#"{"id":"abc","title":"x"}"#)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not a JSON array of asset records"));
}

#[test]
fn test_array_elements_fail() {
    cmd()
        .write_stdin(r#"[[], ["abcdefgh1", "Song"], ["x", "song"]]"#)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("element 0 is not an object"));
}

#[test]
fn test_invalid_syntax_fails() {
    cmd()
        .write_stdin("[{\"id\": ")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_missing_input_file_fails() {
    cmd()
        .arg("/nonexistent/audios.json")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to open"));
}
