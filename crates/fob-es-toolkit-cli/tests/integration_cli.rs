//! Integration tests for the fob-es-toolkit binary.
//!
//! These tests run the compiled binary against real files in a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("fob-es-toolkit").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_prints_rewritten_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("index.ts");
    fs::write(&file, "import lodashIsEqual from 'lodash/isEqual';\n").unwrap();

    cli()
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::eq(
            "import { isEqual as lodashIsEqual } from 'es-toolkit/compat';\n",
        ));

    // Without --write the file is untouched
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "import lodashIsEqual from 'lodash/isEqual';\n"
    );
}

#[test]
fn test_write_in_place() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("index.js");
    fs::write(&file, "import { isEqual, chain } from 'lodash';\n").unwrap();

    cli()
        .arg("--write")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Unsupported lodash function: chain"));

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "import { isEqual } from 'es-toolkit/compat';import { chain } from 'lodash';\n"
    );
}

#[test]
fn test_check_fails_when_changes_pending() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("index.ts");
    fs::write(&file, "import { map } from 'lodash';\n").unwrap();

    cli()
        .arg("--check")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("would be rewritten"));
}

#[test]
fn test_check_passes_for_clean_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("index.ts");
    fs::write(&file, "import { map } from 'es-toolkit/compat';\n").unwrap();

    cli().arg("--check").arg(&file).assert().success();
}

#[test]
fn test_strict_mode_rejects_malformed_imports() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("index.ts");
    fs::write(&file, "import { map, as x } from 'lodash';\n").unwrap();

    cli().arg("--strict").arg(&file).assert().failure();

    // Default mode skips the statement with a warning
    cli()
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping malformed import"));
}

#[test]
fn test_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    cli()
        .arg(temp.path().join("missing.ts"))
        .assert()
        .failure();
}

#[test]
fn test_keep_flag() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("index.ts");
    fs::write(&file, "import debounce from 'lodash/debounce';\n").unwrap();

    cli()
        .args(["--keep", "debounce"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
