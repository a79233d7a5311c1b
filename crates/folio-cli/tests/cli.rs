//! CLI surface tests: argument parsing, catalog validation, tty guard.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn folio() -> Command {
    Command::cargo_bin("folio").unwrap()
}

#[test]
fn help_describes_the_tool() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A terminal portfolio browser"))
        .stdout(predicate::str::contains("--catalog"));
}

#[test]
fn check_reports_builtin_catalog_summary() {
    folio()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog is valid"))
        .stdout(predicate::str::contains("Irsyad Faruq Ardiansyah"))
        .stdout(predicate::str::contains("projects:     5"));
}

#[test]
fn tui_refuses_to_start_without_a_terminal() {
    // assert_cmd pipes stdout, so the tty guard must trip
    folio()
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a terminal"));
}

#[test]
fn missing_catalog_path_is_reported() {
    folio()
        .args(["--catalog", "/nonexistent/catalog.toml", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}

#[test]
fn invalid_catalog_is_rejected_with_the_offending_id() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[profile]
name = "Test"
about = "About"
avatar = "/images/a.jpg"

[[projects]]
id = "dup"
title = "One"
description = "d"
repo_url = "r"
live_url = "l"

[[projects]]
id = "dup"
title = "Two"
description = "d"
repo_url = "r"
live_url = "l"
"#
    )
    .unwrap();

    folio()
        .arg("--catalog")
        .arg(file.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate project id"))
        .stderr(predicate::str::contains("dup"));
}

#[test]
fn external_catalog_overrides_the_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[profile]
name = "Someone Else"
about = "About"
avatar = "/images/a.jpg"
"#
    )
    .unwrap();

    folio()
        .arg("--catalog")
        .arg(file.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Someone Else"))
        .stdout(predicate::str::contains("projects:     0"));
}
