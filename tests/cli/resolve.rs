//! Resolve subcommand tests

use predicates::prelude::*;

use crate::helpers::{ECHO, Project};

#[test]
fn test_resolve_configured_directory() {
    let project = Project::new();
    let stub = project.stub("tools", "clang-format", ECHO);
    project.tools_config("clang-format", "");
    let file = project.write("src/main.cpp", "");

    project
        .cmd()
        .args(["resolve", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(format!("clang-format\t{}\n", stub.display()));
}

#[test]
fn test_resolve_search_path() {
    let project = Project::new();
    let stub = project.stub("bin", "gn", ECHO);
    let file = project.write("BUILD.gn", "");

    project
        .cmd()
        .env("PATH", project.path().join("bin"))
        .args(["resolve", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(format!("gn\t{}\n", stub.display()));
}

#[test]
fn test_resolve_configured_directory_beats_search_path() {
    let project = Project::new();
    project.stub("bin", "autopep8", ECHO);
    let configured = project.stub("tools", "autopep8", ECHO);
    project.tools_config("autopep8", "");
    let file = project.write("a.py", "");

    project
        .cmd()
        .env("PATH", project.path().join("bin"))
        .args(["resolve", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(format!("autopep8\t{}\n", configured.display()));
}

#[test]
fn test_resolve_rustfmt_cargo_fallback() {
    let project = Project::new();
    let stub = project.stub("home/.cargo/bin", "rustfmt", ECHO);
    let file = project.write("src/lib.rs", "");

    project
        .isolated_cmd()
        .args(["resolve", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(format!("rustfmt\t{}\n", stub.display()));
}

#[test]
fn test_resolve_missing_binary() {
    let project = Project::new();
    let file = project.write("src/lib.rs", "");

    project
        .isolated_cmd()
        .args(["resolve", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find a rustfmt executable"));
}

#[test]
fn test_resolve_non_executable_is_ignored() {
    let project = Project::new();
    project.write("tools/prettier", "#!/bin/sh\ncat\n");
    project.tools_config("prettier", "");
    let file = project.write("index.html", "");

    project
        .isolated_cmd()
        .args(["resolve", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find a prettier executable"));
}

#[test]
fn test_resolve_unknown_language() {
    let project = Project::new();
    let file = project.write("notes.txt", "");

    project
        .cmd()
        .args(["resolve", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no formatter available"));
}

#[test]
fn test_resolve_with_syntax() {
    let project = Project::new();
    let stub = project.stub("tools", "gn", ECHO);
    project.tools_config("gn", "");
    let file = project.write("BUILD", "");

    project
        .cmd()
        .args([
            "resolve",
            "--syntax",
            "Packages/GN/GN.sublime-syntax",
            file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(format!("gn\t{}\n", stub.display()));
}

#[test]
fn test_resolve_relative_path_entry_uses_process_directory() {
    let project = Project::new();
    let stub = project.stub("bin", "gn", ECHO);
    let file = project.write("src/deep/BUILD.gn", "");

    project
        .cmd()
        .env("PATH", "bin")
        .args(["resolve", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(format!("gn\t{}\n", stub.display()));
}
