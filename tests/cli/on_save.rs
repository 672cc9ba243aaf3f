//! On-save subcommand tests

use predicates::prelude::*;

use crate::helpers::{Project, UPPERCASE};

/// Uppercases its input and leaves a marker next to itself when run.
const MARKED_UPPERCASE: &str = ": > \"$0.ran\"\ntr '[:lower:]' '[:upper:]'";

#[test]
fn test_on_save_enabled_formats_file() {
    let project = Project::new();
    project.stub("tools", "clang-format", UPPERCASE);
    project.tools_config("clang-format", "on_save = true\n");
    let file = project.write("src/main.c", "int main() {}\n");

    project
        .cmd()
        .args(["on-save", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Formatted"));

    assert_eq!(project.read("src/main.c"), "INT MAIN() {}\n");
}

#[test]
fn test_on_save_unset_does_nothing() {
    let project = Project::new();
    let stub = project.stub("tools", "clang-format", MARKED_UPPERCASE);
    project.tools_config("clang-format", "");
    let file = project.write("main.c", "int main() {}\n");

    project
        .cmd()
        .args(["on-save", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("");

    assert_eq!(project.read("main.c"), "int main() {}\n");
    assert!(!stub.with_extension("ran").exists());
}

#[test]
fn test_on_save_false_does_nothing() {
    let project = Project::new();
    project.stub("tools", "rustfmt", UPPERCASE);
    project.tools_config("rustfmt", "on_save = false\n");
    let file = project.write("lib.rs", "fn a() {}\n");

    project
        .cmd()
        .args(["on-save", file.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(project.read("lib.rs"), "fn a() {}\n");
}

#[test]
fn test_on_save_listed_folder() {
    let project = Project::new();
    project.stub("tools", "prettier", UPPERCASE);
    project.config(&format!(
        "[[folders]]\nname = \"Frontend\"\npath = \"web\"\n\n\
         [[folders]]\nname = \"Backend\"\npath = \"server\"\n\n\
         [formatters.prettier]\npath = \"{}\"\non_save = [\"Frontend\"]\n",
        project.path().join("tools").display()
    ));
    let frontend = project.write("web/app.js", "let x = 1;\n");
    let backend = project.write("server/app.js", "let y = 2;\n");

    project
        .cmd()
        .args(["on-save", frontend.to_str().unwrap()])
        .assert()
        .success();
    project
        .cmd()
        .args(["on-save", backend.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(project.read("web/app.js"), "LET X = 1;\n");
    assert_eq!(project.read("server/app.js"), "let y = 2;\n");
}

#[test]
fn test_on_save_sublime_project() {
    let project = Project::new();
    project.stub("tools", "autopep8", UPPERCASE);
    project.write(
        "app.sublime-project",
        &format!(
            r#"{{
                "folders": [{{ "name": "MyFolder", "path": "py" }}],
                "settings": {{
                    "format": {{
                        "autopep8": {{ "path": "{}", "on_save": ["MyFolder"] }}
                    }}
                }}
            }}"#,
            project.path().join("tools").display()
        ),
    );
    let file = project.write("py/tool.py", "x = 1\n");

    project
        .cmd()
        .args(["on-save", file.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(project.read("py/tool.py"), "X = 1\n");
}

#[test]
fn test_on_save_stdin_echoes_when_disabled() {
    let project = Project::new();
    project.config("");

    project
        .cmd()
        .args(["on-save", "--stdin", "main.c"])
        .write_stdin("int main() {}\n")
        .assert()
        .success()
        .stdout("int main() {}\n");
}

#[test]
fn test_on_save_stdin_formats_when_enabled() {
    let project = Project::new();
    project.stub("tools", "gn", UPPERCASE);
    project.tools_config("gn", "on_save = true\n");

    project
        .cmd()
        .args(["on-save", "--stdin", "BUILD.gn"])
        .write_stdin("group(\"a\") {}\n")
        .assert()
        .success()
        .stdout("GROUP(\"A\") {}\n");
}

#[test]
fn test_on_save_unsupported_language_is_silent() {
    let project = Project::new();
    let file = project.write("notes.md", "# notes\n");

    project
        .cmd()
        .args(["on-save", file.to_str().unwrap()])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_on_save_failing_formatter_reports_error() {
    let project = Project::new();
    project.stub("tools", "rustfmt", "cat > /dev/null\necho 'error: expected item' >&2\nexit 1");
    project.tools_config("rustfmt", "on_save = true\n");
    let file = project.write("lib.rs", "fn\n");

    project
        .cmd()
        .args(["on-save", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: expected item"));

    assert_eq!(project.read("lib.rs"), "fn\n");
}
