// Regression tests for the `runic` binary.
// Requires: assert_cmd, predicates, tempfile in [dev-dependencies]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::{tempdir, TempDir};

fn runic(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("runic").unwrap();
    cmd.current_dir(dir).env_remove("RUNIC_LOG");
    cmd
}

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    for (name, contents) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
    dir
}

#[test]
fn transpile_prints_cpp() {
    let dir = workspace(&[("main.rune", "ᛤ main ᛒ ᛏ; ᛘ")]);
    runic(dir.path())
        .args(["transpile", "main.rune"])
        .assert()
        .success()
        .stdout("void main() { return; }\n");
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    let dir = workspace(&[("bad.rune", "ᚷ x ᛣ")]);
    runic(dir.path())
        .args(["transpile", "bad.rune"])
        .assert()
        .failure()
        .stderr(contains("runic::parse::unknown_rune").and(contains("bad.rune")));
}

#[test]
fn transpile_json_reports_errors_on_stdout() {
    let dir = workspace(&[("bad.rune", "ᛤ ")]);
    runic(dir.path())
        .args(["transpile", "--json", "bad.rune"])
        .assert()
        .failure()
        .stdout(contains("\"error\"").and(contains("runic::parse::missing_identifier")));
}

#[test]
fn transpile_json_success() {
    let dir = workspace(&[("ok.rune", "ᛏ 0;")]);
    runic(dir.path())
        .args(["transpile", "--json", "ok.rune"])
        .assert()
        .success()
        .stdout(contains("\"output\": \"return 0;\""));
}

#[test]
fn highlight_without_a_terminal_is_plain() {
    let dir = workspace(&[("main.rune", "ᛞ hi\nᛏ;")]);
    runic(dir.path())
        .args(["transpile", "--highlight", "main.rune"])
        .assert()
        .success()
        .stdout("// hi\nreturn;\n");
}

#[test]
fn missing_input_file_fails() {
    let dir = workspace(&[]);
    runic(dir.path())
        .args(["transpile", "nope.rune"])
        .assert()
        .failure()
        .stderr(contains("failed to read 'nope.rune'"));
}

#[test]
fn compile_writes_requested_artifact() {
    let dir = workspace(&[("main.rune", "ᛚ Id")]);
    runic(dir.path())
        .args(["compile", "main.rune", "-o", "out.cpp"])
        .assert()
        .success()
        .stdout(contains("typedef int Id;"));

    let program = fs::read_to_string(dir.path().join("out.cpp")).unwrap();
    assert!(program.starts_with("#include <iostream>\n\ntypedef int Id;\n"));
}

#[test]
fn compile_honours_config_file() {
    let dir = workspace(&[
        ("main.rune", "ᛏ;"),
        (
            "runic.yaml",
            "output: build.cpp\npreamble: \"#include <vector>\"\n",
        ),
    ]);
    runic(dir.path())
        .args(["compile", "main.rune"])
        .assert()
        .success();

    let program = fs::read_to_string(dir.path().join("build.cpp")).unwrap();
    assert!(program.starts_with("#include <vector>\n\nreturn;\n"));
}

#[test]
fn explicit_missing_config_fails() {
    let dir = workspace(&[("main.rune", "ᛏ;")]);
    runic(dir.path())
        .args(["--config", "absent.yaml", "transpile", "main.rune"])
        .assert()
        .failure()
        .stderr(contains("runic::config::read"));
}

#[test]
fn check_summarises_a_directory() {
    let dir = workspace(&[
        ("src/good.rune", "ᛤ main ᛒ ᛏ; ᛘ"),
        ("src/nested/bad.rune", "ᛟunclosed"),
        ("src/notes.txt", "ᛣ"),
    ]);
    runic(dir.path())
        .args(["check", "src"])
        .assert()
        .failure()
        .stdout(contains("1 passed, 1 failed").and(contains("Unterminated string literal")))
        .stderr(contains("1 of 2 rune files failed"));
}

#[test]
fn check_passes_with_lint_warnings() {
    let dir = workspace(&[("open.rune", "ᛥ Foo")]);
    runic(dir.path())
        .args(["check", "open.rune"])
        .assert()
        .success()
        .stdout(contains("Unmatched opening brace.").and(contains("1 passed, 0 failed")));
}

#[test]
fn runes_lists_the_alphabet() {
    let dir = workspace(&[]);
    runic(dir.path())
        .arg("runes")
        .assert()
        .success()
        .stdout(
            contains("ᚠ")
                .and(contains("std::cout <<"))
                .and(contains("string delimiter")),
        );
}

#[test]
fn suggest_names_runes() {
    let dir = workspace(&[]);
    runic(dir.path())
        .args(["suggest", "wh"])
        .assert()
        .success()
        .stdout("while  ᛉ\n");
}

#[test]
fn repl_transpiles_until_eof() {
    let dir = workspace(&[]);
    runic(dir.path())
        .arg("repl")
        .write_stdin("ᛤ main ᛒ\nᛏ;\nᛘ\n:quit\n")
        .assert()
        .success()
        .stdout(contains("void main() {\nreturn;\n}").and(contains("Goodbye!")));
}

#[test]
fn repl_reports_errors_and_continues() {
    let dir = workspace(&[]);
    runic(dir.path())
        .arg("repl")
        .write_stdin("ᛣ\nᛏ;\n")
        .assert()
        .success()
        .stderr(contains("Unknown rune symbol"))
        .stdout(contains("return;"));
}
