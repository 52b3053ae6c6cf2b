//! Program skeleton output written to disk.

use std::fs;

use runic::{Config, ErrorCategory, Transpiler};
use tempfile::tempdir;

#[test]
fn compile_writes_wrapped_program() {
    let dir = tempdir().unwrap();
    let artifact = dir.path().join("output.cpp");

    let body = Transpiler::new()
        .compile_to_path("hello.rune", "ᛤ hello ᛒ ᚠ ᛟhiᛟ; ᛘ", &artifact)
        .unwrap();

    assert_eq!(body, "void hello() { std::cout << \"hi\"; }");
    assert_eq!(
        fs::read_to_string(&artifact).unwrap(),
        "#include <iostream>\n\n\
         void hello() { std::cout << \"hi\"; }\n\
         int main() {\n\treturn 0;\n}"
    );
}

#[test]
fn compile_uses_configured_skeleton() {
    let dir = tempdir().unwrap();
    let config = Config {
        output: dir.path().join("prog.cpp"),
        preamble: "#include <cstdio>".into(),
        entry_point: "int main() { return 1; }".into(),
        ..Config::default()
    };

    Transpiler::with_config(&config)
        .compile_to_skeleton("ᛏ;")
        .unwrap();

    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "#include <cstdio>\n\nreturn;\nint main() { return 1; }"
    );
}

#[test]
fn compile_overwrites_previous_artifact() {
    let dir = tempdir().unwrap();
    let artifact = dir.path().join("output.cpp");
    fs::write(&artifact, "stale").unwrap();

    Transpiler::new().compile_to_path("a", "x;", &artifact).unwrap();

    assert!(!fs::read_to_string(&artifact).unwrap().contains("stale"));
}

#[test]
fn failed_transpile_writes_nothing() {
    let dir = tempdir().unwrap();
    let artifact = dir.path().join("output.cpp");

    let err = Transpiler::new()
        .compile_to_path("bad", "ᛟunclosed", &artifact)
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Construct);
    assert!(!artifact.exists());
}

#[test]
fn unwritable_artifact_is_a_host_error() {
    let dir = tempdir().unwrap();
    let artifact = dir.path().join("missing").join("output.cpp");

    let err = Transpiler::new()
        .compile_to_path("a", "x;", &artifact)
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Host);
    assert_eq!(err.line(), 0);
    assert!(err.to_string().starts_with("Failed to write"));
}
