//! Golden master tests for diagnostic output.
//!
//! These tests capture the exact formatted output of `RunicDiagnostic`
//! to ensure consistent error presentation across changes.

use runic::cli::diagnostics::RunicDiagnostic;
use runic::{ErrorKind, ParseError, Transpiler};

/// Transpiles `source`, expecting failure, and renders the error against it.
fn capture_diagnostic_output(source: &str, with_source: bool) -> String {
    let error = Transpiler::new().transpile(source).unwrap_err();
    let diagnostic = RunicDiagnostic::new(&error, with_source.then_some(source));
    format!("{}", diagnostic)
}

#[test]
fn test_unknown_rune_diagnostic() {
    let output = capture_diagnostic_output("ᚷ x\n  ᛣ", true);

    let expected = "Error [at line 2, col 3]:
Unknown rune symbol: ᛣ

1 | ᚷ x
2 |   ᛣ
  |   ^ unknown rune
";

    assert_eq!(output, expected);
}

#[test]
fn test_context_window_is_two_lines() {
    let source = "a;\nb;\nc;\nᛤ (x)\nd;\ne;\nf;";
    let output = capture_diagnostic_output(source, true);

    let expected = "Error [at line 4, col 2]:
Expected function name

2 | b;
3 | c;
4 | ᛤ (x)
  |  ^ name expected here
5 | d;
6 | e;
";

    assert_eq!(output, expected);
}

#[test]
fn test_line_numbers_are_right_aligned() {
    let source = "x;\n".repeat(9) + "ᛟoops";
    let output = capture_diagnostic_output(&source, true);

    let expected = "Error [at line 10, col 1]:
Unterminated string literal

 8 | x;
 9 | x;
10 | ᛟoops
   | ^ string starts here
";

    assert_eq!(output, expected);
}

#[test]
fn test_switch_diagnostic() {
    let output = capture_diagnostic_output("ᚹ x ᚲ 1 ᛏ ᛘ", true);

    let expected = "Error [at line 1, col 9]:
Unexpected symbol 'ᛏ' in switch statement

1 | ᚹ x ᚲ 1 ᛏ ᛘ
  |         ^ not allowed in a switch body
";

    assert_eq!(output, expected);
}

#[test]
fn test_diagnostic_without_source() {
    let output = capture_diagnostic_output("ᛥ ", false);

    let expected = "Error [at line 1, col 2]:
Expected class name
";

    assert_eq!(output, expected);
}

#[test]
fn test_unpositioned_diagnostic() {
    let error = ParseError::unpositioned(ErrorKind::Io {
        path: "out/output.cpp".into(),
        reason: "No such file or directory".into(),
    });
    let output = format!("{}", RunicDiagnostic::new(&error, Some("ᛏ;")));

    let expected = "Error:
Failed to write 'out/output.cpp': No such file or directory
";

    assert_eq!(output, expected);
}

#[test]
fn test_miette_report_carries_code_and_help() {
    let error = Transpiler::new()
        .transpile_named("greet.rune", "ᚠ ᛟhi")
        .unwrap_err();
    let report = format!("{:?}", miette::Report::new(error));
    assert!(report.contains("runic::parse::unterminated_string"), "{report}");
    assert!(report.contains("greet.rune"), "{report}");
    assert!(report.contains("close the string"), "{report}");
}
