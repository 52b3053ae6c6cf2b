//! Heuristic checks over transpiled output.
//!
//! These never fail a transpile. They flag the mistakes that slip through a
//! lexical rewriter, such as a block that is opened but never closed.

use serde::Serialize;
use tracing::warn;

/// A non-fatal finding. `line` is 1-based; 0 means the whole output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintWarning {
    pub line: usize,
    pub message: String,
}

impl LintWarning {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct LintReport {
    pub warnings: Vec<LintWarning>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    fn report(&mut self, warning: LintWarning) {
        warn!(line = warning.line, "{}", warning.message);
        self.warnings.push(warning);
    }
}

/// Runs every check over `output`.
pub fn lint(output: &str) -> LintReport {
    let mut report = LintReport::default();
    if output.trim().is_empty() {
        return report;
    }
    OutputLinter::check_semicolons(output, &mut report);
    OutputLinter::check_braces(output, &mut report);
    report
}

/// Each check focuses on a single concern.
pub struct OutputLinter;

impl OutputLinter {
    pub fn check_semicolons(output: &str, report: &mut LintReport) {
        let code = code_only(output);
        if !code.contains(';') {
            report.report(LintWarning::new(0, "Missing semicolon."));
        }
    }

    pub fn check_braces(output: &str, report: &mut LintReport) {
        let mut open_lines = Vec::new();
        for (index, line) in code_only(output).lines().enumerate() {
            for ch in line.chars() {
                match ch {
                    '{' => open_lines.push(index + 1),
                    '}' if open_lines.pop().is_none() => {
                        report.report(LintWarning::new(index + 1, "Unexpected closing brace."));
                    }
                    _ => {}
                }
            }
        }
        for line in open_lines {
            report.report(LintWarning::new(line, "Unmatched opening brace."));
        }
    }
}

/// `output` with string literal contents and `//` comments blanked out, so
/// braces and semicolons inside them are not counted. Line structure is kept.
fn code_only(output: &str) -> String {
    let mut code = String::with_capacity(output.len());
    for line in output.lines() {
        let mut in_string = false;
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    in_string = !in_string;
                    code.push(ch);
                }
                '/' if !in_string && chars.peek() == Some(&'/') => break,
                _ if in_string => code.push(' '),
                _ => code.push(ch),
            }
        }
        code.push('\n');
    }
    code
}
