//! Handles all user-facing output for the CLI.
//!
//! Highlighted C++, JSON reports, the rune listing and `check` results are
//! all printed from here so every command formats things the same way.

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::ColorSettings;
use crate::errors::ParseError;
use crate::suggest::{Suggestion, TARGET_KEYWORDS};
use crate::syntax::SymbolTable;
use crate::validation::LintReport;

// ============================================================================
// COLOUR SELECTION
// ============================================================================

/// `Never` when asked, or when stdout is not a terminal.
pub fn color_choice(no_color: bool) -> ColorChoice {
    if no_color || !atty::is(atty::Stream::Stdout) {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

/// Parses `#RRGGBB` into a true-colour value.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// ============================================================================
// SYNTAX HIGHLIGHTING
// ============================================================================

/// How a whole output line is coloured. First match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Comment,
    String,
    Keyword,
    Plain,
}

pub fn classify_line(line: &str) -> LineStyle {
    if line.contains("//") {
        return LineStyle::Comment;
    }
    if line.contains('"') {
        return LineStyle::String;
    }
    let has_keyword = line
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .any(|word| TARGET_KEYWORDS.contains(&word));
    if has_keyword {
        LineStyle::Keyword
    } else {
        LineStyle::Plain
    }
}

/// Writes `code` line by line, coloured per [`classify_line`].
pub fn write_highlighted(
    writer: &mut impl WriteColor,
    code: &str,
    colors: &ColorSettings,
) -> io::Result<()> {
    for line in code.lines() {
        let color = match classify_line(line) {
            LineStyle::Comment => parse_hex_color(&colors.comment),
            LineStyle::String => parse_hex_color(&colors.string),
            LineStyle::Keyword => parse_hex_color(&colors.keyword),
            LineStyle::Plain => None,
        };
        writer.set_color(ColorSpec::new().set_fg(color))?;
        write!(writer, "{}", line)?;
        writer.reset()?;
        writeln!(writer)?;
    }
    Ok(())
}

pub fn print_highlighted(code: &str, colors: &ColorSettings, choice: ColorChoice) {
    let mut stdout = StandardStream::stdout(choice);
    if write_highlighted(&mut stdout, code, colors).is_err() {
        println!("{}", code);
    }
}

// ============================================================================
// JSON REPORTS
// ============================================================================

/// `{"output": ...}` on success, `{"error": {...}}` on failure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonReport {
    Output(String),
    Error(JsonError),
}

#[derive(Debug, Serialize)]
pub struct JsonError {
    pub code: String,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<&ParseError> for JsonError {
    fn from(err: &ParseError) -> Self {
        Self {
            code: err.code(),
            message: err.message(),
            line: err.line(),
            column: err.column(),
        }
    }
}

impl JsonReport {
    pub fn from_result(result: &Result<String, ParseError>) -> Self {
        match result {
            Ok(output) => Self::Output(output.clone()),
            Err(err) => Self::Error(JsonError::from(err)),
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}

// ============================================================================
// LISTINGS
// ============================================================================

/// One line per glyph: rune, category, fragment and meaning.
pub fn print_rune_table(table: &SymbolTable) {
    let mut stdout = io::stdout().lock();
    for entry in table.entries() {
        let _ = writeln!(
            stdout,
            "{}  {:<11}  {:<14}  {}",
            entry.rune,
            entry.category.name(),
            entry.fragment,
            entry.meaning
        );
    }
}

pub fn print_suggestions(suggestions: &[Suggestion]) {
    for suggestion in suggestions {
        match suggestion.rune {
            Some(rune) => println!("{}  {}", suggestion.keyword, rune),
            None => println!("{}", suggestion.keyword),
        }
    }
}

// ============================================================================
// CHECK RESULTS
// ============================================================================

pub fn print_check_pass(stdout: &mut StandardStream, name: &str, lint: &LintReport) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
    let _ = write!(stdout, "✓");
    let _ = stdout.reset();
    let _ = writeln!(stdout, " {}", name);
    for warning in &lint.warnings {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = write!(stdout, "  warning");
        let _ = stdout.reset();
        if warning.line == 0 {
            let _ = writeln!(stdout, ": {}", warning.message);
        } else {
            let _ = writeln!(stdout, " (line {}): {}", warning.line, warning.message);
        }
    }
}

pub fn print_check_fail(stdout: &mut StandardStream, name: &str, err: &ParseError) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
    let _ = write!(stdout, "✗");
    let _ = stdout.reset();
    let _ = writeln!(stdout, " {}: {}", name, err);
}

pub fn print_check_summary(stdout: &mut StandardStream, passed: usize, failed: usize) {
    let color = if failed == 0 { Color::Green } else { Color::Red };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(stdout, "\n{} passed, {} failed", passed, failed);
    let _ = stdout.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("#0000FF"), Some(Color::Rgb(0, 0, 255)));
        assert_eq!(parse_hex_color("#80808"), None);
        assert_eq!(parse_hex_color("008000"), None);
        assert_eq!(parse_hex_color("#zz0000"), None);
    }

    #[test]
    fn line_classification_order() {
        assert_eq!(classify_line("// return \"x\""), LineStyle::Comment);
        assert_eq!(classify_line("std::cout << \"hi\";"), LineStyle::String);
        assert_eq!(classify_line("return 0;"), LineStyle::Keyword);
        assert_eq!(classify_line("x = y;"), LineStyle::Plain);
        assert_eq!(classify_line("returned = 1;"), LineStyle::Plain);
    }

    #[test]
    fn uncoloured_highlight_is_the_code() {
        let mut buffer = Buffer::no_color();
        write_highlighted(&mut buffer, "void f() {\n}", &ColorSettings::default()).unwrap();
        assert_eq!(String::from_utf8(buffer.into_inner()).unwrap(), "void f() {\n}\n");
    }

    #[test]
    fn json_shapes() {
        let ok = serde_json::to_value(JsonReport::Output("if".into())).unwrap();
        assert_eq!(ok, serde_json::json!({ "output": "if" }));

        let result = crate::engine::Transpiler::new().transpile("ᛟx");
        let err = serde_json::to_value(JsonReport::from_result(&result)).unwrap();
        assert_eq!(err["error"]["code"], "runic::parse::unterminated_string");
        assert_eq!(err["error"]["line"], 1);
        assert_eq!(err["error"]["column"], 1);
    }
}
