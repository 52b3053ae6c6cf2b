//! Plain-text diagnostic presentation for transpile errors.
//!
//! `miette` covers the default error path. This renderer is the compact form
//! used by the REPL and by `check`, where many errors are printed in a row.

use std::fmt::{Display, Formatter, Result as FmtResult};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use crate::errors::ParseError;

/// Number of lines of context to show before and after the error in code snippets.
const SNIPPET_CONTEXT_LINES: usize = 2;

/// A [`ParseError`] paired with the source it was raised against.
pub struct RunicDiagnostic<'a> {
    error: &'a ParseError,
    source: Option<&'a str>,
}

impl<'a> RunicDiagnostic<'a> {
    pub fn new(error: &'a ParseError, source: Option<&'a str>) -> Self {
        Self { error, source }
    }

    fn snippet(&self) -> Option<String> {
        if !self.error.position.is_known() {
            return None;
        }
        generate_code_snippet(self.source?, self.error)
    }
}

impl Display for RunicDiagnostic<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Error")?;
        write!(f, "{}", format_location(self.error))?;
        writeln!(f, ":")?;
        writeln!(f, "{}", self.error.message())?;
        if let Some(snippet) = self.snippet() {
            write!(f, "\n{}", snippet)?;
        }
        Ok(())
    }
}

fn format_location(error: &ParseError) -> String {
    if !error.position.is_known() {
        return String::new();
    }
    format!(" [at line {}, col {}]", error.line(), error.column())
}

/// Numbered source lines around the error with a caret under its column.
fn generate_code_snippet(source: &str, error: &ParseError) -> Option<String> {
    let lines: Vec<&str> = source.split('\n').collect();
    let error_line = error.line();
    if error_line == 0 || error_line > lines.len() {
        return None;
    }

    let display_start = error_line.saturating_sub(SNIPPET_CONTEXT_LINES).max(1);
    let display_end = (error_line + SNIPPET_CONTEXT_LINES).min(lines.len());
    let width = display_end.to_string().len();

    let mut result = String::new();
    for line_num in display_start..=display_end {
        let line = lines[line_num - 1].trim_end_matches('\r');
        result.push_str(&format!("{:width$} | {}\n", line_num, line, width = width));
        if line_num != error_line {
            continue;
        }
        result.push_str(&format!(
            "{:width$} | {}^ {}\n",
            "",
            " ".repeat(caret_offset(line, error.column())),
            error.kind.label(),
            width = width
        ));
    }
    Some(result)
}

/// Display width of the text before `column` (1-based, in codepoints).
fn caret_offset(line: &str, column: usize) -> usize {
    let end = line
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(line.len(), |(index, _)| index);
    line[..end].width()
}

/// Prints a diagnostic to standard error with colorization if supported.
pub fn print_diagnostic_to_stderr(diagnostic: &RunicDiagnostic, choice: ColorChoice) {
    let mut stderr = StandardStream::stderr(choice);
    if print_diagnostic_colored(&mut stderr, diagnostic).is_err() {
        eprintln!("{}", diagnostic);
    }
}

fn print_diagnostic_colored(
    writer: &mut impl WriteColor,
    diagnostic: &RunicDiagnostic,
) -> std::io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(writer, "Error")?;
    writer.reset()?;
    writeln!(writer, "{}:", format_location(diagnostic.error))?;
    writeln!(writer, "{}", diagnostic.error.message())?;

    if let Some(snippet) = diagnostic.snippet() {
        writeln!(writer)?;
        for line in snippet.lines() {
            if line.contains('^') && line.trim_start().starts_with('|') {
                writer.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
            }
            writeln!(writer, "{}", line)?;
            writer.reset()?;
        }
    }

    writer.reset()?;
    Ok(())
}
