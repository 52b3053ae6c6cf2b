//! Runic Error Handling
//!
//! Every failure the transpiler can report is a [`ParseError`]: a kind, the
//! position of the offending symbol, and (once it leaves the driver) the
//! named source it came from. `ParseError` implements `miette::Diagnostic`
//! so the CLI can render it with a labelled snippet.

use std::{fmt, sync::Arc};

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::syntax::Position;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Expected {expected}")]
    MissingIdentifier { expected: &'static str },
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated parameter list for function '{function}'")]
    UnterminatedParameters { function: String },
    #[error("Unexpected symbol '{found}' in switch statement")]
    UnexpectedInSwitch { found: char },
    #[error("Unexpected end of input in {construct}")]
    UnexpectedEndOfInput { construct: &'static str },
    #[error("Unknown rune symbol: {rune}")]
    UnknownRune { rune: char },
    #[error("Unexpected symbol: {found:?}")]
    UnexpectedSymbol { found: char },
    #[error("Failed to write '{path}': {reason}")]
    Io { path: String, reason: String },
}

/// Coarse error classes, used by callers that branch on the failure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A construct handler could not satisfy its minimal grammar.
    Construct,
    /// A symbol that is neither a known glyph nor valid pass-through text.
    Structural,
    /// A fault outside the input itself, such as a failed artifact write.
    Host,
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingIdentifier { .. }
            | Self::UnterminatedString
            | Self::UnterminatedParameters { .. }
            | Self::UnexpectedInSwitch { .. }
            | Self::UnexpectedEndOfInput { .. } => ErrorCategory::Construct,

            Self::UnknownRune { .. } | Self::UnexpectedSymbol { .. } => ErrorCategory::Structural,

            Self::Io { .. } => ErrorCategory::Host,
        }
    }

    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::MissingIdentifier { .. } => "missing_identifier",
            Self::UnterminatedString => "unterminated_string",
            Self::UnterminatedParameters { .. } => "unterminated_parameters",
            Self::UnexpectedInSwitch { .. } => "unexpected_in_switch",
            Self::UnexpectedEndOfInput { .. } => "unexpected_end_of_input",
            Self::UnknownRune { .. } => "unknown_rune",
            Self::UnexpectedSymbol { .. } => "unexpected_symbol",
            Self::Io { .. } => "io",
        }
    }

    /// Short text shown under the offending symbol.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingIdentifier { .. } => "name expected here",
            Self::UnterminatedString => "string starts here",
            Self::UnterminatedParameters { .. } => "parameter list starts here",
            Self::UnexpectedInSwitch { .. } => "not allowed in a switch body",
            Self::UnexpectedEndOfInput { .. } => "input ends here",
            Self::UnknownRune { .. } => "unknown rune",
            Self::UnexpectedSymbol { .. } => "unexpected symbol",
            Self::Io { .. } => "while writing output",
        }
    }

    fn help(&self) -> Option<&'static str> {
        match self {
            Self::UnterminatedString => Some("close the string with another ᛟ"),
            Self::UnexpectedInSwitch { .. } => {
                Some("a switch body may only contain ᚲ <value>, ᛞ and a closing ᛘ")
            }
            Self::UnknownRune { .. } => Some("run `runic runes` to list the alphabet"),
            _ => None,
        }
    }
}

/// A positioned transpile failure. Immutable once raised.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub position: Position,
    span_len: usize,
    source_code: Option<Arc<NamedSource<String>>>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, position: Position) -> Self {
        Self {
            kind,
            position,
            span_len: 0,
            source_code: None,
        }
    }

    /// An error with no source location (line and column are 0).
    pub fn unpositioned(kind: ErrorKind) -> Self {
        Self::new(kind, Position::unknown())
    }

    pub fn with_span_len(mut self, len: usize) -> Self {
        self.span_len = len;
        self
    }

    /// Attaches the input this error was raised against.
    pub fn with_source(mut self, name: impl AsRef<str>, source: impl Into<String>) -> Self {
        self.source_code = Some(Arc::new(NamedSource::new(name, source.into())));
        self
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn span_len(&self) -> usize {
        self.span_len
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// The bare message, without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn code(&self) -> String {
        format!("runic::parse::{}", self.kind.code_suffix())
    }

    pub fn span(&self) -> SourceSpan {
        SourceSpan::new(self.position.offset.into(), self.span_len)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.position.is_known() {
            return write!(f, "{}", self.kind);
        }
        write!(
            f,
            "Line {}, Column {}: {}",
            self.position.line, self.position.column, self.kind
        )
    }
}

impl std::error::Error for ParseError {}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.kind
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.source_code.is_none() || !self.position.is_known() {
            return None;
        }
        let label =
            LabeledSpan::new_with_span(Some(self.kind.label().to_string()), self.span());
        Some(Box::new(std::iter::once(label)))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.source_code
            .as_deref()
            .map(|source| source as &dyn miette::SourceCode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: usize, column: usize) -> Position {
        Position {
            offset: 0,
            line,
            column,
        }
    }

    #[test]
    fn display_prefixes_known_positions() {
        let err = ParseError::new(
            ErrorKind::MissingIdentifier {
                expected: "function name",
            },
            at(3, 7),
        );
        assert_eq!(err.to_string(), "Line 3, Column 7: Expected function name");
    }

    #[test]
    fn display_omits_unknown_positions() {
        let err = ParseError::unpositioned(ErrorKind::Io {
            path: "output.cpp".into(),
            reason: "denied".into(),
        });
        assert_eq!(err.to_string(), "Failed to write 'output.cpp': denied");
        assert_eq!(err.category(), ErrorCategory::Host);
    }

    #[test]
    fn diagnostic_code_names_the_kind() {
        let err = ParseError::new(ErrorKind::UnknownRune { rune: 'ᛣ' }, at(1, 1));
        assert_eq!(err.code(), "runic::parse::unknown_rune");
        assert_eq!(err.category(), ErrorCategory::Structural);
    }

    #[test]
    fn labels_require_attached_source() {
        let err = ParseError::new(ErrorKind::UnterminatedString, at(1, 1)).with_span_len(3);
        assert!(err.labels().is_none());
        let err = err.with_source("input", "ᛟabc");
        assert_eq!(err.labels().map(|l| l.count()), Some(1));
    }
}
