//! Source positions and the codepoint cursor shared by the scanner and every
//! construct handler.

use serde::Serialize;

use crate::errors::{ErrorKind, ParseError};

/// A location in the source text.
///
/// `offset` is a byte offset (used for diagnostic spans); `line` and `column`
/// are 1-based and counted in codepoints. A line of 0 means "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The position of the first symbol of an input.
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Placeholder for errors that are not tied to a source location.
    pub fn unknown() -> Self {
        Self {
            offset: 0,
            line: 0,
            column: 0,
        }
    }

    pub fn is_known(&self) -> bool {
        self.line != 0
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

/// Forward-only cursor over one input unit.
///
/// The cursor steps by decoded `char`, never by byte, so a multi-byte glyph
/// is always one indivisible symbol. It is `Copy`: handlers take a snapshot
/// to look ahead and simply drop it if the lookahead does not match.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'src> {
    source: &'src str,
    position: Position,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: Position::start(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'src str {
        &self.source[self.position.offset..]
    }

    pub fn is_at_end(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes one symbol, updating line and column.
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position.offset += ch.len_utf8();
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(ch)
    }

    /// Consumes `expected` if it is the next symbol.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes symbols while `predicate` holds and returns the consumed slice.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'src str {
        let start = self.position.offset;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.bump();
        }
        &self.source[start..self.position.offset]
    }

    pub fn skip_whitespace(&mut self) -> &'src str {
        self.eat_while(char::is_whitespace)
    }

    /// Consumes the cursor, yielding each remaining symbol with its position.
    pub fn positions(mut self) -> impl Iterator<Item = (Position, char)> + 'src {
        std::iter::from_fn(move || {
            let at = self.position;
            self.bump().map(|ch| (at, ch))
        })
    }

    /// Builds an error located at the current symbol.
    pub fn error(&self, kind: ErrorKind) -> ParseError {
        let len = self.peek().map_or(0, char::len_utf8);
        ParseError::new(kind, self.position).with_span_len(len)
    }
}
