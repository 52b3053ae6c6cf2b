//! Symbol-at-a-time scanner.
//!
//! Walks the input by codepoint, copies whitespace and pass-through text
//! verbatim, replaces table glyphs with their fragments, and hands any glyph
//! that opens a multi-symbol construct to its handler.

use tracing::{debug, trace};

use crate::errors::{ErrorKind, ParseError};
use crate::syntax::{constructs, Cursor, Symbol, SymbolTable};

pub struct Scanner<'t> {
    table: &'t SymbolTable,
}

impl<'t> Scanner<'t> {
    pub fn new(table: &'t SymbolTable) -> Self {
        Self { table }
    }

    /// Translates `source` in one forward pass, stopping at the first error.
    pub fn scan(&self, source: &str) -> Result<String, ParseError> {
        let mut cursor = Cursor::new(source);
        let mut output = String::with_capacity(source.len());

        loop {
            output.push_str(cursor.skip_whitespace());
            let Some(symbol) = cursor.peek() else {
                break;
            };
            self.step(symbol, &mut cursor, &mut output)?;
        }

        Ok(output)
    }

    fn step(
        &self,
        symbol: char,
        cursor: &mut Cursor<'_>,
        output: &mut String,
    ) -> Result<(), ParseError> {
        match self.table.classify(symbol) {
            Symbol::Rune(entry) => match entry.construct() {
                Some(construct) => {
                    let at = cursor.position();
                    debug!(
                        ?construct,
                        line = at.line,
                        column = at.column,
                        "dispatching construct"
                    );
                    let text = constructs::handle(construct, entry, self.table, cursor)?;
                    output.push_str(&text);
                }
                None => {
                    trace!(rune = %symbol, fragment = entry.fragment, "fragment");
                    cursor.bump();
                    output.push_str(entry.fragment);
                }
            },
            Symbol::Whitespace | Symbol::Literal => {
                cursor.bump();
                output.push(symbol);
            }
            Symbol::UnknownRune => {
                return Err(cursor.error(ErrorKind::UnknownRune { rune: symbol }));
            }
            Symbol::Unexpected => {
                return Err(cursor.error(ErrorKind::UnexpectedSymbol { found: symbol }));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Result<String, ParseError> {
        Scanner::new(&SymbolTable::standard()).scan(source)
    }

    #[test]
    fn plain_fragments_and_pass_through() {
        assert_eq!(scan("ᚷ (x ᛇ 0) ᛒ ᛏ x; ᛘ").unwrap(), "if (x != 0) { return x; }");
    }

    #[test]
    fn whitespace_is_preserved() {
        assert_eq!(scan("a\n\tᚢ  b").unwrap(), "a\n\t+  b");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(scan("").unwrap(), "");
        assert_eq!(scan("   \n").unwrap(), "   \n");
    }

    #[test]
    fn unknown_rune_reports_its_position() {
        let err = scan("x ᚢ\n  ᛣ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownRune { rune: 'ᛣ' });
        assert_eq!((err.line(), err.column()), (2, 3));
    }

    #[test]
    fn control_characters_are_structural_errors() {
        let err = scan("ab\u{1}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedSymbol { found: '\u{1}' });
        assert_eq!((err.line(), err.column()), (1, 3));
    }
}
