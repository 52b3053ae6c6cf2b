//! Handlers for the multi-symbol constructs.
//!
//! Each handler starts with the cursor on its trigger glyph, consumes strictly
//! forward, and returns the translated text. Handlers scan a flat run of
//! symbols; nothing here re-enters the scanner.

use crate::errors::{ErrorKind, ParseError};
use crate::syntax::table::glyph;
use crate::syntax::{Construct, Cursor, Entry, Symbol, SymbolTable};

type HandlerResult = Result<String, ParseError>;

pub(crate) fn handle(
    construct: Construct,
    entry: &Entry,
    table: &SymbolTable,
    cursor: &mut Cursor<'_>,
) -> HandlerResult {
    match construct {
        Construct::Function if entry.rune == glyph::CUSTOM_TYPE => {
            match declaration_form(table, cursor) {
                DeclarationForm::Header => function_header(entry, table, cursor),
                DeclarationForm::Alias => custom_type(entry, table, cursor),
                DeclarationForm::Variable => {
                    cursor.bump();
                    Ok(entry.fragment.to_string())
                }
            }
        }
        Construct::Function => function_header(entry, table, cursor),
        Construct::CustomType => custom_type(entry, table, cursor),
        Construct::Class => class_header(table, cursor),
        Construct::Switch => switch_statement(table, cursor),
        Construct::StringLiteral => string_literal(cursor),
        Construct::Comment => line_comment(cursor),
    }
}

/// `<type> <name>(<params>) {`
fn function_header(entry: &Entry, table: &SymbolTable, cursor: &mut Cursor<'_>) -> HandlerResult {
    cursor.bump();
    let after_type = *cursor;
    cursor.skip_whitespace();

    let name = identifier(cursor, table);
    if name.is_empty() {
        return Err(after_type.error(ErrorKind::MissingIdentifier {
            expected: "function name",
        }));
    }

    let params = if lookahead(cursor, |c| c == '(') {
        parameter_list(name, table, cursor)?
    } else {
        String::new()
    };
    absorb_block_open(cursor);

    Ok(format!("{} {}({}) {{", entry.fragment, name, params))
}

/// `typedef <type> <name>;`. A `;` closing the declaration is absorbed.
fn custom_type(entry: &Entry, table: &SymbolTable, cursor: &mut Cursor<'_>) -> HandlerResult {
    cursor.bump();
    cursor.skip_whitespace();
    let name = identifier(cursor, table);
    if name.is_empty() {
        return Ok(entry.fragment.to_string());
    }
    let mut ahead = *cursor;
    ahead.eat_while(is_inline_whitespace);
    if ahead.eat(';') {
        *cursor = ahead;
    }
    Ok(format!("typedef {} {};", entry.fragment, name))
}

/// `class <name> {`
fn class_header(table: &SymbolTable, cursor: &mut Cursor<'_>) -> HandlerResult {
    cursor.bump();
    let after_keyword = *cursor;
    cursor.skip_whitespace();

    let name = identifier(cursor, table);
    if name.is_empty() {
        return Err(after_keyword.error(ErrorKind::MissingIdentifier {
            expected: "class name",
        }));
    }
    absorb_block_open(cursor);

    Ok(format!("class {} {{", name))
}

/// `switch (<subject>) {` followed by one line per case/default marker.
fn switch_statement(table: &SymbolTable, cursor: &mut Cursor<'_>) -> HandlerResult {
    cursor.bump();
    cursor.skip_whitespace();

    let subject = identifier(cursor, table);
    if subject.is_empty() {
        return Err(cursor.error(ErrorKind::MissingIdentifier {
            expected: "switch subject",
        }));
    }
    absorb_block_open(cursor);

    let mut output = format!("switch ({}) {{\n", subject);
    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => {
                return Err(cursor.error(ErrorKind::UnexpectedEndOfInput {
                    construct: "switch statement",
                }))
            }
            Some(glyph::CASE) => {
                cursor.bump();
                cursor.skip_whitespace();
                let value = identifier(cursor, table);
                if value.is_empty() {
                    return Err(cursor.error(ErrorKind::MissingIdentifier {
                        expected: "case value",
                    }));
                }
                output.push_str(&format!("case {}: \n", value));
            }
            Some(glyph::DEFAULT) => {
                cursor.bump();
                output.push_str("default: \n");
            }
            Some(glyph::BLOCK_CLOSE | '}') => {
                cursor.bump();
                output.push_str("}\n");
                return Ok(output);
            }
            Some(found) => {
                return Err(cursor.error(ErrorKind::UnexpectedInSwitch { found }));
            }
        }
    }
}

/// `ᛟtextᛟ` becomes `"text"`; the contents are copied verbatim.
fn string_literal(cursor: &mut Cursor<'_>) -> HandlerResult {
    let opening = *cursor;
    cursor.bump();

    let contents = cursor.eat_while(|c| c != glyph::STRING_DELIMITER);
    if !cursor.eat(glyph::STRING_DELIMITER) {
        return Err(opening.error(ErrorKind::UnterminatedString));
    }

    Ok(format!("\"{}\"", contents))
}

/// Everything up to, not including, the next newline.
fn line_comment(cursor: &mut Cursor<'_>) -> HandlerResult {
    cursor.bump();
    let text = cursor.eat_while(|c| c != '\n');
    Ok(format!("//{}", text))
}

// ============================================================================
// SHARED SCANNING HELPERS
// ============================================================================

/// A run of symbols up to whitespace, `(`, `{`, `}`, or any table glyph.
fn identifier<'src>(cursor: &mut Cursor<'src>, table: &SymbolTable) -> &'src str {
    cursor.eat_while(|c| {
        !c.is_whitespace() && !matches!(c, '(' | '{' | '}') && !table.contains(c)
    })
}

/// Whether the next non-whitespace symbol satisfies `predicate`. On a match
/// the whitespace before it is consumed; otherwise nothing moves.
fn lookahead(cursor: &mut Cursor<'_>, predicate: impl Fn(char) -> bool) -> bool {
    let mut probe = *cursor;
    probe.skip_whitespace();
    match probe.peek() {
        Some(c) if predicate(c) => {
            *cursor = probe;
            true
        }
        _ => false,
    }
}

fn is_block_open(c: char) -> bool {
    c == glyph::BLOCK_OPEN || c == '{'
}

/// Header constructs already emit `{`, so an explicit opener is swallowed.
fn absorb_block_open(cursor: &mut Cursor<'_>) {
    if lookahead(cursor, is_block_open) {
        cursor.bump();
    }
}

/// How the custom-type glyph reads in its position.
enum DeclarationForm {
    /// `ᛚ name(…)` or `ᛚ name ᛒ`: a function returning the type.
    Header,
    /// `ᛚ name` ending the line, the input, or a `;`: a type alias.
    Alias,
    /// Anything else, such as `ᛚ i ᛃ 0;`: the bare type keyword.
    Variable,
}

fn declaration_form(table: &SymbolTable, cursor: &Cursor<'_>) -> DeclarationForm {
    let mut probe = *cursor;
    probe.bump();
    probe.skip_whitespace();
    if identifier(&mut probe, table).is_empty() {
        return DeclarationForm::Header;
    }
    let mut ahead = probe;
    if lookahead(&mut ahead, |c| c == '(' || is_block_open(c)) {
        return DeclarationForm::Header;
    }
    probe.eat_while(is_inline_whitespace);
    match probe.peek() {
        None | Some('\n' | ';') => DeclarationForm::Alias,
        Some(_) => DeclarationForm::Variable,
    }
}

fn is_inline_whitespace(c: char) -> bool {
    c.is_whitespace() && c != '\n'
}

/// Copies `( … )`, translating plain glyphs inside it.
fn parameter_list(function: &str, table: &SymbolTable, cursor: &mut Cursor<'_>) -> HandlerResult {
    let opening = *cursor;
    cursor.bump();

    let mut params = String::new();
    loop {
        let Some(ch) = cursor.peek() else {
            return Err(opening.error(ErrorKind::UnterminatedParameters {
                function: function.to_string(),
            }));
        };
        if ch == ')' {
            cursor.bump();
            return Ok(params);
        }
        if ch == glyph::STRING_DELIMITER {
            params.push_str(&string_literal(cursor)?);
            continue;
        }
        match table.classify(ch) {
            Symbol::Rune(entry) => params.push_str(entry.fragment),
            Symbol::Whitespace | Symbol::Literal => params.push(ch),
            Symbol::UnknownRune => return Err(cursor.error(ErrorKind::UnknownRune { rune: ch })),
            Symbol::Unexpected => {
                return Err(cursor.error(ErrorKind::UnexpectedSymbol { found: ch }))
            }
        }
        cursor.bump();
    }
}
