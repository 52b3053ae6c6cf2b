//! The rune alphabet: an immutable glyph → fragment mapping.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

/// Glyphs with fixed structural roles outside the plain fragment lookup.
pub mod glyph {
    pub const BLOCK_OPEN: char = 'ᛒ';
    pub const BLOCK_CLOSE: char = 'ᛘ';
    pub const STRING_DELIMITER: char = 'ᛟ';
    pub const COMMENT: char = 'ᛞ';
    /// Inside a switch body the comment glyph reads as `default`.
    pub const DEFAULT: char = 'ᛞ';
    pub const CASE: char = 'ᚲ';
    pub const SWITCH: char = 'ᚹ';
    pub const CLASS: char = 'ᛥ';
    pub const VOID: char = 'ᛤ';
    /// The type glyph that declares a custom type alias in declaration position.
    pub const CUSTOM_TYPE: char = 'ᛚ';

    /// The Runic Unicode block. Codepoints here are reserved for the alphabet.
    pub const RUNIC_BLOCK: std::ops::RangeInclusive<char> = '\u{16A0}'..='\u{16FF}';
}

/// Multi-symbol constructs owned by a dedicated handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Construct {
    Function,
    Class,
    Switch,
    StringLiteral,
    Comment,
    CustomType,
}

/// What a glyph stands for in the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Keyword,
    Operator,
    /// Type names. In statement position these open a function header.
    Type,
    Punctuation,
    /// A glyph that always starts the given construct.
    Construct(Construct),
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Operator => "operator",
            Category::Type => "type",
            Category::Punctuation => "punctuation",
            Category::Construct(_) => "construct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub rune: char,
    pub fragment: &'static str,
    pub category: Category,
    pub meaning: &'static str,
}

impl Entry {
    pub const fn new(
        rune: char,
        fragment: &'static str,
        category: Category,
        meaning: &'static str,
    ) -> Self {
        Self {
            rune,
            fragment,
            category,
            meaning,
        }
    }

    /// The construct this glyph dispatches to when the scanner meets it.
    pub fn construct(&self) -> Option<Construct> {
        match self.category {
            Category::Type => Some(Construct::Function),
            Category::Construct(construct) => Some(construct),
            _ => None,
        }
    }
}

use Category::*;

const STANDARD_ENTRIES: &[Entry] = &[
    Entry::new('ᚠ', "std::cout <<", Keyword, "output to console"),
    Entry::new('ᛜ', "std::cin >>", Keyword, "input from console"),
    Entry::new('ᚱ', "for", Keyword, "for loop"),
    Entry::new('ᚷ', "if", Keyword, "if condition"),
    Entry::new('ᚨ', "else", Keyword, "else branch"),
    Entry::new('ᛉ', "while", Keyword, "while loop"),
    Entry::new('ᛏ', "return", Keyword, "return from function"),
    Entry::new('ᚲ', "case", Keyword, "switch case"),
    Entry::new('ᛧ', "struct", Keyword, "struct declaration"),
    Entry::new('ᚢ', "+", Operator, "addition"),
    Entry::new('ᚦ', "-", Operator, "subtraction"),
    Entry::new('ᚺ', "/", Operator, "division"),
    Entry::new('ᚻ', "%", Operator, "modulo"),
    Entry::new('ᚼ', "<<", Operator, "left shift"),
    Entry::new('ᚽ', ">>", Operator, "right shift"),
    Entry::new('ᚾ', "&", Operator, "bitwise and"),
    Entry::new('ᚿ', "|", Operator, "bitwise or"),
    Entry::new('ᛀ', "^", Operator, "bitwise xor"),
    Entry::new('ᛁ', "~", Operator, "bitwise not"),
    Entry::new('ᛃ', "=", Operator, "assignment"),
    Entry::new('ᛇ', "!=", Operator, "not equal"),
    Entry::new('ᛋ', "||", Operator, "logical or"),
    Entry::new('ᛗ', "->", Operator, "member arrow"),
    Entry::new('ᛒ', "{", Punctuation, "start of block"),
    Entry::new('ᛘ', "}", Punctuation, "end of block"),
    Entry::new('ᛤ', "void", Type, "void return type"),
    Entry::new('ᛚ', "int", Type, "integer type"),
    Entry::new('ᛦ', "float", Type, "float type"),
    Entry::new('ᛙ', "char", Type, "char type"),
    Entry::new('ᛠ', "double", Type, "double type"),
    Entry::new('ᛡ', "bool", Type, "boolean type"),
    Entry::new('ᛝ', "std::string", Type, "string type"),
    Entry::new('ᛥ', "class", Construct(Construct::Class), "class declaration"),
    Entry::new('ᚹ', "switch", Construct(Construct::Switch), "switch statement"),
    Entry::new(
        'ᛟ',
        "\"",
        Construct(Construct::StringLiteral),
        "string delimiter",
    ),
    Entry::new('ᛞ', "//", Construct(Construct::Comment), "comment marker"),
];

/// How the scanner should treat one input symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol<'t> {
    Rune(&'t Entry),
    Whitespace,
    /// Identifiers, digits and target-language punctuation, copied verbatim.
    Literal,
    /// A Runic-block codepoint with no table entry.
    UnknownRune,
    /// Anything else: control characters, stray symbols, emoji.
    Unexpected,
}

/// Immutable glyph → fragment mapping, built once and only read afterwards.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<char, Entry>,
}

impl SymbolTable {
    /// The standard rune alphabet.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_ENTRIES.iter().cloned())
    }

    /// Builds a table from `entries`. A glyph registered twice keeps its
    /// later meaning; the overwrite is logged.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut map: HashMap<char, Entry> = HashMap::new();
        for entry in entries {
            if let Some(previous) = map.insert(entry.rune, entry) {
                let current = &map[&previous.rune];
                warn!(
                    rune = %previous.rune,
                    dropped = previous.fragment,
                    kept = current.fragment,
                    "rune registered twice; earlier meaning is unreachable"
                );
            }
        }
        Self { entries: map }
    }

    pub fn lookup(&self, rune: char) -> Option<&Entry> {
        self.entries.get(&rune)
    }

    pub fn fragment(&self, rune: char) -> Option<&'static str> {
        self.lookup(rune).map(|entry| entry.fragment)
    }

    pub fn contains(&self, rune: char) -> bool {
        self.entries.contains_key(&rune)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, ordered by codepoint.
    pub fn entries(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.rune);
        entries
    }

    /// Reverse lookup: the glyph whose fragment is exactly `fragment`.
    pub fn rune_for(&self, fragment: &str) -> Option<&Entry> {
        self.entries().into_iter().find(|e| e.fragment == fragment)
    }

    pub fn classify(&self, ch: char) -> Symbol<'_> {
        if let Some(entry) = self.lookup(ch) {
            Symbol::Rune(entry)
        } else if ch.is_whitespace() {
            Symbol::Whitespace
        } else if glyph::RUNIC_BLOCK.contains(&ch) {
            Symbol::UnknownRune
        } else if ch.is_alphanumeric() || ch == '_' || ch.is_ascii_punctuation() {
            Symbol::Literal
        } else {
            Symbol::Unexpected
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}
