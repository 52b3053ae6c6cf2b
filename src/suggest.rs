//! Keyword completion for the editor front-ends.

use serde::Serialize;

use crate::syntax::SymbolTable;

/// Target-language keywords offered as completions.
pub const TARGET_KEYWORDS: &[&str] = &[
    "if",
    "else",
    "for",
    "while",
    "return",
    "int",
    "float",
    "double",
    "char",
    "void",
    "class",
    "namespace",
    "struct",
    "switch",
    "case",
    "default",
    "bool",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub keyword: String,
    /// The glyph that produces `keyword`, if the alphabet has one.
    pub rune: Option<char>,
}

/// Keywords and table fragments starting with `prefix`, sorted and deduplicated.
pub fn suggest(table: &SymbolTable, prefix: &str) -> Vec<Suggestion> {
    let fragments = table
        .entries()
        .into_iter()
        .map(|entry| entry.fragment)
        .filter(|fragment| fragment.starts_with(|c: char| c.is_ascii_alphabetic()));

    let mut keywords: Vec<&str> = TARGET_KEYWORDS
        .iter()
        .copied()
        .chain(fragments)
        .filter(|keyword| keyword.starts_with(prefix))
        .collect();
    keywords.sort_unstable();
    keywords.dedup();

    keywords
        .into_iter()
        .map(|keyword| Suggestion {
            keyword: keyword.to_string(),
            rune: rune_for(table, keyword),
        })
        .collect()
}

fn rune_for(table: &SymbolTable, keyword: &str) -> Option<char> {
    match keyword {
        "default" => Some(crate::syntax::table::glyph::DEFAULT),
        _ => table.rune_for(keyword).map(|entry| entry.rune),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(prefix: &str) -> Vec<String> {
        suggest(&SymbolTable::standard(), prefix)
            .into_iter()
            .map(|s| s.keyword)
            .collect()
    }

    #[test]
    fn prefix_match_is_sorted() {
        assert_eq!(keywords("c"), vec!["case", "char", "class"]);
    }

    #[test]
    fn suggestions_name_their_rune() {
        let found = suggest(&SymbolTable::standard(), "wh");
        assert_eq!(
            found,
            vec![Suggestion {
                keyword: "while".into(),
                rune: Some('ᛉ')
            }]
        );
    }

    #[test]
    fn keywords_without_a_glyph_still_complete() {
        let found = suggest(&SymbolTable::standard(), "name");
        assert_eq!(found[0].keyword, "namespace");
        assert_eq!(found[0].rune, None);
    }

    #[test]
    fn table_fragments_are_included() {
        assert!(keywords("std").contains(&"std::string".to_string()));
    }

    #[test]
    fn no_match_is_empty() {
        assert!(keywords("zz").is_empty());
    }
}
