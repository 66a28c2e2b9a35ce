//! Post title normalization.
//!
//! Titles on music subreddits look like
//! `[FRESH] Lil Pump - Nice 2 Yeet ya [prod. by D4NNY]`. [`parse`] moves the
//! bracketed annotations into a tag set and keeps the rest as a search query,
//! [`truncate`] cuts an unbracketed featuring credit off the end of the query.
//!
//! Titles are assumed to be well-formed. Malformed input never fails: an
//! unterminated tag swallows the rest of the title and a closer that does not
//! match the opener stays inside the tag.

use std::collections::HashSet;

use crate::types::NormalizedTitle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InTag { opener: char },
}

fn closer_for(opener: char) -> char {
    match opener {
        '[' => ']',
        _ => ')',
    }
}

/// Splits a raw post title into a lowercase search query and a tag set.
///
/// Every character is lower-cased, every `-` is dropped, and each balanced
/// `[...]` or `(...)` group is split on whitespace into tags. The query is
/// re-joined with single spaces.
///
/// # Example
///
/// ```
/// use freshcli::title::parse;
///
/// let parsed = parse("[FRESH] Lil Pump - Nice 2 Yeet ya [prod. by D4NNY]");
/// assert_eq!(parsed.query, "lil pump nice 2 yeet ya");
/// assert!(parsed.has_tag("fresh"));
/// ```
pub fn parse(title: &str) -> NormalizedTitle {
    let mut state = ScanState::Outside;
    let mut tag_buf = String::new();
    let mut query_buf = String::new();
    let mut tags = HashSet::new();

    for character in title.chars().flat_map(char::to_lowercase) {
        match (state, character) {
            (_, '-') => {}
            (ScanState::Outside, '[' | '(') => {
                state = ScanState::InTag { opener: character };
            }
            (ScanState::InTag { .. }, '[' | '(') => tag_buf.push(character),
            (ScanState::InTag { opener }, ']' | ')') if character == closer_for(opener) => {
                for word in tag_buf.split_whitespace() {
                    if word.chars().any(char::is_alphanumeric) {
                        tags.insert(word.to_string());
                    }
                }
                tag_buf.clear();
                state = ScanState::Outside;
            }
            (ScanState::InTag { .. }, _) => tag_buf.push(character),
            // stray closer
            (ScanState::Outside, ']' | ')') => {}
            (ScanState::Outside, _) => query_buf.push(character),
        }
    }

    NormalizedTitle {
        query: query_buf.split_whitespace().collect::<Vec<_>>().join(" "),
        tags,
    }
}

/// Drops the first featuring marker word of `query` and everything after it.
///
/// Words are compared lower-cased against `markers`. Without a marker the
/// query is returned with its whitespace collapsed.
pub fn truncate(query: &str, markers: &HashSet<String>) -> String {
    query
        .split_whitespace()
        .take_while(|word| !markers.contains(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs [`parse`] and then [`truncate`] on the resulting query.
pub fn normalize(title: &str, markers: &HashSet<String>) -> NormalizedTitle {
    let parsed = parse(title);
    NormalizedTitle {
        query: truncate(&parsed.query, markers),
        tags: parsed.tags,
    }
}
