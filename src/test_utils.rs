//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

use crate::keyword::{is_keyword_source, KEYWORD_SOURCES};

fn arb_padding() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \\t\\n]{0,3}").unwrap()
}

/// A keyword written in arbitrary case with surrounding whitespace, paired
/// with its registry literal. Quoted spellings are only produced in lower
/// case, since quoted upper-case words are not recognized.
pub(crate) fn arb_keyword_spelling() -> impl Strategy<Value = (String, &'static str)> {
    (
        prop::sample::select(KEYWORD_SOURCES.to_vec()),
        prop::collection::vec(any::<bool>(), 32),
        any::<bool>(),
        arb_padding(),
        arb_padding(),
    )
        .prop_map(|(keyword, upper, quoted, left, right)| {
            let bare = keyword.trim_matches('\'');
            let word = if quoted {
                keyword.to_string()
            } else {
                bare.chars()
                    .zip(upper.iter().cycle())
                    .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                    .collect()
            };
            (format!("{}{}{}", left, word, right), keyword)
        })
}

/// A host, scheme or path-like token that never names a keyword.
pub(crate) fn arb_plain_token() -> impl Strategy<Value = String> {
    (
        arb_padding(),
        prop::string::string_regex("[A-Za-z0-9.:/*_-]{1,24}").unwrap(),
        arb_padding(),
    )
        .prop_map(|(left, body, right)| format!("{}{}{}", left, body, right))
        .prop_filter("must not name a keyword", |t| {
            !is_keyword_source(&format!("'{}'", t.trim().to_ascii_lowercase()))
        })
}
