//! Keyword sources recognized in directive values.
//!
//! As of Content Security Policy Level 3, keyword sources must be enclosed
//! in single quotes. The WebRTC draft adds `'allow'` and `'block'` for the
//! `webrtc` directive.

/// The `'none'` keyword source.
pub const SOURCE_NONE: &str = "'none'";
/// The `'self'` keyword source.
pub const SOURCE_SELF: &str = "'self'";
/// The `'unsafe-inline'` keyword source.
pub const SOURCE_UNSAFE_INLINE: &str = "'unsafe-inline'";
/// The `'unsafe-eval'` keyword source.
pub const SOURCE_UNSAFE_EVAL: &str = "'unsafe-eval'";
/// The `'strict-dynamic'` keyword source.
pub const SOURCE_STRICT_DYNAMIC: &str = "'strict-dynamic'";
/// The `'unsafe-hashes'` keyword source.
pub const SOURCE_UNSAFE_HASHES: &str = "'unsafe-hashes'";
/// The `'report-sample'` keyword source.
pub const SOURCE_REPORT_SAMPLE: &str = "'report-sample'";
/// The `'unsafe-allow-redirects'` keyword source.
pub const SOURCE_UNSAFE_ALLOW_REDIRECTS: &str = "'unsafe-allow-redirects'";
/// The `'wasm-unsafe-eval'` keyword source.
pub const SOURCE_WASM_UNSAFE_EVAL: &str = "'wasm-unsafe-eval'";

/// The `'allow'` value of the `webrtc` directive.
pub const WEBRTC_ALLOW: &str = "'allow'";
/// The `'block'` value of the `webrtc` directive.
pub const WEBRTC_BLOCK: &str = "'block'";

/// Every recognized keyword, already single-quoted.
pub const KEYWORD_SOURCES: [&str; 11] = [
    SOURCE_NONE,
    SOURCE_SELF,
    SOURCE_UNSAFE_INLINE,
    SOURCE_UNSAFE_EVAL,
    SOURCE_STRICT_DYNAMIC,
    SOURCE_UNSAFE_HASHES,
    SOURCE_REPORT_SAMPLE,
    SOURCE_UNSAFE_ALLOW_REDIRECTS,
    SOURCE_WASM_UNSAFE_EVAL,
    WEBRTC_ALLOW,
    WEBRTC_BLOCK,
];

/// Returns `true` if `token` is a keyword source.
///
/// The comparison is exact: the token must already be lower-case and
/// enclosed in single quotes.
///
/// # Examples
///
/// ```
/// use csp_core::is_keyword_source;
///
/// assert!(is_keyword_source("'self'"));
/// assert!(!is_keyword_source("self"));
/// assert!(!is_keyword_source("'SELF'"));
/// ```
pub fn is_keyword_source(token: &str) -> bool {
    KEYWORD_SOURCES.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sources_are_not_keywords() {
        for token in ["*", "https:", "example.com"] {
            assert!(!is_keyword_source(token), "{}", token);
        }
    }

    #[test]
    fn unquoted_keywords_are_not_keywords() {
        for token in ["none", "self", "unsafe-inline"] {
            assert!(!is_keyword_source(token), "{}", token);
        }
    }

    #[test]
    fn quoted_keywords_are_keywords() {
        for token in ["'none'", "'self'", "'unsafe-inline'"] {
            assert!(is_keyword_source(token), "{}", token);
        }
    }

    #[test]
    fn webrtc_values_are_keywords() {
        assert!(is_keyword_source(WEBRTC_ALLOW));
        assert!(is_keyword_source(WEBRTC_BLOCK));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!is_keyword_source("'Self'"));
        assert!(!is_keyword_source("'NONE'"));
    }

    #[test]
    fn registry_has_no_duplicates() {
        for (i, a) in KEYWORD_SOURCES.iter().enumerate() {
            for b in &KEYWORD_SOURCES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
