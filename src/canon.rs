use crate::keyword::is_keyword_source;

/// Returns `token` in its canonical on-wire form.
///
/// Leading and trailing whitespace is trimmed. If the trimmed token names a
/// keyword source (case-insensitively, quoted or not), it is lowered and
/// enclosed in single quotes. Any other token keeps its case and content.
///
/// # Examples
///
/// ```
/// use csp_core::canon;
///
/// assert_eq!(canon("  Self "), "'self'");
/// assert_eq!(canon("'unsafe-inline'"), "'unsafe-inline'");
/// assert_eq!(canon(" example.com/FooBar "), "example.com/FooBar");
/// ```
pub fn canon(token: &str) -> String {
    let trimmed = token.trim();
    let quoted = format!("'{}'", trimmed.to_ascii_lowercase());
    if is_keyword_source(&quoted) {
        quoted
    } else {
        trimmed.to_string()
    }
}

/// Applies [`canon`] to every token, preserving order and length.
///
/// Empty tokens are kept; omission of empty directives happens during
/// serialization.
pub fn canons<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| canon(t.as_ref())).collect()
}
