use std::fmt;

use crate::canon::{canon, canons};
use crate::directive::Directive;
use crate::directives::{DirectiveValue, Directives};

/// Serializes `directives` into a Content-Security-Policy header value.
///
/// Clauses appear in [`Directive::ALL`] order, each formatted as
/// `<name> <tokens>;` and separated by a single space. Tokens are normalized
/// with [`canon`]. Empty lists and blank scalars are omitted; an empty set
/// yields an empty string.
///
/// # Examples
///
/// ```
/// use csp_core::{policy, Directives};
///
/// let ds = Directives {
///     default_src: vec!["self".to_string()],
///     style_src: vec!["self".to_string(), "example.com".to_string()],
///     report_to: "jd@example.com".to_string(),
///     ..Default::default()
/// };
///
/// assert_eq!(
///     policy(&ds),
///     "default-src 'self'; report-to jd@example.com; style-src 'self' example.com;"
/// );
/// ```
pub fn policy(directives: &Directives) -> String {
    let mut out = String::new();
    let mut emitted = 0usize;
    let mut omitted = 0usize;

    for directive in Directive::ALL {
        let value = directives.get(directive);
        if !value.is_present() {
            omitted += 1;
            continue;
        }

        let value = match value {
            DirectiveValue::List(tokens) => canons(tokens).join(" "),
            DirectiveValue::Scalar(token) => canon(token),
        };

        out.push_str(directive.name());
        out.push(' ');
        out.push_str(&value);
        out.push_str("; ");
        emitted += 1;
    }

    out.truncate(out.trim_end().len());

    tracing::debug!(
        directives = emitted,
        omitted,
        len = out.len(),
        "serialized content security policy"
    );
    out
}

impl fmt::Display for Directives {
    /// Writes the serialized policy, identical to [`policy`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&policy(self))
    }
}
