//! Canned starting policies.

use crate::directives::Directives;
use crate::keyword::{SOURCE_NONE, SOURCE_SELF};
use crate::policy::policy;

fn self_only() -> Vec<String> {
    vec![SOURCE_SELF.to_string()]
}

impl Directives {
    /// A simple, non-strict set where `'self'` is set on `default-src`,
    /// `form-action` and `frame-ancestors`.
    pub fn basic() -> Self {
        Self {
            default_src: self_only(),
            form_action: self_only(),
            frame_ancestors: self_only(),
            ..Default::default()
        }
    }

    /// A tightened form of [`Directives::basic`].
    ///
    /// `default-src` is `'none'`, and `'self'` is set on `connect-src`,
    /// `form-action`, `frame-ancestors`, `img-src`, `script-src` and
    /// `style-src`.
    pub fn basic_tight() -> Self {
        Self {
            default_src: vec![SOURCE_NONE.to_string()],
            connect_src: self_only(),
            form_action: self_only(),
            frame_ancestors: self_only(),
            img_src: self_only(),
            script_src: self_only(),
            style_src: self_only(),
            ..Default::default()
        }
    }
}

/// Returns the serialized [`Directives::basic`] policy.
///
/// ```
/// assert_eq!(
///     csp_core::basic(),
///     "default-src 'self'; form-action 'self'; frame-ancestors 'self';"
/// );
/// ```
pub fn basic() -> String {
    policy(&Directives::basic())
}

/// Returns the serialized [`Directives::basic_tight`] policy.
pub fn basic_tight() -> String {
    policy(&Directives::basic_tight())
}
