//! Content-Security-Policy header builder.
//!
//! This crate turns a structured set of directives into a canonical CSP
//! header value:
//! - **Normalization**: tokens are trimmed, and keyword sources such as
//!   `self` or `Unsafe-Inline` are lowered and single-quoted
//! - **Deterministic output**: clauses always appear in a fixed directive
//!   order, independent of how the set was built
//! - **Omission**: empty directives never reach the header
//!
//! Parsing existing policies, validating URLs or hashes, and attaching the
//! header to a response are left to the caller.
//!
//! # Core Types
//!
//! - [`Directives`]: One field per supported directive
//! - [`Directive`]: Identifier of a directive and its on-wire name
//! - [`policy`]: Serializes a [`Directives`] value
//! - [`canon`]: Normalizes a single source token
//!
//! # Examples
//!
//! ```
//! use csp_core::{policy, Directive, Directives, HEADER_KEY};
//!
//! let ds = Directives::basic()
//!     .with(Directive::ScriptSrc, ["self", "https://cdn.example.com"])
//!     .with(Directive::ObjectSrc, ["none"]);
//!
//! let header = (HEADER_KEY, policy(&ds));
//! assert_eq!(header.0, "Content-Security-Policy");
//! assert_eq!(
//!     header.1,
//!     "default-src 'self'; form-action 'self'; frame-ancestors 'self'; \
//!      object-src 'none'; script-src 'self' https://cdn.example.com;"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod canon;
mod directive;
mod directives;
mod error;
mod keyword;
mod policy;
mod preset;

#[cfg(test)]
mod test_utils;

pub use canon::{canon, canons};
pub use directive::{Directive, ValueShape};
pub use directives::{DirectiveValue, Directives};
pub use error::Error;
pub use keyword::{
    is_keyword_source, KEYWORD_SOURCES, SOURCE_NONE, SOURCE_REPORT_SAMPLE, SOURCE_SELF,
    SOURCE_STRICT_DYNAMIC, SOURCE_UNSAFE_ALLOW_REDIRECTS, SOURCE_UNSAFE_EVAL,
    SOURCE_UNSAFE_HASHES, SOURCE_UNSAFE_INLINE, SOURCE_WASM_UNSAFE_EVAL, WEBRTC_ALLOW,
    WEBRTC_BLOCK,
};
pub use policy::policy;
pub use preset::{basic, basic_tight};

/// Canonical name of the Content Security Policy header.
pub const HEADER_KEY: &str = "Content-Security-Policy";

/// Canonical name of the report-only variant of the header.
///
/// Browsers report violations of a policy sent under this name without
/// enforcing it.
pub const REPORT_ONLY_HEADER_KEY: &str = "Content-Security-Policy-Report-Only";
