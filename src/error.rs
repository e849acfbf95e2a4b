use std::fmt;

/// Errors that can occur in the CSP builder crate.
///
/// Serialization itself never fails; errors only come from looking up
/// directives by their on-wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The given name is not one of the supported directive names.
    UnknownDirective {
        /// The name that failed to resolve
        name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownDirective { name } => write!(f, "unknown directive: '{}'", name),
        }
    }
}

impl std::error::Error for Error {}
