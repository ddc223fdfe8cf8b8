//! Error types for directive-level parsing and header conversions.
//!
//! Parsing a whole header with [`parse_cache_control`](crate::parse_cache_control)
//! never fails: malformed directives are dropped. These errors surface only
//! from the per-directive API ([`parse_directive`](crate::parse::parse_directive),
//! `Directive::from_str`) and from the optional `http` conversions.

use std::fmt;

use crate::directive::Directive;

/// Result type for fallible directive operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for directive parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The segment named no known directive.
    ///
    /// Tokens are matched exactly and case-sensitively, so `Max-Age` and
    /// vendor extensions such as `immutable` both land here.
    UnknownDirective(String),

    /// A numeric directive carried a value that is not a number.
    ///
    /// Covers a missing `=value`, an empty value and non-numeric text.
    InvalidValue {
        /// Directive whose value was rejected
        directive: Directive,
        /// Raw value text, untrimmed (empty when no `=` was present)
        value: String,
    },

    /// The segment was blank, e.g. produced by a trailing comma.
    EmptyDirective,

    /// Header bytes could not be converted to or from an HTTP header value.
    ///
    /// Only produced with the `http` feature enabled.
    InvalidHeaderValue(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownDirective(token) => write!(f, "Unknown directive: {}", token),
            Error::InvalidValue { directive, value } => {
                write!(f, "Invalid value for {}: {:?}", directive, value)
            }
            Error::EmptyDirective => write!(f, "Empty directive"),
            Error::InvalidHeaderValue(msg) => write!(f, "Invalid header value: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
