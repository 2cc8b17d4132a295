//! Name Parsing
//!
//! Shared error and selector handling for the string names used by filters, fixtures and the CLI.

use std::str::FromStr;

use thiserror::Error;

/// Selector value meaning "no filter".
pub const ALL_SELECTOR: &str = "all";

/// Errors raised when a name does not match any known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The value is not a known name for the given kind.
    #[error("unknown {kind}: {value:?}")]
    Unknown {
        /// What was being parsed (e.g. "deal category")
        kind: &'static str,

        /// The rejected input
        value: String,
    },
}

impl ParseError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::Unknown {
            kind,
            value: value.to_string(),
        }
    }
}

/// Parse a dropdown-style selector, where `"all"` (any case) or an empty string means no filter.
///
/// # Errors
///
/// Returns the error of `T::from_str` when the value is neither empty, `"all"` nor a valid `T`.
pub fn parse_selector<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    if value.is_empty() || value.eq_ignore_ascii_case(ALL_SELECTOR) {
        return Ok(None);
    }

    value.parse().map(Some)
}
