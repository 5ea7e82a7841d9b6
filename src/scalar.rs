//! Scalar values found inside array and object identifiers.
//!
//! A [`Scalar`] is either text or a [`Timestamp`]. Scalars never fail to parse:
//! anything that is not a timestamp is text.
//!
//! ```rust
//! use thing_id::{parse_scalar, Scalar};
//!
//! assert_eq!(parse_scalar(" 'London' "), Scalar::from("London"));
//! assert!(parse_scalar("'2024-02-16T00:18:48.084Z'").is_timestamp());
//! ```

use crate::format::format_scalar;
use crate::timestamp::{self, Timestamp};
use crate::FormatOptions;
use std::fmt;

const QUOTE: char = '\'';

/// An element value of an array or object identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    Text(String),
    Timestamp(Timestamp),
}

impl Scalar {
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Scalar::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Scalar::Timestamp(_))
    }

    /// If the scalar is text, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Timestamp(_) => None,
        }
    }

    /// If the scalar is a timestamp, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Scalar::Timestamp(ts) => Some(ts),
            Scalar::Text(_) => None,
        }
    }
}

/// Parses one literal token into a [`Scalar`].
///
/// Surrounding whitespace is trimmed, then one layer of single quotes is removed
/// when present on both ends. The remainder becomes a timestamp if it is one and
/// text otherwise.
///
/// # Examples
///
/// ```rust
/// use thing_id::{parse_scalar, Scalar};
///
/// assert_eq!(parse_scalar("''nested''"), Scalar::from("'nested'"));
/// assert_eq!(parse_scalar("bare"), Scalar::from("bare"));
/// ```
#[must_use]
pub fn parse_scalar(token: &str) -> Scalar {
    let content = unquote(token.trim());
    match timestamp::recognize(content) {
        Some(ts) => Scalar::Timestamp(ts),
        None => Scalar::Text(content.to_string()),
    }
}

/// Strips a single layer of surrounding single quotes.
fn unquote(token: &str) -> &str {
    if is_quoted(token) {
        &token[1..token.len() - 1]
    } else {
        token
    }
}

#[inline]
fn is_quoted(token: &str) -> bool {
    token.len() >= 2 && token.starts_with(QUOTE) && token.ends_with(QUOTE)
}

/// Returns `true` if the trimmed token opens or closes a quote without the other.
///
/// This is how a comma inside a quoted scalar shows up after the naive split.
pub(crate) fn has_unbalanced_quote(token: &str) -> bool {
    let token = token.trim();
    (token.starts_with(QUOTE) || token.ends_with(QUOTE)) && !is_quoted(token)
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_scalar(self, &FormatOptions::default()))
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<Timestamp> for Scalar {
    fn from(value: Timestamp) -> Self {
        Scalar::Timestamp(value)
    }
}
