//! Error types for record identifier parsing.
//!
//! Every parsing entry point returns [`Result`] carrying one of the variants below.
//! Formatting never fails, so there is no formatting error.
//!
//! ## Error Categories
//!
//! - **Empty input**: the identifier text is empty after trimming
//! - **Numbers**: integer-shaped text that does not fit a signed 64-bit integer
//! - **Literals**: array or object bodies that cannot be split into scalars
//! - **Things**: `table:id` input without the `:` separator
//!
//! ## Examples
//!
//! ```rust
//! use thing_id::{parse_thing, Error};
//!
//! let err = parse_thing("no-colon-here").unwrap_err();
//! assert!(matches!(err, Error::MissingTableSeparator { .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while parsing identifiers and things.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Identifier text is empty after trimming
    #[error("Empty identifier")]
    EmptyIdentifier,

    /// Integer-shaped text that is not a valid signed 64-bit integer
    #[error("Invalid number `{literal}`: {msg}")]
    InvalidNumber { literal: String, msg: String },

    /// Array body that cannot be split into scalars
    #[error("Malformed array element `{token}`: {msg}")]
    MalformedArray { token: String, msg: String },

    /// Object body containing a pair that cannot be split into key and value
    #[error("Malformed object pair `{pair}`: {msg}")]
    MalformedObject { pair: String, msg: String },

    /// `table:id` input without a colon
    #[error("Missing `:` table separator in `{input}`")]
    MissingTableSeparator { input: String },

    /// Custom error, used when bridging from serde
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid number error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thing_id::Error;
    ///
    /// let err = Error::invalid_number("99999999999999999999", "number too large");
    /// assert!(err.to_string().contains("99999999999999999999"));
    /// ```
    pub fn invalid_number(literal: &str, msg: impl fmt::Display) -> Self {
        Error::InvalidNumber {
            literal: literal.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a malformed array error for the offending element token.
    pub fn malformed_array(token: &str, msg: &str) -> Self {
        Error::MalformedArray {
            token: token.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a malformed object error for the offending pair token.
    pub fn malformed_object(pair: &str, msg: &str) -> Self {
        Error::MalformedObject {
            pair: pair.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn missing_table_separator(input: &str) -> Self {
        Error::MissingTableSeparator {
            input: input.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thing_id::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
