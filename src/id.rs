//! Record identifier representation.
//!
//! This module provides the [`Id`] enum, the parsed form of the part of a record
//! reference that follows the table name.
//!
//! ## Core Types
//!
//! - [`Id`]: number, text, complex atom, array or object identifier
//! - [`Scalar`]: element value of array and object identifiers
//!
//! ## Usage Patterns
//!
//! ### Parsing and formatting
//!
//! ```rust
//! use thing_id::Id;
//!
//! let id: Id = "1337".parse().unwrap();
//! assert_eq!(id, Id::Number(1337));
//! assert_eq!(id.to_string(), "1337");
//!
//! let id: Id = "⟨42⟩".parse().unwrap();
//! assert_eq!(id.as_str(), Some("42"));
//! assert_eq!(id.to_string(), "⟨42⟩");
//! ```
//!
//! ### Building values
//!
//! ```rust
//! use thing_id::{Id, Scalar};
//!
//! let id = Id::from(vec![Scalar::from("London"), Scalar::from("Paris")]);
//! assert_eq!(id.to_string(), "['London', 'Paris']");
//! ```

use crate::format::format;
use crate::parse::classify;
use crate::{Error, ObjectMap, Scalar};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A parsed record identifier.
///
/// Values are immutable once produced by the parser and can be shared freely
/// between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Id {
    /// A signed 64-bit integer, e.g. `person:1337`.
    Number(i64),
    /// A plain atom, e.g. `person:tobie`.
    Text(String),
    /// The raw inner text of a `⟨…⟩` escaped atom, e.g. `article:⟨10⟩`.
    ComplexAtom(String),
    /// An ordered array of scalars, e.g. `temperature:['London', '2024-02-16T00:18:48Z']`.
    Array(Vec<Scalar>),
    /// A keyed object of scalars, e.g. `temperature:{ location: 'London' }`.
    Object(ObjectMap),
}

impl Id {
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Id::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Id::Text(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_complex_atom(&self) -> bool {
        matches!(self, Id::ComplexAtom(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Id::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Id::Object(_))
    }

    /// If the identifier is a number, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Id::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text of a text or complex identifier. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thing_id::Id;
    ///
    /// assert_eq!(Id::Text("tobie".into()).as_str(), Some("tobie"));
    /// assert_eq!(Id::ComplexAtom("10".into()).as_str(), Some("10"));
    /// assert_eq!(Id::Number(10).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Id::Text(s) | Id::ComplexAtom(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Scalar]> {
        match self {
            Id::Array(elements) => Some(elements),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Id::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

impl FromStr for Id {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        classify(s)
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        classify(&text).map_err(serde::de::Error::custom)
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Number(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Text(value)
    }
}

impl From<Vec<Scalar>> for Id {
    fn from(value: Vec<Scalar>) -> Self {
        Id::Array(value)
    }
}

impl From<ObjectMap> for Id {
    fn from(value: ObjectMap) -> Self {
        Id::Object(value)
    }
}
