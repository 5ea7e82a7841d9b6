//! Record references of the form `table:id`.
//!
//! A [`Thing`] pairs a table name with a parsed [`Id`]. It is a plain value:
//! immutable once built, cheap to clone and safe to share across threads.
//!
//! ```rust
//! use thing_id::{parse_thing, Id, Thing};
//!
//! let thing = parse_thing("person:tobie").unwrap();
//! assert_eq!(thing, Thing::new("person", Id::Text("tobie".to_string())));
//! assert_eq!(thing.to_string(), "person:tobie");
//! ```
//!
//! ## Serde
//!
//! Things serialize as their formatted string and deserialize from one, so any
//! serde format carries them as plain strings:
//!
//! ```rust
//! use thing_id::Thing;
//!
//! let thing: Thing = serde_json::from_str("\"article:⟨10⟩\"").unwrap();
//! assert_eq!(thing.table(), "article");
//! assert_eq!(serde_json::to_string(&thing).unwrap(), "\"article:⟨10⟩\"");
//! ```

use crate::format::format_with_options;
use crate::parse::classify;
use crate::{Error, FormatOptions, Id, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const TABLE_SEPARATOR: char = ':';

/// A table name paired with a record identifier.
///
/// The table name is not validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thing {
    table: String,
    id: Id,
}

impl Thing {
    /// Creates a thing from a table name and an already parsed identifier.
    #[must_use]
    pub fn new(table: impl Into<String>, id: Id) -> Self {
        Thing {
            table: table.into(),
            id,
        }
    }

    /// Creates a thing from a table name and raw identifier text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thing_id::{Id, Thing};
    ///
    /// let thing = Thing::parse_parts("entry", "1337").unwrap();
    /// assert_eq!(thing.id(), &Id::Number(1337));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns any error raised by [`classify`](crate::classify) for `id`.
    pub fn parse_parts(table: impl Into<String>, id: &str) -> Result<Self> {
        Ok(Thing::new(table, classify(id)?))
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Consumes the thing, returning its table name and identifier.
    #[must_use]
    pub fn into_parts(self) -> (String, Id) {
        (self.table, self.id)
    }
}

/// Parses `table:id` text into a [`Thing`].
///
/// The input is split on its first colon; the remainder, colons included, is
/// the identifier text.
///
/// # Errors
///
/// Returns [`Error::MissingTableSeparator`] if `s` contains no colon, or any
/// error raised while classifying the identifier.
///
/// # Examples
///
/// ```rust
/// use thing_id::{parse_thing, Error, Id};
///
/// let thing = parse_thing("temperature:{ location: 'London' }").unwrap();
/// assert!(thing.id().is_object());
///
/// assert!(matches!(
///     parse_thing("no-colon-here"),
///     Err(Error::MissingTableSeparator { .. })
/// ));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_thing(s: &str) -> Result<Thing> {
    let (table, id) = s
        .split_once(TABLE_SEPARATOR)
        .ok_or_else(|| Error::missing_table_separator(s))?;
    Thing::parse_parts(table, id)
}

/// Formats a [`Thing`] as `table:id` with default options.
#[must_use]
pub fn format_thing(thing: &Thing) -> String {
    format_thing_with_options(thing, &FormatOptions::default())
}

#[must_use]
pub fn format_thing_with_options(thing: &Thing, options: &FormatOptions) -> String {
    let id = format_with_options(&thing.id, options);
    let mut output = String::with_capacity(thing.table.len() + 1 + id.len());
    output.push_str(&thing.table);
    output.push(TABLE_SEPARATOR);
    output.push_str(&id);
    output
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_thing(self))
    }
}

impl FromStr for Thing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_thing(s)
    }
}

impl Serialize for Thing {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Thing {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ThingVisitor;

        impl<'de> Visitor<'de> for ThingVisitor {
            type Value = Thing;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a record reference of the form `table:id`")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                parse_thing(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ThingVisitor)
    }
}
