//! # thing_id
//!
//! Parsing and formatting for record references of the form `table:id`.
//!
//! ## What is a record reference?
//!
//! Document and graph stores address a record by its table name and an
//! identifier, written `table:id`. The identifier follows a small literal grammar:
//!
//! | Shape | Example | Parsed as |
//! |-------|---------|-----------|
//! | Integer | `person:1337` | [`Id::Number`] |
//! | Text | `person:tobie` | [`Id::Text`] |
//! | Escaped text | `article:⟨10⟩` | [`Id::ComplexAtom`] |
//! | Array | `temperature:['London', '2024-02-16T00:18:48.084Z']` | [`Id::Array`] |
//! | Object | `temperature:{ location: 'London' }` | [`Id::Object`] |
//!
//! Array and object elements are [`Scalar`]s: text, or a timestamp when the
//! element is an ISO 8601 date-time.
//!
//! ## Quick Start
//!
//! ```rust
//! use thing_id::{parse_thing, format_thing, Id};
//!
//! let thing = parse_thing("entry:1337").unwrap();
//! assert_eq!(thing.table(), "entry");
//! assert_eq!(thing.id(), &Id::Number(1337));
//! assert_eq!(format_thing(&thing), "entry:1337");
//! ```
//!
//! ### Identifiers on their own
//!
//! ```rust
//! use thing_id::{classify, format, Id};
//!
//! let id = classify("⟨42⟩").unwrap();
//! assert_eq!(id, Id::ComplexAtom("42".to_string()));
//!
//! // Numeric-looking text is escaped so it re-parses as text
//! assert_eq!(format(&Id::Text("42".to_string())), "⟨42⟩");
//! ```
//!
//! ## Error Handling
//!
//! All parsing functions return [`Result`]; malformed input is reported through
//! [`Error`] and never replaced by a default value. Formatting never fails.
//!
//! ## Logging
//!
//! Classification decisions are emitted as `tracing` events at `TRACE` level and
//! rejected inputs at `DEBUG` level. The crate installs no subscriber.
//!
//! ## Known Limitations
//!
//! Array and object bodies are split on every comma, so scalar text cannot
//! contain a comma. Such input is rejected with [`Error::MalformedArray`] or
//! [`Error::MalformedObject`] rather than parsed incorrectly.

pub mod error;
pub mod format;
pub mod id;
pub mod map;
pub mod options;
pub mod parse;
pub mod scalar;
pub mod thing;
pub mod timestamp;

pub use error::{Error, Result};
pub use format::{format, format_scalar, format_with_options};
pub use id::Id;
pub use map::ObjectMap;
pub use options::{FormatOptions, KeyOrder, Precision};
pub use parse::{classify, parse_array, parse_object};
pub use scalar::{parse_scalar, Scalar};
pub use thing::{format_thing, format_thing_with_options, parse_thing, Thing};
pub use timestamp::Timestamp;
