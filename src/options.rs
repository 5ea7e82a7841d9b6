//! Configuration options for identifier formatting.
//!
//! This module provides types to customize formatted output:
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`KeyOrder`]: Order in which object identifier pairs are written
//! - [`Precision`]: Fractional-second digits written for timestamps
//!
//! Parsing accepts every formatting variant, so options never affect round-trips
//! of values produced by the parser.
//!
//! ## Examples
//!
//! ```rust
//! use thing_id::{classify, format_with_options, FormatOptions, KeyOrder};
//!
//! let id = classify("{ b: 'two', a: 'one' }").unwrap();
//! let options = FormatOptions::new().with_key_order(KeyOrder::Sorted);
//! assert_eq!(format_with_options(&id, &options), "{a: 'one', b: 'two'}");
//! ```

use chrono::SecondsFormat;

/// Order of pairs when formatting an object identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Pairs are written in the order they were inserted (parse order).
    #[default]
    Insertion,
    /// Pairs are written sorted by key.
    Sorted,
}

/// Fractional-second precision for formatted timestamps.
///
/// # Examples
///
/// ```rust
/// use thing_id::Precision;
/// use chrono::SecondsFormat;
///
/// assert_eq!(Precision::Millis.seconds_format(), SecondsFormat::Millis);
/// assert_eq!(Precision::Auto.seconds_format(), SecondsFormat::AutoSi);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Precision {
    /// Shortest of 0, 3, 6 or 9 digits that represents the instant exactly.
    #[default]
    Auto,
    Millis,
    Micros,
    Nanos,
}

impl Precision {
    #[must_use]
    pub const fn seconds_format(&self) -> SecondsFormat {
        match self {
            Precision::Auto => SecondsFormat::AutoSi,
            Precision::Millis => SecondsFormat::Millis,
            Precision::Micros => SecondsFormat::Micros,
            Precision::Nanos => SecondsFormat::Nanos,
        }
    }
}

/// Configuration options for identifier formatting.
///
/// # Examples
///
/// ```rust
/// use thing_id::{FormatOptions, KeyOrder, Precision};
///
/// let options = FormatOptions::new()
///     .with_key_order(KeyOrder::Sorted)
///     .with_precision(Precision::Nanos);
/// assert_eq!(options.key_order, KeyOrder::Sorted);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub key_order: KeyOrder,
    pub precision: Precision,
}

impl FormatOptions {
    /// Creates default options (insertion key order, automatic precision).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Sets the fractional-second precision for timestamps.
    ///
    /// Note that the parser only recognizes timestamps with exactly three
    /// fractional digits, so `Micros` and `Nanos` output re-parses as text.
    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }
}
