//! Identifier formatting.
//!
//! The inverse of [`classify`](crate::classify): renders an [`Id`] back to its
//! canonical literal text.
//!
//! | Identifier | Output |
//! |------------|--------|
//! | `Number(1337)` | `1337` |
//! | `Text("tobie")` | `tobie` |
//! | `Text("42")` | `⟨42⟩` (escaped so it does not re-parse as a number) |
//! | `ComplexAtom("42")` | `⟨42⟩` |
//! | `Array([..])` | `['London', '2024-02-16T00:18:48.084Z']` |
//! | `Object({..})` | `{location: 'London', date: '2024-02-16T00:18:48.084Z'}` |
//!
//! Formatting never fails.
//!
//! ```rust
//! use thing_id::{classify, format};
//!
//! let id = classify("[ 'London',   'Paris' ]").unwrap();
//! assert_eq!(format(&id), "['London', 'Paris']");
//! ```

use crate::options::KeyOrder;
use crate::parse::is_integer_literal;
use crate::{FormatOptions, Id, ObjectMap, Scalar};

/// Formats an identifier with default options.
#[must_use]
pub fn format(id: &Id) -> String {
    format_with_options(id, &FormatOptions::default())
}

/// Formats an identifier with custom options.
///
/// # Examples
///
/// ```rust
/// use thing_id::{format_with_options, FormatOptions, Id, Precision, Scalar};
/// use thing_id::timestamp::recognize;
///
/// let ts = recognize("2024-02-16T00:18:48Z").unwrap();
/// let id = Id::Array(vec![Scalar::Timestamp(ts)]);
/// let options = FormatOptions::new().with_precision(Precision::Millis);
/// assert_eq!(format_with_options(&id, &options), "['2024-02-16T00:18:48.000Z']");
/// ```
#[must_use]
pub fn format_with_options(id: &Id, options: &FormatOptions) -> String {
    let mut output = String::with_capacity(32);
    write_id(&mut output, id, options);
    output
}

fn write_id(output: &mut String, id: &Id, options: &FormatOptions) {
    match id {
        Id::Number(n) => output.push_str(&n.to_string()),
        Id::Text(s) if is_integer_literal(s.trim()) => write_complex(output, s),
        Id::Text(s) => output.push_str(s),
        Id::ComplexAtom(s) => write_complex(output, s),
        Id::Array(elements) => write_array(output, elements, options),
        Id::Object(map) => write_object(output, map, options),
    }
}

#[inline]
fn write_complex(output: &mut String, s: &str) {
    output.push('⟨');
    output.push_str(s);
    output.push('⟩');
}

fn write_array(output: &mut String, elements: &[Scalar], options: &FormatOptions) {
    output.push('[');
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        write_scalar(output, element, options);
    }
    output.push(']');
}

fn write_object(output: &mut String, map: &ObjectMap, options: &FormatOptions) {
    let mut pairs: Vec<_> = map.iter().collect();
    if options.key_order == KeyOrder::Sorted {
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    output.push('{');
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            output.push_str(", ");
        }
        output.push_str(key);
        output.push_str(": ");
        write_scalar(output, value, options);
    }
    output.push('}');
}

/// Renders a scalar as a single-quoted literal.
///
/// Text is emitted as-is between the quotes; timestamps use RFC 3339 with `Z`
/// for a zero offset.
#[must_use]
pub fn format_scalar(scalar: &Scalar, options: &FormatOptions) -> String {
    let mut output = String::new();
    write_scalar(&mut output, scalar, options);
    output
}

fn write_scalar(output: &mut String, scalar: &Scalar, options: &FormatOptions) {
    output.push('\'');
    match scalar {
        Scalar::Text(s) => output.push_str(s),
        Scalar::Timestamp(ts) => {
            output.push_str(&ts.to_rfc3339_opts(options.precision.seconds_format(), true))
        }
    }
    output.push('\'');
}
