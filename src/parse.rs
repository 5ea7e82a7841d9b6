//! Identifier classification and literal parsing.
//!
//! [`classify`] inspects raw identifier text and dispatches, first match wins:
//!
//! 1. **Number**: the trimmed text is `-?[0-9]+` and fits an `i64`
//! 2. **Object**: the trimmed text is wrapped in `{` `}`
//! 3. **Array**: the trimmed text is wrapped in `[` `]`
//! 4. **Complex atom**: the trimmed text is wrapped in `⟨` `⟩`
//! 5. **Text**: anything else, kept verbatim
//!
//! Array and object bodies are split on every comma. Commas inside quoted
//! scalars are not protected; the resulting half-quoted tokens are reported as
//! errors instead of being turned into wrong data.
//!
//! ```rust
//! use thing_id::{classify, Id, Scalar};
//!
//! assert_eq!(classify("1337").unwrap(), Id::Number(1337));
//! assert_eq!(classify("⟨42⟩").unwrap(), Id::ComplexAtom("42".to_string()));
//! assert_eq!(
//!     classify("['London', 'Paris']").unwrap(),
//!     Id::Array(vec![Scalar::from("London"), Scalar::from("Paris")]),
//! );
//! assert!(classify("['a,b']").is_err());
//! ```

use crate::scalar::{has_unbalanced_quote, parse_scalar};
use crate::{Error, Id, ObjectMap, Result, Scalar};
use tracing::{debug, trace};

const ELEMENT_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = ':';

/// Parses raw identifier text into an [`Id`].
///
/// # Errors
///
/// - [`Error::EmptyIdentifier`] if `raw` is empty after trimming
/// - [`Error::InvalidNumber`] if `raw` is integer-shaped but overflows `i64`
/// - [`Error::MalformedArray`] / [`Error::MalformedObject`] for literals whose
///   body cannot be split into scalars
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn classify(raw: &str) -> Result<Id> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        debug!("rejected empty identifier");
        return Err(Error::EmptyIdentifier);
    }

    if is_integer_literal(trimmed) {
        trace!(raw, "classified as number");
        return parse_number(trimmed).map(Id::Number);
    }
    if enclosed(trimmed, '{', '}').is_some() {
        trace!(raw, "classified as object");
        return parse_object(trimmed).map(Id::Object);
    }
    if enclosed(trimmed, '[', ']').is_some() {
        trace!(raw, "classified as array");
        return parse_array(trimmed).map(Id::Array);
    }
    if let Some(inner) = enclosed(trimmed, '⟨', '⟩') {
        trace!(raw, "classified as complex atom");
        return Ok(Id::ComplexAtom(inner.trim().to_string()));
    }

    trace!(raw, "classified as text");
    Ok(Id::Text(raw.to_string()))
}

/// Returns `true` if `s` has the shape of a base-10 integer: `-?[0-9]+`.
///
/// Shape only; the value may still overflow `i64`.
pub(crate) fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number(literal: &str) -> Result<i64> {
    literal.parse::<i64>().map_err(|e| {
        debug!(literal, error = %e, "integer literal out of range");
        Error::invalid_number(literal, e)
    })
}

/// Returns the text between `open` and `close` if `s` starts and ends with them.
fn enclosed(s: &str, open: char, close: char) -> Option<&str> {
    s.strip_prefix(open)?.strip_suffix(close)
}

/// Parses a bracket-delimited array literal such as `['London', 'Paris']`.
///
/// Elements keep their order. An empty body (`[]`) yields an empty array.
///
/// # Errors
///
/// Returns [`Error::MalformedArray`] if the literal is not wrapped in `[` `]`,
/// contains an empty unquoted element, or an element that is quoted on one
/// end only.
///
/// # Examples
///
/// ```rust
/// use thing_id::{parse_array, Scalar};
///
/// assert!(parse_array("[]").unwrap().is_empty());
/// assert_eq!(
///     parse_array("[ a, 'b' ]").unwrap(),
///     vec![Scalar::from("a"), Scalar::from("b")],
/// );
/// assert!(parse_array("[a,,b]").is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_array(literal: &str) -> Result<Vec<Scalar>> {
    let body = enclosed(literal.trim(), '[', ']')
        .ok_or_else(|| Error::malformed_array(literal, "expected `[` ... `]`"))?
        .trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split(ELEMENT_SEPARATOR)
        .map(|token| {
            if token.trim().is_empty() {
                debug!(literal, "empty array element");
                return Err(Error::malformed_array(token, "empty element"));
            }
            if has_unbalanced_quote(token) {
                debug!(literal, token, "unbalanced quote in array element");
                return Err(Error::malformed_array(token, "unbalanced quote"));
            }
            Ok(parse_scalar(token))
        })
        .collect()
}

/// Parses a brace-delimited object literal such as `{ location: 'London' }`.
///
/// Each pair is split on its first colon; keys are trimmed and values parsed as
/// scalars. A repeated key keeps the last value. An empty body (`{}`) yields
/// an empty object.
///
/// # Errors
///
/// Returns [`Error::MalformedObject`] if the literal is not wrapped in `{` `}`,
/// or a pair has no colon, an empty key, an empty value, or a value quoted on
/// one end only.
///
/// # Examples
///
/// ```rust
/// use thing_id::{parse_object, Scalar};
///
/// let map = parse_object("{ a: 'x', a: 'y' }").unwrap();
/// assert_eq!(map.get("a"), Some(&Scalar::from("y")));
///
/// assert!(parse_object("{a:1,}").is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_object(literal: &str) -> Result<ObjectMap> {
    let body = enclosed(literal.trim(), '{', '}')
        .ok_or_else(|| Error::malformed_object(literal, "expected `{` ... `}`"))?
        .trim();
    let mut map = ObjectMap::new();
    if body.is_empty() {
        return Ok(map);
    }

    for pair in body.split(ELEMENT_SEPARATOR) {
        let (key, value) = split_pair(pair).map_err(|msg| {
            debug!(literal, pair, msg, "malformed object pair");
            Error::malformed_object(pair, msg)
        })?;
        if map.insert(key.to_string(), parse_scalar(value)).is_some() {
            trace!(key, "duplicate object key, keeping last value");
        }
    }

    Ok(map)
}

fn split_pair(pair: &str) -> std::result::Result<(&str, &str), &'static str> {
    let (key, value) = pair
        .split_once(PAIR_SEPARATOR)
        .ok_or("missing `:` between key and value")?;
    let key = key.trim();
    if key.is_empty() {
        return Err("empty key");
    }
    if value.trim().is_empty() {
        return Err("empty value");
    }
    if has_unbalanced_quote(value) {
        return Err("unbalanced quote");
    }
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timestamp::recognize;

    #[test]
    fn test_classify_number() {
        assert_eq!(classify("1337").unwrap(), Id::Number(1337));
        assert_eq!(classify("-42").unwrap(), Id::Number(-42));
        assert_eq!(classify(" 7 ").unwrap(), Id::Number(7));
        assert_eq!(
            classify("9223372036854775807").unwrap(),
            Id::Number(i64::MAX)
        );
        assert_eq!(
            classify("-9223372036854775808").unwrap(),
            Id::Number(i64::MIN)
        );
    }

    #[test]
    fn test_classify_number_overflow() {
        let err = classify("9223372036854775808").unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { ref literal, .. } if literal == "9223372036854775808"));
    }

    #[test]
    fn test_number_lookalikes_are_text() {
        assert_eq!(classify("+5").unwrap(), Id::Text("+5".to_string()));
        assert_eq!(classify("-").unwrap(), Id::Text("-".to_string()));
        assert_eq!(classify("1-2").unwrap(), Id::Text("1-2".to_string()));
        assert_eq!(classify("1.5").unwrap(), Id::Text("1.5".to_string()));
        assert_eq!(classify("١٢").unwrap(), Id::Text("١٢".to_string()));
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify("").unwrap_err(), Error::EmptyIdentifier);
        assert_eq!(classify(" \t ").unwrap_err(), Error::EmptyIdentifier);
    }

    #[test]
    fn test_classify_complex_atom_is_opaque() {
        assert_eq!(
            classify("⟨42⟩").unwrap(),
            Id::ComplexAtom("42".to_string())
        );
        assert_eq!(
            classify("⟨ [a, b] ⟩").unwrap(),
            Id::ComplexAtom("[a, b]".to_string())
        );
        assert_eq!(classify("⟨⟩").unwrap(), Id::ComplexAtom(String::new()));
        assert_eq!(
            classify("⟨8424486b-85b3-4448-ac8d-5d51083391c7⟩").unwrap(),
            Id::ComplexAtom("8424486b-85b3-4448-ac8d-5d51083391c7".to_string())
        );
    }

    #[test]
    fn test_classify_text_kept_verbatim() {
        assert_eq!(classify("tobie").unwrap(), Id::Text("tobie".to_string()));
        assert_eq!(classify(" tobie").unwrap(), Id::Text(" tobie".to_string()));
        assert_eq!(classify("⟨open").unwrap(), Id::Text("⟨open".to_string()));
        assert_eq!(classify("[open").unwrap(), Id::Text("[open".to_string()));
    }

    #[test]
    fn test_classify_tolerates_whitespace_around_brackets() {
        assert_eq!(
            classify("  ['a']  ").unwrap(),
            Id::Array(vec![Scalar::from("a")])
        );
        assert!(classify("\n{ a: 'b' }\n").unwrap().is_object());
    }

    #[test]
    fn test_parse_array_with_timestamp() {
        let now = "2024-02-16T00:18:48.084Z";
        let parsed = parse_array(&format!("[ 'London', '{}' ]", now)).unwrap();
        assert_eq!(
            parsed,
            vec![
                Scalar::from("London"),
                Scalar::Timestamp(recognize(now).unwrap())
            ]
        );
    }

    #[test]
    fn test_parse_array_empty_forms() {
        assert!(parse_array("[]").unwrap().is_empty());
        assert!(parse_array("[   ]").unwrap().is_empty());
        assert_eq!(parse_array("['']").unwrap(), vec![Scalar::from("")]);
    }

    #[test]
    fn test_parse_array_errors() {
        assert!(matches!(
            parse_array("[a,]").unwrap_err(),
            Error::MalformedArray { .. }
        ));
        assert!(matches!(
            parse_array("['a,b']").unwrap_err(),
            Error::MalformedArray { .. }
        ));
        assert!(matches!(
            parse_array("a, b").unwrap_err(),
            Error::MalformedArray { .. }
        ));
    }

    #[test]
    fn test_parse_object() {
        let now = "2024-02-16T00:18:48.084Z";
        let map = parse_object(&format!("{{ location: 'London', date: '{}' }}", now)).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("location"), Some(&Scalar::from("London")));
        assert_eq!(
            map.get("date"),
            Some(&Scalar::Timestamp(recognize(now).unwrap()))
        );
    }

    #[test]
    fn test_parse_object_value_keeps_later_colons() {
        let map = parse_object("{ url: 'a:b:c' }").unwrap();
        assert_eq!(map.get("url"), Some(&Scalar::from("a:b:c")));
    }

    #[test]
    fn test_parse_object_errors() {
        for input in ["{a:1,}", "{a}", "{: 'x'}", "{a: }", "{a: 'x}", "a: 'x'"] {
            assert!(
                matches!(parse_object(input), Err(Error::MalformedObject { .. })),
                "expected malformed object for {}",
                input
            );
        }
    }

    #[test]
    fn test_parse_object_empty() {
        assert!(parse_object("{}").unwrap().is_empty());
        assert!(parse_object("{ }").unwrap().is_empty());
    }
}
