use thing_id::timestamp::recognize;
use thing_id::{
    classify, format, format_thing, parse_object, parse_thing, Error, Id, ObjectMap, Scalar,
    Thing,
};

const NOW: &str = "2024-02-16T00:18:48.084Z";
const UUID: &str = "8424486b-85b3-4448-ac8d-5d51083391c7";

fn date() -> Scalar {
    Scalar::Timestamp(recognize(NOW).unwrap())
}

fn location_object() -> ObjectMap {
    let mut map = ObjectMap::new();
    map.insert("location".to_string(), Scalar::from("London"));
    map.insert("date".to_string(), date());
    map
}

/// Splits a formatted object into its rendered pairs, ignoring order.
fn sorted_pairs(rendered: &str) -> Vec<String> {
    let inner = rendered
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .unwrap();
    let mut pairs: Vec<String> = inner.split(", ").map(str::to_string).collect();
    pairs.sort();
    pairs
}

#[test]
fn test_classify_identifiers() {
    let cases = vec![
        ("Text ID", "tobie".to_string(), Id::Text("tobie".to_string())),
        (
            "Complex Text ID",
            format!("⟨{}⟩", UUID),
            Id::ComplexAtom(UUID.to_string()),
        ),
        (
            "Complex Numeric ID",
            "⟨42⟩".to_string(),
            Id::ComplexAtom("42".to_string()),
        ),
        ("Numeric ID", "1337".to_string(), Id::Number(1337)),
        (
            "Array ID",
            format!("[ 'London', '{}' ]", NOW),
            Id::Array(vec![Scalar::from("London"), date()]),
        ),
        (
            "Object ID",
            format!("{{ location: 'London', date: '{}' }}", NOW),
            Id::Object(location_object()),
        ),
    ];

    for (name, input, expected) in cases {
        assert_eq!(classify(&input).unwrap(), expected, "{}", name);
    }
}

#[test]
fn test_format_identifiers() {
    let cases = vec![
        ("Text ID", Id::Text("tobie".to_string()), "tobie".to_string()),
        (
            "Complex Text ID",
            Id::ComplexAtom(UUID.to_string()),
            format!("⟨{}⟩", UUID),
        ),
        (
            "Complex Numeric ID",
            Id::ComplexAtom("42".to_string()),
            "⟨42⟩".to_string(),
        ),
        ("Numeric ID", Id::Number(1337), "1337".to_string()),
        (
            "Array ID",
            Id::Array(vec![Scalar::from("London"), date()]),
            format!("['London', '{}']", NOW),
        ),
    ];

    for (name, id, expected) in cases {
        assert_eq!(format(&id), expected, "{}", name);
    }
}

#[test]
fn test_format_object_identifier_as_pair_set() {
    let rendered = format(&Id::Object(location_object()));
    assert_eq!(
        sorted_pairs(&rendered),
        vec![format!("date: '{}'", NOW), "location: 'London'".to_string()]
    );
}

#[test]
fn test_parse_things() {
    let cases = vec![
        ("person:tobie".to_string(), "person", Id::Text("tobie".to_string())),
        (
            format!("entry:⟨{}⟩", UUID),
            "entry",
            Id::ComplexAtom(UUID.to_string()),
        ),
        (
            "entry:⟨42⟩".to_string(),
            "entry",
            Id::ComplexAtom("42".to_string()),
        ),
        ("entry:1337".to_string(), "entry", Id::Number(1337)),
        (
            format!("entry:['London', '{}']", NOW),
            "entry",
            Id::Array(vec![Scalar::from("London"), date()]),
        ),
        (
            format!("entry:{{ location: 'London', date: '{}' }}", NOW),
            "entry",
            Id::Object(location_object()),
        ),
    ];

    for (input, table, id) in cases {
        assert_eq!(parse_thing(&input).unwrap(), Thing::new(table, id), "{}", input);
    }
}

#[test]
fn test_thing_from_parts() {
    let thing = Thing::parse_parts("entry", "⟨42⟩").unwrap();
    assert_eq!(thing, Thing::new("entry", Id::ComplexAtom("42".to_string())));

    let thing = Thing::parse_parts("person", "tobie").unwrap();
    assert_eq!(format_thing(&thing), "person:tobie");

    assert_eq!(
        Thing::parse_parts("person", "  ").unwrap_err(),
        Error::EmptyIdentifier
    );
}

#[test]
fn test_format_things() {
    let cases = vec![
        (
            Thing::new("person", Id::Text("tobie".to_string())),
            "person:tobie".to_string(),
        ),
        (
            Thing::new("entry", Id::ComplexAtom(UUID.to_string())),
            format!("entry:⟨{}⟩", UUID),
        ),
        (
            Thing::new("entry", Id::Text("42".to_string())),
            "entry:⟨42⟩".to_string(),
        ),
        (Thing::new("entry", Id::Number(1337)), "entry:1337".to_string()),
        (
            Thing::new("entry", Id::Array(vec![Scalar::from("London"), date()])),
            format!("entry:['London', '{}']", NOW),
        ),
    ];

    for (thing, expected) in cases {
        assert_eq!(format_thing(&thing), expected);
    }
}

#[test]
fn test_format_object_thing() {
    let rendered = format_thing(&Thing::new("entry", Id::Object(location_object())));
    let id = rendered.strip_prefix("entry:").unwrap();
    assert_eq!(
        sorted_pairs(id),
        vec![format!("date: '{}'", NOW), "location: 'London'".to_string()]
    );
}

#[test]
fn test_complex_atom_text_survives_round_trip() {
    // `⟨42⟩` must never come back as a number
    let thing = parse_thing("entry:⟨42⟩").unwrap();
    let again = parse_thing(&format_thing(&thing)).unwrap();
    assert_eq!(again.id(), &Id::ComplexAtom("42".to_string()));
}

#[test]
fn test_missing_table_separator() {
    assert!(matches!(
        parse_thing("no-colon-here"),
        Err(Error::MissingTableSeparator { .. })
    ));
}

#[test]
fn test_trailing_empty_object_pair() {
    assert!(matches!(
        parse_object("{a:1,}"),
        Err(Error::MalformedObject { .. })
    ));
    assert!(matches!(
        parse_thing("entry:{a:1,}"),
        Err(Error::MalformedObject { .. })
    ));
}

#[test]
fn test_errors_propagate_through_things() {
    assert!(matches!(
        parse_thing("entry:99999999999999999999"),
        Err(Error::InvalidNumber { .. })
    ));
    assert!(matches!(
        parse_thing("entry:['a,b']"),
        Err(Error::MalformedArray { .. })
    ));
    assert_eq!(parse_thing("entry: ").unwrap_err(), Error::EmptyIdentifier);
}
