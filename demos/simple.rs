//! Parsing and formatting record references.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use thing_id::{format_thing, parse_thing, Id};

fn main() -> Result<(), Box<dyn Error>> {
    let inputs = [
        "person:tobie",
        "person:1337",
        "article:⟨8424486b-85b3-4448-ac8d-5d51083391c7⟩",
        "temperature:['London', '2024-02-16T00:18:48.084Z']",
        "temperature:{ location: 'London', date: '2024-02-16T00:18:48.084Z' }",
    ];

    for input in inputs {
        let thing = parse_thing(input)?;
        let kind = match thing.id() {
            Id::Number(_) => "number",
            Id::Text(_) => "text",
            Id::ComplexAtom(_) => "complex atom",
            Id::Array(_) => "array",
            Id::Object(_) => "object",
        };
        println!("{:<14} {} -> {}", kind, input, format_thing(&thing));
    }

    // Malformed input is reported, never guessed at
    match parse_thing("no-colon-here") {
        Ok(thing) => println!("unexpected: {}", thing),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
