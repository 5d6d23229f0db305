// Example: parse a document and walk the resulting tree

use jsontree::{try_parse, ParseError, Value};

fn print_value(value: &Value, indent: usize) {
    let pad = " ".repeat(indent);
    match value {
        Value::Object(object) => {
            println!("{pad}Object ({} members)", object.len());
            for (key, member) in object.iter() {
                println!("{pad}  Key: '{}'", key.escape_ascii());
                print_value(member, indent + 4);
            }
        }
        Value::Array(items) => {
            println!("{pad}Array ({} elements)", items.len());
            for item in items {
                print_value(item, indent + 2);
            }
        }
        Value::String(bytes) => println!("{pad}String: '{}'", bytes.escape_ascii()),
        Value::Integer(number) => println!("{pad}Integer: {number}"),
        Value::Decimal(number) => println!("{pad}Decimal: {number}"),
        Value::Boolean(flag) => println!("{pad}Bool: {flag}"),
        Value::Null => println!("{pad}Null"),
        Value::Invalid => println!("{pad}Invalid"),
    }
}

fn main() -> Result<(), ParseError> {
    let json = br#"{"name": "value", "number": 42, "ratio": 1.5e-1, "flags": [true,, null]}"#;
    println!("Input: {}", json.escape_ascii());

    let tree = try_parse(json)?;
    print_value(&tree, 0);

    let broken = br#"{"name": "value" "number": 42}"#;
    match try_parse(broken) {
        Ok(_) => println!("unexpectedly parsed {}", broken.escape_ascii()),
        Err(error) => println!("Rejected as expected: {error}"),
    }
    Ok(())
}
