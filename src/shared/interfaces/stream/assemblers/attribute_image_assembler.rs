use serde_json::{Map, Number, Value};

/// Turns a typed attribute map (`{"nombre": {"S": "Rust"}}`) into plain JSON.
/// Attributes that are not typed wrappers are kept as they are, so plain
/// images pass through unchanged.
pub fn unmarshall_image(image: Map<String, Value>) -> Map<String, Value> {
    image
        .into_iter()
        .map(|(name, value)| (name, unmarshall_value(value)))
        .collect()
}

fn unmarshall_value(value: Value) -> Value {
    let Value::Object(mut wrapper) = value else {
        return value;
    };
    if wrapper.len() != 1 {
        return Value::Object(wrapper);
    }

    let Some(tag) = wrapper.keys().next().cloned() else {
        return Value::Object(wrapper);
    };
    let Some(inner) = wrapper.remove(&tag) else {
        return Value::Object(wrapper);
    };

    match (tag.as_str(), inner) {
        ("S", Value::String(text)) => Value::String(text),
        ("B", Value::String(encoded)) => Value::String(encoded),
        ("N", Value::String(digits)) => parse_number(&digits),
        ("BOOL", Value::Bool(flag)) => Value::Bool(flag),
        ("NULL", _) => Value::Null,
        ("L", Value::Array(items)) => Value::Array(items.into_iter().map(unmarshall_value).collect()),
        ("M", Value::Object(map)) => Value::Object(unmarshall_image(map)),
        ("SS" | "BS", Value::Array(items)) => Value::Array(items),
        ("NS", Value::Array(items)) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(digits) => parse_number(&digits),
                    other => other,
                })
                .collect(),
        ),
        (tag, inner) => {
            let mut untouched = Map::new();
            untouched.insert(tag.to_string(), inner);
            Value::Object(untouched)
        }
    }
}

fn parse_number(digits: &str) -> Value {
    let digits = digits.trim();
    if let Ok(integer) = digits.parse::<i64>() {
        return Value::Number(integer.into());
    }
    digits
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(digits.to_string()))
}
