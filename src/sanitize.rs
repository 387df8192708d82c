use serde_json::Value;

/// Strips keys whose value is the empty string from a JSON object,
/// recursing into nested objects, e.g.
/// `{ "movie": { "title": "", "tag": "drama" } }` -> `{ "movie": { "tag": "drama" } }`.
///
/// Applied to PATCH bodies only, so a client sending a blank form field
/// cannot overwrite a required value; create payloads are validated as-is.
/// Arrays are passed through untouched.
pub fn remove_blank_fields(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| v.as_str() != Some(""))
                .map(|(k, v)| (k, remove_blank_fields(v)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_blank_fields_from_nested_payload() {
        let input = json!({ "resource": { "title": "", "text": "ok" } });
        assert_eq!(
            remove_blank_fields(input),
            json!({ "resource": { "text": "ok" } })
        );
    }

    #[test]
    fn all_blank_payload_becomes_a_noop_update() {
        let input = json!({ "resource": { "title": "", "text": "" } });
        assert_eq!(remove_blank_fields(input), json!({ "resource": {} }));
    }

    #[test]
    fn non_string_and_non_blank_values_survive() {
        let input = json!({ "rating": 7.5, "tags": ["", "a"], "tag": "x" });
        assert_eq!(
            remove_blank_fields(input),
            json!({ "rating": 7.5, "tags": ["", "a"], "tag": "x" })
        );
    }
}
