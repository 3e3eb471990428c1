use serde_json::{json, Value};

const STRUCTURE_INSTRUCTION: &str = "\n\nRespond with a JSON object matching this structure: ";

pub(crate) const PARSE_FAILURE_MESSAGE: &str = "Failed to generate valid JSON structure";

/// Append the machine-readable output shape and the instruction to follow
/// it.
pub(crate) fn structured_prompt(prompt: &str, output_structure: &Value) -> String {
    format!("{prompt}{STRUCTURE_INSTRUCTION}{output_structure}")
}

/// Interpret decoded generation output as a structured record.
///
/// Whatever parses is returned verbatim; field shapes are not re-validated
/// against the requested structure. Unparseable output becomes an error
/// record carrying the raw text for diagnosis.
pub(crate) fn parse_structured(decoded: &str) -> Value {
    match serde_json::from_str::<Value>(decoded.trim()) {
        Ok(value) => value,
        Err(_) => json!({
            "error": PARSE_FAILURE_MESSAGE,
            "raw_response": decoded,
        }),
    }
}

/// Error record for faults other than parsing (tokenization, generation)
pub(crate) fn fault_record(message: &impl std::fmt::Display) -> Value {
    json!({ "error": format!("An error occurred: {message}") })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prompt_carries_the_requested_shape() {
        let structure = json!({"name": "string", "age": "int"});
        let prompt = structured_prompt("Who is this?", &structure);

        assert!(prompt.starts_with("Who is this?"));
        assert!(prompt.contains("\"name\":\"string\""));
    }

    #[test]
    fn valid_json_parses_verbatim() {
        let parsed = parse_structured(" {\"name\": \"Ada\", \"age\": 36} ");
        assert_eq!(parsed, json!({"name": "Ada", "age": 36}));
    }

    #[test]
    fn invalid_json_becomes_an_error_record() {
        let parsed = parse_structured("Sorry, I cannot answer that.");
        assert_eq!(
            parsed,
            json!({
                "error": PARSE_FAILURE_MESSAGE,
                "raw_response": "Sorry, I cannot answer that.",
            })
        );
    }
}
