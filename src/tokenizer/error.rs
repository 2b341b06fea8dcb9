use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("expected a string, found {found}")]
    NotAString { found: &'static str },
}

impl TokenizeError {
    /// Build a type mismatch error naming the JSON type of `value`
    pub fn not_a_string(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        TokenizeError::NotAString { found }
    }
}
