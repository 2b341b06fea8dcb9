use super::TokenizeError;
use serde_json::Value;

/// Reusable split configuration: a separator and an optional token limit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Splitter {
    /// `None` disables splitting entirely
    separator: Option<String>,
    limit: Option<i64>,
}

impl Splitter {
    /// Create a splitter for a literal separator
    ///
    /// An empty separator splits the input into single characters.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: Some(separator.into()),
            limit: None,
        }
    }

    /// Create a splitter that returns its input as a single token
    pub fn unsplit() -> Self {
        Self::default()
    }

    /// Cap the number of returned tokens
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    pub fn split<'a>(&self, input: &'a str) -> Vec<&'a str> {
        split(input, self.separator(), self.limit)
    }

    pub fn split_value<'a>(&self, value: &'a Value) -> Result<Vec<&'a str>, TokenizeError> {
        split_value(value, self.separator(), self.limit)
    }
}

/// Split `input` on a literal separator.
///
/// # Arguments
/// * `input` - Text to split
/// * `separator` - `None` returns `[input]`, `Some("")` splits per character
/// * `limit` - At most this many tokens; the last one keeps the unsplit rest
///
/// # Returns
/// Tokens in order of occurrence. A trailing separator does not produce a
/// trailing empty token, so `split("", Some(","), None)` is empty.
pub fn split<'a>(input: &'a str, separator: Option<&str>, limit: Option<i64>) -> Vec<&'a str> {
    let Some(separator) = separator else {
        return vec![input];
    };

    // Per-character path ignores `limit`
    if separator.is_empty() {
        return input
            .char_indices()
            .map(|(i, c)| &input[i..i + c.len_utf8()])
            .collect();
    }

    let mut tokens: Vec<&'a str> = Vec::new();
    let mut rest = input;

    while let Some(index) = rest.find(separator) {
        // Reached limit - 1 tokens: the remainder becomes the last token verbatim
        if limit.is_some_and(|k| tokens.len() as i64 + 1 == k) {
            tokens.push(rest);
            return tokens;
        }

        tokens.push(&rest[..index]);
        rest = &rest[index + separator.len()..];
    }

    if !rest.is_empty() {
        tokens.push(rest);
    }

    // Only reachable if the scan above did not honor the limit
    if let Some(k) = limit {
        if k > 0 && (k as usize) < tokens.len() {
            tokens.truncate(k as usize);
        }
    }

    tokens
}

/// Split a configuration value, failing fast if it is not a JSON string
pub fn split_value<'a>(
    value: &'a Value,
    separator: Option<&str>,
    limit: Option<i64>,
) -> Result<Vec<&'a str>, TokenizeError> {
    match value {
        Value::String(input) => Ok(split(input, separator, limit)),
        other => Err(TokenizeError::not_a_string(other)),
    }
}
