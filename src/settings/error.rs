use crate::tokenizer::TokenizeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Setting '{setting}': {source}")]
    Tokenize {
        setting: &'static str,
        #[source]
        source: TokenizeError,
    },

    #[error("Invalid style group name: '{0}'")]
    InvalidGroupName(String),

    #[error("Style group '{0}' has no declarations")]
    EmptyGroup(String),
}
