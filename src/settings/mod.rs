mod error;


pub use error::SettingsError;

use crate::generator::StyleGroup;
use crate::security::is_plain_identifier;
use crate::tokenizer::{CATEGORY_SEPARATOR, Splitter, TAG_SEPARATOR};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Setting key for the feature flag
pub const ENABLED_KEY: &str = "landing_page_enabled";
/// Setting key for the comma-delimited category list
pub const CATEGORIES_KEY: &str = "landing_page_categories";
/// Setting key for the pipe-delimited tag list
pub const TAGS_KEY: &str = "landing_page_tags";

/// Theme settings consumed by the generator
///
/// List settings stay raw JSON until tokenized so a value of the wrong
/// type is reported with its actual type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingSettings {
    #[serde(rename = "landing_page_enabled", default)]
    pub enabled: bool,
    #[serde(rename = "landing_page_categories", default = "empty_list")]
    pub categories: Value,
    #[serde(rename = "landing_page_tags", default = "empty_list")]
    pub tags: Value,
    /// Overrides the built-in group when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_group: Option<StyleGroup>,
}

fn empty_list() -> Value {
    Value::String(String::new())
}

impl Default for LandingSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            categories: empty_list(),
            tags: empty_list(),
            style_group: None,
        }
    }
}

impl LandingSettings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let settings = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), enabled = settings.enabled, "loaded settings");
        Ok(settings)
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = Value::String(categories.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Value::String(tags.into());
        self
    }

    pub fn with_style_group(mut self, group: StyleGroup) -> Self {
        self.style_group = Some(group);
        self
    }

    /// Category tokens, split on `,`
    pub fn category_tokens(&self) -> Result<Vec<&str>, SettingsError> {
        Splitter::new(CATEGORY_SEPARATOR)
            .split_value(&self.categories)
            .map_err(|source| SettingsError::Tokenize {
                setting: CATEGORIES_KEY,
                source,
            })
    }

    /// Tag tokens, split on `|`
    pub fn tag_tokens(&self) -> Result<Vec<&str>, SettingsError> {
        Splitter::new(TAG_SEPARATOR)
            .split_value(&self.tags)
            .map_err(|source| SettingsError::Tokenize {
                setting: TAGS_KEY,
                source,
            })
    }

    /// The configured group, or the built-in one, after validation
    pub fn group(&self) -> Result<StyleGroup, SettingsError> {
        let group = self.style_group.clone().unwrap_or_default();

        if !is_plain_identifier(&group.name) {
            return Err(SettingsError::InvalidGroupName(group.name));
        }
        if group.rule_count() == 0 {
            return Err(SettingsError::EmptyGroup(group.name));
        }

        Ok(group)
    }
}
