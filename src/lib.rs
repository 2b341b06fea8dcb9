// Public API exports
pub mod generator;
pub mod manifest;
pub mod security;
pub mod settings;
pub mod tokenizer;

// Re-export main types for convenience
pub use tokenizer::{CATEGORY_SEPARATOR, Splitter, TAG_SEPARATOR, TokenizeError, split, split_value};

pub use generator::{
    Binding, BindingSource, Generation, RenderMode, StyleGroup, StyleRule, generate, render,
};

pub use settings::{LandingSettings, SettingsError};

pub use manifest::{Manifest, ManifestStats};

pub use security::escape_class_name;
