mod error;
mod splitter;


pub use error::TokenizeError;
pub use splitter::{Splitter, split, split_value};

/// Separator used by the category list setting
pub const CATEGORY_SEPARATOR: &str = ",";

/// Separator used by the tag list setting
pub const TAG_SEPARATOR: &str = "|";
