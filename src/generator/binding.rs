use serde::{Deserialize, Serialize};

/// Which setting a binding was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingSource {
    Category,
    Tag,
}

impl BindingSource {
    /// Class name prefix for this source
    pub fn prefix(self) -> &'static str {
        match self {
            BindingSource::Category => "category-",
            BindingSource::Tag => "tag-",
        }
    }
}

/// A generated class selector that includes a shared style group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Unescaped class name, `<prefix><token>`
    pub class_name: String,
    /// Name of the referenced style group
    pub group: String,
    pub source: BindingSource,
    /// The token the class name was derived from
    pub token: String,
}

impl Binding {
    /// Class selector with the name escaped for CSS
    pub fn selector(&self) -> String {
        format!(".{}", crate::security::escape_class_name(&self.class_name))
    }
}

/// Emit one binding per token, in token order
///
/// Duplicate tokens produce duplicate bindings.
pub fn generate_bindings(source: BindingSource, tokens: &[&str], group: &str) -> Vec<Binding> {
    tokens
        .iter()
        .map(|token| Binding {
            class_name: format!("{}{}", source.prefix(), token),
            group: group.to_string(),
            source,
            token: token.to_string(),
        })
        .collect()
}
