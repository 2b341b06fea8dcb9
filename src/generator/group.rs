use serde::{Deserialize, Serialize};

/// Name of the built-in shared group
pub const DEFAULT_GROUP_NAME: &str = "landing-page";

/// A reusable bundle of rules referenced by every generated binding
///
/// Rendered as a `%placeholder` in SCSS output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleGroup {
    /// Placeholder name without the leading `%`
    pub name: String,
    /// Rules in source order
    pub rules: Vec<StyleRule>,
}

/// A single rule inside a style group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    /// Selector relative to the bound class
    ///
    /// `&` stands for the bound class itself; a selector without `&` is
    /// treated as a descendant of it.
    #[serde(default = "self_selector")]
    pub selector: String,
    /// `(property, value)` pairs in source order
    pub declarations: Vec<(String, String)>,
}

fn self_selector() -> String {
    "&".to_string()
}

impl StyleRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// Whether this rule produces any output
    pub fn is_renderable(&self) -> bool {
        !self.declarations.is_empty() && !self.selector.trim().is_empty()
    }

    /// Resolve this rule's selector against a concrete class selector
    ///
    /// Each entry of a comma-separated selector list is resolved separately.
    pub fn resolve(&self, class_selector: &str) -> Vec<String> {
        split_selector_list(&self.selector)
            .into_iter()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                if part.contains('&') {
                    part.replace('&', class_selector)
                } else {
                    format!("{} {}", class_selector, part)
                }
            })
            .collect()
    }
}

/// Split a selector list on top-level commas
///
/// Commas inside `()`, `[]` or quoted strings belong to the entry.
pub fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                entries.push(&selector[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    entries.push(&selector[start..]);
    entries
}

impl StyleGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule
    pub fn rule(mut self, rule: StyleRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Number of rules that render: at least one declaration and a selector
    pub fn rule_count(&self) -> usize {
        self.rules.iter().filter(|r| r.is_renderable()).count()
    }

    /// Built-in landing page group: strips topic chrome so the first post
    /// reads as a standalone page
    pub fn landing_page() -> Self {
        Self::new(DEFAULT_GROUP_NAME)
            .rule(StyleRule::new("#topic-title").declare("display", "none"))
            .rule(
                StyleRule::new(".topic-avatar, .topic-meta-data, .post-controls")
                    .declare("display", "none"),
            )
            .rule(StyleRule::new(".topic-body").declare("width", "100%"))
            .rule(
                StyleRule::new(".topic-body .cooked")
                    .declare("padding", "0")
                    .declare("font-size", "var(--font-up-1)"),
            )
            .rule(
                StyleRule::new("#topic-footer-buttons, .topic-map, .more-topics__container")
                    .declare("display", "none"),
            )
    }
}

impl Default for StyleGroup {
    fn default() -> Self {
        Self::landing_page()
    }
}
