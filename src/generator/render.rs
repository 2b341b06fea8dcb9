use super::{Binding, StyleGroup, StyleRule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INDENT: &str = "  ";

/// Output flavor of the generated stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// SCSS: the group as a `%placeholder`, one `@extend` per binding
    #[default]
    Extend,
    /// CSS: each rule once, with the selectors of every binding
    Grouped,
    /// CSS: every binding gets its own copy of each rule
    Inline,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Extend => "extend",
            RenderMode::Grouped => "grouped",
            RenderMode::Inline => "inline",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "extend" | "scss" => Ok(RenderMode::Extend),
            "grouped" => Ok(RenderMode::Grouped),
            "inline" => Ok(RenderMode::Inline),
            other => Err(format!(
                "unknown render mode '{}' (expected extend, grouped or inline)",
                other
            )),
        }
    }
}

/// Render bindings and their shared group into a stylesheet
///
/// Returns an empty string when there are no bindings.
pub fn render(bindings: &[Binding], group: &StyleGroup, mode: RenderMode) -> String {
    if bindings.is_empty() {
        return String::new();
    }

    let rules: Vec<&StyleRule> = group
        .rules
        .iter()
        .filter(|r| r.is_renderable())
        .collect();

    match mode {
        RenderMode::Extend => render_extend(bindings, group, &rules),
        RenderMode::Grouped => render_grouped(bindings, &rules),
        RenderMode::Inline => render_inline(bindings, &rules),
    }
}

fn render_extend(bindings: &[Binding], group: &StyleGroup, rules: &[&StyleRule]) -> String {
    let mut out = format!("%{} {{\n", group.name);

    for rule in rules {
        if rule.selector.trim() == "&" {
            push_declarations(&mut out, &rule.declarations, INDENT);
        } else {
            out.push_str(&format!("{}{} {{\n", INDENT, rule.selector.trim()));
            push_declarations(&mut out, &rule.declarations, &INDENT.repeat(2));
            out.push_str(&format!("{}}}\n", INDENT));
        }
    }
    out.push_str("}\n");

    for binding in bindings {
        out.push_str(&format!(
            "\n{} {{\n{}@extend %{};\n}}\n",
            binding.selector(),
            INDENT,
            binding.group
        ));
    }

    out
}

fn render_grouped(bindings: &[Binding], rules: &[&StyleRule]) -> String {
    let class_selectors: Vec<String> = bindings.iter().map(Binding::selector).collect();
    let mut blocks = Vec::new();

    for rule in rules {
        let selectors: Vec<String> = class_selectors
            .iter()
            .flat_map(|class| rule.resolve(class))
            .collect();
        if let Some(block) = render_block(&selectors, &rule.declarations) {
            blocks.push(block);
        }
    }

    blocks.join("\n")
}

fn render_inline(bindings: &[Binding], rules: &[&StyleRule]) -> String {
    let mut blocks = Vec::new();

    for binding in bindings {
        let class = binding.selector();
        for rule in rules {
            if let Some(block) = render_block(&rule.resolve(&class), &rule.declarations) {
                blocks.push(block);
            }
        }
    }

    blocks.join("\n")
}

fn render_block(selectors: &[String], declarations: &[(String, String)]) -> Option<String> {
    if selectors.is_empty() {
        return None;
    }

    let mut out = selectors.join(",\n");
    out.push_str(" {\n");
    push_declarations(&mut out, declarations, INDENT);
    out.push_str("}\n");
    Some(out)
}

fn push_declarations(out: &mut String, declarations: &[(String, String)], indent: &str) {
    for (property, value) in declarations {
        out.push_str(&format!("{}{}: {};\n", indent, property, value));
    }
}
