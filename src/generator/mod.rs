mod binding;
mod group;
mod render;

#[cfg(test)]
mod tests;

pub use binding::{Binding, BindingSource, generate_bindings};
pub use group::{DEFAULT_GROUP_NAME, StyleGroup, StyleRule, split_selector_list};
pub use render::{RenderMode, render};

use crate::settings::{LandingSettings, SettingsError};
use tracing::{debug, info};

/// Output of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Category bindings first, then tag bindings, each in token order
    pub bindings: Vec<Binding>,
    /// The shared group; `None` when generation is disabled
    pub group: Option<StyleGroup>,
}

impl Generation {
    fn disabled() -> Self {
        Self {
            bindings: Vec::new(),
            group: None,
        }
    }

    pub fn count(&self, source: BindingSource) -> usize {
        self.bindings.iter().filter(|b| b.source == source).count()
    }

    pub fn render(&self, mode: RenderMode) -> String {
        match &self.group {
            Some(group) => render(&self.bindings, group, mode),
            None => String::new(),
        }
    }
}

/// Generate category and tag bindings from theme settings
///
/// Does nothing when the feature flag is off: no tokenization, no group
/// validation, no bindings.
pub fn generate(settings: &LandingSettings) -> Result<Generation, SettingsError> {
    if !settings.enabled {
        info!("landing page styles disabled, skipping generation");
        return Ok(Generation::disabled());
    }

    let group = settings.group()?;
    let categories = settings.category_tokens()?;
    let tags = settings.tag_tokens()?;
    debug!(categories = ?categories, tags = ?tags, "tokenized settings");

    let mut bindings = generate_bindings(BindingSource::Category, &categories, &group.name);
    bindings.extend(generate_bindings(BindingSource::Tag, &tags, &group.name));

    info!(
        bindings = bindings.len(),
        group = %group.name,
        "generated landing page bindings"
    );

    Ok(Generation {
        bindings,
        group: Some(group),
    })
}
