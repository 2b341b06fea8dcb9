use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::generator::{Binding, BindingSource, Generation, RenderMode};

/// Record of one generation run, written next to the stylesheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub generated_at: String,
    pub generator: String,
    pub mode: RenderMode,
    pub stats: ManifestStats,
    /// Hex SHA-256 of the rendered stylesheet
    pub digest: String,
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestStats {
    pub category_count: u32,
    pub tag_count: u32,
    pub binding_count: u32,
    pub rule_count: u32,
}

impl Manifest {
    /// Build a manifest for a rendered stylesheet
    pub fn new(generation: &Generation, mode: RenderMode, stylesheet: &str) -> Self {
        let rule_count = generation
            .group
            .as_ref()
            .map(|g| g.rule_count())
            .unwrap_or(0);

        Self {
            version: "1.0.0".to_string(),
            generated_at: Utc::now().to_rfc3339(),
            generator: format!("landing-styles v{}", env!("CARGO_PKG_VERSION")),
            mode,
            stats: ManifestStats {
                category_count: generation.count(BindingSource::Category) as u32,
                tag_count: generation.count(BindingSource::Tag) as u32,
                binding_count: generation.bindings.len() as u32,
                rule_count: rule_count as u32,
            },
            digest: digest(stylesheet),
            bindings: generation.bindings.clone(),
        }
    }

    /// Whether `stylesheet` is the artifact this manifest describes
    pub fn matches(&self, stylesheet: &str) -> bool {
        self.digest == digest(stylesheet)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize manifest")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

        info!(
            path = %path.display(),
            bindings = self.stats.binding_count,
            "wrote manifest"
        );
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to open manifest: {}", path.display()))?;
        serde_json::from_str(&contents).context("Failed to parse manifest")
    }
}

fn digest(stylesheet: &str) -> String {
    hex::encode(Sha256::digest(stylesheet.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::settings::LandingSettings;

    fn sample_generation() -> Generation {
        let settings = LandingSettings::default()
            .with_enabled(true)
            .with_categories("news,updates")
            .with_tags("launch");
        generate(&settings).unwrap()
    }

    #[test]
    fn test_manifest_stats() {
        let generation = sample_generation();
        let css = generation.render(RenderMode::Grouped);
        let manifest = Manifest::new(&generation, RenderMode::Grouped, &css);

        assert_eq!(manifest.stats.category_count, 2);
        assert_eq!(manifest.stats.tag_count, 1);
        assert_eq!(manifest.stats.binding_count, 3);
        assert_eq!(manifest.stats.rule_count, 5);
        assert_eq!(manifest.bindings, generation.bindings);
        assert!(manifest.generator.starts_with("landing-styles v"));
    }

    #[test]
    fn test_manifest_digest() {
        let generation = sample_generation();
        let css = generation.render(RenderMode::Extend);
        let manifest = Manifest::new(&generation, RenderMode::Extend, &css);

        assert_eq!(manifest.digest.len(), 64);
        assert!(manifest.matches(&css));
        assert!(!manifest.matches(""));
    }

    #[test]
    fn test_empty_digest() {
        assert_eq!(
            digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_disabled_manifest() {
        let generation = generate(&LandingSettings::default()).unwrap();
        let manifest = Manifest::new(&generation, RenderMode::Inline, "");

        assert_eq!(manifest.stats.binding_count, 0);
        assert_eq!(manifest.stats.rule_count, 0);
    }

    #[test]
    fn test_write_and_read() {
        let path = std::env::temp_dir().join(format!(
            "landing-styles-manifest-{}.json",
            std::process::id()
        ));
        let generation = sample_generation();
        let css = generation.render(RenderMode::Inline);
        let manifest = Manifest::new(&generation, RenderMode::Inline, &css);

        manifest.write_to(&path).unwrap();
        let loaded = Manifest::read_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, manifest);
        assert_eq!(loaded.mode, RenderMode::Inline);
    }
}
