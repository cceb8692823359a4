use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Default maximum entries retained by the description cache.
pub const DEFAULT_DESCRIPTION_CACHE_SIZE: usize = 10_000;

/// Per-session annotation settings.
///
/// The description-cache capacity lives here, not in a global preference
/// store; callers pass it to `DescriptionCache::new` at construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationConfig {
    #[serde(default = "default_description_cache_size")]
    pub description_cache_size: usize,
}

fn default_description_cache_size() -> usize {
    DEFAULT_DESCRIPTION_CACHE_SIZE
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            description_cache_size: DEFAULT_DESCRIPTION_CACHE_SIZE,
        }
    }
}

impl AnnotationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.description_cache_size == 0 {
            bail!("descriptionCacheSize must be positive");
        }
        Ok(())
    }
}
