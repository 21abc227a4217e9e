//! Blog configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub featured_tags: Vec<String>,

    // Behaviour
    pub loading_delay_ms: u64,

    // Terminal output
    pub width: usize,
    pub page_height: usize,
    pub color: bool,

    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Dev Insights".to_string(),
            subtitle: "Expert articles on modern web development, frameworks, and best practices"
                .to_string(),
            featured_tags: ["React", "TypeScript", "CSS", "JavaScript", "Frontend"]
                .iter()
                .map(|t| t.to_string())
                .collect(),

            loading_delay_ms: 300,

            width: 80,
            page_height: 20,
            color: true,

            highlight: HighlightConfig::default(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Delay between selecting a post and showing it
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlogConfig::default();
        assert_eq!(config.title, "Dev Insights");
        assert_eq!(config.loading_delay(), Duration::from_millis(300));
        assert_eq!(config.featured_tags.len(), 5);
        assert!(config.highlight.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
loading_delay_ms: 50
highlight:
  theme: InspiredGitHub
  line_number: true
"#;
        let config: BlogConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.loading_delay_ms, 50);
        assert_eq!(config.highlight.theme, "InspiredGitHub");
        assert!(config.highlight.line_number);
        // untouched fields keep their defaults
        assert!(config.highlight.enable);
        assert_eq!(config.width, 80);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "color: false\nwidth: 60\n").unwrap();

        let config = BlogConfig::load(&path).unwrap();
        assert!(!config.color);
        assert_eq!(config.width, 60);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(BlogConfig::load(dir.path().join("nope.yml")).is_err());
    }
}
