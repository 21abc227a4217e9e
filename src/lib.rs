//! dev-insights: a small blog reader for the terminal
//!
//! A fixed set of articles is listed as cards; selecting one shows a short
//! loading placeholder, then the article rendered from markdown with
//! syntax-highlighted code blocks.

pub mod commands;
pub mod config;
pub mod content;
pub mod display;
pub mod view;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use config::BlogConfig;
use content::{ContentStore, MarkdownRenderer};
use view::ViewController;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// The articles
    pub store: Arc<ContentStore>,
    /// Shared markdown renderer
    pub renderer: Arc<MarkdownRenderer>,
}

impl Blog {
    /// Create a blog from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            tracing::debug!("Loading config from {:?}", config_path);
            BlogConfig::load(&config_path)?
        } else {
            BlogConfig::default()
        };

        Ok(Self::with_config(config, base_dir))
    }

    /// Create a blog from an already loaded configuration
    pub fn with_config(config: BlogConfig, base_dir: PathBuf) -> Self {
        let renderer = MarkdownRenderer::from_config(&config.highlight);
        Self {
            config,
            base_dir,
            store: Arc::new(ContentStore::builtin()),
            renderer: Arc::new(renderer),
        }
    }

    /// A fresh view controller, starting on the listing
    pub fn controller(&self) -> ViewController {
        ViewController::new(
            Arc::clone(&self.store),
            Arc::clone(&self.renderer),
            self.config.loading_delay(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "Dev Insights");
        assert_eq!(blog.store.len(), 3);
    }

    #[test]
    fn test_new_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "title: Notes\nloading_delay_ms: 5\n").unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.title, "Notes");
        assert_eq!(blog.config.loading_delay().as_millis(), 5);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("_config.yml"), "width: [not a number]\n").unwrap();
        assert!(Blog::new(dir.path()).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_controllers_are_independent() {
        let blog = Blog::with_config(BlogConfig::default(), PathBuf::from("."));
        let mut a = blog.controller();
        let b = blog.controller();
        a.select(1);
        a.settle().await;
        assert_eq!(a.state().name(), "reading");
        assert_eq!(b.state().name(), "listing");
    }
}
