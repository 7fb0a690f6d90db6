//! sitepress: content indexing and listing views for a personal blog site
//!
//! Loads a YAML site configuration and a tree of markdown pages, and derives
//! the filtered, date-sorted listing views the rendering layer consumes.

pub mod commands;
pub mod config;
pub mod content;
pub mod context;
pub mod helpers;
pub mod views;

use anyhow::Result;
use std::path::Path;

/// The site root: configuration plus resolved directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory
    pub source_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
        })
    }

    /// Load all pages from the source directory
    pub fn load_pages(&self) -> Result<Vec<content::Page>> {
        let pages = content::ContentLoader::new(self).load_pages()?;
        Ok(pages)
    }
}
