//! postshelf: the content layer of a personal Markdown blog
//!
//! Posts are `.md`/`.mdx` files with YAML front-matter. This crate reads them
//! into typed [`content::Post`] records, answers list/lookup/tag queries, groups
//! them for archive views, and writes the RSS feed, sitemap and search index.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod search;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// A blog rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory holding the posts
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Open a blog from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };
        config.apply_env();

        Ok(Self::with_config(base_dir, config))
    }

    /// Build a blog from an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Repository over this blog's content directory
    pub fn repository(&self) -> content::PostRepository {
        content::PostRepository::new(&self.content_dir)
    }

    /// Write the feed, sitemap and search index
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }
}
