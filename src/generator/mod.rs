//! Generator module - writes the feed, sitemap and search index

mod feed;
mod sitemap;

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;

use crate::content::Post;
use crate::search;
use crate::Blog;

pub use feed::render_rss;
pub use sitemap::{render_sitemap, sitemap_entries, ChangeFrequency, SitemapEntry};

/// Writes machine-readable outputs derived from the post list
pub struct Generator {
    blog: Blog,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Self {
        Self { blog: blog.clone() }
    }

    /// Generate every output
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.blog.public_dir)
            .with_context(|| format!("Failed to create {:?}", self.blog.public_dir))?;

        self.generate_feed(posts)?;
        self.generate_sitemap(posts)?;
        self.generate_search_index(posts)?;

        Ok(())
    }

    /// Generate the RSS feed
    fn generate_feed(&self, posts: &[Post]) -> Result<()> {
        let config = &self.blog.config;
        let rss = render_rss(config, posts, Utc::now());
        self.write(&config.feed.path, &rss)?;
        tracing::info!("Generated {}", config.feed.path);
        Ok(())
    }

    /// Generate the sitemap
    fn generate_sitemap(&self, posts: &[Post]) -> Result<()> {
        let config = &self.blog.config;
        let xml = render_sitemap(config, posts, Utc::now());
        self.write(&config.sitemap_path, &xml)?;
        tracing::info!("Generated {}", config.sitemap_path);
        Ok(())
    }

    /// Generate search index (JSON)
    fn generate_search_index(&self, posts: &[Post]) -> Result<()> {
        let config = &self.blog.config.search;
        let index = search::build_index(posts, config.content_length);
        let json = serde_json::to_string_pretty(&index)?;
        self.write(&config.path, &json)?;
        tracing::info!("Generated {} ({} posts)", config.path, index.len());
        Ok(())
    }

    fn write(&self, relative: &str, content: &str) -> Result<()> {
        let output_path = self.blog.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, content)
            .with_context(|| format!("Failed to write {:?}", output_path))
    }
}
