//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Environment variable that overrides `url`
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,
    /// Moment.js-style format used when printing dates
    pub date_format: String,

    // URL
    pub url: String,
    /// URL segment posts live under, e.g. `blog` for `/blog/<slug>`
    pub post_dir: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Output
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub search: SearchConfig,
    pub sitemap_path: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: String::new(),
            author: "Anonymous".to_string(),
            language: "en".to_string(),
            date_format: "YYYY-MM-DD".to_string(),

            url: "https://example.com".to_string(),
            post_dir: "blog".to_string(),

            content_dir: "content/blog".to_string(),
            public_dir: "public".to_string(),

            feed: FeedConfig::default(),
            search: SearchConfig::default(),
            sitemap_path: "sitemap.xml".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_url_override(std::env::var(SITE_URL_ENV).ok());
    }

    fn apply_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!("Site url overridden by {}: {}", SITE_URL_ENV, url);
            self.url = url;
        }
    }

    /// Site url without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// RSS feed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub path: String,
    /// Maximum number of items, 0 for all posts
    pub limit: usize,
    /// Minutes a reader may cache the feed
    pub ttl: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: "feed.xml".to_string(),
            limit: 20,
            ttl: 60,
        }
    }
}

/// Search index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub path: String,
    /// Characters of post content kept per entry
    pub content_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            path: "search-index.json".to_string(),
            content_length: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content/blog");
        assert_eq!(config.post_dir, "blog");
        assert_eq!(config.feed.limit, 20);
        assert_eq!(config.search.content_length, 500);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Notes
author: Test User
url: https://notes.example.org/
content_dir: posts
feed:
  limit: 5
theme_color: teal
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.feed.limit, 5);
        assert_eq!(config.feed.ttl, 60);
        assert_eq!(config.base_url(), "https://notes.example.org");
        assert!(config.extra.contains_key("theme_color"));
    }

    #[test]
    fn test_url_override() {
        let mut config = SiteConfig::default();
        config.apply_url_override(None);
        assert_eq!(config.url, "https://example.com");

        config.apply_url_override(Some("  ".to_string()));
        assert_eq!(config.url, "https://example.com");

        config.apply_url_override(Some("https://blog.test".to_string()));
        assert_eq!(config.url, "https://blog.test");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(SiteConfig::load(dir.path().join("_config.yml")).is_err());
    }
}
