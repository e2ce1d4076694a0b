//! sitemap.xml

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{date_xml, full_url_for, post_url, xml_text};

/// How often a page is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One `<url>` entry
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Entries for the fixed pages followed by one per post
pub fn sitemap_entries(config: &SiteConfig, posts: &[Post], now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let mut entries = vec![
        SitemapEntry {
            loc: full_url_for(config, ""),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 1.0,
        },
        SitemapEntry {
            loc: full_url_for(config, &config.post_dir),
            last_modified: now,
            change_frequency: ChangeFrequency::Daily,
            priority: 0.9,
        },
        SitemapEntry {
            loc: full_url_for(config, "about"),
            last_modified: now,
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.5,
        },
    ];

    entries.extend(posts.iter().map(|post| SitemapEntry {
        loc: post_url(config, &post.slug),
        last_modified: post.date,
        change_frequency: ChangeFrequency::Weekly,
        priority: 0.8,
    }));

    entries
}

/// Render the sitemap XML
pub fn render_sitemap(config: &SiteConfig, posts: &[Post], now: DateTime<Utc>) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for entry in sitemap_entries(config, posts, now) {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_text(&entry.loc)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            date_xml(&entry.last_modified)
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
