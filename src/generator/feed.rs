//! RSS 2.0 feed

use chrono::{DateTime, Datelike, Utc};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{date_rfc2822, full_url_for, post_url, xml_text};

/// Render the RSS feed for `posts`, which are expected newest first
pub fn render_rss(config: &SiteConfig, posts: &[Post], now: DateTime<Utc>) -> String {
    let limit = if config.feed.limit == 0 {
        posts.len()
    } else {
        config.feed.limit
    };

    let mut feed = String::new();
    feed.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    feed.push('\n');
    feed.push_str(r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">"#);
    feed.push('\n');
    feed.push_str("  <channel>\n");
    feed.push_str(&format!("    <title>{}</title>\n", xml_text(&config.title)));
    feed.push_str(&format!(
        "    <description>{}</description>\n",
        xml_text(&config.description)
    ));
    feed.push_str(&format!(
        "    <link>{}</link>\n",
        xml_text(config.base_url())
    ));
    feed.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\"/>\n",
        xml_text(&full_url_for(config, &config.feed.path))
    ));
    feed.push_str(&format!(
        "    <language>{}</language>\n",
        xml_text(&config.language)
    ));
    feed.push_str(&format!(
        "    <lastBuildDate>{}</lastBuildDate>\n",
        date_rfc2822(&now)
    ));
    feed.push_str(&format!(
        "    <copyright>{}</copyright>\n",
        xml_text(&format!("© {} {}", now.year(), config.author))
    ));
    feed.push_str(&format!("    <ttl>{}</ttl>\n", config.feed.ttl));

    for post in posts.iter().take(limit) {
        feed.push_str(&render_item(config, post));
    }

    feed.push_str("  </channel>\n");
    feed.push_str("</rss>\n");
    feed
}

fn render_item(config: &SiteConfig, post: &Post) -> String {
    let mut item = String::from("    <item>\n");
    item.push_str(&format!("      <title>{}</title>\n", xml_text(&post.title)));
    item.push_str(&format!(
        "      <link>{}</link>\n",
        xml_text(&post_url(config, &post.slug))
    ));
    item.push_str(&format!(
        "      <guid isPermaLink=\"false\">{}</guid>\n",
        xml_text(&post.slug)
    ));
    item.push_str(&format!(
        "      <pubDate>{}</pubDate>\n",
        date_rfc2822(&post.date)
    ));
    item.push_str(&format!(
        "      <description>{}</description>\n",
        xml_text(&post.excerpt)
    ));
    item.push_str(&format!("      <author>{}</author>\n", xml_text(&post.author)));
    for tag in &post.tags {
        item.push_str(&format!("      <category>{}</category>\n", xml_text(tag)));
    }
    item.push_str("    </item>\n");
    item
}
