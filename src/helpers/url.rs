//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about") // -> "https://example.com/about"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        config.base_url().to_string()
    } else {
        format!("{}/{}", config.base_url(), path)
    }
}

/// Absolute URL of a post page
///
/// # Examples
/// ```ignore
/// post_url(&config, "hello world") // -> "https://example.com/blog/hello%20world"
/// ```
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    let post_dir = config.post_dir.trim_matches('/');
    let slug = encode_segment(slug);
    if post_dir.is_empty() {
        full_url_for(config, &slug)
    } else {
        full_url_for(config, &format!("{}/{}", post_dir, slug))
    }
}

/// Percent-encode one URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, "/about"), "https://example.com/about");
        assert_eq!(full_url_for(&config, ""), "https://example.com");
    }

    #[test]
    fn test_post_url() {
        let mut config = test_config();
        assert_eq!(
            post_url(&config, "hello-world"),
            "https://example.com/blog/hello-world"
        );

        config.post_dir = String::new();
        assert_eq!(post_url(&config, "hello"), "https://example.com/hello");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("你好"), "%E4%BD%A0%E5%A5%BD");
        assert_eq!(encode_segment("plain-slug_1"), "plain-slug_1");
    }
}
