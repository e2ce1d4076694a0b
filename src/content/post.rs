//! Post model and derived fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::frontmatter::{non_empty, FrontMatter};

/// Title used when front-matter has none
pub const UNTITLED: &str = "Untitled";

/// Author used when front-matter has none
pub const ANONYMOUS: &str = "Anonymous";

/// Characters read per minute for the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

/// Length of a generated excerpt, in characters
pub const EXCERPT_LENGTH: usize = 150;

/// A blog post, rebuilt from its source file on every query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// URL identifier
    pub slug: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Utc>,

    /// Summary shown in listings
    pub excerpt: String,

    /// Raw markdown body
    pub content: String,

    /// Tags, in front-matter order
    pub tags: Vec<String>,

    /// Post author
    pub author: String,

    /// Optional cover image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Estimated minutes to read
    pub reading_time: usize,
}

impl Post {
    /// Build a post from parsed front-matter, its body, and the slug taken from
    /// the file name. A slug in the front-matter takes precedence.
    pub fn from_parts(fm: FrontMatter, body: &str, file_slug: &str) -> Result<Self> {
        let date = fm.parse_date()?.unwrap_or_else(Utc::now);
        let slug = fm.slug().unwrap_or(file_slug).to_string();
        let title = non_empty(&fm.title).unwrap_or(UNTITLED).to_string();
        let author = non_empty(&fm.author).unwrap_or(ANONYMOUS).to_string();
        let excerpt = non_empty(&fm.excerpt)
            .map(str::to_string)
            .unwrap_or_else(|| default_excerpt(body));

        Ok(Self {
            slug,
            title,
            date,
            excerpt,
            content: body.to_string(),
            tags: fm.tags,
            author,
            cover_image: fm.cover_image.filter(|c| !c.is_empty()),
            reading_time: reading_time(body),
        })
    }

    /// Parse a whole source file
    pub fn parse(source: &str, file_slug: &str) -> Result<Self> {
        let (fm, body) = FrontMatter::parse(source)?;
        Self::from_parts(fm, body, file_slug)
    }

    /// Whether the post carries `tag` (case-sensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Grouping key for category views: the first tag
    pub fn category(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// Minutes to read: non-whitespace characters over [`WORDS_PER_MINUTE`], rounded up
pub fn reading_time(content: &str) -> usize {
    let chars = content.chars().filter(|c| !c.is_whitespace()).count();
    chars.div_ceil(WORDS_PER_MINUTE)
}

/// First [`EXCERPT_LENGTH`] characters of the body followed by `...`
pub fn default_excerpt(body: &str) -> String {
    let mut excerpt = truncate_chars(body, EXCERPT_LENGTH).to_string();
    excerpt.push_str("...");
    excerpt
}

/// Prefix of `s` holding at most `max` characters
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
