//! Search - the JSON index shipped to the client, and an in-process query
//! over the same fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::{truncate_chars, Post};

/// Shortest query that is searched at all, in characters
pub const MIN_QUERY_LENGTH: usize = 2;

/// Number of suggestions returned
pub const SUGGESTION_LIMIT: usize = 5;

/// Characters of excerpt kept in a suggestion
const SUGGESTION_EXCERPT_LENGTH: usize = 100;

/// A subsequence match may spread over at most this many times the query length
const MAX_SPREAD: usize = 3;

/// Field weights: title, content, tags, excerpt
const TITLE_WEIGHT: f64 = 0.4;
const CONTENT_WEIGHT: f64 = 0.3;
const TAGS_WEIGHT: f64 = 0.2;
const EXCERPT_WEIGHT: f64 = 0.1;

/// One post in the exported search index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Leading part of the body only
    pub content: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Compact result for type-ahead lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
}

/// Build the index entries, keeping `content_length` characters of each body
pub fn build_index(posts: &[Post], content_length: usize) -> Vec<SearchEntry> {
    posts
        .iter()
        .map(|p| SearchEntry {
            slug: p.slug.clone(),
            title: p.title.clone(),
            excerpt: p.excerpt.clone(),
            content: truncate_chars(&p.content, content_length).to_string(),
            date: p.date,
            tags: p.tags.clone(),
        })
        .collect()
}

/// Posts matching `query`, best match first.
///
/// Queries shorter than [`MIN_QUERY_LENGTH`] return nothing.
pub fn search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LENGTH {
        return Vec::new();
    }

    let matcher = Matcher::new(query);
    let mut scored: Vec<(f64, &Post)> = posts
        .iter()
        .filter_map(|post| {
            let score = matcher.score_post(post);
            (score > 0.0).then_some((score, post))
        })
        .collect();

    // Stable: equal scores keep list order
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, post)| post).collect()
}

/// The first few matches in a compact form
pub fn suggestions(posts: &[Post], query: &str) -> Vec<Suggestion> {
    search(posts, query)
        .into_iter()
        .take(SUGGESTION_LIMIT)
        .map(|post| Suggestion {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: format!(
                "{}...",
                truncate_chars(&post.excerpt, SUGGESTION_EXCERPT_LENGTH)
            ),
        })
        .collect()
}

/// Case-insensitive query matcher
struct Matcher {
    text: String,
    chars: Vec<char>,
}

impl Matcher {
    fn new(query: &str) -> Self {
        let text = query.to_lowercase();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    fn score_post(&self, post: &Post) -> f64 {
        let tags = post
            .tags
            .iter()
            .map(|t| self.score_field(t))
            .fold(0.0, f64::max);

        TITLE_WEIGHT * self.score_field(&post.title)
            + CONTENT_WEIGHT * self.score_field(&post.content)
            + TAGS_WEIGHT * tags
            + EXCERPT_WEIGHT * self.score_field(&post.excerpt)
    }

    /// 1.0 for a substring hit, 0.5 for a tight subsequence, else 0.0
    fn score_field(&self, field: &str) -> f64 {
        let field = field.to_lowercase();
        if field.contains(&self.text) {
            return 1.0;
        }

        let hay: Vec<char> = field.chars().collect();
        match subsequence_span(&hay, &self.chars) {
            Some(span) if span <= self.chars.len() * MAX_SPREAD => 0.5,
            _ => 0.0,
        }
    }
}

/// Length of the shortest window of `hay` holding `needle` in order
fn subsequence_span(hay: &[char], needle: &[char]) -> Option<usize> {
    let first = *needle.first()?;
    let mut best: Option<usize> = None;

    for start in (0..hay.len()).filter(|&i| hay[i] == first) {
        let mut matched = 1;
        let mut end = start;
        for (i, &c) in hay.iter().enumerate().skip(start + 1) {
            if matched == needle.len() {
                break;
            }
            if c == needle[matched] {
                matched += 1;
                end = i;
            }
        }

        // A later start only sees a suffix of this one
        if matched < needle.len() {
            break;
        }

        let span = end - start + 1;
        best = Some(best.map_or(span, |b| b.min(span)));
        if span == needle.len() {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, tags: &[&str], body: &str) -> Post {
        let source = format!(
            "---\ntitle: {}\ndate: 2024-01-01\ntags: [{}]\n---\n{}",
            title,
            tags.join(", "),
            body
        );
        Post::parse(&source, slug).unwrap()
    }

    fn slugs(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let posts = vec![post("a", "Rust", &[], "r")];
        assert!(search(&posts, "").is_empty());
        assert!(search(&posts, "  r  ").is_empty());
    }

    #[test]
    fn test_title_outranks_content() {
        // Keyword past the generated excerpt, so only the body matches
        let body = format!("{}tokio runtimes", "x ".repeat(100));
        let posts = vec![
            post("body", "Other", &[], &body),
            post("title", "Tokio in depth", &[], "nothing here"),
        ];
        assert_eq!(slugs(&search(&posts, "tokio")), vec!["title", "body"]);
    }

    #[test]
    fn test_case_insensitive_and_tags() {
        let posts = vec![
            post("tagged", "Notes", &["Serde"], "plain"),
            post("none", "Notes", &["misc"], "plain"),
        ];
        assert_eq!(slugs(&search(&posts, "SERDE")), vec!["tagged"]);
    }

    #[test]
    fn test_subsequence_match() {
        let posts = vec![post("a", "Pattern matching", &[], "")];
        // "ptrn" spreads over "pattern" (7 <= 12)
        assert_eq!(slugs(&search(&posts, "ptrn")), vec!["a"]);
        assert!(search(&posts, "zq").is_empty());
    }

    #[test]
    fn test_cjk_query() {
        let posts = vec![post("zh", "异步编程入门", &[], "正文")];
        assert_eq!(slugs(&search(&posts, "异步")), vec!["zh"]);
    }

    #[test]
    fn test_subsequence_span() {
        let hay: Vec<char> = "xaxxbxab".chars().collect();
        let needle: Vec<char> = "ab".chars().collect();
        assert_eq!(subsequence_span(&hay, &needle), Some(2));
        assert_eq!(subsequence_span(&hay, &['z']), None);
        assert_eq!(subsequence_span(&hay, &[]), None);
    }

    #[test]
    fn test_long_body_without_match_is_fast() {
        let posts = vec![post("long", "Long", &[], &"e".repeat(60_000))];

        let started = std::time::Instant::now();
        assert!(search(&posts, "ex").is_empty());
        assert!(started.elapsed() < std::time::Duration::from_secs(1));

        let hay: Vec<char> = "e".repeat(60_000).chars().collect();
        assert_eq!(subsequence_span(&hay, &['e', 'x']), None);
    }

    #[test]
    fn test_suggestions_are_capped() {
        let posts: Vec<Post> = (0..8)
            .map(|i| post(&format!("p{}", i), "Rust post", &[], &"x".repeat(300)))
            .collect();

        let found = suggestions(&posts, "rust");
        assert_eq!(found.len(), SUGGESTION_LIMIT);
        assert_eq!(found[0].slug, "p0");
        assert_eq!(found[0].excerpt.chars().count(), 103);
    }

    #[test]
    fn test_build_index_truncates_content() {
        let posts = vec![post("long", "Long", &["a"], &"字".repeat(600))];
        let index = build_index(&posts, 500);

        assert_eq!(index.len(), 1);
        assert_eq!(index[0].content.chars().count(), 500);
        assert_eq!(index[0].tags, vec!["a"]);

        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json[0]["slug"], "long");
        assert_eq!(json[0]["date"], "2024-01-01T00:00:00Z");
    }
}
