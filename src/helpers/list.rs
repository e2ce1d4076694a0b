//! Grouping helpers for archive, tag and category views

use chrono::Datelike;
use indexmap::IndexMap;
use serde::Serialize;

use crate::content::Post;

/// Category key for posts without tags
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Posts published in one calendar year
#[derive(Debug, Clone, Serialize)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub posts: Vec<&'a Post>,
}

/// Posts sharing a tag or category
#[derive(Debug, Clone, Serialize)]
pub struct TagGroup<'a> {
    pub name: String,
    pub posts: Vec<&'a Post>,
}

impl TagGroup<'_> {
    pub fn count(&self) -> usize {
        self.posts.len()
    }
}

/// Group posts by year, newest year first.
///
/// Posts keep the order they had in `posts`.
pub fn group_by_year(posts: &[Post]) -> Vec<YearGroup<'_>> {
    let mut years: IndexMap<i32, Vec<&Post>> = IndexMap::new();
    for post in posts {
        years.entry(post.date.year()).or_default().push(post);
    }

    let mut groups: Vec<YearGroup> = years
        .into_iter()
        .map(|(year, posts)| YearGroup { year, posts })
        .collect();
    groups.sort_by(|a, b| b.year.cmp(&a.year));
    groups
}

/// Group posts under every tag they carry, most used tag first.
pub fn group_by_tag(posts: &[Post]) -> Vec<TagGroup<'_>> {
    let mut tags: IndexMap<&str, Vec<&Post>> = IndexMap::new();
    for post in posts {
        for tag in &post.tags {
            tags.entry(tag.as_str()).or_default().push(post);
        }
    }
    by_count(tags)
}

/// Group posts by their first tag, most used category first.
pub fn group_by_category(posts: &[Post]) -> Vec<TagGroup<'_>> {
    let mut categories: IndexMap<&str, Vec<&Post>> = IndexMap::new();
    for post in posts {
        let key = post.category().unwrap_or(UNCATEGORIZED);
        categories.entry(key).or_default().push(post);
    }
    by_count(categories)
}

/// Count descending; equal counts keep first-seen order
fn by_count<'a>(map: IndexMap<&str, Vec<&'a Post>>) -> Vec<TagGroup<'a>> {
    let mut groups: Vec<TagGroup> = map
        .into_iter()
        .map(|(name, posts)| TagGroup {
            name: name.to_string(),
            posts,
        })
        .collect();
    groups.sort_by(|a, b| b.count().cmp(&a.count()));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str, tags: &[&str]) -> Post {
        let source = format!(
            "---\ndate: {}\ntags: [{}]\n---\nbody",
            date,
            tags.join(", ")
        );
        Post::parse(&source, slug).unwrap()
    }

    fn slugs(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    fn sample() -> Vec<Post> {
        // Already newest first, as the repository returns them
        vec![
            post("e", "2024-09-01", &["rust", "cli"]),
            post("d", "2024-03-01", &["web"]),
            post("c", "2023-11-01", &["rust"]),
            post("b", "2023-02-01", &[]),
            post("a", "2022-05-01", &["rust", "web"]),
        ]
    }

    #[test]
    fn test_group_by_year() {
        let posts = sample();
        let groups = group_by_year(&posts);

        let years: Vec<i32> = groups.iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2024, 2023, 2022]);
        assert_eq!(slugs(&groups[0].posts), vec!["e", "d"]);
        assert_eq!(slugs(&groups[1].posts), vec!["c", "b"]);
        assert_eq!(slugs(&groups[2].posts), vec!["a"]);
    }

    #[test]
    fn test_group_by_year_unsorted_input() {
        let posts = vec![
            post("old", "2020-01-01", &[]),
            post("new", "2024-01-01", &[]),
        ];
        let years: Vec<i32> = group_by_year(&posts).iter().map(|g| g.year).collect();
        assert_eq!(years, vec![2024, 2020]);
    }

    #[test]
    fn test_group_by_tag() {
        let posts = sample();
        let groups = group_by_tag(&posts);

        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        // rust(3), web(2), cli(1)
        assert_eq!(names, vec!["rust", "web", "cli"]);
        assert_eq!(slugs(&groups[0].posts), vec!["e", "c", "a"]);
        assert_eq!(slugs(&groups[1].posts), vec!["d", "a"]);

        let total: usize = groups.iter().map(TagGroup::count).sum();
        let tag_uses: usize = posts.iter().map(|p| p.tags.len()).sum();
        assert_eq!(total, tag_uses);
    }

    #[test]
    fn test_group_by_category() {
        let posts = sample();
        let groups = group_by_category(&posts);

        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        // rust(e, c, a), then web(d) and Uncategorized(b) in first-seen order
        assert_eq!(names, vec!["rust", "web", UNCATEGORIZED]);
        assert_eq!(slugs(&groups[2].posts), vec!["b"]);

        let total: usize = groups.iter().map(TagGroup::count).sum();
        assert_eq!(total, posts.len());
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_year(&[]).is_empty());
        assert!(group_by_tag(&[]).is_empty());
        assert!(group_by_category(&[]).is_empty());
    }
}
