//! Show a single post

use anyhow::Result;
use std::fmt::Write;

use crate::content::Post;
use crate::helpers::{format_date, post_url};
use crate::Blog;

/// Print the post with `slug`, failing when there is none
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    let Some(post) = blog.repository().get_by_slug(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };
    print!("{}", render(blog, &post)?);
    Ok(())
}

/// Metadata header followed by the raw body
pub fn render(blog: &Blog, post: &Post) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", post.title)?;
    writeln!(out, "  slug:    {}", post.slug)?;
    writeln!(out, "  url:     {}", post_url(&blog.config, &post.slug))?;
    writeln!(
        out,
        "  date:    {}",
        format_date(&post.date, &blog.config.date_format)
    )?;
    writeln!(out, "  author:  {}", post.author)?;
    if !post.tags.is_empty() {
        writeln!(out, "  tags:    {}", post.tags.join(", "))?;
    }
    if let Some(cover) = &post.cover_image {
        writeln!(out, "  cover:   {}", cover)?;
    }
    writeln!(out, "  reading: {} min", post.reading_time)?;
    writeln!(out)?;
    writeln!(out, "{}", post.content.trim_end())?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content/blog");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("first.md"),
            "---\ntitle: First\ndate: 2024-02-03\ntags: [a, b]\nauthor: Ann\n---\nHello there.\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        let post = blog.repository().get_by_slug("first").unwrap();
        let out = render(&blog, &post).unwrap();

        assert!(out.starts_with("First\n  slug:    first\n"));
        assert!(out.contains("/blog/first\n"));
        assert!(out.contains("  date:    2024-02-03\n"));
        assert!(out.contains("  tags:    a, b\n"));
        assert!(out.contains("  author:  Ann\n"));
        assert!(out.ends_with("\nHello there.\n"));
    }

    #[test]
    fn test_missing_post_is_error() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert!(run(&blog, "nonexistent").is_err());
    }
}
