//! Search posts from the command line

use anyhow::Result;
use std::fmt::Write;

use crate::search;
use crate::Blog;

/// Print suggestions for `query`
pub fn run(blog: &Blog, query: &str) -> Result<()> {
    print!("{}", render(blog, query)?);
    Ok(())
}

pub fn render(blog: &Blog, query: &str) -> Result<String> {
    let posts = blog.repository().list_all()?;
    let found = search::suggestions(&posts, query);

    let mut out = String::new();
    if found.is_empty() {
        writeln!(out, "No posts match {:?}", query.trim())?;
        return Ok(out);
    }

    for suggestion in found {
        writeln!(out, "{} [{}]", suggestion.title, suggestion.slug)?;
        writeln!(out, "  {}", suggestion.excerpt)?;
    }
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
            content.join("async.md"),
            "---\ntitle: Async Rust\ndate: 2024-01-01\nexcerpt: Futures explained\n---\nbody",
        )
        .unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        assert_eq!(
            render(&blog, "async").unwrap(),
            "Async Rust [async]\n  Futures explained...\n"
        );
        assert_eq!(render(&blog, "q").unwrap(), "No posts match \"q\"\n");
    }
}
