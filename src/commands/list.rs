//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::Post;
use crate::helpers::{format_date, group_by_category, group_by_tag, group_by_year};
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    print!("{}", render(blog, content_type)?);
    Ok(())
}

/// List posts carrying `tag`
pub fn run_tag(blog: &Blog, tag: &str) -> Result<()> {
    print!("{}", render_tag(blog, tag)?);
    Ok(())
}

/// Text listing for `content_type`
pub fn render(blog: &Blog, content_type: &str) -> Result<String> {
    let posts = blog.repository().list_all()?;
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in &posts {
                write_post_line(&mut out, blog, post)?;
            }
        }
        "tag" | "tags" => {
            let groups = group_by_tag(&posts);
            writeln!(out, "Tags ({}):", groups.len())?;
            for group in groups {
                writeln!(out, "  {} ({})", group.name, group.count())?;
            }
        }
        "category" | "categories" => {
            let groups = group_by_category(&posts);
            writeln!(out, "Categories ({}):", groups.len())?;
            for group in groups {
                let titles: Vec<&str> = group.posts.iter().take(3).map(|p| p.title.as_str()).collect();
                let more = if group.count() > 3 { ", ..." } else { "" };
                writeln!(
                    out,
                    "  {} ({}): {}{}",
                    group.name,
                    group.count(),
                    titles.join(", "),
                    more
                )?;
            }
        }
        "archive" | "archives" => {
            writeln!(out, "Archives ({} posts):", posts.len())?;
            for group in group_by_year(&posts) {
                writeln!(out, "  {} ({})", group.year, group.posts.len())?;
                for post in group.posts {
                    writeln!(
                        out,
                        "    {} - {} ({} min)",
                        format_date(&post.date, "MM-DD"),
                        post.title,
                        post.reading_time
                    )?;
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, category, archive",
                content_type
            );
        }
    }

    Ok(out)
}

/// Text listing of the posts tagged `tag`
pub fn render_tag(blog: &Blog, tag: &str) -> Result<String> {
    let posts = blog.repository().list_by_tag(tag)?;
    let mut out = String::new();
    writeln!(out, "#{} ({}):", tag, posts.len())?;
    for post in &posts {
        write_post_line(&mut out, blog, post)?;
    }
    Ok(out)
}

fn write_post_line(out: &mut String, blog: &Blog, post: &Post) -> std::fmt::Result {
    writeln!(
        out,
        "  {} - {} [{}]",
        format_date(&post.date, &blog.config.date_format),
        post.title,
        post.slug
    )
}
