//! Generate the feed, sitemap and search index

use anyhow::Result;

use crate::generator::Generator;
use crate::Blog;

/// Load every post and write the generated outputs
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = blog.repository().list_all()?;
    tracing::info!("Loaded {} posts", posts.len());

    Generator::new(blog).generate(&posts)?;

    tracing::info!(
        "Generated outputs in {:?} in {:.2?}",
        blog.public_dir,
        start.elapsed()
    );
    Ok(())
}
