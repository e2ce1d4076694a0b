//! CLI entry point for postshelf

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postshelf")]
#[command(version)]
#[command(about = "Query and publish a directory of Markdown blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site information
    List {
        /// Type of content to list (post, tag, category, archive)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post by slug
    Show {
        /// Post slug
        slug: String,
    },

    /// List the posts carrying a tag
    Tag {
        /// Tag name (case-sensitive)
        tag: String,
    },

    /// Search posts by title, content, tags and excerpt
    Search {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Generate the feed, sitemap and search index
    #[command(alias = "g")]
    Generate,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postshelf=debug,info"
    } else {
        "postshelf=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let blog = postshelf::Blog::new(&base_dir)?;
            postshelf::commands::list::run(&blog, &r#type)?;
        }

        Commands::Show { slug } => {
            let blog = postshelf::Blog::new(&base_dir)?;
            postshelf::commands::show::run(&blog, &slug)?;
        }

        Commands::Tag { tag } => {
            let blog = postshelf::Blog::new(&base_dir)?;
            postshelf::commands::list::run_tag(&blog, &tag)?;
        }

        Commands::Search { query } => {
            let blog = postshelf::Blog::new(&base_dir)?;
            postshelf::commands::search::run(&blog, &query.join(" "))?;
        }

        Commands::Generate => {
            let blog = postshelf::Blog::new(&base_dir)?;
            tracing::info!("Generating feed, sitemap and search index...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Version => {
            println!("postshelf version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
