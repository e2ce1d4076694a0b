//! Content module - loads posts from the content directory and answers queries

mod error;
mod frontmatter;
mod post;
pub mod repository;

pub use error::{ContentError, Result};
pub use frontmatter::FrontMatter;
pub use post::{
    default_excerpt, reading_time, truncate_chars, Post, ANONYMOUS, EXCERPT_LENGTH, UNTITLED,
    WORDS_PER_MINUTE,
};
pub use repository::PostRepository;
