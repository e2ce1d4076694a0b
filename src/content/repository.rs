//! Post repository - answers queries by re-reading the content directory

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{ContentError, Result};
use super::{FrontMatter, Post};

/// Extensions recognized as post sources, in lookup priority order
const EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Read-only view over a directory of `.md`/`.mdx` posts.
///
/// Nothing is cached: every query scans the directory again.
#[derive(Debug, Clone)]
pub struct PostRepository {
    content_dir: PathBuf,
}

impl PostRepository {
    /// Create a repository over `content_dir`
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Load every post, newest first.
    ///
    /// A missing directory yields no posts. Files that fail to load are
    /// logged and skipped.
    pub fn list_all(&self) -> Result<Vec<Post>> {
        let mut posts: Vec<Post> = Vec::new();
        let mut seen = HashSet::new();

        for path in self.source_files()? {
            let post = match load_post(&path) {
                Ok(post) => post,
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                    continue;
                }
            };

            if !seen.insert(post.slug.clone()) {
                tracing::warn!(
                    "Duplicate slug {:?} in {:?}, keeping the first post",
                    post.slug,
                    path
                );
                continue;
            }
            posts.push(post);
        }

        // Stable: equal dates keep file-name order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.content_dir);
        Ok(posts)
    }

    /// Find a post by slug.
    ///
    /// Tries `<slug>.mdx` and `<slug>.md` first, then falls back to scanning
    /// front-matter slug overrides. When several files claim the slug, the
    /// first in file-name order wins, as in [`list_all`](Self::list_all).
    /// Never fails; load errors count as a miss.
    pub fn get_by_slug(&self, slug: &str) -> Option<Post> {
        if !is_safe_slug(slug) {
            tracing::debug!("Rejected slug {:?}", slug);
            return None;
        }

        let files = match self.source_files() {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Failed to scan {:?}: {}", self.content_dir, e);
                return None;
            }
        };

        // Only files sorted before a direct hit can claim the slug ahead of it
        let direct = self.find_by_file_name(slug);
        let limit = direct
            .as_ref()
            .and_then(|(path, _)| files.iter().position(|f| f.file_name() == path.file_name()))
            .unwrap_or(files.len());

        let post = files[..limit]
            .iter()
            .find_map(|path| load_claiming(path, slug))
            .or(direct.map(|(_, post)| post));
        if post.is_none() {
            tracing::debug!("Post not found: {}", slug);
        }
        post
    }

    /// Posts carrying `tag`, newest first
    pub fn list_by_tag(&self, tag: &str) -> Result<Vec<Post>> {
        let mut posts = self.list_all()?;
        posts.retain(|p| p.has_tag(tag));
        Ok(posts)
    }

    /// Every tag in use, sorted
    pub fn all_tags(&self) -> Result<Vec<String>> {
        let tags: BTreeSet<String> = self
            .list_all()?
            .into_iter()
            .flat_map(|p| p.tags)
            .collect();
        Ok(tags.into_iter().collect())
    }

    fn find_by_file_name(&self, slug: &str) -> Option<(PathBuf, Post)> {
        EXTENSIONS.iter().find_map(|ext| {
            let path = self.content_dir.join(format!("{}.{}", slug, ext));
            if !path.is_file() {
                return None;
            }
            match load_post(&path) {
                // A front-matter slug renames the post away from its file name
                Ok(post) if post.slug == slug => Some((path, post)),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                    None
                }
            }
        })
    }

    /// Post source files directly inside the content directory, by file name
    fn source_files(&self) -> Result<Vec<PathBuf>> {
        if !self.content_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.content_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // The content directory itself is unreadable
                Err(e) if e.depth() == 0 => {
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
                    return Err(ContentError::io(&self.content_dir, source));
                }
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", e.path().unwrap_or(&self.content_dir), e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && is_post_file(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }
}

/// Read and parse one post file
fn load_post(path: &Path) -> Result<Post> {
    let source = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
    Post::parse(&source, &file_slug(path))
}

/// Load `path` if its canonical slug is `slug`, logging failures as a miss
fn load_claiming(path: &Path, slug: &str) -> Option<Post> {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!("Failed to read {:?}: {}", path, e);
            return None;
        }
    };

    let (fm, body) = match FrontMatter::parse(&source) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Failed to parse {:?}: {}", path, e);
            return None;
        }
    };

    let stem = file_slug(path);
    if fm.slug().unwrap_or(&stem) != slug {
        return None;
    }

    match Post::from_parts(fm, body, &stem) {
        Ok(post) => Some(post),
        Err(e) => {
            tracing::warn!("Failed to load post {:?}: {}", path, e);
            None
        }
    }
}

/// File name without its extension
fn file_slug(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Check if a file is a post source
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Slugs arrive from URLs; keep lookups inside the content directory
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\0'])
}
