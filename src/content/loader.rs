//! Content loader - discovers post documents in the content directory

use std::fs;
use std::path::PathBuf;

use super::post::{slug_from_path, Post};
use super::PostIndex;
use crate::{Blog, Error, Result};

/// Loads posts from the configured content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Find post documents matching the configured pattern, in path order
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.is_dir() {
            tracing::debug!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let pattern = content_dir
            .join(&self.blog.config.post_pattern)
            .to_string_lossy()
            .into_owned();
        let entries = glob::glob(&pattern).map_err(|source| Error::Pattern {
            pattern: pattern.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping unreadable entry: {}", e),
            }
        }
        paths.sort();

        tracing::debug!("Discovered {} post documents in {:?}", paths.len(), content_dir);
        Ok(paths)
    }

    /// Discover, parse and index every post
    pub fn load_index(&self) -> Result<PostIndex> {
        let mut posts = Vec::new();

        for path in self.discover()? {
            match fs::read(&path) {
                Ok(bytes) => {
                    let raw = String::from_utf8_lossy(&bytes);
                    posts.push(Post::from_source(slug_from_path(&path), &raw));
                }
                Err(e) => {
                    tracing::warn!("Failed to read post {:?}: {}", path, e);
                }
            }
        }

        let index = PostIndex::new(posts);
        tracing::info!("Indexed {} posts", index.len());
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn blog_in(dir: &TempDir) -> Blog {
        Blog::with_config(dir.path(), SiteConfig::default())
    }

    #[test]
    fn test_missing_content_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let blog = blog_in(&dir);
        let loader = ContentLoader::new(&blog);
        assert!(loader.discover().unwrap().is_empty());
        assert!(loader.load_index().unwrap().is_empty());
    }

    #[test]
    fn test_discovers_markdown_only_top_level() {
        let dir = TempDir::new().unwrap();
        let blog = blog_in(&dir);
        fs::create_dir_all(blog.content_dir.join("nested")).unwrap();
        fs::write(blog.content_dir.join("b.md"), "---\ndate: 2025-01-01\n---\nB\n").unwrap();
        fs::write(blog.content_dir.join("a.md"), "---\ndate: 2025-02-01\n---\nA\n").unwrap();
        fs::write(blog.content_dir.join("notes.txt"), "ignored").unwrap();
        fs::write(blog.content_dir.join("nested/c.md"), "ignored").unwrap();

        let loader = ContentLoader::new(&blog);
        let found: Vec<_> = loader
            .discover()
            .unwrap()
            .iter()
            .map(|p| slug_from_path(p))
            .collect();
        assert_eq!(found, vec!["a", "b"]);

        let index = loader.load_index().unwrap();
        let slugs: Vec<_> = index.all().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_utf8_still_yields_post() {
        let dir = TempDir::new().unwrap();
        let blog = blog_in(&dir);
        fs::create_dir_all(&blog.content_dir).unwrap();
        fs::write(
            blog.content_dir.join("odd.md"),
            b"---\ntitle: Odd\n---\nbad byte \xff here\n",
        )
        .unwrap();

        let index = ContentLoader::new(&blog).load_index().unwrap();
        let post = index.get_by_slug("odd").unwrap();
        assert_eq!(post.title, "Odd");
        assert!(post.content.contains('\u{FFFD}'));
    }
}
