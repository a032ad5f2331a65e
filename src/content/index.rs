//! Post index - the sorted, read-only collection of posts

use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;

use super::post::{slug_from_path, Post};

/// All posts, newest first
#[derive(Debug, Clone, Default)]
pub struct PostIndex {
    posts: Vec<Post>,
}

impl PostIndex {
    /// Build an index from assembled posts.
    ///
    /// Posts are sorted by date descending; missing or unparsable dates sort
    /// last. The sort is stable, so equal dates keep the given order.
    pub fn new(mut posts: Vec<Post>) -> Self {
        sort_newest_first(&mut posts);
        warn_suspicious(&posts);
        Self { posts }
    }

    /// Build an index from `(identifier, raw text)` pairs
    pub fn from_sources<I, P, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let posts = sources
            .into_iter()
            .map(|(path, raw)| Post::from_source(slug_from_path(path.as_ref()), raw.as_ref()))
            .collect();
        Self::new(posts)
    }

    /// Every post, newest first
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Exact, case-sensitive slug lookup. With duplicate slugs the first
    /// post in sorted order wins.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// The first featured post in sorted order
    pub fn featured(&self) -> Option<&Post> {
        self.posts.iter().find(|p| p.featured)
    }

    /// Posts not flagged as featured, newest first
    pub fn regular(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| !p.featured)
    }

    /// Up to `limit` other posts in the same category
    pub fn related(&self, post: &Post, limit: usize) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.category == post.category && p.slug != post.slug)
            .take(limit)
            .collect()
    }

    /// Post count per category, in order of first appearance
    pub fn categories(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for post in &self.posts {
            *counts.entry(post.category.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

fn sort_newest_first(posts: &mut [Post]) {
    // `None` orders below every date, so undated posts land at the end
    posts.sort_by_key(|p| std::cmp::Reverse(p.published()));
}

fn warn_suspicious(posts: &[Post]) {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.slug.as_str()) {
            tracing::warn!("Duplicate post slug {:?}; lookups return the newest", post.slug);
        }
        if cfg!(debug_assertions) && !post.date.trim().is_empty() && post.published().is_none() {
            tracing::warn!(
                "Post {:?} has unparsable date {:?}; sorting it last",
                post.slug,
                post.date
            );
        }
    }
}
