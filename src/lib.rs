//! pit-blog: the PiT-Inference blog
//!
//! Posts are markdown documents with a small front-matter block. They are
//! discovered once, parsed into [`content::Post`] records and served from a
//! read-only [`content::PostIndex`], which the CLI, the static generator and
//! the local server all share through a [`Blog`] handle.

pub mod commands;
pub mod config;
pub mod content;
mod error;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

pub use error::{Error, Result};

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use content::loader::ContentLoader;
use content::PostIndex;

/// The blog application
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding post documents
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Assets copied verbatim into the output
    pub static_dir: PathBuf,
    /// Built on first access, then reused
    index: OnceCell<PostIndex>,
}

impl Blog {
    /// Create a new blog from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
            index: OnceCell::new(),
        }
    }

    /// Create a blog over an already built index; nothing is read from disk
    pub fn with_index<P: AsRef<Path>>(
        base_dir: P,
        config: config::SiteConfig,
        index: PostIndex,
    ) -> Self {
        let blog = Self::with_config(base_dir, config);
        // Freshly created cell, so this cannot be occupied
        let _ = blog.index.set(index);
        blog
    }

    /// The post index, loading it on first call
    pub fn posts(&self) -> Result<&PostIndex> {
        self.index
            .get_or_try_init(|| ContentLoader::new(self).load_index())
    }

    /// Generate the static blog pages
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
