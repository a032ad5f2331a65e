//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::helpers::DEFAULT_DATE_FORMAT;
use crate::{Error, Result};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,
    /// Path segment of the blog pages under `root`
    pub blog_dir: String,

    // Directory
    pub content_dir: String,
    /// Glob matched inside `content_dir`
    pub post_pattern: String,
    pub public_dir: String,
    pub static_dir: String,

    // Display
    /// Moment.js-style format for post dates
    pub date_format: String,
    /// Regular posts shown next to the featured post
    pub latest_count: usize,
    /// Related posts shown under a post
    pub related_count: usize,
    #[serde(default)]
    pub highlight: HighlightConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "PiT-Inference".to_string(),
            subtitle: "Latest Updates".to_string(),
            description: "Research findings, tutorials, and product updates from the PiT-Inference team.".to_string(),
            author: "PiT-Inference Team".to_string(),
            language: "en".to_string(),

            url: "http://localhost:4000".to_string(),
            root: "/".to_string(),
            blog_dir: "blog".to_string(),

            content_dir: "src/content/blog".to_string(),
            post_pattern: "*.md".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            date_format: DEFAULT_DATE_FORMAT.to_string(),
            latest_count: 3,
            related_count: 2,
            highlight: HighlightConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    /// syntect theme name
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}
