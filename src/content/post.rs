//! Post model

use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::Path;

use super::FrontMatter;
use crate::helpers::parse_date;

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Identifier derived from the source file name
    pub slug: String,

    pub title: String,

    /// Short summary shown on list pages
    pub excerpt: String,

    pub category: String,

    /// Publication date as written in the front-matter
    pub date: String,

    /// Free-form reading time, e.g. "8 min read"
    pub read_time: String,

    /// Whether the post is highlighted on the blog page
    pub featured: bool,

    pub author: String,

    /// Raw markdown body
    pub content: String,
}

impl Post {
    /// Build a post from a slug and the raw document text
    pub fn from_source(slug: impl Into<String>, raw: &str) -> Self {
        let (fm, body) = FrontMatter::parse(raw);
        Self {
            slug: slug.into(),
            title: fm.text("title"),
            excerpt: fm.text("excerpt"),
            category: fm.text("category"),
            date: fm.text("date"),
            read_time: fm.text("readTime"),
            featured: fm.flag("featured"),
            author: fm.text("author"),
            content: body.to_string(),
        }
    }

    /// Parsed publication date, `None` when missing or unparsable
    pub fn published(&self) -> Option<NaiveDateTime> {
        parse_date(&self.date)
    }
}

/// Derive a slug from a storage identifier: the file name without
/// directory prefix or extension.
pub fn slug_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
