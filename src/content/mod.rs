//! Content module - post documents, front-matter and the post index

mod frontmatter;
mod index;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, Value};
pub use index::PostIndex;
pub use markdown::MarkdownRenderer;
pub use post::{slug_from_path, Post};
