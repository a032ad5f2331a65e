//! Show a single post

use anyhow::Result;
use std::io::{self, Write};

use crate::content::Post;
use crate::helpers::display_date;
use crate::Blog;

/// Print one post's metadata and body
pub fn run(blog: &Blog, slug: &str) -> Result<()> {
    let index = blog.posts()?;
    let Some(post) = index.get_by_slug(slug) else {
        anyhow::bail!("No post with slug {:?}", slug);
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_post(&mut out, post, &blog.config.date_format)?;
    Ok(())
}

/// Write a post as a header block followed by its markdown body
pub fn write_post<W: Write>(out: &mut W, post: &Post, date_format: &str) -> io::Result<()> {
    writeln!(out, "{}", post.title)?;
    let fields = [
        ("Slug", post.slug.clone()),
        ("Date", display_date(&post.date, date_format)),
        ("Category", post.category.clone()),
        ("Author", post.author.clone()),
        ("Read time", post.read_time.clone()),
        ("Featured", post.featured.to_string()),
    ];
    for (name, value) in fields {
        if !value.is_empty() {
            writeln!(out, "{}: {}", name, value)?;
        }
    }
    if !post.excerpt.is_empty() {
        writeln!(out, "\n{}", post.excerpt)?;
    }
    writeln!(out, "\n{}", post.content.trim_end())
}
