//! List blog content

use anyhow::Result;
use std::io::{self, Write};

use crate::content::{Post, PostIndex};
use crate::helpers::display_date;
use crate::Blog;

/// List posts, the featured post, or categories
pub fn run(blog: &Blog, content_type: &str, json: bool) -> Result<()> {
    let index = blog.posts()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(&mut out, index, &blog.config.date_format, content_type, json)
}

/// Write a listing of `content_type` to `out`
pub fn write_listing<W: Write>(
    out: &mut W,
    index: &PostIndex,
    date_format: &str,
    content_type: &str,
    json: bool,
) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(index.all())?)?;
            } else {
                writeln!(out, "Posts ({}):", index.len())?;
                for post in index.all() {
                    write_post_line(out, post, date_format)?;
                }
            }
        }
        "featured" => match index.featured() {
            Some(post) if json => writeln!(out, "{}", serde_json::to_string_pretty(post)?)?,
            Some(post) => write_post_line(out, post, date_format)?,
            None if json => writeln!(out, "null")?,
            None => writeln!(out, "No featured post")?,
        },
        "category" | "categories" => {
            let categories = index.categories();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&categories)?)?;
            } else {
                writeln!(out, "Categories ({}):", categories.len())?;
                for (category, count) in categories {
                    let name = if category.is_empty() { "(none)" } else { category };
                    writeln!(out, "  {} ({})", name, count)?;
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, featured, category",
                content_type
            );
        }
    }

    Ok(())
}

fn write_post_line<W: Write>(out: &mut W, post: &Post, date_format: &str) -> io::Result<()> {
    let marker = if post.featured { " *" } else { "" };
    writeln!(
        out,
        "  {} - {} [{}]{}",
        display_date(&post.date, date_format),
        post.title,
        post.slug,
        marker
    )
}
