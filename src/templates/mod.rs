//! Built-in blog templates using the Tera template engine
//!
//! The templates are embedded in the binary; the generator fills them with
//! the view structs below.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{MarkdownRenderer, Post};
use crate::helpers::{blog_url, display_date, full_url_for, iso_date, post_url, url_for};
use crate::Result;

/// Template renderer with the embedded blog templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // URLs must reach the markup untouched; free text is escaped in the
        // templates with the `escape` filter
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("blog.html", include_str!("blog/blog.html")),
            ("post.html", include_str!("blog/post.html")),
            (
                "partials/macros.html",
                include_str!("blog/partials/macros.html"),
            ),
        ])?;

        tera.register_filter("strip_html", strip_html_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: strip HTML tags
fn strip_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("strip_html", "value", String, value);
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    Ok(tera::Value::String(result))
}

/// Tera filter: truncate by character count
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 160,
    };
    let omission = match args.get("omission") {
        Some(val) => tera::try_get_value!("truncate_chars", "omission", String, val),
        None => "…".to_string(),
    };

    if s.chars().count() <= length {
        Ok(tera::Value::String(s))
    } else {
        let truncated: String = s.chars().take(length).collect();
        Ok(tera::Value::String(format!(
            "{}{}",
            truncated.trim_end(),
            omission
        )))
    }
}

/// Site-wide values available to every template
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub home_url: String,
    pub blog_url: String,
    /// Absolute URL of the blog list, for its canonical link
    pub blog_permalink: String,
}

impl SiteData {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            home_url: url_for(config, "/"),
            blog_url: blog_url(config),
            blog_permalink: full_url_for(
                config,
                &format!("{}/", config.blog_dir.trim_matches('/')),
            ),
        }
    }
}

/// A post as shown on list pages
#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub url: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: String,
    pub display_date: String,
    pub iso_date: Option<String>,
    pub read_time: String,
    pub author: String,
    pub featured: bool,
}

impl PostCard {
    pub fn new(config: &SiteConfig, post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            url: post_url(config, &post.slug),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category.clone(),
            date: post.date.clone(),
            display_date: display_date(&post.date, &config.date_format),
            iso_date: iso_date(&post.date),
            read_time: post.read_time.clone(),
            author: post.author.clone(),
            featured: post.featured,
        }
    }
}

/// A post page: card data plus the rendered body
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    #[serde(flatten)]
    pub card: PostCard,
    pub permalink: String,
    pub content: String,
}

impl PostPage {
    pub fn new(config: &SiteConfig, post: &Post, markdown: &MarkdownRenderer) -> Self {
        let card = PostCard::new(config, post);
        Self {
            // `card.url` already carries `root`
            permalink: format!("{}{}", config.url.trim_end_matches('/'), card.url),
            content: markdown.render(&post.content),
            card,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_truncate_chars_filter() {
        let mut args = HashMap::new();
        args.insert("length".to_string(), tera::Value::from(5));
        let out = truncate_chars_filter(&tera::Value::from("Hello world"), &args).unwrap();
        assert_eq!(out, tera::Value::from("Hello…"));

        let out = truncate_chars_filter(&tera::Value::from("Short"), &args).unwrap();
        assert_eq!(out, tera::Value::from("Short"));
    }

    #[test]
    fn test_strip_html_filter() {
        let out =
            strip_html_filter(&tera::Value::from("<p>Hi <b>there</b></p>"), &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::from("Hi there"));
    }

    #[test]
    fn test_post_card() {
        let config = SiteConfig::default();
        let post = Post::from_source(
            "hello",
            "---\ntitle: Hello\ndate: 2025-01-15\nreadTime: 4 min read\n---\nBody",
        );
        let card = PostCard::new(&config, &post);
        assert_eq!(card.url, "/blog/hello/");
        assert_eq!(card.display_date, "Jan 15, 2025");
        assert_eq!(card.iso_date.as_deref(), Some("2025-01-15"));
        assert_eq!(card.read_time, "4 min read");
    }

    #[test]
    fn test_post_page_renders_markdown() {
        let config = SiteConfig::default();
        let post = Post::from_source("hello", "---\ntitle: Hello\n---\n## Section\n");
        let page = PostPage::new(&config, &post, &MarkdownRenderer::new());
        assert!(page.content.contains("<h2>Section</h2>"));
        assert_eq!(page.permalink, "http://localhost:4000/blog/hello/");
    }

    fn site_under_subpath() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            root: "/site/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_permalinks_under_site_root() {
        let config = site_under_subpath();
        let post = Post::from_source("hello", "---\ntitle: Hello\n---\nBody\n");
        let page = PostPage::new(&config, &post, &MarkdownRenderer::new());
        assert_eq!(page.card.url, "/site/blog/hello/");
        assert_eq!(page.permalink, "https://example.com/site/blog/hello/");
        assert_eq!(
            SiteData::new(&config).blog_permalink,
            "https://example.com/site/blog/"
        );
    }

    #[test]
    fn test_pages_render_canonical_and_author() {
        let config = SiteConfig {
            author: "Ada & Co".to_string(),
            ..site_under_subpath()
        };
        let renderer = TemplateRenderer::new().unwrap();
        let site = SiteData::new(&config);
        let post = Post::from_source("hello", "---\ntitle: Hello\n---\nBody\n");
        let page = PostPage::new(&config, &post, &MarkdownRenderer::new());

        let mut context = Context::new();
        context.insert("site", &site);
        context.insert("post", &page);
        context.insert("related", &Vec::<PostCard>::new());
        let html = renderer.render("post.html", &context).unwrap();
        assert!(html
            .contains(r#"<link rel="canonical" href="https://example.com/site/blog/hello/">"#));
        assert!(html.contains(r#"<meta name="author" content="Ada &amp; Co">"#));

        let mut context = Context::new();
        context.insert("site", &site);
        context.insert("featured", &Option::<PostCard>::None);
        context.insert("latest", &Vec::<PostCard>::new());
        context.insert("more", &Vec::<PostCard>::new());
        let html = renderer.render("blog.html", &context).unwrap();
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/site/blog/">"#));
    }
}
