//! Generator module - writes the blog pages as static HTML

use std::fs;
use std::path::Path;

use tera::Context;
use walkdir::WalkDir;

use crate::content::{MarkdownRenderer, Post, PostIndex};
use crate::templates::{PostCard, PostPage, SiteData, TemplateRenderer};
use crate::{Blog, Error, Result};

/// Static blog generator using Tera templates
pub struct Generator<'a> {
    blog: &'a Blog,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(blog: &'a Blog) -> Result<Self> {
        Ok(Self {
            blog,
            renderer: TemplateRenderer::new()?,
            markdown: MarkdownRenderer::with_options(&blog.config.highlight),
        })
    }

    /// Generate the blog list page, one page per post, and static assets.
    ///
    /// Returns the number of HTML pages written.
    pub fn generate(&self, index: &PostIndex) -> Result<usize> {
        let public_dir = &self.blog.public_dir;
        fs::create_dir_all(public_dir).map_err(|e| Error::io(public_dir, e))?;

        self.copy_static_assets()?;

        let site = SiteData::new(&self.blog.config);
        let mut written = 0;

        self.generate_blog_page(index, &site)?;
        written += 1;

        for post in index.all() {
            if !is_safe_slug(&post.slug) {
                tracing::warn!("Skipping post with unusable slug {:?}", post.slug);
                continue;
            }
            if !index
                .get_by_slug(&post.slug)
                .is_some_and(|p| std::ptr::eq(p, post))
            {
                // Shadowed by a newer post with the same slug
                continue;
            }
            self.generate_post_page(index, post, &site)?;
            written += 1;
        }

        Ok(written)
    }

    /// Blog list: featured post, the latest regular posts, then the rest
    fn generate_blog_page(&self, index: &PostIndex, site: &SiteData) -> Result<()> {
        let config = &self.blog.config;

        let featured = index.featured().map(|p| PostCard::new(config, p));
        let regular: Vec<PostCard> = index.regular().map(|p| PostCard::new(config, p)).collect();
        let split = config.latest_count.min(regular.len());
        let (latest, more) = regular.split_at(split);

        let mut context = Context::new();
        context.insert("site", site);
        context.insert("featured", &featured);
        context.insert("latest", latest);
        context.insert("more", more);

        let html = self.renderer.render("blog.html", &context)?;
        let path = self.blog_dir().join("index.html");
        write_file(&path, &html)?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }

    /// A post page with its related posts
    fn generate_post_page(&self, index: &PostIndex, post: &Post, site: &SiteData) -> Result<()> {
        let config = &self.blog.config;

        let page = PostPage::new(config, post, &self.markdown);
        let related: Vec<PostCard> = index
            .related(post, config.related_count)
            .into_iter()
            .map(|p| PostCard::new(config, p))
            .collect();

        let mut context = Context::new();
        context.insert("site", site);
        context.insert("post", &page);
        context.insert("related", &related);

        let html = self.renderer.render("post.html", &context)?;
        let path = self.blog_dir().join(&post.slug).join("index.html");
        write_file(&path, &html)?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }

    /// Copy everything under the static directory into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.blog.static_dir;
        if !static_dir.is_dir() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(static_dir).unwrap_or(path);
            let dest = self.blog.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
            fs::copy(path, &dest).map_err(|e| Error::io(&dest, e))?;
        }

        Ok(())
    }

    fn blog_dir(&self) -> std::path::PathBuf {
        self.blog
            .public_dir
            .join(self.blog.config.blog_dir.trim_matches('/'))
    }
}

/// A slug that maps to exactly one directory name
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| Error::io(path, e))
}
