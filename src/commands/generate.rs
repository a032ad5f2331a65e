//! Generate static files

use crate::generator::Generator;
use crate::{Blog, Result};

/// Generate the blog pages into the public directory
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let index = blog.posts()?;
    let generator = Generator::new(blog)?;
    let pages = generator.generate(index)?;

    tracing::info!(
        "Generated {} pages for {} posts in {:.2}s",
        pages,
        index.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
