//! Clean the public directory

use std::fs;

use crate::{Blog, Error, Result};

/// Delete the generated output
pub fn run(blog: &Blog) -> Result<()> {
    if blog.public_dir.exists() {
        fs::remove_dir_all(&blog.public_dir).map_err(|e| Error::io(&blog.public_dir, e))?;
        tracing::info!("Deleted: {:?}", blog.public_dir);
    }

    Ok(())
}
