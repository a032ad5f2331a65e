//! Helper functions shared by the CLI, templates and generator

mod date;
mod url;

pub use date::*;
pub use url::*;
