//! Content module - page records, front-matter, and loading

mod frontmatter;
pub mod loader;
mod page;

use std::path::PathBuf;
use thiserror::Error;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use page::Page;

/// Errors surfaced at the content ingestion boundary
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("source path {0:?} is not a directory")]
    InvalidInput(PathBuf),

    #[error("invalid JSON front-matter: {0}")]
    FrontMatter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
