//! Page model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::FrontMatter;

/// One content page plus its metadata
///
/// Pages are immutable once loaded; views and helpers only read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// URL path, unique within the site (e.g. "/blog/my-post/")
    pub path: String,

    /// Page title, from front-matter or the file name
    pub title: String,

    /// Parsed front-matter
    pub frontmatter: FrontMatter,

    /// Source file path (relative to the source dir)
    pub source: String,

    /// Raw markdown body with front-matter stripped
    pub raw: String,
}

impl Page {
    /// Create a new page with minimal required fields
    pub fn new(path: String, title: String, frontmatter: FrontMatter, source: String) -> Self {
        Self {
            path,
            title,
            frontmatter,
            source,
            raw: String::new(),
        }
    }

    /// Publication date parsed from front-matter, if present and well-formed
    pub fn date(&self) -> Option<DateTime<Local>> {
        self.frontmatter.parse_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_frontmatter() {
        let fm = FrontMatter {
            date: Some("2021-06-01".to_string()),
            ..Default::default()
        };
        let page = Page::new("/a/".into(), "A".into(), fm, "a.md".into());
        assert_eq!(
            page.date().unwrap().format("%Y-%m-%d").to_string(),
            "2021-06-01"
        );
    }

    #[test]
    fn test_missing_date_is_none() {
        let page = Page::new(
            "/b/".into(),
            "B".into(),
            FrontMatter::default(),
            "b.md".into(),
        );
        assert!(page.date().is_none());
    }
}
