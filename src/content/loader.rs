//! Content loader - reads page records from the source directory

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, Page};
use crate::Site;

/// Loads pages from the site's source directory
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load all pages from the source directory
    ///
    /// Missing source directory yields an empty collection; a source path
    /// that exists but is not a directory is rejected as invalid input.
    pub fn load_pages(&self) -> Result<Vec<Page>, ContentError> {
        let source_dir = &self.site.source_dir;
        if !source_dir.exists() {
            return Ok(Vec::new());
        }
        if !source_dir.is_dir() {
            return Err(ContentError::InvalidInput(source_dir.clone()));
        }

        let mut pages = Vec::new();

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            // Skip special directories (.vuepress, _drafts, ...)
            let relative = path.strip_prefix(source_dir).unwrap_or(path);
            let skipped = relative.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map(|s| s.starts_with('_') || s.starts_with('.'))
                    .unwrap_or(false)
            });
            if skipped {
                continue;
            }

            if path.is_file() && is_markdown_file(path) {
                match self.load_page(path) {
                    Ok(page) => {
                        tracing::debug!("Loaded page {}", page.source);
                        pages.push(page);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        // Keep a deterministic input order for the views
        pages.sort_by(|a, b| a.source.cmp(&b.source));

        Ok(pages)
    }

    /// Load a single page from a file
    fn load_page(&self, path: &Path) -> Result<Page, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        let title = fm.title.clone().unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let source = path
            .strip_prefix(&self.site.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let page_path = page_path_for(&source);

        let mut page = Page::new(page_path, title, fm, source);
        page.raw = body.to_string();

        Ok(page)
    }
}

/// Derive the URL path for a source file
///
/// index.md maps to its parent directory; everything else gets a
/// trailing-slash path from the file stem.
fn page_path_for(source: &str) -> String {
    let without_ext = source.trim_end_matches(".md").trim_end_matches(".markdown");

    let path = if without_ext.ends_with("/index") || without_ext == "index" {
        without_ext.trim_end_matches("index").to_string()
    } else {
        format!("{}/", without_ext)
    };

    if path.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", path.trim_start_matches('/'))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_page(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn site_in(dir: &Path) -> Site {
        Site::new(dir).unwrap()
    }

    #[test]
    fn test_load_pages() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");

        write_page(
            &src,
            "blog/first.md",
            "---\ntitle: First\npage: Post\ndate: 2021-06-01\n---\nHello.\n",
        );
        write_page(
            &src,
            "courses/vue.md",
            "---\ntitle: Vue Course\ntype: course\ndate: 2020-01-01\n---\nCourse.\n",
        );
        write_page(&src, "index.md", "Home page, no front-matter.\n");

        let site = site_in(tmp.path());
        let pages = ContentLoader::new(&site).load_pages().unwrap();

        assert_eq!(pages.len(), 3);
        let first = pages.iter().find(|p| p.title == "First").unwrap();
        assert_eq!(first.path, "/blog/first/");
        assert_eq!(first.frontmatter.page.as_deref(), Some("Post"));

        let home = pages.iter().find(|p| p.source == "index.md").unwrap();
        assert_eq!(home.path, "/");
    }

    #[test]
    fn test_skips_special_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");

        write_page(&src, ".vuepress/notes.md", "hidden\n");
        write_page(&src, "_drafts/wip.md", "draft\n");
        write_page(&src, "visible.md", "shown\n");

        let site = site_in(tmp.path());
        let pages = ContentLoader::new(&site).load_pages().unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].source, "visible.md");
    }

    #[test]
    fn test_missing_source_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let site = site_in(tmp.path());
        let pages = ContentLoader::new(&site).load_pages().unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_source_file_is_invalid_input() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("src"), "not a dir").unwrap();

        let site = site_in(tmp.path());
        let err = ContentLoader::new(&site).load_pages().unwrap_err();
        assert!(matches!(err, ContentError::InvalidInput(_)));
    }

    #[test]
    fn test_bad_page_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");

        write_page(&src, "broken.md", "{\"title\": unterminated\n");
        write_page(&src, "fine.md", "---\ntitle: Fine\n---\nok\n");

        let site = site_in(tmp.path());
        let pages = ContentLoader::new(&site).load_pages().unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, "Fine");
    }
}
