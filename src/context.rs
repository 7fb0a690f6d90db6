//! Per-render context
//!
//! The derived views, the date formatter, and the meta helper are handed to
//! each render call as an explicit read-only value. Nothing here registers
//! itself on a global or mutates shared state.

use chrono::{DateTime, Local};

use crate::config::SiteConfig;
use crate::content::Page;
use crate::helpers::{self, MetaEntry};
use crate::views;

/// Read-only bundle of derived views and helpers for the rendering layer
pub struct RenderContext<'a> {
    config: &'a SiteConfig,
    courses: Vec<Page>,
    posts: Vec<Page>,
}

impl<'a> RenderContext<'a> {
    /// Build a context from the full page collection
    ///
    /// The views are computed once; the input collection is left untouched.
    pub fn new(config: &'a SiteConfig, pages: &[Page]) -> Self {
        Self {
            config,
            courses: views::courses_view(pages),
            posts: views::posts_view(pages),
        }
    }

    /// Course pages, newest first
    pub fn courses(&self) -> &[Page] {
        &self.courses
    }

    /// Blog posts, newest first
    pub fn posts(&self) -> &[Page] {
        &self.posts
    }

    /// Format a date in the site language
    pub fn format_date(&self, date: &DateTime<Local>) -> String {
        helpers::format_date(date, &self.config.language)
    }

    /// Social meta entries for a page, page front-matter winning over defaults
    pub fn meta_for(&self, page: &Page) -> Vec<MetaEntry> {
        let defaults = helpers::default_meta(page, self.config);
        helpers::merge_meta(&page.frontmatter.meta, &defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    fn page(source: &str, kind: Option<&str>, page_tag: Option<&str>, date: Option<&str>) -> Page {
        let fm = FrontMatter {
            kind: kind.map(str::to_string),
            page: page_tag.map(str::to_string),
            date: date.map(str::to_string),
            ..Default::default()
        };
        Page::new(
            format!("/{}/", source),
            source.to_string(),
            fm,
            format!("{}.md", source),
        )
    }

    #[test]
    fn test_context_views() {
        let config = SiteConfig::default();
        let pages = vec![
            page("a", Some("course"), None, Some("2020-01-01")),
            page("b", None, Some("Post"), Some("2021-06-01")),
            page("c", Some("course"), None, Some("2022-03-01")),
        ];

        let ctx = RenderContext::new(&config, &pages);
        assert_eq!(ctx.courses().len(), 2);
        assert_eq!(ctx.courses()[0].source, "c.md");
        assert_eq!(ctx.posts().len(), 1);
    }

    #[test]
    fn test_format_date_uses_site_language() {
        let config = SiteConfig {
            language: "es-ES".to_string(),
            ..Default::default()
        };
        let ctx = RenderContext::new(&config, &[]);

        let date = chrono::TimeZone::with_ymd_and_hms(&Local, 2021, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(ctx.format_date(&date), "1 jun 2021");
    }

    #[test]
    fn test_meta_for_merges_page_overrides() {
        let mut config = SiteConfig::default();
        config.theme_config.domain = "https://example.com".to_string();

        let fm = FrontMatter {
            title: Some("A".to_string()),
            meta: vec![MetaEntry::property("og:title", "Override")],
            ..Default::default()
        };
        let p = Page::new("/a/".into(), "A".into(), fm, "a.md".into());

        let ctx = RenderContext::new(&config, std::slice::from_ref(&p));
        let meta = ctx.meta_for(&p);

        let og_title = meta
            .iter()
            .find(|m| m.property.as_deref() == Some("og:title"))
            .unwrap();
        assert_eq!(og_title.content, "Override");

        let og_url = meta
            .iter()
            .find(|m| m.property.as_deref() == Some("og:url"))
            .unwrap();
        assert_eq!(og_url.content, "https://example.com/a/");
    }
}
