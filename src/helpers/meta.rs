//! Social meta tag helpers
//!
//! Derives default OpenGraph entries for a page and merges them with the
//! page's own `meta` front-matter, keyed by `name`/`property`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::content::Page;

/// One `<meta>` tag, addressed by either `name` or `property`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,

    #[serde(default)]
    pub content: String,
}

impl MetaEntry {
    /// An entry keyed by `property` (OpenGraph style)
    pub fn property(property: &str, content: impl Into<String>) -> Self {
        Self {
            name: None,
            property: Some(property.to_string()),
            content: content.into(),
        }
    }

    /// An entry keyed by `name`
    pub fn named(name: &str, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.to_string()),
            property: None,
            content: content.into(),
        }
    }

    /// Merge key: `name` wins over `property`
    pub fn key(&self) -> &str {
        self.name
            .as_deref()
            .or(self.property.as_deref())
            .unwrap_or("")
    }
}

/// Default social meta entries for a page
pub fn default_meta(page: &Page, config: &SiteConfig) -> Vec<MetaEntry> {
    let fm = &page.frontmatter;
    vec![
        MetaEntry::property("og:title", fm.title.clone().unwrap_or_default()),
        MetaEntry::property("og:description", fm.description.clone().unwrap_or_default()),
        MetaEntry::property("og:image", fm.featured_image.clone().unwrap_or_default()),
        MetaEntry::property(
            "og:url",
            format!("{}{}", config.theme_config.domain, page.path),
        ),
        MetaEntry::named("twitter:card", "summary"),
    ]
}

/// Union of page meta and defaults, first occurrence of a key wins
pub fn merge_meta(page_meta: &[MetaEntry], defaults: &[MetaEntry]) -> Vec<MetaEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(page_meta.len() + defaults.len());

    for entry in page_meta.iter().chain(defaults) {
        if seen.insert(entry.key().to_string()) {
            merged.push(entry.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    fn page_with(fm: FrontMatter) -> Page {
        Page::new("/blog/post/".into(), "Post".into(), fm, "blog/post.md".into())
    }

    #[test]
    fn test_default_meta() {
        let fm = FrontMatter {
            title: Some("Hello".to_string()),
            description: Some("World".to_string()),
            featured_image: Some("/img/cover.png".to_string()),
            ..Default::default()
        };
        let page = page_with(fm);

        let mut config = SiteConfig::default();
        config.theme_config.domain = "https://example.com".to_string();

        let meta = default_meta(&page, &config);
        assert!(meta.contains(&MetaEntry::property("og:title", "Hello")));
        assert!(meta.contains(&MetaEntry::property(
            "og:url",
            "https://example.com/blog/post/"
        )));
    }

    #[test]
    fn test_merge_page_meta_wins() {
        let page_meta = vec![MetaEntry::property("og:title", "Custom")];
        let defaults = vec![
            MetaEntry::property("og:title", "Default"),
            MetaEntry::property("og:description", "Desc"),
        ];

        let merged = merge_meta(&page_meta, &defaults);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].content, "Custom");
        assert_eq!(merged[1].property.as_deref(), Some("og:description"));
    }
}
