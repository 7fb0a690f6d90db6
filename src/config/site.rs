//! Site configuration (site.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // Directory
    pub source_dir: String,

    /// Head tags injected by the framework (favicon links etc.)
    #[serde(default)]
    pub head: Vec<HeadTag>,

    /// Theme data: locales, nav, social links
    #[serde(default)]
    pub theme_config: ThemeConfig,

    /// Path alias map, longest prefix wins (build-tool `resolve.alias` analog)
    #[serde(default)]
    pub aliases: IndexMap<String, String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            description: String::new(),
            language: "en-US".to_string(),
            source_dir: "src".to_string(),
            head: Vec::new(),
            theme_config: ThemeConfig::default(),
            aliases: IndexMap::new(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Rewrite a path against the alias map
    ///
    /// The longest alias that matches as a whole path segment prefix wins.
    /// Returns `None` when no alias applies.
    pub fn resolve_alias(&self, path: &str) -> Option<String> {
        let mut keys: Vec<&String> = self.aliases.keys().collect();
        keys.sort_by_key(|k| std::cmp::Reverse(k.len()));

        for key in keys {
            let target = &self.aliases[key];
            if path == key {
                return Some(target.clone());
            }
            if let Some(rest) = path.strip_prefix(key.as_str()) {
                if rest.starts_with('/') {
                    return Some(format!("{}{}", target, rest));
                }
            }
        }
        None
    }

    /// Locale configuration for a path, falling back to the root locale
    pub fn locale(&self, path: &str) -> Option<&LocaleConfig> {
        self.theme_config
            .locales
            .get(path)
            .or_else(|| self.theme_config.locales.get("/"))
    }
}

/// One head tag, e.g. `["link", { rel: "icon", href: "/favicon.jpg" }]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadTag {
    pub tag: String,
    pub attrs: IndexMap<String, String>,
}

/// Theme-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Canonical site origin used for og:url
    pub domain: String,

    /// Per-locale navigation and sidebar, keyed by locale path
    pub locales: IndexMap<String, LocaleConfig>,

    /// Social profile links
    pub social: Vec<SocialLink>,
}

/// Navigation and sidebar for one locale
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub sidebar: Vec<String>,
    pub nav: Vec<NavItem>,
}

/// One navigation entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

/// One social profile link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub link: String,
}
