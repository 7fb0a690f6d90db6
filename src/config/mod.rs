//! Configuration module

mod site;

pub use site::{HeadTag, LocaleConfig, NavItem, SiteConfig, SocialLink, ThemeConfig};
