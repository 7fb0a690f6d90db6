//! Print the resolved site configuration

use anyhow::Result;

use crate::Site;

/// Print a summary of the resolved configuration
pub fn run(site: &Site) -> Result<()> {
    let config = &site.config;

    println!("{}", config.title);
    if !config.description.is_empty() {
        println!("{}", config.description);
    }
    println!("language: {}", config.language);
    println!("source:   {:?}", site.source_dir);

    if let Some(locale) = config.locale("/") {
        if !locale.nav.is_empty() {
            println!("nav:");
            for item in &locale.nav {
                println!("  {} -> {}", item.text, item.link);
            }
        }
        if !locale.sidebar.is_empty() {
            println!("sidebar: {}", locale.sidebar.join(", "));
        }
    }

    if !config.theme_config.social.is_empty() {
        println!("social:");
        for link in &config.theme_config.social {
            println!("  {} -> {}", link.name, link.link);
        }
    }

    if !config.aliases.is_empty() {
        println!("aliases:");
        for (alias, target) in &config.aliases {
            println!("  {} -> {}", alias, target);
        }
    }

    Ok(())
}
