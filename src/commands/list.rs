//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::context::RenderContext;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(site);
    let pages = loader.load_pages()?;
    let ctx = RenderContext::new(&site.config, &pages);

    match content_type {
        "course" | "courses" => {
            let courses = ctx.courses();
            println!("Courses ({}):", courses.len());
            for page in courses {
                println!("  {} - {} [{}]", date_label(&ctx, page), page.title, page.source);
            }
        }
        "post" | "posts" => {
            let posts = ctx.posts();
            println!("Posts ({}):", posts.len());
            for page in posts {
                println!("  {} - {} [{}]", date_label(&ctx, page), page.title, page.source);
            }
        }
        "page" | "pages" => {
            println!("Pages ({}):", pages.len());
            for page in &pages {
                println!("  {} [{}]", page.title, page.source);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: course, post, page",
                content_type
            );
        }
    }

    Ok(())
}

fn date_label(ctx: &RenderContext, page: &crate::content::Page) -> String {
    match page.date() {
        Some(date) => ctx.format_date(&date),
        None => "(undated)".to_string(),
    }
}
