//! Content-listing views
//!
//! Derived, ordered views over the page collection: filter on a front-matter
//! tag, then sort by publication date, newest first. The input collection is
//! never mutated; each call returns a freshly allocated sequence.

use chrono::{DateTime, Local};

use crate::content::Page;

/// Pages tagged `type: course`, newest first
pub fn courses_view(pages: &[Page]) -> Vec<Page> {
    view_by(pages, |p| p.frontmatter.kind.as_deref() == Some("course"))
}

/// Pages tagged `page: Post`, newest first
pub fn posts_view(pages: &[Page]) -> Vec<Page> {
    view_by(pages, |p| p.frontmatter.page.as_deref() == Some("Post"))
}

/// Filter, then stable-sort by date descending
///
/// Pages without a parseable date compare as the earliest possible date and
/// end up last. Equal dates keep their input order.
fn view_by<F>(pages: &[Page], pred: F) -> Vec<Page>
where
    F: Fn(&Page) -> bool,
{
    let mut keyed: Vec<(Option<DateTime<Local>>, Page)> = pages
        .iter()
        .filter(|p| pred(p))
        .map(|p| (p.date(), p.clone()))
        .collect();

    // sort_by is stable; None < Some, so undated pages sink to the end
    // of a descending order.
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    keyed.into_iter().map(|(_, p)| p).collect()
}
