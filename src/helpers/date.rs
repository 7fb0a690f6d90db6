//! Date helper functions

use chrono::{DateTime, Datelike, TimeZone};

/// Format a date the way a browser renders
/// `toLocaleDateString(lang, { year: "numeric", month: "short", day: "numeric" })`
///
/// # Examples
/// ```ignore
/// format_date(&date, "en-US") // -> "Jan 15, 2024"
/// format_date(&date, "es-ES") // -> "15 ene 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, lang: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let month = short_month(lang, date.month());
    match lang_family(lang) {
        "es" => format!("{} {} {}", date.day(), month, date.year()),
        "de" => format!("{}. {} {}", date.day(), month, date.year()),
        // en-US ordering is the fallback for unknown locales
        _ => format!("{} {}, {}", month, date.day(), date.year()),
    }
}

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date_pattern(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date_pattern<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Language code without the region suffix
fn lang_family(lang: &str) -> &str {
    lang.split(['-', '_']).next().unwrap_or(lang)
}

/// Abbreviated month name per language
fn short_month(lang: &str, month: u32) -> &'static str {
    const EN: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    const ES: [&str; 12] = [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
    ];
    const DE: [&str; 12] = [
        "Jan", "Feb", "März", "Apr", "Mai", "Juni", "Juli", "Aug", "Sept", "Okt", "Nov", "Dez",
    ];

    let idx = (month.clamp(1, 12) - 1) as usize;
    match lang_family(lang) {
        "es" => ES[idx],
        "de" => DE[idx],
        _ => EN[idx],
    }
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each category
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }
    result
}
