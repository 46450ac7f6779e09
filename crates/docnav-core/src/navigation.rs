// Rust guideline compliant 2026-02-06

//! Navigation line injection.
//!
//! Each documentation page gets the same navigation line above and below its
//! body. Lines inserted by an earlier run are stripped first, so running the
//! injector repeatedly does not stack navigation blocks.

use crate::title::{derive_title, relative_link};
use regex::Regex;
use std::sync::OnceLock;

/// Marker that opens the "previous" half of a navigation line.
pub const PREVIOUS_MARKER: &str = "← Previous:";

/// Marker that opens the "next" half of a navigation line.
pub const NEXT_MARKER: &str = "Next:";

const SEPARATOR: &str = " | ";

static PREVIOUS_LINE: OnceLock<Regex> = OnceLock::new();
static NEXT_LINE: OnceLock<Regex> = OnceLock::new();

fn previous_line_regex() -> &'static Regex {
    PREVIOUS_LINE.get_or_init(|| {
        Regex::new(r"\[← Previous:[^\n]*(?:\n|$)").expect("Invalid previous-link regex")
    })
}

fn next_line_regex() -> &'static Regex {
    NEXT_LINE.get_or_init(|| {
        Regex::new(r"\[Next:[^\n]*(?:\n|$)").expect("Invalid next-link regex")
    })
}

/// Builds the navigation line for a page, or `None` if it has no neighbors.
///
/// # Examples
///
/// ```
/// use docnav_core::navigation::navigation_line;
///
/// assert_eq!(
///     navigation_line(Some("docs/a.md"), Some("docs/c.md")).as_deref(),
///     Some("[← Previous: A](a.md) | [Next: C →](c.md)")
/// );
/// assert_eq!(navigation_line(None, None), None);
/// ```
pub fn navigation_line(prev: Option<&str>, next: Option<&str>) -> Option<String> {
    let mut parts = Vec::with_capacity(2);
    if let Some(prev) = prev {
        parts.push(format!(
            "[{} {}]({})",
            PREVIOUS_MARKER,
            derive_title(prev),
            relative_link(prev)
        ));
    }
    if let Some(next) = next {
        parts.push(format!(
            "[{} {} →]({})",
            NEXT_MARKER,
            derive_title(next),
            relative_link(next)
        ));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SEPARATOR))
    }
}

/// Removes navigation lines inserted by a previous run.
///
/// Every span from `[← Previous:` or `[Next:` through the end of its line is
/// dropped, including a final line without a trailing newline.
pub fn strip_navigation(content: &str) -> String {
    if !content.contains(PREVIOUS_MARKER) && !content.contains(NEXT_MARKER) {
        return content.to_string();
    }
    let without_prev = previous_line_regex().replace_all(content, "");
    next_line_regex().replace_all(&without_prev, "").into_owned()
}

/// Returns `content` with a navigation line placed before and after its body.
///
/// When both `prev` and `next` are `None` the content is returned unchanged.
/// Otherwise existing navigation lines are stripped, the body is trimmed, and
/// the result is laid out as a blank line, the navigation line, a blank line,
/// the body, a blank line, the navigation line, and a trailing blank line.
pub fn add_navigation_links(content: &str, prev: Option<&str>, next: Option<&str>) -> String {
    let Some(nav) = navigation_line(prev, next) else {
        return content.to_string();
    };

    let body = strip_navigation(content);
    format!("\n{nav}\n\n{}\n\n{nav}\n\n", body.trim())
}
