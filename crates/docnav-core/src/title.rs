// Rust guideline compliant 2026-02-06

//! Human-readable titles and relative links for documentation pages.

use std::path::Path;

/// Derives a navigation label from a documentation file path.
///
/// The base name without extension has underscores replaced by spaces and is
/// then title-cased: a character following a cased letter is lowercased, any
/// other character is uppercased. Letters without case (such as CJK) therefore
/// start a new word.
///
/// # Examples
///
/// ```
/// use docnav_core::derive_title;
///
/// assert_eq!(derive_title("docs/my_file.md"), "My File");
/// assert_eq!(derive_title("a_b_c.md"), "A B C");
/// ```
pub fn derive_title(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    title_case(&stem.replace('_', " "))
}

/// Returns the link target to use from a sibling page: the file name alone.
///
/// `docs/setup.md` becomes `setup.md`.
pub fn relative_link(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_cased = false;
    for c in text.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}
