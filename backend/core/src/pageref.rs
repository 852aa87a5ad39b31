//! Path and page-reference helpers.
//!
//! Paths are slash-separated, space-relative references; they never touch the
//! real filesystem here.

/// Whether a string is acceptable as a document path.
///
/// Rejects empty paths, control characters, backslashes, leading/trailing
/// slashes, and any empty or `.`/`..` segment.
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    if path.chars().any(|c| c.is_control()) || path.contains('\\') {
        return false;
    }
    if path.starts_with('/') || path.ends_with('/') {
        return false;
    }
    path.split('/').all(|seg| !seg.is_empty() && seg != "." && seg != "..")
}

/// Percent-encode a path for use inside a markdown inline link.
///
/// Only characters that break markdown link syntax are encoded; `/` is kept
/// so folder structure stays readable.
pub fn encode_page_uri(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for ch in path.chars() {
        match ch {
            ' ' => out.push_str("%20"),
            '%' => out.push_str("%25"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            _ => out.push(ch),
        }
    }
    out
}

/// Resolve a name relative to the folder of the current document.
///
/// `resolve_markdown_link("notes/today", "photo.png")` → `"notes/photo.png"`;
/// a current path without a folder yields the bare name.
pub fn resolve_markdown_link(current_path: &str, name: &str) -> String {
    match current_path.rsplit_once('/') {
        Some((folder, _)) => format!("{folder}/{name}"),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_paths() {
        assert!(is_valid_path("photo.png"));
        assert!(is_valid_path("notes/attachments/photo.png"));
    }

    #[test]
    fn invalid_paths() {
        assert!(!is_valid_path(""));
        assert!(!is_valid_path("/rooted"));
        assert!(!is_valid_path("trailing/"));
        assert!(!is_valid_path("a//b"));
        assert!(!is_valid_path("../escape"));
        assert!(!is_valid_path("a/./b"));
        assert!(!is_valid_path("win\\path"));
        assert!(!is_valid_path("bad\nname"));
    }

    #[test]
    fn encoding_keeps_slashes() {
        assert_eq!(encode_page_uri("a b/c"), "a%20b/c");
        assert_eq!(encode_page_uri("50%(done)"), "50%25%28done%29");
        assert_eq!(encode_page_uri("plain/path.png"), "plain/path.png");
    }

    #[test]
    fn resolves_relative_to_current_folder() {
        assert_eq!(resolve_markdown_link("notes/today", "p.png"), "notes/p.png");
        assert_eq!(resolve_markdown_link("index", "p.png"), "p.png");
        assert_eq!(
            resolve_markdown_link("a/b/c", "file.txt"),
            "a/b/file.txt"
        );
    }
}
