//! Request path translation module
//!
//! Maps a URL path onto the served root. The result never leaves the root:
//! `..` only removes segments that came from the request itself.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

/// File-system location for a request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedPath {
    /// Location under the root
    pub fs_path: PathBuf,
    /// Whether the request path ended with `/`
    pub trailing_slash: bool,
}

/// Percent-decode a request path, dropping any query or fragment
pub fn decode_path(request_path: &str) -> String {
    let path = request_path.split(['?', '#']).next().unwrap_or_default();
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}

/// Translate a request path to a location under `root`
pub fn translate_path(root: &Path, request_path: &str) -> TranslatedPath {
    let decoded = decode_path(request_path);

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s if is_plain_segment(s) => segments.push(s),
            _ => {}
        }
    }

    let mut fs_path = root.to_path_buf();
    fs_path.extend(segments);

    TranslatedPath {
        fs_path,
        trailing_slash: decoded.ends_with('/'),
    }
}

/// A segment that names exactly one entry (no drive prefix or separator)
fn is_plain_segment(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/srv/files")
    }

    #[test]
    fn test_plain_file() {
        let t = translate_path(&root(), "/docs/test.pdf");
        assert_eq!(t.fs_path, PathBuf::from("/srv/files/docs/test.pdf"));
        assert!(!t.trailing_slash);
    }

    #[test]
    fn test_query_and_fragment_are_dropped() {
        let t = translate_path(&root(), "/test.pdf?page=2#zoom");
        assert_eq!(t.fs_path, PathBuf::from("/srv/files/test.pdf"));
    }

    #[test]
    fn test_percent_decoding() {
        let t = translate_path(&root(), "/my%20file.pdf");
        assert_eq!(t.fs_path, PathBuf::from("/srv/files/my file.pdf"));
    }

    #[test]
    fn test_traversal_stays_under_root() {
        let t = translate_path(&root(), "/../../etc/passwd");
        assert_eq!(t.fs_path, PathBuf::from("/srv/files/etc/passwd"));

        let t = translate_path(&root(), "/a/../b/./c.pdf");
        assert_eq!(t.fs_path, PathBuf::from("/srv/files/b/c.pdf"));

        let t = translate_path(&root(), "/%2e%2e/%2e%2e/secret");
        assert_eq!(t.fs_path, PathBuf::from("/srv/files/secret"));
    }

    #[test]
    fn test_directory_marker() {
        let t = translate_path(&root(), "/docs/");
        assert_eq!(t.fs_path, PathBuf::from("/srv/files/docs"));
        assert!(t.trailing_slash);

        let t = translate_path(&root(), "/");
        assert_eq!(t.fs_path, root());
        assert!(t.trailing_slash);
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/a%20b/?x=1"), "/a b/");
    }
}
