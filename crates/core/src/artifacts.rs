//! Artifact URL helpers shared by the API and the cleanup sweeper.

/// Derive the stored-object key from an artifact URL.
///
/// The key is the path segment after the last `/`. Returns `None` for empty
/// urls or urls ending in a slash, so callers can skip artifacts the
/// generator never produced.
pub fn artifact_key(url: &str) -> Option<&str> {
    let key = url.rsplit('/').next().unwrap_or(url);
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_last_path_segment() {
        assert_eq!(
            artifact_key("https://cdn.example.com/projects/abc123.zip"),
            Some("abc123.zip")
        );
    }

    #[test]
    fn handles_bare_filename() {
        assert_eq!(artifact_key("abc123.pdf"), Some("abc123.pdf"));
    }

    #[test]
    fn rejects_empty_and_trailing_slash() {
        assert_eq!(artifact_key(""), None);
        assert_eq!(artifact_key("https://cdn.example.com/projects/"), None);
    }
}
