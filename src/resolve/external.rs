use regex::Regex;

fn external_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^[a-z][a-z0-9+.-]*://").expect("invalid scheme regex"),
                Regex::new(r"(?i)^cid:").expect("invalid cid regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
            ]
        })
        .as_slice()
}

/// Determine whether an asset reference points outside the local asset space.
///
/// Absolute URLs, `cid:`/`data:` URIs and protocol-relative references are returned to
/// callers untouched, since no local mount prefix or digest information applies to them.
pub fn is_external_reference(value: &str) -> bool {
    external_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::is_external_reference;

    #[test]
    fn matches_http_urls() {
        assert!(is_external_reference("http://cdn.example.com/js/app.js"));
        assert!(is_external_reference("HTTPS://cdn.example.com/js/app.js"));
    }

    #[test]
    fn matches_arbitrary_schemes() {
        assert!(is_external_reference("ftp://files.example.com/logo.png"));
        assert!(is_external_reference("chrome-extension://abcdef/style.css"));
    }

    #[test]
    fn matches_cid_references() {
        assert!(is_external_reference("cid:logo@example.com"));
    }

    #[test]
    fn matches_data_uris() {
        assert!(is_external_reference("data:image/png;base64,abc"));
    }

    #[test]
    fn matches_protocol_relative_urls() {
        assert!(is_external_reference("//cdn.example.com/js/app.js"));
    }

    #[test]
    fn keeps_relative_paths() {
        assert!(!is_external_reference("images/photo.png"));
        assert!(!is_external_reference("xmlhr.js"));
    }

    #[test]
    fn keeps_absolute_local_paths() {
        assert!(!is_external_reference("/icons/edit.png"));
    }
}
