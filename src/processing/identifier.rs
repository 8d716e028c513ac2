//! Identifier extraction — turn a profile URL or raw handle into a username.

/// Extract a Reddit username from a profile URL, or pass a bare handle
/// through. Returns `None` for empty input or an unrecognized URL.
pub fn extract_identifier(input: Option<&str>) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Bare handle — accept verbatim, minus an optional u/ prefix
    if !trimmed.starts_with("http") {
        return Some(trimmed.strip_prefix("u/").unwrap_or(trimmed).to_string());
    }

    let patterns = [
        r"(?i)reddit\.com/u/([^/?#]+)",
        r"(?i)reddit\.com/user/([^/?#]+)",
        r"(?i)reddit\.com/users/([^/?#]+)",
    ];
    for pattern in patterns {
        let re = regex::Regex::new(pattern).unwrap();
        if let Some(caps) = re.captures(trimmed) {
            return Some(caps[1].to_string());
        }
    }

    tracing::warn!(input = trimmed, "Could not extract username from input");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_forms() {
        assert_eq!(
            extract_identifier(Some("https://www.reddit.com/user/testuser/")),
            Some("testuser".to_string())
        );
        assert_eq!(
            extract_identifier(Some("https://www.reddit.com/u/testuser")),
            Some("testuser".to_string())
        );
        assert_eq!(
            extract_identifier(Some("https://www.reddit.com/users/testuser/")),
            Some("testuser".to_string())
        );
    }

    #[test]
    fn test_case_insensitive_domain() {
        assert_eq!(
            extract_identifier(Some("HTTPS://WWW.REDDIT.COM/USER/TestUser")),
            Some("TestUser".to_string())
        );
    }

    #[test]
    fn test_url_stops_at_query_and_fragment() {
        assert_eq!(
            extract_identifier(Some("https://reddit.com/user/abc?sort=new")),
            Some("abc".to_string())
        );
        assert_eq!(
            extract_identifier(Some("https://reddit.com/user/abc#top")),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_bare_handle() {
        assert_eq!(extract_identifier(Some("testuser")), Some("testuser".to_string()));
        assert_eq!(extract_identifier(Some("u/testuser")), Some("testuser".to_string()));
        assert_eq!(extract_identifier(Some("  spaced  ")), Some("spaced".to_string()));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(extract_identifier(Some("https://www.example.com/invalid")), None);
        assert_eq!(extract_identifier(None), None);
        assert_eq!(extract_identifier(Some("")), None);
        assert_eq!(extract_identifier(Some("   ")), None);
    }
}
