// Platform detection: explicit hint keys and URL substring heuristics.

use serde::Serialize;

use crate::error::{CurioError, Result};

/// A supported social platform. Decided once per invocation, before any
/// job-input or normalization logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Twitter,
    Instagram,
    Threads,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Twitter => write!(f, "twitter"),
            Platform::Instagram => write!(f, "instagram"),
            Platform::Threads => write!(f, "threads"),
        }
    }
}

impl Platform {
    /// Match an explicit platform key. "x" and "twitter" are both accepted
    /// spellings for the same platform; matching is case-sensitive.
    pub fn from_key(key: &str) -> Option<Platform> {
        match key {
            "twitter" | "x" => Some(Platform::Twitter),
            "instagram" => Some(Platform::Instagram),
            "threads" => Some(Platform::Threads),
            _ => None,
        }
    }

    /// Detect the platform from a post URL. Substring matching in fixed
    /// priority order; paths and query strings don't matter.
    pub fn detect(url: &str) -> Option<Platform> {
        if url.contains("x.com") || url.contains("twitter.com") {
            return Some(Platform::Twitter);
        }
        if url.contains("instagram.com") {
            return Some(Platform::Instagram);
        }
        if url.contains("threads.net") {
            return Some(Platform::Threads);
        }
        None
    }
}

/// Resolve the platform for a fetch. An explicit hint must name a known
/// platform; without one, the URL is inspected.
pub fn resolve(url: &str, hint: Option<&str>) -> Result<Platform> {
    match hint {
        Some(key) => Platform::from_key(key)
            .ok_or_else(|| CurioError::UnsupportedPlatform(key.to_string())),
        None => Platform::detect(url)
            .ok_or_else(|| CurioError::UnsupportedPlatform(format!("no match for URL: {url}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_twitter_domains_regardless_of_path() {
        for url in [
            "https://x.com/user/status/123?s=20",
            "https://twitter.com/user/status/123",
            "http://www.twitter.com/a/b/c",
        ] {
            assert_eq!(Platform::detect(url), Some(Platform::Twitter), "{url}");
        }
    }

    #[test]
    fn detects_instagram() {
        assert_eq!(
            Platform::detect("https://www.instagram.com/p/Cxyz123/?igsh=a"),
            Some(Platform::Instagram)
        );
    }

    #[test]
    fn detects_threads() {
        assert_eq!(
            Platform::detect("https://www.threads.net/@user/post/Cabc"),
            Some(Platform::Threads)
        );
    }

    #[test]
    fn unknown_url_is_unresolved() {
        assert_eq!(Platform::detect("https://example.com/post/1"), None);
    }

    #[test]
    fn hint_aliases_for_twitter() {
        assert_eq!(Platform::from_key("x"), Some(Platform::Twitter));
        assert_eq!(Platform::from_key("twitter"), Some(Platform::Twitter));
    }

    #[test]
    fn hint_matching_is_case_sensitive() {
        assert_eq!(Platform::from_key("Twitter"), None);
        assert_eq!(Platform::from_key("X"), None);
    }

    #[test]
    fn resolve_prefers_hint_over_url() {
        let platform = resolve("https://x.com/user/status/1", Some("instagram")).unwrap();
        assert_eq!(platform, Platform::Instagram);
    }

    #[test]
    fn resolve_rejects_unknown_hint_without_url_fallback() {
        let err = resolve("https://x.com/user/status/1", Some("tiktok")).unwrap_err();
        assert!(matches!(err, CurioError::UnsupportedPlatform(_)));
    }

    #[test]
    fn resolve_falls_back_to_url_detection() {
        let platform = resolve("https://www.threads.net/@user/post/1", None).unwrap();
        assert_eq!(platform, Platform::Threads);
    }

    #[test]
    fn resolve_rejects_unknown_url() {
        let err = resolve("https://example.com/post/1", None).unwrap_err();
        assert!(matches!(err, CurioError::UnsupportedPlatform(_)));
    }
}
