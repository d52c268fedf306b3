//! Utility functions for URL inspection.

use url::Url;

/// Hosts accepted by the analysis backend.
const YOUTUBE_HOSTS: &[&str] = &["youtube.com", "youtu.be"];

/// Check whether a URL points at a YouTube host.
///
/// Accepts scheme-less input (`youtu.be/abc`) the way users paste it.
/// This is a hint only; the backend remains the authority on validity.
pub fn looks_like_youtube_url(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() {
        return false;
    }

    let parsed = if raw.contains("://") {
        Url::parse(raw)
    } else {
        Url::parse(&format!("https://{}", raw))
    };

    let host = match parsed.ok().and_then(|u| u.host_str().map(str::to_ascii_lowercase)) {
        Some(h) => h,
        None => return false,
    };

    YOUTUBE_HOSTS
        .iter()
        .any(|yt| host == *yt || host.ends_with(&format!(".{}", yt)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_hosts() {
        assert!(looks_like_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(looks_like_youtube_url("https://m.youtube.com/shorts/dQw4w9WgXcQ"));
        assert!(looks_like_youtube_url("youtu.be/dQw4w9WgXcQ"));
        assert!(looks_like_youtube_url("  HTTPS://YOUTUBE.COM/watch?v=x  "));
    }

    #[test]
    fn test_non_youtube_hosts() {
        assert!(!looks_like_youtube_url(""));
        assert!(!looks_like_youtube_url("https://vimeo.com/123"));
        assert!(!looks_like_youtube_url("https://notyoutube.com/watch?v=x"));
        assert!(!looks_like_youtube_url("not a url"));
    }
}
