//! Form rendering configuration.

/// Fallback texts used when rendering a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Shown in the tags field when the video has no tags
    pub tags_fallback: String,
    /// Thumbnail used when the backend sends none
    pub thumbnail_placeholder: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            tags_fallback: "No tags available".to_string(),
            thumbnail_placeholder: "./placeholder.jpg".to_string(),
        }
    }
}

impl FormConfig {
    /// Create config from environment variables.
    /// Blank values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            tags_fallback: non_blank_var("TAGS_FALLBACK").unwrap_or(defaults.tags_fallback),
            thumbnail_placeholder: non_blank_var("THUMBNAIL_PLACEHOLDER")
                .unwrap_or(defaults.thumbnail_placeholder),
        }
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}
