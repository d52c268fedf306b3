//! View-model for the analysis form.
//!
//! Mirrors the page the form lives on: a results panel with six display
//! fields and an error panel with a single line of text. Hidden panels keep
//! their last content, like hidden elements in a document.

use std::fmt;

use ytmeta_models::AnalysisResult;

use crate::config::FormConfig;

/// A visibility-toggled region of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Results,
    Error,
}

/// Rendered text of the results panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFields {
    pub title: String,
    pub channel: String,
    pub views: String,
    pub duration: String,
    pub tags: String,
    pub thumbnail: String,
}

impl DisplayFields {
    /// Format a result, applying the configured fallbacks.
    pub fn from_result(result: &AnalysisResult, config: &FormConfig) -> Self {
        Self {
            title: result.title.clone(),
            channel: result.channel.clone(),
            views: result.views.to_string(),
            duration: result.duration.clone(),
            tags: result
                .joined_tags()
                .unwrap_or_else(|| config.tags_fallback.clone()),
            thumbnail: result
                .thumbnail_url()
                .unwrap_or(config.thumbnail_placeholder.as_str())
                .to_string(),
        }
    }
}

/// State of the form's output area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub results_visible: bool,
    pub error_visible: bool,
    pub fields: DisplayFields,
    pub error_text: String,
    /// True while the latest submission awaits its response
    pub in_flight: bool,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide both panels.
    pub fn reset(&mut self) {
        self.results_visible = false;
        self.error_visible = false;
    }

    pub fn show_results(&mut self, fields: DisplayFields) {
        self.fields = fields;
        self.error_visible = false;
        self.results_visible = true;
    }

    pub fn show_error(&mut self, message: &str) {
        self.error_text = format!("Error: {}", message);
        self.results_visible = false;
        self.error_visible = true;
    }

    /// The panel currently shown, if any.
    pub fn visible_panel(&self) -> Option<Panel> {
        match (self.results_visible, self.error_visible) {
            (true, false) => Some(Panel::Results),
            (false, true) => Some(Panel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.visible_panel() {
            Some(Panel::Results) => {
                let fields = &self.fields;
                writeln!(f, "Title:     {}", fields.title)?;
                writeln!(f, "Channel:   {}", fields.channel)?;
                writeln!(f, "Views:     {}", fields.views)?;
                writeln!(f, "Duration:  {}", fields.duration)?;
                writeln!(f, "Tags:      {}", fields.tags)?;
                write!(f, "Thumbnail: {}", fields.thumbnail)
            }
            Some(Panel::Error) => write!(f, "{}", self.error_text),
            None if self.in_flight => write!(f, "Analyzing..."),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytmeta_models::ViewCount;

    fn result(tags: Vec<&str>, thumbnail: Option<&str>) -> AnalysisResult {
        AnalysisResult {
            title: "T".to_string(),
            channel: "C".to_string(),
            views: ViewCount::from("1,000"),
            duration: "3:00".to_string(),
            tags: tags.into_iter().map(String::from).collect(),
            thumbnail: thumbnail.map(String::from),
        }
    }

    #[test]
    fn test_fields_use_fallbacks() {
        let fields = DisplayFields::from_result(&result(vec![], Some("")), &FormConfig::default());
        assert_eq!(fields.tags, "No tags available");
        assert_eq!(fields.thumbnail, "./placeholder.jpg");
        assert_eq!(fields.views, "1,000");
    }

    #[test]
    fn test_fields_use_custom_fallbacks() {
        let config = FormConfig {
            tags_fallback: "No tags found".to_string(),
            thumbnail_placeholder: "/static/none.png".to_string(),
        };
        let fields = DisplayFields::from_result(&result(vec![], None), &config);
        assert_eq!(fields.tags, "No tags found");
        assert_eq!(fields.thumbnail, "/static/none.png");
    }

    #[test]
    fn test_fields_join_tags() {
        let fields = DisplayFields::from_result(
            &result(vec!["a", "b"], Some("http://x/y.jpg")),
            &FormConfig::default(),
        );
        assert_eq!(fields.tags, "a, b");
        assert_eq!(fields.thumbnail, "http://x/y.jpg");
    }

    #[test]
    fn test_panels_are_exclusive() {
        let mut view = ViewModel::new();
        assert_eq!(view.visible_panel(), None);

        view.show_error("boom");
        assert_eq!(view.visible_panel(), Some(Panel::Error));
        assert_eq!(view.error_text, "Error: boom");

        view.show_results(DisplayFields::default());
        assert_eq!(view.visible_panel(), Some(Panel::Results));

        view.reset();
        assert_eq!(view.visible_panel(), None);
    }

    #[test]
    fn test_display_renders_error_line() {
        let mut view = ViewModel::new();
        view.show_error("Video not found");
        assert_eq!(view.to_string(), "Error: Video not found");
    }

    #[test]
    fn test_display_renders_results_block() {
        let mut view = ViewModel::new();
        view.show_results(DisplayFields::from_result(
            &result(vec!["a"], None),
            &FormConfig::default(),
        ));
        let rendered = view.to_string();
        assert!(rendered.contains("Title:     T"));
        assert!(rendered.contains("Tags:      a"));
        assert!(rendered.ends_with("Thumbnail: ./placeholder.jpg"));
    }
}
