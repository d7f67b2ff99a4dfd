//! Generated output for one widget and settings combination.

use serde::{Deserialize, Serialize};

/// Global the generated scripts store their autoplay interval handle under.
pub const AUTOPLAY_INTERVAL_KEY: &str = "autoplayInterval";

/// Animation library the circular widget animates through.
pub const GSAP_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.5/gsap.min.js";

/// Markup shown when a widget id has no generator.
pub const NOT_FOUND_MARKUP: &str = "<div>Component not found</div>";

/// An external script the behavior script depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptLibrary {
    /// Global the library defines once loaded (e.g. `gsap`).
    pub global: String,
    /// Where to load it from.
    pub url: String,
}

impl ScriptLibrary {
    pub fn gsap(url: impl Into<String>) -> Self {
        Self {
            global: "gsap".to_string(),
            url: url.into(),
        }
    }
}

/// Markup, stylesheet, behavior script and standalone document.
///
/// A pure function of the widget type and its full settings map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub markup: String,
    pub stylesheet: String,
    pub behavior_script: String,
    pub standalone_document: String,
    /// Library the behavior script needs in scope before it runs.
    pub library: Option<ScriptLibrary>,
}

impl Bundle {
    /// Placeholder for an unknown widget: a marker in the markup, nothing else.
    pub fn placeholder() -> Self {
        Self {
            markup: NOT_FOUND_MARKUP.to_string(),
            ..Self::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.markup == NOT_FOUND_MARKUP && self.behavior_script.is_empty()
    }
}

/// Options shared by all generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// URL of the animation library referenced by widgets that need one.
    pub animation_library_url: String,
    /// Autoplay period of the generated carousels.
    pub autoplay_period_ms: u64,
    /// Delay between successive words of the quote reveal.
    pub word_stagger_ms: u64,
    /// Global holding the autoplay interval handle.
    pub interval_key: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            animation_library_url: GSAP_URL.to_string(),
            autoplay_period_ms: crate::carousel::AUTOPLAY_PERIOD_MS,
            word_stagger_ms: crate::carousel::WORD_STAGGER_MS,
            interval_key: AUTOPLAY_INTERVAL_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        let bundle = Bundle::placeholder();
        assert!(bundle.is_placeholder());
        assert!(bundle.stylesheet.is_empty());
        assert!(bundle.standalone_document.is_empty());
        assert!(bundle.library.is_none());
    }

    #[test]
    fn test_options_fill_missing_fields() {
        let options: GeneratorOptions =
            serde_json::from_str(r#"{"autoplay_period_ms": 3000}"#).unwrap();
        assert_eq!(options.autoplay_period_ms, 3000);
        assert_eq!(options.animation_library_url, GSAP_URL);
        assert_eq!(options.interval_key, AUTOPLAY_INTERVAL_KEY);
    }
}
