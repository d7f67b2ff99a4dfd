//! Exported configuration files and generated downloads.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use widgetsmith_core::Settings;

/// Why an imported configuration was rejected.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Not JSON, or missing `componentId`/`settings`.
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file belongs to another widget.
    #[error("Config is for '{found}', expected '{expected}'")]
    WidgetMismatch { expected: String, found: String },
}

/// On-disk form of a widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub component_id: String,
    pub settings: Settings,
}

impl ConfigFile {
    pub fn new(component_id: impl Into<String>, settings: Settings) -> Self {
        Self {
            component_id: component_id.into(),
            settings,
        }
    }

    /// Parse a config file and check that it belongs to `widget_id`.
    pub fn parse_for(text: &str, widget_id: &str) -> Result<Self, ImportError> {
        let file: ConfigFile = serde_json::from_str(text)?;
        if file.component_id != widget_id {
            return Err(ImportError::WidgetMismatch {
                expected: widget_id.to_string(),
                found: file.component_id,
            });
        }
        Ok(file)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn file_name(&self) -> String {
        format!("{}-config.json", self.component_id)
    }
}

/// A file handed to the user for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportedFile {
    pub fn json(file_name: String, contents: String) -> Self {
        Self {
            file_name,
            mime_type: "application/json",
            contents,
        }
    }

    pub fn html(file_name: String, contents: String) -> Self {
        Self {
            file_name,
            mime_type: "text/html",
            contents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgetsmith_core::SettingValue;

    #[test]
    fn test_pretty_json_layout() {
        let mut settings = Settings::new();
        settings.insert("autoplay".into(), SettingValue::Bool(false));
        settings.insert("arrowSize".into(), SettingValue::from(32));
        let file = ConfigFile::new("stacked-testimonials", settings);

        insta::assert_snapshot!(file.to_json().unwrap(), @r###"
        {
          "componentId": "stacked-testimonials",
          "settings": {
            "autoplay": false,
            "arrowSize": 32
          }
        }
        "###);
        assert_eq!(file.file_name(), "stacked-testimonials-config.json");
    }

    #[test]
    fn test_parse_checks_widget() {
        let text = r#"{"componentId": "circular-testimonials", "settings": {}}"#;
        assert!(ConfigFile::parse_for(text, "circular-testimonials").is_ok());
        assert!(matches!(
            ConfigFile::parse_for(text, "stacked-testimonials"),
            Err(ImportError::WidgetMismatch { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in [
            "not json",
            r#"{"componentId": "stacked-testimonials"}"#,
            r#"{"componentId": "stacked-testimonials", "settings": 3}"#,
            r#"{"settings": {}}"#,
        ] {
            assert!(matches!(
                ConfigFile::parse_for(text, "stacked-testimonials"),
                Err(ImportError::Parse(_))
            ));
        }
    }
}
