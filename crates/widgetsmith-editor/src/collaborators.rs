//! Services the editor talks to but does not own: translations, analytics
//! and user notifications.

use std::collections::HashMap;
use std::fmt;

use tracing::{error, info};

/// Looks up user-facing strings.
pub trait Translator {
    /// Resolve `key`, substituting `{{name}}` placeholders from `params`.
    /// Returns `None` when no table has the key.
    fn resolve(&self, key: &str, params: &[(&str, &str)]) -> Option<String>;
}

/// Translator that knows no strings; every label falls back to its key.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn resolve(&self, _key: &str, _params: &[(&str, &str)]) -> Option<String> {
        None
    }
}

/// Translations loaded from flat JSON objects (`{"key": "text"}`).
///
/// Lookups try the active language first, then the English table.
#[derive(Debug, Default, Clone)]
pub struct StaticTranslations {
    table: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl StaticTranslations {
    pub fn new(table: HashMap<String, String>) -> Self {
        Self {
            table,
            fallback: HashMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Use `fallback` for keys the active table lacks.
    pub fn with_fallback(mut self, fallback: HashMap<String, String>) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Translator for StaticTranslations {
    fn resolve<'s>(&'s self, key: &str, params: &[(&str, &str)]) -> Option<String> {
        let lookup = |table: &'s HashMap<String, String>| table.get(key).filter(|t| !t.is_empty());
        let template = lookup(&self.table).or_else(|| lookup(&self.fallback))?;
        Some(interpolate(template, params))
    }
}

/// Replace the first `{{name}}` for each parameter.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut text = template.to_string();
    for (name, value) in params {
        text = text.replacen(&format!("{{{{{name}}}}}"), value, 1);
    }
    text
}

/// Events the editor reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyticsEvent {
    SelectComponent,
    LanguageChange,
    ExportCode,
    ExportConfig,
    ImportConfig,
}

impl AnalyticsEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelectComponent => "select_component",
            Self::LanguageChange => "language_change",
            Self::ExportCode => "export_code",
            Self::ExportConfig => "export_config",
            Self::ImportConfig => "import_config",
        }
    }
}

impl fmt::Display for AnalyticsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives analytics events. Delivery is fire-and-forget.
pub trait AnalyticsSink {
    fn emit(&self, event: AnalyticsEvent, params: &[(&str, &str)]);
}

/// Sink that writes events to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn emit(&self, event: AnalyticsEvent, params: &[(&str, &str)]) {
        info!(event = event.as_str(), ?params, "analytics event");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Shows transient messages to the user.
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str);
}

/// Notifier that writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        match kind {
            NotificationKind::Success => info!(title, message, "notification"),
            NotificationKind::Error => error!(title, message, "notification"),
        }
    }
}

/// The collaborators an editor session is wired to.
pub struct Collaborators {
    pub translator: Box<dyn Translator>,
    pub analytics: Box<dyn AnalyticsSink>,
    pub notifier: Box<dyn Notifier>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            translator: Box::new(NoTranslations),
            analytics: Box::new(TracingAnalytics),
            notifier: Box::new(TracingNotifier),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording collaborators whose output tests can inspect after the
    //! session has taken ownership of them.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    pub type Recorded<T> = Rc<RefCell<Vec<T>>>;

    #[derive(Clone, Default)]
    pub struct RecordingAnalytics(pub Recorded<(AnalyticsEvent, Vec<(String, String)>)>);

    impl AnalyticsSink for RecordingAnalytics {
        fn emit(&self, event: AnalyticsEvent, params: &[(&str, &str)]) {
            let params = params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            self.0.borrow_mut().push((event, params));
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingNotifier(pub Recorded<(NotificationKind, String, String)>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
            self.0
                .borrow_mut()
                .push((kind, title.to_string(), message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_first_occurrence() {
        assert_eq!(interpolate("Quote {{n}}", &[("n", "2")]), "Quote 2");
        assert_eq!(interpolate("{{n}} and {{n}}", &[("n", "1")]), "1 and {{n}}");
        assert_eq!(interpolate("No params", &[("n", "1")]), "No params");
    }

    #[test]
    fn test_static_translations_fallback() {
        let he = StaticTranslations::from_json(r#"{"field_autoplay": "הפעלה אוטומטית"}"#).unwrap();
        let en: HashMap<String, String> =
            serde_json::from_str(r#"{"field_autoplay": "Autoplay", "field_arrow_size": "Arrow Size"}"#)
                .unwrap();
        let t = he.with_fallback(en);

        assert_eq!(t.resolve("field_autoplay", &[]).as_deref(), Some("הפעלה אוטומטית"));
        assert_eq!(t.resolve("field_arrow_size", &[]).as_deref(), Some("Arrow Size"));
        assert_eq!(t.resolve("missing", &[]), None);
    }

    #[test]
    fn test_empty_translation_is_missing() {
        let t = StaticTranslations::from_json(r#"{"credit": ""}"#).unwrap();
        assert_eq!(t.resolve("credit", &[]), None);
    }

    #[test]
    fn test_empty_translation_uses_fallback() {
        let en: HashMap<String, String> =
            serde_json::from_str(r#"{"import_config": "Import Config"}"#).unwrap();
        let t = StaticTranslations::from_json(r#"{"import_config": ""}"#)
            .unwrap()
            .with_fallback(en);
        assert_eq!(t.resolve("import_config", &[]).as_deref(), Some("Import Config"));
    }

    #[test]
    fn test_event_names() {
        assert_eq!(AnalyticsEvent::ImportConfig.to_string(), "import_config");
        assert_eq!(AnalyticsEvent::ExportCode.as_str(), "export_code");
    }
}
