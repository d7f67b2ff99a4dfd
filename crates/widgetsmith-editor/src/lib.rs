//! Editor session for widgetsmith widgets.
//!
//! An [`EditorSession`] owns one widget's settings, regenerates its bundle on
//! every change and keeps a live preview mounted through a
//! [`PreviewHost`](widgetsmith_preview::PreviewHost). Configurations round-trip
//! through JSON files; the generated document exports as HTML.

pub mod collaborators;
pub mod config_file;
pub mod error;
pub mod labels;
pub mod shell;
pub mod testimonials;

pub use collaborators::{
    AnalyticsEvent, AnalyticsSink, Collaborators, NoTranslations, NotificationKind, Notifier,
    StaticTranslations, TracingAnalytics, TracingNotifier, Translator,
};
pub use config_file::{ConfigFile, ExportedFile, ImportError};
pub use error::{EditorError, Result};
pub use shell::EditorSession;
