//! Error types for the editor session.

use thiserror::Error;
use widgetsmith_core::WidgetError;
use widgetsmith_preview::HostError;

use crate::config_file::ImportError;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Widget(#[from] WidgetError),

    #[error("Preview error: {0}")]
    Preview(#[from] HostError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
