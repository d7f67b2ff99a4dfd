//! The page a preview is mounted into.

use thiserror::Error;

/// Result type alias for host operations.
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors reported by a [`PreviewHost`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The element the preview renders into is missing.
    #[error("Preview container not found: {0}")]
    ContainerNotFound(String),

    /// A DOM call failed.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// DOM operations the preview runtime needs.
///
/// A browser implementation talks to `document`; tests use an in-memory
/// recorder. Methods are called from a single thread, in the order the
/// runtime issues them.
pub trait PreviewHost {
    /// Replace the preview stylesheet.
    fn inject_styles(&mut self, css: &str) -> Result<()>;

    /// Replace the preview markup.
    fn inject_markup(&mut self, html: &str) -> Result<()>;

    /// Whether `name` is defined on the page's global object.
    fn has_global(&self, name: &str) -> bool;

    /// Start loading an external script. Completion is reported back through
    /// [`PreviewRuntime::library_loaded`](crate::PreviewRuntime::library_loaded).
    fn request_library(&mut self, url: &str) -> Result<()>;

    /// Append an inline script element with the given id; it runs immediately.
    fn append_script(&mut self, id: &str, source: &str) -> Result<()>;

    /// Remove the script element with the given id, if present.
    fn remove_script(&mut self, id: &str) -> Result<()>;

    /// Clear the interval whose handle is stored in the global `key`.
    fn clear_global_interval(&mut self, key: &str);
}
