//! Live preview runtime.
//!
//! Mounts a generated [`Bundle`](widgetsmith_codegen::Bundle) into a page
//! through the [`PreviewHost`] seam: styles, then markup, then the behavior
//! script once any animation library it needs has loaded. Remounting always
//! tears the previous session down first.

pub mod host;
pub mod runtime;
pub mod session;

#[cfg(any(test, feature = "test-util"))]
pub mod recording;

pub use host::{HostError, PreviewHost, Result};
pub use runtime::PreviewRuntime;
pub use session::{wrap_script, PreviewOptions, PreviewSession, SessionState, PREVIEW_SCRIPT_ID};

#[cfg(any(test, feature = "test-util"))]
pub use recording::RecordingHost;
