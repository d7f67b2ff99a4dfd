//! One mount of one bundle.

use serde::{Deserialize, Serialize};
use tracing::debug;
use widgetsmith_codegen::{Bundle, AUTOPLAY_INTERVAL_KEY};

use crate::host::{PreviewHost, Result};

/// Id of the single inline script node a preview owns.
pub const PREVIEW_SCRIPT_ID: &str = "component-preview-script";

/// Names the runtime uses on the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    /// Id of the inline script element.
    pub script_id: String,
    /// Global holding the generated script's autoplay interval.
    pub interval_key: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            script_id: PREVIEW_SCRIPT_ID.to_string(),
            interval_key: AUTOPLAY_INTERVAL_KEY.to_string(),
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, nothing injected yet.
    Idle,
    /// Styles and markup injected, waiting for the animation library.
    AwaitingLibrary,
    /// Script appended (or there was none to run).
    Running,
    /// Torn down. Terminal.
    Stopped,
}

/// Wrap a behavior script so its declarations stay out of the page scope.
pub fn wrap_script(source: &str) -> String {
    format!("(function() {{ {source} }})();")
}

/// A bundle mounted into a host.
#[derive(Debug)]
pub struct PreviewSession {
    id: u64,
    bundle: Bundle,
    state: SessionState,
}

impl PreviewSession {
    pub fn new(id: u64, bundle: Bundle) -> Self {
        Self {
            id,
            bundle,
            state: SessionState::Idle,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Inject styles then markup. Runs the script right away when
    /// `library_ready`, otherwise parks in [`SessionState::AwaitingLibrary`].
    pub fn start<H: PreviewHost>(
        &mut self,
        host: &mut H,
        options: &PreviewOptions,
        library_ready: bool,
    ) -> Result<SessionState> {
        if self.state != SessionState::Idle {
            return Ok(self.state);
        }

        host.inject_styles(&self.bundle.stylesheet)?;
        host.inject_markup(&self.bundle.markup)?;

        if self.bundle.behavior_script.is_empty() {
            self.state = SessionState::Running;
        } else if library_ready {
            self.execute(host, options)?;
        } else {
            debug!(session = self.id, "waiting for animation library");
            self.state = SessionState::AwaitingLibrary;
        }
        Ok(self.state)
    }

    /// Run the behavior script. Only an idle or waiting session executes;
    /// a stopped session never runs again.
    pub fn execute<H: PreviewHost>(&mut self, host: &mut H, options: &PreviewOptions) -> Result<()> {
        if !matches!(self.state, SessionState::Idle | SessionState::AwaitingLibrary) {
            return Ok(());
        }

        host.clear_global_interval(&options.interval_key);
        host.remove_script(&options.script_id)?;
        host.append_script(&options.script_id, &wrap_script(&self.bundle.behavior_script))?;
        self.state = SessionState::Running;
        debug!(session = self.id, "script executed");
        Ok(())
    }

    /// Clear the autoplay interval and remove the script node. Idempotent.
    ///
    /// The interval is cleared before the node is touched, so a failed
    /// removal never leaves a timer running.
    pub fn stop<H: PreviewHost>(&mut self, host: &mut H, options: &PreviewOptions) -> Result<()> {
        if self.state == SessionState::Stopped {
            return Ok(());
        }

        host.clear_global_interval(&options.interval_key);
        host.remove_script(&options.script_id)?;
        self.state = SessionState::Stopped;
        debug!(session = self.id, "stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingHost;

    fn bundle(script: &str) -> Bundle {
        Bundle {
            markup: "<div id=\"w\"></div>".into(),
            stylesheet: ".w {}".into(),
            behavior_script: script.into(),
            ..Bundle::default()
        }
    }

    #[test]
    fn test_wrap_script() {
        assert_eq!(wrap_script("run();"), "(function() { run(); })();");
    }

    #[test]
    fn test_start_injects_then_runs() {
        let mut host = RecordingHost::default();
        let options = PreviewOptions::default();
        let mut session = PreviewSession::new(1, bundle("run();"));

        assert_eq!(session.start(&mut host, &options, true).unwrap(), SessionState::Running);
        assert_eq!(host.styles.as_deref(), Some(".w {}"));
        assert_eq!(host.markup.as_deref(), Some("<div id=\"w\"></div>"));
        assert_eq!(host.script(PREVIEW_SCRIPT_ID), Some("(function() { run(); })();"));
    }

    #[test]
    fn test_waits_for_library() {
        let mut host = RecordingHost::default();
        let options = PreviewOptions::default();
        let mut session = PreviewSession::new(1, bundle("run();"));

        assert_eq!(
            session.start(&mut host, &options, false).unwrap(),
            SessionState::AwaitingLibrary
        );
        assert_eq!(host.script_count(PREVIEW_SCRIPT_ID), 0);

        session.execute(&mut host, &options).unwrap();
        assert_eq!(host.script_count(PREVIEW_SCRIPT_ID), 1);
    }

    #[test]
    fn test_stopped_session_never_executes() {
        let mut host = RecordingHost::default();
        let options = PreviewOptions::default();
        let mut session = PreviewSession::new(1, bundle("run();"));

        session.start(&mut host, &options, false).unwrap();
        session.stop(&mut host, &options).unwrap();
        session.execute(&mut host, &options).unwrap();

        assert_eq!(session.state(), SessionState::Stopped);
        assert_eq!(host.script_count(PREVIEW_SCRIPT_ID), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut host = RecordingHost::default();
        let options = PreviewOptions::default();
        let mut session = PreviewSession::new(1, bundle("run();"));

        session.start(&mut host, &options, true).unwrap();
        session.stop(&mut host, &options).unwrap();
        session.stop(&mut host, &options).unwrap();
        assert_eq!(host.script_count(PREVIEW_SCRIPT_ID), 0);
    }

    #[test]
    fn test_empty_script_appends_nothing() {
        let mut host = RecordingHost::default();
        let mut session = PreviewSession::new(1, Bundle::placeholder());

        session.start(&mut host, &PreviewOptions::default(), true).unwrap();
        assert_eq!(host.markup.as_deref(), Some("<div>Component not found</div>"));
        assert_eq!(host.script_count(PREVIEW_SCRIPT_ID), 0);
    }
}
