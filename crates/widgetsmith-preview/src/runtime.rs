//! Mount, remount and teardown of the live preview.

use std::collections::HashSet;

use tracing::{debug, warn};
use widgetsmith_codegen::{Bundle, ScriptLibrary};

use crate::host::{PreviewHost, Result};
use crate::session::{PreviewOptions, PreviewSession, SessionState};

/// Owns the host and at most one live [`PreviewSession`].
///
/// Every [`mount`](Self::mount) stops the previous session before the next
/// one injects anything, so at most one script node and one autoplay
/// interval exist at a time.
pub struct PreviewRuntime<H: PreviewHost> {
    host: H,
    options: PreviewOptions,
    /// Libraries known to be loaded, by URL.
    loaded: HashSet<String>,
    /// Libraries requested but not loaded yet, by URL.
    pending: HashSet<String>,
    session: Option<PreviewSession>,
    mounts: u64,
}

impl<H: PreviewHost> PreviewRuntime<H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, PreviewOptions::default())
    }

    pub fn with_options(host: H, options: PreviewOptions) -> Self {
        Self {
            host,
            options,
            loaded: HashSet::new(),
            pending: HashSet::new(),
            session: None,
            mounts: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    pub fn session(&self) -> Option<&PreviewSession> {
        self.session.as_ref()
    }

    /// State of the current session, if one is mounted.
    pub fn state(&self) -> Option<SessionState> {
        self.session.as_ref().map(PreviewSession::state)
    }

    /// Whether the library at `url` has finished loading.
    pub fn is_library_loaded(&self, url: &str) -> bool {
        self.loaded.contains(url)
    }

    /// Tear down the current session and start one for `bundle`.
    pub fn mount(&mut self, bundle: Bundle) -> Result<SessionState> {
        self.unmount()?;

        self.mounts += 1;
        let ready = match &bundle.library {
            Some(library) => self.ensure_library(library)?,
            None => true,
        };

        let mut session = PreviewSession::new(self.mounts, bundle);
        let started = session.start(&mut self.host, &self.options, ready);
        // Keep the session even if the host failed partway so unmount can clean up.
        self.session = Some(session);
        let state = started?;
        debug!(session = self.mounts, ?state, "mounted");
        Ok(state)
    }

    /// Stop and drop the current session. Idempotent.
    ///
    /// If the host fails, the session is kept so a later call can retry.
    pub fn unmount(&mut self) -> Result<()> {
        if let Some(mut session) = self.session.take() {
            if let Err(err) = session.stop(&mut self.host, &self.options) {
                self.session = Some(session);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Report that the library at `url` finished loading.
    ///
    /// The flag flips even when no session is waiting any more. A session
    /// that is waiting for this library runs now; a stopped one never does.
    pub fn library_loaded(&mut self, url: &str) -> Result<()> {
        self.pending.remove(url);
        self.loaded.insert(url.to_string());

        let Some(session) = self.session.as_mut() else {
            debug!(url, "library loaded with no session mounted");
            return Ok(());
        };

        let waiting_for_url = session.state() == SessionState::AwaitingLibrary
            && session.bundle().library.as_ref().is_some_and(|l| l.url == url);
        if waiting_for_url {
            session.execute(&mut self.host, &self.options)?;
        } else {
            debug!(url, session = session.id(), "library load did not match the waiting session");
        }
        Ok(())
    }

    /// Returns whether the library is usable now; requests it otherwise.
    fn ensure_library(&mut self, library: &ScriptLibrary) -> Result<bool> {
        if self.loaded.contains(&library.url) || self.host.has_global(&library.global) {
            self.loaded.insert(library.url.clone());
            return Ok(true);
        }
        if self.pending.insert(library.url.clone()) {
            debug!(url = %library.url, "requesting library");
            self.host.request_library(&library.url)?;
        }
        Ok(false)
    }
}

impl<H: PreviewHost> Drop for PreviewRuntime<H> {
    fn drop(&mut self) {
        if let Err(err) = self.unmount() {
            warn!(error = %err, "preview teardown failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostError;
    use crate::recording::RecordingHost;
    use crate::session::PREVIEW_SCRIPT_ID;
    use widgetsmith_codegen::{GeneratorRegistry, GSAP_URL};
    use widgetsmith_core::{find_widget, CIRCULAR_TESTIMONIALS, STACKED_TESTIMONIALS};

    fn default_bundle(id: &str) -> Bundle {
        let widget = find_widget(id).unwrap();
        GeneratorRegistry::new().generate(id, &widget.default_settings())
    }

    #[test]
    fn test_remount_leaves_one_script_and_one_interval() {
        let mut runtime = PreviewRuntime::new(RecordingHost::default());
        runtime.mount(default_bundle(STACKED_TESTIMONIALS)).unwrap();
        runtime.mount(default_bundle(STACKED_TESTIMONIALS)).unwrap();

        let host = runtime.host();
        assert_eq!(host.script_count(PREVIEW_SCRIPT_ID), 1);
        assert_eq!(host.active_timers.len(), 1);
        assert_eq!(host.executed.len(), 2);
    }

    #[test]
    fn test_unmount_clears_everything() {
        let mut runtime = PreviewRuntime::new(RecordingHost::default());
        runtime.mount(default_bundle(STACKED_TESTIMONIALS)).unwrap();
        runtime.unmount().unwrap();
        runtime.unmount().unwrap();

        assert!(runtime.state().is_none());
        assert_eq!(runtime.host().script_count(PREVIEW_SCRIPT_ID), 0);
        assert!(runtime.host().active_timers.is_empty());
    }

    #[test]
    fn test_failed_teardown_keeps_session_and_clears_interval() {
        let mut runtime = PreviewRuntime::new(RecordingHost::default());
        runtime.mount(default_bundle(STACKED_TESTIMONIALS)).unwrap();
        assert_eq!(runtime.host().active_timers.len(), 1);

        runtime.host_mut().fail_removals = true;
        assert!(matches!(runtime.unmount(), Err(HostError::Dom(_))));
        assert!(runtime.host().active_timers.is_empty());
        assert!(runtime.session().is_some());

        runtime.host_mut().fail_removals = false;
        runtime.unmount().unwrap();
        assert!(runtime.session().is_none());
        assert_eq!(runtime.host().script_count(PREVIEW_SCRIPT_ID), 0);
    }

    #[test]
    fn test_library_requested_once_then_runs() {
        let mut runtime = PreviewRuntime::new(RecordingHost::default());
        let bundle = default_bundle(CIRCULAR_TESTIMONIALS);

        assert_eq!(runtime.mount(bundle.clone()).unwrap(), SessionState::AwaitingLibrary);
        assert_eq!(runtime.mount(bundle.clone()).unwrap(), SessionState::AwaitingLibrary);
        assert_eq!(runtime.host().requested, vec![GSAP_URL.to_string()]);
        assert_eq!(runtime.host().script_count(PREVIEW_SCRIPT_ID), 0);

        runtime.host_mut().define_global("gsap");
        runtime.library_loaded(GSAP_URL).unwrap();
        assert_eq!(runtime.state(), Some(SessionState::Running));
        assert_eq!(runtime.host().script_count(PREVIEW_SCRIPT_ID), 1);

        // Already present: the next mount runs straight away.
        assert_eq!(runtime.mount(bundle).unwrap(), SessionState::Running);
        assert_eq!(runtime.host().requested.len(), 1);
    }

    #[test]
    fn test_stale_library_load_flips_flag_only() {
        let mut runtime = PreviewRuntime::new(RecordingHost::default());
        runtime.mount(default_bundle(CIRCULAR_TESTIMONIALS)).unwrap();
        runtime.unmount().unwrap();

        runtime.library_loaded(GSAP_URL).unwrap();
        assert!(runtime.is_library_loaded(GSAP_URL));
        assert!(runtime.host().executed.is_empty());
    }

    #[test]
    fn test_global_already_present_skips_request() {
        let mut host = RecordingHost::default();
        host.define_global("gsap");
        let mut runtime = PreviewRuntime::new(host);

        assert_eq!(
            runtime.mount(default_bundle(CIRCULAR_TESTIMONIALS)).unwrap(),
            SessionState::Running
        );
        assert!(runtime.host().requested.is_empty());
    }

    #[test]
    fn test_placeholder_mounts_without_script() {
        let mut runtime = PreviewRuntime::new(RecordingHost::default());
        assert_eq!(runtime.mount(Bundle::placeholder()).unwrap(), SessionState::Running);
        assert!(runtime.host().executed.is_empty());
    }
}
