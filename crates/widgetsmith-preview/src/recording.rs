//! In-memory host that records what the runtime does to the page.

use std::collections::{HashMap, HashSet};

use widgetsmith_codegen::AUTOPLAY_INTERVAL_KEY;

use crate::host::{HostError, PreviewHost, Result};

/// A fake page.
///
/// Appending a script "runs" it: a script that calls `setInterval(` starts a
/// timer and stores its handle in the interval global, clearing the previous
/// handle first only if the script itself does so. Timers nobody clears stay
/// in [`RecordingHost::active_timers`], which is how leaks show up in tests.
#[derive(Debug)]
pub struct RecordingHost {
    pub styles: Option<String>,
    pub markup: Option<String>,
    /// Script elements currently in the page, in document order.
    pub scripts: Vec<(String, String)>,
    /// Every script that was executed.
    pub executed: Vec<String>,
    /// Library URLs requested, in order.
    pub requested: Vec<String>,
    pub globals: HashSet<String>,
    pub active_timers: HashSet<u64>,
    /// When set, `remove_script` fails as if the node were detached.
    pub fail_removals: bool,
    interval_key: String,
    interval_globals: HashMap<String, u64>,
    next_timer: u64,
}

impl RecordingHost {
    pub fn new(interval_key: impl Into<String>) -> Self {
        Self {
            styles: None,
            markup: None,
            scripts: Vec::new(),
            executed: Vec::new(),
            requested: Vec::new(),
            globals: HashSet::new(),
            active_timers: HashSet::new(),
            fail_removals: false,
            interval_key: interval_key.into(),
            interval_globals: HashMap::new(),
            next_timer: 1,
        }
    }

    /// Simulate a library finishing loading.
    pub fn define_global(&mut self, name: impl Into<String>) {
        self.globals.insert(name.into());
    }

    pub fn script(&self, id: &str) -> Option<&str> {
        self.scripts
            .iter()
            .find(|(sid, _)| sid == id)
            .map(|(_, source)| source.as_str())
    }

    pub fn script_count(&self, id: &str) -> usize {
        self.scripts.iter().filter(|(sid, _)| sid == id).count()
    }

    /// Handle currently stored under the interval global.
    pub fn interval_handle(&self) -> Option<u64> {
        self.interval_globals.get(&self.interval_key).copied()
    }

    fn run(&mut self, source: &str) {
        self.executed.push(source.to_string());
        if !source.contains("setInterval(") {
            return;
        }

        let clears_own = source.contains(&format!("clearInterval(window.{})", self.interval_key));
        if clears_own {
            let key = self.interval_key.clone();
            self.clear_global_interval(&key);
        }

        let handle = self.next_timer;
        self.next_timer += 1;
        self.active_timers.insert(handle);
        self.interval_globals.insert(self.interval_key.clone(), handle);
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new(AUTOPLAY_INTERVAL_KEY)
    }
}

impl PreviewHost for RecordingHost {
    fn inject_styles(&mut self, css: &str) -> Result<()> {
        self.styles = Some(css.to_string());
        Ok(())
    }

    fn inject_markup(&mut self, html: &str) -> Result<()> {
        self.markup = Some(html.to_string());
        Ok(())
    }

    fn has_global(&self, name: &str) -> bool {
        self.globals.contains(name)
    }

    fn request_library(&mut self, url: &str) -> Result<()> {
        self.requested.push(url.to_string());
        Ok(())
    }

    fn append_script(&mut self, id: &str, source: &str) -> Result<()> {
        self.scripts.push((id.to_string(), source.to_string()));
        self.run(source);
        Ok(())
    }

    fn remove_script(&mut self, id: &str) -> Result<()> {
        if self.fail_removals {
            return Err(HostError::Dom(format!("cannot remove #{id}: detached")));
        }
        // Like getElementById, only the first match is removed.
        if let Some(pos) = self.scripts.iter().position(|(sid, _)| sid == id) {
            self.scripts.remove(pos);
        }
        Ok(())
    }

    fn clear_global_interval(&mut self, key: &str) {
        if let Some(handle) = self.interval_globals.remove(key) {
            self.active_timers.remove(&handle);
        }
    }
}
