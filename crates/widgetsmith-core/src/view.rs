//! Typed reads over a settings map with descriptor defaults as fallback.

use crate::catalog::WidgetConfig;
use crate::types::{SettingValue, Settings, Testimonial};

/// Read-only view of a widget's settings.
///
/// Every accessor falls back to the field descriptor's default when the key
/// is missing or holds a value of another type, so a generator reading
/// through a view never fails on a conforming map.
#[derive(Debug, Clone, Copy)]
pub struct SettingsView<'a> {
    settings: &'a Settings,
    widget: &'a WidgetConfig,
}

impl<'a> SettingsView<'a> {
    pub fn new(settings: &'a Settings, widget: &'a WidgetConfig) -> Self {
        Self { settings, widget }
    }

    pub fn widget(&self) -> &'a WidgetConfig {
        self.widget
    }

    fn lookup<T>(&self, id: &str, pick: impl Fn(&'a SettingValue) -> Option<T>) -> Option<T> {
        self.settings
            .get(id)
            .and_then(&pick)
            .or_else(|| self.widget.field(id).and_then(|f| pick(&f.default)))
    }

    pub fn text(&self, id: &str) -> &'a str {
        self.lookup(id, SettingValue::as_str).unwrap_or("")
    }

    pub fn number(&self, id: &str) -> f64 {
        self.lookup(id, SettingValue::as_f64).unwrap_or(0.0)
    }

    pub fn flag(&self, id: &str) -> bool {
        self.lookup(id, SettingValue::as_bool).unwrap_or(false)
    }

    pub fn testimonials(&self, id: &str) -> &'a [Testimonial] {
        self.lookup(id, SettingValue::as_testimonials).unwrap_or(&[])
    }
}
