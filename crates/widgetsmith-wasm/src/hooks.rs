//! Editor collaborators supplied from JavaScript.

use std::collections::HashMap;

use js_sys::{Function, Object, Reflect};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use widgetsmith_editor::{
    AnalyticsEvent, AnalyticsSink, Collaborators, NotificationKind, Notifier, StaticTranslations,
};

/// Options object passed to `new WidgetEditor(...)`.
///
/// ```js
/// {
///   translations: { "field_arrow_size": "Arrow size" },
///   fallbackTranslations: { ... },
///   onNotify: (kind, title, message) => {},
///   onEvent: (name, params) => {},
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationTables {
    pub translations: HashMap<String, String>,
    pub fallback_translations: HashMap<String, String>,
}

impl TranslationTables {
    pub fn into_translator(self) -> StaticTranslations {
        StaticTranslations::new(self.translations).with_fallback(self.fallback_translations)
    }
}

/// Calls `onEvent(name, params)`.
pub struct JsAnalytics(Function);

impl AnalyticsSink for JsAnalytics {
    fn emit(&self, event: AnalyticsEvent, params: &[(&str, &str)]) {
        let object = Object::new();
        for (key, value) in params {
            let _ = Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_str(value));
        }
        let _ = self
            .0
            .call2(&JsValue::NULL, &JsValue::from_str(event.as_str()), &object);
    }
}

/// Calls `onNotify(kind, title, message)` with `kind` either `"success"` or `"error"`.
pub struct JsNotifier(Function);

impl Notifier for JsNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        let kind = match kind {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        };
        let _ = self.0.call3(
            &JsValue::NULL,
            &JsValue::from_str(kind),
            &JsValue::from_str(title),
            &JsValue::from_str(message),
        );
    }
}

fn callback(options: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(options, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Build collaborators from the options object. Missing entries keep the
/// logging defaults.
pub fn collaborators(options: &JsValue) -> Result<Collaborators, JsError> {
    let mut collaborators = Collaborators::default();
    if options.is_undefined() || options.is_null() {
        return Ok(collaborators);
    }

    let tables: TranslationTables = serde_wasm_bindgen::from_value(options.clone())
        .map_err(|e| JsError::new(&format!("Invalid editor options: {e}")))?;
    collaborators.translator = Box::new(tables.into_translator());

    if let Some(on_event) = callback(options, "onEvent") {
        collaborators.analytics = Box::new(JsAnalytics(on_event));
    }
    if let Some(on_notify) = callback(options, "onNotify") {
        collaborators.notifier = Box::new(JsNotifier(on_notify));
    }
    Ok(collaborators)
}
