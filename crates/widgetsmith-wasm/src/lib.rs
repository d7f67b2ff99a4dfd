//! WebAssembly bindings for the widgetsmith editor.
//!
//! ## Example
//!
//! ```js
//! import { WidgetEditor, parseBackground } from 'widgetsmith';
//!
//! const editor = new WidgetEditor('stacked-testimonials', 'preview', {
//!   translations: await (await fetch('/locales/en.json')).json(),
//!   onNotify: (kind, title, message) => toast[kind](title, message),
//! });
//!
//! editor.setNumber('arrowSize', 48);
//! editor.setText('backgroundColor', 'linear-gradient(90deg, #111 0%, #333 100%)');
//!
//! const { fileName, contents } = editor.exportCode();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use widgetsmith_codegen::GeneratorRegistry;
use widgetsmith_core::{
    find_widget, parse_background, serialize_gradient, widgets, Background, GradientState,
    Settings, TestimonialField,
};
use widgetsmith_editor::EditorSession;

mod dom;
mod hooks;

pub use dom::{DomHost, LoadHandler, LoadSlot, PREVIEW_STYLE_ID};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

/// Plain objects instead of `Map`s, so results read naturally in JS.
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
enum BackgroundJs {
    Solid { color: String },
    Gradient(GradientState),
}

impl From<Background> for BackgroundJs {
    fn from(background: Background) -> Self {
        match background {
            Background::Solid(color) => Self::Solid { color },
            Background::Gradient(state) => Self::Gradient(state),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldJs {
    id: String,
    label: String,
    value_type: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetJs {
    id: &'static str,
    icon: &'static str,
    name_key: &'static str,
}

fn testimonial_field(name: &str) -> Result<TestimonialField, JsError> {
    TestimonialField::ALL
        .into_iter()
        .find(|f| f.as_str() == name)
        .ok_or_else(|| JsError::new(&format!("Unknown testimonial field: {name}")))
}

/// An editor bound to a preview container on the page.
#[wasm_bindgen]
pub struct WidgetEditor {
    session: Rc<RefCell<EditorSession<DomHost>>>,
}

#[wasm_bindgen]
impl WidgetEditor {
    /// Open `widget_id` and render its preview into the element `container_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(widget_id: &str, container_id: &str, options: JsValue) -> Result<WidgetEditor, JsError> {
        let collaborators = hooks::collaborators(&options)?;
        let slot = LoadSlot::default();
        let host = DomHost::new(container_id, Rc::clone(&slot)).map_err(js_error)?;
        let session = EditorSession::open(widget_id, host, collaborators).map_err(js_error)?;
        let session = Rc::new(RefCell::new(session));

        let weak = Rc::downgrade(&session);
        let handler: LoadHandler = Rc::new(move |url: String| {
            let Some(shared) = weak.upgrade() else { return };
            let Ok(mut session) = shared.try_borrow_mut() else {
                web_sys::console::warn_1(&format!("Editor busy; dropped load of {url}").into());
                return;
            };
            if let Err(err) = session.preview_mut().library_loaded(&url) {
                web_sys::console::error_1(&err.to_string().into());
            }
        });
        *slot.borrow_mut() = Some(handler);

        Ok(Self { session })
    }

    #[wasm_bindgen(getter, js_name = widgetId)]
    pub fn widget_id(&self) -> String {
        self.session.borrow().widget().id.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.session.borrow().widget_name()
    }

    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.session.borrow().language().to_string()
    }

    pub fn settings(&self) -> Result<JsValue, JsError> {
        to_js(self.session.borrow().settings())
    }

    /// Field ids with their translated labels and value types.
    pub fn fields(&self) -> Result<JsValue, JsError> {
        let session = self.session.borrow();
        let fields: Vec<FieldJs> = session
            .widget()
            .fields
            .iter()
            .map(|field| FieldJs {
                id: field.id.clone(),
                label: session.field_label(field),
                value_type: field.kind.value_type(),
            })
            .collect();
        to_js(&fields)
    }

    pub fn credits(&self) -> Result<JsValue, JsError> {
        to_js(self.session.borrow().credits())
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&self, field_id: &str, value: String) -> Result<(), JsError> {
        self.session.borrow_mut().set_field(field_id, value).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setNumber)]
    pub fn set_number(&self, field_id: &str, value: f64) -> Result<(), JsError> {
        self.session.borrow_mut().set_field(field_id, value).map_err(js_error)
    }

    #[wasm_bindgen(js_name = setBool)]
    pub fn set_bool(&self, field_id: &str, value: bool) -> Result<(), JsError> {
        self.session.borrow_mut().set_field(field_id, value).map_err(js_error)
    }

    /// The parsed value of a background field.
    pub fn background(&self, field_id: &str) -> Result<JsValue, JsError> {
        let background = self.session.borrow().background(field_id).map_err(js_error)?;
        to_js(&BackgroundJs::from(background))
    }

    /// Store a gradient built in the gradient editor.
    #[wasm_bindgen(js_name = setGradient)]
    pub fn set_gradient(&self, field_id: &str, state: JsValue) -> Result<(), JsError> {
        let state: GradientState = serde_wasm_bindgen::from_value(state)
            .map_err(|e| JsError::new(&format!("Invalid gradient: {e}")))?;
        self.session
            .borrow_mut()
            .set_background(field_id, &Background::Gradient(state))
            .map_err(js_error)
    }

    pub fn testimonials(&self) -> Result<JsValue, JsError> {
        to_js(self.session.borrow().testimonials())
    }

    /// Append a placeholder testimonial; returns its id.
    #[wasm_bindgen(js_name = addTestimonial)]
    pub fn add_testimonial(&self) -> Result<String, JsError> {
        self.session.borrow_mut().add_testimonial().map_err(js_error)
    }

    /// Returns whether anything was removed.
    #[wasm_bindgen(js_name = removeLastTestimonial)]
    pub fn remove_last_testimonial(&self) -> Result<bool, JsError> {
        let removed = self.session.borrow_mut().remove_last_testimonial().map_err(js_error)?;
        Ok(removed.is_some())
    }

    /// `field` is one of `quote`, `name`, `designation` or `image`.
    #[wasm_bindgen(js_name = updateTestimonial)]
    pub fn update_testimonial(&self, id: &str, field: &str, value: &str) -> Result<bool, JsError> {
        let field = testimonial_field(field)?;
        self.session
            .borrow_mut()
            .update_testimonial(id, field, value)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = testimonialLabel)]
    pub fn testimonial_label(&self, index: usize, field: &str) -> Result<String, JsError> {
        let field = testimonial_field(field)?;
        Ok(self.session.borrow().testimonial_label(index, field))
    }

    /// Switch language, optionally with the string tables for it.
    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&self, language: String, translations: JsValue) -> Result<(), JsError> {
        let mut session = self.session.borrow_mut();
        if !translations.is_undefined() && !translations.is_null() {
            let tables: hooks::TranslationTables = serde_wasm_bindgen::from_value(translations)
                .map_err(|e| JsError::new(&format!("Invalid translations: {e}")))?;
            session.set_translator(Box::new(tables.into_translator()));
        }
        session.set_language(language).map_err(js_error)
    }

    /// `{ fileName, mimeType, contents }` for the settings JSON.
    #[wasm_bindgen(js_name = exportConfig)]
    pub fn export_config(&self) -> Result<JsValue, JsError> {
        let file = self.session.borrow().export_config().map_err(js_error)?;
        to_js(&file)
    }

    /// Replace the settings with an exported config file's contents.
    #[wasm_bindgen(js_name = importConfig)]
    pub fn import_config(&self, text: &str) -> Result<(), JsError> {
        self.session.borrow_mut().import_config(text).map_err(js_error)
    }

    /// `{ fileName, mimeType, contents }` for the standalone HTML document.
    #[wasm_bindgen(js_name = exportCode)]
    pub fn export_code(&self) -> Result<JsValue, JsError> {
        to_js(&self.session.borrow().export_code())
    }

    pub fn reload(&self) -> Result<(), JsError> {
        self.session.borrow_mut().reload_preview().map_err(js_error)
    }

    pub fn unmount(&self) -> Result<(), JsError> {
        self.session.borrow_mut().unmount().map_err(js_error)
    }
}

/// All widgets, in display order.
#[wasm_bindgen(js_name = listWidgets)]
pub fn list_widgets() -> Result<JsValue, JsError> {
    let list: Vec<WidgetJs> = widgets()
        .iter()
        .map(|w| WidgetJs {
            id: w.id,
            icon: w.icon().as_str(),
            name_key: w.name_key,
        })
        .collect();
    to_js(&list)
}

/// Default settings for a widget.
#[wasm_bindgen(js_name = defaultSettings)]
pub fn default_settings(widget_id: &str) -> Result<JsValue, JsError> {
    let widget =
        find_widget(widget_id).ok_or_else(|| JsError::new(&format!("Unknown widget: {widget_id}")))?;
    to_js(&widget.default_settings())
}

/// Generate a bundle without mounting it. Unknown widgets yield the
/// "not found" placeholder.
#[wasm_bindgen(js_name = generateBundle)]
pub fn generate_bundle(widget_id: &str, settings: JsValue) -> Result<JsValue, JsError> {
    let settings: Settings = serde_wasm_bindgen::from_value(settings)
        .map_err(|e| JsError::new(&format!("Invalid settings: {e}")))?;
    to_js(&GeneratorRegistry::new().generate(widget_id, &settings))
}

#[wasm_bindgen(js_name = parseBackground)]
pub fn parse_background_js(value: &str) -> Result<JsValue, JsError> {
    to_js(&BackgroundJs::from(parse_background(value)))
}

#[wasm_bindgen(js_name = serializeGradient)]
pub fn serialize_gradient_js(state: JsValue) -> Result<String, JsError> {
    let state: GradientState = serde_wasm_bindgen::from_value(state)
        .map_err(|e| JsError::new(&format!("Invalid gradient: {e}")))?;
    Ok(serialize_gradient(&state))
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
