//! [`PreviewHost`] backed by the browser DOM.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlScriptElement, Window};
use widgetsmith_preview::{HostError, PreviewHost, Result};

/// Id of the `<style>` element holding the preview stylesheet.
pub const PREVIEW_STYLE_ID: &str = "component-preview-styles";

/// Called with the URL of a library once its `<script>` has loaded.
pub type LoadHandler = Rc<dyn Fn(String)>;

/// Shared slot for the load handler. The handler is installed after the
/// editor exists, but scripts requested before that still find it.
pub type LoadSlot = Rc<RefCell<Option<LoadHandler>>>;

fn dom_error(err: JsValue) -> HostError {
    HostError::Dom(format!("{err:?}"))
}

pub struct DomHost {
    window: Window,
    document: Document,
    container_id: String,
    on_load: LoadSlot,
}

impl DomHost {
    pub fn new(container_id: impl Into<String>, on_load: LoadSlot) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| HostError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| HostError::Dom("no document".into()))?;
        Ok(Self {
            window,
            document,
            container_id: container_id.into(),
            on_load,
        })
    }

    fn head(&self) -> Result<HtmlElement> {
        self.document
            .head()
            .map(Into::into)
            .ok_or_else(|| HostError::Dom("document has no <head>".into()))
    }

    fn body(&self) -> Result<HtmlElement> {
        self.document
            .body()
            .ok_or_else(|| HostError::Dom("document has no <body>".into()))
    }

    fn script(&self) -> Result<HtmlScriptElement> {
        self.document
            .create_element("script")
            .map_err(dom_error)?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| HostError::Dom("created element is not a script".into()))
    }
}

impl PreviewHost for DomHost {
    fn inject_styles(&mut self, css: &str) -> Result<()> {
        let style = match self.document.get_element_by_id(PREVIEW_STYLE_ID) {
            Some(style) => style,
            None => {
                let style = self.document.create_element("style").map_err(dom_error)?;
                style.set_id(PREVIEW_STYLE_ID);
                self.head()?.append_child(&style).map_err(dom_error)?;
                style
            }
        };
        style.set_text_content(Some(css));
        Ok(())
    }

    fn inject_markup(&mut self, html: &str) -> Result<()> {
        let container = self
            .document
            .get_element_by_id(&self.container_id)
            .ok_or_else(|| HostError::ContainerNotFound(self.container_id.clone()))?;
        container.set_inner_html(html);
        Ok(())
    }

    fn has_global(&self, name: &str) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str(name)).unwrap_or(false)
    }

    fn request_library(&mut self, url: &str) -> Result<()> {
        let script = self.script()?;
        script.set_src(url);

        let slot = Rc::clone(&self.on_load);
        let loaded_url = url.to_string();
        let onload = Closure::once_into_js(move || {
            let handler = slot.borrow().clone();
            match handler {
                Some(handler) => handler(loaded_url),
                None => debug!(url = %loaded_url, "library loaded before editor was ready"),
            }
        });
        script.set_onload(Some(onload.unchecked_ref()));

        let failed_url = url.to_string();
        let onerror = Closure::once_into_js(move || {
            web_sys::console::error_1(&format!("Failed to load {failed_url}").into());
        });
        script.set_onerror(Some(onerror.unchecked_ref()));

        self.head()?.append_child(&script).map_err(dom_error)?;
        Ok(())
    }

    fn append_script(&mut self, id: &str, source: &str) -> Result<()> {
        let script = self.script()?;
        script.set_id(id);
        script.set_text(source).map_err(dom_error)?;
        self.body()?.append_child(&script).map_err(dom_error)?;
        Ok(())
    }

    fn remove_script(&mut self, id: &str) -> Result<()> {
        if let Some(script) = self.document.get_element_by_id(id) {
            script.remove();
        }
        Ok(())
    }

    fn clear_global_interval(&mut self, key: &str) {
        let key = JsValue::from_str(key);
        let handle = js_sys::Reflect::get(&self.window, &key)
            .ok()
            .and_then(|value| value.as_f64());
        if let Some(handle) = handle {
            self.window.clear_interval_with_handle(handle as i32);
            let _ = js_sys::Reflect::set(&self.window, &key, &JsValue::UNDEFINED);
        }
    }
}
