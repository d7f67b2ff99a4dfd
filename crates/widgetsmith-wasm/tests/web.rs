//! Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use widgetsmith_preview::{PreviewHost, PREVIEW_SCRIPT_ID};
use widgetsmith_wasm::{DomHost, LoadSlot, WidgetEditor, PREVIEW_STYLE_ID};

wasm_bindgen_test_configure!(run_in_browser);

fn container(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    if document.get_element_by_id(id).is_none() {
        let div = document.create_element("div").unwrap();
        div.set_id(id);
        document.body().unwrap().append_child(&div).unwrap();
    }
}

#[wasm_bindgen_test]
fn styles_are_replaced_in_place() {
    container("dom-host-test");
    let mut host = DomHost::new("dom-host-test", LoadSlot::default()).unwrap();
    host.inject_styles(".a { color: red; }").unwrap();
    host.inject_styles(".b { color: blue; }").unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let style = document.get_element_by_id(PREVIEW_STYLE_ID).unwrap();
    assert_eq!(style.text_content().unwrap(), ".b { color: blue; }");
}

#[wasm_bindgen_test]
fn missing_container_is_reported() {
    let mut host = DomHost::new("no-such-container", Rc::default()).unwrap();
    assert!(host.inject_markup("<p></p>").is_err());
}

#[wasm_bindgen_test]
fn stacked_editor_mounts_one_script() {
    container("stacked-preview");
    let editor = WidgetEditor::new("stacked-testimonials", "stacked-preview", JsValue::UNDEFINED)
        .map_err(JsValue::from)
        .unwrap();
    editor.set_number("arrowSize", 48.0).map_err(JsValue::from).unwrap();
    editor.reload().map_err(JsValue::from).unwrap();

    let document = web_sys::window().unwrap().document().unwrap();
    let scripts = document.query_selector_all(&format!("#{PREVIEW_SCRIPT_ID}")).unwrap();
    assert_eq!(scripts.length(), 1);

    editor.unmount().map_err(JsValue::from).unwrap();
    assert!(document.get_element_by_id(PREVIEW_SCRIPT_ID).is_none());
}
