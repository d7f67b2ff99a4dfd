//! Standalone HTML document shared by every widget.

use serde::Serialize;

use super::templates::TemplateEngine;
use crate::bundle::ScriptLibrary;
use crate::error::Result;

pub(crate) const DOCUMENT_TEMPLATE_NAME: &str = "document";

/// The behavior script runs at most once per page: the guard flag makes any
/// later run of the document return before binding handlers again.
pub(crate) const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{title_case widget_id}}</title>
    <style>
{{stylesheet}}
    </style>
</head>
<body>
{{markup}}
{{#if library_url}}
    <script src="{{library_url}}"></script>
{{/if}}
    <script>
      (function() {
        if (window.{{guard_flag}}) return;
        window.{{guard_flag}} = true;
{{behavior_script}}
      })();
    </script>
</body>
</html>
"#;

#[derive(Serialize)]
struct DocumentData<'a> {
    widget_id: &'a str,
    guard_flag: String,
    stylesheet: &'a str,
    markup: &'a str,
    behavior_script: &'a str,
    library_url: String,
}

/// The parts a standalone document is assembled from.
pub(crate) struct DocumentParts<'a> {
    pub widget_id: &'a str,
    pub markup: &'a str,
    pub stylesheet: &'a str,
    pub behavior_script: &'a str,
    pub library: Option<&'a ScriptLibrary>,
}

/// Name of the global flag marking a widget's script as initialised.
pub fn guard_flag(widget_id: &str) -> String {
    use convert_case::{Case, Casing};
    format!("has{}Script", widget_id.to_case(Case::Pascal))
}

pub(crate) fn render_document(engine: &TemplateEngine<'_>, parts: &DocumentParts<'_>) -> Result<String> {
    let data = DocumentData {
        widget_id: parts.widget_id,
        guard_flag: guard_flag(parts.widget_id),
        stylesheet: parts.stylesheet,
        markup: parts.markup,
        behavior_script: parts.behavior_script,
        library_url: parts.library.map(|l| l.url.clone()).unwrap_or_default(),
    };
    engine.render(DOCUMENT_TEMPLATE_NAME, &data)
}
