//! Template engine for code generation.

use crate::error::{CodegenError, Result};
use convert_case::{Case, Casing};
use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde::Serialize;

handlebars_helper!(title_case: |s: str| s.to_case(Case::Title));

/// Template engine using Handlebars.
///
/// Output is never HTML-escaped: settings are interpolated verbatim into
/// markup, stylesheet and script. The user configuring a widget is the user
/// previewing it, so user text is trusted.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(true);

        // Register custom helpers
        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Create an engine with a set of named templates registered.
    pub fn with_templates(templates: &[(&str, &str)]) -> Result<Self> {
        let mut engine = Self::new();
        for (name, template) in templates {
            engine.register_template(name, template)?;
        }
        Ok(engine)
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.has_template(name) {
            return Err(CodegenError::TemplateNotFound(name.to_string()));
        }
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(CodegenError::TemplateError)
    }

    fn register_helpers(handlebars: &mut Handlebars) {
        handlebars.register_helper("title_case", Box::new(title_case));
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number the way it reads in CSS and JavaScript: integral values
/// without a fractional part.
pub fn css_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_simple() {
        let mut engine = TemplateEngine::new();
        engine
            .register_template("hello", "Hello, {{name}}!")
            .unwrap();

        let result = engine.render("hello", &json!({"name": "World"})).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_no_escaping() {
        let engine = TemplateEngine::new();
        let result = engine
            .render_string("<p>{{quote}}</p>", &json!({"quote": "<b>\"hi\"</b> & bye"}))
            .unwrap();
        assert_eq!(result, "<p><b>\"hi\"</b> & bye</p>");
    }

    #[test]
    fn test_strict_mode_rejects_missing_fields() {
        let engine = TemplateEngine::new();
        assert!(engine.render_string("{{missing}}", &json!({})).is_err());
    }

    #[test]
    fn test_missing_template() {
        let engine = TemplateEngine::new();
        assert!(matches!(
            engine.render("nope", &json!({})),
            Err(CodegenError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_title_case_helper() {
        let engine = TemplateEngine::new();
        let data = json!({"id": "circular-testimonials"});
        assert_eq!(
            engine.render_string("{{title_case id}}", &data).unwrap(),
            "Circular Testimonials"
        );
    }

    #[test]
    fn test_css_number() {
        assert_eq!(css_number(24.0), "24");
        assert_eq!(css_number(28.0 * 0.7), "19.599999999999998");
    }
}
