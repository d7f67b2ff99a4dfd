//! Widget generators.
//!
//! Each generator turns a settings map into a [`Bundle`]. Generators are
//! pure: the same settings always produce the same bundle.

#[cfg(feature = "circular")]
pub mod circular;
pub mod credits;
pub(crate) mod document;
pub(crate) mod shared;
#[cfg(feature = "stacked")]
pub mod stacked;
pub mod templates;

use tracing::{error, warn};
use widgetsmith_core::Settings;

use crate::bundle::{Bundle, GeneratorOptions};
use crate::error::{CodegenError, Result};

pub use credits::{Credit, CreditKind, CreditLink};
pub use document::guard_flag;
pub use templates::TemplateEngine;

/// Trait implemented by every widget generator.
pub trait WidgetGenerator {
    /// Catalog id of the widget this generator renders.
    fn widget_id(&self) -> &'static str;

    /// Attributions to display next to the preview.
    fn credits(&self) -> &'static [Credit];

    /// Generate the bundle for a full settings map.
    fn generate(&self, settings: &Settings) -> Result<Bundle>;
}

/// All compiled-in generators, keyed by widget id.
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn WidgetGenerator>>,
}

impl GeneratorRegistry {
    /// Create a registry with every enabled generator.
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }

    /// Create a registry whose generators share `options`.
    #[cfg_attr(not(any(feature = "circular", feature = "stacked")), allow(unused_variables))]
    pub fn with_options(options: GeneratorOptions) -> Self {
        let mut registry = Self::empty();

        #[cfg(feature = "circular")]
        registry.register_with(circular::CircularTestimonialsGenerator::new(options.clone()));
        #[cfg(feature = "stacked")]
        registry.register_with(stacked::StackedTestimonialsGenerator::new(options.clone()));

        registry
    }

    /// A registry with no generators.
    pub fn empty() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Add a generator, replacing any existing one for the same widget.
    pub fn register(&mut self, generator: Box<dyn WidgetGenerator>) {
        self.generators.retain(|g| g.widget_id() != generator.widget_id());
        self.generators.push(generator);
    }

    fn register_with<G: WidgetGenerator + 'static>(&mut self, built: Result<G>) {
        match built {
            Ok(generator) => self.register(Box::new(generator)),
            Err(err) => error!(error = %err, "failed to build generator"),
        }
    }

    /// Get a generator by widget id.
    pub fn get(&self, widget_id: &str) -> Option<&dyn WidgetGenerator> {
        self.generators
            .iter()
            .find(|g| g.widget_id() == widget_id)
            .map(|g| g.as_ref())
    }

    /// Ids of all registered generators.
    pub fn widget_ids(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.widget_id()).collect()
    }

    /// Generate a bundle, reporting unknown widgets and template failures.
    pub fn try_generate(&self, widget_id: &str, settings: &Settings) -> Result<Bundle> {
        self.get(widget_id)
            .ok_or_else(|| CodegenError::UnknownWidget(widget_id.to_string()))?
            .generate(settings)
    }

    /// Generate a bundle. Never fails: an unknown widget or a failed render
    /// yields [`Bundle::placeholder`].
    pub fn generate(&self, widget_id: &str, settings: &Settings) -> Bundle {
        match self.try_generate(widget_id, settings) {
            Ok(bundle) => bundle,
            Err(CodegenError::UnknownWidget(id)) => {
                warn!(widget = %id, "no generator for widget");
                Bundle::placeholder()
            }
            Err(err) => {
                error!(widget = widget_id, error = %err, "bundle generation failed");
                Bundle::placeholder()
            }
        }
    }

    /// Credits for a widget, empty when it is unknown.
    pub fn credits(&self, widget_id: &str) -> &'static [Credit] {
        self.get(widget_id).map(|g| g.credits()).unwrap_or(&[])
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgetsmith_core::widgets;

    struct Broken;

    impl WidgetGenerator for Broken {
        fn widget_id(&self) -> &'static str {
            "broken"
        }

        fn credits(&self) -> &'static [Credit] {
            &[]
        }

        fn generate(&self, _settings: &Settings) -> Result<Bundle> {
            Err(CodegenError::TemplateNotFound("script".into()))
        }
    }

    #[test]
    fn test_every_catalog_widget_generates_from_defaults() {
        let registry = GeneratorRegistry::new();
        for widget in widgets() {
            let bundle = registry
                .try_generate(widget.id, &widget.default_settings())
                .unwrap();
            assert!(!bundle.is_placeholder(), "{} fell back", widget.id);
            assert!(!bundle.markup.is_empty());
            assert!(!bundle.stylesheet.is_empty());
            assert!(!bundle.behavior_script.is_empty());
            assert!(bundle.standalone_document.contains(&bundle.behavior_script));
        }
    }

    #[test]
    fn test_unknown_widget_yields_placeholder() {
        let registry = GeneratorRegistry::new();
        let bundle = registry.generate("no-such-widget", &Settings::new());
        assert!(bundle.is_placeholder());
        assert_eq!(bundle.markup, "<div>Component not found</div>");
        assert!(matches!(
            registry.try_generate("no-such-widget", &Settings::new()),
            Err(CodegenError::UnknownWidget(_))
        ));
    }

    #[test]
    fn test_failed_generation_yields_placeholder() {
        let mut registry = GeneratorRegistry::empty();
        registry.register(Box::new(Broken));
        assert!(registry.generate("broken", &Settings::new()).is_placeholder());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let registry = GeneratorRegistry::new();
        let widget = &widgets()[1];
        let settings = widget.default_settings();
        assert_eq!(
            registry.generate(widget.id, &settings),
            registry.generate(widget.id, &settings)
        );
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = GeneratorRegistry::empty();
        registry.register(Box::new(Broken));
        registry.register(Box::new(Broken));
        assert_eq!(registry.widget_ids(), vec!["broken"]);
        assert!(registry.credits("missing").is_empty());
    }
}
