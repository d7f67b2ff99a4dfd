//! Code generation for widgetsmith widgets.
//!
//! Turns a widget id and its settings into a [`Bundle`]: markup, stylesheet,
//! behavior script and a standalone HTML document. The [`carousel`] module
//! models the generated scripts' navigation so it can be tested without a
//! browser.
//!
//! # Features
//!
//! - `circular` - Circular testimonials (GSAP 3D carousel)
//! - `stacked` - Stacked testimonials (CSS transitions)
//!
//! # Example
//!
//! ```ignore
//! use widgetsmith_codegen::GeneratorRegistry;
//! use widgetsmith_core::find_widget;
//!
//! let widget = find_widget("stacked-testimonials").unwrap();
//! let bundle = GeneratorRegistry::new().generate(widget.id, &widget.default_settings());
//! println!("{}", bundle.standalone_document);
//! ```

pub mod bundle;
pub mod carousel;
pub mod error;
pub mod generators;

pub use bundle::{Bundle, GeneratorOptions, ScriptLibrary, AUTOPLAY_INTERVAL_KEY, GSAP_URL, NOT_FOUND_MARKUP};
pub use carousel::{Carousel, CircularPose, ResponsiveGap, StackPose, Transition};
pub use error::{CodegenError, Result};
pub use generators::{
    guard_flag, Credit, CreditKind, CreditLink, GeneratorRegistry, TemplateEngine, WidgetGenerator,
};

// Re-export widget-specific generators
#[cfg(feature = "circular")]
pub use generators::circular::CircularTestimonialsGenerator;

#[cfg(feature = "stacked")]
pub use generators::stacked::StackedTestimonialsGenerator;
