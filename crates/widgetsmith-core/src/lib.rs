//! Core types for the widgetsmith editor.
//!
//! This crate provides the foundational types shared by every other crate:
//! - Setting values and testimonial records
//! - Field descriptors and the widget catalog (defaults and bounds)
//! - Typed, default-aware views over a settings map
//! - The CSS background/gradient codec
//! - Error types

pub mod catalog;
pub mod errors;
pub mod fields;
pub mod gradient;
pub mod types;
pub mod view;

pub use catalog::{
    find_widget, icon_for, widgets, WidgetConfig, WidgetIcon, CIRCULAR_TESTIMONIALS,
    STACKED_TESTIMONIALS,
};
pub use errors::*;
pub use fields::{FieldDescriptor, FieldKind, SelectOption};
pub use gradient::{
    parse_background, parse_gradient, parse_gradient_state, serialize_gradient, Background,
    GradientKind, GradientState, GradientStop,
};
pub use types::*;
pub use view::SettingsView;
