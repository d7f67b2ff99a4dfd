//! Error types for the settings model and the gradient codec.

use thiserror::Error;

/// Errors raised by the settings model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WidgetError {
    #[error("Unknown widget type: {0}")]
    UnknownWidget(String),

    #[error("Unknown field '{field}' for widget '{widget}'")]
    UnknownField { widget: String, field: String },

    #[error("Field '{field}' expects a {expected} value, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Field '{field}' is not a testimonial list")]
    NotATestimonialList { field: String },
}

/// Errors during background/gradient parsing.
///
/// The editor never surfaces these; [`crate::gradient::parse_gradient_state`]
/// collapses them to the default gradient. They exist so callers and tests
/// can tell a solid color apart from a gradient that failed to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradientParseError {
    #[error("Value is not a gradient")]
    NotAGradient,

    #[error("Gradient is missing its argument list")]
    MissingArguments,

    #[error("Gradient needs at least two color stops, found {found}")]
    TooFewStops { found: usize },
}
