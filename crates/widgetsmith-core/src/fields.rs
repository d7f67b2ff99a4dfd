//! Static field descriptors that define a widget's editor form.

use crate::types::{SettingValue, Testimonial};

/// An option of a select field.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label_key: String,
}

/// The control type of a field, with its type-specific bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Textarea,
    Color,
    Switch,
    Slider { min: f64, max: f64, step: f64 },
    Select { options: Vec<SelectOption> },
    /// Solid color or CSS gradient string.
    Background,
    TestimonialList,
}

impl FieldKind {
    /// The value type a field of this kind holds.
    pub fn value_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Textarea | Self::Color | Self::Select { .. } | Self::Background => {
                "string"
            }
            Self::Switch => "boolean",
            Self::Slider { .. } => "number",
            Self::TestimonialList => "testimonial list",
        }
    }
}

/// Describes one editable field of a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub id: String,
    pub label_key: String,
    pub kind: FieldKind,
    pub default: SettingValue,
}

impl FieldDescriptor {
    fn new(id: &str, label_key: &str, kind: FieldKind, default: SettingValue) -> Self {
        Self {
            id: id.to_string(),
            label_key: label_key.to_string(),
            kind,
            default,
        }
    }

    pub fn text(id: &str, label_key: &str, default: &str) -> Self {
        Self::new(id, label_key, FieldKind::Text, default.into())
    }

    pub fn textarea(id: &str, label_key: &str, default: &str) -> Self {
        Self::new(id, label_key, FieldKind::Textarea, default.into())
    }

    pub fn color(id: &str, label_key: &str, default: &str) -> Self {
        Self::new(id, label_key, FieldKind::Color, default.into())
    }

    pub fn background(id: &str, label_key: &str, default: &str) -> Self {
        Self::new(id, label_key, FieldKind::Background, default.into())
    }

    pub fn switch(id: &str, label_key: &str, default: bool) -> Self {
        Self::new(id, label_key, FieldKind::Switch, default.into())
    }

    pub fn slider(id: &str, label_key: &str, default: f64, min: f64, max: f64, step: f64) -> Self {
        Self::new(
            id,
            label_key,
            FieldKind::Slider { min, max, step },
            default.into(),
        )
    }

    pub fn select(id: &str, label_key: &str, default: &str, options: Vec<SelectOption>) -> Self {
        Self::new(id, label_key, FieldKind::Select { options }, default.into())
    }

    pub fn testimonials(id: &str, label_key: &str, default: Vec<Testimonial>) -> Self {
        Self::new(id, label_key, FieldKind::TestimonialList, default.into())
    }

    /// Whether `value` has the type this field holds.
    ///
    /// Slider bounds are not checked; generators use out-of-range numbers
    /// as given.
    pub fn accepts(&self, value: &SettingValue) -> bool {
        matches!(
            (&self.kind, value),
            (
                FieldKind::Text
                    | FieldKind::Textarea
                    | FieldKind::Color
                    | FieldKind::Select { .. }
                    | FieldKind::Background,
                SettingValue::Text(_)
            ) | (FieldKind::Switch, SettingValue::Bool(_))
                | (FieldKind::Slider { .. }, SettingValue::Number(_))
                | (FieldKind::TestimonialList, SettingValue::Testimonials(_))
        )
    }

    /// Whether a number lies within this slider's bounds. Non-sliders accept
    /// any number.
    pub fn in_bounds(&self, value: f64) -> bool {
        match self.kind {
            FieldKind::Slider { min, max, .. } => value >= min && value <= max,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_matching_types() {
        let slider = FieldDescriptor::slider("arrowSize", "field_arrow_size", 28.0, 20.0, 60.0, 1.0);
        assert!(slider.accepts(&SettingValue::Number(100.0)));
        assert!(!slider.accepts(&SettingValue::Text("28".into())));

        let color = FieldDescriptor::color("nameColor", "field_name_color", "#000000");
        assert!(color.accepts(&"#fff".into()));
        assert!(!color.accepts(&true.into()));
    }

    #[test]
    fn test_slider_bounds() {
        let slider = FieldDescriptor::slider("arrowSize", "field_arrow_size", 28.0, 20.0, 60.0, 1.0);
        assert!(slider.in_bounds(20.0));
        assert!(slider.in_bounds(60.0));
        assert!(!slider.in_bounds(61.0));
    }
}
