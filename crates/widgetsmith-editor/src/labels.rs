//! Label keys and their fallbacks.

use convert_case::{Case, Casing};
use widgetsmith_core::{FieldDescriptor, TestimonialField};

use crate::collaborators::Translator;

/// `field_name_color` -> `field name color`.
pub fn humanize(key: &str) -> String {
    key.from_case(Case::Snake).to_case(Case::Lower)
}

/// Translated label for a field, or its humanized key.
pub fn field_label(translator: &dyn Translator, field: &FieldDescriptor) -> String {
    translator
        .resolve(&field.label_key, &[])
        .unwrap_or_else(|| humanize(&field.label_key))
}

/// Label for a field of the `index`th (zero-based) testimonial in a list.
pub fn testimonial_label(translator: &dyn Translator, index: usize, field: TestimonialField) -> String {
    let n = (index + 1).to_string();
    translator
        .resolve(&format!("field_testimonial_n_{}", field.as_str()), &[("n", &n)])
        .unwrap_or_else(|| {
            let name = field.as_str().to_case(Case::Title);
            format!("{name} {n}")
        })
}

/// Translated text for `key`, or `fallback`.
pub fn text_or(translator: &dyn Translator, key: &str, fallback: &str) -> String {
    translator
        .resolve(key, &[])
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{NoTranslations, StaticTranslations};

    #[test]
    fn test_catalog_label_keys_are_concrete() {
        for widget in widgetsmith_core::widgets() {
            for field in &widget.fields {
                assert!(!field.label_key.contains("_n_"), "{}: {}", widget.id, field.label_key);
            }
        }
    }

    #[test]
    fn test_humanized_fallback() {
        let field = FieldDescriptor::color("nameColor", "field_name_color", "#000000");
        assert_eq!(field_label(&NoTranslations, &field), "field name color");
    }

    #[test]
    fn test_translated_label() {
        let t = StaticTranslations::from_json(
            r#"{"field_testimonial_2_quote": "Quote #2", "field_testimonial_n_name": "Name {{n}}"}"#,
        )
        .unwrap();
        let field = FieldDescriptor::textarea("quote2", "field_testimonial_2_quote", "");
        assert_eq!(field_label(&t, &field), "Quote #2");
        assert_eq!(testimonial_label(&t, 0, TestimonialField::Name), "Name 1");
        assert_eq!(testimonial_label(&t, 4, TestimonialField::Quote), "Quote 5");
    }
}
