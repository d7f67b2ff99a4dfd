//! The widget catalog: every configurable widget with its field set.

use std::sync::OnceLock;

use crate::fields::FieldDescriptor;
use crate::types::{Settings, Testimonial};

pub const CIRCULAR_TESTIMONIALS: &str = "circular-testimonials";
pub const STACKED_TESTIMONIALS: &str = "stacked-testimonials";

/// Icon shown for a widget in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetIcon {
    MessageSquareQuote,
    Users,
    /// Fallback for widgets without a dedicated icon.
    Generic,
}

impl WidgetIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MessageSquareQuote => "message-square-quote",
            Self::Users => "users",
            Self::Generic => "div",
        }
    }
}

/// Static description of one widget type.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub id: &'static str,
    pub name_key: &'static str,
    pub description_key: Option<&'static str>,
    pub fields: Vec<FieldDescriptor>,
}

impl WidgetConfig {
    /// Look up a field descriptor by id.
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Settings initialised from every field's default value.
    pub fn default_settings(&self) -> Settings {
        self.fields
            .iter()
            .map(|f| (f.id.clone(), f.default.clone()))
            .collect()
    }

    pub fn icon(&self) -> WidgetIcon {
        icon_for(self.id)
    }
}

/// All widgets, in display order.
pub fn widgets() -> &'static [WidgetConfig] {
    static CATALOG: OnceLock<Vec<WidgetConfig>> = OnceLock::new();
    CATALOG.get_or_init(|| vec![circular_testimonials(), stacked_testimonials()])
}

/// Find a widget by id.
pub fn find_widget(id: &str) -> Option<&'static WidgetConfig> {
    widgets().iter().find(|w| w.id == id)
}

/// Icon for a widget id, falling back to [`WidgetIcon::Generic`].
pub fn icon_for(id: &str) -> WidgetIcon {
    match id {
        CIRCULAR_TESTIMONIALS => WidgetIcon::MessageSquareQuote,
        STACKED_TESTIMONIALS => WidgetIcon::Users,
        _ => WidgetIcon::Generic,
    }
}

const QUOTE_TAMAR: &str = "I was impressed by the food — every dish is bursting with flavor! And I could really tell that they use high-quality ingredients. The staff was friendly and attentive, going the extra mile. I'll definitely be back for more!";
const QUOTE_JOE: &str = "This place exceeded all expectations! The atmosphere is inviting, and the staff truly goes above and beyond to ensure a fantastic visit. I'll definitely keep returning for more exceptional dining experience.";
const QUOTE_MARTINA: &str = "Shining Yam is a hidden gem! From the moment I walked in, I knew I was in for a treat. The impeccable service and overall attention to detail created a memorable experience. I highly recommend it!";
const QUOTE_ANDY: &str = "Every visit feels like coming home. The whole place is warm and welcoming, the food consistently delights, and the service never fails to impress. It's evident the team truly cares about customer experience.";
const QUOTE_NESS: &str = "It’s hard to find a spot that checks all the boxes — but this one does. Beautiful setting, warm staff, and food that surprises in the best way. I’ve visited multiple times, and each time feels fresh and exciting. A standout, for sure!";

const IMAGE_TAMAR: &str = "https://images.unsplash.com/photo-1512316609839-ce289d3eba0a?q=80&w=1368&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";
const IMAGE_JOE: &str = "https://images.unsplash.com/photo-1628749528992-f5702133b686?q=80&w=1368&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";
const IMAGE_MARTINA: &str = "https://images.unsplash.com/photo-1524267213992-b76e8577d046?q=80&w=1368&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";
const IMAGE_ANDY: &str = "https://images.unsplash.com/photo-1677159828965-3b852a9eeabf?q=80&w=1368&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";
const IMAGE_NESS: &str = "https://images.unsplash.com/photo-1729100221675-2402ee6f2fea?q=80&w=1368&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D";

fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new("1", QUOTE_TAMAR, "Tamar Mendelson", "Restaurant Critic", IMAGE_TAMAR),
        Testimonial::new("2", QUOTE_JOE, "Joe Charlescraft", "Frequent Visitor", IMAGE_JOE),
        Testimonial::new("3", QUOTE_MARTINA, "Martina Edelweist", "Satisfied Customer", IMAGE_MARTINA),
        Testimonial::new("4", QUOTE_ANDY, "Andy White", "Frequent Visitor", IMAGE_ANDY),
        Testimonial::new("5", QUOTE_NESS, "Ness Nacht", "Frequent Visitor", IMAGE_NESS),
    ]
}

/// Styling fields shared by both testimonial widgets.
fn styling_fields(designation_font_size: f64) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::switch("autoplay", "field_autoplay", true),
        FieldDescriptor::background("backgroundColor", "field_background_color", "transparent"),
        FieldDescriptor::slider("imageBorderRadius", "field_image_border_radius", 24.0, 0.0, 150.0, 1.0),
        FieldDescriptor::color("nameColor", "field_name_color", "#000000"),
        FieldDescriptor::color("designationColor", "field_designation_color", "#6b7280"),
        FieldDescriptor::color("quoteColor", "field_quote_color", "#4b5563"),
        FieldDescriptor::color("arrowBg", "field_arrow_background", "#141414"),
        FieldDescriptor::color("arrowFg", "field_arrow_foreground", "#f1f1f7"),
        FieldDescriptor::color("arrowHoverBg", "field_arrow_hover_background", "#00a6fb"),
        FieldDescriptor::slider("nameFontSize", "field_name_font_size", 24.0, 12.0, 48.0, 1.0),
        FieldDescriptor::slider(
            "designationFontSize",
            "field_designation_font_size",
            designation_font_size,
            10.0,
            24.0,
            1.0,
        ),
        FieldDescriptor::slider("quoteFontSize", "field_quote_font_size", 18.0, 12.0, 32.0, 1.0),
        FieldDescriptor::slider("arrowSize", "field_arrow_size", 28.0, 20.0, 60.0, 1.0),
    ]
}

fn circular_testimonials() -> WidgetConfig {
    let mut fields = Vec::new();

    // Three fixed slots: quoteN, nameN, designationN, imageN.
    for (n, t) in default_testimonials().iter().take(3).enumerate() {
        let n = n + 1;
        fields.push(FieldDescriptor::textarea(
            &format!("quote{n}"),
            &format!("field_testimonial_{n}_quote"),
            &t.quote,
        ));
        fields.push(FieldDescriptor::text(
            &format!("name{n}"),
            &format!("field_testimonial_{n}_name"),
            &t.name,
        ));
        fields.push(FieldDescriptor::text(
            &format!("designation{n}"),
            &format!("field_testimonial_{n}_designation"),
            &t.designation,
        ));
        fields.push(FieldDescriptor::text(
            &format!("image{n}"),
            &format!("field_testimonial_{n}_image"),
            &t.image,
        ));
    }
    fields.extend(styling_fields(15.0));

    WidgetConfig {
        id: CIRCULAR_TESTIMONIALS,
        name_key: "component_circular_testimonials_name",
        description_key: Some("circular_testimonials_description"),
        fields,
    }
}

fn stacked_testimonials() -> WidgetConfig {
    let mut fields = vec![FieldDescriptor::testimonials(
        "testimonials",
        "field_testimonials",
        default_testimonials(),
    )];
    fields.extend(styling_fields(14.0));

    WidgetConfig {
        id: STACKED_TESTIMONIALS,
        name_key: "component_stacked_testimonials_name",
        description_key: Some("stacked_testimonials_description"),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldKind;
    use crate::types::SettingValue;

    #[test]
    fn test_catalog_contains_both_widgets() {
        let ids: Vec<_> = widgets().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![CIRCULAR_TESTIMONIALS, STACKED_TESTIMONIALS]);
        assert!(find_widget("unknown").is_none());
    }

    #[test]
    fn test_circular_has_three_slots() {
        let widget = find_widget(CIRCULAR_TESTIMONIALS).unwrap();
        for n in 1..=3 {
            assert!(widget.field(&format!("quote{n}")).is_some());
            assert!(widget.field(&format!("image{n}")).is_some());
        }
        assert!(widget.field("quote4").is_none());
        assert_eq!(
            widget.field("designationFontSize").unwrap().default,
            SettingValue::Number(15.0)
        );
    }

    #[test]
    fn test_stacked_defaults() {
        let widget = find_widget(STACKED_TESTIMONIALS).unwrap();
        let settings = widget.default_settings();
        assert_eq!(settings["testimonials"].as_testimonials().unwrap().len(), 5);
        assert_eq!(settings["designationFontSize"], SettingValue::Number(14.0));
        assert!(matches!(
            widget.field("arrowSize").unwrap().kind,
            FieldKind::Slider { min, max, .. } if min == 20.0 && max == 60.0
        ));
    }

    #[test]
    fn test_default_values_match_their_descriptors() {
        for widget in widgets() {
            for field in &widget.fields {
                assert!(field.accepts(&field.default), "{}.{}", widget.id, field.id);
            }
        }
    }

    #[test]
    fn test_icon_fallback() {
        assert_eq!(icon_for(STACKED_TESTIMONIALS), WidgetIcon::Users);
        assert_eq!(icon_for("nope"), WidgetIcon::Generic);
    }
}
