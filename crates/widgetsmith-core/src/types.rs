//! Core value types for widget settings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// A flat, insertion-ordered map from field id to value.
///
/// Order is kept so that exporting and re-importing a configuration yields
/// the same bytes.
pub type Settings = IndexMap<String, SettingValue>;

/// A single testimonial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Opaque token, unique within its list.
    pub id: String,
    pub quote: String,
    pub name: String,
    pub designation: String,
    /// Image URL.
    pub image: String,
}

impl Testimonial {
    pub const PLACEHOLDER_QUOTE: &'static str = "This is a sample filler sentence that mimics the structure and rhythm of a customer review. It doesn't convey any specific message, but it is here to demonstrate what a testimonial of this length might look like in layout. Feel free to replace this with any content that suits your needs or simply use it as a visual placeholder during design and development.";
    pub const PLACEHOLDER_NAME: &'static str = "New Name";
    pub const PLACEHOLDER_DESIGNATION: &'static str = "New Designation";
    pub const PLACEHOLDER_IMAGE: &'static str = "https://placehold.co/408x384.png";

    pub fn new(
        id: impl Into<String>,
        quote: impl Into<String>,
        name: impl Into<String>,
        designation: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            quote: quote.into(),
            name: name.into(),
            designation: designation.into(),
            image: image.into(),
        }
    }

    /// Create a testimonial filled with placeholder content.
    pub fn placeholder(id: impl Into<String>) -> Self {
        Self::new(
            id,
            Self::PLACEHOLDER_QUOTE,
            Self::PLACEHOLDER_NAME,
            Self::PLACEHOLDER_DESIGNATION,
            Self::PLACEHOLDER_IMAGE,
        )
    }

    /// Get a field by kind.
    pub fn field(&self, field: TestimonialField) -> &str {
        match field {
            TestimonialField::Quote => &self.quote,
            TestimonialField::Name => &self.name,
            TestimonialField::Designation => &self.designation,
            TestimonialField::Image => &self.image,
        }
    }

    /// Set a field by kind.
    pub fn set_field(&mut self, field: TestimonialField, value: impl Into<String>) {
        let slot = match field {
            TestimonialField::Quote => &mut self.quote,
            TestimonialField::Name => &mut self.name,
            TestimonialField::Designation => &mut self.designation,
            TestimonialField::Image => &mut self.image,
        };
        *slot = value.into();
    }
}

/// The user-editable fields of a testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialField {
    Quote,
    Name,
    Designation,
    Image,
}

impl TestimonialField {
    pub const ALL: [TestimonialField; 4] = [
        TestimonialField::Quote,
        TestimonialField::Name,
        TestimonialField::Designation,
        TestimonialField::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Name => "name",
            Self::Designation => "designation",
            Self::Image => "image",
        }
    }
}

/// A setting value.
///
/// Deserialized untagged, so plain JSON scalars map onto the matching variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Testimonials(Vec<Testimonial>),
}

impl SettingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_testimonials(&self) -> Option<&[Testimonial]> {
        match self {
            Self::Testimonials(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_testimonials_mut(&mut self) -> Option<&mut Vec<Testimonial>> {
        match self {
            Self::Testimonials(list) => Some(list),
            _ => None,
        }
    }

    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Testimonials(_) => "testimonial list",
        }
    }
}

// Integral numbers are written without a fractional part, matching what a
// browser produces for the same settings object.
impl Serialize for SettingValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Testimonials(list) => list.serialize(serializer),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for SettingValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for SettingValue {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Testimonial>> for SettingValue {
    fn from(list: Vec<Testimonial>) -> Self {
        Self::Testimonials(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialize() {
        let settings: Settings = serde_json::from_str(
            r##"{"autoplay": true, "arrowSize": 28, "nameColor": "#000000", "testimonials": []}"##,
        )
        .unwrap();

        assert_eq!(settings["autoplay"], SettingValue::Bool(true));
        assert_eq!(settings["arrowSize"], SettingValue::Number(28.0));
        assert_eq!(settings["nameColor"].as_str(), Some("#000000"));
        assert_eq!(settings["testimonials"].as_testimonials(), Some(&[][..]));
    }

    #[test]
    fn test_integral_numbers_serialize_without_fraction() {
        let json = serde_json::to_string(&SettingValue::Number(24.0)).unwrap();
        assert_eq!(json, "24");
        let json = serde_json::to_string(&SettingValue::Number(0.5)).unwrap();
        assert_eq!(json, "0.5");
    }

    #[test]
    fn test_settings_keep_insertion_order() {
        let mut settings = Settings::new();
        settings.insert("zeta".into(), 1.into());
        settings.insert("alpha".into(), 2.into());

        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_testimonial_field_access() {
        let mut t = Testimonial::placeholder("7");
        assert_eq!(t.field(TestimonialField::Name), "New Name");
        t.set_field(TestimonialField::Name, "Ada");
        assert_eq!(t.name, "Ada");
    }
}
