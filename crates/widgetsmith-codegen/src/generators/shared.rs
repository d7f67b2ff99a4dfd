//! Template data shared by the testimonial generators.

use serde::Serialize;
use widgetsmith_core::{parse_background, SettingsView, Testimonial};

use super::templates::css_number;
use crate::bundle::GeneratorOptions;
use crate::carousel::{CircularPose, ResponsiveGap, StackPose};
use crate::error::Result;

/// Arrow icons are drawn at this fraction of the button size.
const ARROW_ICON_RATIO: f64 = 0.7;

/// Stylesheet parameters read from the settings.
#[derive(Debug, Serialize)]
pub(crate) struct TestimonialStyle<'a> {
    pub background: String,
    pub image_border_radius: String,
    pub name_color: &'a str,
    pub designation_color: &'a str,
    pub quote_color: &'a str,
    pub arrow_bg: &'a str,
    pub arrow_fg: &'a str,
    pub arrow_hover_bg: &'a str,
    pub name_font_size: String,
    pub designation_font_size: String,
    pub quote_font_size: String,
    pub arrow_size: String,
    pub arrow_icon_size: String,
}

impl<'a> TestimonialStyle<'a> {
    pub fn from_view(view: &SettingsView<'a>) -> Self {
        let arrow_size = view.number("arrowSize");
        Self {
            background: parse_background(view.text("backgroundColor")).to_css(),
            image_border_radius: css_number(view.number("imageBorderRadius")),
            name_color: view.text("nameColor"),
            designation_color: view.text("designationColor"),
            quote_color: view.text("quoteColor"),
            arrow_bg: view.text("arrowBg"),
            arrow_fg: view.text("arrowFg"),
            arrow_hover_bg: view.text("arrowHoverBg"),
            name_font_size: css_number(view.number("nameFontSize")),
            designation_font_size: css_number(view.number("designationFontSize")),
            quote_font_size: css_number(view.number("quoteFontSize")),
            arrow_size: css_number(arrow_size),
            arrow_icon_size: css_number(arrow_size * ARROW_ICON_RATIO),
        }
    }
}

/// A testimonial as embedded in the behavior script.
#[derive(Debug, Serialize)]
pub(crate) struct ScriptTestimonial<'a> {
    pub quote: &'a str,
    pub name: &'a str,
    pub designation: &'a str,
    pub src: &'a str,
}

impl<'a> From<&'a Testimonial> for ScriptTestimonial<'a> {
    fn from(t: &'a Testimonial) -> Self {
        Self {
            quote: &t.quote,
            name: &t.name,
            designation: &t.designation,
            src: &t.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GapData {
    pub min_width: String,
    pub max_width: String,
    pub min_gap: String,
    pub max_gap: String,
    pub slope: String,
}

impl From<ResponsiveGap> for GapData {
    fn from(gap: ResponsiveGap) -> Self {
        Self {
            min_width: css_number(gap.min_width),
            max_width: css_number(gap.max_width),
            min_gap: css_number(gap.min_gap),
            max_gap: css_number(gap.max_gap),
            slope: css_number(gap.slope),
        }
    }
}

/// Pose constants interpolated into the scripts so they match the
/// carousel model.
#[derive(Debug, Serialize)]
pub(crate) struct PoseData {
    pub adjacent_scale: String,
    pub behind_scale: String,
    pub shift_percent: String,
    pub rotation_deg: String,
    pub lift_factor: String,
    pub scale_step: String,
    pub min_scale: String,
    pub inactive_opacity: String,
    pub stack_shift_percent: String,
    pub stack_rotation_deg: String,
}

impl PoseData {
    pub fn new() -> Self {
        Self {
            adjacent_scale: css_number(CircularPose::ADJACENT_SCALE),
            behind_scale: css_number(CircularPose::BEHIND_SCALE),
            shift_percent: css_number(CircularPose::ADJACENT_SHIFT_PERCENT),
            rotation_deg: css_number(CircularPose::ADJACENT_ROTATION_DEG),
            lift_factor: css_number(CircularPose::LIFT_FACTOR),
            scale_step: css_number(StackPose::SCALE_STEP),
            min_scale: css_number(StackPose::MIN_SCALE),
            inactive_opacity: css_number(StackPose::INACTIVE_OPACITY),
            stack_shift_percent: css_number(StackPose::ADJACENT_SHIFT_PERCENT),
            stack_rotation_deg: css_number(StackPose::ADJACENT_ROTATION_DEG),
        }
    }
}

/// Everything a behavior script template reads.
#[derive(Debug, Serialize)]
pub(crate) struct ScriptData {
    pub testimonials_json: String,
    pub autoplay: bool,
    pub period_ms: u64,
    pub stagger_ms: u64,
    pub stagger_seconds: String,
    pub interval_key: String,
    pub gap: GapData,
    pub pose: PoseData,
}

impl ScriptData {
    pub fn new(
        testimonials: &[ScriptTestimonial<'_>],
        autoplay: bool,
        options: &GeneratorOptions,
    ) -> Result<Self> {
        Ok(Self {
            testimonials_json: serde_json::to_string(testimonials)?,
            autoplay,
            period_ms: options.autoplay_period_ms,
            stagger_ms: options.word_stagger_ms,
            stagger_seconds: css_number(options.word_stagger_ms as f64 / 1000.0),
            interval_key: options.interval_key.clone(),
            gap: ResponsiveGap::DEFAULT.into(),
            pose: PoseData::new(),
        })
    }
}

/// Markup shared by both testimonial widgets, parameterised by class prefix.
pub(crate) const MARKUP_TEMPLATE: &str = r#"
    <div class="{{prefix}}-container">
        <div class="{{prefix}}-grid">
            <div class="{{prefix}}-image-container" id="image-container"></div>
            <div class="{{prefix}}-content">
                <div>
                    <h3 class="{{prefix}}-name" id="name"></h3>
                    <p class="{{prefix}}-designation" id="designation"></p>
                    <p class="{{prefix}}-quote" id="quote"></p>
                </div>
                <div class="{{prefix}}-arrow-buttons">
                    <button class="{{prefix}}-arrow-button prev-button" id="prev-button">
                        <svg fill="currentColor" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
                            <path d="M15.41 7.41L14 6l-6 6 6 6 1.41-1.41L10.83 12z" />
                        </svg>
                    </button>
                    <button class="{{prefix}}-arrow-button next-button" id="next-button">
                        <svg fill="currentColor" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
                            <path d="M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z" />
                        </svg>
                    </button>
                </div>
            </div>
        </div>
    </div>"#;

#[derive(Debug, Serialize)]
pub(crate) struct MarkupData<'a> {
    pub prefix: &'a str,
}
