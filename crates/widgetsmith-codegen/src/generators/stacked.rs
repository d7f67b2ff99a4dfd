//! Stacked testimonials: a card stack driven by CSS transitions.

use tracing::debug;
use widgetsmith_core::{find_widget, Settings, SettingsView, STACKED_TESTIMONIALS};

use super::credits::{
    Credit, ANIMATED_TESTIMONIALS, PHOTO_BAVE, PHOTO_MACIAS, PHOTO_MASS, PHOTO_PAVLOV,
    PHOTO_VINICIUS,
};
use super::document::{render_document, DocumentParts, DOCUMENT_TEMPLATE, DOCUMENT_TEMPLATE_NAME};
use super::shared::{MarkupData, ScriptData, ScriptTestimonial, TestimonialStyle, MARKUP_TEMPLATE};
use super::templates::TemplateEngine;
use super::WidgetGenerator;
use crate::bundle::{Bundle, GeneratorOptions};
use crate::error::{CodegenError, Result};

/// Settings key holding the testimonial list.
pub const TESTIMONIALS_FIELD: &str = "testimonials";

const CLASS_PREFIX: &str = "stacked-testimonials";

const CREDITS: &[Credit] = &[
    ANIMATED_TESTIMONIALS,
    PHOTO_PAVLOV,
    PHOTO_BAVE,
    PHOTO_VINICIUS,
    PHOTO_MACIAS,
    PHOTO_MASS,
];

const STYLE_TEMPLATE: &str = r#"
    .stacked-testimonials-container {
        width: 100%;
        max-width: 56rem;
        padding: 2rem;
        font-family: sans-serif;
        background: {{background}};
    }
    .stacked-testimonials-grid {
        display: grid;
        gap: 5rem;
    }
    .stacked-testimonials-image-container {
        position: relative;
        width: 100%;
        height: 24rem;
        perspective: 1000px;
    }
    .stacked-testimonials-image {
        position: absolute;
        width: 100%;
        height: 100%;
        object-fit: cover;
        border-radius: {{image_border_radius}}px;
        transition: all 0.6s cubic-bezier(0.23, 1, 0.32, 1);
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
    }
    .stacked-testimonials-content {
        display: flex;
        flex-direction: column;
        justify-content: space-between;
    }
    .stacked-testimonials-name {
        font-size: {{name_font_size}}px;
        font-weight: bold;
        color: {{name_color}};
        margin-bottom: 0.25rem;
    }
    .stacked-testimonials-designation {
        font-size: {{designation_font_size}}px;
        color: {{designation_color}};
        margin-bottom: 2rem;
    }
    .stacked-testimonials-quote {
        font-size: {{quote_font_size}}px;
        color: {{quote_color}};
        line-height: 1.75;
    }
    .stacked-testimonials-arrow-buttons {
        display: flex;
        gap: 1rem;
        padding-top: 3rem;
    }
    .stacked-testimonials-arrow-button {
        width: {{arrow_size}}px;
        height: {{arrow_size}}px;
        border-radius: 50%;
        background-color: {{arrow_bg}};
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        transition: background-color 0.3s;
        border: none;
    }
    .stacked-testimonials-arrow-button svg {
        width: {{arrow_icon_size}}px;
        height: {{arrow_icon_size}}px;
        fill: {{arrow_fg}};
        transition: transform 0.3s;
    }
    .stacked-testimonials-arrow-button:hover {
        background-color: {{arrow_hover_bg}};
    }
    .stacked-testimonials-arrow-button:hover svg {
      fill: #ffffff;
    }
    .prev-button:hover svg {
      transform: rotate(-12deg);
    }
    .next-button:hover svg {
      transform: rotate(12deg);
    }
    @media (min-width: 768px) {
      .stacked-testimonials-grid {
        grid-template-columns: 1fr 1fr;
      }
      .stacked-testimonials-arrow-buttons {
        padding-top: 0;
      }
    }
    .stacked-testimonials-quote .word {
      display: inline-block;
    }
"#;

const SCRIPT_TEMPLATE: &str = r#"
    const testimonials = {{testimonials_json}};
    if (!testimonials || testimonials.length === 0) return;

    let activeIndex = 0;
    const imageContainer = document.getElementById('image-container');
    const nameElement = document.getElementById('name');
    const designationElement = document.getElementById('designation');
    const quoteElement = document.getElementById('quote');
    const prevButton = document.getElementById('prev-button');
    const nextButton = document.getElementById('next-button');

    function initTestimonials() {
        if (!imageContainer) return;
        imageContainer.innerHTML = '';
        testimonials.forEach((testimonial, index) => {
            const img = document.createElement('img');
            img.src = testimonial.src;
            img.alt = testimonial.name;
            img.classList.add('stacked-testimonials-image');
            img.dataset.index = index;
            imageContainer.appendChild(img);
        });
    }

    function wrapTransition(incomingIndex, done) {
        const allImages = imageContainer.querySelectorAll('.stacked-testimonials-image');
        const outgoingIndex = activeIndex;

        allImages.forEach((img, idx) => {
            if (idx !== outgoingIndex && idx !== incomingIndex) {
                img.style.transition = 'opacity 0.075s ease';
                img.style.opacity = '0';
                img.style.pointerEvents = 'none';
            }
        });

        const outgoingImg = allImages[outgoingIndex];
        const incomingImg = allImages[incomingIndex];
        outgoingImg.style.opacity = '1';
        incomingImg.style.opacity = '0';
        incomingImg.style.zIndex = testimonials.length;
        outgoingImg.style.zIndex = testimonials.length - 1;

        setTimeout(() => {
            outgoingImg.style.opacity = '0';
            outgoingImg.style.transform = 'scale(0.93) translateY(10%)';
            incomingImg.style.opacity = '1';
            incomingImg.style.transform = 'scale(1) translateY(0%)';
        }, 75);

        setTimeout(() => {
            allImages.forEach((img) => {
                img.style.transition = 'all 0.3s cubic-bezier(0.23, 1, 0.32, 1)';
                img.style.pointerEvents = '';
            });
            done();
        }, 300);
    }

    function updateTestimonial(direction) {
        const count = testimonials.length;
        const prevIndex = activeIndex;
        const rawIndex = prevIndex + direction;
        const nextIndex = ((rawIndex % count) + count) % count;
        const isWrap = nextIndex !== prevIndex && (rawIndex < 0 || rawIndex >= count);

        const settle = () => {
            activeIndex = nextIndex;
            applyStackStyles();
            updateContent();
        };
        if (isWrap) {
            wrapTransition(nextIndex, settle);
        } else {
            settle();
        }
    }

    function applyStackStyles() {
        const allImages = imageContainer.querySelectorAll('.stacked-testimonials-image');
        allImages.forEach((img, index) => {
            const offset = index - activeIndex;
            const absOffset = Math.abs(offset);
            const zIndex = testimonials.length - absOffset;
            const opacity = offset === 0 ? 1 : {{pose.inactive_opacity}};
            const scale = Math.max({{pose.min_scale}}, 1 - absOffset * {{pose.scale_step}});
            const translateY = offset === -1 ? '-{{pose.stack_shift_percent}}%' : (offset === 1 ? '{{pose.stack_shift_percent}}%' : '0%');
            const rotateY = offset === -1 ? '{{pose.stack_rotation_deg}}deg' : (offset === 1 ? '-{{pose.stack_rotation_deg}}deg' : '0deg');

            img.style.transition = 'all 0.6s cubic-bezier(0.23, 1, 0.32, 1)';
            img.style.zIndex = zIndex;
            img.style.opacity = opacity;
            img.style.transform = `translateY(${translateY}) scale(${scale}) rotateY(${rotateY})`;
            img.style.pointerEvents = '';
        });
    }

    function updateContent() {
        const current = testimonials[activeIndex];
        if (nameElement) nameElement.textContent = current.name;
        if (designationElement) designationElement.textContent = current.designation;
        if (quoteElement) {
            quoteElement.innerHTML = current.quote
                .split(' ')
                .map(word => `<span class="word">${word}</span>`)
                .join(' ');
            animateWords();
        }
    }

    function animateWords() {
        if (!quoteElement) return;
        const words = quoteElement.querySelectorAll('.word');
        words.forEach((word, index) => {
            word.style.opacity = '0';
            word.style.transform = 'translateY(10px)';
            word.style.filter = 'blur(10px)';
            setTimeout(() => {
                word.style.transition = 'opacity 0.2s ease-in-out, transform 0.2s ease-in-out, filter 0.2s ease-in-out';
                word.style.opacity = '1';
                word.style.transform = 'translateY(0)';
                word.style.filter = 'blur(0)';
            }, index * {{stagger_ms}});
        });
    }

    function handleNext() { updateTestimonial(1); }
    function handlePrev() { updateTestimonial(-1); }

    if (prevButton) prevButton.addEventListener('click', handlePrev);
    if (nextButton) nextButton.addEventListener('click', handleNext);

    initTestimonials();
    applyStackStyles();
    updateContent();
{{#if autoplay}}

    if (window.{{interval_key}}) clearInterval(window.{{interval_key}});
    window.{{interval_key}} = setInterval(handleNext, {{period_ms}});
    [prevButton, nextButton].forEach(button => {
        if (button) {
            button.addEventListener('click', () => {
                clearInterval(window.{{interval_key}});
                window.{{interval_key}} = undefined;
            });
        }
    });
{{/if}}
"#;

/// Generator for the stacked testimonials widget.
pub struct StackedTestimonialsGenerator {
    engine: TemplateEngine<'static>,
    options: GeneratorOptions,
}

impl StackedTestimonialsGenerator {
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        let engine = TemplateEngine::with_templates(&[
            ("markup", MARKUP_TEMPLATE),
            ("style", STYLE_TEMPLATE),
            ("script", SCRIPT_TEMPLATE),
            (DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE),
        ])?;
        Ok(Self { engine, options })
    }
}

impl WidgetGenerator for StackedTestimonialsGenerator {
    fn widget_id(&self) -> &'static str {
        STACKED_TESTIMONIALS
    }

    fn credits(&self) -> &'static [Credit] {
        CREDITS
    }

    fn generate(&self, settings: &Settings) -> Result<Bundle> {
        let widget = find_widget(STACKED_TESTIMONIALS)
            .ok_or_else(|| CodegenError::UnknownWidget(STACKED_TESTIMONIALS.to_string()))?;
        let view = SettingsView::new(settings, widget);

        let script_items: Vec<ScriptTestimonial<'_>> = view
            .testimonials(TESTIMONIALS_FIELD)
            .iter()
            .map(ScriptTestimonial::from)
            .collect();
        let script_data = ScriptData::new(&script_items, view.flag("autoplay"), &self.options)?;

        let markup = self.engine.render("markup", &MarkupData { prefix: CLASS_PREFIX })?;
        let stylesheet = self.engine.render("style", &TestimonialStyle::from_view(&view))?;
        let behavior_script = self.engine.render("script", &script_data)?;

        let standalone_document = render_document(
            &self.engine,
            &DocumentParts {
                widget_id: STACKED_TESTIMONIALS,
                markup: &markup,
                stylesheet: &stylesheet,
                behavior_script: &behavior_script,
                library: None,
            },
        )?;

        debug!(
            widget = STACKED_TESTIMONIALS,
            testimonials = script_items.len(),
            autoplay = script_data.autoplay,
            "generated bundle"
        );

        Ok(Bundle {
            markup,
            stylesheet,
            behavior_script,
            standalone_document,
            library: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgetsmith_core::{SettingValue, Testimonial};

    fn generator() -> StackedTestimonialsGenerator {
        StackedTestimonialsGenerator::new(GeneratorOptions::default()).unwrap()
    }

    fn defaults() -> Settings {
        find_widget(STACKED_TESTIMONIALS).unwrap().default_settings()
    }

    #[test]
    fn test_embeds_testimonial_list() {
        let bundle = generator().generate(&defaults()).unwrap();
        assert!(bundle.behavior_script.contains(r#""name":"Ness Nacht""#));
        assert!(bundle.behavior_script.contains("}, index * 20);"));
        assert!(bundle.stylesheet.contains("font-size: 14px;"));
    }

    #[test]
    fn test_no_animation_library() {
        let bundle = generator().generate(&defaults()).unwrap();
        assert!(bundle.library.is_none());
        assert!(!bundle.standalone_document.contains("<script src="));
        assert!(!bundle.behavior_script.contains("gsap"));
        assert!(bundle.standalone_document.contains("<title>Stacked Testimonials</title>"));
    }

    #[test]
    fn test_empty_list_still_generates() {
        let mut settings = defaults();
        settings.insert(TESTIMONIALS_FIELD.into(), SettingValue::Testimonials(Vec::new()));
        let bundle = generator().generate(&settings).unwrap();

        assert!(bundle.behavior_script.contains("const testimonials = [];"));
        assert!(bundle
            .behavior_script
            .contains("if (!testimonials || testimonials.length === 0) return;"));
    }

    #[test]
    fn test_quote_is_interpolated_verbatim() {
        let mut settings = defaults();
        settings.insert(
            TESTIMONIALS_FIELD.into(),
            vec![Testimonial::new("a", "<b>bold</b> & more", "A", "B", "x.png")].into(),
        );
        let bundle = generator().generate(&settings).unwrap();
        assert!(bundle.behavior_script.contains(r#""quote":"<b>bold</b> & more""#));
    }

    #[test]
    fn test_gradient_background() {
        let mut settings = defaults();
        settings.insert(
            "backgroundColor".into(),
            "linear-gradient(45deg, #ff0000 0%, #0000ff 100%)".into(),
        );
        let bundle = generator().generate(&settings).unwrap();
        assert!(bundle
            .stylesheet
            .contains("background: linear-gradient(45deg, #ff0000 0%, #0000ff 100%);"));
    }

    #[test]
    fn test_manual_navigation_clears_autoplay() {
        let bundle = generator().generate(&defaults()).unwrap();
        let script = &bundle.behavior_script;
        let start = script.find("setInterval(handleNext, 5000)").unwrap();
        let clear = script.rfind("clearInterval(window.autoplayInterval);").unwrap();
        assert!(clear > start);
    }
}
