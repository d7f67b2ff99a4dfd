//! Circular testimonials: a 3D carousel animated through GSAP.

use tracing::debug;
use widgetsmith_core::{find_widget, Settings, SettingsView, Testimonial, CIRCULAR_TESTIMONIALS};

use super::credits::{Credit, ANIMATED_TESTIMONIALS, PHOTO_BAVE, PHOTO_PAVLOV, PHOTO_VINICIUS};
use super::document::{render_document, DocumentParts, DOCUMENT_TEMPLATE, DOCUMENT_TEMPLATE_NAME};
use super::shared::{MarkupData, ScriptData, ScriptTestimonial, TestimonialStyle, MARKUP_TEMPLATE};
use super::templates::TemplateEngine;
use super::WidgetGenerator;
use crate::bundle::{Bundle, GeneratorOptions, ScriptLibrary};
use crate::error::{CodegenError, Result};

/// Number of fixed testimonial slots the circular widget exposes.
pub const SLOT_COUNT: usize = 3;

const CLASS_PREFIX: &str = "circular-testimonials";

const CREDITS: &[Credit] = &[ANIMATED_TESTIMONIALS, PHOTO_PAVLOV, PHOTO_BAVE, PHOTO_VINICIUS];

const STYLE_TEMPLATE: &str = r#"
    .circular-testimonials-container {
        width: 100%;
        max-width: 56rem;
        padding: 2rem;
        font-family: sans-serif;
        background: {{background}};
    }
    .circular-testimonials-grid {
        display: grid;
        gap: 5rem;
    }
    @media (min-width: 768px) {
      .circular-testimonials-grid {
        grid-template-columns: 1fr 1fr;
      }
    }
    .circular-testimonials-image-container {
        position: relative;
        width: 100%;
        height: 24rem;
        perspective: 1000px;
    }
    .circular-testimonials-image {
        position: absolute;
        width: 100%;
        height: 100%;
        object-fit: cover;
        border-radius: {{image_border_radius}}px;
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
        aspect-ratio: 1/1;
    }
    .circular-testimonials-content {
        display: flex;
        flex-direction: column;
        justify-content: space-between;
    }
    .circular-testimonials-name {
        font-size: {{name_font_size}}px;
        color: {{name_color}};
        font-weight: bold;
        margin-bottom: 0.25rem;
    }
    .circular-testimonials-designation {
        font-size: {{designation_font_size}}px;
        color: {{designation_color}};
        margin-bottom: 2rem;
    }
    .circular-testimonials-quote {
        font-size: {{quote_font_size}}px;
        color: {{quote_color}};
        line-height: 1.75;
    }
    .circular-testimonials-quote .word {
      display: inline-block;
    }
    .circular-testimonials-arrow-buttons {
        display: flex;
        gap: 1.5rem;
        padding-top: 3rem;
    }
    @media (min-width: 768px) {
      .circular-testimonials-arrow-buttons {
        padding-top: 0;
      }
    }
    .circular-testimonials-arrow-button {
        width: {{arrow_size}}px;
        height: {{arrow_size}}px;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        transition: background-color 0.3s;
        border: none;
        background-color: {{arrow_bg}};
        color: {{arrow_fg}};
    }
    .circular-testimonials-arrow-button:hover {
        background-color: {{arrow_hover_bg}};
    }
    .circular-testimonials-arrow-button svg {
        width: {{arrow_icon_size}}px;
        height: {{arrow_icon_size}}px;
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

        function calculateGap(width) {
            const minWidth = {{gap.min_width}};
            const maxWidth = {{gap.max_width}};
            const minGap = {{gap.min_gap}};
            const maxGap = {{gap.max_gap}};
            if (width <= minWidth) return minGap;
            if (width >= maxWidth) return Math.max(minGap, maxGap + {{gap.slope}} * (width - maxWidth));
            return minGap + (maxGap - minGap) * ((width - minWidth) / (maxWidth - minWidth));
        }

        function wordSpans(text) {
            return text.split(' ').map(word => '<span class="word">' + word + '</span>').join(' ');
        }

        function updateTestimonial(direction, isInit = false) {
            const count = testimonials.length;
            activeIndex = (activeIndex + direction + count) % count;
            if (!imageContainer) return;

            const gap = calculateGap(imageContainer.offsetWidth);
            const lift = gap * {{pose.lift_factor}};

            testimonials.forEach((testimonial, index) => {
                let img = imageContainer.querySelector('[data-index="' + index + '"]');
                if (!img) {
                    img = document.createElement('img');
                    img.src = testimonial.src;
                    img.alt = testimonial.name;
                    img.classList.add('circular-testimonials-image');
                    img.dataset.index = index;
                    imageContainer.appendChild(img);
                }

                const offset = (index - activeIndex + count) % count;
                const liftPercent = img.offsetHeight ? (lift / img.offsetHeight * 100) : 0;
                let zIndex = count;
                let scale = 1;
                let translateX = '0%';
                let translateY = '0%';
                let rotateY = 0;

                if (offset === 0) {
                    zIndex = count;
                } else if (offset === 1) {
                    zIndex = count - 1;
                    scale = {{pose.adjacent_scale}};
                    translateX = '{{pose.shift_percent}}%';
                    translateY = '-' + liftPercent + '%';
                    rotateY = -{{pose.rotation_deg}};
                } else if (offset === count - 1) {
                    zIndex = count - 1;
                    scale = {{pose.adjacent_scale}};
                    translateX = '-{{pose.shift_percent}}%';
                    translateY = '-' + liftPercent + '%';
                    rotateY = {{pose.rotation_deg}};
                } else {
                    scale = {{pose.behind_scale}};
                    zIndex = count - offset;
                }

                gsap.to(img, {
                    zIndex: zIndex,
                    opacity: 1,
                    scale: scale,
                    x: translateX,
                    y: translateY,
                    rotateY: rotateY,
                    duration: isInit ? 0 : 0.8,
                    ease: "power3.out"
                });
            });

            const current = testimonials[activeIndex];
            if (isInit) {
                nameElement.textContent = current.name;
                designationElement.textContent = current.designation;
                quoteElement.innerHTML = wordSpans(current.quote);
                animateWords();
            } else {
                gsap.to([nameElement, designationElement], {
                    opacity: 0, y: -20, duration: 0.3, ease: "power2.in", onComplete: () => {
                        nameElement.textContent = current.name;
                        designationElement.textContent = current.designation;
                        gsap.to([nameElement, designationElement], { opacity: 1, y: 0, duration: 0.3, ease: "power2.out" });
                    }
                });
                gsap.to(quoteElement, {
                    opacity: 0, y: -20, duration: 0.3, ease: "power2.in", onComplete: () => {
                        quoteElement.innerHTML = wordSpans(current.quote);
                        gsap.to(quoteElement, { opacity: 1, y: 0, duration: 0.3, ease: "power2.out" });
                        animateWords();
                    }
                });
            }
        }

        function animateWords() {
            if (!quoteElement) return;
            const words = quoteElement.querySelectorAll('.word');
            gsap.from(words, {
                opacity: 0,
                y: 10,
                stagger: {{stagger_seconds}},
                duration: 0.2,
                ease: "power2.out"
            });
        }

        function stopAutoplay() {
            if (window.{{interval_key}}) clearInterval(window.{{interval_key}});
            window.{{interval_key}} = undefined;
        }
{{#if autoplay}}
        function startAutoplay() {
            if (window.{{interval_key}}) clearInterval(window.{{interval_key}});
            window.{{interval_key}} = setInterval(() => updateTestimonial(1), {{period_ms}});
        }
{{/if}}

        prevButton.addEventListener('click', () => { updateTestimonial(-1); stopAutoplay(); });
        nextButton.addEventListener('click', () => { updateTestimonial(1); stopAutoplay(); });

        let resizeTimeout;
        if (window.circularTestimonialsResize) {
            window.removeEventListener('resize', window.circularTestimonialsResize);
        }
        window.circularTestimonialsResize = () => {
            updateTestimonial(0, true);
            clearTimeout(resizeTimeout);
            resizeTimeout = setTimeout(() => updateTestimonial(0, true), 1000);
        };
        window.addEventListener('resize', window.circularTestimonialsResize);

        updateTestimonial(0, true);
{{#if autoplay}}
        startAutoplay();
{{/if}}
"#;

/// Generator for the circular testimonials widget.
pub struct CircularTestimonialsGenerator {
    engine: TemplateEngine<'static>,
    options: GeneratorOptions,
}

impl CircularTestimonialsGenerator {
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

/// Read the fixed `quoteN`/`nameN`/`designationN`/`imageN` slots.
pub fn slot_testimonials(view: &SettingsView<'_>) -> Vec<Testimonial> {
    (1..=SLOT_COUNT)
        .map(|n| {
            Testimonial::new(
                n.to_string(),
                view.text(&format!("quote{n}")),
                view.text(&format!("name{n}")),
                view.text(&format!("designation{n}")),
                view.text(&format!("image{n}")),
            )
        })
        .collect()
}

impl WidgetGenerator for CircularTestimonialsGenerator {
    fn widget_id(&self) -> &'static str {
        CIRCULAR_TESTIMONIALS
    }

    fn credits(&self) -> &'static [Credit] {
        CREDITS
    }

    fn generate(&self, settings: &Settings) -> Result<Bundle> {
        let widget = find_widget(CIRCULAR_TESTIMONIALS)
            .ok_or_else(|| CodegenError::UnknownWidget(CIRCULAR_TESTIMONIALS.to_string()))?;
        let view = SettingsView::new(settings, widget);

        let testimonials = slot_testimonials(&view);
        let script_items: Vec<ScriptTestimonial<'_>> =
            testimonials.iter().map(ScriptTestimonial::from).collect();
        let script_data = ScriptData::new(&script_items, view.flag("autoplay"), &self.options)?;

        let markup = self.engine.render("markup", &MarkupData { prefix: CLASS_PREFIX })?;
        let stylesheet = self.engine.render("style", &TestimonialStyle::from_view(&view))?;
        let behavior_script = self.engine.render("script", &script_data)?;
        let library = ScriptLibrary::gsap(self.options.animation_library_url.as_str());

        let standalone_document = render_document(
            &self.engine,
            &DocumentParts {
                widget_id: CIRCULAR_TESTIMONIALS,
                markup: &markup,
                stylesheet: &stylesheet,
                behavior_script: &behavior_script,
                library: Some(&library),
            },
        )?;

        debug!(widget = CIRCULAR_TESTIMONIALS, autoplay = script_data.autoplay, "generated bundle");

        Ok(Bundle {
            markup,
            stylesheet,
            behavior_script,
            standalone_document,
            library: Some(library),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgetsmith_core::SettingValue;

    fn generator() -> CircularTestimonialsGenerator {
        CircularTestimonialsGenerator::new(GeneratorOptions::default()).unwrap()
    }

    fn defaults() -> Settings {
        find_widget(CIRCULAR_TESTIMONIALS).unwrap().default_settings()
    }

    #[test]
    fn test_markup_ids() {
        let bundle = generator().generate(&defaults()).unwrap();
        for id in ["image-container", "name", "designation", "quote", "prev-button", "next-button"] {
            assert!(bundle.markup.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
    }

    #[test]
    fn test_stylesheet_interpolates_settings() {
        let mut settings = defaults();
        settings.insert("arrowSize".into(), SettingValue::from(40));
        settings.insert("nameColor".into(), "#123456".into());
        let bundle = generator().generate(&settings).unwrap();

        assert!(bundle.stylesheet.contains("width: 40px;"));
        assert!(bundle.stylesheet.contains("color: #123456;"));
        assert!(bundle.stylesheet.contains("font-size: 15px;"));
        assert!(bundle.stylesheet.contains("background: transparent;"));
    }

    #[test]
    fn test_script_embeds_slots() {
        let mut settings = defaults();
        settings.insert("name2".into(), "Ada \"The Countess\"".into());
        let bundle = generator().generate(&settings).unwrap();

        assert!(bundle.behavior_script.contains(r#""name":"Ada \"The Countess\"""#));
        assert!(bundle.behavior_script.contains(r#""src":"https://images.unsplash.com/"#));
        assert!(bundle.behavior_script.contains("const minGap = 60;"));
        assert!(bundle.behavior_script.contains("stagger: 0.02,"));
    }

    #[test]
    fn test_autoplay_block_follows_setting() {
        let gen = generator();
        let on = gen.generate(&defaults()).unwrap();
        assert!(on.behavior_script.contains("window.autoplayInterval = setInterval(() => updateTestimonial(1), 5000);"));

        let mut settings = defaults();
        settings.insert("autoplay".into(), false.into());
        let off = gen.generate(&settings).unwrap();
        assert!(!off.behavior_script.contains("setInterval("));
        assert!(off.behavior_script.contains("function stopAutoplay()"));
    }

    #[test]
    fn test_requires_gsap() {
        let bundle = generator().generate(&defaults()).unwrap();
        let library = bundle.library.unwrap();
        assert_eq!(library.global, "gsap");
        assert!(bundle
            .standalone_document
            .contains(&format!("<script src=\"{}\"></script>", library.url)));
        assert!(bundle.standalone_document.contains("window.hasCircularTestimonialsScript = true;"));
    }

    #[test]
    fn test_slot_readers_fall_back_to_defaults() {
        let widget = find_widget(CIRCULAR_TESTIMONIALS).unwrap();
        let empty = Settings::new();
        let slots = slot_testimonials(&SettingsView::new(&empty, widget));
        assert_eq!(slots.len(), SLOT_COUNT);
        assert_eq!(slots[0].name, "Tamar Mendelson");
        assert_eq!(slots[2].designation, "Satisfied Customer");
    }

    #[test]
    fn test_credits() {
        let credits = generator().credits();
        assert_eq!(credits.len(), 4);
        assert_eq!(credits[0], ANIMATED_TESTIMONIALS);
        assert_eq!(credits[1].to_string(), "Photo by Ilya Pavlov on Unsplash");
    }
}
