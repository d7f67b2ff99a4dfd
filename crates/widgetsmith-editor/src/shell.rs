//! The editor session: one widget being configured and previewed.

use tracing::{debug, info, warn};
use widgetsmith_codegen::{Bundle, Credit, GeneratorRegistry};
use widgetsmith_core::{
    find_widget, parse_background, Background, FieldDescriptor, FieldKind, SettingValue, Settings,
    SettingsView, Testimonial, TestimonialField, WidgetConfig, WidgetError,
};
use widgetsmith_preview::{PreviewHost, PreviewRuntime};

use crate::collaborators::{AnalyticsEvent, Collaborators, NotificationKind, Translator};
use crate::config_file::{ConfigFile, ExportedFile};
use crate::error::Result;
use crate::{labels, testimonials};

/// Editing state for one widget.
///
/// Owns the settings map. Every change regenerates the bundle and remounts
/// the preview.
pub struct EditorSession<H: PreviewHost> {
    widget: &'static WidgetConfig,
    settings: Settings,
    language: String,
    preview_key: u64,
    registry: GeneratorRegistry,
    preview: PreviewRuntime<H>,
    collaborators: Collaborators,
}

impl<H: PreviewHost> EditorSession<H> {
    /// Open `widget_id` with default settings and mount its preview.
    pub fn open(widget_id: &str, host: H, collaborators: Collaborators) -> Result<Self> {
        Self::with_registry(widget_id, GeneratorRegistry::new(), PreviewRuntime::new(host), collaborators)
    }

    pub fn with_registry(
        widget_id: &str,
        registry: GeneratorRegistry,
        preview: PreviewRuntime<H>,
        collaborators: Collaborators,
    ) -> Result<Self> {
        let widget =
            find_widget(widget_id).ok_or_else(|| WidgetError::UnknownWidget(widget_id.to_string()))?;
        let mut session = Self {
            widget,
            settings: widget.default_settings(),
            language: "en".to_string(),
            preview_key: 0,
            registry,
            preview,
            collaborators,
        };
        session.track(AnalyticsEvent::SelectComponent, &[]);
        session.reload_preview()?;
        Ok(session)
    }

    pub fn widget(&self) -> &'static WidgetConfig {
        self.widget
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> SettingsView<'_> {
        SettingsView::new(&self.settings, self.widget)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Incremented on every remount.
    pub fn preview_key(&self) -> u64 {
        self.preview_key
    }

    pub fn preview(&self) -> &PreviewRuntime<H> {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut PreviewRuntime<H> {
        &mut self.preview
    }

    /// The bundle for the current settings.
    pub fn bundle(&self) -> Bundle {
        self.registry.generate(self.widget.id, &self.settings)
    }

    pub fn credits(&self) -> &'static [Credit] {
        self.registry.credits(self.widget.id)
    }

    fn descriptor(&self, field_id: &str) -> std::result::Result<&'static FieldDescriptor, WidgetError> {
        self.widget.field(field_id).ok_or_else(|| WidgetError::UnknownField {
            widget: self.widget.id.to_string(),
            field: field_id.to_string(),
        })
    }

    /// Set a field and remount. The value must have the field's type;
    /// numbers outside a slider's bounds are stored as given.
    pub fn set_field(&mut self, field_id: &str, value: impl Into<SettingValue>) -> Result<()> {
        let value = value.into();
        let field = self.descriptor(field_id)?;
        if !field.accepts(&value) {
            return Err(WidgetError::TypeMismatch {
                field: field_id.to_string(),
                expected: field.kind.value_type(),
                found: value.type_name(),
            }
            .into());
        }
        if let (FieldKind::Slider { .. }, Some(n)) = (&field.kind, value.as_f64()) {
            if !field.in_bounds(n) {
                debug!(field = field_id, value = n, "slider value out of bounds");
            }
        }

        self.settings.insert(field_id.to_string(), value);
        self.reload_preview()
    }

    /// Regenerate the bundle and remount the preview.
    pub fn reload_preview(&mut self) -> Result<()> {
        self.preview_key += 1;
        let bundle = self.bundle();
        let state = self.preview.mount(bundle)?;
        debug!(widget = self.widget.id, key = self.preview_key, ?state, "preview reloaded");
        Ok(())
    }

    /// Switch the UI language and remount.
    pub fn set_language(&mut self, language: impl Into<String>) -> Result<()> {
        self.language = language.into();
        let language = self.language.clone();
        self.collaborators
            .analytics
            .emit(AnalyticsEvent::LanguageChange, &[("language", &language)]);
        self.reload_preview()
    }

    /// Swap the string table, e.g. after loading a new language.
    pub fn set_translator(&mut self, translator: Box<dyn Translator>) {
        self.collaborators.translator = translator;
    }

    fn testimonial_field(&self) -> std::result::Result<&'static str, WidgetError> {
        self.widget
            .fields
            .iter()
            .find(|f| matches!(f.kind, FieldKind::TestimonialList))
            .map(|f| f.id.as_str())
            .ok_or_else(|| WidgetError::NotATestimonialList {
                field: self.widget.id.to_string(),
            })
    }

    /// The editable testimonial list, materialised from the default when the
    /// settings do not hold one.
    fn testimonial_list(&mut self) -> std::result::Result<&mut Vec<Testimonial>, WidgetError> {
        let field_id = self.testimonial_field()?;
        let current = self.view().testimonials(field_id).to_vec();
        let slot = self
            .settings
            .entry(field_id.to_string())
            .or_insert_with(|| SettingValue::Testimonials(current.clone()));
        if slot.as_testimonials().is_none() {
            *slot = SettingValue::Testimonials(current);
        }
        slot.as_testimonials_mut()
            .ok_or_else(|| WidgetError::NotATestimonialList {
                field: field_id.to_string(),
            })
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        match self.testimonial_field() {
            Ok(field_id) => self.view().testimonials(field_id),
            Err(_) => &[],
        }
    }

    /// Append a placeholder testimonial. Returns its id.
    pub fn add_testimonial(&mut self) -> Result<String> {
        let id = testimonials::add(self.testimonial_list()?).id.clone();
        self.reload_preview()?;
        Ok(id)
    }

    /// Remove the last testimonial, if any.
    pub fn remove_last_testimonial(&mut self) -> Result<Option<Testimonial>> {
        let removed = testimonials::remove_last(self.testimonial_list()?);
        self.reload_preview()?;
        Ok(removed)
    }

    /// Edit one field of a testimonial. Returns whether `id` was found.
    pub fn update_testimonial(&mut self, id: &str, field: TestimonialField, value: &str) -> Result<bool> {
        let found = testimonials::update(self.testimonial_list()?, id, field, value);
        if found {
            self.reload_preview()?;
        }
        Ok(found)
    }

    /// Current value of a background field.
    pub fn background(&self, field_id: &str) -> Result<Background> {
        self.background_field(field_id)?;
        Ok(parse_background(self.view().text(field_id)))
    }

    pub fn set_background(&mut self, field_id: &str, background: &Background) -> Result<()> {
        self.background_field(field_id)?;
        self.set_field(field_id, background.to_css())
    }

    fn background_field(&self, field_id: &str) -> Result<()> {
        let field = self.descriptor(field_id)?;
        if field.kind != FieldKind::Background {
            return Err(WidgetError::TypeMismatch {
                field: field_id.to_string(),
                expected: FieldKind::Background.value_type(),
                found: field.kind.value_type(),
            }
            .into());
        }
        Ok(())
    }

    /// The settings as a downloadable JSON file.
    pub fn export_config(&self) -> Result<ExportedFile> {
        self.track(AnalyticsEvent::ExportConfig, &[]);
        let file = ConfigFile::new(self.widget.id, self.settings.clone());
        let exported = ExportedFile::json(file.file_name(), file.to_json()?);
        info!(widget = self.widget.id, file = %exported.file_name, "exported config");
        Ok(exported)
    }

    /// Replace the settings with an exported config. All or nothing: on any
    /// failure the settings are untouched and the user is notified.
    pub fn import_config(&mut self, text: &str) -> Result<()> {
        let title = self.text("import_config", "Import Config");
        let imported = match ConfigFile::parse_for(text, self.widget.id) {
            Ok(file) => {
                let previous = std::mem::replace(&mut self.settings, file.settings);
                let reloaded = self.reload_preview();
                if reloaded.is_err() {
                    self.settings = previous;
                }
                reloaded
            }
            Err(err) => Err(err.into()),
        };

        if let Err(err) = imported {
            warn!(widget = self.widget.id, error = %err, "config import rejected");
            self.track(AnalyticsEvent::ImportConfig, &[("status", "error")]);
            let message = self.text("config_import_error", "Error importing configuration. Invalid file.");
            self.collaborators
                .notifier
                .notify(NotificationKind::Error, &title, &message);
            return Err(err);
        }

        info!(widget = self.widget.id, "imported config");
        self.track(AnalyticsEvent::ImportConfig, &[("status", "success")]);
        let message = self.text("config_imported_successfully", "Configuration imported successfully!");
        self.collaborators
            .notifier
            .notify(NotificationKind::Success, &title, &message);
        Ok(())
    }

    /// The standalone HTML document as a downloadable file.
    pub fn export_code(&self) -> ExportedFile {
        let bundle = self.bundle();
        self.track(AnalyticsEvent::ExportCode, &[]);
        info!(widget = self.widget.id, "exported code");
        ExportedFile::html(format!("{}.html", self.widget.id), bundle.standalone_document)
    }

    pub fn field_label(&self, field: &FieldDescriptor) -> String {
        labels::field_label(self.collaborators.translator.as_ref(), field)
    }

    pub fn testimonial_label(&self, index: usize, field: TestimonialField) -> String {
        labels::testimonial_label(self.collaborators.translator.as_ref(), index, field)
    }

    pub fn widget_name(&self) -> String {
        let key = self.widget.name_key;
        self.collaborators
            .translator
            .resolve(key, &[])
            .unwrap_or_else(|| labels::humanize(key))
    }

    /// Tear the preview down.
    pub fn unmount(&mut self) -> Result<()> {
        self.preview.unmount()?;
        Ok(())
    }

    fn text(&self, key: &str, fallback: &str) -> String {
        labels::text_or(self.collaborators.translator.as_ref(), key, fallback)
    }

    fn track(&self, event: AnalyticsEvent, extra: &[(&str, &str)]) {
        let mut params = vec![("component_id", self.widget.id), ("language", self.language.as_str())];
        params.extend_from_slice(extra);
        self.collaborators.analytics.emit(event, &params);
    }
}
