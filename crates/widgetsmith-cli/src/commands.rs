//! Subcommand implementations. Each returns the text to print.

use anyhow::{anyhow, Context, Result};
use tracing::info;
use widgetsmith_codegen::{GeneratorOptions, GeneratorRegistry};
use widgetsmith_core::{find_widget, widgets, WidgetConfig};
use widgetsmith_editor::labels::humanize;
use widgetsmith_editor::ConfigFile;

fn widget(id: &str) -> Result<&'static WidgetConfig> {
    find_widget(id).ok_or_else(|| {
        let known: Vec<_> = widgets().iter().map(|w| w.id).collect();
        anyhow!("unknown widget '{id}' (known: {})", known.join(", "))
    })
}

pub(crate) fn list() -> String {
    widgets()
        .iter()
        .map(|w| format!("{}\t{}\t{}", w.id, w.icon().as_str(), humanize(w.name_key)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn defaults(widget_id: &str) -> Result<String> {
    let widget = widget(widget_id)?;
    let file = ConfigFile::new(widget.id, widget.default_settings());
    Ok(file.to_json()?)
}

pub(crate) fn render(config_text: &str, options: GeneratorOptions) -> Result<String> {
    let file: ConfigFile = serde_json::from_str(config_text).context("invalid config file")?;
    let widget = widget(&file.component_id)?;

    let registry = GeneratorRegistry::with_options(options);
    let bundle = registry
        .try_generate(widget.id, &file.settings)
        .with_context(|| format!("failed to generate {}", widget.id))?;
    info!(widget = widget.id, bytes = bundle.standalone_document.len(), "rendered document");
    Ok(bundle.standalone_document)
}

pub(crate) fn credits(widget_id: &str) -> Result<String> {
    let widget = widget(widget_id)?;
    let registry = GeneratorRegistry::new();
    Ok(registry
        .credits(widget.id)
        .iter()
        .map(|c| format!("{c} <{}>", c.work.url))
        .collect::<Vec<_>>()
        .join("\n"))
}
