use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Palette, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use humidor_runtime::ThemeName;
use is_terminal::IsTerminal;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub palette: Palette,
}

impl HandlerContext {
    /// Colours only apply to plain output on a terminal.
    pub fn new(format: OutputFormat, theme: ThemeName) -> Self {
        let palette = if format == OutputFormat::Json || !std::io::stdout().is_terminal() {
            Palette::plain()
        } else {
            Palette::for_theme(theme)
        };
        Self { format, palette }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Render a view model using the configured format and palette
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.is_json(), self.palette);
        renderer.render(view_model)
    }
}
