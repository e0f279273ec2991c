use humidor_runtime::ThemeName;
use owo_colors::{OwoColorize, Style};
use std::fmt::Display;

/// Colours for text output, picked from the configured theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    heading: Style,
    accent: Style,
    muted: Style,
    good: Style,
    warn: Style,
    command: Style,
    enabled: bool,
}

impl Palette {
    pub fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Classic => Self {
                heading: Style::new().bold().yellow(),
                accent: Style::new().green(),
                muted: Style::new().dimmed(),
                good: Style::new().green().bold(),
                warn: Style::new().red(),
                command: Style::new().cyan(),
                enabled: true,
            },
            ThemeName::Midnight => Self {
                heading: Style::new().bold().bright_blue(),
                accent: Style::new().bright_magenta(),
                muted: Style::new().bright_black(),
                good: Style::new().bright_cyan().bold(),
                warn: Style::new().bright_red(),
                command: Style::new().bright_cyan(),
                enabled: true,
            },
            ThemeName::Plain => Self::plain(),
        }
    }

    /// No styling at all; used when stdout is not a terminal.
    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            accent: Style::new(),
            muted: Style::new(),
            good: Style::new(),
            warn: Style::new(),
            command: Style::new(),
            enabled: false,
        }
    }

    pub fn heading(&self, text: impl Display) -> String {
        self.paint(self.heading, text)
    }

    pub fn accent(&self, text: impl Display) -> String {
        self.paint(self.accent, text)
    }

    pub fn muted(&self, text: impl Display) -> String {
        self.paint(self.muted, text)
    }

    pub fn good(&self, text: impl Display) -> String {
        self.paint(self.good, text)
    }

    pub fn warn(&self, text: impl Display) -> String {
        self.paint(self.warn, text)
    }

    pub fn command(&self, text: impl Display) -> String {
        self.paint(self.command, text)
    }

    fn paint(&self, style: Style, text: impl Display) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_adds_no_escape_codes() {
        let palette = Palette::plain();
        assert_eq!(palette.heading("Humidors"), "Humidors");
        assert_eq!(palette.warn(42), "42");
    }

    #[test]
    fn test_classic_palette_styles_text() {
        let palette = Palette::for_theme(ThemeName::Classic);
        let painted = palette.heading("Humidors");
        assert!(painted.contains("Humidors"));
        assert_ne!(painted, "Humidors");
    }
}
