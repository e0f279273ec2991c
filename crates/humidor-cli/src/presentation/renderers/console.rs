use anyhow::Result;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::Palette;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
    palette: Palette,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, palette: Palette) -> Self {
        Self { json_mode, palette }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), self.palette.heading(&badge.label));
            println!();
        }

        print!("{}", result.content.create_view(self.palette));

        if !result.suggestions.is_empty() {
            println!("\n{}", self.palette.heading("💡 Tips:"));
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", self.palette.command(cmd));
                }
                println!();
            }
        }

        Ok(())
    }
}
