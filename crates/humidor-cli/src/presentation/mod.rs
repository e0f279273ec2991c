//! # Presentation layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ] (themed)
//! ```
//!
//! View models hold raw data (numbers, ids, timestamps), never formatted
//! strings: `--format json` is an API and dumps them as they are. Views do
//! all of the formatting and take the colour palette as an argument.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod theme;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use theme::Palette;
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
