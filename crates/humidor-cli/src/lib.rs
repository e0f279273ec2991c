// Humidor Hub CLI
//
// Handlers open the workspace, call one runtime operation and hand the result
// to a presenter. Presenters build serializable view models; the console
// renderer prints them as JSON or through a themed text view. Nothing below
// `presentation` touches the store.

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{
    CigarCommand, Cli, Commands, ConfigCommand, HumidorCommand, JournalCommand, StoreCommand,
};
pub use commands::run;
