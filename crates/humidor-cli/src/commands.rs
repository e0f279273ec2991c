use super::args::hints::cmd;
use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::types::OutputFormat;
use anyhow::Result;
use humidor_runtime::{CONFIG_FILE, DATABASE_FILE, HumidorHub, resolve_workspace_path};
use std::path::{Path, PathBuf};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let format = cli.format;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Init { user_id } => handlers::init::handle(&data_dir, user_id, format),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&data_dir, format),
            ConfigCommand::Set { key, value } => {
                handlers::config::set(&data_dir, &key, &value, format)
            }
        },

        Commands::Humidor { command } => {
            let (hub, ctx) = open(data_dir, format)?;
            handlers::humidor::handle(&hub, command, &ctx)
        }
        Commands::Cigar { command } => {
            let (hub, ctx) = open(data_dir, format)?;
            handlers::cigar::handle(&hub, command, &ctx)
        }
        Commands::Journal { command } => {
            let (hub, ctx) = open(data_dir, format)?;
            handlers::journal::handle(&hub, command, &ctx)
        }
        Commands::Dashboard { panels } => {
            let (hub, ctx) = open(data_dir, format)?;
            handlers::dashboard::handle(&hub, panels, &ctx)
        }
        Commands::Browse { panel, label } => {
            let (hub, ctx) = open(data_dir, format)?;
            handlers::dashboard::browse(&hub, panel, label, &ctx)
        }
        Commands::Export {
            file_format,
            output,
        } => {
            let (hub, ctx) = open(data_dir, format)?;
            handlers::transfer::export(&hub, file_format, output, &ctx)
        }
        Commands::Import { file, replace } => {
            let (hub, ctx) = open(data_dir, format)?;
            handlers::transfer::import(&hub, &file, replace, &ctx)
        }
        Commands::Store { command } => {
            let (hub, ctx) = open(data_dir, format)?;
            handlers::store::handle(&hub, command, &ctx)
        }
    }
}

/// Open the collection and pick colours from its config.
fn open(data_dir: PathBuf, format: OutputFormat) -> Result<(HumidorHub, HandlerContext)> {
    let hub = HumidorHub::open(data_dir)?;
    let ctx = HandlerContext::new(format, hub.config().theme);
    Ok((hub, ctx))
}

fn show_guidance(data_dir: &Path) {
    let ready = data_dir.join(CONFIG_FILE).exists() && data_dir.join(DATABASE_FILE).exists();

    println!("humidor - track humidors, cigars and tasting notes\n");

    if !ready {
        println!("Get started:");
        println!("  {}\n", cmd::INIT);
        println!("Then add a humidor or import an existing collection:");
        println!("  {}", cmd::HUMIDOR_ADD);
        println!("  {}", cmd::IMPORT);
    } else {
        println!("Data directory: {}\n", data_dir.display());
        println!("Common commands:");
        println!("  {}", cmd::DASHBOARD);
        println!("  {}", cmd::HUMIDOR_LIST);
        println!("  {}", cmd::CIGAR_LIST);
        println!("  {}", cmd::JOURNAL_LIST);
    }

    println!("\nRun 'humidor --help' for all commands.");
}
