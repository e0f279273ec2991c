use super::common::{CigarFieldArgs, CigarFilterArgs, HumidorFieldArgs, JournalFieldArgs};
use crate::types::{FileFormat, PanelArg};
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the data directory, config file and store")]
    Init {
        #[arg(long, help = "Owner recorded in a new config file")]
        user_id: Option<String>,
    },

    #[command(about = "Manage humidors")]
    Humidor {
        #[command(subcommand)]
        command: HumidorCommand,
    },

    #[command(about = "Manage cigars")]
    Cigar {
        #[command(subcommand)]
        command: CigarCommand,
    },

    #[command(about = "Record and review smoking sessions")]
    Journal {
        #[command(subcommand)]
        command: JournalCommand,
    },

    #[command(about = "Show the collection dashboard")]
    Dashboard {
        #[arg(long = "panel", help = "Show only these panels (repeatable)")]
        panels: Vec<PanelArg>,
    },

    #[command(about = "List the cigars behind a dashboard row")]
    Browse {
        #[arg(long)]
        panel: PanelArg,

        #[arg(long, help = "Row label as shown on the dashboard")]
        label: String,
    },

    #[command(about = "Write the collection to a file or stdout")]
    Export {
        #[arg(long = "to", default_value = "json")]
        file_format: FileFormat,

        #[arg(long, short = 'o', help = "Output file (default: stdout)")]
        output: Option<PathBuf>,
    },

    #[command(about = "Load a JSON collection document")]
    Import {
        file: PathBuf,

        #[arg(long, help = "Clear the collection before importing")]
        replace: bool,
    },

    #[command(about = "Show or change settings")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Store maintenance")]
    Store {
        #[command(subcommand)]
        command: StoreCommand,
    },
}

#[derive(Subcommand)]
pub enum HumidorCommand {
    Add {
        name: String,

        #[command(flatten)]
        fields: HumidorFieldArgs,
    },

    Edit {
        humidor: String,

        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: HumidorFieldArgs,
    },

    List,

    Show {
        humidor: String,
    },

    Remove {
        humidor: String,

        #[arg(long, help = "Also remove the cigars stored in it")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum CigarCommand {
    Add {
        #[arg(long)]
        humidor: String,

        #[command(flatten)]
        fields: CigarFieldArgs,
    },

    Edit {
        cigar: String,

        #[arg(long, help = "Move the cigar to another humidor")]
        move_to: Option<String>,

        #[command(flatten)]
        fields: CigarFieldArgs,
    },

    List {
        #[arg(long)]
        humidor: Option<String>,

        #[command(flatten)]
        filter: CigarFilterArgs,
    },

    Show {
        cigar: String,
    },

    #[command(about = "Change the quantity on hand (never below zero)")]
    Adjust {
        cigar: String,

        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },

    Remove {
        cigar: String,
    },
}

#[derive(Subcommand)]
pub enum JournalCommand {
    Add {
        cigar: String,

        #[command(flatten)]
        fields: JournalFieldArgs,

        #[arg(long, help = "Take one cigar out of stock")]
        from_stock: bool,
    },

    List {
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        search: Option<String>,
    },

    Show {
        entry: String,
    },

    Remove {
        entry: String,
    },

    Summary,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    Show,

    #[command(about = "Set theme, user_id, top_n, panels or other_scope")]
    Set { key: String, value: String },
}

#[derive(Subcommand)]
pub enum StoreCommand {
    Stats,
    Vacuum,
}
