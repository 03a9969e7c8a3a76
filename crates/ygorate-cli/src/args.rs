use crate::types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ygorate")]
#[command(about = "Browse and maintain Yu-Gi-Oh! card rating packs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root directory holding pack folders and reviews
    #[arg(long, default_value = "data", env = "YGORATE_DATA", global = true)]
    pub data_dir: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Override the card database API endpoint
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive catalog viewer
    Browse,

    /// Show one card with its remote details and review
    Card {
        /// Card passcode
        id: u64,

        /// Restrict the pool to one pack label
        #[arg(long)]
        pack: Option<String>,
    },

    /// List packs with card counts
    Packs,

    /// List cards, optionally restricted to one pack label
    List {
        #[arg(long)]
        pack: Option<String>,
    },

    /// Add every card of a pack's cardset that the local file is missing
    FillPack {
        /// Pack folder under the data root
        folder: String,

        /// Display name; required when the pack file does not exist yet
        #[arg(long)]
        pack_name: Option<String>,

        /// Rating assigned to newly added cards
        #[arg(long, default_value = "0")]
        rating: f32,

        /// Review text assigned to newly added cards
        #[arg(long, default_value = "")]
        review_text: String,

        #[arg(long)]
        dry_run: bool,
    },

    /// Resolve missing or placeholder passcodes by card name
    UpdateIds {
        #[arg(long)]
        dry_run: bool,

        /// Re-resolve every card, not just placeholders
        #[arg(long)]
        all: bool,

        /// Ids with fewer digits are treated as placeholders
        #[arg(long, default_value = "6")]
        min_digits: u32,

        /// Restrict the scan to one pack folder
        #[arg(long)]
        pack: Option<String>,
    },

    /// Print a card's passcode
    Passcode {
        /// Card name to look up
        name: String,

        /// Accept partial name matches
        #[arg(long)]
        fuzzy: bool,

        /// Search local pack files only
        #[arg(long)]
        local: bool,
    },
}
