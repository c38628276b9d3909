use clap::{Args, Parser, Subcommand};

use larder_core::{ItemId, ListId};

/// Top-level CLI parser for the `larder` binary.
#[derive(Debug, Parser)]
#[command(
    name = "larder",
    version,
    about = "Shopping-list sync for KitchenOwl-compatible servers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every shopping list with its tasks
    Lists,
    /// Poll on the configured interval and render after each refresh
    Watch,
    /// Add an item to a list
    Add(AddArgs),
    /// Mark an item completed (takes it off the list)
    Done(StatusArgs),
    /// Put a completed item back on the list
    Reopen(StatusArgs),
    /// Delete items permanently
    Rm(RmArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Shopping list id
    #[arg(short, long)]
    pub list: ListId,

    /// Item name
    pub summary: String,

    /// Optional description
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Shopping list id
    #[arg(short, long)]
    pub list: ListId,

    /// Item id
    #[arg(short, long)]
    pub item: ItemId,
}

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Shopping list id
    #[arg(short, long)]
    pub list: ListId,

    /// Item ids to delete
    #[arg(required = true)]
    pub items: Vec<ItemId>,
}
