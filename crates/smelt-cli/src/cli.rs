use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "smelt",
    about = "Smelt — records encoded on an item/connection graph",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create contacts with related addresses and print them
    Demo(DemoArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Number of contacts to create
    #[arg(short = 'n', long, default_value = "1")]
    pub contacts: usize,
    #[arg(long, default_value = "Ryan")]
    pub first_name: String,
    /// Defaults to a fresh id per contact
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long, default_value = "44")]
    pub street_number: String,
    #[arg(long, default_value = "Junk Bot Dr.")]
    pub street_name: String,
    #[arg(long, default_value = "Large Soda")]
    pub city: String,
    #[arg(long, default_value = "CA")]
    pub state: String,
    #[arg(long, default_value = "09243")]
    pub zip: String,
    /// Delete the first contact before printing
    #[arg(long)]
    pub delete_first: bool,
    /// Also delete the related address when deleting
    #[arg(long, requires = "delete_first")]
    pub deep: bool,
    /// Print both backing tables after the contacts
    #[arg(long)]
    pub dump: bool,
}
