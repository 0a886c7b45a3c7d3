use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hp2cisco")]
#[command(about = "Convert HP/Aruba switch configurations to Cisco IOS syntax")]
pub struct Cli {
    /// Log parser decisions to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Translate one HP/Aruba config into Cisco IOS configuration.
    Convert(ConvertArgs),
    /// Show the parsed network model and resolved port roles.
    Inspect(InspectArgs),
    /// List the embedded render profiles.
    Profiles,
}

#[derive(clap::Args, Debug)]
pub struct ProfileArgs {
    /// Embedded render profile name (see `hp2cisco profiles`).
    #[arg(long, conflicts_with = "profile_file")]
    pub profile: Option<String>,
    /// Render profile TOML file.
    #[arg(long, conflicts_with = "profile")]
    pub profile_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Source config file, or `-` for stdin.
    pub input: PathBuf,
    /// Output file path. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[command(flatten)]
    pub profile: ProfileArgs,
    /// Write output even when the source contains no VLAN data.
    #[arg(long)]
    pub allow_empty: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Source config file, or `-` for stdin.
    pub input: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[command(flatten)]
    pub profile: ProfileArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
