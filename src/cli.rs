//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};

/// GitHub MCP Server
#[derive(Parser, Debug)]
#[command(name = "github-mcp-server")]
#[command(about = "MCP server exposing GitHub platform toolsets to AI assistants")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the MCP server on stdio (for AI coding assistants)
    Serve(ServeArgs),

    /// Print the instruction string for a toolset selection
    #[command(visible_alias = "i")]
    Instructions(InstructionsArgs),

    /// List the known toolsets
    #[command(visible_alias = "t")]
    Toolsets(ToolsetsArgs),
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Comma-separated toolsets to enable, or "all"
    #[arg(long, env = "GITHUB_TOOLSETS", value_name = "IDS")]
    pub toolsets: Option<String>,
}

/// Arguments for the instructions command
#[derive(Args, Debug)]
pub struct InstructionsArgs {
    /// Comma-separated toolsets to enable, or "all"
    #[arg(long, env = "GITHUB_TOOLSETS", value_name = "IDS")]
    pub toolsets: Option<String>,
}

/// Arguments for the toolsets command
#[derive(Args, Debug)]
pub struct ToolsetsArgs {}

/// Output format for inspection commands
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default for terminal)
    #[default]
    Text,
    /// JSON - standard JSON output for machine parsing
    Json,
}
