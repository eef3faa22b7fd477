//! github-mcp-server CLI entry point

use std::process::ExitCode;

use clap::Parser;

use github_mcp_server::commands::{run_instructions, run_serve, run_toolsets};
use github_mcp_server::{Cli, Commands};

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> github_mcp_server::Result<String> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Serve(args) => run_serve(args),
        Commands::Instructions(args) => run_instructions(args, cli.format),
        Commands::Toolsets(args) => run_toolsets(args, cli.format),
    }
}
