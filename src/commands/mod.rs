//! Command modules for the github-mcp-server CLI
//!
//! Each command module implements a single top-level command:
//! - `serve` - Run the MCP server on stdio
//! - `instructions` - Print the composed instruction string
//! - `toolsets` - List the toolset catalog
//!
//! Command handlers take their respective `Args` struct from `cli.rs` plus
//! the output format, and return the text for `main` to print.

pub mod instructions;
pub mod serve;
pub mod toolsets;

pub use instructions::run_instructions;
pub use serve::run_serve;
pub use toolsets::run_toolsets;
