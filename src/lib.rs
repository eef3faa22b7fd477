//! GitHub MCP Server
//!
//! An MCP (Model Context Protocol) server exposing GitHub platform toolsets
//! to AI assistants. The instruction layer composes the guidance string sent
//! to connecting clients: a fixed base policy, a context hint when the
//! "context" toolset is enabled, and per-toolset usage hints for the
//! toolsets the deployment has turned on.
//!
//! # Example
//!
//! ```
//! use github_mcp_server::generate_instructions;
//!
//! let enabled = vec!["context".to_string(), "issues".to_string()];
//! let instructions = generate_instructions(&enabled);
//! assert!(instructions.contains("get_me"));
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod instructions;
pub mod mcp_server;
pub mod toolsets;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use error::{Result, ServerError};
pub use instructions::{generate_instructions, toolset_instructions};
pub use mcp_server::GitHubMcpServer;
pub use toolsets::{default_ids, resolve, Toolset, ALL_TOOLSETS, DEFAULT_TOOLSETS};
