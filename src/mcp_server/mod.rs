//! MCP Server for GitHub platform toolsets
//!
//! This module provides the MCP (Model Context Protocol) server handler. Its
//! main job at the instruction layer is advertising server capabilities and
//! the composed instruction string to connecting clients.

use rmcp::{model::*, ServerHandler};

use crate::instructions::generate_instructions;

/// MCP server handler carrying the enabled toolset configuration
#[derive(Clone)]
pub struct GitHubMcpServer {
    /// Toolset ids enabled for this deployment, in configuration order
    enabled_toolsets: Vec<String>,
}

impl GitHubMcpServer {
    /// Create a server handler for the given toolset selection
    pub fn new(enabled_toolsets: Vec<String>) -> Self {
        Self { enabled_toolsets }
    }

    /// The toolset ids this server was configured with
    pub fn enabled_toolsets(&self) -> &[String] {
        &self.enabled_toolsets
    }
}

impl ServerHandler for GitHubMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "github-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("GitHub MCP Server".to_string()),
                website_url: None,
                icons: None,
            },
            // Recomputed on every call so DISABLE_INSTRUCTIONS is observed
            // fresh; the string is forwarded verbatim, including the empty
            // string when instructions are disabled.
            instructions: Some(generate_instructions(&self.enabled_toolsets)),
        }
    }
}
