//! MCP Server command handler
//!
//! Runs the github-mcp-server MCP server using stdio transport. Logging goes
//! to stderr; stdout must stay pure JSON-RPC.

use crate::cli::ServeArgs;
use crate::error::ServerError;
use crate::mcp_server::GitHubMcpServer;
use crate::toolsets;

use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing_subscriber::{self, EnvFilter};

/// Run the MCP server
///
/// Creates a tokio runtime and runs the async MCP server until the client
/// disconnects.
pub fn run_serve(args: &ServeArgs) -> crate::Result<String> {
    let runtime = tokio::runtime::Runtime::new().map_err(|e| ServerError::ConfigError {
        message: format!("Failed to create tokio runtime: {}", e),
    })?;

    runtime.block_on(async { run_serve_async(args).await })?;

    // Server exits cleanly - no output needed
    Ok(String::new())
}

/// Async implementation of the MCP server
async fn run_serve_async(args: &ServeArgs) -> crate::Result<()> {
    // Initialize tracing for debugging (logs to stderr)
    // Note: This may fail if already initialized, which is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("github_mcp_server=info".parse().unwrap())
                .add_directive("rmcp=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let enabled = match &args.toolsets {
        Some(spec) => toolsets::resolve(spec),
        None => toolsets::default_ids(),
    };

    tracing::info!(
        "Starting github-mcp-server v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Enabled toolsets: {}", enabled.join(", "));

    let server = GitHubMcpServer::new(enabled);

    let service = server
        .serve(stdio())
        .await
        .map_err(|e| ServerError::TransportError {
            message: format!("Failed to start MCP server: {}", e),
        })?;

    service.waiting().await.map_err(|e| ServerError::TransportError {
        message: format!("MCP server error: {}", e),
    })?;

    Ok(())
}
