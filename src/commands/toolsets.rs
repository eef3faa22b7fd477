//! Toolsets command handler
//!
//! Lists the toolset catalog with descriptions, marking the default-enabled
//! set.

use crate::cli::{OutputFormat, ToolsetsArgs};
use crate::toolsets::{ALL_TOOLSETS, DEFAULT_TOOLSETS};

/// Run the toolsets command
pub fn run_toolsets(_args: &ToolsetsArgs, format: OutputFormat) -> crate::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(ALL_TOOLSETS)?),
        OutputFormat::Text => {
            let mut output = String::from("Available toolsets:\n\n");
            for toolset in ALL_TOOLSETS {
                let marker = if DEFAULT_TOOLSETS.contains(&toolset.id) {
                    " (default)"
                } else {
                    ""
                };
                output.push_str(&format!(
                    "  {:<15} {}{}\n",
                    toolset.id, toolset.description, marker
                ));
            }
            Ok(output)
        }
    }
}
