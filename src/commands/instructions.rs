//! Instructions command handler
//!
//! Prints the instruction string the server would advertise for a given
//! toolset selection. Useful for inspecting what connecting assistants will
//! see without starting the server.

use serde::Serialize;

use crate::cli::{InstructionsArgs, OutputFormat};
use crate::instructions::generate_instructions;
use crate::toolsets;

#[derive(Serialize)]
struct InstructionsOutput {
    enabled_toolsets: Vec<String>,
    instructions: String,
}

/// Run the instructions command
pub fn run_instructions(args: &InstructionsArgs, format: OutputFormat) -> crate::Result<String> {
    let enabled = match &args.toolsets {
        Some(spec) => toolsets::resolve(spec),
        None => toolsets::default_ids(),
    };

    let instructions = generate_instructions(&enabled);

    match format {
        OutputFormat::Json => {
            let output = InstructionsOutput {
                enabled_toolsets: enabled,
                instructions,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Text => Ok(instructions),
    }
}
