//! Toolset catalog
//!
//! Toolsets are named groups of related GitHub capabilities that a deployment
//! enables together. This module holds the catalog of known toolsets, the
//! default-enabled set, and resolution of the comma-separated `--toolsets`
//! spec into a list of toolset ids.

use serde::Serialize;

/// A named group of related tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toolset {
    /// Identifier used in `--toolsets` and in instruction lookup
    pub id: &'static str,
    /// One-line description shown by the `toolsets` command
    pub description: &'static str,
}

/// All known toolsets
pub const ALL_TOOLSETS: &[Toolset] = &[
    Toolset {
        id: "context",
        description: "Current user and GitHub context the server is operating in",
    },
    Toolset {
        id: "repos",
        description: "Repository contents, branches, commits, and file operations",
    },
    Toolset {
        id: "issues",
        description: "Issue creation, search, updates, and comments",
    },
    Toolset {
        id: "pull_requests",
        description: "Pull request operations, reviews, and merges",
    },
    Toolset {
        id: "discussions",
        description: "GitHub Discussions and discussion comments",
    },
    Toolset {
        id: "projects",
        description: "GitHub Projects fields and items",
    },
    Toolset {
        id: "actions",
        description: "GitHub Actions workflows and workflow runs",
    },
    Toolset {
        id: "notifications",
        description: "Notification listing and management",
    },
    Toolset {
        id: "users",
        description: "User lookup and search",
    },
    Toolset {
        id: "orgs",
        description: "Organization lookup and search",
    },
];

/// Toolsets enabled when no `--toolsets` spec is given
pub const DEFAULT_TOOLSETS: &[&str] = &["context", "repos", "issues", "pull_requests", "users"];

/// Resolve a comma-separated toolset spec into a list of toolset ids.
///
/// The literal "all" expands to the full catalog. Ids are not validated
/// here: unknown ids are passed through and simply contribute no tools or
/// instructions downstream.
pub fn resolve(spec: &str) -> Vec<String> {
    if spec.trim() == "all" {
        return ALL_TOOLSETS.iter().map(|t| t.id.to_string()).collect();
    }

    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The default toolset ids as owned strings
pub fn default_ids() -> Vec<String> {
    DEFAULT_TOOLSETS.iter().map(|s| s.to_string()).collect()
}
