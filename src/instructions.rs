//! Server instruction generation
//!
//! Composes the instruction string sent to AI assistants when they connect,
//! based on which toolsets the deployment has enabled. The string teaches
//! the assistant how to select and sequence the GitHub tools effectively.

/// Base instruction with tool selection and context management guidance.
/// Always the first fragment of the composed string.
const BASE_INSTRUCTIONS: &str = r#"The GitHub MCP Server provides tools to interact with GitHub platform.

Tool selection guidance:
    1. Use 'list_*' tools for broad, simple retrieval and pagination of all items of a type (e.g., all issues, all PRs, all branches) with basic filtering.
    2. Use 'search_*' tools for targeted queries with specific criteria, keywords, or complex filters (e.g., issues with certain text, PRs by author, code containing functions).

Context management:
    1. Use pagination whenever possible with batches of 5-10 items.
    2. Use minimal_output parameter set to true if the full information is not needed to accomplish a task.

Tool usage guidance:
    1. For 'search_*' tools: Use separate 'sort' and 'order' parameters if available for sorting results - do not include 'sort:' syntax in query strings. Query strings should contain only search criteria (e.g., 'org:google language:python'), not sorting instructions."#;

/// Core instruction, included whenever the "context" toolset is enabled.
const CONTEXT_INSTRUCTIONS: &str =
    "Always call 'get_me' first to understand current user permissions and context.";

/// Per-toolset usage hints, keyed by toolset id. Adding a toolset is a data
/// edit here, not a control-flow change.
const TOOLSET_INSTRUCTIONS: &[(&str, &str)] = &[
    (
        "pull_requests",
        r#"## Pull Requests

PR review workflow: Always use 'pull_request_review_write' with method 'create' to create a pending review, then 'add_comment_to_pending_review' to add comments, and finally 'pull_request_review_write' with method 'submit_pending' to submit the review for complex reviews with line-specific comments."#,
    ),
    (
        "issues",
        r#"## Issues

Check 'list_issue_types' first for organizations to use proper issue types. Use 'search_issues' before creating new issues to avoid duplicates. Always set 'state_reason' when closing issues."#,
    ),
    (
        "discussions",
        r#"## Discussions

Use 'list_discussion_categories' to understand available categories before creating discussions. Filter by category for better organization."#,
    ),
    (
        "projects",
        r#"## Projects

Read Tools:
    - list_projects
    - get_project
    - list_project_fields
    - get_project_field
    - list_project_items
    - get_project_item
Write Tools:
    - add_project_item
    - update_project_item
    - delete_project_item

Field usage:
    - Call list_project_fields first to understand available fields and get IDs/types before filtering.
    - Use EXACT returned field names (case-insensitive match). Don't invent names or IDs.
    - Iteration synonyms (sprint/cycle/iteration) only if that field exists; map to the actual name (e.g. sprint:@current).
    - Only include filters for fields that exist and are relevant.

Pagination (mandatory):
    Forward (normal) flow:
    - Loop while pageInfo.hasNextPage=true using after=pageInfo.nextCursor.
    - Keep query, fields, per_page IDENTICAL on every page.
    Backward (rare) flow:
    - Use before=pageInfo.prevCursor only when explicitly navigating to a previous page.
    Parameters:
    - per_page: results per page (max 50). Choose a stable value; do not change mid-sequence.
    - after: forward cursor from prior response (pageInfo.nextCursor).
    - before: backward cursor from prior response (pageInfo.prevCursor); seldom needed.

Fields parameter:
    - Include field IDs on EVERY paginated list_project_items call if you need values. Omit -> title only.

Counting rules:
    - Count items array length after full pagination.
    - If multi-page: collect all pages, dedupe by item.id (fallback node_id) before totals.
    - Never count field objects, content, or nested arrays as separate items.
    - item.id = project item ID (for updates/deletes). item.content.id = underlying issue/PR ID.

Summary vs list:
    - Summaries ONLY if user uses verbs: analyze | summarize | summary | report | overview | insights.
    - Listing verbs (list/show/get/fetch/display/enumerate) -> enumerate + total.

Examples:
    - list_projects: "roadmap is:open"
    - list_project_items: state:open is:issue sprint:@current priority:high updated:>@today-7d

Self-check before returning:
    - Paginated fully
    - Dedupe by id/node_id
    - Correct IDs used
    - Field names valid
    - Summary only if requested.

Return COMPLETE data or state what's missing (e.g. pages skipped)."#,
    ),
];

/// Generate server instructions based on enabled toolsets.
///
/// Output order is fixed: base instructions first, then the core context
/// hint (if the "context" toolset is enabled, regardless of its position in
/// the input), then per-toolset hints in the order the toolsets were given.
/// Unknown toolset ids contribute nothing. The `DISABLE_INSTRUCTIONS`
/// environment variable is re-read on every call so it can be toggled
/// between calls without a restart.
pub fn generate_instructions(enabled_toolsets: &[String]) -> String {
    // For testing - allow disabling instructions entirely
    if instructions_disabled() {
        return String::new();
    }

    let mut instructions: Vec<&str> = Vec::new();

    // Core instruction - always included if context toolset enabled
    if enabled_toolsets.iter().any(|t| t == "context") {
        instructions.push(CONTEXT_INSTRUCTIONS);
    }

    // Individual toolset instructions, in input order
    for toolset in enabled_toolsets {
        if let Some(hint) = toolset_instructions(toolset) {
            instructions.push(hint);
        }
    }

    let mut all_instructions = vec![BASE_INSTRUCTIONS];
    all_instructions.extend(instructions);

    all_instructions.join(" ")
}

/// Look up the usage hint for a single toolset id.
///
/// Returns `None` for unknown ids and for ids without a hint; callers treat
/// both the same.
pub fn toolset_instructions(toolset: &str) -> Option<&'static str> {
    TOOLSET_INSTRUCTIONS
        .iter()
        .find(|(id, _)| *id == toolset)
        .map(|(_, text)| *text)
        .filter(|text| !text.is_empty())
}

/// True when the `DISABLE_INSTRUCTIONS` environment variable is the exact
/// literal "true". Any other value, or absence, means normal operation.
fn instructions_disabled() -> bool {
    std::env::var("DISABLE_INSTRUCTIONS").map_or(false, |v| v == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_toolsets_have_hints() {
        for id in ["pull_requests", "issues", "discussions", "projects"] {
            let hint = toolset_instructions(id);
            assert!(hint.is_some(), "missing hint for {}", id);
            assert!(hint.unwrap().starts_with("## "), "hint for {} has no header", id);
        }
    }

    #[test]
    fn unknown_toolset_has_no_hint() {
        assert_eq!(toolset_instructions("nonexistent"), None);
        assert_eq!(toolset_instructions(""), None);
    }

    #[test]
    fn context_is_not_in_the_hint_table() {
        // The context hint is driven by membership, not by table lookup
        assert_eq!(toolset_instructions("context"), None);
    }
}
