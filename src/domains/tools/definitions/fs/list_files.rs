//! List files tool definition.
//!
//! A tool that lists the regular files in a sandboxed directory.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::files::FileService;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list files tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListFilesParams {
    /// Directory to list, relative to the sandbox root.
    pub directory: String,
}

// ============================================================================
// Output Structure (JSON format for AI agents)
// ============================================================================

/// Result of a list operation
#[derive(Debug, Serialize, JsonSchema)]
struct ListFilesResult {
    /// Directory that was listed
    directory: String,
    /// Names of the regular files directly inside it, sorted
    files: Vec<String>,
    /// Number of files found
    count: usize,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List files tool - lists the regular files in an allowed directory.
pub struct ListFilesTool;

impl ListFilesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_files";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List the files in a directory within the allowed subdirectories. Subdirectories are excluded from the listing.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(directory = %params.directory))]
    pub fn execute(params: &ListFilesParams, files: &FileService) -> CallToolResult {
        info!("List files tool called for '{}'", params.directory);

        let names = match files.list_files(&params.directory) {
            Ok(names) => names,
            Err(e) => {
                warn!("List files failed: {}", e);
                return CallToolResult::error(vec![Content::text(e.to_string())]);
            }
        };

        let summary = if names.is_empty() {
            format!("No files in '{}'", params.directory)
        } else {
            format!("Files in '{}':\n{}", params.directory, names.join("\n"))
        };

        let result = ListFilesResult {
            directory: params.directory.clone(),
            count: names.len(),
            files: names,
        };

        CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(serde_json::to_value(&result).unwrap()),
            is_error: Some(false),
            meta: None,
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ListFilesParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<ListFilesResult>().into()),
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(files: Arc<FileService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let files = files.clone();
            async move {
                let params: ListFilesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &files))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SandboxConfig;
    use std::fs;
    use tempfile::TempDir;

    fn sandbox(temp: &TempDir) -> FileService {
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        FileService::new(&SandboxConfig {
            root_dir: temp.path().to_path_buf(),
            allowed_subdirs: vec!["docs".to_string()],
        })
    }

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_list_files_execute() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);
        fs::write(temp.path().join("docs/a.txt"), "x").unwrap();
        fs::write(temp.path().join("docs/b.txt"), "x").unwrap();
        fs::create_dir(temp.path().join("docs/sub")).unwrap();

        let params = ListFilesParams {
            directory: "docs".to_string(),
        };
        let result = ListFilesTool::execute(&params, &files);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = result_text(&result);
        assert!(text.contains("a.txt"));
        assert!(text.contains("b.txt"));
        assert!(!text.contains("sub"));

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["count"], 2);
        assert_eq!(structured["files"][0], "a.txt");
    }

    #[test]
    fn test_list_files_missing_directory() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);

        let params = ListFilesParams {
            directory: "docs/absent".to_string(),
        };
        let result = ListFilesTool::execute(&params, &files);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("does not exist"));
    }

    #[test]
    fn test_list_files_absolute_path_rejected() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);

        let params = ListFilesParams {
            directory: "/etc".to_string(),
        };
        let result = ListFilesTool::execute(&params, &files);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("cannot be absolute"));
    }

    #[test]
    fn test_list_files_outside_allow_list() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);
        fs::create_dir(temp.path().join("private")).unwrap();

        let params = ListFilesParams {
            directory: "private".to_string(),
        };
        let result = ListFilesTool::execute(&params, &files);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("not allowed"));
    }
}
