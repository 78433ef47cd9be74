//! Delete path tool definition.
//!
//! A tool that deletes a file or directory within the sandbox. The sandbox
//! root and the allowed subdirectories themselves can never be deleted.

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

use crate::domains::files::{DeletedEntry, FileService};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the delete tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeletePathParams {
    /// Path to the file or directory to delete, relative to the sandbox root.
    pub path: String,
}

// ============================================================================
// Output Structure (JSON format for AI agents)
// ============================================================================

/// Result of a delete operation
#[derive(Debug, Serialize, JsonSchema)]
struct DeletePathResult {
    /// Path that was deleted
    path: String,
    /// Type of item deleted ("file" or "directory")
    item_type: String,
    /// Whether the operation succeeded
    success: bool,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Delete path tool - deletes a file or directory within the sandbox.
pub struct DeletePathTool;

impl DeletePathTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_path";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a file or directory within the allowed subdirectories. Directories are removed recursively.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = %params.path))]
    pub fn execute(params: &DeletePathParams, files: &FileService) -> CallToolResult {
        info!("Delete tool called for '{}'", params.path);

        let deleted = match files.delete_path(&params.path) {
            Ok(deleted) => deleted,
            Err(e) => {
                warn!("Delete failed: {}", e);
                return CallToolResult::error(vec![Content::text(e.to_string())]);
            }
        };

        let summary = match deleted {
            DeletedEntry::Directory => format!(
                "Successfully deleted directory '{}' and all its contents",
                params.path
            ),
            DeletedEntry::File => format!("Successfully deleted file '{}'", params.path),
        };

        let result = DeletePathResult {
            path: params.path.clone(),
            item_type: deleted.label().to_string(),
            success: true,
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
            input_schema: schema_for_type::<DeletePathParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<DeletePathResult>().into()),
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
                let params: DeletePathParams =
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
    fn test_delete_file() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);
        fs::write(temp.path().join("docs/a.txt"), "x").unwrap();

        let params = DeletePathParams {
            path: "docs/a.txt".to_string(),
        };
        let result = DeletePathTool::execute(&params, &files);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(!temp.path().join("docs/a.txt").exists());

        let structured = result.structured_content.unwrap();
        assert_eq!(structured["item_type"], "file");
        assert_eq!(structured["success"], true);
    }

    #[test]
    fn test_delete_directory_recursively() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);
        fs::create_dir_all(temp.path().join("docs/sub/inner")).unwrap();
        fs::write(temp.path().join("docs/sub/inner/file.txt"), "x").unwrap();

        let params = DeletePathParams {
            path: "docs/sub".to_string(),
        };
        let result = DeletePathTool::execute(&params, &files);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert!(!temp.path().join("docs/sub").exists());

        let structured = result.structured_content.as_ref().unwrap();
        assert_eq!(structured["item_type"], "directory");
        assert!(result_text(&result).contains("all its contents"));
    }

    #[test]
    fn test_delete_protected_subdirectory() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);

        let params = DeletePathParams {
            path: "docs".to_string(),
        };
        let result = DeletePathTool::execute(&params, &files);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("not allowed"));
        assert!(temp.path().join("docs").exists());
    }

    #[test]
    fn test_delete_root_is_rejected() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);

        let params = DeletePathParams {
            path: ".".to_string(),
        };
        let result = DeletePathTool::execute(&params, &files);
        assert!(result.is_error.unwrap_or(false));
        assert!(temp.path().exists());
    }

    #[test]
    fn test_delete_missing_path() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);

        let params = DeletePathParams {
            path: "docs/absent.txt".to_string(),
        };
        let result = DeletePathTool::execute(&params, &files);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("does not exist"));
    }
}
