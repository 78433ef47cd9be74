//! Read file tool definition.
//!
//! A tool that returns the full text content of a sandboxed file.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::files::FileService;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the read file tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReadFileParams {
    /// Path of the file to read, relative to the sandbox root.
    pub file_path: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Read file tool - returns the content of a file within the sandbox.
pub struct ReadFileTool;

impl ReadFileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "read_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Read the content of a file within the allowed subdirectories.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(file_path = %params.file_path))]
    pub fn execute(params: &ReadFileParams, files: &FileService) -> CallToolResult {
        info!("Read file tool called for '{}'", params.file_path);

        match files.read_file(&params.file_path) {
            Ok(content) => {
                info!("Read {} bytes from '{}'", content.len(), params.file_path);
                CallToolResult::success(vec![Content::text(content)])
            }
            Err(e) => {
                warn!("Read file failed: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReadFileParams>(),
            annotations: None,
            output_schema: None,
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
                let params: ReadFileParams =
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
    fn test_read_file_execute() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);
        fs::write(temp.path().join("docs/notes.txt"), "hello").unwrap();

        let params = ReadFileParams {
            file_path: "docs/notes.txt".to_string(),
        };
        let result = ReadFileTool::execute(&params, &files);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(result_text(&result), "hello");
    }

    #[test]
    fn test_read_file_missing() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);

        let params = ReadFileParams {
            file_path: "docs/absent.txt".to_string(),
        };
        let result = ReadFileTool::execute(&params, &files);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("does not exist"));
    }

    #[test]
    fn test_read_file_traversal_rejected() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);

        let params = ReadFileParams {
            file_path: "../etc/passwd".to_string(),
        };
        let result = ReadFileTool::execute(&params, &files);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("not allowed"));
    }

    #[test]
    fn test_read_file_absolute_rejected() {
        let temp = TempDir::new().unwrap();
        let files = sandbox(&temp);

        let params = ReadFileParams {
            file_path: "/etc/passwd".to_string(),
        };
        let result = ReadFileTool::execute(&params, &files);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).contains("cannot be absolute"));
    }
}
