//! Write file tool definition.
//!
//! A tool that writes text content to a sandboxed file, creating missing
//! parent directories as needed.

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

/// Parameters for the write file tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WriteFileParams {
    /// Path of the file to write, relative to the sandbox root.
    pub file_path: String,

    /// Content to write. Fully replaces any existing content.
    pub content: String,
}

// ============================================================================
// Output Structure (JSON format for AI agents)
// ============================================================================

/// Result of a write operation
#[derive(Debug, Serialize, JsonSchema)]
struct WriteFileResult {
    /// Path that was written
    file_path: String,
    /// Number of bytes written
    bytes_written: usize,
    /// Whether the operation succeeded
    success: bool,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Write file tool - writes content to a file within the sandbox.
pub struct WriteFileTool;

impl WriteFileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "write_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Write content to a file within the allowed subdirectories, replacing any existing content. Missing parent directories are created.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(file_path = %params.file_path))]
    pub fn execute(params: &WriteFileParams, files: &FileService) -> CallToolResult {
        info!(
            "Write file tool called for '{}' ({} bytes)",
            params.file_path,
            params.content.len()
        );

        if let Err(e) = files.write_file(&params.file_path, &params.content) {
            warn!("Write file failed: {}", e);
            return CallToolResult::error(vec![Content::text(e.to_string())]);
        }

        let summary = format!(
            "Successfully wrote {} bytes to '{}'",
            params.content.len(),
            params.file_path
        );

        let result = WriteFileResult {
            file_path: params.file_path.clone(),
            bytes_written: params.content.len(),
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
            input_schema: schema_for_type::<WriteFileParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<WriteFileResult>().into()),
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
                let params: WriteFileParams =
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
