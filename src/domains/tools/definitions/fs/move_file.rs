//! Move file tool definition.
//!
//! A tool that moves or renames a file or directory within the sandbox.

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

/// Parameters for the move tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MoveFileParams {
    /// Source path (file or directory), relative to the sandbox root.
    pub source_path: String,

    /// Destination path, relative to the sandbox root. An existing
    /// destination is overwritten.
    pub destination_path: String,
}

// ============================================================================
// Output Structure (JSON format for AI agents)
// ============================================================================

/// Result of a move operation
#[derive(Debug, Serialize, JsonSchema)]
struct MoveFileResult {
    /// Source path (original location)
    source_path: String,
    /// Destination path (new location)
    destination_path: String,
    /// Whether the operation succeeded
    success: bool,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Move file tool - moves or renames files and directories within the sandbox.
pub struct MoveFileTool;

impl MoveFileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "move_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Move or rename a file or directory within the allowed subdirectories. An existing destination is overwritten.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(source = %params.source_path, destination = %params.destination_path))]
    pub fn execute(params: &MoveFileParams, files: &FileService) -> CallToolResult {
        info!(
            "Move tool called: '{}' -> '{}'",
            params.source_path, params.destination_path
        );

        if let Err(e) = files.move_file(&params.source_path, &params.destination_path) {
            warn!("Move failed: {}", e);
            return CallToolResult::error(vec![Content::text(e.to_string())]);
        }

        let summary = format!(
            "Successfully moved '{}' to '{}'",
            params.source_path, params.destination_path
        );

        let result = MoveFileResult {
            source_path: params.source_path.clone(),
            destination_path: params.destination_path.clone(),
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
            input_schema: schema_for_type::<MoveFileParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<MoveFileResult>().into()),
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
                let params: MoveFileParams =
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
