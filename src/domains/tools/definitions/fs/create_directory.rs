//! Create directory tool definition.
//!
//! A tool that creates a new directory (and missing ancestors) within the
//! sandbox.

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

/// Parameters for the create directory tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateDirectoryParams {
    /// Directory to create, relative to the sandbox root.
    pub directory: String,
}

// ============================================================================
// Output Structure (JSON format for AI agents)
// ============================================================================

/// Result of a create directory operation
#[derive(Debug, Serialize, JsonSchema)]
struct CreateDirectoryResult {
    /// Directory that was created
    directory: String,
    /// Whether the operation succeeded
    success: bool,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create directory tool - creates a new directory within the sandbox.
pub struct CreateDirectoryTool;

impl CreateDirectoryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_directory";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new directory within the allowed subdirectories. Fails if the directory already exists.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(directory = %params.directory))]
    pub fn execute(params: &CreateDirectoryParams, files: &FileService) -> CallToolResult {
        info!("Create directory tool called for '{}'", params.directory);

        if let Err(e) = files.create_directory(&params.directory) {
            warn!("Create directory failed: {}", e);
            return CallToolResult::error(vec![Content::text(e.to_string())]);
        }

        let summary = format!("Successfully created directory '{}'", params.directory);

        let result = CreateDirectoryResult {
            directory: params.directory.clone(),
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
            input_schema: schema_for_type::<CreateDirectoryParams>().into(),
            annotations: None,
            output_schema: Some(schema_for_type::<CreateDirectoryResult>().into()),
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
                let params: CreateDirectoryParams =
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
