//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together over the shared file service.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::files::FileService;

use super::definitions::{
    CreateDirectoryTool, DeletePathTool, ListFilesTool, MoveFileTool, ReadFileTool, WriteFileTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(files: Arc<FileService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreateDirectoryTool::create_route(files.clone()))
        .with_route(DeletePathTool::create_route(files.clone()))
        .with_route(ListFilesTool::create_route(files.clone()))
        .with_route(MoveFileTool::create_route(files.clone()))
        .with_route(ReadFileTool::create_route(files.clone()))
        .with_route(WriteFileTool::create_route(files))
}
