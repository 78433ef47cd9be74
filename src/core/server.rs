//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. The server exposes one tool per sandboxed file operation; the
//! tools are defined in `domains/tools/definitions/fs/` with one file per
//! tool, and the ToolRouter is built dynamically in
//! `domains/tools/router.rs`. Adding a new tool does not require modifying
//! this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::{files::FileService, tools::build_tool_router};

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp and routes tool calls to
/// the sandboxed file operations. The configuration and the file service are
/// shared immutably across concurrently served calls.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Sandboxed file operations shared by all tools.
    files: Arc<FileService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let files = Arc::new(FileService::new(&config.sandbox));

        Self {
            tool_router: build_tool_router::<Self>(files.clone()),
            config,
            files,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared file service.
    pub fn files(&self) -> &Arc<FileService> {
        &self.files
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes file operations confined to a configured root \
                 directory and its allow-listed subdirectories. All paths are given \
                 relative to the root."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
