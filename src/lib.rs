//! Sandboxed Filesystem MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! filesystem operations confined to a configured root directory and an
//! allow-list of subdirectories inside it.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the path sandbox (resolver + policy), the main server, and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **files**: the sandboxed file operations
//!   - **tools**: MCP tool definitions wrapping each operation
//!
//! # Example
//!
//! ```rust,no_run
//! use sandbox_fs_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
