//! Files domain module.
//!
//! Sandboxed filesystem operations. The tools domain exposes each operation
//! as an MCP tool; all validation lives here and in `core::security`.

mod service;

pub use service::{DeletedEntry, FileService};
