//! Tool definitions, one file per tool.

pub mod fs;

pub use fs::{
    CreateDirectoryTool, DeletePathTool, ListFilesTool, MoveFileTool, ReadFileTool, WriteFileTool,
};
