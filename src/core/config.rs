//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that is
//! populated once at startup from environment variables (honoring a `.env`
//! file) and then shared immutably for the lifetime of the process.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Sandbox boundaries for file operations.
    pub sandbox: SandboxConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Sandbox boundaries: the root directory and the allow-listed
/// subdirectories inside it.
///
/// Both values are fixed for the process lifetime. An empty allow-list means
/// every file operation is denied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Root directory anchoring every relative path.
    pub root_dir: PathBuf,

    /// Subdirectory names, relative to the root, within which operations
    /// are permitted. Duplicates are harmless.
    pub allowed_subdirs: Vec<String>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            root_dir: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            allowed_subdirs: Vec::new(),
        }
    }
}

impl SandboxConfig {
    /// Load the sandbox boundaries from `MCP_ROOT_DIR` and
    /// `MCP_ALLOWED_SUBDIRS`.
    ///
    /// The root is subject to home-directory expansion (`~`, `~/...`) and
    /// defaults to the home directory. The allow-list is comma-separated;
    /// empty entries are discarded.
    pub fn from_env() -> Self {
        let root_dir = match std::env::var("MCP_ROOT_DIR") {
            Ok(raw) => expand_home(&raw),
            Err(_) => {
                warn!("MCP_ROOT_DIR not set - defaulting to the home directory");
                Self::default().root_dir
            }
        };

        let allowed_subdirs = std::env::var("MCP_ALLOWED_SUBDIRS")
            .map(|raw| parse_subdirs(&raw))
            .unwrap_or_default();

        if allowed_subdirs.is_empty() {
            warn!(
                "MCP_ALLOWED_SUBDIRS is empty - no subdirectory is allow-listed, \
                 so every file operation will be denied"
            );
        }

        Self {
            root_dir,
            allowed_subdirs,
        }
    }

    /// Check the startup invariant: the root must be an existing, absolute
    /// directory path.
    pub fn validate(&self) -> Result<()> {
        if !self.root_dir.is_absolute() {
            return Err(Error::config(format!(
                "root directory '{}' must be an absolute path",
                self.root_dir.display()
            )));
        }
        if !self.root_dir.is_dir() {
            return Err(Error::config(format!(
                "root directory '{}' does not exist or is not a directory",
                self.root_dir.display()
            )));
        }
        Ok(())
    }
}

/// Split a comma-separated allow-list, discarding empty entries.
fn parse_subdirs(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expand a leading `~` or `~/` to the user's home directory.
fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "sandbox-fs-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            sandbox: SandboxConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `MCP_`, e.g.
    /// `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_ROOT_DIR`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();
        config.sandbox = SandboxConfig::from_env();

        info!(
            "Sandbox root set to {:?} with {} allowed subdirectories",
            config.sandbox.root_dir,
            config.sandbox.allowed_subdirs.len()
        );

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_sandbox_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ROOT_DIR", "/srv/sandbox");
            std::env::set_var("MCP_ALLOWED_SUBDIRS", "docs,notes");
        }
        let sandbox = SandboxConfig::from_env();
        assert_eq!(sandbox.root_dir, PathBuf::from("/srv/sandbox"));
        assert_eq!(sandbox.allowed_subdirs, vec!["docs", "notes"]);
        unsafe {
            std::env::remove_var("MCP_ROOT_DIR");
            std::env::remove_var("MCP_ALLOWED_SUBDIRS");
        }
    }

    #[test]
    fn test_sandbox_defaults_to_home_and_empty_allow_list() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_ROOT_DIR");
            std::env::remove_var("MCP_ALLOWED_SUBDIRS");
        }
        let sandbox = SandboxConfig::from_env();
        assert_eq!(sandbox.root_dir, SandboxConfig::default().root_dir);
        assert!(sandbox.allowed_subdirs.is_empty());
    }

    #[test]
    fn test_parse_subdirs_discards_empty_entries() {
        assert_eq!(parse_subdirs("docs,,notes,"), vec!["docs", "notes"]);
        assert!(parse_subdirs("").is_empty());
        assert!(parse_subdirs(",,").is_empty());
    }

    #[test]
    fn test_expand_home_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~"), home);
            assert_eq!(expand_home("~/files"), home.join("files"));
        }
        assert_eq!(expand_home("/plain/path"), PathBuf::from("/plain/path"));
        // A tilde that is not a home prefix is left alone.
        assert_eq!(expand_home("dir/~file"), PathBuf::from("dir/~file"));
    }

    #[test]
    fn test_validate_accepts_existing_absolute_directory() {
        let temp = TempDir::new().unwrap();
        let sandbox = SandboxConfig {
            root_dir: temp.path().to_path_buf(),
            allowed_subdirs: vec!["docs".to_string()],
        };
        assert!(sandbox.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_root() {
        let sandbox = SandboxConfig {
            root_dir: PathBuf::from("relative/root"),
            allowed_subdirs: Vec::new(),
        };
        assert!(sandbox.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_root() {
        let sandbox = SandboxConfig {
            root_dir: PathBuf::from("/no/such/root/anywhere"),
            allowed_subdirs: Vec::new(),
        };
        assert!(sandbox.validate().is_err());
    }
}
