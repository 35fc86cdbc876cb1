//! Server configuration
//!
//! A small TOML-backed configuration with serde defaults for every field,
//! so a partial file (or no file at all) still yields a runnable server.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Runtime configuration for the HTTP server
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds, `host:port`
    pub bind: String,

    /// Directory generated PDFs are written into
    pub output_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
            output_dir: env::temp_dir(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional TOML file
    ///
    /// `None` yields the defaults; a present path must read and parse.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                let config = toml::from_str(&raw)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:8000");
        assert_eq!(config.output_dir, env::temp_dir());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ServerConfig::load(None).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8000");
    }

    #[test]
    fn test_load_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind = \"0.0.0.0:9000\"").unwrap();
        writeln!(file, "output_dir = \"/var/investigacion/pdfs\"").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.output_dir, PathBuf::from("/var/investigacion/pdfs"));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind = \"127.0.0.1:8081\"").unwrap();

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.bind, "127.0.0.1:8081");
        assert_eq!(config.output_dir, env::temp_dir());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = ServerConfig::load(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
