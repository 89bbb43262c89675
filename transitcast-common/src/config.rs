//! Configuration-file loading and layered value resolution
//!
//! Values are resolved with the priority order:
//! 1. Command-line argument (highest)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! The CLI and environment tiers live in the binary (clap); this module
//! supplies the TOML tier and the file discovery.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional values read from the transitcast TOML config file
///
/// Every field is optional; absent fields fall through to the next
/// resolution tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// Routing-oracle API key
    pub api_key: Option<String>,
    /// Factory table location (local path or HTTP URL)
    pub input: Option<String>,
    /// Output CSV path
    pub output: Option<String>,
    /// Concurrent oracle workers
    pub workers: Option<usize>,
}

/// Locate the platform config file, if one exists
///
/// Linux: `~/.config/transitcast/config.toml`, then
/// `/etc/transitcast/config.toml`. macOS/Windows: the platform config
/// directory under `transitcast/config.toml`.
pub fn config_file_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("transitcast").join("config.toml"));

    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/transitcast/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Load a `FileConfig` from an explicit path
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(config)
}

/// Load the TOML tier: explicit path if given, discovered file otherwise
///
/// A missing file is not an error; it resolves to an empty config so
/// lower tiers apply.
pub fn load_config_tier(explicit: Option<&Path>) -> Result<FileConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return load_file_config(path);
    }

    match config_file_path() {
        Some(path) => {
            debug!("Loading config file: {}", path.display());
            load_file_config(&path)
        }
        None => Ok(FileConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_file_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_key = \"test-key\"\ninput = \"factories.xlsx\"\nworkers = 4"
        )
        .unwrap();

        let config = load_file_config(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.input.as_deref(), Some("factories.xlsx"));
        assert_eq!(config.output, None);
        assert_eq!(config.workers, Some(4));
    }

    #[test]
    fn test_load_file_config_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "workers = \"many\"").unwrap();

        let result = load_file_config(file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let result = load_config_tier(Some(Path::new("/nonexistent/transitcast.toml")));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_tier_when_no_file_given() {
        // Discovery may or may not find a platform file on the test host;
        // an explicit empty temp file gives a deterministic empty tier.
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = load_config_tier(Some(file.path())).unwrap();
        assert!(config.api_key.is_none());
        assert!(config.workers.is_none());
    }
}
