use crate::models::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Load configuration from file or use defaults
///
/// Search order:
/// 1. Custom path if provided via --config
/// 2. .stewardrc in the repo root
/// 3. ~/.stewardrc in home directory
/// 4. Built-in defaults
pub fn load_config(custom_path: Option<&Path>, root: &Path) -> Result<Config> {
    // If custom path provided, use it exclusively
    if let Some(path) = custom_path {
        return load_config_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    // Try the repo root
    let root_config = root.join(".stewardrc");
    if root_config.exists() {
        if let Ok(config) = load_config_from_file(&root_config) {
            return Ok(config);
        }
    }

    // Try home directory
    if let Some(home_config) = get_home_config_path() {
        if home_config.exists() {
            if let Ok(config) = load_config_from_file(&home_config) {
                return Ok(config);
            }
        }
    }

    // Fall back to defaults
    Ok(Config::default())
}

/// Load config from a specific file
fn load_config_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

/// Get path to home directory config file
fn get_home_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".stewardrc"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_default_config() {
        let root = TempDir::new().unwrap();
        let config = load_config(None, root.path()).unwrap();
        assert_eq!(config.track_marker, "TRACK");
        assert!(config.markers.contains(&"TODO".to_string()));
    }

    #[test]
    fn test_load_custom_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
markers = ["TODO", "FIXME"]
exclude = [".git", "third_party"]
track_marker = "WATCH"
request_timeout_secs = 2

[license]
tool = "licensure"
args = ["--in-place"]
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let root = TempDir::new().unwrap();
        let config = load_config(Some(temp_file.path()), root.path()).unwrap();
        assert_eq!(config.markers.len(), 2);
        assert_eq!(config.track_marker, "WATCH");
        assert!(config.exclude.contains(&"third_party".to_string()));
        assert_eq!(config.request_timeout_secs, 2);
        assert_eq!(config.license.tool, "licensure");
        assert_eq!(config.license.args, vec!["--in-place".to_string()]);
    }

    #[test]
    fn test_load_config_from_repo_root() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join(".stewardrc"), r#"track_marker = "REF""#).unwrap();

        let config = load_config(None, root.path()).unwrap();
        assert_eq!(config.track_marker, "REF");
    }

    #[test]
    fn test_invalid_custom_config_is_an_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"markers = 5").unwrap();

        let root = TempDir::new().unwrap();
        let result = load_config(Some(temp_file.path()), root.path());
        assert!(result.is_err());
    }
}
