use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single marker-comment line found while scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerMatch {
    /// Path to the file containing the marker
    pub file_path: PathBuf,

    /// Line number where the marker was found (1-indexed)
    pub line_number: usize,

    /// The full line content containing the marker
    pub line: String,

    /// Text following the marker prefix, trailing newline characters removed
    pub text: String,
}

/// A reference to a GitHub issue, parsed out of a tracked URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    /// Repository owner
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Issue number as it appeared in the URL
    pub number: String,
}

/// Configuration for the steward commands
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Markers the todo command scans for
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,

    /// Marker the tracking command scans for
    #[serde(default = "default_track_marker")]
    pub track_marker: String,

    /// File-name globs excluded from scanning (directories prune their subtree)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Directory holding gitignore fragments, relative to the repo root
    #[serde(default = "default_fragments_dir")]
    pub fragments_dir: PathBuf,

    /// Generated gitignore path, relative to the repo root
    #[serde(default = "default_gitignore_output")]
    pub gitignore_output: PathBuf,

    /// Base URL of the issue tracker REST API
    #[serde(default = "default_tracker_api")]
    pub tracker_api: String,

    /// Timeout applied to each issue lookup, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// License header stamping settings
    #[serde(default)]
    pub license: LicenseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            track_marker: default_track_marker(),
            exclude: default_exclude(),
            fragments_dir: default_fragments_dir(),
            gitignore_output: default_gitignore_output(),
            tracker_api: default_tracker_api(),
            request_timeout_secs: default_request_timeout_secs(),
            license: LicenseConfig::default(),
        }
    }
}

/// Settings for the external license-header tool
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LicenseConfig {
    /// Program to invoke
    #[serde(default = "default_license_tool")]
    pub tool: String,

    /// Arguments passed before the file list
    #[serde(default)]
    pub args: Vec<String>,

    /// Extra file-name globs to skip when collecting files
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            tool: default_license_tool(),
            args: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

fn default_markers() -> Vec<String> {
    vec![
        "TODO".to_string(),
        "CHECK".to_string(),
        "FIXME".to_string(),
    ]
}

fn default_track_marker() -> String {
    "TRACK".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![
        ".git".to_string(),
        "target".to_string(),
        "node_modules".to_string(),
        "dist".to_string(),
        "build".to_string(),
        ".direnv".to_string(),
        "result".to_string(),
    ]
}

fn default_fragments_dir() -> PathBuf {
    PathBuf::from("gitignore")
}

fn default_gitignore_output() -> PathBuf {
    PathBuf::from(".gitignore")
}

fn default_tracker_api() -> String {
    "https://api.github.com".to_string()
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_license_tool() -> String {
    "addlicense".to_string()
}
