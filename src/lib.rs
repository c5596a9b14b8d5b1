//! Steward - monorepo housekeeping
//!
//! A CLI tool for the recurring chores of a monorepo: assembling the
//! generated `.gitignore` from fragment files, surfacing marker comments
//! (TRACK, TODO, CHECK, FIXME), annotating tracked GitHub issue links with
//! their live state, and stamping license headers via an external tool.
//!
//! # Example
//!
//! ```rust,no_run
//! use steward::*;
//! use std::path::Path;
//!
//! // Load configuration
//! let config = config::load_config(None, Path::new(".")).unwrap();
//!
//! // Scan for tracked issue markers
//! let matches = scanner::scan_directory(Path::new("."), &config.track_marker, &config).unwrap();
//!
//! for m in &matches {
//!     println!("{}", m.text);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod exec;
pub mod gitignore;
pub mod license;
pub mod logger;
pub mod models;
pub mod scanner;
pub mod tracker;

// Re-export commonly used types
pub use models::{Config, IssueRef, LicenseConfig, MarkerMatch};
pub use tracker::IssueTracker;
