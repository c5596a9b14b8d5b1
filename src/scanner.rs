use crate::models::{Config, MarkerMatch};
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Scan a directory tree for lines carrying the given marker
///
/// Matches are reported in the order the walker yields them; no sorting is
/// applied. Marker lines with nothing after the prefix are skipped.
pub fn scan_directory(root: &Path, marker: &str, config: &Config) -> Result<Vec<MarkerMatch>> {
    let mut matches = Vec::new();

    let pattern = build_marker_regex(marker)?;
    let excludes = exclude_set(&config.exclude)?;

    // Build the file walker
    let mut walker = WalkBuilder::new(root);
    walker.standard_filters(true); // Respect .gitignore

    walker.filter_entry(move |entry| {
        let name = entry.file_name().to_str().unwrap_or("");
        !excludes.is_match(name)
    });

    // Walk the directory tree
    for result in walker.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(_) => continue, // Skip files we can't read
        };

        // Skip directories
        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        // Skip if file is too large
        if let Ok(metadata) = entry.metadata() {
            if metadata.len() > MAX_FILE_SIZE {
                continue;
            }
        }

        if let Ok(file_matches) = scan_file(entry.path(), &pattern) {
            matches.extend(file_matches);
        }
    }

    Ok(matches)
}

/// Compile a set of file-name exclusion globs
pub fn exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("Invalid exclusion glob: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().context("Failed to compile exclusion globs")
}

/// Build the regex capturing everything after "<marker>: " up to end of line
fn build_marker_regex(marker: &str) -> Result<Regex> {
    let pattern = format!(r"^.*{}: (.*)$", regex::escape(marker));
    Regex::new(&pattern).context("Failed to compile marker regex")
}

/// Scan a single file for marker lines
fn scan_file(path: &Path, pattern: &Regex) -> Result<Vec<MarkerMatch>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut matches = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = match line_result {
            Ok(l) => l,
            Err(_) => continue, // Skip lines we can't read (might be binary)
        };

        // lines() strips the \n but leaves the \r of CRLF endings behind
        let line = line.trim_end_matches('\r');

        if let Some(captures) = pattern.captures(line) {
            let text = captures
                .get(1)
                .map(|m| m.as_str().trim_end().to_string())
                .unwrap_or_default();

            // A bare marker with no text is a defect at the call site; drop it
            if text.is_empty() {
                continue;
            }

            matches.push(MarkerMatch {
                file_path: path.to_path_buf(),
                line_number: line_num + 1, // Convert to 1-indexed
                line: line.to_string(),
                text,
            });
        }
    }

    Ok(matches)
}
