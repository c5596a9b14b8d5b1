use crate::exec;
use crate::models::Config;
use crate::scanner;
use anyhow::{Result, bail};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Run the configured license-header tool over the tree
///
/// Files are collected with the same walker and exclusion globs the scanner
/// uses, plus the license-specific excludes, and handed to the tool in one
/// invocation. The tool's output and exit status are propagated unchanged.
pub fn add_headers(root: &Path, config: &Config) -> Result<()> {
    let files = collect_files(root, config)?;

    let mut args = config.license.args.clone();
    args.extend(
        files
            .iter()
            .map(|path| path.to_string_lossy().into_owned()),
    );

    let output = exec::run(&config.license.tool, &args, root)?;

    print!("{}", output.stdout);
    eprint!("{}", output.stderr);

    if !output.success() {
        bail!(
            "'{}' exited with status {}",
            config.license.tool,
            output.code
        );
    }

    Ok(())
}

/// Collect the files the tool should stamp, relative to the root
fn collect_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let mut patterns = config.exclude.clone();
    patterns.extend(config.license.exclude.iter().cloned());
    let excludes = scanner::exclude_set(&patterns)?;

    let mut walker = WalkBuilder::new(root);
    walker.standard_filters(true);
    walker.filter_entry(move |entry| {
        let name = entry.file_name().to_str().unwrap_or("");
        !excludes.is_match(name)
    });

    let mut files = Vec::new();
    for result in walker.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(_) => continue,
        };

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        files.push(relative);
    }

    files.sort();
    Ok(files)
}
