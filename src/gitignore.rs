use crate::models::Config;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Header written at the top of the generated file
pub const GENERATED_WARNING: &str = "\
# THIS FILE IS GENERATED. DO NOT EDIT BY HAND.
# Regenerate it with `steward gitignore generate`.
";

/// Rebuild the generated gitignore from the fragment directory
///
/// Fragments are files with a `.gitignore` extension, concatenated in file
/// name order. Returns the path of the written file.
pub fn generate(root: &Path, config: &Config) -> Result<PathBuf> {
    let fragments_dir = root.join(&config.fragments_dir);

    let entries = fs::read_dir(&fragments_dir).with_context(|| {
        format!(
            "Failed to read fragment directory: {}",
            fragments_dir.display()
        )
    })?;

    let mut fragments: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!(
                "Failed to list fragment directory: {}",
                fragments_dir.display()
            )
        })?;
        let path = entry.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == "gitignore") {
            fragments.push(path);
        }
    }
    fragments.sort();

    let mut output = String::from(GENERATED_WARNING);
    for path in &fragments {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read fragment: {}", path.display()))?;

        output.push_str(&format!("\n## {}\n\n{}", name, contents));
    }

    let target = root.join(&config.gitignore_output);

    // Delete and recreate rather than truncate in place
    if let Err(err) = fs::remove_file(&target) {
        if err.kind() != ErrorKind::NotFound {
            return Err(err)
                .with_context(|| format!("Failed to remove {}", target.display()));
        }
    }
    fs::write(&target, output)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(fragments: &[(&str, &str)]) -> (TempDir, Config) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();

        let dir = temp_dir.path().join(&config.fragments_dir);
        fs::create_dir(&dir).unwrap();
        for (name, contents) in fragments {
            fs::write(dir.join(name), contents).unwrap();
        }

        (temp_dir, config)
    }

    #[test]
    fn test_generate_concatenates_fragments_in_name_order() {
        let (temp_dir, config) =
            setup(&[("b.gitignore", "build/\n"), ("a.gitignore", "*.log\n")]);

        let target = generate(temp_dir.path(), &config).unwrap();
        let contents = fs::read_to_string(&target).unwrap();

        assert!(contents.starts_with(GENERATED_WARNING));
        assert!(contents.contains("\n## a\n\n*.log\n"));
        assert!(contents.contains("\n## b\n\nbuild/\n"));

        let a_pos = contents.find("## a").unwrap();
        let b_pos = contents.find("## b").unwrap();
        assert!(a_pos < b_pos);
    }

    #[test]
    fn test_generate_ignores_unrelated_files() {
        let (temp_dir, config) = setup(&[("a.gitignore", "*.log\n"), ("README.md", "docs\n")]);

        let target = generate(temp_dir.path(), &config).unwrap();
        let contents = fs::read_to_string(&target).unwrap();

        assert!(contents.contains("## a"));
        assert!(!contents.contains("README"));
        assert!(!contents.contains("docs"));
    }

    #[test]
    fn test_generate_replaces_existing_file() {
        let (temp_dir, config) = setup(&[("a.gitignore", "*.log\n")]);
        fs::write(temp_dir.path().join(&config.gitignore_output), "stale\n").unwrap();

        let target = generate(temp_dir.path(), &config).unwrap();
        let contents = fs::read_to_string(&target).unwrap();

        assert!(!contents.contains("stale"));
        assert!(contents.contains("*.log"));
    }

    #[test]
    fn test_generate_fails_without_fragment_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::default();

        let err = generate(temp_dir.path(), &config).unwrap_err();
        assert!(err.to_string().contains("fragment directory"));
    }
}
