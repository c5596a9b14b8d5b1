use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Captured result of an external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Run an external program and capture its output
///
/// Failing to launch the program at all is an error; the program exiting
/// non-zero is not, and shows up in `code` for the caller to judge.
pub fn run(program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput> {
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .with_context(|| format!("Failed to execute '{}'", program))?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code().unwrap_or(-1),
    })
}
