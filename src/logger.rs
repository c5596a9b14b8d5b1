use colored::*;

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// Print one colorized status line to stdout
pub fn log(level: Level, message: &str) {
    let tag = match level {
        Level::Info => "INFO".green(),
        Level::Warning => "WARNING".yellow(),
        Level::Error => "ERROR".red(),
    };

    println!("{} {}", tag.bold(), message);
}

pub fn info(message: &str) {
    log(Level::Info, message);
}

pub fn warning(message: &str) {
    log(Level::Warning, message);
}

pub fn error(message: &str) {
    log(Level::Error, message);
}
