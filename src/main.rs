use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::Path;
use std::time::Duration;
use steward::models::Config;
use steward::{cli, config, gitignore, license, logger, scanner, tracker};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Load configuration
    let config = config::load_config(cli.config.as_deref(), &cli.root)
        .context("Failed to load configuration")?;

    match cli.command {
        cli::Commands::Gitignore { command } => match command {
            cli::GitignoreCommands::Generate => gitignore_generate(&cli.root, &config)?,
        },
        cli::Commands::Tracking { command } => match command {
            cli::TrackingCommands::List => tracking_list(&cli.root, &config, cli.verbose)?,
        },
        cli::Commands::Todo => todo_list(&cli.root, &config)?,
        cli::Commands::License { command } => match command {
            cli::LicenseCommands::AddHeaders => license_add_headers(&cli.root, &config)?,
        },
    }

    Ok(())
}

fn gitignore_generate(root: &Path, config: &Config) -> Result<()> {
    let target = gitignore::generate(root, config).context("Failed to generate gitignore")?;
    logger::info(&format!("Wrote {}", target.display()));
    Ok(())
}

fn tracking_list(root: &Path, config: &Config, verbose: bool) -> Result<()> {
    let matches = scanner::scan_directory(root, &config.track_marker, config)
        .context("Failed to scan for tracked markers")?;

    if matches.is_empty() {
        logger::info("No tracked issues found");
        return Ok(());
    }

    let tracker = tracker::IssueTracker::new(
        &config.tracker_api,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("Failed to set up issue tracker client")?;

    for m in &matches {
        let annotated = tracker.annotate(&m.text);
        if verbose {
            logger::info(&format!(
                "{} ({}:{})",
                annotated,
                m.file_path.display(),
                m.line_number
            ));
        } else {
            logger::info(&annotated);
        }
    }

    Ok(())
}

fn todo_list(root: &Path, config: &Config) -> Result<()> {
    for marker in &config.markers {
        let matches = scanner::scan_directory(root, marker, config)
            .with_context(|| format!("Failed to scan for {} markers", marker))?;

        for m in &matches {
            println!(
                "{}:{}: {}",
                m.file_path.display().to_string().cyan(),
                m.line_number.to_string().green(),
                m.line.trim_start()
            );
        }
    }

    Ok(())
}

fn license_add_headers(root: &Path, config: &Config) -> Result<()> {
    license::add_headers(root, config)?;
    logger::info("License headers are up to date");
    Ok(())
}
