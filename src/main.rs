//! pyconfused - Dependency confusion scanner for Python manifests.
//!
//! CLI entry point.

use clap::Parser;
use colored::Colorize;
use pyconfused::{scan_manifest, Commands, Config, ScanConfig, ScanResult};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("pyconfused=debug,info")
    } else {
        EnvFilter::new("pyconfused=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match config.command.clone() {
        Commands::Scan(scan_config) => {
            if let Err(code) = run_scan(scan_config, &config).await {
                return code;
            }
        }
    }

    ExitCode::SUCCESS
}

async fn run_scan(scan_config: ScanConfig, global_config: &Config) -> Result<(), ExitCode> {
    let registry = match scan_config.registry_config(global_config.verbose) {
        Ok(r) => r,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    let mut failed = false;
    for path in &scan_config.files {
        let kind = match scan_config.manifest_kind(path) {
            Ok(k) => k,
            Err(e) => {
                error!("{}", e);
                return Err(ExitCode::FAILURE);
            }
        };

        match scan_manifest(path, kind, &registry).await {
            Ok(result) => print_result(&result),
            Err(e) => {
                error!("Failed to scan {}: {}", path.display(), e);
                failed = true;
            }
        }
    }

    if failed {
        return Err(ExitCode::FAILURE);
    }
    Ok(())
}

fn print_result(result: &ScanResult) {
    println!(
        "{} {} ({} packages, {:.1}s)",
        "[*]".bright_blue(),
        result.path.display().to_string().bright_white(),
        result.packages_found,
        result.duration_secs
    );

    if result.not_in_public.is_empty() {
        println!("{} All packages found in the public repository", "[+]".green());
        return;
    }

    println!(
        "{} Issues found, the following packages are not available in public package repositories:",
        "[!]".red().bold()
    );
    for name in &result.not_in_public {
        println!("    {}", name.red().bold());
    }
}
