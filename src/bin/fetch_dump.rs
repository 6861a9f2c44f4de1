use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use toagloss::io_utils::{io_cli_error, toagloss_cli_error};
use toagloss::{fetch_dump, DEFAULT_API_URL, DEFAULT_CACHE_PATH};

/// Download a Toadua dump and store it on disk.
#[derive(Parser)]
struct Args {
    /// Output dump path
    #[arg(long, default_value = DEFAULT_CACHE_PATH)]
    output: PathBuf,
    /// Toadua API endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    url: String,
    /// Language scope to query
    #[arg(long, default_value = "en")]
    scope: String,
    /// Refetch even if the output file exists
    #[arg(long)]
    force: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.output.exists() && !args.force {
        eprintln!(
            "Dump already cached at '{}'. Pass --force to refetch.",
            args.output.display()
        );
        return Ok(());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Fetching {} dump from {}", args.scope, args.url));

    let raw = fetch_dump(&args.url, &args.scope)
        .map_err(|e| toagloss_cli_error("fetching dump", e))?;

    if let Some(parent) = args.output.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| io_cli_error("creating cache directory", parent, e))?;
    }
    fs::write(&args.output, &raw)
        .map_err(|e| io_cli_error("writing dump file", &args.output, e))?;

    pb.finish_and_clear();
    eprintln!("Saved {} bytes to '{}'", raw.len(), args.output.display());
    Ok(())
}
