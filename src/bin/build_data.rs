use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use toagloss::io_utils::{io_cli_error, simple_cli_error, toagloss_cli_error};
use toagloss::{
    build_maps, read_dump, read_or_fetch, write_json_map, Config, SelectionRules,
    DEFAULT_API_URL, DEFAULT_CACHE_PATH,
};

/// Build the gloss and frame maps consumed by downstream tooling.
#[derive(Parser)]
struct Args {
    /// Dump file to read
    #[arg(long, default_value = DEFAULT_CACHE_PATH)]
    dump: PathBuf,
    /// Fetch the dump from the API when the file is missing
    #[arg(long)]
    fetch: bool,
    /// Toadua API endpoint used with --fetch
    #[arg(long, default_value = DEFAULT_API_URL)]
    url: String,
    /// Language scope entries must carry
    #[arg(long, default_value = "en")]
    scope: String,
    /// Minimum community score entries must carry
    #[arg(long, default_value_t = 0)]
    min_score: i64,
    /// Output path for the gloss map
    #[arg(long, default_value = "data/toadua/glosses.json")]
    glosses: PathBuf,
    /// Output path for the frame map
    #[arg(long, default_value = "data/toadua/frames.json")]
    frames: PathBuf,
    /// Show a progress spinner
    #[arg(long)]
    status: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.glosses == args.frames {
        return Err(
            simple_cli_error("Gloss and frame outputs must be different files.").into(),
        );
    }

    let pb = if args.status {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .expect("valid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Building maps from {}", args.dump.display()));
        Some(pb)
    } else {
        None
    };

    let entries = if args.fetch {
        read_or_fetch(&args.dump, &args.url, &args.scope)
    } else {
        read_dump(&args.dump)
    }
    .map_err(|e| toagloss_cli_error("loading dump", e))?;

    let rules = SelectionRules {
        scope: Some(args.scope.clone()),
        min_score: Some(args.min_score),
        single_word_heads: false,
    };
    let maps = build_maps(&entries, &rules, &Config::default())
        .map_err(|e| toagloss_cli_error("building maps", e))?;

    for path in [&args.glosses, &args.frames] {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| io_cli_error("creating output directory", parent, e))?;
            }
        }
    }
    write_json_map(&args.glosses, &maps.glosses)
        .map_err(|e| toagloss_cli_error("writing gloss map", e))?;
    write_json_map(&args.frames, &maps.frames)
        .map_err(|e| toagloss_cli_error("writing frame map", e))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    eprintln!(
        "Wrote {} glosses and {} frames from {} entries",
        maps.glosses.len(),
        maps.frames.len(),
        entries.len()
    );
    Ok(())
}
