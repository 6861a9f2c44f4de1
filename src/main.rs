use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use toagloss::io_utils::{extension_error, io_cli_error, toagloss_cli_error};
use toagloss::{parse_dump, write_tsv, Config, ExtractStats};

/// Extract a head/gloss table from a Toadua dump.
#[derive(Parser)]
struct Args {
    /// Input dump .json file
    input: PathBuf,
    /// Output TSV path; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
    /// Language scope entries must carry
    #[arg(long, default_value = "en")]
    scope: String,
    /// Minimum community score entries must carry
    #[arg(long, default_value_t = 0)]
    min_score: i64,
    /// Keep heads containing spaces
    #[arg(long)]
    multi_word: bool,
    /// Report per-stage drop counts on stderr
    #[arg(long)]
    stats: bool,
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
    if args
        .input
        .extension()
        .and_then(|s| s.to_str())
        .map_or(true, |ext| ext.to_ascii_lowercase() != "json")
    {
        return Err(extension_error(&args.input).into());
    }

    let config = Config {
        scope: args.scope.clone(),
        min_score: args.min_score,
        single_word_heads: !args.multi_word,
        ..Config::default()
    };
    let rules = config.selection_rules();

    let pb = if args.status {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .expect("valid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Extracting glosses from {}", args.input.display()));
        Some(pb)
    } else {
        None
    };

    let data =
        fs::read(&args.input).map_err(|e| io_cli_error("reading input file", &args.input, e))?;
    let entries = parse_dump(&data).map_err(|e| toagloss_cli_error("parsing dump", e))?;

    let mut stats = ExtractStats::new();
    match &args.output {
        Some(path) => {
            let f = File::create(path).map_err(|e| io_cli_error("creating output file", path, e))?;
            write_tsv(&entries, &rules, &config, f, &mut stats)
        }
        None => write_tsv(&entries, &rules, &config, io::stdout().lock(), &mut stats),
    }
    .map_err(|e| toagloss_cli_error("writing glosses", e))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    if args.stats {
        stats.report();
    }
    Ok(())
}
