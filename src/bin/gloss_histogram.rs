use clap::Parser;
use std::fs::{self, File};
use std::path::PathBuf;

use toagloss::io_utils::{io_cli_error, toagloss_cli_error};
use toagloss::{extract_gloss, parse_dump, GLOSS_MAX_CHARS};

/// Histogram of gloss extraction outcomes over a dump.
#[derive(Parser)]
struct Args {
    /// Input dump .json file
    input: PathBuf,
    /// Only print summary totals
    #[arg(long)]
    summary: bool,
    /// Optional CSV output path for per-head results
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let data =
        fs::read(&args.input).map_err(|e| io_cli_error("reading input file", &args.input, e))?;
    let entries = parse_dump(&data).map_err(|e| toagloss_cli_error("parsing dump", e))?;

    let mut no_gloss = 0u64;
    let mut out_of_bounds = 0u64;
    let mut lengths = vec![0u64; GLOSS_MAX_CHARS + 1];
    let mut csv_writer = match &args.csv {
        Some(p) => {
            let f = File::create(p).map_err(|e| io_cli_error("creating csv", p, e))?;
            let mut wtr = csv::Writer::from_writer(f);
            wtr.write_record(&["head", "category", "gloss"])?;
            Some(wtr)
        }
        None => None,
    };

    for entry in &entries {
        let gloss = extract_gloss(&entry.body, &entry.head);
        let (category, text) = match &gloss {
            None => {
                no_gloss += 1;
                ("no-gloss".to_string(), "")
            }
            Some(g) => {
                let len = g.chars().count();
                if len == 0 || len > GLOSS_MAX_CHARS {
                    out_of_bounds += 1;
                    ("out-of-bounds".to_string(), g.as_str())
                } else {
                    lengths[len] += 1;
                    (format!("len-{len}"), g.as_str())
                }
            }
        };

        if let Some(wtr) = csv_writer.as_mut() {
            wtr.write_record(&[entry.head.as_str(), category.as_str(), text])?;
        }
        if !args.summary {
            println!("{}: {}", entry.head, category);
        }
    }

    if let Some(wtr) = csv_writer.as_mut() {
        wtr.flush()?;
    }

    let total = entries.len().max(1) as u64;
    let glossed: u64 = lengths.iter().sum();
    println!("#entries: {}", entries.len());
    println!(
        "#glossed: {} ({:.1}%)",
        glossed,
        100.0 * glossed as f64 / total as f64
    );
    println!(
        "#no gloss: {} ({:.1}%)",
        no_gloss,
        100.0 * no_gloss as f64 / total as f64
    );
    println!(
        "#out of bounds: {} ({:.1}%)",
        out_of_bounds,
        100.0 * out_of_bounds as f64 / total as f64
    );
    for (len, count) in lengths.iter().enumerate().skip(1) {
        if *count > 0 {
            println!("len {:2}: {}", len, count);
        }
    }
    Ok(())
}
