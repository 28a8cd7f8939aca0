//! Batch command - extract expiry dates from many OCR text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use expiry_core::{ExpiryParser, ExtractionResult, ScanReport};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (e.g. "scans/*.txt")
    #[arg(required = true)]
    input: String,

    /// Write a summary CSV to this path
    #[arg(short, long)]
    summary: Option<PathBuf>,

    /// Continue when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of scanning a single file.
struct FileResult {
    path: PathBuf,
    report: Option<ScanReport>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to scan",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let parser = ExpiryParser::from_config(&config.extraction);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        pb.set_message(path.display().to_string());

        let result = match fs::read_to_string(&path) {
            Ok(text) => FileResult {
                report: Some(parser.scan(&text)),
                error: None,
                path,
            },
            Err(e) => {
                if !args.continue_on_error {
                    pb.abandon();
                    anyhow::bail!("Failed to read {}: {}", path.display(), e);
                }
                warn!("skipping {}: {}", path.display(), e);
                FileResult {
                    report: None,
                    error: Some(e.to_string()),
                    path,
                }
            }
        };

        results.push(result);
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    print_results(&results);

    if let Some(summary_path) = &args.summary {
        write_summary_csv(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    debug!("batch finished in {:?}", start.elapsed());

    Ok(())
}

fn print_results(results: &[FileResult]) {
    let mut found = 0usize;

    println!();
    for result in results {
        match (&result.report, &result.error) {
            (Some(report), _) => match &report.result {
                ExtractionResult::Found(date) => {
                    found += 1;
                    println!(
                        "  {} {} -> {}",
                        style("✓").green(),
                        result.path.display(),
                        date
                    );
                }
                ExtractionResult::NotFound => {
                    println!(
                        "  {} {} -> no date",
                        style("✗").red(),
                        result.path.display()
                    );
                }
            },
            (None, Some(error)) => {
                println!(
                    "  {} {} -> read error: {}",
                    style("!").yellow(),
                    result.path.display(),
                    error
                );
            }
            (None, None) => {}
        }
    }

    println!();
    println!(
        "{} {}/{} files produced a date",
        style("ℹ").blue(),
        found,
        results.len()
    );
}

fn write_summary_csv(path: &PathBuf, results: &[FileResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["file", "status", "date", "warnings"])?;

    for result in results {
        let (status, date, warnings) = match (&result.report, &result.error) {
            (Some(report), _) => match &report.result {
                ExtractionResult::Found(d) => {
                    ("found", d.to_string(), report.warnings.join("; "))
                }
                ExtractionResult::NotFound => {
                    ("not_found", String::new(), report.warnings.join("; "))
                }
            },
            (None, Some(error)) => ("read_error", String::new(), error.clone()),
            (None, None) => ("unknown", String::new(), String::new()),
        };

        writer.write_record([
            result.path.display().to_string().as_str(),
            status,
            date.as_str(),
            warnings.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
