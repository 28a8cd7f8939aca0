//! Extract command - pull the expiry date out of a single text blob.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use expiry_core::{
    DateExtractor, ExpiryParser, ExtractionResult, FieldExtractor, ScanReport,
};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file ("-" reads stdin)
    #[arg(required_unless_present = "text")]
    input: Option<PathBuf>,

    /// Literal OCR text instead of a file
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// List every candidate date found, not just the winning one
    #[arg(long)]
    all: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON report
    Json,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let text = read_input(&args)?;
    info!("read {} characters of OCR text", text.len());

    let parser = ExpiryParser::from_config(&config.extraction);
    let report = parser.scan(&text);

    for warning in &report.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => format_text(&report),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.all {
        list_candidates(&text, config.extraction.century_base);
    }

    debug!("processing time: {}ms", report.processing_time_ms);

    Ok(())
}

fn read_input(args: &ExtractArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let input = args.input.as_ref().expect("clap enforces input or --text");
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

fn format_text(report: &ScanReport) -> String {
    match &report.result {
        ExtractionResult::Found(date) => {
            format!("{} expires {}", style("✓").green(), date)
        }
        ExtractionResult::NotFound => {
            format!("{} no expiry date found", style("✗").red())
        }
    }
}

fn list_candidates(text: &str, century_base: i32) {
    let extractor = DateExtractor::new().with_century_base(century_base);
    let candidates = extractor.extract_all(text);

    if candidates.is_empty() {
        println!("{} no candidate dates", style("ℹ").blue());
        return;
    }

    println!();
    println!("{} {} candidate date(s):", style("ℹ").blue(), candidates.len());
    for candidate in candidates {
        println!(
            "  {} ({:.0}% from {:?})",
            candidate.value,
            candidate.confidence * 100.0,
            candidate.source
        );
    }
}
