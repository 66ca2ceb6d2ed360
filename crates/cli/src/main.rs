mod echo;

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use postmetric_core::{
    AnalysisConfig, Analyzer, ContentAnalysis, JsonConfig, PostMeta, TextConfig, read_file, read_stdin,
    report_to_json, report_to_text, report_to_toml,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::echo::{
    format_size, print_banner, print_info, print_score_summary, print_step, print_success, print_timing_summary,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(format!("Invalid format: {}. Valid options: text, json, toml", s)),
        }
    }
}

/// Score post content for structure, SEO and readability
#[derive(Parser, Debug)]
#[command(name = "postmetric")]
#[command(author = "Postmetric Contributors")]
#[command(version)]
#[command(about = "Score post content for structure, SEO and readability", long_about = None)]
struct Args {
    /// HTML or text file to analyze, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Post title used for SEO scoring
    #[arg(short, long, value_name = "TITLE")]
    title: Option<String>,

    /// Meta description used for SEO scoring
    #[arg(short, long, value_name = "TEXT")]
    meta_description: Option<String>,

    /// Focus keyword used for SEO scoring
    #[arg(short, long, value_name = "KEYWORD")]
    keyword: Option<String>,

    /// Output format (text, json, toml)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Reading rate used for the reading time estimate
    #[arg(long, default_value = "200", value_name = "WPM")]
    reading_wpm: usize,

    /// Speaking rate used for the speaking time estimate
    #[arg(long, default_value = "150", value_name = "WPM")]
    speaking_wpm: usize,

    /// Omit SEO messages from text output
    #[arg(long)]
    no_seo_messages: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter =
        if verbose { "postmetric=debug,postmetric_core=debug" } else { "postmetric=warn,postmetric_core=warn" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run each stage separately so verbose mode can report per-stage timings
fn analyze_timed(
    analyzer: &Analyzer, content: &str, meta: &PostMeta,
) -> (ContentAnalysis, Vec<(&'static str, Duration)>) {
    let start = Instant::now();
    let statistics = analyzer.analyze_structure(content);
    let structure_time = start.elapsed();

    let start = Instant::now();
    let readability = analyzer.analyze_readability(content);
    let readability_time = start.elapsed();

    let start = Instant::now();
    let seo = analyzer.analyze_seo(content, meta, &statistics);
    let seo_time = start.elapsed();

    let timings = vec![("Structure", structure_time), ("Readability", readability_time), ("SEO", seo_time)];
    (ContentAnalysis { statistics, readability, seo }, timings)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let total_start = Instant::now();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let config = AnalysisConfig::builder()
        .reading_words_per_minute(args.reading_wpm)
        .speaking_words_per_minute(args.speaking_wpm)
        .build();
    config.validate().context("Invalid analysis options")?;

    let content = if args.input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        read_stdin().context("Failed to read from stdin")?
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        read_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    tracing::debug!(bytes = content.len(), input = %args.input, "input loaded");

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(content.len()).bright_white());
        eprintln!();
        print_step(2, 3, "Analyzing content");
    }

    let meta = PostMeta { title: args.title, meta_description: args.meta_description, focus_keyword: args.keyword };
    let analyzer = Analyzer::with_config(config);
    let (analysis, timings) = analyze_timed(&analyzer, &content, &meta);

    if args.verbose {
        print_score_summary(&analysis);
    }

    let output = match args.format {
        OutputFormat::Text => {
            let config = TextConfig { include_seo_messages: !args.no_seo_messages, ..Default::default() };
            report_to_text(&analysis, &meta, &config).context("Failed to render text report")?
        }
        OutputFormat::Json => {
            let config = JsonConfig { pretty: args.pretty, ..Default::default() };
            report_to_json(&analysis, &config).context("Failed to render JSON report")?
        }
        OutputFormat::Toml => report_to_toml(&analysis).context("Failed to render TOML report")?,
    };

    if args.verbose {
        print_step(3, 3, "Writing output");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        eprintln!();
        print_timing_summary(total_start.elapsed(), &timings);
    }

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            if args.verbose {
                print_success(&format!("Output written to {}", path.display().bright_white()));
            }
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
