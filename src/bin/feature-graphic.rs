use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use feature_graphic::{GraphicConfig, GraphicError, GraphicReport};

/// Generate the store-listing feature graphic.
///
/// With no arguments the built-in banner is written to `assets/images/feature-graphic.png`.
#[derive(Parser, Debug)]
#[command(name = "feature-graphic", version)]
struct Cli {
    /// JSON configuration overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path (overrides the configured one).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit without rendering.
    #[arg(long)]
    print_config: bool,

    /// Log font resolution details to stderr.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        report_error(&err);
    }
    ExitCode::SUCCESS
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GraphicConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => GraphicConfig::default(),
    };
    if let Some(out) = cli.out {
        config.output = out;
    }

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let report = feature_graphic::generate(&config)?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &GraphicReport) {
    println!("Feature graphic created: {}", report.path.display());
    println!("   Dimensions: {}x{}px", report.width, report.height);
    println!("   File size: {:.2} KB", report.size_kb());
    println!();
    println!("Note: this is a basic template. For best results:");
    println!("   1. Replace the title with the actual app logo");
    println!("   2. Use professional fonts");
    println!("   3. Add high-quality icons");
    println!("   4. Refine colors and layout");
    println!("   5. Consider using Canva or Figma for better design");
}

/// Print a failure. Reported failures still exit with status 0.
fn report_error(err: &anyhow::Error) {
    let graphic = err.chain().find_map(|e| e.downcast_ref::<GraphicError>());
    if let Some(g) = graphic.filter(|g| g.is_dependency_missing()) {
        println!("Error: {g}");
        println!("   Rebuild with the `png` feature enabled to produce images.");
        return;
    }

    println!("Error: {err:#}");
    println!("   This tool creates a basic template; see --help for configuration options.");
    println!("   For best results, use Canva or Figma for the final design.");
}
