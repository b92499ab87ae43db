/// Subtitle Scanner - classifies .srt subtitle files by probable language
///
/// The main entry point for the scanner. It resolves the directory to scan,
/// runs the classification pass exactly once, prints a console summary, and
/// then serves the rendered HTML report until interrupted.

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use subtitle_scanner::core::classifier;
use subtitle_scanner::core::scanner;
use subtitle_scanner::core::stats::Stats;
use subtitle_scanner::web::{report, server};
use subtitle_scanner::SubtitleResult;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "subtitle_scanner",
    version = "0.1.0",
    about = "Classifies .srt subtitle files by probable language",
    long_about = "Scans a directory for .srt subtitle files, classifies each one as English,
Portuguese or undetermined by keyword matching over its decoded text, and
serves the results as an HTML table on a local web page."
)]
struct Args {
    /// Directory containing .srt files (prompted for when omitted)
    directory: Option<PathBuf>,

    /// Port for the report server
    #[arg(long = "port", default_value = "5000")]
    port: u16,

    /// Suppress the per-file console listing
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: subtitle_scanner.log)
    #[arg(long = "log-file", default_value = "subtitle_scanner.log")]
    log_file: String,
}

/// Main entry point function
fn main() -> Result<()> {
    // Record the start time
    let start_time = Instant::now();

    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let _ = setup_logging(&args);

    // Resolve and validate the scan directory; the server must not start
    // without a usable scan target.
    let directory = resolve_directory(&args)?;
    if !directory.is_dir() {
        eprintln!(
            "{} {} is not an existing directory",
            "Error:".red(),
            directory.display()
        );
        process::exit(1);
    }

    // Run the scan once; the report never changes afterwards
    let results = run_scan(&directory, &args)?;
    let stats = Stats::aggregate(&results);

    print_summary(&results, &stats, &args, start_time);

    let html = report::render_report(&results, &stats)?;

    println!("\n{}", "Starting the server...".bold());
    println!(
        "Visit {} in your browser.",
        format!("http://127.0.0.1:{}", args.port).cyan()
    );

    server::serve_report(html, args.port)
}

/// Set up logging with file output
fn setup_logging(args: &Args) -> Result<()> {
    // Configure logging
    let mut builder = env_logger::Builder::new();

    // Set log level from arguments
    builder.filter_level(args.log_level);

    // Set format
    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    // Add file output
    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Initialize logger
    builder.init();

    Ok(())
}

/// Resolve the directory to scan from the argument, or prompt for it
fn resolve_directory(args: &Args) -> Result<PathBuf> {
    match &args.directory {
        Some(directory) => Ok(directory.clone()),
        None => {
            let input: String = Input::new()
                .with_prompt("Enter the directory path containing .srt files")
                .interact_text()?;
            Ok(PathBuf::from(input.trim()))
        }
    }
}

/// Classify every subtitle file in the directory, with progress tracking
fn run_scan(directory: &Path, args: &Args) -> Result<Vec<SubtitleResult>> {
    let files = scanner::list_subtitle_files(directory)?;
    info!(
        "Found {} subtitle files in {}",
        files.len(),
        directory.display()
    );

    if files.is_empty() {
        println!("{}", "No .srt files found in the directory".yellow());
        return Ok(Vec::new());
    }

    println!("\n{} {} subtitle files...", "Scanning".bold(), files.len());

    // Set up progress bar
    let progress_bar = ProgressBar::new(files.len() as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );

    // One blocking classification at a time, in listing order
    let mut results = Vec::with_capacity(files.len());
    for file_path in &files {
        results.push(classifier::classify_file(file_path));
        progress_bar.inc(1);
    }

    progress_bar.finish_with_message("Scan complete");

    Ok(results)
}

/// Print the scan summary and, unless quiet, the per-file listing
fn print_summary(results: &[SubtitleResult], stats: &Stats, args: &Args, start_time: Instant) {
    let elapsed_time = start_time.elapsed();

    println!("\n{}", "Scan Complete".bold());
    println!("{} {}", "Files scanned:".green(), stats.total);
    println!("{} {}", "English:".green(), stats.english);
    println!("{} {}", "Portuguese:".green(), stats.portuguese);
    println!("{} {}", "Undetermined:".green(), stats.undefined);
    println!("{} {}", "Errors:".green(), stats.errors);
    println!(
        "{} {:.2} seconds",
        "Time elapsed:".green(),
        elapsed_time.as_secs_f64()
    );

    // Print per-file results
    if !args.quiet && !results.is_empty() {
        println!("\n{}", "=".repeat(80).bold());
        for result in results {
            match result {
                SubtitleResult::English { file_stem } => {
                    println!("  {} {}", "English:".cyan(), file_stem)
                }
                SubtitleResult::Portuguese { file_stem } => {
                    println!("  {} {}", "Portuguese:".cyan(), file_stem)
                }
                SubtitleResult::Undefined { file_stem } => {
                    println!("  {} {}", "Undetermined:".cyan(), file_stem)
                }
                SubtitleResult::Error { detail } => {
                    println!("  {} {}", "Error:".red(), detail)
                }
            }
        }
        println!("{}", "=".repeat(80).bold());
    }
}
