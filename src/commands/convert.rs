//! Convert command implementation.
//!
//! The convert command:
//! 1. Validates the input and output paths
//! 2. Streams the lackey log into the binary trace
//! 3. Reports conversion statistics

use crate::converter::{convert_file, ConversionStats};
use crate::utils::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Lackey log to read
    pub input: PathBuf,

    /// Binary trace to write
    pub output: PathBuf,

    /// Print conversion summary to stdout
    pub print_summary: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            print_summary: false,
        }
    }
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file cannot be read
/// * A trace line is malformed (the message names its line number and content)
/// * Output file cannot be written
pub fn execute_convert(args: ConvertArgs) -> Result<ConversionStats> {
    let start_time = Instant::now();

    info!("Input trace: {}", args.input.display());
    info!("Output trace: {}", args.output.display());

    let stats = convert_file(&args.input, &args.output).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    debug!("{}", stats.summary());

    if args.print_summary {
        print_summary(&args, &stats);
    }

    let elapsed = start_time.elapsed();
    info!("Conversion completed in {:.2}s", elapsed.as_secs_f64());

    Ok(stats)
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.input == args.output {
        anyhow::bail!("Input and output must be different files");
    }

    if !args.input.is_file() {
        anyhow::bail!("Input trace not found: {}", args.input.display());
    }

    Ok(())
}

/// Print the conversion summary
///
/// **Private** - internal helper for execute_convert
fn print_summary(args: &ConvertArgs, stats: &ConversionStats) {
    println!("\n{}", "=".repeat(60));
    println!("CONVERSION SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Input:               {}", args.input.display());
    println!("Output:              {}", args.output.display());
    println!("Lines read:          {}", stats.lines_read);
    println!("Records written:     {}", stats.records_written);
    println!("  Instruction reads: {}", stats.instruction_reads);
    println!("  Data reads:        {}", stats.data_reads);
    println!("  Data writes:       {}", stats.data_writes);
    println!("Comment lines:       {}", stats.comment_lines);
    println!("Modify skipped:      {}", stats.modify_skipped);
    println!("Unrecognized:        {}", stats.unrecognized_skipped);
    println!("{}", "=".repeat(60));
}
