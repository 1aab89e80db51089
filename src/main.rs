//! Lackey Trace Converter CLI
//!
//! Converts valgrind lackey memory traces into binary address traces.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use lackey_trace_converter::commands::{
    execute_convert, execute_inspect, validate_args, ConvertArgs, InspectArgs,
};
use lackey_trace_converter::utils::config::{
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, RECORD_SIZE,
};

/// Convert valgrind lackey traces into binary address traces
#[derive(Parser, Debug)]
#[command(name = "trace-convert")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Optional subcommand; without one the trace is converted
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertOpts,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options for the default conversion
#[derive(Args, Debug)]
struct ConvertOpts {
    /// Lackey log to read
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Binary trace to write
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print conversion summary to stdout
    #[arg(long)]
    summary: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a binary trace and list its records
    Inspect {
        /// Path to binary trace file
        file: PathBuf,

        /// Number of records to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        None => {
            let args = ConvertArgs {
                input: cli.convert.input,
                output: cli.convert.output,
                print_summary: cli.convert.summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_convert(args)?;
        }

        Some(Commands::Inspect { file, limit, json }) => {
            execute_inspect(InspectArgs { file, limit, json })?;
        }

        Some(Commands::Version) => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Lackey Trace Converter v{}", env!("CARGO_PKG_VERSION"));
    println!("Record size: {} bytes (little-endian)", RECORD_SIZE);
    println!();
    println!("Converts valgrind lackey memory traces into binary address traces.");
}
