//! Inspect command implementation.
//!
//! Decodes a binary trace and prints its records and a per-kind summary.

use crate::output::read_trace_file;
use crate::parser::AccessType;
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Binary trace to decode
    pub file: PathBuf,

    /// Maximum number of records to print (None = all)
    pub limit: Option<usize>,

    /// Print the summary as JSON instead of text
    pub json: bool,
}

/// Record counts for a decoded trace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    pub records: u64,
    pub instruction_reads: u64,
    pub data_reads: u64,
    pub data_writes: u64,
    pub min_address: Option<u64>,
    pub max_address: Option<u64>,
    pub total_bytes_accessed: u64,
}

impl TraceSummary {
    fn add(&mut self, access_type: AccessType, address: u64, size: u8) {
        self.records += 1;
        match access_type {
            AccessType::InstructionRead => self.instruction_reads += 1,
            AccessType::DataRead => self.data_reads += 1,
            AccessType::DataWrite => self.data_writes += 1,
            AccessType::DataModify => {}
        }
        self.min_address = Some(self.min_address.map_or(address, |min| min.min(address)));
        self.max_address = Some(self.max_address.map_or(address, |max| max.max(address)));
        self.total_bytes_accessed += u64::from(size);
    }
}

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
pub fn execute_inspect(args: InspectArgs) -> Result<TraceSummary> {
    info!("Inspecting trace: {}", args.file.display());

    let reader = read_trace_file(&args.file)
        .with_context(|| format!("Failed to open trace {}", args.file.display()))?;

    let mut summary = TraceSummary::default();
    let print_records = !args.json;

    for record in reader {
        let record = record.with_context(|| format!("Failed to decode {}", args.file.display()))?;

        // from_bytes only accepts known kinds
        let Some(access_type) = record.access_type() else {
            continue;
        };

        if print_records && args.limit.map_or(true, |limit| summary.records < limit as u64) {
            println!(
                "{:>8}  {}  {:#018x}  {:>3}",
                summary.records,
                access_type.symbol(),
                record.address,
                record.size
            );
        }

        summary.add(access_type, record.address, record.size);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", json);
    } else {
        print_summary(&summary);
    }

    Ok(summary)
}

/// Print the text summary
///
/// **Private** - internal helper for execute_inspect
fn print_summary(summary: &TraceSummary) {
    println!();
    println!("Records:           {}", summary.records);
    println!("Instruction reads: {}", summary.instruction_reads);
    println!("Data reads:        {}", summary.data_reads);
    println!("Data writes:       {}", summary.data_writes);
    if let (Some(min), Some(max)) = (summary.min_address, summary.max_address) {
        println!("Address range:     {:#x} - {:#x}", min, max);
    }
    println!("Bytes accessed:    {}", summary.total_bytes_accessed);
}
