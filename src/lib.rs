//! Lackey Trace Converter
//!
//! Converts memory traces produced by valgrind's lackey tool
//! (`valgrind --tool=lackey --trace-mem=yes`) into a fixed-layout
//! binary address trace for trace-driven cache simulators.
//!
//! This crate provides the core implementation for the
//! `trace-convert` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! valgrind --log-file=data/cachetest --tool=lackey --trace-mem=yes ./program
//! trace-convert data/cachetest trace.tr
//! ```

pub mod commands;
pub mod converter;
pub mod output;
pub mod parser;
pub mod utils;

pub use converter::{convert, convert_file, ConversionStats};
pub use output::{RecordReader, TraceRecord};
pub use utils::error::{ConvertError, DecodeError, MalformedLineError};
