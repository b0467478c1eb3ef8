use std::path::PathBuf;

use clap::ValueEnum;

/// How command results are printed to stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Column-fitted table, coloured when stdout is a terminal.
    Table,
    /// Compact single-line JSON for piping.
    Raw,
}

/// Flags command handlers read after parsing.
///
/// Log verbosity is consumed by tracing setup in `main` and is not carried here.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub project: Option<PathBuf>,
}
