pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

/// Export gopass credentials as CSV or readable text.
///
/// Entries under the prefix (default `browser/`) are normalized into a
/// fixed set of columns and written to stdout.
#[derive(Parser, Debug)]
#[command(name = "passexport", version, about, long_about = None)]
pub struct Cli {
    /// Write CSV instead of readable text (any non-empty `CSV` value turns it on)
    #[arg(
        long,
        env = "CSV",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = parse_csv_switch
    )]
    pub csv: Option<bool>,

    /// Write readable text even if CSV is configured or `CSV` is set
    #[arg(long)]
    pub text: bool,

    /// Only export entries whose name starts with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Revision to read each entry at (default: latest)
    #[arg(long, allow_hyphen_values = true)]
    pub revision: Option<String>,

    /// Warn and continue when an entry cannot be read
    #[arg(long)]
    pub skip_errors: bool,

    /// Read entries from a JSON snapshot instead of gopass
    #[arg(long, value_name = "FILE")]
    pub store_file: Option<PathBuf>,

    /// Path to the gopass binary
    #[arg(long, value_name = "PATH")]
    pub gopass: Option<PathBuf>,

    /// Path to alternative config file
    #[arg(long, env = "PASSEXPORT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// True when `--csv` was given or `CSV` holds a non-empty value.
    pub fn csv_requested(&self) -> bool {
        self.csv.unwrap_or(false)
    }
}

/// `CSV=0` and `CSV=false` still select CSV; only an empty value does not.
fn parse_csv_switch(value: &str) -> Result<bool, String> {
    Ok(!value.is_empty())
}
