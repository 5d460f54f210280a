use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_LOG_FILE: &str = "logs/log20251226.json";
pub const DEFAULT_OUTPUT_FILE: &str = "recent_spotify_errors.txt";

#[derive(Parser, Debug)]
#[command(author, version, about = "Collect recent Spotify errors and warnings from a JSON log")]
pub struct Args {
    /// JSON-lines log file to scan
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    pub file: PathBuf,

    /// Text file the matching records are written to (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Print debug diagnostics to stderr
    #[arg(long)]
    pub debug: bool,
}
