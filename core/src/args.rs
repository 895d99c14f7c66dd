use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "matprobe")]
#[command(about = "Probe the material table for one or more positions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Positions in FEN. Defaults to the starting position.
    pub fens: Vec<String>,

    /// Rule set: chess or antichess.
    #[arg(long, default_value = "chess")]
    pub variant: String,

    /// Material table entries (rounded up to a power of two).
    #[arg(long, default_value_t = 8192)]
    pub table_size: usize,

    /// Write the log to a file instead of stderr.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}
