use clap::Parser;
use std::path::PathBuf;

use nitfmeta::types::{FootprintPolicy, OutputFormat};

#[derive(Parser)]
#[command(name = "nitfmeta", version, about = "NITF metadata transformer CLI")]
pub struct CliArgs {
    /// Input structural dump (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing structural dumps (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode); stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// What to write: metacard (JSON), xml or wkt
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Metacard)]
    pub format: OutputFormat,

    /// Metacard id (single file mode)
    #[arg(long)]
    pub id: Option<String>,

    /// Transformer config file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Footprint policy for files with several image segments (overrides config)
    #[arg(long, value_enum)]
    pub footprint_policy: Option<FootprintPolicy>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode (implied by --input-dir)
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Batch mode: stop at the first file that fails instead of continuing
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,
}
