use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coco_quality")]
#[command(about = "A tool for auditing image quality in COCO-format datasets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan every image of a dataset for quality issues
    Scan {
        /// COCO instances annotation file
        #[arg(short, long)]
        annotations: PathBuf,

        /// Directory containing the dataset images
        #[arg(short, long)]
        images: PathBuf,

        /// Number of parallel workers (defaults to the CPU count)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Number of images handed to a worker at once
        #[arg(short, long, default_value = "50")]
        batch_size: usize,

        /// Capacity of the work and result channels
        #[arg(long, default_value = "100")]
        buffer_size: usize,

        /// Per-image evaluation timeout in milliseconds
        #[arg(short, long)]
        timeout_ms: Option<u64>,

        /// Write the full report as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the class distribution and flag unwanted classes
    Inspect {
        /// COCO instances annotation file
        #[arg(short, long)]
        annotations: PathBuf,

        /// Comma-separated class names to flag (defaults to common animal classes)
        #[arg(short, long, value_delimiter = ',')]
        unwanted: Option<Vec<String>>,
    },
}
