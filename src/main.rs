use clap::{Parser, Subcommand};
use seg_navigator::commands::*;
use seg_navigator::core::{error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seg-navigator")]
#[command(about = "Browse numbered image/segmentation datasets")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a segmentation directory and summarise its contents
    Scan {
        /// Directory holding img_N.nii.gz / img_N_segmentation.nrrd files
        dir: PathBuf,
    },
    /// Open a directory at index 0 and remember it for later commands
    Open {
        /// Directory holding img_N.nii.gz / img_N_segmentation.nrrd files
        dir: PathBuf,
    },
    /// Show the open directory, current view, index and available actions
    Status,
    /// Show the pair at an index
    Goto {
        /// Index to load (starting at 0)
        index: usize,
        /// Load the sub-image pair instead of the standard pair
        #[arg(short, long)]
        sub: bool,
    },
    /// Move to the next index (standard view)
    Next,
    /// Move to the previous index (standard view)
    Prev,
    /// Switch between standard and sub-image view at the current index
    Compare,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Scan { dir } => execute_scan(&dir),
        Commands::Open { dir } => execute_open(&dir),
        Commands::Status => execute_status(),
        Commands::Goto { index, sub } => execute_goto(index, sub),
        Commands::Next => execute_next(),
        Commands::Prev => execute_prev(),
        Commands::Compare => execute_compare(),
    };

    exit_on_error(result);
}

fn exit_on_error(result: Result<()>) {
    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
