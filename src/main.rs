use anyhow::{Context, Result};
use clap::Parser;
use file_cutter::{DEFAULT_CHUNK_SIZE, SplitMode, split};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Split large files into smaller chunks
#[derive(Parser, Debug)]
#[command(name = "file-cutter")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file to split
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for chunks (auto-generated when omitted)
    #[arg(short, long, default_value = "")]
    output: String,

    /// Chunk size in bytes
    #[arg(short, long, default_value_t = DEFAULT_CHUNK_SIZE)]
    size: u64,

    /// Number of files to split into (overrides --size when positive)
    #[arg(short, long)]
    files: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn mode(&self) -> SplitMode {
        match self.files {
            Some(count) if count > 0 => SplitMode::ByCount(count),
            _ => SplitMode::BySize(self.size),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mode = args.mode();
    tracing::debug!(?mode, input = %args.input.display(), "starting split");

    let summary = split(&args.input, &args.output, mode)
        .with_context(|| format!("could not split {}", args.input.display()))?;

    println!("File successfully split into chunks.");
    println!(
        "{} chunk(s), {} bytes written to {}",
        summary.chunk_count,
        summary.total_bytes,
        summary.output_dir.display()
    );
    Ok(())
}
