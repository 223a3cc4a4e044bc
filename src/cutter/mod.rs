mod count;
mod error;
mod reader;
mod size;
mod writer;


pub use count::{ChunkPlan, split_by_count, split_reader_by_count};
pub use error::CutterError;
pub use reader::fill_buffer;
pub use size::{split_by_size, split_reader_by_size};
pub use writer::{chunk_file_name, write_chunk};

use std::fs::File;
use std::path::{Path, PathBuf};

/// Default chunk size for size-based splitting (1 MiB)
pub const DEFAULT_CHUNK_SIZE: u64 = 1024 * 1024;

/// How a file should be split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Fixed number of bytes per chunk
    BySize(u64),
    /// Fixed number of chunks
    ByCount(u64),
}

/// What a split produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub output_dir: PathBuf,
    pub chunk_count: usize,
    pub total_bytes: u64,
}

impl SplitSummary {
    fn new(dir: &Path) -> Self {
        Self {
            output_dir: dir.to_path_buf(),
            chunk_count: 0,
            total_bytes: 0,
        }
    }

    fn record(&mut self, bytes: usize) {
        self.chunk_count += 1;
        self.total_bytes += bytes as u64;
    }
}

/// Split `input` into `output_dir` using `mode`
pub fn split(
    input: impl AsRef<Path>,
    output_dir: &str,
    mode: SplitMode,
) -> Result<SplitSummary, CutterError> {
    match mode {
        SplitMode::BySize(chunk_size) => split_by_size(input, output_dir, chunk_size),
        SplitMode::ByCount(chunk_count) => split_by_count(input, output_dir, chunk_count),
    }
}

fn open_input(path: &Path) -> Result<File, CutterError> {
    File::open(path).map_err(|source| CutterError::OpenInput {
        path: path.to_path_buf(),
        source,
    })
}
