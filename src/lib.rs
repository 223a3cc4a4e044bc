// Public API exports
pub mod cutter;
pub mod output;

// Re-export main types for convenience
pub use cutter::{
    ChunkPlan, CutterError, DEFAULT_CHUNK_SIZE, SplitMode, SplitSummary, chunk_file_name, split,
    split_by_count, split_by_size,
};

pub use output::{auto_dir_name, resolve_output_dir};
