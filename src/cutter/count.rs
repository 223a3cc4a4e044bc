use super::reader::fill_buffer;
use super::writer::write_chunk;
use super::{CutterError, SplitSummary, open_input};
use crate::output::resolve_output_dir;
use std::io::Read;
use std::path::Path;

/// Chunk sizes for splitting `total_len` bytes into `count` chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkPlan {
    pub count: u64,
    /// Size of every chunk except the last
    pub chunk_size: u64,
    /// Size of the last chunk, which absorbs the remainder
    pub last_chunk_size: u64,
}

impl ChunkPlan {
    /// Compute the plan, rejecting zero counts, empty inputs and counts that
    /// would leave the non-final chunks empty.
    pub fn new(total_len: u64, count: u64) -> Result<Self, CutterError> {
        if count == 0 {
            return Err(CutterError::InvalidArgument(
                "chunk count must be greater than zero".to_string(),
            ));
        }
        if total_len == 0 {
            return Err(CutterError::InvalidArgument(
                "cannot split an empty file into chunks".to_string(),
            ));
        }

        let chunk_size = total_len / count;
        if chunk_size == 0 {
            return Err(CutterError::InvalidArgument(format!(
                "cannot split {} bytes into {} chunks",
                total_len, count
            )));
        }

        Ok(Self {
            count,
            chunk_size,
            last_chunk_size: total_len - chunk_size * (count - 1),
        })
    }

    pub fn size_of(&self, index: u64) -> u64 {
        if index + 1 == self.count {
            self.last_chunk_size
        } else {
            self.chunk_size
        }
    }
}

/// Split `input` into exactly `chunk_count` chunks.
///
/// All chunks but the last have `file_size / chunk_count` bytes; the last
/// takes the remainder. If the input turns out shorter than its metadata
/// claimed, the split stops early and still succeeds.
pub fn split_by_count(
    input: impl AsRef<Path>,
    output_dir: &str,
    chunk_count: u64,
) -> Result<SplitSummary, CutterError> {
    if chunk_count == 0 {
        return Err(CutterError::InvalidArgument(
            "chunk count must be greater than zero".to_string(),
        ));
    }

    let input = input.as_ref();
    let file = open_input(input)?;
    let total_len = file
        .metadata()
        .map_err(|source| CutterError::Metadata {
            path: input.to_path_buf(),
            source,
        })?
        .len();

    // Validate before the output directory exists.
    ChunkPlan::new(total_len, chunk_count)?;
    let dir = resolve_output_dir(output_dir)?;

    let summary = split_reader_by_count(file, &dir, total_len, chunk_count)?;
    tracing::info!(
        chunks = summary.chunk_count,
        bytes = summary.total_bytes,
        dir = %dir.display(),
        "split by count complete"
    );
    Ok(summary)
}

/// Count-based split over any reader expected to yield `total_len` bytes.
pub fn split_reader_by_count<R: Read>(
    mut reader: R,
    dir: &Path,
    total_len: u64,
    chunk_count: u64,
) -> Result<SplitSummary, CutterError> {
    let plan = ChunkPlan::new(total_len, chunk_count)?;
    let buf_len = usize::try_from(plan.last_chunk_size).map_err(|_| {
        CutterError::InvalidArgument(format!(
            "chunk size {} does not fit in memory",
            plan.last_chunk_size
        ))
    })?;

    let mut buffer = vec![0u8; buf_len];
    let mut summary = SplitSummary::new(dir);

    for index in 0..plan.count {
        // size_of(index) <= last_chunk_size, so the cast cannot truncate.
        let want = plan.size_of(index) as usize;
        let buf = &mut buffer[..want];

        let got = fill_buffer(&mut reader, buf).map_err(CutterError::Read)?;
        if got > 0 {
            write_chunk(dir, summary.chunk_count, &buf[..got])?;
            summary.record(got);
        }

        if got < want {
            tracing::warn!(
                expected = plan.count,
                written = summary.chunk_count,
                "input ended early, stopping split"
            );
            break;
        }
    }

    Ok(summary)
}
