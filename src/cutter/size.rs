use super::writer::write_chunk;
use super::{CutterError, DEFAULT_CHUNK_SIZE, SplitSummary, open_input};
use crate::output::resolve_output_dir;
use std::io::Read;
use std::path::Path;

/// Split `input` into chunks of `chunk_size` bytes.
///
/// An empty `output_dir` asks for an auto-generated directory. The last chunk
/// holds whatever is left and may be shorter. An empty input produces no
/// chunks.
pub fn split_by_size(
    input: impl AsRef<Path>,
    output_dir: &str,
    chunk_size: u64,
) -> Result<SplitSummary, CutterError> {
    validate_chunk_size(chunk_size)?;

    let input = input.as_ref();
    let file = open_input(input)?;
    let total_len = file
        .metadata()
        .map_err(|source| CutterError::Metadata {
            path: input.to_path_buf(),
            source,
        })?
        .len();
    let dir = resolve_output_dir(output_dir)?;

    // A chunk never holds more than the whole file.
    let capacity = chunk_size.min(total_len).max(1);
    let summary = split_chunks(file, &dir, chunk_size, capacity)?;
    tracing::info!(
        chunks = summary.chunk_count,
        bytes = summary.total_bytes,
        dir = %dir.display(),
        "split by size complete"
    );
    Ok(summary)
}

/// Size-based split over any reader into an existing directory.
///
/// The buffer grows with the data actually read, so `chunk_size` may exceed
/// what the reader holds.
pub fn split_reader_by_size<R: Read>(
    reader: R,
    dir: &Path,
    chunk_size: u64,
) -> Result<SplitSummary, CutterError> {
    validate_chunk_size(chunk_size)?;
    split_chunks(reader, dir, chunk_size, chunk_size.min(DEFAULT_CHUNK_SIZE))
}

fn split_chunks<R: Read>(
    mut reader: R,
    dir: &Path,
    chunk_size: u64,
    capacity: u64,
) -> Result<SplitSummary, CutterError> {
    let capacity = usize::try_from(capacity).unwrap_or(DEFAULT_CHUNK_SIZE as usize);
    let mut buffer = Vec::with_capacity(capacity);
    let mut summary = SplitSummary::new(dir);

    loop {
        buffer.clear();
        let bytes_read = reader
            .by_ref()
            .take(chunk_size)
            .read_to_end(&mut buffer)
            .map_err(CutterError::Read)?;
        if bytes_read == 0 {
            break;
        }

        write_chunk(dir, summary.chunk_count, &buffer)?;
        summary.record(bytes_read);

        if (bytes_read as u64) < chunk_size {
            break;
        }
    }

    Ok(summary)
}

fn validate_chunk_size(chunk_size: u64) -> Result<(), CutterError> {
    if chunk_size == 0 {
        return Err(CutterError::InvalidArgument(
            "chunk size must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
