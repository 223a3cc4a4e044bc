use super::CutterError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name for the chunk at `index`: `chunk_0000.txt`, `chunk_0001.txt`, ...
pub fn chunk_file_name(index: usize) -> String {
    format!("chunk_{:04}.txt", index)
}

/// Create a new chunk file in `dir` and write `data` to it.
///
/// The directory must already exist. The file handle is dropped before
/// returning, so every chunk is written exactly once and closed.
pub fn write_chunk(dir: &Path, index: usize, data: &[u8]) -> Result<PathBuf, CutterError> {
    let path = dir.join(chunk_file_name(index));

    let file = File::create(&path).map_err(|source| CutterError::CreateChunk {
        path: path.clone(),
        source,
    })?;
    write_all_to(file, &path, data)?;

    tracing::debug!(chunk = index, bytes = data.len(), path = %path.display(), "wrote chunk");
    Ok(path)
}

fn write_all_to<W: Write>(mut out: W, path: &Path, data: &[u8]) -> Result<(), CutterError> {
    out.write_all(data)
        .and_then(|_| out.flush())
        .map_err(|source| CutterError::WriteChunk {
            path: path.to_path_buf(),
            source,
        })
}
