#[cfg(test)]
mod tests;

use crate::cutter::CutterError;
use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

/// Prefix for auto-generated output directories
pub const AUTO_DIR_PREFIX: &str = "cutter-";

/// Number of digest bytes kept in an auto-generated name (16 hex chars)
const AUTO_DIR_HASH_BYTES: usize = 8;

/// Resolve and create the output directory.
///
/// An explicit path is used as given; an empty one gets a name derived from
/// the current time. Missing parent directories are created too.
pub fn resolve_output_dir(output_dir: &str) -> Result<PathBuf, CutterError> {
    let dir = if output_dir.is_empty() {
        PathBuf::from(auto_dir_name(Utc::now()))
    } else {
        PathBuf::from(output_dir)
    };

    fs::create_dir_all(&dir).map_err(|source| CutterError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    tracing::debug!(dir = %dir.display(), "output directory ready");
    Ok(dir)
}

/// Directory name for a split started at `at`.
///
/// No collision check is made; two names are only distinct if the
/// timestamps differ.
pub fn auto_dir_name(at: DateTime<Utc>) -> String {
    let stamp = at.to_rfc3339_opts(SecondsFormat::Nanos, true);
    let digest = Sha256::digest(stamp.as_bytes());
    format!(
        "{}{}",
        AUTO_DIR_PREFIX,
        hex::encode(&digest[..AUTO_DIR_HASH_BYTES])
    )
}
