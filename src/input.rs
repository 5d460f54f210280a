use std::{fs, io, path::Path};

use crate::error::ScanError;

/// Loads the whole log into memory, one element per line, in file order.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ScanError> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ScanError::MissingInput(path.to_path_buf()),
        _ => ScanError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "log loaded");
    Ok(lines)
}
