//! Loading and saving documents

use anyhow::{Context, Result};
use std::path::Path;

/// Read a file as lines of bytes
///
/// Line endings (`\n` or `\r\n`) are stripped. A final newline does not
/// produce an extra empty line.
pub fn load_lines(path: &Path) -> Result<Vec<Vec<u8>>> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let lines = split_lines(&bytes);
    tracing::info!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Split raw file contents into lines without their terminators
pub fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    let mut lines: Vec<Vec<u8>> = bytes
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect();
    if bytes.is_empty() || bytes.ends_with(b"\n") {
        lines.pop();
    }
    lines
}

/// Write `contents` to `path`, returning the number of bytes written
pub fn save(path: &Path, contents: &[u8]) -> Result<usize> {
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(contents.len())
}
