//! File sink for the canonical puzzle JSON document.

use crate::model::PuzzleData;
use crate::puzzle::Puzzle;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Serialize `data` pretty-printed and write it under the puzzle's fixed
/// filename in `out_dir`. Nothing is written unless serialization
/// succeeded, so a failed run leaves no partial output behind.
pub fn write_json(data: &PuzzleData, puzzle: Puzzle, out_dir: &Path) -> Result<PathBuf> {
    let body = data
        .to_pretty_json()
        .context("failed to serialize puzzle data")?;
    let path = out_dir.join(puzzle.output_filename());
    std::fs::write(&path, body)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
