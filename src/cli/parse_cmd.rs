//! `gridsnap parse <puzzle> <file>` — extract from a saved HTML snapshot.
//!
//! Bypasses both the page-identity and readiness gates: the snapshot is
//! assumed to be the puzzle page, saved fully rendered. Output bytes are
//! identical to a live capture of the same DOM.

use crate::capture;
use crate::puzzle::Puzzle;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run the parse command.
pub fn run(puzzle: Puzzle, file: PathBuf, out_dir: PathBuf, stdout: bool) -> Result<()> {
    let html = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let data = puzzle.extract(&html)?;

    if let Some(path) = capture::emit(&data, puzzle, &out_dir, stdout)? {
        println!("Saved {}", path.display());
    }
    Ok(())
}
