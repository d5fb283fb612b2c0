//! The three supported puzzles and their fixed page contracts.

use crate::extract::{self, ExtractError};
use crate::model::PuzzleData;
use clap::ValueEnum;
use std::fmt;

/// A LinkedIn grid puzzle gridsnap knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Puzzle {
    /// Queens — place one queen per row, column, and color region.
    Queens,
    /// Tango — binary sun/moon grid with equal/cross edge constraints.
    Tango,
    /// Zip — single path through numbered cells, blocked by walls.
    Zip,
}

impl Puzzle {
    /// Canonical game page URL.
    pub fn target_url(self) -> &'static str {
        match self {
            Puzzle::Queens => "https://www.linkedin.com/games/queens/",
            Puzzle::Tango => "https://www.linkedin.com/games/tango/",
            Puzzle::Zip => "https://www.linkedin.com/games/zip",
        }
    }

    /// URL path the page-identity gate checks against.
    pub fn target_path(self) -> &'static str {
        match self {
            Puzzle::Queens => "/games/queens/",
            Puzzle::Tango => "/games/tango/",
            Puzzle::Zip => "/games/zip/",
        }
    }

    /// Fixed output filename for the captured JSON document.
    pub fn output_filename(self) -> &'static str {
        match self {
            Puzzle::Queens => "queens.json",
            Puzzle::Tango => "tango.json",
            Puzzle::Zip => "zip.json",
        }
    }

    /// Run this puzzle's extractor over one HTML snapshot.
    pub fn extract(self, html: &str) -> Result<PuzzleData, ExtractError> {
        match self {
            Puzzle::Queens => extract::queens::extract(html).map(PuzzleData::Queens),
            Puzzle::Tango => extract::tango::extract(html).map(PuzzleData::Tango),
            Puzzle::Zip => extract::zip::extract(html).map(PuzzleData::Zip),
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Puzzle::Queens => "Queens",
            Puzzle::Tango => "Tango",
            Puzzle::Zip => "Zip",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url_passes_its_own_gate() {
        // The Zip URL has no trailing slash while its path does; the gate
        // must accept every target URL as-is.
        for puzzle in [Puzzle::Queens, Puzzle::Tango, Puzzle::Zip] {
            assert!(crate::guard::is_puzzle_page(puzzle.target_url(), puzzle));
            assert!(puzzle.output_filename().ends_with(".json"));
        }
    }
}
