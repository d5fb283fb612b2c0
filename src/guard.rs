//! Page-identity gate: capture only proceeds on the matching game page.
//!
//! The live pipeline navigates to the puzzle URL itself, so the gate
//! checks the *final* URL after redirects — an auth wall or interstitial
//! lands somewhere else, and the run must abort without output.

use crate::puzzle::Puzzle;
use url::Url;

/// Host every puzzle page lives on.
pub const TARGET_HOST: &str = "www.linkedin.com";

/// True when `url` is the given puzzle's game page.
pub fn is_puzzle_page(url: &str, puzzle: Puzzle) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    parsed.host_str() == Some(TARGET_HOST)
        && with_trailing_slash(parsed.path()) == puzzle.target_path()
}

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}
