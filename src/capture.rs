//! One-shot live capture pipeline.
//!
//! Navigate to the puzzle page, pass the page-identity and DOM-readiness
//! gates, snapshot the HTML, run the extractor, and hand the result to the
//! sink. Extraction runs in `spawn_blocking` because the `scraper` types
//! backing it are `!Send`.

use crate::guard;
use crate::model::PuzzleData;
use crate::puzzle::Puzzle;
use crate::renderer::{RenderContext, Renderer};
use crate::sink;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Options for one capture run.
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Navigation and readiness timeout in milliseconds.
    pub timeout_ms: u64,
    /// Directory the JSON file is written into.
    pub out_dir: PathBuf,
    /// Print to stdout instead of writing a file.
    pub stdout: bool,
}

/// Capture one puzzle from the live page. Returns the written path, or
/// `None` when the output went to stdout.
pub async fn run(
    renderer: &dyn Renderer,
    puzzle: Puzzle,
    opts: &CaptureOptions,
) -> Result<Option<PathBuf>> {
    let data = snapshot(renderer, puzzle, opts.timeout_ms).await?;
    emit(&data, puzzle, &opts.out_dir, opts.stdout)
}

/// Navigate, gate, and extract — everything up to the sink.
pub async fn snapshot(
    renderer: &dyn Renderer,
    puzzle: Puzzle,
    timeout_ms: u64,
) -> Result<PuzzleData> {
    let mut ctx = renderer.new_context().await?;

    info!(%puzzle, url = puzzle.target_url(), "navigating");
    let nav = ctx.navigate(puzzle.target_url(), timeout_ms).await?;
    debug!(final_url = %nav.final_url, load_time_ms = nav.load_time_ms, "navigation finished");

    if !guard::is_puzzle_page(&nav.final_url, puzzle) {
        let _ = ctx.close().await;
        bail!(
            "not on the {puzzle} page: landed on {} — log in to LinkedIn in the \
             captured profile, open {} and rerun",
            nav.final_url,
            puzzle.target_url(),
        );
    }

    wait_for_dom_ready(ctx.as_ref(), timeout_ms).await?;

    let html = ctx.get_html().await?;
    ctx.close().await?;
    debug!(bytes = html.len(), "snapshot taken");

    let data = tokio::task::spawn_blocking(move || puzzle.extract(&html))
        .await
        .context("extraction task panicked")??;
    info!(%puzzle, "extraction complete");
    Ok(data)
}

/// Write the canonical document to its sink.
pub fn emit(
    data: &PuzzleData,
    puzzle: Puzzle,
    out_dir: &Path,
    to_stdout: bool,
) -> Result<Option<PathBuf>> {
    if to_stdout {
        println!("{}", data.to_pretty_json()?);
        return Ok(None);
    }
    let path = sink::write_json(data, puzzle, out_dir)?;
    info!(path = %path.display(), "puzzle data written");
    Ok(Some(path))
}

/// One-shot readiness gate: wait until the DOM is parsed.
///
/// Mirrors checking `document.readyState` for `interactive`/`complete` and
/// otherwise deferring; here the deferral is a poll with an overall
/// deadline.
async fn wait_for_dom_ready(ctx: &dyn RenderContext, timeout_ms: u64) -> Result<()> {
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        let state = ctx.execute_js("document.readyState").await?;
        if matches!(state.as_str(), Some("interactive" | "complete")) {
            return Ok(());
        }
        if Instant::now() >= deadline {
            bail!("page did not become ready within {timeout_ms}ms");
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
}
