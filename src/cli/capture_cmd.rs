//! `gridsnap capture <puzzle>` — capture from the live LinkedIn page.

use crate::capture::{self, CaptureOptions};
use crate::puzzle::Puzzle;
use crate::renderer::chromium::{find_chromium, ChromiumRenderer};
use crate::renderer::{NoopRenderer, Renderer};
use anyhow::Result;
use std::path::PathBuf;
use tracing::warn;

/// Run the capture command.
pub async fn run(
    puzzle: Puzzle,
    timeout_ms: u64,
    out_dir: PathBuf,
    stdout: bool,
    profile_dir: Option<String>,
) -> Result<()> {
    let renderer: Box<dyn Renderer> = if find_chromium().is_some() {
        Box::new(ChromiumRenderer::new(profile_dir.as_deref()).await?)
    } else {
        warn!("Chromium not found; see `gridsnap doctor`");
        Box::new(NoopRenderer)
    };

    let opts = CaptureOptions {
        timeout_ms,
        out_dir,
        stdout,
    };
    let result = capture::run(renderer.as_ref(), puzzle, &opts).await;
    renderer.shutdown().await?;

    if let Some(path) = result? {
        println!("Saved {}", path.display());
    }
    Ok(())
}
