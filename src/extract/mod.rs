//! Shared DOM plumbing for the puzzle extractors.
//!
//! [`GridDom`] is the page accessor the extractors work against: it wraps
//! one parsed HTML snapshot and exposes the few queries a puzzle page
//! supports — the grid container's dimensions, scoped cell selection, and
//! the per-cell index attribute. Keeping extraction behind this seam means
//! the encoding logic is exercised against synthetic fixtures without a
//! browser.
//!
//! All entry points are synchronous because the `scraper` crate's types are
//! `!Send`; async callers wrap extraction in `tokio::task::spawn_blocking`.

pub mod queens;
pub mod tango;
pub mod zip;

use crate::model::{CellIndex, GridDims};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Errors from reading a puzzle page snapshot.
///
/// All of these indicate the page structure changed out from under us (or
/// the wrong page was captured); none are recoverable. Unrecognized marker
/// decoration is deliberately *not* an error — it degrades to a neutral
/// value inside the extractors.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("grid container not found: {selector}")]
    GridNotFound { selector: &'static str },

    #[error("grid container has no numeric `{var}` style property")]
    MissingStyleVar { var: &'static str },

    #[error("cell is missing its data-cell-idx attribute")]
    MissingCellIndex,

    #[error("cell {cell_id} has no `{prefix}*` class")]
    MissingClass {
        cell_id: CellIndex,
        prefix: &'static str,
    },

    #[error("malformed number in {what}: {text:?}")]
    BadNumber { what: &'static str, text: String },
}

/// Page accessor over one parsed snapshot of a puzzle page.
pub struct GridDom {
    doc: Html,
    grid_selector: Selector,
    selector_str: &'static str,
}

impl GridDom {
    /// Parse a snapshot. The grid container is looked up lazily; its
    /// absence surfaces from [`dimensions`](Self::dimensions) or
    /// [`grid_select`](Self::grid_select).
    pub fn parse(html: &str, grid_selector: &'static str) -> Self {
        let sel = Selector::parse(grid_selector).unwrap();
        Self {
            doc: Html::parse_document(html),
            grid_selector: sel,
            selector_str: grid_selector,
        }
    }

    fn grid(&self) -> Result<ElementRef<'_>, ExtractError> {
        self.doc
            .select(&self.grid_selector)
            .next()
            .ok_or(ExtractError::GridNotFound {
                selector: self.selector_str,
            })
    }

    /// Read `(n_rows, n_cols)` from the container's `--rows` / `--cols`
    /// inline style custom properties. The values are authoritative page
    /// metadata; a missing container or property is fatal.
    pub fn dimensions(&self) -> Result<GridDims, ExtractError> {
        let style = self.grid()?.value().attr("style").unwrap_or("");
        Ok(GridDims {
            n_rows: style_var(style, "--rows")?,
            n_cols: style_var(style, "--cols")?,
        })
    }

    /// All elements inside the grid container matching `selector`, in
    /// document order. Document order is stable per query, which is what
    /// makes repeated extraction byte-identical.
    pub fn grid_select(&self, selector: &Selector) -> Result<Vec<ElementRef<'_>>, ExtractError> {
        Ok(self.grid()?.select(selector).collect())
    }
}

/// Parse a numeric CSS custom property out of an inline style attribute.
fn style_var(style: &str, var: &'static str) -> Result<usize, ExtractError> {
    let pattern = format!(r"{}\s*:\s*(\d+)", regex::escape(var));
    let re = Regex::new(&pattern).unwrap();
    re.captures(style)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .ok_or(ExtractError::MissingStyleVar { var })
}

/// Read the authoritative row-major index off a cell's `data-cell-idx`
/// attribute. The index is trusted as-is, never recomputed from DOM
/// position.
pub fn cell_index(cell: ElementRef<'_>) -> Result<CellIndex, ExtractError> {
    let raw = cell
        .value()
        .attr("data-cell-idx")
        .ok_or(ExtractError::MissingCellIndex)?;
    raw.trim().parse().map_err(|_| ExtractError::BadNumber {
        what: "data-cell-idx",
        text: raw.to_string(),
    })
}

/// True when the element's class list contains `name`.
pub fn has_class(el: ElementRef<'_>, name: &str) -> bool {
    el.value().classes().any(|c| c == name)
}

/// The remainder of the first class token starting with `prefix`.
pub fn class_suffix<'a>(el: ElementRef<'a>, prefix: &str) -> Option<&'a str> {
    el.value()
        .classes()
        .find_map(|c| c.strip_prefix(prefix))
}
