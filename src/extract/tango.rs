//! Tango extractor: locked sun/moon glyphs plus equal/cross edge relations.
//!
//! Edge markers sit inside a cell and name their side with a `--right` /
//! `--down` class modifier; the constraint kind comes from the accessible
//! label on the marker's embedded SVG. Decoding is permissive: an edge with
//! an unrecognized side keeps step 0, an edge with no recognizable label
//! keeps [`EdgeKind::None`]. Both survive to partition time, where only
//! `None`-kind entries are dropped.

use super::{cell_index, has_class, ExtractError, GridDom};
use crate::model::{Direction, Edge, EdgeKind, Glyph, GlyphCell, TangoData};
use scraper::Selector;

const GRID: &str = ".lotka-grid";
const CELL: &str = ".lotka-cell";
const LOCKED_CELL: &str = ".lotka-cell--locked";
const EDGE: &str = ".lotka-cell-edge";
const EDGE_RIGHT: &str = "lotka-cell-edge--right";
const EDGE_DOWN: &str = "lotka-cell-edge--down";
const SUN_GLYPH: &str = "svg g#Sun";
const EQUAL_GLYPH: &str = r#"svg[aria-label="Equal"]"#;
const CROSS_GLYPH: &str = r#"svg[aria-label="Cross"]"#;

/// Extract the Tango constraint record from one page snapshot.
pub fn extract(html: &str) -> Result<TangoData, ExtractError> {
    let dom = GridDom::parse(html, GRID);
    let dims = dom.dimensions()?;

    let locked_sel = Selector::parse(LOCKED_CELL).unwrap();
    let sun_sel = Selector::parse(SUN_GLYPH).unwrap();
    let mut locked_cells = Vec::new();
    for cell in dom.grid_select(&locked_sel)? {
        let cell_id = cell_index(cell)?;
        let cell_type = if cell.select(&sun_sel).next().is_some() {
            Glyph::Sun
        } else {
            Glyph::Moon
        };
        locked_cells.push(GlyphCell { cell_id, cell_type });
    }

    let cell_sel = Selector::parse(CELL).unwrap();
    let edge_sel = Selector::parse(EDGE).unwrap();
    let equal_sel = Selector::parse(EQUAL_GLYPH).unwrap();
    let cross_sel = Selector::parse(CROSS_GLYPH).unwrap();

    let mut edges = Vec::new();
    for cell in dom.grid_select(&cell_sel)? {
        let markers: Vec<_> = cell.select(&edge_sel).collect();
        if markers.is_empty() {
            continue;
        }
        let start = cell_index(cell)?;
        for marker in markers {
            let direction = if has_class(marker, EDGE_RIGHT) {
                Direction::Right
            } else if has_class(marker, EDGE_DOWN) {
                Direction::Down
            } else {
                Direction::None
            };
            let kind = if marker.select(&equal_sel).next().is_some() {
                EdgeKind::Equal
            } else if marker.select(&cross_sel).next().is_some() {
                EdgeKind::Cross
            } else {
                EdgeKind::None
            };
            edges.push(Edge {
                start,
                end: start + direction.step(dims.n_cols),
                kind,
            });
        }
    }

    // None-kind entries are constructed above and dropped only here.
    let equal_condition = edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Equal)
        .map(|e| e.pair())
        .collect();
    let cross_condition = edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Cross)
        .map(|e| e.pair())
        .collect();

    Ok(TangoData {
        n_rows: dims.n_rows,
        n_cols: dims.n_cols,
        locked_cells,
        equal_condition,
        cross_condition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(cells: &str) -> String {
        format!(
            r#"<html><body>
            <div class="lotka-grid" style="--rows: 6; --cols: 6;">{cells}</div>
            </body></html>"#
        )
    }

    const SUN_SVG: &str = r#"<svg><g id="Sun"><circle/></g></svg>"#;
    const MOON_SVG: &str = r#"<svg><g id="Moon"><path/></g></svg>"#;

    #[test]
    fn test_right_equal_edge() {
        let html = page(
            r#"<div class="lotka-cell" data-cell-idx="7">
                 <div class="lotka-cell-edge lotka-cell-edge--right">
                   <svg aria-label="Equal"></svg>
                 </div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(data.equal_condition, vec![[7, 8]]);
        assert!(data.cross_condition.is_empty());
    }

    #[test]
    fn test_down_cross_edge_uses_row_stride() {
        let html = page(
            r#"<div class="lotka-cell" data-cell-idx="10">
                 <div class="lotka-cell-edge lotka-cell-edge--down">
                   <svg aria-label="Cross"></svg>
                 </div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(data.cross_condition, vec![[10, 16]]);
        assert!(data.equal_condition.is_empty());
    }

    #[test]
    fn test_unlabeled_edge_is_dropped_at_partition() {
        let html = page(
            r#"<div class="lotka-cell" data-cell-idx="2">
                 <div class="lotka-cell-edge lotka-cell-edge--right">
                   <svg aria-label="Sparkle"></svg>
                 </div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        assert!(data.equal_condition.is_empty());
        assert!(data.cross_condition.is_empty());
    }

    #[test]
    fn test_labeled_edge_without_direction_degrades_to_self_pair() {
        // Unknown side modifier means step 0: the labeled edge is kept and
        // resolves to a degenerate [s, s] pair, matching the page contract's
        // permissive decode.
        let html = page(
            r#"<div class="lotka-cell" data-cell-idx="5">
                 <div class="lotka-cell-edge">
                   <svg aria-label="Equal"></svg>
                 </div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(data.equal_condition, vec![[5, 5]]);
    }

    #[test]
    fn test_locked_cells_decode_sun_and_moon() {
        let html = page(&format!(
            r#"<div class="lotka-cell lotka-cell--locked" data-cell-idx="0">{SUN_SVG}</div>
               <div class="lotka-cell lotka-cell--locked" data-cell-idx="4">{MOON_SVG}</div>"#
        ));
        let data = extract(&html).unwrap();
        assert_eq!(
            data.locked_cells,
            vec![
                GlyphCell { cell_id: 0, cell_type: Glyph::Sun },
                GlyphCell { cell_id: 4, cell_type: Glyph::Moon },
            ]
        );
    }

    #[test]
    fn test_conditions_are_disjoint() {
        let html = page(
            r#"<div class="lotka-cell" data-cell-idx="1">
                 <div class="lotka-cell-edge lotka-cell-edge--right">
                   <svg aria-label="Equal"></svg>
                 </div>
                 <div class="lotka-cell-edge lotka-cell-edge--down">
                   <svg aria-label="Cross"></svg>
                 </div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(data.equal_condition, vec![[1, 2]]);
        assert_eq!(data.cross_condition, vec![[1, 7]]);
        for pair in &data.equal_condition {
            assert!(!data.cross_condition.contains(pair));
        }
    }

    #[test]
    fn test_cell_without_edges_needs_no_index() {
        // Cells hosting no markers are skipped before the index attribute
        // is read, so decorative cells without data-cell-idx are harmless.
        let html = page(
            r#"<div class="lotka-cell"></div>
               <div class="lotka-cell" data-cell-idx="3">
                 <div class="lotka-cell-edge lotka-cell-edge--right">
                   <svg aria-label="Equal"></svg>
                 </div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(data.equal_condition, vec![[3, 4]]);
    }

    #[test]
    fn test_right_pairs_stay_in_row() {
        let html = page(
            r#"<div class="lotka-cell" data-cell-idx="13">
                 <div class="lotka-cell-edge lotka-cell-edge--right">
                   <svg aria-label="Equal"></svg>
                 </div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        let [s, e] = data.equal_condition[0];
        assert_eq!(e - s, 1);
        assert_eq!(s / data.n_cols, e / data.n_cols);
    }
}
