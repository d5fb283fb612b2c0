//! Zip extractor: numbered path-order cells plus wall barriers.
//!
//! Walls carry no constraint kind, only adjacency. Unlike Tango, a wall
//! marker with an unrecognized side is filtered out immediately — a wall
//! must always have a direction. That asymmetry between the two extractors
//! is deliberate.

use super::{cell_index, has_class, ExtractError, GridDom};
use crate::model::{Direction, NumberCell, Pair, ZipData};
use scraper::Selector;

const GRID: &str = ".trail-grid";
const CELL: &str = ".trail-cell";
const CONTENT: &str = ".trail-cell-content";
const WALL: &str = ".trail-cell-wall";
const WALL_RIGHT: &str = "trail-cell-wall--right";
const WALL_DOWN: &str = "trail-cell-wall--down";

/// Extract the Zip constraint record from one page snapshot.
pub fn extract(html: &str) -> Result<ZipData, ExtractError> {
    let dom = GridDom::parse(html, GRID);
    let dims = dom.dimensions()?;

    let cell_sel = Selector::parse(CELL).unwrap();
    let content_sel = Selector::parse(CONTENT).unwrap();
    let wall_sel = Selector::parse(WALL).unwrap();

    let cells = dom.grid_select(&cell_sel)?;

    let mut locked_cells = Vec::new();
    for cell in &cells {
        let Some(content) = cell.select(&content_sel).next() else {
            continue;
        };
        let cell_id = cell_index(*cell)?;
        let text: String = content.text().collect();
        let text = text.trim();
        let cell_number = text.parse().map_err(|_| ExtractError::BadNumber {
            what: "path-order cell text",
            text: text.to_string(),
        })?;
        locked_cells.push(NumberCell { cell_id, cell_number });
    }

    let mut wall_condition: Vec<Pair> = Vec::new();
    for cell in &cells {
        let walls: Vec<_> = cell.select(&wall_sel).collect();
        if walls.is_empty() {
            continue;
        }
        let start = cell_index(*cell)?;
        for wall in walls {
            let direction = if has_class(wall, WALL_RIGHT) {
                Direction::Right
            } else if has_class(wall, WALL_DOWN) {
                Direction::Down
            } else {
                Direction::None
            };
            // Walls without a direction never reach the output.
            if direction == Direction::None {
                continue;
            }
            wall_condition.push([start, start + direction.step(dims.n_cols)]);
        }
    }

    Ok(ZipData {
        n_rows: dims.n_rows,
        n_cols: dims.n_cols,
        locked_cells,
        wall_condition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(cells: &str) -> String {
        format!(
            r#"<html><body>
            <div class="trail-grid" style="--rows: 5; --cols: 5;">{cells}</div>
            </body></html>"#
        )
    }

    #[test]
    fn test_down_wall_resolves_by_row_stride() {
        let html = page(
            r#"<div class="trail-cell" data-cell-idx="12">
                 <div class="trail-cell-wall trail-cell-wall--down"></div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(data.wall_condition, vec![[12, 17]]);
    }

    #[test]
    fn test_right_wall() {
        let html = page(
            r#"<div class="trail-cell" data-cell-idx="6">
                 <div class="trail-cell-wall trail-cell-wall--right"></div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(data.wall_condition, vec![[6, 7]]);
    }

    #[test]
    fn test_non_directional_wall_is_filtered() {
        let html = page(
            r#"<div class="trail-cell" data-cell-idx="12">
                 <div class="trail-cell-wall"></div>
                 <div class="trail-cell-wall trail-cell-wall--down"></div>
               </div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(data.wall_condition, vec![[12, 17]]);
    }

    #[test]
    fn test_numbered_cells() {
        let html = page(
            r#"<div class="trail-cell" data-cell-idx="0">
                 <div class="trail-cell-content"> 1 </div>
               </div>
               <div class="trail-cell" data-cell-idx="24">
                 <div class="trail-cell-content">8</div>
               </div>
               <div class="trail-cell" data-cell-idx="3"></div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(
            data.locked_cells,
            vec![
                NumberCell { cell_id: 0, cell_number: 1 },
                NumberCell { cell_id: 24, cell_number: 8 },
            ]
        );
    }

    #[test]
    fn test_malformed_path_order_text_is_fatal() {
        let html = page(
            r#"<div class="trail-cell" data-cell-idx="0">
                 <div class="trail-cell-content">one</div>
               </div>"#,
        );
        assert!(matches!(
            extract(&html).unwrap_err(),
            ExtractError::BadNumber { .. }
        ));
    }

    #[test]
    fn test_empty_grid_has_empty_output() {
        let data = extract(&page("")).unwrap();
        assert!(data.locked_cells.is_empty());
        assert!(data.wall_condition.is_empty());
        assert_eq!((data.n_rows, data.n_cols), (5, 5));
    }
}
