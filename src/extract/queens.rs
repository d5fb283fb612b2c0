//! Queens extractor: grid geometry plus color-region assignments.
//!
//! Every locked cell carries a `cell-color-N` class naming its color
//! region; cells sharing `N` form one placement region.

use super::{cell_index, class_suffix, ExtractError, GridDom};
use crate::model::{ColorCell, QueensData};
use scraper::Selector;

const GRID: &str = ".queens-grid-no-gap";
const LOCKED_CELL: &str = ".queens-cell-with-border";
const COLOR_CLASS_PREFIX: &str = "cell-color-";

/// Extract the Queens constraint record from one page snapshot.
pub fn extract(html: &str) -> Result<QueensData, ExtractError> {
    let dom = GridDom::parse(html, GRID);
    let dims = dom.dimensions()?;

    let locked_sel = Selector::parse(LOCKED_CELL).unwrap();
    let mut cell_colors = Vec::new();
    for cell in dom.grid_select(&locked_sel)? {
        let cell_id = cell_index(cell)?;
        let suffix =
            class_suffix(cell, COLOR_CLASS_PREFIX).ok_or(ExtractError::MissingClass {
                cell_id,
                prefix: COLOR_CLASS_PREFIX,
            })?;
        let cell_type = suffix.parse().map_err(|_| ExtractError::BadNumber {
            what: "cell color class",
            text: suffix.to_string(),
        })?;
        cell_colors.push(ColorCell { cell_id, cell_type });
    }

    Ok(QueensData {
        n_rows: dims.n_rows,
        n_cols: dims.n_cols,
        cell_colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(cells: &str) -> String {
        format!(
            r#"<html><body>
            <div class="queens-grid-no-gap" style="--rows: 4; --cols: 4;">{cells}</div>
            </body></html>"#
        )
    }

    #[test]
    fn test_four_by_four_round_trip() {
        let html = page(
            r#"<div class="queens-cell-with-border cell-color-2" data-cell-idx="0"></div>
               <div class="queens-cell-with-border cell-color-1" data-cell-idx="5"></div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!((data.n_rows, data.n_cols), (4, 4));
        assert_eq!(
            data.cell_colors,
            vec![
                ColorCell { cell_id: 0, cell_type: 2 },
                ColorCell { cell_id: 5, cell_type: 1 },
            ]
        );
    }

    #[test]
    fn test_cell_ids_within_bounds() {
        let html = page(
            r#"<div class="queens-cell-with-border cell-color-0" data-cell-idx="15"></div>"#,
        );
        let data = extract(&html).unwrap();
        for cell in &data.cell_colors {
            assert!(cell.cell_id < data.n_rows * data.n_cols);
        }
    }

    #[test]
    fn test_missing_grid_is_fatal() {
        assert!(matches!(
            extract("<html><body></body></html>").unwrap_err(),
            ExtractError::GridNotFound { .. }
        ));
    }

    #[test]
    fn test_missing_dimensions_are_fatal() {
        let html = r#"<div class="queens-grid-no-gap"></div>"#;
        assert!(matches!(
            extract(html).unwrap_err(),
            ExtractError::MissingStyleVar { .. }
        ));
    }

    #[test]
    fn test_locked_cell_without_color_class_is_fatal() {
        let html = page(r#"<div class="queens-cell-with-border" data-cell-idx="3"></div>"#);
        assert!(matches!(
            extract(&html).unwrap_err(),
            ExtractError::MissingClass { cell_id: 3, .. }
        ));
    }

    #[test]
    fn test_malformed_color_suffix_is_fatal() {
        let html =
            page(r#"<div class="queens-cell-with-border cell-color-x" data-cell-idx="3"></div>"#);
        assert!(matches!(
            extract(&html).unwrap_err(),
            ExtractError::BadNumber { .. }
        ));
    }

    #[test]
    fn test_duplicate_markers_propagate_as_is() {
        // No duplicate suppression: a page that renders the marker twice
        // produces two records.
        let html = page(
            r#"<div class="queens-cell-with-border cell-color-1" data-cell-idx="2"></div>
               <div class="queens-cell-with-border cell-color-1" data-cell-idx="2"></div>"#,
        );
        let data = extract(&html).unwrap();
        assert_eq!(data.cell_colors.len(), 2);
    }
}
