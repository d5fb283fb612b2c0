//! Canonical constraint model shared by the three extractors.
//!
//! Every entity is addressed by a single row-major cell index
//! (`row * n_cols + col`), the same index the page exposes on each cell's
//! `data-cell-idx` attribute. The output records here are the wire format:
//! field names and nesting must match what downstream solvers consume.

use serde::{Serialize, Serializer};

/// Row-major linear address of a cell, shared between the DOM attribute and
/// the output JSON.
pub type CellIndex = usize;

/// A `[start, end]` relation pair as it appears on the wire.
pub type Pair = [CellIndex; 2];

/// Grid dimensions read from the container's style custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub n_rows: usize,
    pub n_cols: usize,
}

impl GridDims {
    /// Total number of cells in the grid.
    pub fn cell_count(self) -> usize {
        self.n_rows * self.n_cols
    }
}

/// Which side of a cell a relation marker sits on.
///
/// Only two axes are representable; `None` covers unrecognized class
/// modifiers and displaces by zero cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    None,
}

impl Direction {
    /// Index displacement to the adjacent cell, given the grid's row stride.
    pub fn step(self, n_cols: usize) -> usize {
        match self {
            Direction::Right => 1,
            Direction::Down => n_cols,
            Direction::None => 0,
        }
    }
}

/// Constraint carried by a Tango edge marker.
///
/// `None` means the edge had no recognizable Equal/Cross glyph; such edges
/// survive intermediate construction and are dropped at partition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Equal,
    Cross,
    None,
}

/// A Tango cell glyph. Serialized as `1` (sun) / `0` (moon) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Moon,
}

impl Serialize for Glyph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            Glyph::Sun => 1,
            Glyph::Moon => 0,
        })
    }
}

/// A decoded relation marker before assembly into the output record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: CellIndex,
    pub end: CellIndex,
    pub kind: EdgeKind,
}

impl Edge {
    /// The wire representation of this edge.
    pub fn pair(self) -> Pair {
        [self.start, self.end]
    }
}

/// A Queens cell locked to a color region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCell {
    pub cell_id: CellIndex,
    pub cell_type: u32,
}

/// A Tango cell pre-filled with a sun or moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphCell {
    pub cell_id: CellIndex,
    pub cell_type: Glyph,
}

/// A Zip cell carrying a mandatory path-order number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberCell {
    pub cell_id: CellIndex,
    pub cell_number: u32,
}

/// Canonical Queens puzzle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueensData {
    pub n_rows: usize,
    pub n_cols: usize,
    pub cell_colors: Vec<ColorCell>,
}

/// Canonical Tango puzzle record. Relations are partitioned by kind into
/// two plain pair lists; the kind tag is dropped once partitioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TangoData {
    pub n_rows: usize,
    pub n_cols: usize,
    pub locked_cells: Vec<GlyphCell>,
    pub equal_condition: Vec<Pair>,
    pub cross_condition: Vec<Pair>,
}

/// Canonical Zip puzzle record. Walls carry no kind, only adjacency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZipData {
    pub n_rows: usize,
    pub n_cols: usize,
    pub locked_cells: Vec<NumberCell>,
    pub wall_condition: Vec<Pair>,
}

/// One captured puzzle, ready for serialization. Untagged: each variant
/// serializes as its bare record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PuzzleData {
    Queens(QueensData),
    Tango(TangoData),
    Zip(ZipData),
}

impl PuzzleData {
    /// Serialize to the pretty-printed JSON document that is the sole
    /// externally visible output of a run.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
