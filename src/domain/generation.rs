//! Sparse set of live cells for a single simulation step.
//!
//! A generation only remembers which coordinates are alive, so memory and
//! iteration cost scale with the population instead of a board area.
//! Values are never mutated after construction; every transformation
//! returns a new generation.

use std::collections::HashSet;

use ahash::RandomState;

use super::Cell;

/// Hash set keyed by coordinate, hashed with ahash
pub type CellSet = HashSet<Cell, RandomState>;

/// Tightest inclusive rectangle around the live cells.
/// An empty generation reports the degenerate box (0, 0, 0, 0).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub const EMPTY: BoundingBox = BoundingBox { min_x: 0, min_y: 0, max_x: 0, max_y: 0 };

    /// Number of columns covered, counting both edges
    pub const fn width(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64 + 1
    }

    /// Number of rows covered, counting both edges
    pub const fn height(&self) -> i64 {
        self.max_y as i64 - self.min_y as i64 + 1
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min_x && cell.x <= self.max_x && cell.y >= self.min_y && cell.y <= self.max_y
    }

    /// Centre of the box in world units, treating each cell as a unit square
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x as f64 + self.max_x as f64 + 1.0) / 2.0,
            (self.min_y as f64 + self.max_y as f64 + 1.0) / 2.0,
        )
    }
}

/// The set of cells alive at one step
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Generation {
    cells: CellSet,
}

impl Generation {
    /// Generation with no live cells
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_set(cells: CellSet) -> Self {
        Self { cells }
    }

    /// Check whether a coordinate is alive
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Live cell count
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate live cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Compute the minimal box containing every live cell
    pub fn bounding_box(&self) -> BoundingBox {
        let mut cells = self.cells.iter();
        let Some(first) = cells.next() else {
            return BoundingBox::EMPTY;
        };

        cells.fold(
            BoundingBox { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y },
            |bb, c| BoundingBox {
                min_x: bb.min_x.min(c.x),
                min_y: bb.min_y.min(c.y),
                max_x: bb.max_x.max(c.x),
                max_y: bb.max_y.max(c.y),
            },
        )
    }

    /// New generation with every cell shifted by (dx, dy)
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        self.iter().map(|c| c.offset(dx, dy)).collect()
    }

    /// Shift so the bounding box starts at the origin.
    /// Two generations with the same shape normalize to equal values.
    pub fn normalized(&self) -> Self {
        let bb = self.bounding_box();
        self.translate(bb.min_x.wrapping_neg(), bb.min_y.wrapping_neg())
    }

    /// Live cells sorted row-major, for stable output
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.iter().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }
}

impl FromIterator<Cell> for Generation {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl FromIterator<(i32, i32)> for Generation {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        iter.into_iter().map(Cell::from).collect()
    }
}
