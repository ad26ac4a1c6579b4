// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid scales and cell tiling.
//!
//! The grid places cells with a pair of band scales (columns along x, rows
//! along y); [`tile`] stamps a cell generator at each occupied slot.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use bargrid_core::Mark;

use crate::config::GridGutters;
use crate::data::GridDims;
use crate::scale::ScaleBand;

/// Row/column band scales for the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridScales {
    /// Vertical placement of grid rows.
    pub rows: ScaleBand,
    /// Horizontal placement of grid columns.
    pub cols: ScaleBand,
}

impl GridScales {
    /// Builds grid scales over the outer pixel ranges.
    pub fn generate(
        dims: &GridDims,
        x_range: (f64, f64),
        y_range: (f64, f64),
        gutters: &GridGutters,
    ) -> Self {
        Self {
            cols: ScaleBand::new(x_range, dims.cols).with_padding(gutters.x_inner, gutters.x_outer),
            rows: ScaleBand::new(y_range, dims.rows).with_padding(gutters.y_inner, gutters.y_outer),
        }
    }

    /// Returns the top-left origin of the cell at `index`.
    pub fn cell_origin(&self, dims: &GridDims, index: usize) -> Point {
        let (row, col) = dims.cell(index);
        Point::new(self.cols.position(col), self.rows.position(row))
    }
}

/// Stamps a cell generator at each of the first `n` grid slots.
///
/// `f` receives the cell index and that cell's origin from the grid scales;
/// the generated mark lists are concatenated in index order.
pub fn tile<F>(dims: &GridDims, scales: &GridScales, n: usize, mut f: F) -> Vec<Mark>
where
    F: FnMut(usize, Point) -> Vec<Mark>,
{
    let mut out = Vec::new();
    for index in 0..n {
        let origin = scales.cell_origin(dims, index);
        out.extend(f(index, origin));
    }
    out
}
