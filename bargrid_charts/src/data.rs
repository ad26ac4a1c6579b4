// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart input data: labeled series and the grid descriptor.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// One labeled observation.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    /// The category label for this row (drawn as a tick label).
    pub entry: String,
    /// The numeric value; `None` is the "no data" case.
    pub value: Option<f64>,
}

impl Datum {
    /// Creates a datum.
    pub fn new(entry: impl Into<String>, value: impl Into<Option<f64>>) -> Self {
        Self {
            entry: entry.into(),
            value: value.into(),
        }
    }
}

/// One chart cell's data: an ordered sequence of labeled values.
///
/// All series in a grid must have the same length; entries align positionally
/// with the tick labels derived from the first series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    /// The observations, in display order (top to bottom).
    pub values: Vec<Datum>,
}

impl Series {
    /// Creates a series from its values.
    pub fn new(values: Vec<Datum>) -> Self {
        Self { values }
    }

    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Per-series display settings.
///
/// One entry per [`Series`], by position.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSettings {
    /// Palette slot for this series (wraps around the configured palette).
    pub color_index: usize,
    /// The series label drawn in its cell.
    pub label: String,
}

impl SeriesSettings {
    /// Creates series settings.
    pub fn new(color_index: usize, label: impl Into<String>) -> Self {
        Self {
            color_index,
            label: label.into(),
        }
    }
}

/// The primary value scale descriptor: formatting decoration and domain.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimaryScale {
    /// Prefix applied to the first formatted value of each series.
    pub prefix: String,
    /// Suffix applied to the first formatted value of each series.
    pub suffix: String,
    /// Value domain. `None` infers the domain from the data.
    pub domain: Option<(f64, f64)>,
    /// Approximate tick count used when resolving a "nice" domain.
    pub tick_count: usize,
}

impl Default for PrimaryScale {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            domain: None,
            tick_count: 10,
        }
    }
}

impl PrimaryScale {
    /// Returns a copy with the given prefix/suffix decoration.
    pub fn with_decoration(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    /// Returns a copy with an explicit value domain.
    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// The grid descriptor: how many rows and columns of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
}

impl GridDims {
    /// Creates a grid descriptor.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns the total cell count.
    pub const fn count(&self) -> usize {
        self.rows * self.cols
    }

    /// Maps a cell index to its `(row, col)` slot, row-major.
    pub const fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn cells_are_row_major() {
        let grid = GridDims::new(2, 3);
        assert_eq!(grid.cell(0), (0, 0));
        assert_eq!(grid.cell(2), (0, 2));
        assert_eq!(grid.cell(3), (1, 0));
        assert_eq!(grid.cell(5), (1, 2));
        assert_eq!(grid.count(), 6);
    }
}
