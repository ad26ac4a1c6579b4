// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual configuration and prop validation.
//!
//! All of this is read-only input to the render call. Defaults follow the
//! usual print-chart proportions; hosts override per theme.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

use bargrid_text::FontFamily;

use crate::axis::{GridStyle, StrokeStyle};

/// Per-side lengths in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Edges {
    /// Creates per-side lengths.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates equal lengths on all sides.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
}

/// Grid cell spacing, in band units (fractions of a cell band).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGutters {
    /// Horizontal spacing between grid columns.
    pub x_inner: f64,
    /// Horizontal spacing outside the first/last column.
    pub x_outer: f64,
    /// Vertical spacing between grid rows.
    pub y_inner: f64,
    /// Vertical spacing outside the first/last row.
    pub y_outer: f64,
}

impl Default for GridGutters {
    fn default() -> Self {
        Self {
            x_inner: 0.05,
            x_outer: 0.0,
            y_inner: 0.1,
            y_outer: 0.0,
        }
    }
}

/// Parsed visual display configuration for the chart grid.
///
/// Values are only read, never mutated, during a render call.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Outer margin around the whole frame.
    pub margin: Edges,
    /// Padding between the margin and the grid content.
    pub padding: Edges,
    /// Spacing between grid cells.
    pub grid_gutters: GridGutters,
    /// Vertical room reserved in each cell for its series label.
    pub after_legend: f64,
    /// Gap between a bar end and its value label (and blocker inset).
    pub blocker_rect_offset: f64,
    /// Inner padding between bars within a cell, in band units.
    pub bar_inner_padding: f64,
    /// Outer padding above/below the bar block, in band units.
    pub bar_outer_padding: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            margin: Edges::uniform(10.0),
            padding: Edges::new(20.0, 0.0, 20.0, 0.0),
            grid_gutters: GridGutters::default(),
            after_legend: 25.0,
            blocker_rect_offset: 5.0,
            bar_inner_padding: 0.3,
            bar_outer_padding: 0.1,
        }
    }
}

/// Fonts, palette, and shared stroke styles.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    /// Font size for tick labels, series labels, and value labels.
    pub tick_font_size: f64,
    /// Font family for axis and label text.
    pub tick_font_family: FontFamily,
    /// Overshoot allowance at both ends of the outer x range.
    pub x_over_tick: f64,
    /// Series palette, indexed (wrapping) by `SeriesSettings::color_index`.
    pub palette: Vec<Color>,
    /// Frame background fill.
    pub background: Color,
    /// Fill for value labels.
    pub text_fill: Color,
    /// Horizontal gridline styling.
    pub grid: GridStyle,
    /// The zero reference rule; intentionally heavier than gridlines.
    pub zero_rule: StrokeStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            tick_font_size: 11.0,
            tick_font_family: FontFamily::SansSerif,
            x_over_tick: 5.0,
            palette: alloc::vec![
                css::CORNFLOWER_BLUE,
                css::ORANGE,
                css::MEDIUM_SEA_GREEN,
                css::CRIMSON,
                css::GOLDENROD,
                css::SLATE_BLUE,
                css::DARK_CYAN,
                css::HOT_PINK,
            ],
            background: css::WHITE,
            text_fill: css::BLACK,
            grid: GridStyle::default(),
            zero_rule: StrokeStyle::solid(css::BLACK, 1.0),
        }
    }
}

impl StyleConfig {
    /// Resolves a palette slot to a color, wrapping past the palette end.
    ///
    /// An empty palette resolves to black.
    pub fn series_color(&self, color_index: usize) -> Color {
        if self.palette.is_empty() {
            return css::BLACK;
        }
        self.palette[color_index % self.palette.len()]
    }
}

/// Optional chart-level text rendered by the frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartMetadata {
    /// Header title drawn above the grid.
    pub title: Option<String>,
    /// Source/credit line drawn below the grid.
    pub source: Option<String>,
}

/// Errors returned when the grid props violate the caller contract.
///
/// There is no partial-failure mode: the render call fails entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartGridError {
    /// The data list is empty, or the first series has no values.
    EmptyData,
    /// The grid descriptor has zero rows or columns.
    EmptyGrid,
    /// `settings.len()` does not equal `data.len()`.
    SettingsMismatch {
        /// Number of settings entries provided.
        settings: usize,
        /// Number of data series provided.
        series: usize,
    },
    /// A series' value count differs from the first series'.
    RaggedSeries {
        /// Index of the offending series.
        series: usize,
        /// Its value count.
        len: usize,
        /// The expected value count (from the first series).
        expected: usize,
    },
    /// The grid has fewer cells than there are series to place.
    GridTooSmall {
        /// Cell count of the grid descriptor.
        cells: usize,
        /// Number of data series provided.
        series: usize,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn palette_lookup_wraps() {
        let style = StyleConfig::default();
        let n = style.palette.len();
        assert_eq!(style.series_color(0), style.series_color(n));
        assert_eq!(style.series_color(1), style.series_color(n + 1));
    }

    #[test]
    fn empty_palette_falls_back_to_black() {
        let style = StyleConfig {
            palette: Vec::new(),
            ..StyleConfig::default()
        };
        assert_eq!(style.series_color(3), css::BLACK);
    }
}
