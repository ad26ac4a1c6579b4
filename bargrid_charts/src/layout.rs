// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid layout engine.
//!
//! One measure/arrange pass per render: size the tick gutter from the widest
//! row label, derive the chart area and outer frame, place the grid's band
//! scales, then shrink the inner x range by however far the widest bar-end
//! label would overflow its column. Everything here is a pure function of
//! its inputs; nothing is retained between renders.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use bargrid_text::{TextMeasurer, TextStyle};

use crate::config::{ChartGridError, DisplayConfig, StyleConfig};
use crate::data::{GridDims, PrimaryScale, Series};
use crate::format::{self, NumberFormat};
use crate::grid::GridScales;
use crate::scale::{ScaleBand, ScaleLinear, generate_linear};

/// A width/height pair in scene coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in scene coordinates.
    pub width: f64,
    /// Height in scene coordinates.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Measured tick label widths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickWidths {
    /// Per-label advance width, aligned with the tick labels.
    pub widths: Vec<f64>,
    /// The widest label; sizes the tick gutter.
    pub max: f64,
}

/// Inline storage for one series' bar label widths.
pub type LabelWidthRow = SmallVec<[f64; 8]>;

/// The arranged layout for one bar chart grid.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGridLayout {
    /// Row labels, taken from the first series' entries.
    pub tick_labels: Vec<String>,
    /// Measured tick label widths.
    pub tick_widths: TickWidths,
    /// The grid content area: outer size minus margins, padding, and the
    /// tick gutter, plus per-row series label room.
    pub chart_area: Size,
    /// The full frame size including margins, bottom padding, and label room.
    pub outer_size: Size,
    /// Band scales placing grid rows and columns.
    pub grid: GridScales,
    /// Measured bar label widths, one row per series.
    pub label_widths: Vec<LabelWidthRow>,
    /// How far the widest bar label would overflow its column, in scene
    /// coordinates; never negative.
    pub bar_label_overlap: f64,
    /// The inner x range for every cell, shrunk by the label overlap.
    pub x_range: (f64, f64),
    /// The inner y range for every cell, inset by the series label room.
    pub y_range: (f64, f64),
    /// The shared value scale over the inner x range.
    pub x_scale: ScaleLinear,
    /// The shared category band over the inner y range.
    pub y_band: ScaleBand,
}

impl BarGridLayout {
    /// Arranges the grid.
    ///
    /// `outer` is the nominal content size the host allots; the arranged
    /// [`BarGridLayout::outer_size`] adds frame margins and label room to it.
    ///
    /// Fails on an empty grid descriptor or empty data; ragged series and
    /// settings mismatches are the frame's validation concern.
    pub fn arrange(
        data: &[Series],
        primary: &PrimaryScale,
        display: &DisplayConfig,
        style: &StyleConfig,
        dims: GridDims,
        outer: Size,
        measurer: &dyn TextMeasurer,
        numbers: &NumberFormat,
    ) -> Result<Self, ChartGridError> {
        if dims.count() == 0 {
            return Err(ChartGridError::EmptyGrid);
        }
        let first = data
            .first()
            .filter(|s| !s.is_empty())
            .ok_or(ChartGridError::EmptyData)?;

        let tick_style = TextStyle::new(style.tick_font_size)
            .with_family(style.tick_font_family.clone());

        let tick_labels: Vec<String> =
            first.values.iter().map(|d| d.entry.clone()).collect();
        let widths: Vec<f64> = tick_labels
            .iter()
            .map(|t| measurer.measure(t, &tick_style).advance_width)
            .collect();
        let max = widths.iter().copied().fold(0.0_f64, f64::max);
        let tick_widths = TickWidths { widths, max };

        let label_room = display.after_legend * dims.rows as f64;
        let chart_area = Size {
            width: outer.width
                - display.margin.left
                - display.margin.right
                - display.padding.left
                - display.padding.right
                - tick_widths.max,
            height: outer.height + label_room,
        };
        let outer_size = Size {
            width: outer.width,
            height: outer.height
                + display.margin.top
                + display.margin.bottom
                + display.padding.bottom
                + label_room,
        };

        let x_range_outer = (style.x_over_tick, chart_area.width - style.x_over_tick);
        let y_range_outer = (chart_area.height, 0.0);
        let grid = GridScales::generate(&dims, x_range_outer, y_range_outer, &display.grid_gutters);

        // Probe scale: project every bar onto a full column band to find how
        // far the widest label would reach past it.
        let column_band = grid.cols.band_width();
        let probe = generate_linear(primary, data, (0.0, column_band));

        let mut label_widths: Vec<LabelWidthRow> = Vec::with_capacity(data.len());
        let mut max_label_x = f64::NEG_INFINITY;
        for series in data {
            let mut row = LabelWidthRow::with_capacity(series.len());
            for (ix, datum) in series.values.iter().enumerate() {
                let text = format::bar_label(datum.value, ix == 0, primary, numbers);
                let width = measurer.measure(&text, &tick_style).advance_width;
                // A missing value projects at the baseline but its "no data"
                // label still takes up room.
                let projected = probe.map(datum.value.unwrap_or(0.0));
                max_label_x = max_label_x.max(width + projected + display.blocker_rect_offset);
                row.push(width);
            }
            label_widths.push(row);
        }

        let bar_label_overlap = (max_label_x - column_band).max(0.0);

        let x_range = (0.0, column_band - bar_label_overlap);
        let y_range = (
            display.after_legend,
            grid.rows.band_width() - display.after_legend,
        );
        let x_scale = generate_linear(primary, data, x_range);
        let y_band = ScaleBand::new(y_range, first.len())
            .with_padding(display.bar_inner_padding, display.bar_outer_padding);

        Ok(Self {
            tick_labels,
            tick_widths,
            chart_area,
            outer_size,
            grid,
            label_widths,
            bar_label_overlap,
            x_range,
            y_range,
            x_scale,
            y_band,
        })
    }
}
