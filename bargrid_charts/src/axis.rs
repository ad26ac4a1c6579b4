// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row axis mark generation.
//!
//! The grid draws one category axis per grid row: tick labels for each data
//! entry, right-anchored into the tick gutter, plus horizontal gridlines
//! spanning the full row. Both are generated from the same band scale the
//! bars use, so labels and gridlines sit at band centers.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;

use bargrid_core::{Mark, MarkId, MarkShape, TextAnchor, TextBaseline, TextShape};
use bargrid_text::FontFamily;

use crate::rule_mark::RuleMarkSpec;
use crate::scale::ScaleBand;
use crate::z_order;

/// A paint + width pair for stroked paths (gridlines, rules).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
                stroke_width: 1.0,
            },
        }
    }
}

/// Axis label styling.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Font family for tick labels.
    pub label_font_family: FontFamily,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            label_fill: Brush::Solid(css::BLACK),
            label_font_size: 11.0,
            label_font_family: FontFamily::SansSerif,
        }
    }
}

/// A category axis for one grid row: tick labels + horizontal gridlines.
#[derive(Clone, Debug)]
pub struct RowAxisSpec<'a> {
    /// Stable-id group; each generated mark uses a deterministic slot.
    pub id_base: u64,
    /// Tick label text, one per band.
    pub labels: &'a [String],
    /// The band scale placing each category within the row.
    pub band: ScaleBand,
    /// Width of the label gutter; labels end at `origin.x + tick_gutter`.
    pub tick_gutter: f64,
    /// Gridline span to the right of the origin.
    pub grid_width: f64,
    /// Label styling.
    pub style: AxisStyle,
    /// Optional gridline styling; `None` draws labels only.
    pub grid: Option<GridStyle>,
}

impl RowAxisSpec<'_> {
    /// Generates the axis marks for a row anchored at `origin` (top-left of
    /// the row's band range).
    pub fn marks(&self, origin: Point) -> Vec<Mark> {
        let half_band = 0.5 * self.band.band_width();
        let mut out = Vec::new();

        if let Some(grid) = &self.grid {
            for i in 0..self.labels.len() {
                let y = origin.y + self.band.position(i) + half_band;
                out.push(
                    RuleMarkSpec::horizontal(
                        MarkId::for_slot(self.id_base, 1000 + i as u64),
                        y,
                        origin.x,
                        origin.x + self.grid_width,
                    )
                    .with_stroke(grid.stroke.brush.clone(), grid.stroke.stroke_width)
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
                );
            }
        }

        for (i, label) in self.labels.iter().enumerate() {
            let y = origin.y + self.band.position(i) + half_band;
            out.push(Mark::new(
                MarkId::for_slot(self.id_base, i as u64),
                z_order::AXIS_LABELS,
                MarkShape::Text(TextShape {
                    pos: Point::new(origin.x + self.tick_gutter, y),
                    text: label.clone(),
                    font_size: self.style.label_font_size,
                    anchor: TextAnchor::End,
                    baseline: TextBaseline::Middle,
                    angle: 0.0,
                    fill: self.style.label_fill.clone(),
                }),
            ));
        }

        out
    }
}
