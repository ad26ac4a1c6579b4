// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;

use bargrid_core::{Mark, MarkId, MarkShape, RectShape};

use crate::data::Datum;
use crate::scale::{ScaleBand, ScaleLinear};

/// A horizontal bar series for one grid cell.
///
/// Generates one rect per value: the band scale places each value's row along
/// y, the linear scale projects the value along x from a baseline. A missing
/// value produces a zero-width rect at the baseline, keeping mark identity
/// stable across data edits.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable-id group; bar `i` uses slot `i` within it.
    pub id_base: u64,
    /// Cell origin; scales are cell-local, marks are absolute.
    pub origin: Point,
    /// Band scale placing value rows along y.
    pub band: ScaleBand,
    /// Linear scale projecting values along x.
    pub x_scale: ScaleLinear,
    /// Baseline in data units (typically `0.0`).
    pub baseline: f64,
    /// Fill paint for bars.
    pub fill: Brush,
    /// Rendering order hint (`bargrid_core::Mark::z_index`).
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar mark spec with `baseline = 0` and a default fill.
    pub fn new(id_base: u64, origin: Point, band: ScaleBand, x_scale: ScaleLinear) -> Self {
        Self {
            id_base,
            origin,
            band,
            x_scale,
            baseline: 0.0,
            fill: Brush::default(),
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one bar mark per value.
    pub fn marks(&self, values: &[Datum]) -> Vec<Mark> {
        let bw = self.band.band_width();
        let x_base = self.origin.x + self.x_scale.map(self.baseline);

        values
            .iter()
            .enumerate()
            .map(|(row, datum)| {
                let v = datum.value.unwrap_or(self.baseline);
                let x = self.origin.x + self.x_scale.map(v);
                let y = self.origin.y + self.band.position(row);
                Mark::new(
                    MarkId::for_slot(self.id_base, row as u64),
                    self.z_index,
                    MarkShape::Rect(RectShape {
                        rect: Rect::new(x.min(x_base), y, x.max(x_base), y + bw),
                        fill: self.fill.clone(),
                    }),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn bars_grow_rightward_from_the_baseline() {
        let band = ScaleBand::new((0.0, 40.0), 2).with_padding(0.0, 0.0);
        let x_scale = ScaleLinear::new((0.0, 10.0), (0.0, 100.0));
        let spec = BarMarkSpec::new(3, Point::new(5.0, 7.0), band, x_scale);

        let marks = spec.marks(&[Datum::new("a", 5.0), Datum::new("b", 10.0)]);
        assert_eq!(marks.len(), 2);

        let b0 = marks[0].bounds().expect("rects have bounds");
        assert!((b0.x0 - 5.0).abs() < 1e-9, "bar starts at origin + scale(0)");
        assert!((b0.x1 - 55.0).abs() < 1e-9, "bar ends at origin + scale(5)");
        assert!((b0.y0 - 7.0).abs() < 1e-9);
        assert!((b0.y1 - 27.0).abs() < 1e-9, "band width 20");

        let b1 = marks[1].bounds().expect("rects have bounds");
        assert!((b1.x1 - 105.0).abs() < 1e-9);
        assert!((b1.y0 - 27.0).abs() < 1e-9, "second band offset");
    }

    #[test]
    fn negative_values_extend_left_of_the_baseline() {
        let band = ScaleBand::new((0.0, 20.0), 1).with_padding(0.0, 0.0);
        let x_scale = ScaleLinear::new((-10.0, 10.0), (0.0, 100.0));
        let spec = BarMarkSpec::new(1, Point::ZERO, band, x_scale);

        let marks = spec.marks(&[Datum::new("a", -5.0)]);
        let b = marks[0].bounds().expect("rects have bounds");
        assert!((b.x0 - 25.0).abs() < 1e-9, "scale(-5)");
        assert!((b.x1 - 50.0).abs() < 1e-9, "scale(0)");
    }

    #[test]
    fn missing_values_produce_zero_width_rects() {
        let band = ScaleBand::new((0.0, 20.0), 1).with_padding(0.0, 0.0);
        let x_scale = ScaleLinear::new((0.0, 10.0), (0.0, 100.0));
        let spec = BarMarkSpec::new(1, Point::ZERO, band, x_scale);

        let marks = spec.marks(&[Datum::new("a", None)]);
        let b = marks[0].bounds().expect("rects have bounds");
        assert_eq!(b.x0, b.x1, "no-data bar has no extent");
        assert_eq!(b.x0, 0.0, "anchored at the baseline");
    }
}
