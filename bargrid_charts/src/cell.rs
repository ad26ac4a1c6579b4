// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-cell composition.
//!
//! One cell draws one series. The composition is fixed and its list order is
//! its paint order, backed by explicit z-indexes: series label, bars, blocker
//! rects, value labels, then the zero rule on top.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use bargrid_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::bar_mark::BarMarkSpec;
use crate::config::{DisplayConfig, StyleConfig};
use crate::data::{PrimaryScale, Series, SeriesSettings};
use crate::format::{self, NumberFormat};
use crate::rect_mark::RectMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

const ROLE_SERIES_LABEL: u64 = 0;
const ROLE_BARS: u64 = 1;
const ROLE_BLOCKERS: u64 = 2;
const ROLE_VALUE_LABELS: u64 = 3;
const ROLE_ZERO_RULE: u64 = 4;

/// Number of id groups each cell consumes; cell `i` owns groups
/// `[base + i * ID_GROUPS_PER_CELL, base + (i + 1) * ID_GROUPS_PER_CELL)`.
pub const ID_GROUPS_PER_CELL: u64 = 5;

/// One grid cell: a series, its settings, and the shared cell scales.
///
/// The scales are cell-local (their ranges start at zero); `origin` lifts the
/// generated marks into absolute scene coordinates.
#[derive(Debug)]
pub struct CellSpec<'a> {
    /// First id group owned by this cell.
    pub id_base: u64,
    /// The series drawn in this cell.
    pub series: &'a Series,
    /// The series' display settings.
    pub settings: &'a SeriesSettings,
    /// Top-left of the cell in scene coordinates.
    pub origin: Point,
    /// Shared value scale over the inner x range.
    pub x_scale: ScaleLinear,
    /// Shared category band over the inner y range.
    pub y_band: ScaleBand,
    /// Formatting decoration and domain descriptor.
    pub primary: &'a PrimaryScale,
    /// Display configuration.
    pub display: &'a DisplayConfig,
    /// Style configuration.
    pub style: &'a StyleConfig,
    /// Locale separators for value labels.
    pub numbers: &'a NumberFormat,
}

impl CellSpec<'_> {
    /// Generates the cell's marks in paint order.
    pub fn marks(&self) -> Vec<Mark> {
        let color = self.style.series_color(self.settings.color_index);
        let band_width = self.y_band.band_width();
        let (x_lo, x_hi) = self.x_scale.range();
        let mut out = Vec::with_capacity(3 * self.series.len() + 2);

        // Series label, in the room `after_legend` reserves above the bars.
        out.push(
            TextMarkSpec::new(
                MarkId::for_slot(self.id_base + ROLE_SERIES_LABEL, 0),
                Point::new(
                    self.origin.x,
                    self.origin.y + 0.5 * self.display.after_legend,
                ),
                self.settings.label.clone(),
            )
            .with_font_size(self.style.tick_font_size)
            .with_anchor(TextAnchor::Start)
            .with_baseline(TextBaseline::Middle)
            .with_fill(color)
            .with_z_index(z_order::SERIES_LABELS)
            .mark(),
        );

        // Bars.
        out.extend(
            BarMarkSpec::new(
                self.id_base + ROLE_BARS,
                self.origin,
                self.y_band,
                self.x_scale,
            )
            .with_fill(color)
            .marks(&self.series.values),
        );

        // Blocker rects: invisible row-wide hover/edit targets above the bars.
        for i in 0..self.series.len() {
            let y = self.origin.y + self.y_band.position(i);
            out.push(
                RectMarkSpec::new(
                    MarkId::for_slot(self.id_base + ROLE_BLOCKERS, i as u64),
                    Rect::new(
                        self.origin.x + x_lo,
                        y,
                        self.origin.x + x_hi,
                        y + band_width,
                    ),
                )
                .with_fill(Color::TRANSPARENT)
                .with_z_index(z_order::BLOCKER_RECTS)
                .mark(),
            );
        }

        // Value labels at the bar ends; decoration on the first value only.
        for (i, datum) in self.series.values.iter().enumerate() {
            let text = format::bar_label(datum.value, i == 0, self.primary, self.numbers);
            let x = self.origin.x
                + self.x_scale.map(datum.value.unwrap_or(0.0))
                + self.display.blocker_rect_offset;
            let y = self.origin.y + self.y_band.position(i) + 0.5 * band_width;
            out.push(
                TextMarkSpec::new(
                    MarkId::for_slot(self.id_base + ROLE_VALUE_LABELS, i as u64),
                    Point::new(x, y),
                    text,
                )
                .with_font_size(self.style.tick_font_size)
                .with_anchor(TextAnchor::Start)
                .with_baseline(TextBaseline::Middle)
                .with_fill(self.style.text_fill)
                .with_z_index(z_order::VALUE_LABELS)
                .mark(),
            );
        }

        // Zero rule, last so it paints over the bars.
        let (y_lo, y_hi) = self.y_band.range();
        out.push(
            RuleMarkSpec::vertical(
                MarkId::for_slot(self.id_base + ROLE_ZERO_RULE, 0),
                self.origin.x + self.x_scale.map(0.0),
                self.origin.y + y_lo,
                self.origin.y + y_hi,
            )
            .with_stroke(
                self.style.zero_rule.brush.clone(),
                self.style.zero_rule.stroke_width,
            )
            .with_z_index(z_order::ZERO_RULE)
            .mark(),
        );

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use peniko::Brush;

    use bargrid_core::MarkShape;

    use super::*;
    use crate::data::Datum;

    fn cell_inputs() -> (Series, SeriesSettings, DisplayConfig, StyleConfig, PrimaryScale) {
        (
            Series::new(vec![Datum::new("aa", 5.0), Datum::new("bb", None)]),
            SeriesSettings::new(1, "east"),
            DisplayConfig::default(),
            StyleConfig::default(),
            PrimaryScale::default().with_domain((0.0, 10.0)),
        )
    }

    fn marks_for(series: &Series, settings: &SeriesSettings) -> Vec<Mark> {
        let (_, _, display, style, primary) = cell_inputs();
        let numbers = NumberFormat::default();
        CellSpec {
            id_base: 100,
            series,
            settings,
            origin: Point::new(50.0, 30.0),
            x_scale: ScaleLinear::new((0.0, 10.0), (0.0, 200.0)),
            y_band: ScaleBand::new((25.0, 125.0), 2).with_padding(0.0, 0.0),
            primary: &primary,
            display: &display,
            style: &style,
            numbers: &numbers,
        }
        .marks()
    }

    #[test]
    fn composition_order_is_label_bars_blockers_values_zero() {
        let (series, settings, ..) = cell_inputs();
        let marks = marks_for(&series, &settings);

        // 1 label + 2 bars + 2 blockers + 2 value labels + 1 zero rule.
        assert_eq!(marks.len(), 8);
        assert_eq!(marks[0].z_index, z_order::SERIES_LABELS);
        assert_eq!(marks[1].z_index, z_order::SERIES_FILL);
        assert_eq!(marks[3].z_index, z_order::BLOCKER_RECTS);
        assert_eq!(marks[5].z_index, z_order::VALUE_LABELS);
        assert_eq!(marks[7].z_index, z_order::ZERO_RULE);
        assert!(
            marks[7].z_index > marks[1].z_index,
            "zero rule paints above the bars"
        );
    }

    #[test]
    fn blockers_are_transparent_and_span_the_inner_range() {
        let (series, settings, ..) = cell_inputs();
        let marks = marks_for(&series, &settings);

        let MarkShape::Rect(blocker) = &marks[3].shape else {
            panic!("expected a blocker rect");
        };
        assert_eq!(blocker.fill, Brush::Solid(Color::TRANSPARENT));
        assert!((blocker.rect.x0 - 50.0).abs() < 1e-9, "origin + range start");
        assert!((blocker.rect.x1 - 250.0).abs() < 1e-9, "origin + range end");
    }

    #[test]
    fn value_labels_decorate_only_the_first_value() {
        let (_, settings, _, _, primary) = cell_inputs();
        let series = Series::new(vec![Datum::new("aa", 5.0), Datum::new("bb", 7.0)]);
        let primary = primary.with_decoration("$", "");
        let display = DisplayConfig::default();
        let style = StyleConfig::default();
        let numbers = NumberFormat::default();
        let marks = CellSpec {
            id_base: 100,
            series: &series,
            settings: &settings,
            origin: Point::ZERO,
            x_scale: ScaleLinear::new((0.0, 10.0), (0.0, 200.0)),
            y_band: ScaleBand::new((25.0, 125.0), 2).with_padding(0.0, 0.0),
            primary: &primary,
            display: &display,
            style: &style,
            numbers: &numbers,
        }
        .marks();

        let labels: Vec<&str> = marks
            .iter()
            .filter(|m| m.z_index == z_order::VALUE_LABELS)
            .map(|m| match &m.shape {
                MarkShape::Text(t) => t.text.as_str(),
                other => panic!("expected text, got {other:?}"),
            })
            .collect();
        assert_eq!(labels, vec!["$5", "7"]);
    }

    #[test]
    fn missing_value_labels_read_no_data_at_the_baseline() {
        let (series, settings, display, ..) = cell_inputs();
        let marks = marks_for(&series, &settings);

        let MarkShape::Text(t) = &marks[6].shape else {
            panic!("expected the second value label");
        };
        assert_eq!(t.text, "no data");
        // origin.x + scale(0) + blocker offset.
        assert!((t.pos.x - (50.0 + display.blocker_rect_offset)).abs() < 1e-9);
    }

    #[test]
    fn series_label_takes_the_palette_color() {
        let (series, settings, _, style, _) = cell_inputs();
        let marks = marks_for(&series, &settings);
        let MarkShape::Text(t) = &marks[0].shape else {
            panic!("expected the series label");
        };
        assert_eq!(t.text, "east");
        assert_eq!(t.fill, Brush::Solid(style.series_color(1)));
    }

    #[test]
    fn zero_rule_spans_the_inner_y_range() {
        let (series, settings, ..) = cell_inputs();
        let marks = marks_for(&series, &settings);
        let b = marks[7].bounds().expect("rules have bounds");
        assert!((b.y0 - 55.0).abs() < 1e-9, "origin.y + range start");
        assert!((b.y1 - 155.0).abs() < 1e-9, "origin.y + range end");
        assert!((b.x0 - 50.0).abs() < 1e-9, "zero maps to the range start");
    }
}
