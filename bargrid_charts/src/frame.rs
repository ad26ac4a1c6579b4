// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame assembly.
//!
//! [`BarGridSpec`] is the whole component: it validates the props, arranges
//! the layout, and assembles the background, header/footer text, per-row axes
//! and gridlines, and the tiled cells into one mark list. Rendering is a pure
//! function of the props; the call either produces the whole grid or fails.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use bargrid_core::{Mark, MarkId};
use bargrid_text::TextMeasurer;

use crate::axis::{AxisStyle, RowAxisSpec};
use crate::cell::{CellSpec, ID_GROUPS_PER_CELL};
use crate::config::{ChartGridError, ChartMetadata, DisplayConfig, StyleConfig};
use crate::data::{GridDims, PrimaryScale, Series, SeriesSettings};
use crate::format::NumberFormat;
use crate::grid;
use crate::layout::{BarGridLayout, Size};
use crate::rect_mark::RectMarkSpec;
use crate::title::TitleSpec;
use crate::z_order;

// Id-group offsets from `BarGridSpec::id_base`. Rows and cells get disjoint
// blocks so ids stay stable when either count changes.
const BACKGROUND_GROUP: u64 = 0;
const TITLE_GROUP: u64 = 1;
const SOURCE_GROUP: u64 = 2;
const ROW_AXIS_GROUPS: u64 = 0x100;
const CELL_GROUPS: u64 = 0x1000;

/// A grid of small-multiple bar charts.
#[derive(Clone, Debug)]
pub struct BarGridSpec {
    /// Stable-id base; every generated mark derives from it deterministically.
    pub id_base: u64,
    /// Whether the host treats blocker hits as edit targets. Carried for
    /// hosts; does not change the generated marks.
    pub editable: bool,
    /// Display configuration.
    pub display: DisplayConfig,
    /// Style configuration.
    pub style: StyleConfig,
    /// Per-series display settings; must align with `data`.
    pub settings: Vec<SeriesSettings>,
    /// The data series, one per cell.
    pub data: Vec<Series>,
    /// The primary value scale descriptor.
    pub primary: PrimaryScale,
    /// The grid descriptor.
    pub grid: GridDims,
    /// Nominal content size allotted by the host.
    pub dimensions: Size,
    /// Optional header/footer text.
    pub metadata: ChartMetadata,
}

impl BarGridSpec {
    /// Checks the caller contract.
    ///
    /// Malformed props are a construction-time failure for the whole render
    /// call; there is no partial mode.
    pub fn validate(&self) -> Result<(), ChartGridError> {
        if self.grid.count() == 0 {
            return Err(ChartGridError::EmptyGrid);
        }
        let first = self
            .data
            .first()
            .filter(|s| !s.is_empty())
            .ok_or(ChartGridError::EmptyData)?;
        if self.settings.len() != self.data.len() {
            return Err(ChartGridError::SettingsMismatch {
                settings: self.settings.len(),
                series: self.data.len(),
            });
        }
        let expected = first.len();
        for (i, series) in self.data.iter().enumerate().skip(1) {
            if series.len() != expected {
                return Err(ChartGridError::RaggedSeries {
                    series: i,
                    len: series.len(),
                    expected,
                });
            }
        }
        if self.grid.count() < self.data.len() {
            return Err(ChartGridError::GridTooSmall {
                cells: self.grid.count(),
                series: self.data.len(),
            });
        }
        Ok(())
    }

    /// Validates the props and arranges the layout.
    pub fn layout(
        &self,
        measurer: &dyn TextMeasurer,
        numbers: &NumberFormat,
    ) -> Result<BarGridLayout, ChartGridError> {
        self.validate()?;
        BarGridLayout::arrange(
            &self.data,
            &self.primary,
            &self.display,
            &self.style,
            self.grid,
            self.dimensions,
            measurer,
            numbers,
        )
    }

    /// Renders the grid: layout plus the full mark list.
    pub fn marks(
        &self,
        measurer: &dyn TextMeasurer,
        numbers: &NumberFormat,
    ) -> Result<(BarGridLayout, Vec<Mark>), ChartGridError> {
        let layout = self.layout(measurer, numbers)?;
        let display = &self.display;

        let base_x = display.margin.left;
        let base_y = display.margin.top + display.padding.top;

        let mut out = Vec::new();

        // Background surface.
        out.push(
            RectMarkSpec::new(
                MarkId::for_slot(self.id_base + BACKGROUND_GROUP, 0),
                Rect::new(0.0, 0.0, layout.outer_size.width, layout.outer_size.height),
            )
            .with_fill(self.style.background)
            .with_z_index(z_order::PLOT_BACKGROUND)
            .mark(),
        );

        // Header title in the top margin/padding band; source line in the
        // bottom one.
        let right_edge = layout.outer_size.width - display.margin.right;
        if let Some(title) = &self.metadata.title {
            out.extend(
                TitleSpec::new(self.id_base + TITLE_GROUP, title.clone())
                    .with_font_size(self.style.tick_font_size + 2.0)
                    .with_fill(self.style.text_fill)
                    .marks(Rect::new(base_x, 0.0, right_edge, base_y)),
            );
        }
        if let Some(source) = &self.metadata.source {
            let footer_top =
                layout.outer_size.height - display.margin.bottom - display.padding.bottom;
            out.extend(
                TitleSpec::new(self.id_base + SOURCE_GROUP, source.clone())
                    .with_font_size((self.style.tick_font_size - 2.0).max(1.0))
                    .with_fill(Brush::Solid(css::DIM_GRAY))
                    .marks(Rect::new(
                        base_x,
                        footer_top,
                        right_edge,
                        layout.outer_size.height,
                    )),
            );
        }

        // One category axis + gridline set per grid row, at that row's y.
        let axis_style = AxisStyle {
            label_fill: Brush::Solid(self.style.text_fill),
            label_font_size: self.style.tick_font_size,
            label_font_family: self.style.tick_font_family.clone(),
        };
        let tick_gutter = display.padding.left + layout.tick_widths.max;
        let grid_span = self.dimensions.width - display.margin.left - display.margin.right;
        for row in 0..self.grid.rows {
            let axis = RowAxisSpec {
                id_base: self.id_base + ROW_AXIS_GROUPS + row as u64,
                labels: &layout.tick_labels,
                band: layout.y_band,
                tick_gutter,
                grid_width: grid_span,
                style: axis_style.clone(),
                grid: Some(self.style.grid.clone()),
            };
            out.extend(axis.marks(Point::new(
                base_x,
                base_y + layout.grid.rows.position(row),
            )));
        }

        // Cells, shifted right past the tick gutter.
        let cells_dx = base_x + display.padding.left + layout.tick_widths.max;
        out.extend(grid::tile(
            &self.grid,
            &layout.grid,
            self.data.len(),
            |index, origin| {
                CellSpec {
                    id_base: self.id_base
                        + CELL_GROUPS
                        + index as u64 * ID_GROUPS_PER_CELL,
                    series: &self.data[index],
                    settings: &self.settings[index],
                    origin: Point::new(cells_dx + origin.x, base_y + origin.y),
                    x_scale: layout.x_scale,
                    y_band: layout.y_band,
                    primary: &self.primary,
                    display,
                    style: &self.style,
                    numbers,
                }
                .marks()
            },
        ));

        Ok((layout, out))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use bargrid_core::{MarkDiff, MarkShape, Scene};
    use bargrid_text::{TextMetrics, TextStyle};

    use super::*;
    use crate::config::{Edges, GridGutters};
    use crate::data::Datum;

    /// Every glyph is 5.0 wide; keeps expectations hand-computable.
    struct FixedMeasurer;

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, text: &str, _style: &TextStyle) -> TextMetrics {
            TextMetrics {
                advance_width: 5.0 * text.chars().count() as f64,
                ascent: 8.0,
                descent: 2.0,
                leading: 0.0,
            }
        }
    }

    fn spec() -> BarGridSpec {
        BarGridSpec {
            id_base: 0,
            editable: false,
            display: DisplayConfig {
                margin: Edges::uniform(10.0),
                padding: Edges::new(20.0, 0.0, 20.0, 0.0),
                grid_gutters: GridGutters {
                    x_inner: 0.0,
                    x_outer: 0.0,
                    y_inner: 0.0,
                    y_outer: 0.0,
                },
                after_legend: 20.0,
                blocker_rect_offset: 5.0,
                bar_inner_padding: 0.0,
                bar_outer_padding: 0.0,
            },
            style: StyleConfig {
                x_over_tick: 0.0,
                ..StyleConfig::default()
            },
            settings: vec![
                SeriesSettings::new(0, "east"),
                SeriesSettings::new(1, "west"),
            ],
            data: vec![
                Series::new(vec![Datum::new("aa", 100.0), Datum::new("bb", 200.0)]),
                Series::new(vec![Datum::new("aa", 300.0), Datum::new("bb", 400.0)]),
            ],
            primary: PrimaryScale::default().with_domain((0.0, 1000.0)),
            grid: GridDims::new(1, 2),
            dimensions: Size::new(400.0, 200.0),
            metadata: ChartMetadata::default(),
        }
    }

    #[test]
    fn validation_covers_every_contract_violation() {
        assert_eq!(spec().validate(), Ok(()));

        let mut s = spec();
        s.data.clear();
        assert_eq!(s.validate(), Err(ChartGridError::EmptyData));

        let mut s = spec();
        s.grid = GridDims::new(0, 2);
        assert_eq!(s.validate(), Err(ChartGridError::EmptyGrid));

        let mut s = spec();
        s.settings.pop();
        assert_eq!(
            s.validate(),
            Err(ChartGridError::SettingsMismatch {
                settings: 1,
                series: 2
            })
        );

        let mut s = spec();
        s.data[1].values.pop();
        assert_eq!(
            s.validate(),
            Err(ChartGridError::RaggedSeries {
                series: 1,
                len: 1,
                expected: 2
            })
        );

        let mut s = spec();
        s.grid = GridDims::new(1, 1);
        assert_eq!(
            s.validate(),
            Err(ChartGridError::GridTooSmall { cells: 1, series: 2 })
        );
    }

    #[test]
    fn render_fails_whole_on_invalid_props() {
        let mut s = spec();
        s.settings.pop();
        let err = s
            .marks(&FixedMeasurer, &NumberFormat::default())
            .expect_err("mismatched settings must fail the render");
        assert!(matches!(err, ChartGridError::SettingsMismatch { .. }));
    }

    #[test]
    fn first_bar_lands_where_the_hand_arithmetic_says() {
        let s = spec();
        let mut scene = Scene::new();
        let (layout, marks) = s
            .marks(&FixedMeasurer, &NumberFormat::default())
            .expect("render should succeed");
        assert_eq!(layout.bar_label_overlap, 0.0);
        let diffs = scene.tick(marks);

        // Cell 0, bar 0: group = CELL_GROUPS + 1 (bars role), slot 0.
        let bar_id = MarkId::for_slot(CELL_GROUPS + 1, 0);
        let bounds = diffs
            .iter()
            .find_map(|d| match d {
                MarkDiff::Enter { id, bounds, .. } if *id == bar_id => *bounds,
                _ => None,
            })
            .expect("bar mark should enter");

        // Gutter ends at margin(10) + padding.left(0) + ticks(10); the first
        // column starts there; scale(100) over (0, 185) with domain 0..1000.
        assert!((bounds.x0 - 20.0).abs() < 1e-9, "left edge {bounds:?}");
        assert!((bounds.x1 - 38.5).abs() < 1e-9, "right edge {bounds:?}");
        // base_y(30) + y_band position(20); band height 90.
        assert!((bounds.y0 - 50.0).abs() < 1e-9, "top edge {bounds:?}");
        assert!((bounds.y1 - 140.0).abs() < 1e-9, "bottom edge {bounds:?}");
    }

    #[test]
    fn second_cell_is_offset_by_one_column_band() {
        let s = spec();
        let (_layout, marks) = s
            .marks(&FixedMeasurer, &NumberFormat::default())
            .expect("render should succeed");

        let bar0 = MarkId::for_slot(CELL_GROUPS + 1, 0);
        let bar1 = MarkId::for_slot(CELL_GROUPS + ID_GROUPS_PER_CELL + 1, 0);
        let find = |id: MarkId| {
            marks
                .iter()
                .find(|m| m.id == id)
                .and_then(Mark::bounds)
                .expect("bar bounds")
        };
        // Columns are 185 wide (370 chart width / 2, unpadded).
        assert!((find(bar1).x0 - find(bar0).x0 - 185.0).abs() < 1e-9);
    }

    #[test]
    fn every_row_gets_gridlines_and_tick_labels() {
        let mut s = spec();
        s.grid = GridDims::new(2, 1);
        let (_layout, marks) = s
            .marks(&FixedMeasurer, &NumberFormat::default())
            .expect("render should succeed");

        let gridlines = marks
            .iter()
            .filter(|m| m.z_index == z_order::GRID_LINES)
            .count();
        let tick_labels = marks
            .iter()
            .filter(|m| m.z_index == z_order::AXIS_LABELS)
            .count();
        // 2 rows x 2 categories.
        assert_eq!(gridlines, 4);
        assert_eq!(tick_labels, 4);
    }

    #[test]
    fn metadata_adds_header_and_footer_text() {
        let mut s = spec();
        s.metadata = ChartMetadata {
            title: Some("Regional sales".to_string()),
            source: Some("Source: annual report".to_string()),
        };
        let (_layout, marks) = s
            .marks(&FixedMeasurer, &NumberFormat::default())
            .expect("render should succeed");

        let titles: Vec<&str> = marks
            .iter()
            .filter(|m| m.z_index == z_order::TITLES)
            .map(|m| match &m.shape {
                MarkShape::Text(t) => t.text.as_str(),
                other => panic!("expected text, got {other:?}"),
            })
            .collect();
        assert_eq!(titles, vec!["Regional sales", "Source: annual report"]);
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let s = spec();
        let numbers = NumberFormat::default();
        let a = s.marks(&FixedMeasurer, &numbers).expect("first render");
        let b = s.marks(&FixedMeasurer, &numbers).expect("second render");
        assert_eq!(a.0, b.0);
        assert_eq!(a.1, b.1);
    }

    #[test]
    fn rerender_with_identical_props_diffs_to_nothing() {
        let s = spec();
        let numbers = NumberFormat::default();
        let mut scene = Scene::new();
        let (_, marks) = s.marks(&FixedMeasurer, &numbers).expect("first render");
        scene.tick(marks);
        let (_, marks) = s.marks(&FixedMeasurer, &numbers).expect("second render");
        let diffs = scene.tick(marks);
        assert!(diffs.is_empty(), "stable props should produce no diffs");
    }
}
