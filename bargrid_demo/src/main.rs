// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample bar chart grid to `bargrid_demo.svg`.

mod svg;

use kurbo::Rect;

use bargrid_charts::{
    BarGridSpec, CharClassMeasurer, ChartMetadata, Datum, DisplayConfig, GridDims, NumberFormat,
    PrimaryScale, Series, SeriesSettings, Size, StyleConfig,
};
use bargrid_core::Scene;

fn main() {
    let spec = sample_grid();
    let measurer = CharClassMeasurer;
    let numbers = NumberFormat::default();

    let (layout, marks) = spec
        .marks(&measurer, &numbers)
        .expect("sample props satisfy the grid contract");

    let mut scene = Scene::new();
    let diffs = scene.tick(marks);

    let mut svg_scene = svg::SvgScene::default();
    svg_scene.set_view_box(Rect::new(
        0.0,
        0.0,
        layout.outer_size.width,
        layout.outer_size.height,
    ));
    svg_scene.apply_diffs(&diffs);

    std::fs::write("bargrid_demo.svg", svg_scene.to_svg_string()).expect("write bargrid_demo.svg");
    println!(
        "wrote bargrid_demo.svg ({} marks, overlap {:.1}px)",
        scene.len(),
        layout.bar_label_overlap
    );
}

fn sample_grid() -> BarGridSpec {
    let entries = ["Q1", "Q2", "Q3", "Q4"];
    let series = |values: [Option<f64>; 4]| {
        Series::new(
            entries
                .iter()
                .zip(values)
                .map(|(entry, value)| Datum::new(*entry, value))
                .collect(),
        )
    };

    BarGridSpec {
        id_base: 1,
        editable: false,
        display: DisplayConfig::default(),
        style: StyleConfig::default(),
        settings: vec![
            SeriesSettings::new(0, "North"),
            SeriesSettings::new(1, "South"),
            SeriesSettings::new(2, "East"),
            SeriesSettings::new(3, "West"),
        ],
        data: vec![
            series([Some(12_400.0), Some(9_800.0), Some(14_100.0), Some(16_700.0)]),
            series([Some(8_200.0), Some(7_600.0), None, Some(9_900.0)]),
            series([Some(15_300.0), Some(18_200.0), Some(17_400.0), Some(21_000.0)]),
            series([Some(4_700.0), Some(5_100.0), Some(6_000.0), Some(5_400.0)]),
        ],
        primary: PrimaryScale::default().with_decoration("$", ""),
        grid: GridDims::new(2, 2),
        dimensions: Size::new(640.0, 360.0),
        metadata: ChartMetadata {
            title: Some("Quarterly revenue by region".to_string()),
            source: Some("Source: demo data".to_string()),
        },
    }
}
