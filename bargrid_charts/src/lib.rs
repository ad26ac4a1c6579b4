// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A grid of small-multiple bar charts over `bargrid_core` marks.
//!
//! This crate turns a matrix of labeled numeric series plus a visual
//! configuration into a laid-out grid of horizontal bar charts:
//! - **Scales** map values and categories into screen coordinates.
//! - **Layout** sizes the tick gutter from measured label widths and shrinks
//!   the inner chart range so bar-end labels never clip.
//! - **Cells** compose one series each (label, bars, hit-test blockers, value
//!   labels, zero rule); the **frame** tiles them and adds per-row axes.
//!
//! Rendering is a pure function of the inputs: the same props, measurer, and
//! number format always produce the same mark list. Text shaping is out of
//! scope; layout runs on the [`TextMeasurer`] seam.

#![no_std]

extern crate alloc;

mod axis;
mod bar_mark;
mod cell;
mod config;
mod data;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod frame;
mod grid;
mod layout;
mod rect_mark;
mod rule_mark;
mod scale;
mod text_mark;
mod title;
mod z_order;

pub use axis::{AxisStyle, GridStyle, RowAxisSpec, StrokeStyle};
pub use bar_mark::BarMarkSpec;
pub use cell::{CellSpec, ID_GROUPS_PER_CELL};
pub use config::{
    ChartGridError, ChartMetadata, DisplayConfig, Edges, GridGutters, StyleConfig,
};
pub use data::{Datum, GridDims, PrimaryScale, Series, SeriesSettings};
pub use format::{NO_DATA_LABEL, NumberFormat, bar_label, group_thousands};
pub use frame::BarGridSpec;
pub use grid::{GridScales, tile};
pub use layout::{BarGridLayout, LabelWidthRow, Size, TickWidths};
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{
    ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, generate_linear, infer_domain,
};
pub use text_mark::TextMarkSpec;
pub use title::TitleSpec;
pub use z_order::*;

pub use bargrid_text::{
    CharClassMeasurer, FontFamily, FontStyle, FontWeight, TextMeasurer, TextMetrics, TextStyle,
};
