// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-level header/footer text.
//!
//! Titles participate in layout (they reserve height through the measurer)
//! but render as ordinary text marks. The frame uses one spec for the header
//! title and one for the source/credit line.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Brush;

use bargrid_core::{Mark, MarkId, MarkShape, TextAnchor, TextBaseline, TextShape};
use bargrid_text::{TextMeasurer, TextStyle};

use crate::z_order;

/// A single line of chart-level text.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable-id group; the generated mark uses slot 0.
    pub id_base: u64,
    /// The text (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Vertical padding applied above and below the text.
    pub padding: f64,
    /// Horizontal anchor within the given rectangle.
    pub anchor: TextAnchor,
}

impl TitleSpec {
    /// Creates a title spec with default styling.
    pub fn new(id_base: u64, text: impl Into<String>) -> Self {
        Self {
            id_base,
            text: text.into(),
            font_size: 12.0,
            fill: Brush::default(),
            padding: 6.0,
            anchor: TextAnchor::Start,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Returns the height this line reserves in layout.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let metrics = measurer.measure(&self.text, &TextStyle::new(self.font_size));
        2.0 * self.padding.max(0.0) + metrics.line_height()
    }

    /// Emits the text mark centered vertically within `rect`.
    pub fn marks(&self, rect: Rect) -> Vec<Mark> {
        let x = match self.anchor {
            TextAnchor::Start => rect.x0,
            TextAnchor::Middle => 0.5 * (rect.x0 + rect.x1),
            TextAnchor::End => rect.x1,
        };
        let y = 0.5 * (rect.y0 + rect.y1);
        alloc::vec![Mark::new(
            MarkId::for_slot(self.id_base, 0),
            z_order::TITLES,
            MarkShape::Text(TextShape {
                pos: Point::new(x, y),
                text: self.text.clone(),
                font_size: self.font_size,
                anchor: self.anchor,
                baseline: TextBaseline::Middle,
                angle: 0.0,
                fill: self.fill.clone(),
            }),
        )]
    }
}
