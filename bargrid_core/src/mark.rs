// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable mark primitives.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape as _};
use peniko::Brush;

/// A stable mark identity.
///
/// Ids survive across frames so the [`crate::Scene`] diff pass can pair a
/// mark with its previous incarnation. Chart generators derive ids
/// deterministically from their inputs, never from allocation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives a mark id from a group id and a slot within that group.
    ///
    /// `slot` must be below `2^32`; groups get the upper half of the id
    /// space so per-group slots never collide across groups.
    pub const fn for_slot(group: u64, slot: u64) -> Self {
        Self((group << 32) | (slot & 0xFFFF_FFFF))
    }
}

/// Horizontal text anchoring relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The position is the start (left edge in LTR) of the text.
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the end (right edge in LTR) of the text.
    End,
}

/// Vertical text baseline relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The position is the vertical midline.
    Middle,
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the hanging baseline (top-ish).
    Hanging,
    /// The position is the ideographic baseline (bottom-ish).
    Ideographic,
}

/// A filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectShape {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A single line of (unshaped) text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Fill paint.
    pub fill: Brush,
}

/// A stroked (and optionally filled) path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathShape {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

/// The drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkShape {
    /// A filled rectangle.
    Rect(RectShape),
    /// A single line of text.
    Text(TextShape),
    /// A stroked/filled path.
    Path(PathShape),
}

impl MarkShape {
    /// Returns geometry bounds where the shape has intrinsic ones.
    ///
    /// Text has no intrinsic bounds here (strings are unshaped); hosts that
    /// need text extents measure through their own text stack.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A drawable mark: stable id, paint order, shape.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity for diffing.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)` for a deterministic
    /// tie-break.
    pub z_index: i32,
    /// Drawable content.
    pub shape: MarkShape,
}

impl Mark {
    /// Creates a mark with the given z-index and shape.
    pub fn new(id: MarkId, z_index: i32, shape: MarkShape) -> Self {
        Self { id, z_index, shape }
    }

    /// Returns a copy with a different z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns geometry bounds where the shape has intrinsic ones.
    pub fn bounds(&self) -> Option<Rect> {
        self.shape.bounds()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn slot_ids_do_not_collide_across_groups() {
        let a = MarkId::for_slot(1, 7);
        let b = MarkId::for_slot(2, 7);
        let c = MarkId::for_slot(1, 8);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rect_and_path_have_bounds_text_does_not() {
        let rect = MarkShape::Rect(RectShape {
            rect: Rect::new(1.0, 2.0, 3.0, 4.0),
            fill: Brush::default(),
        });
        assert_eq!(rect.bounds(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));

        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((10.0, 5.0));
        let path = MarkShape::Path(PathShape {
            path: p,
            fill: Brush::default(),
            stroke: Brush::default(),
            stroke_width: 1.0,
        });
        let b = path.bounds().expect("paths have bounds");
        assert_eq!(b, Rect::new(0.0, 0.0, 10.0, 5.0));

        let text = MarkShape::Text(TextShape {
            pos: Point::new(0.0, 0.0),
            text: "hi".to_string(),
            font_size: 12.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            angle: 0.0,
            fill: Brush::default(),
        });
        assert!(text.bounds().is_none());
    }
}
