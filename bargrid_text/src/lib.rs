// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for bargrid layout.
//!
//! The bar grid's whole layout problem is text-width-driven: the tick gutter
//! is sized from the widest row label, and the inner chart range shrinks by
//! however far the widest bar-end label would overflow its column. Shaping
//! and glyph layout stay downstream; layout code depends only on this tiny
//! measurement interface.
//!
//! Implementations can be:
//! - heuristic (fast, dependency-free, see [`CharClassMeasurer`]),
//! - backed by a shaping engine, or
//! - backed by platform text measurement (e.g. HTML canvas).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used by layout and guide generators.
///
/// `text` is treated as a single line; callers split on `\n` if they want
/// multi-line layout.
pub trait TextMeasurer {
    /// Measures a single line of text under the given style.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Text styling inputs relevant to measurement.
///
/// Just enough to make layout consistent; richer typography belongs in a
/// higher-level text system.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a style with the given `font_size` and sans-serif defaults.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Returns a copy with the given family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    /// Returns a copy with the given weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Returns a copy with the given style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width (drives horizontal layout).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A dependency-free heuristic measurer with per-character width classes.
///
/// Label widths decide real layout here (gutter size, overflow correction),
/// so a flat per-glyph estimate is too coarse: `"1,000,000%"` and
/// `"illinois"` have very different advances at the same length. Glyphs are
/// binned into narrow / default / wide / digit classes with em-relative
/// widths picked to track common sans-serif metrics.
///
/// Monospace families measure every glyph at the digit width. Bold adds a
/// small uniform factor.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharClassMeasurer;

impl CharClassMeasurer {
    const NARROW: f64 = 0.28;
    const DEFAULT: f64 = 0.54;
    const WIDE: f64 = 0.86;
    const DIGIT: f64 = 0.6;
    const BOLD_FACTOR: f64 = 1.05;

    fn glyph_em(c: char) -> f64 {
        match c {
            'i' | 'j' | 'l' | 't' | 'f' | 'r' | 'I' | '.' | ',' | ':' | ';' | '\'' | '|' | '!'
            | ' ' | '(' | ')' | '[' | ']' => Self::NARROW,
            'm' | 'w' | 'M' | 'W' | '@' | '%' => Self::WIDE,
            '0'..='9' | '$' | '#' | '+' | '-' => Self::DIGIT,
            _ => Self::DEFAULT,
        }
    }
}

impl TextMeasurer for CharClassMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let em: f64 = match style.font_family {
            FontFamily::Monospace => text.chars().count() as f64 * Self::DIGIT,
            _ => text.chars().map(Self::glyph_em).sum(),
        };
        let weight_factor = if style.font_weight >= FontWeight::BOLD {
            Self::BOLD_FACTOR
        } else {
            1.0
        };
        TextMetrics {
            advance_width: em * style.font_size * weight_factor,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn wider_glyphs_measure_wider() {
        let m = CharClassMeasurer;
        let style = TextStyle::new(10.0);
        let narrow = m.measure("iiii", &style).advance_width;
        let wide = m.measure("mmmm", &style).advance_width;
        assert!(wide > narrow, "expected 'mmmm' wider than 'iiii'");
    }

    #[test]
    fn monospace_ignores_glyph_classes() {
        let m = CharClassMeasurer;
        let style = TextStyle::new(10.0).with_family(FontFamily::Monospace);
        let a = m.measure("iiii", &style).advance_width;
        let b = m.measure("mmmm", &style).advance_width;
        assert_eq!(a, b);
    }

    #[test]
    fn line_height_sums_metrics() {
        let m = CharClassMeasurer;
        let metrics = m.measure("Mg", &TextStyle::new(10.0));
        assert_eq!(metrics.line_height(), 10.0);
    }

    #[test]
    fn bold_is_wider_than_normal() {
        let m = CharClassMeasurer;
        let normal = TextStyle::new(10.0);
        let bold = TextStyle::new(10.0).with_weight(FontWeight::BOLD);
        assert!(m.measure("abc", &bold).advance_width > m.measure("abc", &normal).advance_width);
    }
}
