// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value label formatting.
//!
//! Locale separators are an explicit argument rather than ambient state, so
//! the layout engine stays a pure function of its inputs.

extern crate alloc;

use alloc::string::String;

use crate::data::PrimaryScale;

/// The literal label used for missing values.
pub const NO_DATA_LABEL: &str = "no data";

/// Locale separator configuration for numeric labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Separator inserted between integer digit groups of three.
    pub thousands: char,
    /// Separator between the integer and fractional parts.
    pub decimal: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands: ',',
            decimal: '.',
        }
    }
}

impl NumberFormat {
    /// A `1.234.567,8`-style format (comma decimal, dot grouping).
    pub const fn continental() -> Self {
        Self {
            thousands: '.',
            decimal: ',',
        }
    }
}

/// Formats `v` with thousands grouping.
///
/// Uses the shortest decimal rendering of `v`, groups the integer digits in
/// threes with the configured separator, and re-attaches any fractional part
/// with the configured decimal separator. Non-finite values render as-is.
pub fn group_thousands(v: f64, numbers: &NumberFormat) -> String {
    let plain = alloc::format!("{v}");
    if !v.is_finite() {
        return plain;
    }

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(plain.len() + int_part.len() / 3);
    out.push_str(sign);
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(numbers.thousands);
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push(numbers.decimal);
        out.push_str(frac);
    }
    out
}

/// Formats one bar-end label.
///
/// A missing value is always the literal [`NO_DATA_LABEL`], never decorated.
/// Present values get thousands grouping, with the primary scale's
/// prefix/suffix applied iff `decorate` (callers pass `true` for the first
/// value of each series only).
pub fn bar_label(
    value: Option<f64>,
    decorate: bool,
    primary: &PrimaryScale,
    numbers: &NumberFormat,
) -> String {
    let Some(v) = value else {
        return String::from(NO_DATA_LABEL);
    };
    let body = group_thousands(v, numbers);
    if decorate {
        alloc::format!("{}{}{}", primary.prefix, body, primary.suffix)
    } else {
        body
    }
}
