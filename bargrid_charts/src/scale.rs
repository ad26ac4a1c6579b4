// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale utilities.
//!
//! The grid needs exactly two mapping shapes: a continuous linear scale for
//! bar values along x, and a discrete band scale for category rows and for
//! placing cells in the grid.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::data::{PrimaryScale, Series};

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Whether to "nice" the domain based on tick generation.
    pub nice: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }

    /// Returns the configured range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice-ish" tick values for the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if !self.nice {
            return self.domain;
        }
        let ticks = nice_ticks(self.domain.0, self.domain.1, tick_count);
        if ticks.len() >= 2 {
            (*ticks.first().unwrap(), *ticks.last().unwrap())
        } else {
            self.domain
        }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }

    /// Instantiates a concrete scale using the `resolved_domain` (respecting `nice`).
    pub fn instantiate_resolved(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A discrete band scale for categorical placement.
///
/// Used both for value rows within a cell and for the grid's row/column
/// slots. The same scale works on either axis; [`ScaleBand::position`] is an
/// offset along whichever axis the range describes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

/// Specification for a band scale (count + padding, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleBandSpec {
    /// Number of bands.
    pub count: usize,
    /// Inner padding in band units.
    pub padding_inner: f64,
    /// Outer padding in band units.
    pub padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the configured range (as authored).
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns the offset of the band at `index` along the range axis.
    pub fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }
}

impl ScaleBandSpec {
    /// Creates a new band scale spec with default padding.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand::new(range, self.count).with_padding(self.padding_inner, self.padding_outer)
    }
}

/// Infers a `(min, max)` domain over every value in every series.
///
/// Missing and non-finite values are ignored. Returns `None` if no finite
/// values are present.
pub fn infer_domain(data: &[Series]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for series in data {
        for datum in &series.values {
            let Some(v) = datum.value else {
                continue;
            };
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Builds the value scale over `range`.
///
/// The primary scale's explicit domain wins when present; otherwise the
/// domain is inferred from the data. With neither, a unit domain keeps the
/// mapping well-defined.
pub fn generate_linear(primary: &PrimaryScale, data: &[Series], range: (f64, f64)) -> ScaleLinear {
    let domain = primary
        .domain
        .or_else(|| infer_domain(data))
        .unwrap_or((0.0, 1.0));
    ScaleLinear::new(domain, range)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::data::Datum;

    #[test]
    fn linear_maps_endpoints_to_range() {
        let s = ScaleLinear::new((0.0, 10.0), (0.0, 100.0));
        assert!((s.map(0.0) - 0.0).abs() < 1e-9);
        assert!((s.map(10.0) - 100.0).abs() < 1e-9);
        assert!((s.map(5.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((3.0, 3.0), (10.0, 20.0));
        assert_eq!(s.map(3.0), 10.0);
        assert_eq!(s.map(99.0), 10.0);
    }

    #[test]
    fn band_positions_are_monotonic() {
        let scale = ScaleBand::new((0.0, 100.0), 4);
        assert!(scale.position(0) < scale.position(1));
        assert!(scale.position(1) < scale.position(2));
    }

    #[test]
    fn band_width_fills_unpadded_range() {
        let scale = ScaleBand::new((0.0, 100.0), 4).with_padding(0.0, 0.0);
        assert!((scale.band_width() - 25.0).abs() < 1e-9);
        assert!((scale.position(2) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn reversed_range_starts_at_the_low_end() {
        let scale = ScaleBand::new((100.0, 0.0), 4).with_padding(0.0, 0.0);
        assert!((scale.position(0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn inferred_domain_skips_missing_values() {
        let data = vec![
            Series::new(vec![Datum::new("a", 4.0), Datum::new("b", None)]),
            Series::new(vec![Datum::new("a", -2.0), Datum::new("b", 10.0)]),
        ];
        assert_eq!(infer_domain(&data), Some((-2.0, 10.0)));
    }

    #[test]
    fn explicit_domain_wins_over_inference() {
        let data = vec![Series::new(vec![Datum::new("a", 4.0)])];
        let primary = PrimaryScale::default().with_domain((0.0, 100.0));
        let s = generate_linear(&primary, &data, (0.0, 1.0));
        assert_eq!(s.domain_max(), 100.0);
    }

    #[test]
    fn nice_ticks_cover_the_domain() {
        let s = ScaleLinear::new((0.0, 3.29), (0.0, 1.0));
        let ticks = s.ticks(5);
        assert!(!ticks.is_empty());
        assert!(ticks[0] <= 0.0);
        assert!(*ticks.last().unwrap() >= 3.29 - 1e-9);
    }
}
