//! Incremental linear interpolation over integer steps
//!
//! Both the line and triangle rasterizers reduce to this: walk an independent
//! axis one integer at a time and accumulate the dependent value by a constant slope.

use std::ops::Range;

/// Independent-axis spans at or below this are treated as a single sample
pub const INTERPOLATE_EPSILON: f32 = 1e-6;

/// The line through `(i0, d0)` and `(i1, d1)`, sampled at every integer `i`
/// from `floor(i0)` to `floor(i1)` inclusive.
///
/// Sample `i` is `d0 + a * (i - floor(i0))` with slope `a`. Nothing is
/// materialised until [`Interpolation::samples`] is asked for a window, so
/// spans of billions of steps cost nothing when only a few are drawn.
/// Integer positions saturate at the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation {
    first: i64,
    last: i64,
    d0: f32,
    slope: f32,
}

impl Interpolation {
    pub fn new(i0: f32, d0: f32, i1: f32, d1: f32) -> Self {
        let first = i0.floor() as i64;
        if (i0 - i1).abs() <= INTERPOLATE_EPSILON {
            return Self { first, last: first, d0, slope: 0.0 };
        }

        Self {
            first,
            last: i1.floor() as i64,
            d0,
            slope: (d1 - d0) / (i1 - i0),
        }
    }

    /// Integer position of the first sample (`floor(i0)`)
    pub fn first(&self) -> i64 {
        self.first
    }

    /// Integer position of the last sample (`floor(i1)`)
    pub fn last(&self) -> i64 {
        self.last
    }

    /// Number of samples; zero when `floor(i1) < floor(i0)`
    pub fn len(&self) -> u64 {
        if self.last < self.first {
            0
        } else {
            self.last.abs_diff(self.first).saturating_add(1)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at integer position `i`, `None` outside `first..=last`
    pub fn at(&self, i: i64) -> Option<f32> {
        if i < self.first || i > self.last {
            return None;
        }
        let steps = i as f64 - self.first as f64;
        Some((self.d0 as f64 + self.slope as f64 * steps) as f32)
    }

    /// Accumulated samples for the integer positions in `window`, clipped to
    /// `first..=last`. The result starts at `max(window.start, first)`.
    pub fn samples(&self, window: Range<i64>) -> Vec<f32> {
        let lo = window.start.max(self.first);
        let hi = window.end.saturating_sub(1).min(self.last);
        let Some(mut d) = self.at(lo).filter(|_| lo <= hi) else {
            return Vec::new();
        };

        let mut values = Vec::with_capacity(usize::try_from(hi.abs_diff(lo)).unwrap_or(0).saturating_add(1));
        for _ in lo..=hi {
            values.push(d);
            d += self.slope;
        }
        values
    }
}

/// Sample the line through `(i0, d0)` and `(i1, d1)` at every integer `i`
/// from `floor(i0)` to `floor(i1)` inclusive.
///
/// The first sample is `d0` and each following sample adds the slope once.
/// When `i0` and `i1` (nearly) coincide the result is `[d0]`. If `i1 < i0`
/// the sequence may be empty; callers order their endpoints first.
/// Callers drawing into a bounded target use [`Interpolation::samples`] instead.
pub fn interpolate(i0: f32, d0: f32, i1: f32, d1: f32) -> Vec<f32> {
    let line = Interpolation::new(i0, d0, i1, d1);
    line.samples(line.first()..line.last().saturating_add(1))
}
