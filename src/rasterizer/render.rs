//! Line and triangle rasterization
//!
//! All primitives are drawn with flat colors through [`Framebuffer::set_pixel`],
//! so anything outside the buffer is clipped rather than reported.

use std::ops::Range;

use super::framebuffer::Framebuffer;
use super::interpolate::Interpolation;
use super::math::Vec2;
use super::types::Color;

/// Triangles whose doubled signed area is below this paint nothing
pub const DEGENERATE_AREA_EPSILON: f32 = 1e-6;

impl Framebuffer {
    /// Draw the segment from `p0` to `p1` (DDA over the dominant axis).
    ///
    /// The end coordinate on the dominant axis is not painted, so a horizontal line
    /// from x=0 to x=9 covers x=0..=8. Only the dominant-axis steps that land
    /// inside the buffer are sampled, so endpoints far off-screen cost nothing.
    pub fn draw_line(&mut self, p0: Vec2, p1: Vec2, color: Color) {
        if !is_finite(p0) || !is_finite(p1) {
            log::warn!("Skipping line with non-finite endpoint: {:?} -> {:?}", p0, p1);
            return;
        }

        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;

        if dx.abs() > dy.abs() {
            // Horizontal-dominant: one sample per x
            let (a, b) = if p0.x > p1.x { (p1, p0) } else { (p0, p1) };
            let ys = Interpolation::new(a.x, a.y, b.x, b.y);
            let xs = clamp_span(floor_i64(a.x)..floor_i64(b.x), self.width());
            for (x, y) in xs.clone().zip(ys.samples(xs)) {
                self.set_pixel(x as i32, y as i32, color);
            }
        } else {
            // Vertical-dominant: one sample per y
            let (a, b) = if p0.y > p1.y { (p1, p0) } else { (p0, p1) };
            let xs = Interpolation::new(a.y, a.x, b.y, b.x);
            let ys = clamp_span(floor_i64(a.y)..floor_i64(b.y), self.height());
            for (y, x) in ys.clone().zip(xs.samples(ys)) {
                self.set_pixel(x as i32, y as i32, color);
            }
        }

        log::trace!(
            "Rendered a line: ({}, {}) -> ({}, {})",
            p0.x, p0.y, p1.x, p1.y
        );
    }

    /// Draw the three edges of a triangle, no fill
    pub fn draw_wireframe_triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
        self.draw_line(p0, p1, color);
        self.draw_line(p1, p2, color);
        self.draw_line(p0, p2, color);
    }

    /// Scanline-fill a triangle with one flat color.
    ///
    /// Rows `ceil(v0.y)..ceil(v2.y)` are filled. Within a row the span starts at
    /// `ceil(left)` rather than at the left edge sample itself, so pixel `x` is
    /// painted iff `left <= x < right`. A left edge at 0.5 therefore starts at
    /// x=1, and triangles sharing an edge neither overlap nor leave a gap.
    /// Rows and columns are clipped to the buffer before any edge is sampled.
    /// Zero-area triangles paint nothing.
    pub fn draw_filled_triangle(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, color: Color) {
        if ![p0, p1, p2].into_iter().all(is_finite) {
            log::warn!("Skipping triangle with non-finite vertex: {:?}, {:?}, {:?}", p0, p1, p2);
            return;
        }

        let doubled_area = (p1 - p0).perp_dot(p2 - p0);
        if doubled_area.abs() < DEGENERATE_AREA_EPSILON {
            log::trace!("Skipping degenerate triangle ({:?}, {:?}, {:?})", p0, p1, p2);
            return;
        }

        let [v0, v1, v2] = sort_by_y([p0, p1, p2]);

        // x as a function of y along each edge
        let x01 = Interpolation::new(v0.y, v0.x, v1.y, v1.x);
        let x12 = Interpolation::new(v1.y, v1.x, v2.y, v2.x);
        let x02 = Interpolation::new(v0.y, v0.x, v2.y, v2.x);

        // The short side: x01 up to the middle vertex's row, x12 from there on
        let split = x12.first();
        let short = |y: i64| if y < split { x01.at(y) } else { x12.at(y) };

        let half = i64::try_from(x02.len() / 2).unwrap_or(i64::MAX);
        let m = x02.first().saturating_add(half);
        let long_is_left = matches!((x02.at(m), short(m)), (Some(long), Some(s)) if long < s);

        let rows = clamp_span(ceil_i64(v0.y)..ceil_i64(v2.y), self.height());
        for y in rows {
            let (Some(long), Some(s)) = (x02.at(y), short(y)) else {
                break;
            };
            let (xl, xr) = if long_is_left { (long, s) } else { (s, long) };
            for x in clamp_span(ceil_i64(xl)..ceil_i64(xr), self.width()) {
                self.set_pixel(x as i32, y as i32, color);
            }
        }

        log::trace!("Rendered a filled triangle: {:?}, {:?}, {:?}", v0, v1, v2);
    }
}

fn is_finite(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn floor_i64(v: f32) -> i64 {
    v.floor() as i64
}

fn ceil_i64(v: f32) -> i64 {
    v.ceil() as i64
}

/// Intersect `span` with `0..len`, keeping every position representable as `i32`
fn clamp_span(span: Range<i64>, len: usize) -> Range<i64> {
    let len = i64::try_from(len).unwrap_or(i64::MAX).min(i64::from(i32::MAX));
    span.start.max(0)..span.end.min(len)
}

/// Order vertices by ascending y. The sort is stable, so vertices with equal
/// y keep the order they were passed in.
fn sort_by_y(mut v: [Vec2; 3]) -> [Vec2; 3] {
    v.sort_by(|a, b| a.y.total_cmp(&b.y));
    v
}
