//! Layout transforms: fit-to-viewport scaling and quarter-turn rotation.
//!
//! Both mutate node positions in place and leave topology untouched.  All
//! intermediate arithmetic is done in `i64` / `f64` and the result is
//! saturated back into `i32`, so extreme coordinates clamp instead of
//! wrapping.

use map_core::{BoundingBox, MapConfig, Point};

use crate::graph::Graph;
use crate::observer::GraphObserver;

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// ── FitTransform ──────────────────────────────────────────────────────────────

/// Uniform scale plus translation that fits a bounding box into a
/// `width × height` area, centered, with `margin` pixels kept free on every
/// side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitTransform {
    /// Corner of the source box mapped to `offset`.
    pub origin: Point,
    /// Uniform scale factor (same on both axes).
    pub factor: f64,
    pub offset_x: i64,
    pub offset_y: i64,
}

impl FitTransform {
    /// Compute the transform for `bbox`.
    ///
    /// Each non-degenerate axis yields a candidate factor
    /// `(dimension − 2·margin) / span`; the smaller one wins so the box fits
    /// on both axes.  An axis with zero span contributes no candidate.  When
    /// both spans are zero the factor is `1.0` and the single point lands in
    /// the middle of the area.  A margin wider than half the area leaves
    /// zero usable space rather than a negative one.
    pub fn fit(bbox: &BoundingBox, width: u32, height: u32, margin: u32) -> Self {
        let usable = |dim: u32| (i64::from(dim) - 2 * i64::from(margin)).max(0) as f64;
        let axis_factor = |dim: u32, span: i64| (span > 0).then(|| usable(dim) / span as f64);

        let factor = match (
            axis_factor(width, bbox.width()),
            axis_factor(height, bbox.height()),
        ) {
            (Some(fx), Some(fy)) => fx.min(fy),
            (Some(f), None) | (None, Some(f)) => f,
            (None, None) => 1.0,
        };

        let offset = |dim: u32, span: i64| ((f64::from(dim) - span as f64 * factor) / 2.0) as i64;

        Self {
            origin:   bbox.min,
            factor,
            offset_x: offset(width, bbox.width()),
            offset_y: offset(height, bbox.height()),
        }
    }

    /// `offset + round((p − origin) × factor)` on each axis.
    pub fn apply(&self, p: Point) -> Point {
        let dx = (i64::from(p.x) - i64::from(self.origin.x)) as f64;
        let dy = (i64::from(p.y) - i64::from(self.origin.y)) as f64;
        Point::new(
            saturate(self.offset_x + (dx * self.factor).round() as i64),
            saturate(self.offset_y + (dy * self.factor).round() as i64),
        )
    }
}

/// Quarter turn clockwise (on a y-down screen) about `center`:
/// `(dx, dy) → (dy, −dx)`.
#[inline]
pub fn rotate_point_90_clockwise(p: Point, center: Point) -> Point {
    let dx = i64::from(p.x) - i64::from(center.x);
    let dy = i64::from(p.y) - i64::from(center.y);
    Point::new(
        saturate(i64::from(center.x) + dy),
        saturate(i64::from(center.y) - dx),
    )
}

// ── Graph operations ──────────────────────────────────────────────────────────

impl<O: GraphObserver> Graph<O> {
    /// Scale and center every node into a `width × height` area leaving
    /// `margin` free on each side.  Aspect ratio is preserved.
    ///
    /// No-op on an empty graph.  Returns the transform that was applied.
    pub fn scale(&mut self, width: u32, height: u32, margin: u32) -> Option<FitTransform> {
        let bbox = self.bounding_box()?;
        let fit = FitTransform::fit(&bbox, width, height, margin);

        for node in &mut self.nodes {
            node.pos = fit.apply(node.pos);
        }

        self.observer.on_scaled(fit.factor);
        Some(fit)
    }

    /// Rotate every node a quarter turn clockwise about the integer center of
    /// the bounding box.  No-op on an empty graph.
    pub fn rotate_90_clockwise(&mut self) {
        let Some(bbox) = self.bounding_box() else {
            return;
        };
        let center = bbox.center();

        for node in &mut self.nodes {
            node.pos = rotate_point_90_clockwise(node.pos, center);
        }

        self.observer.on_rotated(center);
    }

    /// Apply `config`'s layout: fit into the drawing area, then the
    /// configured number of clockwise quarter turns.
    pub fn apply_layout(&mut self, config: &MapConfig) {
        self.scale(config.width, config.height, config.margin);
        for _ in 0..config.effective_turns() {
            self.rotate_90_clockwise();
        }
    }
}
