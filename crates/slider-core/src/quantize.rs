//! Pointer angle math: raw coordinate to canonical angle, wraparound
//! correction, and snapping onto the nearest division stop.

use crate::geometry::{FULL_TURN, GAP_CENTER, GeometryConfig, Point, Step};

/// Raw angles below this are read as one full turn further on, so the arc
/// (start ≥ 90°, end < 450°) can be compared linearly.
pub const WRAP_THRESHOLD: f64 = 90.0;

/// Clockwise screen angle of `point` around `center`, in `[0, 360)`.
///
/// Measured from straight down and rotated back by a quarter turn, so a
/// pointer exactly on the center reads 90° and falls in the gap.
pub fn pointer_angle(point: Point, center: Point) -> f64 {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    let angle = ((-dx).atan2(dy).to_degrees() + FULL_TURN + GAP_CENTER).rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negatives up to exactly 360
    if angle >= FULL_TURN { 0.0 } else { angle }
}

/// Maps `[0, 90)` onto `[360, 450)`, leaving the rest alone.
pub fn correct_angle(angle: f64) -> f64 {
    if (0.0..WRAP_THRESHOLD).contains(&angle) {
        angle + FULL_TURN
    } else {
        angle
    }
}

/// A division stop the thumb can rest on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub step: Step,
    pub angle: f64,
}

pub struct AngleQuantizer<'a> {
    geometry: &'a GeometryConfig,
}

impl<'a> AngleQuantizer<'a> {
    pub fn new(geometry: &'a GeometryConfig) -> Self {
        Self { geometry }
    }

    /// Half-open `[lo, hi)` interval of corrected angles that snap to `step`.
    /// Bucket 0 is centered on the start angle.
    pub fn bucket(&self, step: Step) -> (f64, f64) {
        let division_angle = self.geometry.division_angle();
        let base = self.geometry.start_angle() - division_angle / 2.0;
        let i = *step as f64;
        (base + i * division_angle, base + (i + 1.0) * division_angle)
    }

    /// First bucket containing `corrected`, or `None` when it lies in the gap.
    pub fn snap(&self, corrected: f64) -> Option<Stop> {
        (0..=self.geometry.division())
            .map(Step::new)
            .find(|&step| {
                let (lo, hi) = self.bucket(step);
                lo <= corrected && corrected < hi
            })
            .map(|step| Stop {
                step,
                angle: self.geometry.stop_angle(step),
            })
    }

    /// Full pipeline for a widget-local pointer position.
    pub fn quantize(&self, point: Point) -> Option<Stop> {
        let raw = pointer_angle(point, self.geometry.center());
        self.snap(correct_angle(raw))
    }
}
