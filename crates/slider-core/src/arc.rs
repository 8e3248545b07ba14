//! Render parameters derived from the slider state.
//!
//! Nothing here is cached: an [`ArcGeometry`] is computed per draw pass from
//! the immutable [`GeometryConfig`] and the current [`SliderState`].

use crate::geometry::{GeometryConfig, Point};
use crate::state::SliderState;

/// An arc stroked clockwise from `start` for `sweep` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    pub start: f64,
    pub sweep: f64,
}

impl ArcSweep {
    pub fn end(&self) -> f64 {
        self.start + self.sweep
    }

    pub fn is_empty(&self) -> bool {
        self.sweep <= 0.0
    }

    /// `(start, end)` in radians, for APIs like cairo's `arc`.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.start.to_radians(), self.end().to_radians())
    }
}

/// Axis-aligned square the arcs are inscribed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbGeometry {
    pub center: Point,
    pub radius: f64,
    /// Soft shadow extent around the thumb; the renderer decides how to blur.
    pub shadow_blur: f64,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    pub radius: f64,
    pub bounds: Bounds,
    pub stroke_width: f64,
    pub track: ArcSweep,
    pub active: ArcSweep,
    pub thumb: ThumbGeometry,
}

impl ArcGeometry {
    pub fn calculate(geometry: &GeometryConfig, state: &SliderState) -> Self {
        let center = geometry.center();
        let radius = geometry.track_radius();

        Self {
            center,
            radius,
            bounds: Self::bounds(geometry),
            stroke_width: geometry.dimensions().stroke_width,
            track: Self::track_sweep(geometry),
            active: Self::active_sweep(geometry, state),
            thumb: ThumbGeometry {
                center: Self::thumb_center(geometry, state),
                radius: geometry.thumb_radius(),
                shadow_blur: geometry.dimensions().thumb_shadow_margin,
            },
        }
    }

    pub fn bounds(geometry: &GeometryConfig) -> Bounds {
        let inset = geometry.thumb_inset();
        let size = geometry.bg_size();
        Bounds {
            left: inset,
            top: inset,
            right: size - inset,
            bottom: size - inset,
        }
    }

    pub fn track_sweep(geometry: &GeometryConfig) -> ArcSweep {
        ArcSweep {
            start: geometry.start_angle(),
            sweep: geometry.sweep_angle(),
        }
    }

    pub fn active_sweep(geometry: &GeometryConfig, state: &SliderState) -> ArcSweep {
        ArcSweep {
            start: geometry.start_angle(),
            sweep: state.current_thumb_angle() - geometry.start_angle(),
        }
    }

    pub fn thumb_center(geometry: &GeometryConfig, state: &SliderState) -> Point {
        let center = geometry.center();
        let r = geometry.track_radius();
        let theta = state.current_thumb_angle().to_radians();
        Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
    }
}
