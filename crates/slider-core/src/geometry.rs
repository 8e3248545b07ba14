use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FULL_TURN: f64 = 360.0;
pub const DEFAULT_HOLE_ANGLE: f64 = 60.0;
pub const DEFAULT_DIVISION: u32 = 20;

/// Screen-space angle pointing straight down. The gap is centered on it.
pub const GAP_CENTER: f64 = 90.0;

/// Largest hole angle for which the `+360` wraparound correction stays valid:
/// start angle in (90, 180], arc end in [360, 450).
pub const MAX_REGIME_HOLE_ANGLE: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Index of one of the `division + 1` stops, `0` being the empty slider.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Deref, From, Into,
)]
pub struct Step(u32);

impl Step {
    pub fn new(index: u32) -> Self {
        Self(index)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("hole angle must lie strictly between 0 and 360 degrees, got {0}")]
    HoleAngle(f64),
    #[error("division must be at least 1, got {0}")]
    Division(u32),
    #[error("{name} must be a positive finite size, got {value}")]
    Dimension { name: &'static str, value: f64 },
    #[error("stroke width {stroke} must be smaller than the track diameter {track}")]
    StrokeTooWide { stroke: f64, track: f64 },
    #[error("density must be a positive finite factor, got {0}")]
    Density(f64),
}

/// Size magnitudes of the widget. Units are whatever the caller feeds in:
/// dp in the config file, pixels once passed through [`Dimensions::to_pixels`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub track_diameter: f64,
    pub stroke_width: f64,
    pub thumb_diameter: f64,
    pub thumb_shadow_margin: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            track_diameter: 250.0,
            stroke_width: 16.0,
            thumb_diameter: 24.0,
            thumb_shadow_margin: 4.0,
        }
    }
}

impl Dimensions {
    pub fn to_pixels(&self, density: f64) -> Result<Self, GeometryError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(GeometryError::Density(density));
        }
        Ok(Self {
            track_diameter: self.track_diameter * density,
            stroke_width: self.stroke_width * density,
            thumb_diameter: self.thumb_diameter * density,
            thumb_shadow_margin: self.thumb_shadow_margin * density,
        })
    }

    fn validate(&self) -> Result<(), GeometryError> {
        let positive = [
            ("track_diameter", self.track_diameter),
            ("stroke_width", self.stroke_width),
            ("thumb_diameter", self.thumb_diameter),
        ];
        if let Some((name, value)) = positive
            .into_iter()
            .find(|(_, v)| !v.is_finite() || *v <= 0.0)
        {
            return Err(GeometryError::Dimension { name, value });
        }

        // a zero margin just means no shadow
        let margin = self.thumb_shadow_margin;
        if !margin.is_finite() || margin < 0.0 {
            return Err(GeometryError::Dimension {
                name: "thumb_shadow_margin",
                value: margin,
            });
        }

        if self.stroke_width >= self.track_diameter {
            return Err(GeometryError::StrokeTooWide {
                stroke: self.stroke_width,
                track: self.track_diameter,
            });
        }
        Ok(())
    }
}

/// Immutable geometry of one slider. All angles are degrees, clockwise from
/// the positive x-axis in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    hole_angle: f64,
    division: u32,
    dimensions: Dimensions,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            hole_angle: DEFAULT_HOLE_ANGLE,
            division: DEFAULT_DIVISION,
            dimensions: Dimensions::default(),
        }
    }
}

impl GeometryConfig {
    pub fn new(
        hole_angle: f64,
        division: u32,
        dimensions: Dimensions,
    ) -> Result<Self, GeometryError> {
        if !hole_angle.is_finite() || hole_angle <= 0.0 || hole_angle >= FULL_TURN {
            return Err(GeometryError::HoleAngle(hole_angle));
        }
        if division == 0 {
            return Err(GeometryError::Division(division));
        }
        dimensions.validate()?;

        let geometry = Self {
            hole_angle,
            division,
            dimensions,
        };
        if !geometry.in_wrap_regime() {
            log::warn!(
                "hole angle {}° puts the arc outside the 90°..450° working range; \
                 pointer snapping near the gap may be inaccurate",
                hole_angle
            );
        }
        Ok(geometry)
    }

    pub fn hole_angle(&self) -> f64 {
        self.hole_angle
    }

    pub fn division(&self) -> u32 {
        self.division
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Where value 0 sits: half a gap clockwise past straight down.
    pub fn start_angle(&self) -> f64 {
        GAP_CENTER + self.hole_angle / 2.0
    }

    /// Angular length of the track, gap excluded.
    pub fn sweep_angle(&self) -> f64 {
        FULL_TURN - self.hole_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.start_angle() + self.sweep_angle()
    }

    pub fn division_angle(&self) -> f64 {
        self.sweep_angle() / self.division as f64
    }

    pub fn max_step(&self) -> Step {
        Step(self.division)
    }

    pub fn stop_angle(&self, step: Step) -> f64 {
        self.start_angle() + *step as f64 * self.division_angle()
    }

    pub fn in_wrap_regime(&self) -> bool {
        self.hole_angle <= MAX_REGIME_HOLE_ANGLE
    }

    pub fn thumb_contain_size(&self) -> f64 {
        self.dimensions.thumb_diameter + self.dimensions.thumb_shadow_margin * 2.0
    }

    /// Distance the arc bounds sit inside the widget edge so the thumb and its
    /// shadow never clip.
    pub fn thumb_inset(&self) -> f64 {
        self.thumb_contain_size() / 2.0
    }

    /// Side of the square the widget measures to.
    pub fn bg_size(&self) -> f64 {
        self.dimensions.track_diameter + (self.thumb_contain_size() - self.dimensions.stroke_width)
    }

    pub fn center(&self) -> Point {
        let c = self.bg_size() / 2.0;
        Point::new(c, c)
    }

    /// Radius of the arc centerline, which the thumb center rides on.
    pub fn track_radius(&self) -> f64 {
        self.bg_size() / 2.0 - self.thumb_inset()
    }

    pub fn thumb_radius(&self) -> f64 {
        self.dimensions.thumb_diameter / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let g = GeometryConfig::default();
        assert_eq!(g.start_angle(), 120.0);
        assert_eq!(g.sweep_angle(), 300.0);
        assert_eq!(g.end_angle(), 420.0);
        assert_eq!(g.division_angle(), 15.0);
        assert_eq!(g.thumb_contain_size(), 32.0);
        assert_eq!(g.bg_size(), 266.0);
        assert_eq!(g.center(), Point::new(133.0, 133.0));
        assert_eq!(g.track_radius(), 117.0);
        assert_eq!(g.thumb_radius(), 12.0);
        assert!(g.in_wrap_regime());
    }

    #[test]
    fn test_default_matches_validated_constructor() {
        let built =
            GeometryConfig::new(DEFAULT_HOLE_ANGLE, DEFAULT_DIVISION, Dimensions::default())
                .unwrap();
        assert_eq!(built, GeometryConfig::default());
    }

    #[test]
    fn test_stop_angles() {
        let g = GeometryConfig::default();
        assert_eq!(g.stop_angle(Step::new(0)), 120.0);
        assert_eq!(g.stop_angle(Step::new(19)), 405.0);
        assert_eq!(g.stop_angle(g.max_step()), g.end_angle());
    }

    #[test]
    fn test_rejects_bad_hole_angle() {
        for hole in [0.0, -10.0, 360.0, 400.0, f64::NAN, f64::INFINITY] {
            let err = GeometryConfig::new(hole, 20, Dimensions::default()).unwrap_err();
            assert!(matches!(err, GeometryError::HoleAngle(_)), "{hole}: {err}");
        }
    }

    #[test]
    fn test_rejects_zero_division() {
        assert_eq!(
            GeometryConfig::new(60.0, 0, Dimensions::default()),
            Err(GeometryError::Division(0))
        );
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let dims = Dimensions {
            thumb_diameter: 0.0,
            ..Dimensions::default()
        };
        assert_eq!(
            GeometryConfig::new(60.0, 20, dims),
            Err(GeometryError::Dimension {
                name: "thumb_diameter",
                value: 0.0
            })
        );

        let dims = Dimensions {
            thumb_shadow_margin: -1.0,
            ..Dimensions::default()
        };
        assert!(matches!(
            GeometryConfig::new(60.0, 20, dims),
            Err(GeometryError::Dimension {
                name: "thumb_shadow_margin",
                ..
            })
        ));

        let dims = Dimensions {
            stroke_width: 300.0,
            ..Dimensions::default()
        };
        assert!(matches!(
            GeometryConfig::new(60.0, 20, dims),
            Err(GeometryError::StrokeTooWide { .. })
        ));
    }

    #[test]
    fn test_zero_shadow_margin_is_allowed() {
        let dims = Dimensions {
            thumb_shadow_margin: 0.0,
            ..Dimensions::default()
        };
        let g = GeometryConfig::new(60.0, 20, dims).unwrap();
        assert_eq!(g.thumb_inset(), 12.0);
    }

    #[test]
    fn test_wide_hole_is_accepted_outside_regime() {
        let g = GeometryConfig::new(240.0, 4, Dimensions::default()).unwrap();
        assert!(!g.in_wrap_regime());
        assert_eq!(g.start_angle(), 210.0);
    }

    #[test]
    fn test_to_pixels() {
        let px = Dimensions::default().to_pixels(2.0).unwrap();
        assert_eq!(px.track_diameter, 500.0);
        assert_eq!(px.stroke_width, 32.0);
        assert_eq!(px.thumb_diameter, 48.0);
        assert_eq!(px.thumb_shadow_margin, 8.0);

        assert_eq!(
            Dimensions::default().to_pixels(0.0),
            Err(GeometryError::Density(0.0))
        );
    }
}
