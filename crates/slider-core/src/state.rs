use crate::geometry::{GeometryConfig, Step};
use crate::quantize::Stop;

/// The one mutable value of a slider: which stop the thumb rests on.
///
/// Starts at the start angle (value 0) and only moves to stops produced by
/// [`crate::quantize::AngleQuantizer`]. There is no setter; a fresh state
/// comes from rebuilding the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    current: Stop,
    division: u32,
}

impl SliderState {
    pub fn new(geometry: &GeometryConfig) -> Self {
        Self {
            current: Stop {
                step: Step::default(),
                angle: geometry.start_angle(),
            },
            division: geometry.division(),
        }
    }

    pub fn current_thumb_angle(&self) -> f64 {
        self.current.angle
    }

    pub fn step(&self) -> Step {
        self.current.step
    }

    /// Position along the track in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        *self.current.step as f64 / self.division as f64
    }

    /// Moves the thumb onto `stop`. Returns the previous step.
    pub(crate) fn apply(&mut self, stop: Stop) -> Step {
        std::mem::replace(&mut self.current, stop).step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let g = GeometryConfig::default();
        let state = SliderState::new(&g);
        assert_eq!(state.current_thumb_angle(), 120.0);
        assert_eq!(state.step(), Step::new(0));
        assert_eq!(state.fraction(), 0.0);
    }

    #[test]
    fn test_apply_reports_previous_step() {
        let g = GeometryConfig::default();
        let mut state = SliderState::new(&g);
        let stop = Stop {
            step: Step::new(19),
            angle: g.stop_angle(Step::new(19)),
        };
        assert_eq!(state.apply(stop), Step::new(0));
        assert_eq!(state.current_thumb_angle(), 405.0);
        assert_eq!(state.fraction(), 0.95);
        assert_eq!(state.apply(stop), Step::new(19));
    }
}
