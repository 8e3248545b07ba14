use crate::geometry::{GeometryConfig, Point};
use crate::quantize::AngleQuantizer;
use crate::state::SliderState;
use strum::{Display as StrumDisplay, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchResponse {
    /// The slider claims every pointer event inside its bounds.
    pub handled: bool,
    pub should_redraw: bool,
}

impl TouchResponse {
    pub fn new(handled: bool, should_redraw: bool) -> Self {
        Self {
            handled,
            should_redraw,
        }
    }
}

/// Feeds pointer events into the quantizer and the slider state.
pub struct TouchMapper<'a> {
    quantizer: AngleQuantizer<'a>,
    state: &'a mut SliderState,
}

impl<'a> TouchMapper<'a> {
    pub fn new(geometry: &'a GeometryConfig, state: &'a mut SliderState) -> Self {
        Self {
            quantizer: AngleQuantizer::new(geometry),
            state,
        }
    }

    pub fn handle(&mut self, action: PointerAction, point: Point) -> TouchResponse {
        match action {
            PointerAction::Move => self.update_thumb(point),
            PointerAction::Down | PointerAction::Up | PointerAction::Cancel => {
                TouchResponse::new(true, false)
            }
        }
    }

    /// Snaps the thumb to the stop under `point`. Any match redraws, even
    /// onto the current stop; a pointer in the gap leaves everything as is.
    fn update_thumb(&mut self, point: Point) -> TouchResponse {
        let Some(stop) = self.quantizer.quantize(point) else {
            return TouchResponse::new(true, false);
        };

        let previous = self.state.apply(stop);
        if previous != stop.step {
            log::debug!("thumb moved from step {} to {}", previous, stop.step);
        }
        TouchResponse::new(true, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Step;
    use strum::IntoEnumIterator;

    fn point_at(geometry: &GeometryConfig, angle: f64) -> Point {
        let c = geometry.center();
        let theta = angle.to_radians();
        let r = geometry.track_radius();
        Point::new(c.x + r * theta.cos(), c.y + r * theta.sin())
    }

    #[test]
    fn test_every_action_is_handled() {
        let g = GeometryConfig::default();
        let mut state = SliderState::new(&g);
        for action in PointerAction::iter() {
            let resp = TouchMapper::new(&g, &mut state).handle(action, Point::default());
            assert!(resp.handled, "{action} not handled");
        }
    }

    #[test]
    fn test_only_move_updates() {
        let g = GeometryConfig::default();
        let mut state = SliderState::new(&g);
        let target = point_at(&g, 50.0);

        for action in [PointerAction::Down, PointerAction::Up, PointerAction::Cancel] {
            let resp = TouchMapper::new(&g, &mut state).handle(action, target);
            assert!(!resp.should_redraw);
            assert_eq!(state.step(), Step::new(0));
        }

        let resp = TouchMapper::new(&g, &mut state).handle(PointerAction::Move, target);
        assert_eq!(resp, TouchResponse::new(true, true));
        assert_eq!(state.step(), Step::new(19));
        assert_eq!(state.current_thumb_angle(), 405.0);
    }

    #[test]
    fn test_gap_move_is_a_no_op() {
        let g = GeometryConfig::default();
        let mut state = SliderState::new(&g);
        let mut mapper = TouchMapper::new(&g, &mut state);

        mapper.handle(PointerAction::Move, point_at(&g, 200.0));
        let resp = mapper.handle(PointerAction::Move, point_at(&g, 97.0));
        assert_eq!(resp, TouchResponse::new(true, false));
        assert_eq!(state.current_thumb_angle(), 195.0);
    }

    #[test]
    fn test_move_on_center_is_a_no_op() {
        let g = GeometryConfig::default();
        let mut state = SliderState::new(&g);

        let resp = TouchMapper::new(&g, &mut state).handle(PointerAction::Move, g.center());
        assert_eq!(resp, TouchResponse::new(true, false));
        assert_eq!(state.current_thumb_angle(), 120.0);
        assert_eq!(state.step(), Step::new(0));
    }

    #[test]
    fn test_same_stop_still_redraws() {
        let g = GeometryConfig::default();
        let mut state = SliderState::new(&g);
        let mut mapper = TouchMapper::new(&g, &mut state);

        let first = mapper.handle(PointerAction::Move, point_at(&g, 121.0));
        let second = mapper.handle(PointerAction::Move, point_at(&g, 119.0));
        assert!(first.should_redraw);
        assert!(second.should_redraw);
        assert_eq!(state.step(), Step::new(0));
    }
}
