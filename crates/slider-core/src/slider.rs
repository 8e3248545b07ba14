use crate::arc::ArcGeometry;
use crate::geometry::{GeometryConfig, Point, Step};
use crate::state::SliderState;
use crate::touch::{PointerAction, TouchMapper, TouchResponse};

/// A circular slider: fixed geometry plus the thumb state it drives.
#[derive(Debug, Clone)]
pub struct CircleSlider {
    geometry: GeometryConfig,
    state: SliderState,
}

impl CircleSlider {
    pub fn new(geometry: GeometryConfig) -> Self {
        log::debug!(
            "circle slider: hole {}°, {} divisions, {}px",
            geometry.hole_angle(),
            geometry.division(),
            geometry.bg_size()
        );
        let state = SliderState::new(&geometry);
        Self { geometry, state }
    }

    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    /// Square side length the host should lay the widget out at.
    pub fn measured_size(&self) -> f64 {
        self.geometry.bg_size()
    }

    pub fn handle_pointer(&mut self, action: PointerAction, point: Point) -> TouchResponse {
        TouchMapper::new(&self.geometry, &mut self.state).handle(action, point)
    }

    pub fn frame(&self) -> ArcGeometry {
        ArcGeometry::calculate(&self.geometry, &self.state)
    }
}

impl Default for CircleSlider {
    fn default() -> Self {
        Self::new(GeometryConfig::default())
    }
}
