//! Geometry and quantization engine for a circular slider.
//!
//! A ring with a gap at the bottom; the thumb rides the ring clockwise from one
//! side of the gap to the other and snaps onto `division + 1` evenly spaced
//! stops. Angles are degrees, clockwise from the positive x-axis in screen
//! space.
//!
//! - `geometry`: immutable configuration and derived sizes
//! - `quantize`: pointer angle, wraparound correction, snapping
//! - `state`: the current stop
//! - `arc`: render parameters for one frame
//! - `touch`: pointer action handling
//! - `slider`: the widget facade tying the above together
//! - `config`: TOML/env configuration

pub mod arc;
pub mod config;
pub mod geometry;
pub mod quantize;
pub mod slider;
pub mod state;
pub mod touch;

pub use arc::{ArcGeometry, ArcSweep, Bounds, ThumbGeometry};
pub use geometry::{Dimensions, GeometryConfig, GeometryError, Point, Step};
pub use slider::CircleSlider;
pub use state::SliderState;
pub use touch::{PointerAction, TouchResponse};
