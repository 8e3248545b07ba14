use palette::{Srgba, WithAlpha};
use slider_core::config::{Colors, HexColor};

/// Peak opacity of the thumb shadow at its center.
pub const THUMB_SHADOW_ALPHA: f64 = 0.8;

pub struct SliderColors {
    pub track: Srgba<f64>,
    pub active: Srgba<f64>,
    pub thumb: Srgba<f64>,
    pub thumb_shadow: Srgba<f64>,
}

impl SliderColors {
    fn opaque(color: HexColor) -> Srgba<f64> {
        color.to_f64().with_alpha(1.0)
    }
}

impl From<&Colors> for SliderColors {
    fn from(colors: &Colors) -> Self {
        Self {
            track: Self::opaque(colors.track),
            active: Self::opaque(colors.active),
            thumb: Self::opaque(colors.thumb),
            thumb_shadow: colors.thumb_shadow.to_f64().with_alpha(THUMB_SHADOW_ALPHA),
        }
    }
}

impl Default for SliderColors {
    fn default() -> Self {
        Self::from(&Colors::default())
    }
}
