use crate::gui::theme::SliderColors;
use cairo::Context;
use palette::Srgba;
use slider_core::{ArcGeometry, ArcSweep, ThumbGeometry};
use std::f64::consts::PI;

/// Rings used to fake the thumb's blurred shadow; cairo has no blur.
const SHADOW_LAYERS: u32 = 4;

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

pub fn draw(cr: &Context, frame: &ArcGeometry, colors: &SliderColors) -> Result<(), cairo::Error> {
    draw_arc(cr, frame, &frame.track, colors.track)?;
    if !frame.active.is_empty() {
        draw_arc(cr, frame, &frame.active, colors.active)?;
    }
    draw_thumb(cr, &frame.thumb, colors)
}

fn draw_arc(
    cr: &Context,
    frame: &ArcGeometry,
    sweep: &ArcSweep,
    color: Srgba<f64>,
) -> Result<(), cairo::Error> {
    let (start, end) = sweep.to_radians();
    set_color(cr, color);
    cr.set_line_width(frame.stroke_width);
    cr.set_line_cap(cairo::LineCap::Round);
    cr.new_path();
    cr.arc(frame.center.x, frame.center.y, frame.radius, start, end);
    cr.stroke()
}

fn draw_thumb(
    cr: &Context,
    thumb: &ThumbGeometry,
    colors: &SliderColors,
) -> Result<(), cairo::Error> {
    cr.save()?;
    cr.translate(thumb.center.x, thumb.center.y);

    if thumb.shadow_blur > 0.0 {
        // stacked translucent discs, darkest where they all overlap
        let (r, g, b, a) = colors.thumb_shadow.into_components();
        cr.set_source_rgba(r, g, b, a / SHADOW_LAYERS as f64);
        for layer in 1..=SHADOW_LAYERS {
            let spread = thumb.shadow_blur * layer as f64 / SHADOW_LAYERS as f64;
            cr.arc(0.0, 0.0, thumb.radius + spread, 0.0, 2.0 * PI);
            cr.fill()?;
        }
    }

    set_color(cr, colors.thumb);
    cr.arc(0.0, 0.0, thumb.radius, 0.0, 2.0 * PI);
    cr.fill()?;

    cr.restore()
}
