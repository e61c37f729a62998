use rcollide::library::Vec2;
use rcollide::{Color, Surface};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget};
use std::f64::consts::TAU;

const BACKGROUND: SdlColor = SdlColor::WHITE;
const OUTLINE: Color = Color::rgb(0, 0, 0);

// sdl2's gfx primitives read the packed color back to front
fn to_abgr(color: Color) -> SdlColor {
    SdlColor::RGBA(255, color.b, color.g, color.r)
}

/// Draws the simulation onto an SDL2 canvas.
pub struct CanvasSurface<'a, T: RenderTarget> {
    canvas: &'a mut Canvas<T>,
}

impl<'a, T: RenderTarget> CanvasSurface<'a, T> {
    pub fn new(canvas: &'a mut Canvas<T>) -> Self {
        CanvasSurface { canvas }
    }
}

impl<T: RenderTarget> Surface for CanvasSurface<'_, T> {
    fn clear(&mut self, width: f64, height: f64) {
        self.canvas.set_draw_color(BACKGROUND);
        let _ = self.canvas.fill_rect(Rect::new(0, 0, width.max(0.0) as u32, height.max(0.0) as u32));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f64, start_angle: f64, end_angle: f64, color: Color) {
        let x = center[0].round() as i16;
        let y = center[1].round() as i16;
        let rad = radius.round() as i16;
        if end_angle - start_angle >= TAU {
            let _ = self.canvas.filled_circle(x, y, rad, to_abgr(color));
            let _ = self.canvas.circle(x, y, rad, to_abgr(OUTLINE));
        } else {
            let start = start_angle.to_degrees().round() as i16;
            let end = end_angle.to_degrees().round() as i16;
            let _ = self.canvas.filled_pie(x, y, rad, start, end, to_abgr(color));
            let _ = self.canvas.pie(x, y, rad, start, end, to_abgr(OUTLINE));
        }
    }
}
