//! Rendering module
//!
//! Paints a [`GameState`] onto any 2D [`Surface`]. Drawing only reads the
//! state. The browser build backs the surface with a canvas 2D context
//! (`canvas`); the native runner draws into a [`NullSurface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::GameState;

/// Scene colors and styles (CSS syntax)
pub mod style {
    pub const PADDLE: &str = "#ffffff";
    pub const BALL: &str = "#00e6a3";
    pub const MIDLINE: &str = "rgba(255,255,255,0.08)";
    pub const MIDLINE_WIDTH: f32 = 2.0;
    pub const MIDLINE_DASH: [f32; 2] = [10.0, 12.0];
    /// Midline stops this far short of the top and bottom walls
    pub const MIDLINE_MARGIN: f32 = 10.0;
    pub const HINT: &str = "rgba(255,255,255,0.06)";
    pub const HINT_FONT: &str = "12px system-ui, Arial";
}

/// Minimal 2D drawing API the scene needs
pub trait Surface {
    /// Clear the whole drawing area
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: &[f32], color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str);
}

/// Surface that discards everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _width: f32, _height: f32) {}
    fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _color: &str) {}
    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {}
    fn dashed_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _dash: &[f32], _color: &str) {}
    fn fill_text(&mut self, _text: &str, _x: f32, _y: f32, _font: &str, _color: &str) {}
}

/// Draw one frame: midline, both paddles, the ball and the side hints
///
/// Scores are shown by the host page, not drawn here.
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let w = state.config.field_width;
    let h = state.config.field_height;

    surface.clear(w, h);

    surface.dashed_line(
        Vec2::new(w / 2.0, style::MIDLINE_MARGIN),
        Vec2::new(w / 2.0, h - style::MIDLINE_MARGIN),
        style::MIDLINE_WIDTH,
        &style::MIDLINE_DASH,
        style::MIDLINE,
    );

    for paddle in [&state.player, &state.opponent] {
        surface.fill_rect(paddle.x, paddle.y, paddle.width, paddle.height, style::PADDLE);
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, style::BALL);

    surface.fill_text("Left: You", 10.0, h - 10.0, style::HINT_FONT, style::HINT);
    surface.fill_text("Right: Computer", w - 110.0, h - 10.0, style::HINT_FONT, style::HINT);
}
