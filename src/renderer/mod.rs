//! Rendering module
//!
//! The scene is drawn through the `Surface` trait, a small immediate-mode
//! 2D drawing surface. The browser build implements it over a Canvas2D
//! context; tests and the native driver record the calls instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod recorder;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasSurface;
pub use recorder::{DrawCommand, DrawRecorder};
pub use scene::draw_frame;

use glam::Vec2;

/// RGBA color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Same color with alpha scaled by `t` in 0..=1
    pub fn faded(self, t: f32) -> Self {
        Self {
            a: (self.a as f32 * t.clamp(0.0, 1.0)) as u8,
            ..self
        }
    }

    /// CSS color string for canvas fill/stroke styles
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Immediate-mode 2D drawing surface
///
/// Shapes use the current fill and stroke; `None` disables either. `push`
/// and `pop` save and restore styles and the transform.
pub trait Surface {
    fn background(&mut self, color: Color);
    fn fill(&mut self, color: Option<Color>);
    fn stroke(&mut self, color: Option<Color>, weight: f32);

    /// Axis-aligned rectangle from its top-left corner, optional corner radius
    fn rect(&mut self, pos: Vec2, size: Vec2, radius: f32);
    /// Ellipse from its center and full width/height
    fn ellipse(&mut self, center: Vec2, size: Vec2);
    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2);
    fn line(&mut self, a: Vec2, b: Vec2);
    /// Open arc around `center` from `start` to `end` radians
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32);
    /// Closed path: `start`, then cubic segments given as (ctrl1, ctrl2, end)
    fn bezier_shape(&mut self, start: Vec2, segments: &[(Vec2, Vec2, Vec2)]);
    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: Align);

    fn push(&mut self);
    fn pop(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
}
