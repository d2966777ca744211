//! `Surface` over a browser Canvas2D context
//!
//! Draw calls that return `Result` are fire-and-forget; a failed call must not
//! stop the rest of the frame.

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::{Align, Color, Surface};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Fill/stroke switches; the context itself keeps the actual styles
#[derive(Debug, Clone, Copy)]
struct Paint {
    fill: bool,
    stroke: bool,
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// Device pixels per canvas unit
    scale: f64,
    paint: Paint,
    saved: Vec<Paint>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, scale: f64) -> Self {
        Self {
            ctx,
            scale,
            paint: Paint {
                fill: true,
                stroke: false,
            },
            saved: Vec::new(),
        }
    }

    /// Reset transform and styles before drawing a frame
    pub fn begin_frame(&mut self) {
        while self.saved.pop().is_some() {
            self.ctx.restore();
        }
        let _ = self.ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0);
        self.ctx.set_text_baseline("middle");
        self.ctx.set_line_join("round");
        self.ctx.set_fill_style_str(&Color::WHITE.to_css());
        self.ctx.set_stroke_style_str(&Color::BLACK.to_css());
        self.ctx.set_line_width(1.0);
        self.paint = Paint {
            fill: true,
            stroke: false,
        };
    }

    fn finish_path(&self) {
        if self.paint.fill {
            self.ctx.fill();
        }
        if self.paint.stroke {
            self.ctx.stroke();
        }
    }

    fn rounded_rect_path(&self, pos: Vec2, size: Vec2, radius: f32) {
        let (x, y, w, h) = (pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        let r = (radius as f64).min(w.abs() / 2.0).min(h.abs() / 2.0);
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x + r, y);
        let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
        let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
        let _ = ctx.arc_to(x, y + h, x, y, r);
        let _ = ctx.arc_to(x, y, x + w, y, r);
        ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn background(&mut self, color: Color) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
        self.ctx.restore();
    }

    fn fill(&mut self, color: Option<Color>) {
        self.paint.fill = color.is_some();
        if let Some(color) = color {
            self.ctx.set_fill_style_str(&color.to_css());
        }
    }

    fn stroke(&mut self, color: Option<Color>, weight: f32) {
        self.paint.stroke = color.is_some() && weight > 0.0;
        if let Some(color) = color {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.set_line_width(weight as f64);
        }
    }

    fn rect(&mut self, pos: Vec2, size: Vec2, radius: f32) {
        if radius > 0.0 {
            self.rounded_rect_path(pos, size, radius);
            self.finish_path();
            return;
        }
        let (x, y, w, h) = (pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        if self.paint.fill {
            self.ctx.fill_rect(x, y, w, h);
        }
        if self.paint.stroke {
            self.ctx.stroke_rect(x, y, w, h);
        }
    }

    fn ellipse(&mut self, center: Vec2, size: Vec2) {
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            (size.x / 2.0).abs() as f64,
            (size.y / 2.0).abs() as f64,
            0.0,
            0.0,
            std::f64::consts::TAU,
        );
        self.finish_path();
    }

    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.line_to(c.x as f64, c.y as f64);
        ctx.close_path();
        self.finish_path();
    }

    fn line(&mut self, a: Vec2, b: Vec2) {
        if !self.paint.stroke {
            return;
        }
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.stroke();
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start as f64,
            end as f64,
        );
        self.finish_path();
    }

    fn bezier_shape(&mut self, start: Vec2, segments: &[(Vec2, Vec2, Vec2)]) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(start.x as f64, start.y as f64);
        for (c1, c2, end) in segments {
            ctx.bezier_curve_to(
                c1.x as f64,
                c1.y as f64,
                c2.x as f64,
                c2.y as f64,
                end.x as f64,
                end.y as f64,
            );
        }
        ctx.close_path();
        self.finish_path();
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: Align) {
        let ctx = &self.ctx;
        ctx.set_font(&format!("{size}px sans-serif"));
        ctx.set_text_align(match align {
            Align::Left => "left",
            Align::Center => "center",
        });
        let (x, y) = (pos.x as f64, pos.y as f64);
        if self.paint.stroke {
            let _ = ctx.stroke_text(text, x, y);
        }
        if self.paint.fill {
            let _ = ctx.fill_text(text, x, y);
        }
    }

    fn push(&mut self) {
        self.saved.push(self.paint);
        self.ctx.save();
    }

    fn pop(&mut self) {
        if let Some(paint) = self.saved.pop() {
            self.paint = paint;
            self.ctx.restore();
        } else {
            log::warn!("unbalanced pop on canvas surface");
        }
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, angle: f32) {
        let _ = self.ctx.rotate(angle as f64);
    }
}
