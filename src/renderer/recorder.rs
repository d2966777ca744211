//! A `Surface` that records draw calls instead of rasterizing them

use glam::Vec2;

use super::{Align, Color, Surface};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(Color),
    Fill(Option<Color>),
    Stroke(Option<Color>, f32),
    Rect { pos: Vec2, size: Vec2, radius: f32 },
    Ellipse { center: Vec2, size: Vec2 },
    Triangle([Vec2; 3]),
    Line(Vec2, Vec2),
    Arc { center: Vec2, radius: f32, start: f32, end: f32 },
    BezierShape { start: Vec2, segments: Vec<(Vec2, Vec2, Vec2)> },
    Text { text: String, pos: Vec2, size: f32, align: Align },
    Push,
    Pop,
    Translate(Vec2),
    Rotate(f32),
}

#[derive(Debug, Clone, Default)]
pub struct DrawRecorder {
    pub commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every string drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Fill colors set, in order
    pub fn fills(&self) -> Vec<Color> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill(Some(color)) => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Push/pop nesting never goes negative and ends balanced
    pub fn balanced(&self) -> bool {
        let mut depth = 0i32;
        for c in &self.commands {
            match c {
                DrawCommand::Push => depth += 1,
                DrawCommand::Pop => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }
}

impl Surface for DrawRecorder {
    fn background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn fill(&mut self, color: Option<Color>) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn stroke(&mut self, color: Option<Color>, weight: f32) {
        self.commands.push(DrawCommand::Stroke(color, weight));
    }

    fn rect(&mut self, pos: Vec2, size: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Rect { pos, size, radius });
    }

    fn ellipse(&mut self, center: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Ellipse { center, size });
    }

    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        self.commands.push(DrawCommand::Triangle([a, b, c]));
    }

    fn line(&mut self, a: Vec2, b: Vec2) {
        self.commands.push(DrawCommand::Line(a, b));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    fn bezier_shape(&mut self, start: Vec2, segments: &[(Vec2, Vec2, Vec2)]) {
        self.commands.push(DrawCommand::BezierShape {
            start,
            segments: segments.to_vec(),
        });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: Align) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            pos,
            size,
            align,
        });
    }

    fn push(&mut self) {
        self.commands.push(DrawCommand::Push);
    }

    fn pop(&mut self) {
        self.commands.push(DrawCommand::Pop);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, angle: f32) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut r = DrawRecorder::new();
        r.push();
        r.fill(Some(Color::BLACK));
        r.text("hi", Vec2::ZERO, 12.0, Align::Center);
        r.pop();
        assert_eq!(r.len(), 4);
        assert_eq!(r.texts(), vec!["hi"]);
        assert_eq!(r.fills(), vec![Color::BLACK]);
        assert!(r.balanced());
    }

    #[test]
    fn test_unbalanced_pop_is_detected() {
        let mut r = DrawRecorder::new();
        r.pop();
        r.push();
        assert!(!r.balanced());
    }
}
