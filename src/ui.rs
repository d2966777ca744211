//! Menu button layout
//!
//! The same rectangles drive click detection in the sim and drawing in the
//! renderer, so a button is always clickable exactly where it is drawn.

use glam::Vec2;

use crate::MatchLength;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::platform::InputState;

/// A clickable, centered rectangle with a label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub text_size: f32,
    pub center: Vec2,
    pub size: Vec2,
}

impl Button {
    pub const fn new(label: &'static str, text_size: f32, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            label,
            text_size,
            center: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Strict containment, so a pointer exactly on an edge misses
    pub fn contains(&self, p: Vec2) -> bool {
        let half = self.size / 2.0;
        p.x > self.center.x - half.x
            && p.x < self.center.x + half.x
            && p.y > self.center.y - half.y
            && p.y < self.center.y + half.y
    }

    pub fn top_left(&self) -> Vec2 {
        self.center - self.size / 2.0
    }

    /// Hover state as seen by the renderer
    pub fn hovered(&self, input: &InputState) -> bool {
        self.contains(input.pointer)
    }

    /// One-shot click: fires when pressed over the button while the click
    /// latch is armed, then disarms the latch until the pointer is released.
    pub fn take_click(&self, input: &InputState, click_ready: &mut bool) -> bool {
        if *click_ready && input.pointer_down && self.contains(input.pointer) {
            *click_ready = false;
            true
        } else {
            false
        }
    }
}

const MID_X: f32 = CANVAS_WIDTH / 2.0;
const MID_Y: f32 = CANVAS_HEIGHT / 2.0;

// Title screen
pub const TITLE_START: Button = Button::new("START", 20.0, MID_X, MID_Y + 85.0, 80.0, 30.0);
pub const TITLE_INSTRUCTIONS: Button =
    Button::new("INSTRUCTIONS", 9.0, MID_X, MID_Y + 120.0, 80.0, 20.0);
pub const TITLE_OPTIONS: Button = Button::new("OPTIONS", 9.0, MID_X, MID_Y + 150.0, 80.0, 20.0);

/// Back arrow on the instructions and options screens
pub const BACK: Button = Button::new("🡸", 20.0, 25.0, 25.0, 30.0, 30.0);

// Options screen
pub const OPTIONS_TWO: Button = Button::new("a) 2 minutes", 15.0, MID_X - 120.0, 175.0, 100.0, 30.0);
pub const OPTIONS_FOUR: Button = Button::new("b) 4 minutes", 15.0, MID_X, 175.0, 100.0, 30.0);
pub const OPTIONS_SIX: Button = Button::new("c) 6 minutes", 15.0, MID_X + 120.0, 175.0, 100.0, 30.0);
pub const OPTIONS_START: Button = Button::new("START", 20.0, MID_X, CANVAS_HEIGHT - 50.0, 80.0, 30.0);

// Outcome screens
pub const PLAY_AGAIN: Button = Button::new("PLAY AGAIN", 14.0, MID_X - 60.0, MID_Y + 60.0, 100.0, 30.0);
pub const MENU: Button = Button::new("MENU", 14.0, MID_X + 60.0, MID_Y + 60.0, 100.0, 30.0);

/// Duration buttons paired with the length they select
pub fn duration_buttons() -> [(Button, MatchLength); 3] {
    [
        (OPTIONS_TWO, MatchLength::Two),
        (OPTIONS_FOUR, MatchLength::Four),
        (OPTIONS_SIX, MatchLength::Six),
    ]
}
