//! Keyboard and pointer state sampled once per tick

use std::collections::HashSet;

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    F,
    G,
    Up,
    Left,
    Down,
    Right,
    O,
    P,
    B,
    C,
    Escape,
    Enter,
    Backspace,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` to a key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Key::W),
            "KeyA" => Some(Key::A),
            "KeyS" => Some(Key::S),
            "KeyD" => Some(Key::D),
            "KeyF" => Some(Key::F),
            "KeyG" => Some(Key::G),
            "ArrowUp" => Some(Key::Up),
            "ArrowLeft" => Some(Key::Left),
            "ArrowDown" => Some(Key::Down),
            "ArrowRight" => Some(Key::Right),
            "KeyO" => Some(Key::O),
            "KeyP" => Some(Key::P),
            "KeyB" => Some(Key::B),
            "KeyC" => Some(Key::C),
            "Escape" => Some(Key::Escape),
            "Enter" | "NumpadEnter" => Some(Key::Enter),
            "Backspace" => Some(Key::Backspace),
            _ => None,
        }
    }

    /// Glyph drawn on the instructions key icons
    pub fn label(&self) -> &'static str {
        match self {
            Key::W => "W",
            Key::A => "A",
            Key::S => "S",
            Key::D => "D",
            Key::F => "F",
            Key::G => "G",
            Key::Up => "↑",
            Key::Left => "←",
            Key::Down => "↓",
            Key::Right => "→",
            Key::O => "O",
            Key::P => "P",
            Key::B => "B",
            Key::C => "C",
            Key::Escape => "Esc",
            Key::Enter => "Enter",
            Key::Backspace => "Bksp",
        }
    }

    /// Whether the browser's default action for this key should be suppressed
    pub fn blocks_default(&self) -> bool {
        matches!(
            self,
            Key::Up | Key::Down | Key::Left | Key::Right | Key::Backspace
        )
    }
}

/// Key bindings for one bird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlScheme {
    pub up: Key,
    pub left: Key,
    pub down: Key,
    pub right: Key,
    pub punch: Key,
    pub throw: Key,
}

impl ControlScheme {
    /// W/A/S/D to move, F to punch, G to throw
    pub const PLAYER_ONE: ControlScheme = ControlScheme {
        up: Key::W,
        left: Key::A,
        down: Key::S,
        right: Key::D,
        punch: Key::F,
        throw: Key::G,
    };

    /// Arrow keys to move, O to punch, P to throw
    pub const PLAYER_TWO: ControlScheme = ControlScheme {
        up: Key::Up,
        left: Key::Left,
        down: Key::Down,
        right: Key::Right,
        punch: Key::O,
        throw: Key::P,
    };
}

/// Input snapshot consumed by `sim::tick`
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    /// Keys that went down since the last `end_tick`
    pressed: HashSet<Key>,
    /// Pointer position in canvas coordinates
    pub pointer: Vec2,
    /// Whether the primary pointer button is held
    pub pointer_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // Auto-repeat keydowns don't count as fresh presses
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn any_just_pressed(&self, keys: &[Key]) -> bool {
        keys.iter().any(|k| self.just_pressed(*k))
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    pub fn pointer_pressed(&mut self, pos: Vec2) {
        self.pointer = pos;
        self.pointer_down = true;
    }

    pub fn pointer_released(&mut self) {
        self.pointer_down = false;
    }

    /// Clear one-shot state after a tick consumed it
    pub fn end_tick(&mut self) {
        self.pressed.clear();
    }

    /// Drop everything held (window lost focus)
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
        self.pointer_down = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes_map_both_schemes() {
        assert_eq!(Key::from_code("KeyW"), Some(ControlScheme::PLAYER_ONE.up));
        assert_eq!(Key::from_code("ArrowLeft"), Some(ControlScheme::PLAYER_TWO.left));
        assert_eq!(Key::from_code("NumpadEnter"), Some(Key::Enter));
        assert_eq!(Key::from_code("KeyZ"), None);
    }

    #[test]
    fn test_held_key_is_pressed_once() {
        let mut input = InputState::new();
        input.key_down(Key::Escape);
        assert!(input.just_pressed(Key::Escape));
        input.end_tick();
        // Auto-repeat
        input.key_down(Key::Escape);
        assert!(input.is_down(Key::Escape));
        assert!(!input.just_pressed(Key::Escape));
        input.key_up(Key::Escape);
        assert!(!input.is_down(Key::Escape));
    }

    #[test]
    fn test_release_all_clears_pointer_and_keys() {
        let mut input = InputState::new();
        input.key_down(Key::A);
        input.pointer_pressed(Vec2::new(10.0, 10.0));
        input.release_all();
        assert!(!input.is_down(Key::A));
        assert!(!input.pointer_down);
    }
}
