//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard, pointer)
//! - Player control schemes

pub mod input;

pub use input::{ControlScheme, InputState, Key};
