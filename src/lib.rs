//! Hokie Fighters - a two-player bird brawler on a fixed 400x400 canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, combat, hunter, pickups, screens)
//! - `renderer`: Drawing-surface abstraction and scene drawing
//! - `platform`: Keyboard/pointer input state and control schemes
//! - `settings`: Match length and effect preferences
//! - `ui`: Button layout shared by the sim and the renderer

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{MatchLength, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Distance from a bird's center to its feet
    pub const FOOT_OFFSET: f32 = 38.0;
    /// Resting center height on the ground
    pub const FLOOR_Y: f32 = CANVAS_HEIGHT - FOOT_OFFSET;
    /// Horizontal margin a bird's center cannot cross
    pub const EDGE_MARGIN: f32 = 20.0;
    /// Highest a bird's center can go
    pub const CEILING_Y: f32 = 20.0;

    /// Physics (per tick)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_FORCE: f32 = -10.0;
    pub const MOVE_SPEED: f32 = 2.0;
    pub const GROUND_FRICTION: f32 = 0.8;
    pub const AIR_DRAG: f32 = 0.98;
    pub const STOP_SPEED: f32 = 0.1;
    /// Minimum landing speed that kicks up dust
    pub const LANDING_DUST_MIN_SPEED: f32 = 2.0;

    /// Bird defaults
    pub const FIGHTER_SIZE: f32 = 40.0;
    pub const MAX_HEALTH: f32 = 100.0;
    pub const FLAP_COOLDOWN: u32 = 12;
    pub const HIT_SHAKE_TICKS: u32 = 15;

    /// Gait
    pub const LEG_SWING_SPEED: f32 = 0.1;
    pub const LEG_SWING_MAX: f32 = 0.4;

    /// Melee
    pub const PUNCH_DURATION: u32 = 20;
    pub const PUNCH_REACH: f32 = 30.0;
    pub const PUNCH_RADIUS: f32 = 25.0;
    pub const PUNCH_DAMAGE: f32 = 10.0;
    pub const PUNCH_KNOCKBACK_X: f32 = 4.0;
    pub const PUNCH_KNOCKBACK_Y: f32 = -5.0;

    /// Drumsticks
    pub const THROW_COOLDOWN: u32 = 30;
    pub const DRUMSTICK_SPEED: f32 = 5.0;
    pub const DRUMSTICK_DAMAGE: f32 = 5.0;
    pub const DRUMSTICK_HIT_RADIUS: f32 = 20.0;
    /// Angular step between split-shot drumsticks (radians)
    pub const SPREAD_STEP: f32 = 0.15;
    /// Widest offset of any split-shot drumstick; the fan stays in front of the thrower
    pub const MAX_SPREAD: f32 = 0.6;
    /// Projectile hit tests run every this many ticks
    pub const PROJECTILE_CHECK_INTERVAL: u64 = 3;

    /// Arrows
    pub const ARROW_SPEED: f32 = 4.0;
    pub const ARROW_DAMAGE: f32 = 8.0;
    pub const ARROW_HIT_RADIUS: f32 = 15.0;
    pub const ARROW_MAX_AGE: u32 = 300;

    /// Hunter
    pub const HUNTER_SPEED: f32 = 1.0;
    pub const HUNTER_DETECTION_RADIUS: f32 = 200.0;
    pub const HUNTER_SHOOT_COOLDOWN: u32 = 90;

    /// Pickups
    pub const PICKUP_RADIUS: f32 = 35.0;
    pub const PICKUP_RESPAWN_TICKS: u32 = 600;
    pub const HEAL_AMOUNT: f32 = 20.0;
    pub const SPLITSHOT_BONUS: u32 = 2;
    pub const DEFENSE_FACTOR: f32 = 0.8;

    /// Options screen throw animation period
    pub const OPTIONS_THROW_INTERVAL: u64 = 120;

    /// Particle cap when settings don't override it
    pub const MAX_PARTICLES: usize = 256;
}

/// Direction of a vector in radians (0 = +x, clockwise on screen since +y is down)
#[inline]
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Vector of the given length pointing along `angle`
#[inline]
pub fn from_heading(angle: f32, length: f32) -> Vec2 {
    Vec2::new(length * angle.cos(), length * angle.sin())
}

/// Rotate `v` by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
