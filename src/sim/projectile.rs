//! Thrown drumsticks and hunter arrows

use glam::Vec2;
use rand::Rng;

use super::state::PlayerId;
use crate::consts::*;

/// A spinning drumstick thrown by a bird
#[derive(Debug, Clone)]
pub struct Drumstick {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Spin (radians)
    pub angle: f32,
    pub owner: PlayerId,
    pub active: bool,
    /// Texture dots on the meat, fixed for the drumstick's lifetime
    pub texture: [Vec2; 3],
}

impl Drumstick {
    /// Launch from `from` along the facing direction turned by `spread`
    pub fn thrown(owner: PlayerId, from: Vec2, facing: f32, spread: f32, rng: &mut impl Rng) -> Self {
        let vel = crate::rotate(Vec2::new(facing * DRUMSTICK_SPEED, 0.0), spread);
        let texture = std::array::from_fn(|_| {
            Vec2::new(rng.random_range(-5.0f32..5.0), rng.random_range(-15.0f32..10.0))
        });
        Self {
            pos: from,
            vel,
            angle: 0.0,
            owner,
            active: true,
            texture,
        }
    }

    /// Fly straight, spin with horizontal speed, retire past either side wall
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.angle += 0.1 * self.vel.x;
        if self.pos.x < 0.0 || self.pos.x > CANVAS_WIDTH {
            self.active = false;
        }
    }
}

/// An arrow shot by a hunter
#[derive(Debug, Clone)]
pub struct Arrow {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Direction the shooter faced (for fletching)
    pub facing: f32,
    /// Ticks since release
    pub age: u32,
}

impl Arrow {
    /// Aim from `from` straight at `target` at arrow speed
    pub fn aimed(from: Vec2, target: Vec2, facing: f32) -> Self {
        let dir = (target - from).try_normalize().unwrap_or(Vec2::new(facing, 0.0));
        Self {
            pos: from,
            vel: dir * ARROW_SPEED,
            facing,
            age: 0,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.age += 1;
    }

    /// Off the canvas or flown too long
    pub fn expired(&self) -> bool {
        self.age > ARROW_MAX_AGE
            || self.pos.x < 0.0
            || self.pos.x > CANVAS_WIDTH
            || self.pos.y < 0.0
            || self.pos.y > CANVAS_HEIGHT
    }

    /// Shaft angle for drawing
    pub fn heading(&self) -> f32 {
        crate::heading(self.vel)
    }
}
