//! Player-controlled birds
//!
//! Both birds are the same type; they differ only in the `ControlScheme`
//! they read and the way they face at spawn.

use glam::Vec2;
use rand::Rng;

use super::collision::{platform_landing, settle_on_floor};
use super::particles::ParticleSystem;
use super::projectile::Drumstick;
use super::state::{Platform, PlayerId};
use crate::consts::*;
use crate::platform::{ControlScheme, InputState};

/// Cosmetic leg swing shared by birds and the hunter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gait {
    /// Current swing (radians)
    pub angle: f32,
    /// +1 or -1
    pub dir: f32,
}

impl Default for Gait {
    fn default() -> Self {
        Self { angle: 0.0, dir: 1.0 }
    }
}

impl Gait {
    /// Swing one step. Returns true when a foot plants (the swing reverses).
    pub fn advance(&mut self) -> bool {
        self.angle += self.dir * LEG_SWING_SPEED;
        if self.angle.abs() >= LEG_SWING_MAX {
            self.angle = self.angle.clamp(-LEG_SWING_MAX, LEG_SWING_MAX);
            self.dir = -self.dir;
            true
        } else {
            false
        }
    }

    /// Ease the legs back to standing
    pub fn settle(&mut self) {
        self.angle *= 0.7;
        if self.angle.abs() < 0.01 {
            self.angle = 0.0;
        }
    }
}

/// A player bird
#[derive(Debug, Clone)]
pub struct Fighter {
    pub id: PlayerId,
    pub controls: ControlScheme,
    pub pos: Vec2,
    pub vel: Vec2,
    /// +1 right, -1 left
    pub facing: f32,
    /// 0..=100
    pub health: f32,
    pub is_dead: bool,
    /// Damage multiplier in (0, 1]; shrinks with each defense pickup
    pub defense: f32,
    /// Drumsticks per throw
    pub throw_count: u32,
    pub grounded: bool,
    pub walking: bool,
    /// Ignore platforms for this tick only
    pub fall_through: bool,
    pub gait: Gait,
    pub punching: bool,
    pub punch_landed: bool,
    pub punch_timer: u32,
    pub flapping: bool,
    pub flap_timer: u32,
    /// Ticks of post-hit shake left
    pub hit_timer: u32,
    /// Throw cooldown
    pub drumstick_timer: u32,
    /// Visual scale
    pub size: f32,
    /// Ticks until a wandering (title screen) bird flaps on its own
    pub wander_flap_timer: u32,
}

impl Fighter {
    pub fn new(id: PlayerId) -> Self {
        let x = match id {
            PlayerId::One => CANVAS_WIDTH * 0.25,
            PlayerId::Two => CANVAS_WIDTH * 0.75,
        };
        let mut fighter = Self {
            id,
            controls: id.controls(),
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            facing: 1.0,
            health: MAX_HEALTH,
            is_dead: false,
            defense: 1.0,
            throw_count: 1,
            grounded: false,
            walking: false,
            fall_through: false,
            gait: Gait::default(),
            punching: false,
            punch_landed: false,
            punch_timer: 0,
            flapping: false,
            flap_timer: 0,
            hit_timer: 0,
            drumstick_timer: 0,
            size: FIGHTER_SIZE,
            wander_flap_timer: 0,
        };
        fighter.reset(Vec2::new(x, FLOOR_Y), FIGHTER_SIZE);
        fighter
    }

    /// Restore match defaults at `pos`
    pub fn reset(&mut self, pos: Vec2, size: f32) {
        *self = Self {
            id: self.id,
            controls: self.controls,
            pos,
            vel: Vec2::ZERO,
            facing: self.id.spawn_facing(),
            health: MAX_HEALTH,
            is_dead: false,
            defense: 1.0,
            throw_count: 1,
            grounded: pos.y >= FLOOR_Y,
            walking: false,
            fall_through: false,
            gait: Gait::default(),
            punching: false,
            punch_landed: false,
            punch_timer: 0,
            flapping: false,
            flap_timer: 0,
            hit_timer: 0,
            drumstick_timer: 0,
            size,
            wander_flap_timer: 0,
        };
    }

    /// Bottom of the claws
    pub fn feet(&self) -> Vec2 {
        self.pos + Vec2::new(0.0, FOOT_OFFSET)
    }

    pub fn move_left(&mut self) {
        self.pos.x -= MOVE_SPEED;
        self.facing = -1.0;
        self.walking = true;
    }

    pub fn move_right(&mut self) {
        self.pos.x += MOVE_SPEED;
        self.facing = 1.0;
        self.walking = true;
    }

    /// Flap upward if the wings are ready
    pub fn flap(&mut self) {
        if self.flap_timer == 0 {
            self.vel.y = JUMP_FORCE;
            self.flap_timer = FLAP_COOLDOWN;
            self.flapping = true;
            self.grounded = false;
        }
    }

    /// Drop through the ledge underfoot on the next physics step
    pub fn drop_through(&mut self) {
        self.fall_through = true;
    }

    /// Start a punch if the last one has finished
    pub fn punch(&mut self) -> bool {
        if self.punch_timer > 0 {
            return false;
        }
        self.punching = true;
        self.punch_landed = false;
        self.punch_timer = PUNCH_DURATION;
        true
    }

    /// Fist position while punching
    pub fn punch_point(&self) -> Vec2 {
        self.pos + Vec2::new(PUNCH_REACH * self.facing, 0.0)
    }

    /// Whether this punch can still connect
    pub fn punch_live(&self) -> bool {
        self.punching && !self.punch_landed
    }

    /// Apply raw damage scaled by defense and clamp to 0..=100
    pub fn take_damage(&mut self, raw: f32) {
        self.health = (self.health - raw * self.defense).clamp(0.0, MAX_HEALTH);
        self.hit_timer = HIT_SHAKE_TICKS;
        if self.health <= 0.0 {
            self.is_dead = true;
        }
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).clamp(0.0, MAX_HEALTH);
    }

    /// Upward, away-from-the-attacker shove
    pub fn knock_back(&mut self, direction: f32) {
        self.vel = Vec2::new(PUNCH_KNOCKBACK_X * direction, PUNCH_KNOCKBACK_Y);
        self.grounded = false;
    }

    pub fn can_throw(&self) -> bool {
        self.drumstick_timer == 0
    }

    /// Throw `throw_count` drumsticks fanned around the facing direction
    pub fn throw(&mut self, rng: &mut impl Rng) -> Vec<Drumstick> {
        if !self.can_throw() {
            return Vec::new();
        }
        self.drumstick_timer = THROW_COOLDOWN;
        let count = self.throw_count;
        (0..count)
            .map(|i| Drumstick::thrown(self.id, self.pos, self.facing, spread_angle(i, count), rng))
            .collect()
    }

    /// Read this bird's keys and act on them
    pub fn apply_controls(&mut self, input: &InputState, drumsticks: &mut Vec<Drumstick>, rng: &mut impl Rng) {
        self.walking = false;
        let keys = self.controls;
        if input.is_down(keys.up) {
            self.flap();
        }
        if input.is_down(keys.left) {
            self.move_left();
        }
        if input.is_down(keys.right) {
            self.move_right();
        }
        if input.is_down(keys.down) {
            self.drop_through();
        }
        if input.is_down(keys.punch) {
            self.punch();
        }
        if input.is_down(keys.throw) {
            drumsticks.extend(self.throw(rng));
        }
    }

    /// Gravity, integration, bounds, floor and platform landing
    pub fn integrate(&mut self, platforms: &[Platform], particles: &mut ParticleSystem, rng: &mut impl Rng) {
        let was_grounded = self.grounded;
        let prev_feet = self.pos.y + FOOT_OFFSET;

        self.vel.y += GRAVITY;
        self.pos += self.vel;

        self.pos.x = self.pos.x.clamp(EDGE_MARGIN, CANVAS_WIDTH - EDGE_MARGIN);
        if self.pos.y < CEILING_Y {
            self.pos.y = CEILING_Y;
            self.vel.y = self.vel.y.max(0.0);
        }

        let impact = self.vel.y;
        self.grounded = settle_on_floor(&mut self.pos, &mut self.vel);
        if !self.grounded && !self.fall_through && self.vel.y >= 0.0 {
            let feet = self.pos.y + FOOT_OFFSET;
            if let Some(top) = platform_landing(prev_feet, feet, self.pos.x, platforms) {
                self.pos.y = top - FOOT_OFFSET;
                self.vel.y = 0.0;
                self.grounded = true;
            }
        }

        if self.grounded {
            if !self.walking {
                self.vel.x *= GROUND_FRICTION;
                if self.vel.x.abs() < STOP_SPEED {
                    self.vel.x = 0.0;
                }
            }
        } else {
            self.vel.x *= AIR_DRAG;
        }

        if self.grounded && !was_grounded && impact >= LANDING_DUST_MIN_SPEED {
            particles.landing_dust(self.feet(), impact, rng);
        }

        // One-tick flag, consumed or not
        self.fall_through = false;
    }

    /// Leg swing while walking, with a dust puff per planted step
    pub fn update_gait(&mut self, particles: &mut ParticleSystem, rng: &mut impl Rng) {
        if self.walking && self.grounded {
            if self.gait.advance() {
                particles.footstep(self.feet(), self.facing, rng);
            }
        } else {
            self.gait.settle();
        }
    }

    /// Count down every cooldown by one tick
    pub fn tick_timers(&mut self) {
        self.punch_timer = self.punch_timer.saturating_sub(1);
        self.flap_timer = self.flap_timer.saturating_sub(1);
        self.hit_timer = self.hit_timer.saturating_sub(1);
        self.drumstick_timer = self.drumstick_timer.saturating_sub(1);
        self.punching = self.punch_timer > 0;
        self.flapping = self.flap_timer > FLAP_COOLDOWN / 2;
    }

    /// Title-screen idle: pace between the walls and flap now and then
    pub fn wander(&mut self, particles: &mut ParticleSystem, rng: &mut impl Rng) {
        self.walking = false;
        if self.facing > 0.0 {
            self.move_right();
        } else {
            self.move_left();
        }
        if self.pos.x <= EDGE_MARGIN {
            self.facing = 1.0;
        }
        if self.pos.x >= CANVAS_WIDTH - EDGE_MARGIN {
            self.facing = -1.0;
        }
        if (self.wander_flap_timer == 0 || self.pos.y >= FLOOR_Y) && self.pos.y > 50.0 {
            self.vel.y = JUMP_FORCE;
            self.flap_timer = FLAP_COOLDOWN;
            self.wander_flap_timer = rng.random_range(10..60);
        }
        self.integrate(&[], particles, rng);
        self.update_gait(particles, rng);
        self.tick_timers();
        self.wander_flap_timer = self.wander_flap_timer.saturating_sub(1);
    }
}

/// Angular offset of the `index`-th of `count` drumsticks: 0, +s, -s, +2s, -2s, ...
///
/// `s` shrinks below `SPREAD_STEP` when needed so the outermost pair sits at
/// most `MAX_SPREAD` from the facing direction.
pub fn spread_angle(index: u32, count: u32) -> f32 {
    let pairs = count.saturating_sub(1).div_ceil(2);
    if pairs == 0 {
        return 0.0;
    }
    let step = SPREAD_STEP.min(MAX_SPREAD / pairs as f32);
    let side = if index % 2 == 1 { 1.0 } else { -1.0 };
    side * index.div_ceil(2) as f32 * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_gravity_pulls_and_floor_stops() {
        let mut f = Fighter::new(PlayerId::One);
        let mut ps = ParticleSystem::new(64);
        f.pos.y = 100.0;
        f.grounded = false;
        for _ in 0..200 {
            f.integrate(&[], &mut ps, &mut rng());
            assert!(f.pos.y <= FLOOR_Y);
        }
        assert!(f.grounded);
        assert_eq!(f.pos.y, FLOOR_Y);
        assert_eq!(f.vel.y, 0.0);
    }

    #[test]
    fn test_hard_landing_raises_dust() {
        let mut f = Fighter::new(PlayerId::One);
        let mut ps = ParticleSystem::new(64);
        f.pos.y = FLOOR_Y - 80.0;
        f.grounded = false;
        let mut r = rng();
        while !f.grounded {
            f.integrate(&[], &mut ps, &mut r);
        }
        assert!(!ps.is_empty());
    }

    #[test]
    fn test_lands_on_platform_and_rests() {
        let ledge = Platform {
            pos: Vec2::new(80.0, 260.0),
            width: 80.0,
            height: 10.0,
        };
        let mut f = Fighter::new(PlayerId::One);
        let mut ps = ParticleSystem::new(64);
        f.pos = Vec2::new(120.0, 200.0);
        f.grounded = false;
        let mut r = rng();
        for _ in 0..60 {
            f.integrate(&[ledge], &mut ps, &mut r);
        }
        assert!(f.grounded);
        assert_eq!(f.pos.y, 260.0 - FOOT_OFFSET);
        assert_eq!(f.vel.y, 0.0);
    }

    #[test]
    fn test_fall_through_drops_past_platform() {
        let ledge = Platform {
            pos: Vec2::new(80.0, 260.0),
            width: 80.0,
            height: 10.0,
        };
        let mut f = Fighter::new(PlayerId::One);
        let mut ps = ParticleSystem::new(64);
        f.pos = Vec2::new(120.0, 260.0 - FOOT_OFFSET);
        f.grounded = true;
        let mut r = rng();
        f.drop_through();
        f.integrate(&[ledge], &mut ps, &mut r);
        assert!(!f.fall_through, "flag clears after one tick");
        assert!(!f.grounded);
        // Feet are now below the top, so the ledge no longer catches them
        for _ in 0..60 {
            f.integrate(&[ledge], &mut ps, &mut r);
        }
        assert_eq!(f.pos.y, FLOOR_Y);
    }

    #[test]
    fn test_jumping_up_passes_through_platform() {
        let ledge = Platform {
            pos: Vec2::new(80.0, 330.0),
            width: 80.0,
            height: 10.0,
        };
        let mut f = Fighter::new(PlayerId::One);
        let mut ps = ParticleSystem::new(64);
        f.pos.x = 120.0;
        f.flap();
        let mut r = rng();
        let mut min_y = f.pos.y;
        for _ in 0..10 {
            f.integrate(&[ledge], &mut ps, &mut r);
            min_y = min_y.min(f.pos.y);
        }
        assert!(min_y + FOOT_OFFSET < 330.0, "feet rose above the ledge");
    }

    #[test]
    fn test_friction_stops_idle_grounded_bird() {
        let mut f = Fighter::new(PlayerId::One);
        let mut ps = ParticleSystem::new(64);
        f.vel.x = 3.0;
        let mut r = rng();
        for _ in 0..40 {
            f.integrate(&[], &mut ps, &mut r);
        }
        assert_eq!(f.vel.x, 0.0);
    }

    #[test]
    fn test_take_damage_scales_by_defense() {
        let mut f = Fighter::new(PlayerId::Two);
        f.defense = 0.8;
        f.take_damage(10.0);
        assert!((f.health - 92.0).abs() < 1e-4);
        assert_eq!(f.hit_timer, HIT_SHAKE_TICKS);
        assert!(!f.is_dead);
        f.take_damage(500.0);
        assert_eq!(f.health, 0.0);
        assert!(f.is_dead);
    }

    #[test]
    fn test_punch_waits_for_previous_window() {
        let mut f = Fighter::new(PlayerId::One);
        assert!(f.punch());
        f.punch_landed = true;
        assert!(!f.punch());
        assert!(f.punch_landed, "landed flag only clears on a new punch");
        for _ in 0..PUNCH_DURATION {
            f.tick_timers();
        }
        assert!(!f.punching);
        assert!(f.punch());
        assert!(!f.punch_landed);
    }

    #[test]
    fn test_throw_respects_cooldown() {
        let mut f = Fighter::new(PlayerId::One);
        let mut r = rng();
        assert_eq!(f.throw(&mut r).len(), 1);
        assert!(f.throw(&mut r).is_empty());
        for _ in 0..THROW_COOLDOWN {
            f.tick_timers();
        }
        assert_eq!(f.throw(&mut r).len(), 1);
    }

    #[test]
    fn test_spread_alternates_sides() {
        assert_eq!(spread_angle(0, 5), 0.0);
        assert_eq!(spread_angle(1, 5), SPREAD_STEP);
        assert_eq!(spread_angle(2, 5), -SPREAD_STEP);
        assert_eq!(spread_angle(3, 5), 2.0 * SPREAD_STEP);
        assert_eq!(spread_angle(4, 5), -2.0 * SPREAD_STEP);
        assert_eq!(spread_angle(0, 1), 0.0);
    }

    #[test]
    fn test_wide_throw_stays_in_front() {
        let mut f = Fighter::new(PlayerId::One);
        f.facing = 1.0;
        f.throw_count = 23;
        let sticks = f.throw(&mut rng());
        assert_eq!(sticks.len(), 23);
        for stick in &sticks {
            assert!(stick.vel.x * f.facing > 0.0, "drumstick flew backwards: {:?}", stick.vel);
        }
        // Outermost pair sits exactly on the cone edge, mirrored
        assert!((spread_angle(21, 23) - MAX_SPREAD).abs() < 1e-5);
        assert!((spread_angle(22, 23) + MAX_SPREAD).abs() < 1e-5);
        for i in (1..23).step_by(2) {
            assert!((spread_angle(i, 23) + spread_angle(i + 1, 23)).abs() < 1e-5);
            assert!(spread_angle(i, 23) > 0.0);
        }
        // Offsets still grow with index
        assert!(spread_angle(3, 23) > spread_angle(1, 23));
    }

    #[test]
    fn test_controls_follow_scheme() {
        let mut f = Fighter::new(PlayerId::Two);
        let mut input = InputState::new();
        let mut sticks = Vec::new();
        input.key_down(crate::platform::Key::Right);
        input.key_down(crate::platform::Key::P);
        // Player one's keys do nothing to player two
        input.key_down(crate::platform::Key::W);
        let x = f.pos.x;
        f.apply_controls(&input, &mut sticks, &mut rng());
        assert_eq!(f.pos.x, x + MOVE_SPEED);
        assert_eq!(f.facing, 1.0);
        assert!(f.walking);
        assert_eq!(f.vel.y, 0.0);
        assert_eq!(sticks.len(), 1);
    }

    #[test]
    fn test_wander_bounces_off_walls() {
        let mut f = Fighter::new(PlayerId::One);
        let mut ps = ParticleSystem::new(64);
        let mut r = rng();
        f.pos.x = CANVAS_WIDTH - EDGE_MARGIN - 1.0;
        f.facing = 1.0;
        for _ in 0..5 {
            f.wander(&mut ps, &mut r);
        }
        assert_eq!(f.facing, -1.0);
        assert!(f.pos.y >= CEILING_Y);
    }

    proptest! {
        #[test]
        fn test_x_stays_on_canvas(vx in -1.0e4f32..1.0e4, x in 0.0f32..400.0) {
            let mut f = Fighter::new(PlayerId::One);
            let mut ps = ParticleSystem::new(0);
            f.pos.x = x;
            f.vel.x = vx;
            f.integrate(&[], &mut ps, &mut rng());
            prop_assert!(f.pos.x >= EDGE_MARGIN && f.pos.x <= CANVAS_WIDTH - EDGE_MARGIN);
        }

        #[test]
        fn test_damage_clamps(health in 0.0f32..=100.0, raw in -500.0f32..500.0, defense in 0.01f32..=1.0) {
            let mut f = Fighter::new(PlayerId::One);
            f.health = health;
            f.defense = defense;
            f.take_damage(raw);
            let expected = (health - raw * defense).clamp(0.0, 100.0);
            prop_assert!((0.0..=100.0).contains(&f.health));
            prop_assert!((f.health - expected).abs() < 1e-3);
        }
    }
}
