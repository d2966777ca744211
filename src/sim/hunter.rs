//! The hunter: walks after the healthier bird and shoots the closest one

use glam::Vec2;

use super::collision::settle_on_floor;
use super::fighter::{Fighter, Gait};
use super::projectile::Arrow;
use super::state::PlayerId;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Hunter {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: f32,
    /// Ticks until the next shot
    pub shoot_cooldown: u32,
    pub gait: Gait,
    pub walking: bool,
}

impl Hunter {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            facing: -1.0,
            shoot_cooldown: HUNTER_SHOOT_COOLDOWN,
            gait: Gait::default(),
            walking: false,
        }
    }

    /// Where arrows leave the bow
    pub fn bow_point(&self) -> Vec2 {
        self.pos + Vec2::new(self.facing * 15.0, -20.0)
    }

    /// One tick of pursuit and shooting. Returns an arrow when one is loosed.
    pub fn update(&mut self, fighters: &[Fighter; 2]) -> Option<Arrow> {
        self.vel.y += GRAVITY;
        self.pos += self.vel;
        settle_on_floor(&mut self.pos, &mut self.vel);

        self.walking = false;
        if let Some(target) = pursuit_target(fighters) {
            let dx = fighters[target.index()].pos.x - self.pos.x;
            if dx != 0.0 {
                self.facing = dx.signum();
                if dx.abs() <= HUNTER_SPEED {
                    self.pos.x += dx;
                } else {
                    self.pos.x += self.facing * HUNTER_SPEED;
                }
                self.walking = true;
            }
        }
        if self.walking {
            self.gait.advance();
        } else {
            self.gait.settle();
        }

        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
        if self.shoot_cooldown > 0 {
            return None;
        }
        let target = shot_target(self.pos, fighters)?;
        let aim = fighters[target.index()].pos;
        self.facing = if aim.x < self.pos.x { -1.0 } else { 1.0 };
        self.shoot_cooldown = HUNTER_SHOOT_COOLDOWN;
        log::debug!("hunter fires at {target:?}");
        Some(Arrow::aimed(self.bow_point(), aim, self.facing))
    }
}

/// Living bird with the most health; player one on ties
pub fn pursuit_target(fighters: &[Fighter; 2]) -> Option<PlayerId> {
    let mut best: Option<&Fighter> = None;
    for f in fighters.iter().filter(|f| !f.is_dead) {
        match best {
            Some(b) if f.health <= b.health => {}
            _ => best = Some(f),
        }
    }
    best.map(|f| f.id)
}

/// Closest living bird inside detection range; player one on ties
pub fn shot_target(from: Vec2, fighters: &[Fighter; 2]) -> Option<PlayerId> {
    let mut best: Option<(&Fighter, f32)> = None;
    for f in fighters.iter().filter(|f| !f.is_dead) {
        let d = from.distance(f.pos);
        if d > HUNTER_DETECTION_RADIUS {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((f, d)),
        }
    }
    best.map(|(f, _)| f.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> [Fighter; 2] {
        let mut one = Fighter::new(PlayerId::One);
        let mut two = Fighter::new(PlayerId::Two);
        one.pos = Vec2::new(100.0, FLOOR_Y);
        two.pos = Vec2::new(300.0, FLOOR_Y);
        [one, two]
    }

    #[test]
    fn test_chases_healthier_bird() {
        let mut fighters = pair();
        fighters[0].health = 40.0;
        let mut h = Hunter::new(Vec2::new(200.0, FLOOR_Y));
        h.update(&fighters);
        assert_eq!(h.pos.x, 200.0 + HUNTER_SPEED);
        assert_eq!(h.facing, 1.0);
        assert!(h.walking);
    }

    #[test]
    fn test_equal_health_goes_to_player_one() {
        let fighters = pair();
        assert_eq!(pursuit_target(&fighters), Some(PlayerId::One));
    }

    #[test]
    fn test_stands_still_when_aligned() {
        let fighters = pair();
        let mut h = Hunter::new(Vec2::new(100.0, FLOOR_Y));
        h.update(&fighters);
        assert_eq!(h.pos.x, 100.0);
        assert!(!h.walking);
    }

    #[test]
    fn test_snaps_onto_target_within_one_step() {
        let fighters = pair();
        let mut h = Hunter::new(Vec2::new(100.5, FLOOR_Y));
        h.update(&fighters);
        assert_eq!(h.pos.x, 100.0);
    }

    #[test]
    fn test_shoots_nearest_in_range_after_cooldown() {
        let fighters = pair();
        // Standing on its pursuit target, so it never walks
        let mut h = Hunter::new(Vec2::new(100.0, FLOOR_Y));
        let mut shots = Vec::new();
        for _ in 0..HUNTER_SHOOT_COOLDOWN {
            if let Some(a) = h.update(&fighters) {
                shots.push(a);
            }
        }
        assert_eq!(shots.len(), 1);
        // Aimed at player one, who is standing on the hunter
        assert!(shots[0].vel.y > 0.0);
        assert_eq!(h.shoot_cooldown, HUNTER_SHOOT_COOLDOWN);
    }

    #[test]
    fn test_nothing_in_range_means_no_shot() {
        let mut fighters = pair();
        fighters[0].pos.x = 20.0;
        fighters[1].pos.x = 380.0;
        assert_eq!(shot_target(Vec2::new(200.0, 0.0), &fighters), None);
        let mut h = Hunter::new(Vec2::new(200.0, 0.0));
        h.shoot_cooldown = 1;
        // Held back by distance, cooldown stays expired and tries again next tick
        assert!(h.update(&fighters).is_none());
        assert_eq!(h.shoot_cooldown, 0);
    }

    #[test]
    fn test_dead_birds_are_ignored() {
        let mut fighters = pair();
        fighters[0].is_dead = true;
        assert_eq!(pursuit_target(&fighters), Some(PlayerId::Two));
        assert_eq!(shot_target(Vec2::new(60.0, FLOOR_Y), &fighters), None);
    }
}
