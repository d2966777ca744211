//! Cosmetic particles: landing dust, footstep puffs and hit feathers
//!
//! Nothing here feeds back into gameplay.

use glam::Vec2;
use rand::Rng;

/// Particle families (the renderer picks colors from these)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Dust,
    Feather,
}

/// A single particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub kind: ParticleKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks left to live
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
    /// Rotation (feathers tumble)
    pub angle: f32,
    pub spin: f32,
    /// 0-255 brightness variation
    pub shade: u8,
}

impl Particle {
    /// Remaining life as 0..=1 (drives fading)
    pub fn life_fraction(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

const DUST_GRAVITY: f32 = -0.02;
const FEATHER_GRAVITY: f32 = 0.05;
const FEATHER_DRAG: f32 = 0.92;
const DUST_DRAG: f32 = 0.9;

/// Owned, capped particle list
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    cap: usize,
}

impl ParticleSystem {
    pub fn new(cap: usize) -> Self {
        Self {
            particles: Vec::with_capacity(cap.min(256)),
            cap,
        }
    }

    pub fn set_cap(&mut self, cap: usize) {
        self.cap = cap;
        self.particles.truncate(cap);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn push(&mut self, particle: Particle) {
        if self.cap == 0 {
            return;
        }
        if self.particles.len() >= self.cap {
            // Remove oldest particles to make room
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Dust kicked up when a bird lands; more and faster for harder landings
    pub fn landing_dust(&mut self, feet: Vec2, impact: f32, rng: &mut impl Rng) {
        let count = (impact * 1.5).clamp(2.0, 14.0) as usize;
        for _ in 0..count {
            let side: f32 = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let speed = rng.random_range(0.3f32..1.0) * impact * 0.25;
            let life = rng.random_range(15..30);
            self.push(Particle {
                kind: ParticleKind::Dust,
                pos: feet + Vec2::new(rng.random_range(-6.0f32..6.0), 0.0),
                vel: Vec2::new(side * speed, -rng.random_range(0.2f32..0.8)),
                life,
                max_life: life,
                size: rng.random_range(3.0..7.0),
                angle: 0.0,
                spin: 0.0,
                shade: rng.random_range(150..210),
            });
        }
    }

    /// A small puff behind the planted foot
    pub fn footstep(&mut self, feet: Vec2, facing: f32, rng: &mut impl Rng) {
        for _ in 0..2 {
            let life = rng.random_range(8..16);
            self.push(Particle {
                kind: ParticleKind::Dust,
                pos: feet,
                vel: Vec2::new(-facing * rng.random_range(0.2f32..0.6), -rng.random_range(0.1f32..0.4)),
                life,
                max_life: life,
                size: rng.random_range(2.0..4.0),
                angle: 0.0,
                spin: 0.0,
                shade: rng.random_range(160..220),
            });
        }
    }

    /// Feathers burst from a struck bird
    pub fn feather_burst(&mut self, at: Vec2, rng: &mut impl Rng) {
        for _ in 0..8 {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(1.0..3.0);
            let life = rng.random_range(30..60);
            self.push(Particle {
                kind: ParticleKind::Feather,
                pos: at,
                vel: crate::from_heading(angle, speed),
                life,
                max_life: life,
                size: rng.random_range(5.0..9.0),
                angle: rng.random_range(0.0..std::f32::consts::TAU),
                spin: rng.random_range(-0.2..0.2),
                shade: rng.random_range(90..140),
            });
        }
    }

    /// Advance one tick and drop expired particles
    pub fn update(&mut self) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            match p.kind {
                ParticleKind::Dust => {
                    p.vel *= DUST_DRAG;
                    p.vel.y += DUST_GRAVITY;
                    p.size *= 1.02;
                }
                ParticleKind::Feather => {
                    p.vel *= FEATHER_DRAG;
                    p.vel.y += FEATHER_GRAVITY;
                    // Side-to-side flutter while drifting down
                    p.vel.x += (p.angle * 3.0).sin() * 0.05;
                    p.angle += p.spin;
                }
            }
            p.life = p.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_harder_landings_make_more_dust() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut soft = ParticleSystem::new(256);
        soft.landing_dust(Vec2::ZERO, 2.0, &mut rng);
        let mut hard = ParticleSystem::new(256);
        hard.landing_dust(Vec2::ZERO, 9.0, &mut rng);
        assert!(hard.len() > soft.len());
    }

    #[test]
    fn test_particles_expire() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut ps = ParticleSystem::new(256);
        ps.feather_burst(Vec2::new(100.0, 100.0), &mut rng);
        assert_eq!(ps.len(), 8);
        for _ in 0..60 {
            ps.update();
        }
        assert!(ps.is_empty());
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ps = ParticleSystem::new(10);
        for _ in 0..5 {
            ps.feather_burst(Vec2::ZERO, &mut rng);
        }
        assert_eq!(ps.len(), 10);
    }

    #[test]
    fn test_zero_cap_spawns_nothing() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut ps = ParticleSystem::new(0);
        ps.feather_burst(Vec2::ZERO, &mut rng);
        ps.landing_dust(Vec2::ZERO, 10.0, &mut rng);
        assert!(ps.is_empty());
    }
}
