//! World state and core simulation types
//!
//! One `World` owns everything the simulation touches; the game loop owns the
//! world and each subsystem borrows it for the duration of a tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::fighter::Fighter;
use super::hunter::Hunter;
use super::particles::ParticleSystem;
use super::pickup::Pickup;
use super::projectile::{Arrow, Drumstick};
use crate::Settings;
use crate::platform::ControlScheme;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Title,
    Instructions,
    Options,
    Playing,
    /// Clock ran out with both birds standing
    TimeUp,
    Player1Wins,
    Player2Wins,
}

impl GameState {
    /// Terminal match screens
    pub fn is_outcome(&self) -> bool {
        matches!(
            self,
            GameState::TimeUp | GameState::Player1Wins | GameState::Player2Wins
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Title => "title",
            GameState::Instructions => "instructions",
            GameState::Options => "options",
            GameState::Playing => "playing",
            GameState::TimeUp => "time up",
            GameState::Player1Wins => "player 1 wins",
            GameState::Player2Wins => "player 2 wins",
        }
    }
}

/// Identifies one of the two birds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn other(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn controls(&self) -> ControlScheme {
        match self {
            PlayerId::One => ControlScheme::PLAYER_ONE,
            PlayerId::Two => ControlScheme::PLAYER_TWO,
        }
    }

    /// Facing at spawn: player one looks right, player two left
    pub fn spawn_facing(&self) -> f32 {
        match self {
            PlayerId::One => 1.0,
            PlayerId::Two => -1.0,
        }
    }
}

/// A static one-way ledge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }
}

/// Match countdown measured in wall-clock milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchClock {
    pub duration_secs: u32,
    started_ms: Option<f64>,
}

impl MatchClock {
    pub fn arm(&mut self, duration_secs: u32, now_ms: f64) {
        self.duration_secs = duration_secs;
        self.started_ms = Some(now_ms);
    }

    pub fn disarm(&mut self) {
        self.started_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_ms.is_some()
    }

    /// Whole seconds left; the full duration while disarmed
    pub fn remaining(&self, now_ms: f64) -> u32 {
        match self.started_ms {
            Some(start) => {
                let elapsed = ((now_ms - start).max(0.0) / 1000.0).floor() as u32;
                self.duration_secs.saturating_sub(elapsed)
            }
            None => self.duration_secs,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Active screen
    pub state: GameState,
    pub settings: Settings,
    /// Indexed by `PlayerId::index`
    pub fighters: [Fighter; 2],
    pub hunters: Vec<Hunter>,
    pub drumsticks: Vec<Drumstick>,
    pub arrows: Vec<Arrow>,
    pub platforms: Vec<Platform>,
    pub pickups: Vec<Pickup>,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    pub clock: MatchClock,
    /// Seconds left as of the last tick (for the HUD)
    pub time_left: u32,
    /// Simulation tick counter
    pub frame: u64,
    /// Armed while the pointer is up; one press consumes it
    pub click_ready: bool,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
}

impl World {
    /// Create a world on the title screen
    pub fn new(seed: u64, settings: Settings) -> Self {
        let particles = ParticleSystem::new(settings.particle_cap());
        let clock = MatchClock {
            duration_secs: settings.match_length.seconds(),
            started_ms: None,
        };
        let mut world = Self {
            state: GameState::Title,
            time_left: clock.duration_secs,
            settings,
            fighters: [Fighter::new(PlayerId::One), Fighter::new(PlayerId::Two)],
            hunters: Vec::new(),
            drumsticks: Vec::new(),
            arrows: Vec::new(),
            platforms: Vec::new(),
            pickups: Vec::new(),
            particles,
            clock,
            frame: 0,
            click_ready: true,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        };
        super::screen::enter(&mut world, GameState::Title, 0.0);
        world
    }

    pub fn fighter(&self, id: PlayerId) -> &Fighter {
        &self.fighters[id.index()]
    }

    pub fn fighter_mut(&mut self, id: PlayerId) -> &mut Fighter {
        &mut self.fighters[id.index()]
    }

    /// Drop projectiles, particles and level geometry
    pub fn clear_transient(&mut self) {
        self.drumsticks.clear();
        self.arrows.clear();
        self.particles.clear();
        self.platforms.clear();
        self.pickups.clear();
        self.hunters.clear();
    }
}

/// Split the fighter pair into (`id`, its opponent) mutable borrows
pub fn fighter_and_opponent(
    fighters: &mut [Fighter; 2],
    id: PlayerId,
) -> (&mut Fighter, &mut Fighter) {
    let [one, two] = fighters;
    match id {
        PlayerId::One => (one, two),
        PlayerId::Two => (two, one),
    }
}
