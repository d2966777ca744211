//! Screen transitions
//!
//! Entering a menu screen puts the birds on display and drops all transient
//! state. Entering `Playing` builds the arena and starts the clock.

use glam::Vec2;
use rand::Rng;

use super::hunter::Hunter;
use super::state::{GameState, PlayerId, World};
use super::tilemap;
use crate::consts::*;

/// Bird size on the instructions screen
const INSTRUCTIONS_SIZE: f32 = 20.0;

/// Where each bird stands on a menu screen
fn menu_positions(state: GameState) -> [Vec2; 2] {
    match state {
        GameState::Instructions => [Vec2::new(100.0, 260.0), Vec2::new(300.0, 260.0)],
        GameState::Options => [
            Vec2::new(CANVAS_WIDTH * 0.25, CANVAS_HEIGHT - 100.0),
            Vec2::new(CANVAS_WIDTH * 0.75, CANVAS_HEIGHT - 100.0),
        ],
        _ => [Vec2::new(100.0, FLOOR_Y), Vec2::new(300.0, FLOOR_Y)],
    }
}

/// Switch screens, resetting whatever the new screen needs
pub fn enter(world: &mut World, next: GameState, now_ms: f64) {
    let prev = world.state;
    match next {
        GameState::Title | GameState::Instructions | GameState::Options => {
            world.clear_transient();
            world.clock.disarm();
            world.clock.duration_secs = world.settings.match_length.seconds();
            world.time_left = world.clock.duration_secs;
            let size = if next == GameState::Instructions {
                INSTRUCTIONS_SIZE
            } else {
                FIGHTER_SIZE
            };
            let positions = menu_positions(next);
            for (fighter, pos) in world.fighters.iter_mut().zip(positions) {
                fighter.reset(pos, size);
                fighter.wander_flap_timer = world.rng.random_range(10..60);
            }
            world.state = next;
        }
        GameState::Playing => start_match(world, now_ms),
        GameState::TimeUp | GameState::Player1Wins | GameState::Player2Wins => {
            world.clock.disarm();
            world.state = next;
            log::info!(
                "match over: {} (health {} / {})",
                next.as_str(),
                world.fighters[0].health,
                world.fighters[1].health
            );
        }
    }
    if prev != next {
        log::info!("screen {} -> {}", prev.as_str(), next.as_str());
    }
}

/// Fresh match from the built-in arena
fn start_match(world: &mut World, now_ms: f64) {
    world.clear_transient();
    world.particles.set_cap(world.settings.particle_cap());

    let level = match tilemap::default_level() {
        Ok(level) => level,
        Err(e) => {
            log::error!("level template rejected, using bare floor: {e}");
            tilemap::Level::default()
        }
    };

    let defaults = menu_positions(GameState::Title);
    for id in PlayerId::ALL {
        let spawn = level.spawns[id.index()].unwrap_or(defaults[id.index()]);
        world.fighter_mut(id).reset(spawn, FIGHTER_SIZE);
    }
    world.platforms = level.platforms;
    world.pickups = level.pickups;
    world.hunters = level.hunters.into_iter().map(Hunter::new).collect();

    let secs = world.settings.match_length.seconds();
    world.clock.arm(secs, now_ms);
    world.time_left = secs;
    world.frame = 0;
    world.state = GameState::Playing;
    log::info!(
        "match started: {}, {} platforms, {} pickups",
        world.settings.match_length.as_str(),
        world.platforms.len(),
        world.pickups.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MatchLength, Settings};
    use crate::sim::projectile::Arrow;

    #[test]
    fn test_start_builds_arena_and_arms_clock() {
        let mut world = World::new(1, Settings::default());
        world.settings.match_length = MatchLength::Four;
        enter(&mut world, GameState::Playing, 500.0);
        assert_eq!(world.state, GameState::Playing);
        assert!(!world.platforms.is_empty());
        assert_eq!(world.pickups.len(), 3);
        assert_eq!(world.hunters.len(), 1);
        assert!(world.clock.is_running());
        assert_eq!(world.time_left, 240);
        assert_eq!(world.fighters[0].health, MAX_HEALTH);
        assert_eq!(world.fighters[0].facing, 1.0);
        assert_eq!(world.fighters[1].facing, -1.0);
    }

    #[test]
    fn test_menus_clear_transient_state() {
        let mut world = World::new(1, Settings::default());
        enter(&mut world, GameState::Playing, 0.0);
        world.arrows.push(Arrow::aimed(Vec2::ZERO, Vec2::ONE, 1.0));
        world.fighters[0].health = 12.0;
        world.fighters[0].punch_timer = 9;
        enter(&mut world, GameState::Instructions, 100.0);
        assert!(world.arrows.is_empty());
        assert!(world.platforms.is_empty());
        assert!(world.pickups.is_empty());
        assert!(world.hunters.is_empty());
        assert!(!world.clock.is_running());
        let one = &world.fighters[0];
        assert_eq!(one.health, MAX_HEALTH);
        assert_eq!(one.punch_timer, 0);
        assert_eq!(one.size, 20.0);
        assert_eq!(one.pos, Vec2::new(100.0, 260.0));
    }

    #[test]
    fn test_options_places_birds_by_canvas_fraction() {
        let mut world = World::new(1, Settings::default());
        enter(&mut world, GameState::Options, 0.0);
        assert_eq!(world.fighters[0].pos, Vec2::new(100.0, 300.0));
        assert_eq!(world.fighters[1].pos, Vec2::new(300.0, 300.0));
        assert_eq!(world.fighters[1].size, FIGHTER_SIZE);
    }

    #[test]
    fn test_outcome_stops_clock_but_keeps_arena() {
        let mut world = World::new(1, Settings::default());
        enter(&mut world, GameState::Playing, 0.0);
        enter(&mut world, GameState::Player2Wins, 10.0);
        assert!(world.state.is_outcome());
        assert!(!world.clock.is_running());
        assert!(!world.platforms.is_empty());
    }
}
