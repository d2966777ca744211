//! Fixed timestep simulation tick
//!
//! One call advances the active screen by one frame. Gameplay is driven only
//! by the input snapshot, the seeded RNG and the wall-clock time handed in for
//! the match countdown.

use super::combat;
use super::projectile::Drumstick;
use super::screen::enter;
use super::state::{GameState, PlayerId, World};
use crate::consts::*;
use crate::platform::{InputState, Key};
use crate::ui;

const BACK_KEYS: [Key; 3] = [Key::Escape, Key::Enter, Key::Backspace];

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &InputState, now_ms: f64) {
    world.frame += 1;
    if !input.pointer_down {
        world.click_ready = true;
    }

    match world.state {
        GameState::Title => tick_title(world, input, now_ms),
        GameState::Instructions => tick_instructions(world, input, now_ms),
        GameState::Options => tick_options(world, input, now_ms),
        GameState::Playing => tick_playing(world, input, now_ms),
        GameState::TimeUp | GameState::Player1Wins | GameState::Player2Wins => {
            tick_outcome(world, input, now_ms)
        }
    }
}

fn tick_title(world: &mut World, input: &InputState, now_ms: f64) {
    let World {
        fighters,
        particles,
        rng,
        ..
    } = world;
    for fighter in fighters.iter_mut() {
        fighter.wander(particles, rng);
    }
    particles.update();

    if ui::TITLE_START.take_click(input, &mut world.click_ready) || input.just_pressed(Key::Enter) {
        enter(world, GameState::Playing, now_ms);
    } else if ui::TITLE_INSTRUCTIONS.take_click(input, &mut world.click_ready) {
        enter(world, GameState::Instructions, now_ms);
    } else if ui::TITLE_OPTIONS.take_click(input, &mut world.click_ready) {
        enter(world, GameState::Options, now_ms);
    }
}

fn tick_instructions(world: &mut World, input: &InputState, now_ms: f64) {
    if ui::BACK.take_click(input, &mut world.click_ready) || input.any_just_pressed(&BACK_KEYS) {
        enter(world, GameState::Title, now_ms);
    }
}

fn tick_options(world: &mut World, input: &InputState, now_ms: f64) {
    // Display birds lob a drumstick at each other now and then
    if world.frame % OPTIONS_THROW_INTERVAL == 0 {
        let World {
            fighters,
            drumsticks,
            rng,
            ..
        } = world;
        for f in fighters.iter() {
            drumsticks.push(Drumstick::thrown(f.id, f.pos, f.facing, 0.0, rng));
        }
    }
    for stick in world.drumsticks.iter_mut() {
        stick.update();
    }
    world.drumsticks.retain(|d| d.active);

    for (button, length) in ui::duration_buttons() {
        if button.take_click(input, &mut world.click_ready) {
            world.settings.match_length = length;
        }
    }
    for (key, length) in [
        (Key::A, crate::MatchLength::Two),
        (Key::B, crate::MatchLength::Four),
        (Key::C, crate::MatchLength::Six),
    ] {
        if input.just_pressed(key) {
            world.settings.match_length = length;
        }
    }
    world.time_left = world.settings.match_length.seconds();

    if ui::OPTIONS_START.take_click(input, &mut world.click_ready) {
        enter(world, GameState::Playing, now_ms);
    } else if ui::BACK.take_click(input, &mut world.click_ready) || input.any_just_pressed(&BACK_KEYS) {
        enter(world, GameState::Title, now_ms);
    }
}

fn tick_playing(world: &mut World, input: &InputState, now_ms: f64) {
    {
        let World {
            fighters,
            drumsticks,
            platforms,
            particles,
            rng,
            ..
        } = world;
        for fighter in fighters.iter_mut() {
            fighter.apply_controls(input, drumsticks, rng);
            fighter.integrate(platforms, particles, rng);
            fighter.update_gait(particles, rng);
        }
    }

    combat::resolve_punches(world);

    {
        let World {
            hunters,
            fighters,
            arrows,
            ..
        } = world;
        arrows.extend(hunters.iter_mut().filter_map(|h| h.update(fighters)));
    }

    combat::update_drumsticks(world);
    combat::update_arrows(world);
    combat::collect_pickups(world);
    world.particles.update();
    for fighter in world.fighters.iter_mut() {
        fighter.tick_timers();
    }

    world.time_left = world.clock.remaining(now_ms);

    // Knockouts outrank the clock; a double knockout goes to player one
    let next = if world.fighter(PlayerId::Two).is_dead {
        Some(GameState::Player1Wins)
    } else if world.fighter(PlayerId::One).is_dead {
        Some(GameState::Player2Wins)
    } else if world.time_left == 0 {
        Some(GameState::TimeUp)
    } else {
        None
    };
    if let Some(next) = next {
        enter(world, next, now_ms);
    }
}

fn tick_outcome(world: &mut World, input: &InputState, now_ms: f64) {
    world.particles.update();
    if ui::PLAY_AGAIN.take_click(input, &mut world.click_ready) || input.just_pressed(Key::Enter) {
        enter(world, GameState::Playing, now_ms);
    } else if ui::MENU.take_click(input, &mut world.click_ready) || input.just_pressed(Key::Escape) {
        enter(world, GameState::Title, now_ms);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::renderer::{DrawCommand, DrawRecorder, draw_frame};
    use crate::sim::pickup::{Pickup, PickupKind};
    use crate::{MatchLength, Settings};

    fn world() -> World {
        World::new(12345, Settings::default())
    }

    fn keys(pressed: &[Key]) -> InputState {
        let mut input = InputState::new();
        for &k in pressed {
            input.key_down(k);
        }
        input
    }

    fn click(at: Vec2) -> InputState {
        let mut input = InputState::new();
        input.pointer_pressed(at);
        input
    }

    /// A running match with no hunter and nothing to pick up
    fn duel() -> World {
        let mut world = world();
        enter(&mut world, GameState::Playing, 0.0);
        world.hunters.clear();
        world.pickups.clear();
        world
    }

    /// Same seed and same inputs, from the title screen into a full match
    fn scripted_run(seed: u64) -> (World, Vec<DrawCommand>) {
        let mut world = World::new(seed, Settings::default());
        let mut input = InputState::new();
        let mut surface = DrawRecorder::new();
        for frame in 0..400u64 {
            input.release_all();
            match frame {
                60 => input.key_down(Key::Enter),
                61.. => {
                    input.key_down(if frame % 80 < 40 { Key::D } else { Key::A });
                    input.key_down(if frame % 50 < 25 { Key::Left } else { Key::Right });
                    for key in [Key::F, Key::G, Key::P] {
                        input.key_down(key);
                    }
                    if frame % 45 == 0 {
                        input.key_down(Key::W);
                        input.key_down(Key::Up);
                    }
                }
                _ => {}
            }
            tick(&mut world, &input, frame as f64 * 1000.0 / 60.0);
            input.end_tick();
        }
        draw_frame(&mut surface, &world, &input);
        (world, surface.commands)
    }

    #[test]
    fn test_determinism() {
        let (one, draw_one) = scripted_run(99999);
        let (two, draw_two) = scripted_run(99999);

        assert_ne!(one.state, GameState::Title);
        assert_eq!(one.state, two.state);
        assert_eq!(one.frame, two.frame);
        for (a, b) in one.fighters.iter().zip(two.fighters.iter()) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.vel, b.vel);
            assert_eq!(a.health, b.health);
            assert_eq!(a.throw_count, b.throw_count);
            assert_eq!(a.gait, b.gait);
        }
        let sticks = |w: &World| w.drumsticks.iter().map(|d| (d.pos, d.texture)).collect::<Vec<_>>();
        assert_eq!(sticks(&one), sticks(&two));
        assert_eq!(one.arrows.len(), two.arrows.len());
        assert_eq!(one.particles.len(), two.particles.len());
        assert_eq!(draw_one, draw_two);
    }

    #[test]
    fn test_title_start_button_begins_match() {
        let mut world = world();
        tick(&mut world, &click(ui::TITLE_START.center), 1_000.0);
        assert_eq!(world.state, GameState::Playing);
        assert_eq!(world.time_left, 120);
        assert!(world.clock.is_running());
    }

    #[test]
    fn test_title_birds_wander() {
        let mut world = world();
        let start = world.fighters[0].pos;
        for _ in 0..30 {
            tick(&mut world, &InputState::new(), 0.0);
        }
        assert_ne!(world.fighters[0].pos, start);
        assert_eq!(world.state, GameState::Title);
    }

    #[test]
    fn test_instructions_and_back() {
        let mut world = world();
        tick(&mut world, &click(ui::TITLE_INSTRUCTIONS.center), 0.0);
        assert_eq!(world.state, GameState::Instructions);
        tick(&mut world, &keys(&[Key::Backspace]), 0.0);
        assert_eq!(world.state, GameState::Title);
    }

    #[test]
    fn test_one_click_does_not_chain_screens() {
        let mut world = world();
        let press = click(ui::TITLE_OPTIONS.center);
        tick(&mut world, &press, 0.0);
        assert_eq!(world.state, GameState::Options);
        // Still held over the same spot; nothing else fires
        let mut held = press.clone();
        held.pointer_moved(ui::OPTIONS_START.center);
        tick(&mut world, &held, 0.0);
        assert_eq!(world.state, GameState::Options);
        // Release then press again
        tick(&mut world, &InputState::new(), 0.0);
        tick(&mut world, &click(ui::OPTIONS_START.center), 0.0);
        assert_eq!(world.state, GameState::Playing);
    }

    #[test]
    fn test_options_select_match_length() {
        let mut world = world();
        enter(&mut world, GameState::Options, 0.0);
        tick(&mut world, &click(ui::OPTIONS_SIX.center), 0.0);
        assert_eq!(world.settings.match_length, MatchLength::Six);
        tick(&mut world, &keys(&[Key::B]), 0.0);
        assert_eq!(world.settings.match_length, MatchLength::Four);
        assert_eq!(world.time_left, 240);
        tick(&mut world, &InputState::new(), 0.0);
        tick(&mut world, &click(ui::OPTIONS_START.center), 0.0);
        assert_eq!(world.time_left, 240);
    }

    #[test]
    fn test_options_birds_throw_harmlessly() {
        let mut world = world();
        enter(&mut world, GameState::Options, 0.0);
        world.frame = 0;
        let idle = InputState::new();
        for _ in 0..OPTIONS_THROW_INTERVAL {
            tick(&mut world, &idle, 0.0);
        }
        assert_eq!(world.drumsticks.len(), 2);
        for _ in 0..60 {
            tick(&mut world, &idle, 0.0);
        }
        assert_eq!(world.fighters[0].health, MAX_HEALTH);
        assert_eq!(world.fighters[1].health, MAX_HEALTH);
    }

    #[test]
    fn test_ten_punches_win_over_pending_timeout() {
        let mut world = duel();
        let hold_punch = keys(&[Key::F]);
        for i in 0..10 {
            let a = world.fighters[0].pos;
            world.fighters[0].punch_timer = 0;
            world.fighters[1].pos = a + Vec2::new(PUNCH_REACH, 0.0);
            world.fighters[1].vel = Vec2::ZERO;
            // The last punch lands after the clock has already run out
            let now = if i == 9 { 1_000_000.0 } else { 0.0 };
            tick(&mut world, &hold_punch, now);
        }
        assert_eq!(world.fighters[1].health, 0.0);
        assert!(world.fighters[1].is_dead);
        assert_eq!(world.state, GameState::Player1Wins);
    }

    #[test]
    fn test_timeout_with_both_standing() {
        let mut world = duel();
        world.fighters[0].vel = Vec2::new(9.0, -9.0);
        tick(&mut world, &InputState::new(), 119_999.0);
        assert_eq!(world.state, GameState::Playing);
        assert_eq!(world.time_left, 1);
        tick(&mut world, &InputState::new(), 120_000.0);
        assert_eq!(world.state, GameState::TimeUp);
        assert_eq!(world.time_left, 0);
    }

    #[test]
    fn test_double_knockout_goes_to_player_one() {
        let mut world = duel();
        world.fighters[0].take_damage(1_000.0);
        world.fighters[1].take_damage(1_000.0);
        tick(&mut world, &InputState::new(), 0.0);
        assert_eq!(world.state, GameState::Player1Wins);
    }

    #[test]
    fn test_thrown_drumstick_damages_only_opponent() {
        let mut world = duel();
        world.fighters[1].pos = world.fighters[0].pos + Vec2::new(60.0, 0.0);
        let throw = keys(&[Key::G]);
        tick(&mut world, &throw, 0.0);
        assert_eq!(world.drumsticks.len(), 1);
        let idle = InputState::new();
        for _ in 0..20 {
            world.fighters[1].vel = Vec2::ZERO;
            tick(&mut world, &idle, 0.0);
        }
        assert_eq!(world.fighters[0].health, MAX_HEALTH);
        assert_eq!(world.fighters[1].health, MAX_HEALTH - DRUMSTICK_DAMAGE);
    }

    #[test]
    fn test_pickup_in_play() {
        let mut world = duel();
        let at = world.fighters[1].pos;
        world.pickups.push(Pickup::new(PickupKind::Defense, at));
        tick(&mut world, &InputState::new(), 0.0);
        assert!((world.fighters[1].defense - DEFENSE_FACTOR).abs() < 1e-6);
        assert!(!world.pickups[0].active);
    }

    #[test]
    fn test_outcome_keys() {
        let mut world = duel();
        enter(&mut world, GameState::TimeUp, 0.0);
        tick(&mut world, &keys(&[Key::Enter]), 5_000.0);
        assert_eq!(world.state, GameState::Playing);
        enter(&mut world, GameState::Player2Wins, 6_000.0);
        tick(&mut world, &keys(&[Key::Escape]), 6_000.0);
        assert_eq!(world.state, GameState::Title);
    }

    #[test]
    fn test_hunter_eventually_shoots() {
        let mut world = world();
        enter(&mut world, GameState::Playing, 0.0);
        world.pickups.clear();
        let idle = InputState::new();
        let mut fired = false;
        for _ in 0..HUNTER_SHOOT_COOLDOWN {
            tick(&mut world, &idle, 0.0);
            fired |= !world.arrows.is_empty()
                || world.fighters.iter().any(|f| f.health < MAX_HEALTH);
        }
        assert!(fired);
    }
}
