//! Draws every screen from the world state

use glam::Vec2;

use super::{Align, Color, Surface};
use crate::consts::*;
use crate::platform::{InputState, Key};
use crate::sim::{
    Arrow, Drumstick, Fighter, GameState, Hunter, ParticleKind, ParticleSystem, Pickup,
    PickupKind, Platform, World,
};
use crate::ui::{self, Button};

const SKY: Color = Color::rgb(173, 216, 230);
const MAROON: Color = Color::rgb(110, 30, 30);
const STRIPE_MAROON: Color = Color::rgb(128, 0, 0);
const STRIPE_ORANGE: Color = Color::rgb(255, 102, 0);
const HOKIE_ORANGE: Color = Color::rgb(255, 150, 0);
const TAIL_BROWN: Color = Color::rgb(120, 60, 20);
const BUTTON_HOVER: Color = Color::rgb(0x63, 0x00, 0x31);
const BUTTON_IDLE: Color = Color::rgb(0xcf, 0x44, 0x20);
const WARNING_RED: Color = Color::rgb(200, 30, 30);
const MEAT: Color = Color::rgb(139, 69, 19);
const MEAT_SPOT: Color = Color::rgba(100, 50, 10, 150);

/// Draw the active screen
pub fn draw_frame(s: &mut impl Surface, world: &World, input: &InputState) {
    s.background(SKY);
    match world.state {
        GameState::Title => draw_title(s, world, input),
        GameState::Instructions => draw_instructions(s, world, input),
        GameState::Options => draw_options(s, world, input),
        GameState::Playing => draw_arena(s, world),
        GameState::TimeUp | GameState::Player1Wins | GameState::Player2Wins => {
            draw_arena(s, world);
            draw_outcome(s, world.state, input);
        }
    }
}

fn draw_title(s: &mut impl Surface, world: &World, input: &InputState) {
    let stripe = CANVAS_HEIGHT / 10.0;
    s.stroke(None, 0.0);
    for i in 0..10 {
        s.fill(Some(if i % 2 == 0 { STRIPE_MAROON } else { STRIPE_ORANGE }));
        s.rect(
            Vec2::new(0.0, i as f32 * stripe),
            Vec2::new(CANVAS_WIDTH, stripe),
            0.0,
        );
    }

    draw_particles(s, &world.particles);
    for fighter in &world.fighters {
        draw_fighter(s, fighter);
    }

    let mid = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0);
    s.push();
    s.fill(Some(STRIPE_ORANGE));
    s.text(
        "Created by Dan Nguyen and Vince Feng",
        mid + Vec2::new(0.0, 50.0),
        15.0,
        Align::Center,
    );
    s.stroke(Some(Color::BLACK), 8.0);
    s.text("Hokie Fighters", mid, 48.0, Align::Center);
    s.pop();

    for button in [ui::TITLE_START, ui::TITLE_INSTRUCTIONS, ui::TITLE_OPTIONS] {
        draw_button(s, &button, input);
    }
}

fn draw_instructions(s: &mut impl Surface, world: &World, input: &InputState) {
    draw_button(s, &ui::BACK, input);

    let w = CANVAS_WIDTH;
    s.push();
    s.fill(Some(Color::BLACK));
    s.stroke(Some(Color::BLACK), 1.0);
    s.text("Instructions", Vec2::new(w / 2.0, 20.0), 20.0, Align::Center);
    s.text("Player 1", Vec2::new(w / 4.0, 40.0), 20.0, Align::Center);
    s.text("Player 2", Vec2::new(3.0 * w / 4.0, 40.0), 20.0, Align::Center);
    s.line(Vec2::new(w / 2.0, 40.0), Vec2::new(w / 2.0, 250.0));

    let key_size = 40.0;
    let step = key_size * 1.125;
    let action_row = key_size * 2.75;
    let label_rise = key_size * 0.75;
    let top = 100.0;
    for (x, keys) in [
        (w * 0.25, crate::sim::PlayerId::One.controls()),
        (w * 0.75, crate::sim::PlayerId::Two.controls()),
    ] {
        draw_key(s, keys.up, Vec2::new(x, top), key_size, input);
        draw_key(s, keys.left, Vec2::new(x - step, top + step), key_size, input);
        draw_key(s, keys.down, Vec2::new(x, top + step), key_size, input);
        draw_key(s, keys.right, Vec2::new(x + step, top + step), key_size, input);
        draw_key(s, keys.punch, Vec2::new(x, top + action_row), key_size, input);
        draw_key(s, keys.throw, Vec2::new(x + step, top + action_row), key_size, input);

        s.fill(Some(Color::BLACK));
        s.text("Movement Keys", Vec2::new(x, top - label_rise), 15.0, Align::Center);
        s.text("Punch", Vec2::new(x, top - label_rise + action_row), 15.0, Align::Center);
        s.text(
            "Throw",
            Vec2::new(x + step, top - label_rise + action_row),
            15.0,
            Align::Center,
        );
    }
    s.pop();

    for fighter in &world.fighters {
        draw_fighter(s, fighter);
    }

    s.push();
    s.fill(Some(Color::BLACK));
    let rules = [
        "Each player starts with 100 health.",
        "Decrease the other player's health by punching or throwing an object.",
        "You win by getting your opponent's health to 0.",
        "If neither player's health is 0 before the time is up, neither player wins.",
    ];
    for (i, line) in rules.iter().enumerate() {
        s.text(line, Vec2::new(w / 2.0, 290.0 + 20.0 * i as f32), 11.0, Align::Center);
    }
    s.fill(Some(WARNING_RED));
    s.text(
        "Click the back button or press esc to return to the main menu.",
        Vec2::new(w / 2.0, 380.0),
        13.0,
        Align::Center,
    );
    s.pop();
}

fn draw_options(s: &mut impl Surface, world: &World, input: &InputState) {
    for fighter in &world.fighters {
        draw_fighter(s, fighter);
    }
    for stick in &world.drumsticks {
        draw_drumstick(s, stick);
    }
    draw_button(s, &ui::BACK, input);

    let w = CANVAS_WIDTH;
    s.push();
    s.fill(Some(Color::BLACK));
    s.text("Options", Vec2::new(w / 2.0, 30.0), 35.0, Align::Center);
    s.fill(Some(Color::rgb(40, 120, 40)));
    s.text(
        &format!("Game length: {}", world.settings.match_length.as_str()),
        Vec2::new(w / 2.0, 80.0),
        30.0,
        Align::Center,
    );
    s.fill(Some(Color::BLACK));
    s.text("Change the game play time by", Vec2::new(w / 2.0, 120.0), 20.0, Align::Center);
    s.text(
        "clicking the buttons or pressing the letter",
        Vec2::new(w / 2.0, 140.0),
        20.0,
        Align::Center,
    );
    s.fill(Some(WARNING_RED));
    s.text(
        "Click the back button or press esc to return to the main menu.",
        Vec2::new(w / 2.0, CANVAS_HEIGHT - 20.0),
        13.0,
        Align::Center,
    );
    s.pop();

    for (button, _) in ui::duration_buttons() {
        draw_button(s, &button, input);
    }
    draw_button(s, &ui::OPTIONS_START, input);
}

/// The match itself, also left frozen behind the outcome screens
fn draw_arena(s: &mut impl Surface, world: &World) {
    for platform in &world.platforms {
        draw_platform(s, platform);
    }
    for pickup in world.pickups.iter().filter(|p| p.active) {
        draw_pickup(s, pickup);
    }
    for hunter in &world.hunters {
        draw_hunter(s, hunter);
    }
    for fighter in &world.fighters {
        draw_fighter(s, fighter);
    }
    for stick in &world.drumsticks {
        draw_drumstick(s, stick);
    }
    for arrow in &world.arrows {
        draw_arrow(s, arrow);
    }
    draw_particles(s, &world.particles);
    draw_hud(s, world);
}

fn draw_outcome(s: &mut impl Surface, state: GameState, input: &InputState) {
    let message = match state {
        GameState::Player1Wins => "Player 1 Wins!",
        GameState::Player2Wins => "Player 2 Wins!",
        _ => "Time is Up. No one wins.",
    };
    s.push();
    s.stroke(None, 0.0);
    s.fill(Some(Color::rgba(0, 0, 0, 120)));
    s.rect(Vec2::ZERO, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT), 0.0);
    s.fill(Some(Color::rgb(255, 0, 0)));
    s.text(
        message,
        Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
        30.0,
        Align::Center,
    );
    s.pop();
    draw_button(s, &ui::PLAY_AGAIN, input);
    draw_button(s, &ui::MENU, input);
}

fn draw_hud(s: &mut impl Surface, world: &World) {
    s.push();
    s.stroke(None, 0.0);
    s.fill(Some(Color::BLACK));
    s.text(
        &format!("Time Left: {}s", world.time_left),
        Vec2::new(CANVAS_WIDTH / 2.0, 20.0),
        20.0,
        Align::Center,
    );

    let bar = Vec2::new(100.0, 10.0);
    for (fighter, x) in world.fighters.iter().zip([10.0, CANVAS_WIDTH - 10.0 - bar.x]) {
        let corner = Vec2::new(x, 10.0);
        s.fill(Some(Color::gray(60)));
        s.rect(corner, bar, 2.0);
        let frac = fighter.health / MAX_HEALTH;
        let color = if frac > 0.3 {
            Color::rgb(40, 180, 60)
        } else {
            Color::rgb(220, 40, 40)
        };
        s.fill(Some(color));
        s.rect(corner, Vec2::new(bar.x * frac, bar.y), 2.0);

        s.fill(Some(Color::BLACK));
        let reduction = ((1.0 - fighter.defense) * 100.0).round();
        s.text(
            &format!("x{} throw  {}% def", fighter.throw_count, reduction),
            corner + Vec2::new(0.0, 22.0),
            10.0,
            Align::Left,
        );
    }
    s.pop();
}

fn draw_button(s: &mut impl Surface, button: &Button, input: &InputState) {
    s.push();
    s.fill(Some(if button.hovered(input) {
        BUTTON_HOVER
    } else {
        BUTTON_IDLE
    }));
    s.stroke(Some(Color::BLACK), 5.0);
    s.rect(button.top_left(), button.size, 5.0);
    s.stroke(None, 0.0);
    s.fill(Some(Color::BLACK));
    s.text(button.label, button.center, button.text_size, Align::Center);
    s.pop();
}

/// Keyboard key icon, lit while held
fn draw_key(s: &mut impl Surface, key: Key, center: Vec2, size: f32, input: &InputState) {
    s.push();
    s.fill(Some(Color::gray(150)));
    s.rect(center - Vec2::splat(size / 2.0), Vec2::splat(size), 3.0);
    s.fill(Some(Color::gray(if input.is_down(key) { 175 } else { 250 })));
    s.rect(
        center - Vec2::splat(size * 0.375),
        Vec2::splat(size * 0.75),
        3.0,
    );
    s.fill(Some(Color::BLACK));
    s.text(key.label(), center, size * 0.5, Align::Center);
    s.pop();
}

fn draw_platform(s: &mut impl Surface, platform: &Platform) {
    s.push();
    s.stroke(None, 0.0);
    s.fill(Some(MAROON));
    s.rect(platform.pos, Vec2::new(platform.width, platform.height), 0.0);
    s.fill(Some(HOKIE_ORANGE));
    s.rect(platform.pos, Vec2::new(platform.width, 2.0), 0.0);
    s.pop();
}

fn draw_pickup(s: &mut impl Surface, pickup: &Pickup) {
    s.push();
    s.translate(pickup.pos);
    s.stroke(Some(Color::BLACK), 1.0);
    match pickup.kind {
        PickupKind::Health => {
            s.fill(Some(Color::WHITE));
            s.ellipse(Vec2::ZERO, Vec2::splat(18.0));
            s.fill(Some(Color::rgb(220, 30, 30)));
            s.rect(Vec2::new(-2.5, -7.0), Vec2::new(5.0, 14.0), 0.0);
            s.rect(Vec2::new(-7.0, -2.5), Vec2::new(14.0, 5.0), 0.0);
        }
        PickupKind::SplitShot => {
            s.fill(Some(MEAT));
            for angle in [-0.5f32, 0.0, 0.5] {
                s.push();
                s.rotate(angle);
                s.ellipse(Vec2::new(0.0, -6.0), Vec2::new(6.0, 12.0));
                s.pop();
            }
        }
        PickupKind::Defense => {
            s.fill(Some(Color::rgb(90, 110, 200)));
            s.bezier_shape(
                Vec2::new(-8.0, -8.0),
                &[
                    (Vec2::new(-2.0, -10.0), Vec2::new(2.0, -10.0), Vec2::new(8.0, -8.0)),
                    (Vec2::new(8.0, 2.0), Vec2::new(4.0, 8.0), Vec2::new(0.0, 10.0)),
                    (Vec2::new(-4.0, 8.0), Vec2::new(-8.0, 2.0), Vec2::new(-8.0, -8.0)),
                ],
            );
        }
    }
    s.pop();
}

/// A bird, drawn around its body center
fn draw_fighter(s: &mut impl Surface, f: &Fighter) {
    let size = f.size;
    // Short horizontal shake after a hit
    let shake = if f.hit_timer > 0 {
        (f.hit_timer as f32 * 2.5).sin() * 3.0
    } else {
        0.0
    };

    s.push();
    s.translate(f.pos + Vec2::new(shake, 0.0));
    s.stroke(Some(Color::BLACK), 1.0);

    // Wings, raised while flapping
    let wing_lift = if f.flapping { -size * 0.4 } else { -size * 0.2 };
    for side in [-1.0f32, 1.0] {
        s.push();
        s.fill(Some(MAROON));
        s.translate(Vec2::new(side * size * 1.2, wing_lift));
        for i in 0..5 {
            s.ellipse(
                Vec2::new(-side * i as f32 * size * 0.25, 0.0),
                Vec2::new(size * 0.375, size * 0.75),
            );
        }
        s.pop();
    }

    s.fill(Some(TAIL_BROWN));
    for i in 0..5 {
        let i = if f.facing > 0.0 { 4 - i } else { i };
        s.ellipse(
            Vec2::new(-size * 0.5 + i as f32 * size * 0.25, -size * 0.625),
            Vec2::new(size * 0.375, size * 0.75),
        );
    }

    // Legs swing opposite each other
    let leg_y = size * 0.5;
    s.fill(Some(HOKIE_ORANGE));
    for (x, swing) in [(-size * 0.25, f.gait.angle), (size * 0.125, -f.gait.angle)] {
        s.push();
        s.translate(Vec2::new(x + size * 0.0625, leg_y));
        s.rotate(swing);
        s.rect(Vec2::new(-size * 0.0625, 0.0), Vec2::new(size * 0.125, size * 0.375), 0.0);
        for i in -2..=2 {
            s.ellipse(
                Vec2::new(f.facing * i as f32 * 2.0, size * 0.375),
                Vec2::splat(size * 0.075),
            );
        }
        s.pop();
    }

    s.fill(Some(MAROON));
    s.ellipse(Vec2::ZERO, Vec2::new(size * 0.9, size * 1.1));
    s.ellipse(Vec2::new(0.0, -size * 0.6), Vec2::splat(size * 0.6));

    s.fill(Some(HOKIE_ORANGE));
    s.triangle(
        Vec2::new(f.facing * size * 0.25, -size * 0.55),
        Vec2::new(f.facing * size * 0.25, -size * 0.4),
        Vec2::new(f.facing * size * 0.5, -size * 0.475),
    );
    s.fill(Some(Color::rgb(255, 0, 0)));
    s.ellipse(
        Vec2::new(f.facing * size * 0.125, -size * 0.4),
        Vec2::new(size * 0.15, size * 0.3),
    );

    for x in [-size * 0.125, size * 0.125] {
        s.fill(Some(Color::WHITE));
        s.ellipse(Vec2::new(x, -size * 0.55), Vec2::splat(size * 0.2));
        s.fill(Some(Color::BLACK));
        s.ellipse(Vec2::new(x, -size * 0.55), Vec2::splat(size * 0.075));
    }

    if f.punching {
        // Fist at the end of the reach
        s.fill(Some(MAROON));
        s.ellipse(Vec2::new(f.facing * PUNCH_REACH, 0.0), Vec2::splat(size * 0.35));
    }
    s.pop();
}

fn draw_hunter(s: &mut impl Surface, h: &Hunter) {
    s.push();
    s.translate(h.pos);
    s.stroke(Some(Color::BLACK), 1.0);

    s.fill(Some(Color::rgb(60, 50, 40)));
    for (x, swing) in [(-6.0, h.gait.angle), (2.0, -h.gait.angle)] {
        s.push();
        s.translate(Vec2::new(x + 2.0, 10.0));
        s.rotate(swing);
        s.rect(Vec2::new(-2.0, 0.0), Vec2::new(4.0, 28.0), 0.0);
        s.pop();
    }

    s.fill(Some(Color::rgb(70, 110, 50)));
    s.rect(Vec2::new(-9.0, -22.0), Vec2::new(18.0, 34.0), 3.0);
    s.fill(Some(Color::rgb(240, 200, 160)));
    s.ellipse(Vec2::new(0.0, -30.0), Vec2::splat(16.0));
    s.fill(Some(Color::rgb(200, 80, 20)));
    s.triangle(
        Vec2::new(-10.0, -34.0),
        Vec2::new(10.0, -34.0),
        Vec2::new(0.0, -46.0),
    );

    // Bow held out in front
    s.fill(None);
    s.stroke(Some(Color::rgb(120, 70, 20)), 2.0);
    let (start, end) = if h.facing > 0.0 {
        (-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2)
    } else {
        (std::f32::consts::FRAC_PI_2, 3.0 * std::f32::consts::FRAC_PI_2)
    };
    s.arc(Vec2::new(h.facing * 10.0, -20.0), 12.0, start, end);
    s.stroke(Some(Color::gray(220)), 1.0);
    s.line(
        Vec2::new(h.facing * 10.0, -32.0),
        Vec2::new(h.facing * 10.0, -8.0),
    );
    s.pop();
}

fn draw_drumstick(s: &mut impl Surface, d: &Drumstick) {
    s.push();
    s.translate(d.pos);
    s.rotate(d.angle);
    s.stroke(None, 0.0);

    s.fill(Some(MEAT));
    s.bezier_shape(
        Vec2::new(-5.0, -15.0),
        &[
            (Vec2::new(-10.0, -5.0), Vec2::new(-10.0, 5.0), Vec2::new(-2.5, 15.0)),
            (Vec2::new(2.5, 17.5), Vec2::new(10.0, 5.0), Vec2::new(5.0, -15.0)),
        ],
    );

    s.fill(Some(MEAT_SPOT));
    for dot in d.texture {
        s.ellipse(dot, Vec2::splat(2.0));
    }

    s.fill(Some(Color::WHITE));
    s.ellipse(Vec2::new(0.0, 17.5), Vec2::new(10.0, 5.0));
    s.ellipse(Vec2::new(-3.0, 20.0), Vec2::splat(4.0));
    s.ellipse(Vec2::new(3.0, 20.0), Vec2::splat(4.0));
    s.pop();
}

fn draw_arrow(s: &mut impl Surface, a: &Arrow) {
    s.push();
    s.translate(a.pos);
    s.rotate(a.heading());
    s.stroke(Some(Color::rgb(90, 60, 30)), 2.0);
    s.line(Vec2::new(-12.0, 0.0), Vec2::ZERO);
    s.stroke(None, 0.0);
    s.fill(Some(Color::gray(80)));
    s.triangle(Vec2::new(4.0, 0.0), Vec2::new(-1.0, -3.0), Vec2::new(-1.0, 3.0));
    s.fill(Some(Color::WHITE));
    s.triangle(
        Vec2::new(-12.0, 0.0),
        Vec2::new(-16.0, -3.0),
        Vec2::new(-14.0, 0.0),
    );
    s.triangle(
        Vec2::new(-12.0, 0.0),
        Vec2::new(-16.0, 3.0),
        Vec2::new(-14.0, 0.0),
    );
    s.pop();
}

fn draw_particles(s: &mut impl Surface, particles: &ParticleSystem) {
    s.push();
    s.stroke(None, 0.0);
    for p in particles.iter() {
        let fade = p.life_fraction();
        match p.kind {
            ParticleKind::Dust => {
                s.fill(Some(Color::gray(p.shade).faded(fade * 0.8)));
                s.ellipse(p.pos, Vec2::splat(p.size));
            }
            ParticleKind::Feather => {
                s.fill(Some(Color::rgb(p.shade, 30, 30).faded(fade)));
                s.push();
                s.translate(p.pos);
                s.rotate(p.angle);
                s.ellipse(Vec2::ZERO, Vec2::new(p.size * 0.4, p.size));
                s.pop();
            }
        }
    }
    s.pop();
}
