//! Hokie Fighters entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use hokie_fighters::Settings;
    use hokie_fighters::consts::*;
    use hokie_fighters::platform::{InputState, Key};
    use hokie_fighters::renderer::{CanvasSurface, draw_frame};
    use hokie_fighters::sim::{World, tick};

    /// Game instance holding all state
    struct Game {
        world: World,
        input: InputState,
        surface: CanvasSurface,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.world, &self.input, time);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Key presses count once
                self.input.end_tick();
            }
        }

        fn render(&mut self) {
            self.surface.begin_frame();
            draw_frame(&mut self.surface, &self.world, &self.input);
        }
    }

    /// Map a mouse event to canvas units
    fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        let w = rect.width().max(1.0);
        let h = rect.height().max(1.0);
        Vec2::new(
            ((event.client_x() as f64 - rect.left()) * CANVAS_WIDTH as f64 / w) as f32,
            ((event.client_y() as f64 - rect.top()) * CANVAS_HEIGHT as f64 / h) as f32,
        )
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hokie Fighters starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store at device resolution, drawn in 400x400 canvas units
        let dpr = window.device_pixel_ratio();
        canvas.set_width((CANVAS_WIDTH as f64 * dpr) as u32);
        canvas.set_height((CANVAS_HEIGHT as f64 * dpr) as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = canvas
            .get_attribute("data-settings")
            .map(|value| Settings::from_host(&value))
            .unwrap_or_default();

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);
        let game = Rc::new(RefCell::new(Game {
            world: World::new(seed, settings),
            input: InputState::new(),
            surface: CanvasSurface::new(ctx, dpr),
            accumulator: 0.0,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Hokie Fighters running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    if key.blocks_default() {
                        event.prevent_default();
                    }
                    game.borrow_mut().input.key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    game.borrow_mut().input.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = canvas_point(&canvas_clone, &event);
                game.borrow_mut().input.pointer_moved(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse press
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = canvas_point(&canvas_clone, &event);
                game.borrow_mut().input.pointer_pressed(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release anywhere, so dragging off the canvas still re-arms clicks
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.pointer_released();
            });
            let _ = window
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyups never arrive, so drop everything held
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.release_all();
                log::info!("Input released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hokie Fighters (native) starting...");
    log::info!("Native mode runs a scripted headless match - serve the wasm build to play");

    headless_match(0x5eed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a scripted match through the title screen and report the result
#[cfg(not(target_arch = "wasm32"))]
fn headless_match(seed: u64) {
    use hokie_fighters::Settings;
    use hokie_fighters::consts::SIM_DT;
    use hokie_fighters::platform::{InputState, Key};
    use hokie_fighters::renderer::{DrawRecorder, draw_frame};
    use hokie_fighters::sim::{GameState, World, tick};

    let mut world = World::new(seed, Settings::default());
    let mut input = InputState::new();
    let mut surface = DrawRecorder::new();
    let frame_ms = SIM_DT as f64 * 1000.0;

    input.key_down(Key::Enter);
    tick(&mut world, &input, 0.0);
    input.end_tick();
    input.key_up(Key::Enter);

    // Player one closes in and brawls, player two backs off and throws
    let mut frame = 1u64;
    while world.state == GameState::Playing {
        let now = frame as f64 * frame_ms;
        let one = world.fighters[0].pos;
        let two = world.fighters[1].pos;
        let toward = if two.x > one.x { Key::D } else { Key::A };
        let retreat = if two.x > one.x { Key::Right } else { Key::Left };
        input.release_all();
        if (two.x - one.x).abs() > 25.0 {
            input.key_down(toward);
        }
        input.key_down(Key::F);
        if two.y < one.y - 20.0 && frame % 20 == 0 {
            input.key_down(Key::W);
        }
        input.key_down(Key::P);
        if frame % 90 < 30 {
            input.key_down(retreat);
        }
        if frame % 150 == 0 {
            input.key_down(Key::Up);
        }

        tick(&mut world, &input, now);
        input.end_tick();

        if frame % 600 == 0 {
            surface.clear();
            draw_frame(&mut surface, &world, &input);
            log::info!(
                "t={}s health {:.0}/{:.0}, {} draw calls",
                frame / 60,
                world.fighters[0].health,
                world.fighters[1].health,
                surface.len()
            );
        }
        frame += 1;
    }

    surface.clear();
    draw_frame(&mut surface, &world, &input);
    log::info!(
        "Headless match finished after {} ticks: {}",
        frame,
        world.state.as_str()
    );
    println!("{}", world.state.as_str());
}
