//! Grid Invaders entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use grid_invaders::input::{Key, Keyboard};
    use grid_invaders::render::{self, CanvasSurface};
    use grid_invaders::sim::World;

    /// Game instance holding all state
    struct Game {
        world: World,
        keyboard: Keyboard,
        surface: CanvasSurface,
        extent: Vec2,
    }

    impl Game {
        /// One display frame: advance the simulation, then redraw.
        fn frame(&mut self) {
            self.world.step(self.extent, &self.keyboard);
            render::draw(&self.world, &mut self.surface, self.extent);
        }
    }

    /// Map a DOM key to its logical game key.
    fn logical_key(event: &KeyboardEvent) -> Option<Key> {
        match event.key().as_str() {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Fire),
            _ => None,
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grid Invaders starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("screen")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // The canvas pixel dimensions are the world extent
        let extent = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new(RefCell::new(Game {
            world: World::new(extent, seed),
            keyboard: Keyboard::new(),
            surface: CanvasSurface::new(context),
            extent,
        }));

        log::info!("World extent {}x{}, seed {}", extent.x, extent.y, seed);

        setup_key_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Grid Invaders running!");
    }

    fn setup_key_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = logical_key(&event) {
                    game.borrow_mut().keyboard.press(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = logical_key(&event) {
                    game.borrow_mut().keyboard.release(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// The loop re-registers itself every frame and runs until page
    /// teardown; there is no in-game stop condition.
    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        game.borrow_mut().frame();
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
    log::info!("Grid Invaders (native) starting...");
    log::info!("The game targets the web build - serve the wasm bundle to play");

    headless_smoke();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_smoke() {
    use glam::Vec2;
    use grid_invaders::consts::FLEET_COUNT;
    use grid_invaders::input::Keyboard;
    use grid_invaders::sim::World;

    let extent = Vec2::new(800.0, 600.0);
    let keyboard = Keyboard::new();
    let mut world = World::new(extent, 0xBADC0DE);

    for _ in 0..600 {
        world.step(extent, &keyboard);
    }

    // With no player fire the fleet cannot be hit, so at least the 24
    // invaders must still be alive.
    assert!(world.bodies.len() >= FLEET_COUNT);
    println!(
        "✓ Simulated 600 frames, {} bodies live",
        world.bodies.len()
    );
}
