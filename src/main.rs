//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use brick_breaker::Settings;
    use brick_breaker::consts::*;
    use brick_breaker::platform::{FpsCounter, FrameClock, pointer_to_field_x};
    use brick_breaker::renderer::{DrawList, RenderState, draw_game};
    use brick_breaker::sim::{FrameInput, GameEvent, GamePhase, GameState, tick};

    /// Game instance
    struct Game {
        state: GameState,
        settings: Settings,
        render_state: Option<RenderState>,
        draw_list: DrawList,
        clock: FrameClock,
        fps: FpsCounter,
        input: FrameInput,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, settings: Settings) -> Self {
            Self {
                state: GameState::default(),
                settings,
                render_state: None,
                draw_list: DrawList::new(),
                clock: FrameClock::new(),
                fps: FpsCounter::new(),
                input: FrameInput::default(),
                canvas,
            }
        }

        /// Pointer position in client pixels to field x
        fn set_pointer(&mut self, client_x: f32) {
            let rect = self.canvas.get_bounding_client_rect();
            self.input.pointer_x = Some(pointer_to_field_x(
                client_x - rect.left() as f32,
                rect.width() as f32,
                FIELD_WIDTH,
            ));
        }

        /// Run one simulation frame
        fn update(&mut self, time: f64) {
            let dt = self.clock.tick(time);
            let input = self.input.clone();
            tick(&mut self.state, &input, dt);

            // Clear one-shot inputs after processing
            self.input.pause = false;
            self.input.restart = false;

            // Resume from a fresh timestamp instead of one long step
            if self.state.phase != GamePhase::Playing {
                self.clock.reset();
            }

            self.fps.record(time);

            for event in self.state.drain_events() {
                match event {
                    GameEvent::BallLost | GameEvent::Cleared => {
                        log::info!("{:?} ({} bricks left)", event, self.state.bricks.remaining())
                    }
                    GameEvent::Paused | GameEvent::Resumed | GameEvent::Restarted => {
                        log::info!("{:?}", event)
                    }
                    _ => log::debug!("{:?}", event),
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            draw_game(&self.state, &self.settings, &mut self.draw_list);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.draw_list) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-bricks .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.bricks.remaining().to_string()));
            }

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "hud-item");
                    if let Some(val) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                        val.set_text_content(Some(&self.fps.fps().to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            // Status overlay for everything but active play
            if let Some(el) = document.get_element_by_id("status") {
                let text = match self.state.phase {
                    GamePhase::Playing => None,
                    GamePhase::Paused => Some("Paused - press P to resume"),
                    GamePhase::BallLost => Some("Ball lost - tap, click or press R to restart"),
                    GamePhase::Cleared => Some("All bricks cleared! Tap, click or press R to play again"),
                };
                match text {
                    Some(text) => {
                        el.set_text_content(Some(text));
                        let _ = el.set_attribute("class", "");
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(canvas.clone(), settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            glam::Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        )
        .await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_keyboard(game.clone());
        setup_auto_pause(game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move drives the paddle
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().set_pointer(event.client_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch drag drives the paddle, a touch start also counts as a tap
        for name in ["touchstart", "touchmove"] {
            let game = game.clone();
            let is_start = name == "touchstart";
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                // Suppresses the synthesized mouse events, so no click follows
                event.prevent_default();
                let mut g = game.borrow_mut();
                if let Some(touch) = event.touches().get(0) {
                    g.set_pointer(touch.client_x() as f32);
                }
                if is_start {
                    let phase = g.state.phase;
                    g.input.tap(phase);
                }
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click restarts a finished round
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                let phase = g.state.phase;
                g.input.tap(phase);
            });
            let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.key().as_str() {
                "p" | "P" | "Escape" => g.input.pause = true,
                "r" | "R" => g.input.restart = true,
                "h" | "H" => {
                    g.settings.high_contrast = !g.settings.high_contrast;
                    g.settings.save();
                    log::info!("High contrast: {}", g.settings.high_contrast);
                }
                "f" | "F" => {
                    g.settings.show_fps = !g.settings.show_fps;
                    g.settings.save();
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut g = game.borrow_mut();
            if g.settings.pause_on_blur && g.state.phase == GamePhase::Playing {
                g.input.pause = true;
                log::info!("Auto-paused (window blur)");
            }
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
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

    /// One presented frame: update, collide, draw
    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring {}={:?}: not a number", name, value);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::Settings;

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the playable web version");

    let settings = Settings::load();

    // Leave a template behind when the settings file doesn't exist yet
    if let Some(path) = std::env::var_os(Settings::PATH_ENV) {
        if !std::path::Path::new(&path).exists() {
            settings.save();
        }
    }

    let frames = env_or("BRICK_BREAKER_FRAMES", 3600u64);
    let seed = env_or("BRICK_BREAKER_SEED", 1u64);
    log::info!("Running {} frames with autopilot seed {}", frames, seed);

    let summary = brick_breaker::demo::run(frames, seed, &settings);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Cannot serialize summary: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
