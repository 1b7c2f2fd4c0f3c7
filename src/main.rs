//! Platform Hop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use platform_hop::Settings;
    use platform_hop::platform::{AnimationFrameScheduler, FrameCallback, FrameScheduler};
    use platform_hop::renderer::{RectBatch, RenderState};
    use platform_hop::sim::{SimulationContext, step};

    /// Game instance holding all state
    struct Game {
        ctx: SimulationContext,
        batch: RectBatch,
        render_state: Option<RenderState>,
    }

    impl Game {
        fn new(settings: &Settings, width: u32, height: u32) -> Self {
            Self {
                ctx: SimulationContext::new(settings, width as f32, height as f32),
                batch: RectBatch::new(settings.palette.background),
                render_state: None,
            }
        }

        /// One display refresh: simulate, then present what was drawn
        fn frame(&mut self, scheduler: &mut AnimationFrameScheduler) {
            step(&mut self.ctx, scheduler, &mut self.batch);
            self.render();
        }

        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.batch) {
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

        fn resize(&mut self, width: u32, height: u32) {
            self.ctx.resize(width as f32, height as f32);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }
    }

    /// Inner window size; the canvas always fills the window
    fn window_size(window: &web_sys::Window) -> (u32, u32) {
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32;
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Platform Hop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let (width, height) = window_size(&window);
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::from_canvas(&canvas);
        let game = Rc::new(RefCell::new(Game::new(&settings, width, height)));

        log::info!("World initialized at {}x{}", width, height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_resize_handler(&canvas, game.clone());

        start_frame_loop(game);

        log::info!("Platform Hop running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().ctx.key_event(event.key_code(), pressed);
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = window_size(&window);
            canvas.set_width(width);
            canvas.set_height(height);
            game.borrow_mut().resize(width, height);
            log::info!("Resized to {}x{}", width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// The frame closure owns a scheduler pointing back at itself, so the
    /// loop keeps itself alive for the lifetime of the page.
    fn start_frame_loop(game: Rc<RefCell<Game>>) {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let mut scheduler = AnimationFrameScheduler::new(callback.clone());
        {
            let mut scheduler = scheduler.clone();
            *callback.borrow_mut() = Some(Closure::new(move |_time: f64| {
                game.borrow_mut().frame(&mut scheduler);
            }));
        }
        scheduler.request_frame();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use platform_hop::Settings;

    env_logger::init();
    log::info!("Platform Hop (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::from_file(std::path::Path::new(&path)),
        None => Settings::default(),
    };

    headless_demo(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive the simulation without a window through a scripted run:
/// settle, walk right, jump onto the low platform, walk back.
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo(settings: &platform_hop::Settings) {
    use platform_hop::platform::FrameCounter;
    use platform_hop::renderer::RectBatch;
    use platform_hop::sim::{InputState, SimulationContext, step};

    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 1000.0;

    let mut ctx = SimulationContext::new(settings, WIDTH, HEIGHT);
    let mut scheduler = FrameCounter::default();
    let mut batch = RectBatch::new(settings.palette.background);

    let idle = InputState::default();
    let right = InputState { right: true, ..idle };
    let jump_right = InputState { up: true, right: true, ..idle };
    let left = InputState { left: true, ..idle };

    let script = [
        ("settle", 90, idle),
        ("walk right", 40, right),
        ("jump right", 20, jump_right),
        ("drift right", 60, right),
        ("rest", 60, idle),
        ("walk left", 120, left),
    ];

    for (label, frames, input) in script {
        ctx.input = input;
        for _ in 0..frames {
            step(&mut ctx, &mut scheduler, &mut batch);
            for event in &ctx.events {
                log::info!("frame {}: {:?}", ctx.frame, event);
            }
        }
        let player = &ctx.player;
        log::info!(
            "{} done: pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) grounded={}",
            label,
            player.body.pos.x,
            player.body.pos.y,
            player.body.vel.x,
            player.body.vel.y,
            player.grounded
        );
    }

    println!(
        "Ran {} frames ({} scheduled), {} rects per frame; player at ({:.2}, {:.2})",
        ctx.frame,
        scheduler.requested,
        batch.rect_count(),
        ctx.player.body.pos.x,
        ctx.player.body.pos.y
    );
}
