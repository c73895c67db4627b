//! Canvas Pong entry point
//!
//! Web: wires the page (canvas, score labels, restart button, keyboard and
//! mouse) to the frame driver and runs it from `requestAnimationFrame`.
//! Native: plays a headless match and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use canvas_pong::renderer::CanvasSurface;
    use canvas_pong::sim::{Key, Side, pointer_to_field_y};
    use canvas_pong::{Config, Game};

    /// Game plus the surface it draws on
    struct App {
        game: Game,
        surface: CanvasSurface,
        document: Document,
    }

    impl App {
        /// Write the score line into the page
        fn update_scores(&self) {
            for (id, side) in [("score-left", Side::Player), ("score-right", Side::Opponent)] {
                if let Some(el) = self.document.get_element_by_id(id) {
                    el.set_text_content(Some(&self.game.score_text(side)));
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = Config::default();
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);

        let Some(surface) = CanvasSurface::from_canvas(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(config, seed),
            surface,
            document,
        }));
        app.borrow().update_scores();

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, app.clone());
        setup_restart_button(app.clone());

        request_animation_frame(app);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Arrow keys
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    app.borrow_mut().game.input.key_down(key);
                    // Keep the page from scrolling
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom_key(&event.key()) {
                    app.borrow_mut().game.input.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - center the paddle on the pointer
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let mut app = app.borrow_mut();
                let y = pointer_to_field_y(
                    event.client_y() as f32,
                    rect.top() as f32,
                    rect.height() as f32,
                    app.game.state.config.field_height,
                );
                app.game.input.pointer_move(y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - held keys would otherwise stick
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                app.borrow_mut().game.input.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse leave
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.input.pointer_leave();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(app: Rc<RefCell<App>>) {
        let document = app.borrow().document.clone();

        let Some(btn) = document.get_element_by_id("restart") else {
            log::warn!("No restart button on the page");
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut app = app.borrow_mut();
            app.game.restart();
            app.update_scores();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let app = &mut *guard;
            let events = app.game.frame(time, &mut app.surface);
            if events.scored.is_some() {
                app.update_scores();
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::Parser;

    use canvas_pong::consts::FRAME_MS;
    use canvas_pong::renderer::NullSurface;
    use canvas_pong::sim::Key;
    use canvas_pong::{Config, Game};

    #[derive(Parser, Debug)]
    #[command(name = "canvas-pong")]
    #[command(about = "Play a headless Canvas Pong match and print a JSON summary")]
    struct Args {
        /// Number of frames to simulate
        #[arg(short, long, default_value_t = 3600)]
        frames: u64,

        /// Seed for serve angles
        #[arg(short, long, default_value_t = 12345)]
        seed: u64,

        /// JSON file overriding any subset of the default config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Milliseconds between simulated frames
        #[arg(long, default_value_t = FRAME_MS)]
        frame_ms: f32,

        /// Hold the arrow keys to chase the ball instead of leaving the paddle idle
        #[arg(long)]
        autopilot: bool,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        if !(args.frame_ms > 0.0) {
            bail!("--frame-ms must be positive, got {}", args.frame_ms);
        }

        let config = match &args.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                Config::from_json(&json)
                    .with_context(|| format!("loading config {}", path.display()))?
            }
            None => Config::default(),
        };

        log::info!(
            "Canvas Pong (native) running {} frames, seed {}",
            args.frames,
            args.seed
        );

        let mut game = Game::new(config, args.seed);
        let mut surface = NullSurface;
        for frame in 0..args.frames {
            if args.autopilot {
                steer(&mut game);
            }
            game.frame(frame as f64 * args.frame_ms as f64, &mut surface);
        }

        let summary = game.summary();
        log::info!(
            "Final score {} - {} after {} frames",
            summary.score.player,
            summary.score.opponent,
            summary.frames
        );
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }

    /// Press toward the ball, release when roughly level with it
    fn steer(game: &mut Game) {
        let paddle = game.state.player;
        let ball_y = game.state.ball.pos.y;
        let band = paddle.height / 4.0;
        let input = &mut game.input;

        input.key_up(Key::Up);
        input.key_up(Key::Down);
        if paddle.center_y() < ball_y - band {
            input.key_down(Key::Down);
        } else if paddle.center_y() > ball_y + band {
            input.key_down(Key::Up);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
