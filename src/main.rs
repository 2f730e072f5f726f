//! Bubble Fun entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, PointerEvent};

    use bubble_fun::consts::FRAME_INTERVAL_MS;
    use bubble_fun::renderer::CanvasRenderer;
    use bubble_fun::sim::{SimState, request_spawn, tick};

    /// App instance holding all state
    struct App {
        state: SimState,
        renderer: CanvasRenderer,
        /// Timestamp of the last executed tick (ms)
        last_update: f64,
    }

    impl App {
        /// Resync canvas dimensions and simulation viewport to the window.
        /// Running this every executed tick covers resizes without a
        /// dedicated listener.
        fn sync_viewport(&mut self) {
            let window = web_sys::window().expect("no window");
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);

            self.renderer.resize(width as u32, height as u32);
            self.state.set_viewport(width as f32, height as f32);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bubble Fun starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .expect("query failed")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = CanvasRenderer::new(canvas).expect("Failed to get 2d context");

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            state: SimState::new(seed),
            renderer,
            last_update: 0.0,
        }));

        log::info!("Simulation initialized with seed: {}", seed);

        // Prime the viewport and run one tick before the loop starts
        {
            let mut a = app.borrow_mut();
            a.sync_viewport();
            tick(&mut a.state);
        }

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Bubble Fun running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");

        // Pointer down - spawn at the tap position
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let pos = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                request_spawn(&mut app.borrow_mut().state, Some(pos));
            });
            let _ = window
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move - drag-to-spawn trails, touch/pen only
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if event.pointer_type() == "mouse" {
                    return;
                }
                let pos = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                request_spawn(&mut app.borrow_mut().state, Some(pos));
            });
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keep right-click / long-press from opening the context menu
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
            });
            let _ = window
                .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            // Throttle to ~60 Hz regardless of the display refresh rate
            if time > a.last_update + FRAME_INTERVAL_MS {
                a.sync_viewport();
                tick(&mut a.state);

                let App { state, renderer, .. } = &mut *a;
                renderer.render(state);

                a.last_update = time;
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bubble Fun (native) starting...");
    log::info!("Native mode has no canvas - run with `trunk serve` for the web version");

    println!("\nRunning headless simulation...");
    headless_smoke();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_smoke() {
    use bubble_fun::consts::MIN_RADIUS;
    use bubble_fun::sim::{SimState, request_spawn, tick};
    use glam::Vec2;

    let mut state = SimState::new(4242);
    state.set_viewport(1280.0, 720.0);

    for i in 0..8 {
        request_spawn(&mut state, Some(Vec2::new(150.0 * (i + 1) as f32, 360.0)));
        tick(&mut state);
    }
    for _ in 0..400 {
        tick(&mut state);
        assert!(state.bubbles.iter().all(|b| b.radius >= MIN_RADIUS));
    }

    assert!(
        state.bubbles.is_empty(),
        "all bubbles should age out within 400 ticks"
    );
    println!("✓ Headless simulation ran {} ticks", state.time_ticks);
}
