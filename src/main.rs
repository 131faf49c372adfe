//! Shape Rain entry point
//!
//! Handles platform-specific initialization and runs the demo loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent};

    use shape_rain::Settings;
    use shape_rain::consts::*;
    use shape_rain::renderer::{FillPath, fill_path};
    use shape_rain::sim::{ClickOutcome, SimState};

    /// Recurring spawn timer handle
    ///
    /// `restart` cancels the previous interval before arming the next one, so
    /// two timers are never armed at once when the spawn rate changes.
    struct SpawnTimer {
        id: Option<i32>,
    }

    impl SpawnTimer {
        fn new() -> Self {
            Self { id: None }
        }

        fn restart(&mut self, period_ms: i32, app: Rc<RefCell<App>>) {
            self.cancel();
            let closure = Closure::<dyn FnMut()>::new(move || {
                app.borrow_mut().state.spawn_at_top();
            });
            let window = web_sys::window().expect("no window");
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    period_ms,
                )
                .expect("failed to arm spawn timer");
            closure.forget();
            self.id = Some(id);
        }

        fn cancel(&mut self) {
            if let Some(id) = self.id.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            }
        }
    }

    /// App instance holding all state
    struct App {
        state: SimState,
        ctx: CanvasRenderingContext2d,
        spawn_timer: SpawnTimer,
        settings: Settings,
    }

    impl App {
        /// Replay the shape collection onto the canvas, one fill per shape,
        /// in collection order.
        fn render(&self) {
            let ctx = &self.ctx;
            ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);

            for shape in &self.state.shapes {
                ctx.set_fill_style_str(&shape.color.to_string());
                match fill_path(shape) {
                    FillPath::Rect { pos, extent } => {
                        ctx.fill_rect(pos.x as f64, pos.y as f64, extent.x as f64, extent.y as f64);
                    }
                    FillPath::Polygon { points } => {
                        ctx.begin_path();
                        if let Some((first, rest)) = points.split_first() {
                            ctx.move_to(first.x as f64, first.y as f64);
                            for point in rest {
                                ctx.line_to(point.x as f64, point.y as f64);
                            }
                        }
                        ctx.close_path();
                        ctx.fill();
                    }
                    FillPath::Ellipse { center, radii } => {
                        ctx.begin_path();
                        let _ = ctx.ellipse(
                            center.x as f64,
                            center.y as f64,
                            radii.x as f64,
                            radii.y as f64,
                            0.0,
                            0.0,
                            std::f64::consts::TAU,
                        );
                        ctx.fill();
                    }
                }
            }
        }

        /// Reflect metrics and parameters into the DOM text labels
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("shape-count") {
                el.set_text_content(Some(&self.state.metrics.count.to_string()));
            }
            if let Some(el) = document.get_element_by_id("total-area") {
                el.set_text_content(Some(&format!("{:.2}", self.state.metrics.total_area)));
            }
            if let Some(el) = document.get_element_by_id("spawn-rate") {
                el.set_text_content(Some(&self.state.spawn_rate.to_string()));
            }
            if let Some(el) = document.get_element_by_id("gravity") {
                el.set_text_content(Some(&self.state.gravity.to_string()));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Shape Rain starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas = build_dom(&document);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let mut state = SimState::new(seed);
        state.set_spawn_rate(settings.spawn_rate as i32);
        state.set_gravity(settings.gravity as i32);

        log::info!("Simulation initialized with seed: {seed}");

        let app = Rc::new(RefCell::new(App {
            state,
            ctx,
            spawn_timer: SpawnTimer::new(),
            settings,
        }));

        // Arm the spawn timer for the configured rate
        {
            let mut a = app.borrow_mut();
            let period = a.state.spawn_period_ms();
            a.spawn_timer.restart(period, app.clone());
        }

        setup_canvas_clicks(&canvas, app.clone());
        setup_controls(&document, app.clone());

        app.borrow().update_hud();
        request_animation_frame(app);

        log::info!("Shape Rain running!");
    }

    /// Build the page the demo lives on: stats panel, the 800x600 canvas,
    /// and the two +/- control rows.
    fn build_dom(document: &Document) -> HtmlCanvasElement {
        let body = document.body().expect("no body");

        let info = document.create_element("div").expect("create info panel");
        info.set_id("info");
        info.set_inner_html(
            "<div><span>Shapes on screen: </span><span id=\"shape-count\">0</span></div>\
             <div><span>Total area: </span><span id=\"total-area\">0</span> px<sup>2</sup></div>",
        );
        body.append_child(&info).expect("attach info panel");

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .expect("create canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);
        body.append_child(&canvas).expect("attach canvas");

        let spawn_row = document.create_element("div").expect("create spawn row");
        spawn_row.set_inner_html(
            "<label>Shapes generated per second:</label> \
             <button id=\"spawn-rate-decrease\">-</button> \
             <span id=\"spawn-rate\">1</span> \
             <button id=\"spawn-rate-increase\">+</button>",
        );
        body.append_child(&spawn_row).expect("attach spawn row");

        let gravity_row = document.create_element("div").expect("create gravity row");
        gravity_row.set_inner_html(
            "<label>Gravity:</label> \
             <button id=\"gravity-decrease\">-</button> \
             <span id=\"gravity\">1</span> \
             <button id=\"gravity-increase\">+</button>",
        );
        body.append_child(&gravity_row).expect("attach gravity row");

        canvas
    }

    fn setup_canvas_clicks(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            let y = event.client_y() as f32 - rect.top() as f32;

            let mut a = app.borrow_mut();
            match a.state.handle_click(Vec2::new(x, y)) {
                ClickOutcome::Removed(_) => a.update_hud(),
                ClickOutcome::Spawned => {}
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_controls(document: &Document, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            wire_button(document, "spawn-rate-decrease", move |_| {
                change_spawn_rate(&app, -1);
            });
        }
        {
            let app = app.clone();
            wire_button(document, "spawn-rate-increase", move |_| {
                change_spawn_rate(&app, 1);
            });
        }
        {
            let app = app.clone();
            wire_button(document, "gravity-decrease", move |_| {
                change_gravity(&app, -1);
            });
        }
        wire_button(document, "gravity-increase", move |_| {
            change_gravity(&app, 1);
        });
    }

    fn wire_button(
        document: &Document,
        id: &str,
        on_click: impl FnMut(MouseEvent) + 'static,
    ) {
        if let Some(btn) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(on_click);
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn change_spawn_rate(app: &Rc<RefCell<App>>, delta: i32) {
        let mut a = app.borrow_mut();
        let current = a.state.spawn_rate as i32;
        let rate = a.state.set_spawn_rate(current + delta);
        let period = a.state.spawn_period_ms();
        a.spawn_timer.restart(period, app.clone());
        a.settings.spawn_rate = rate;
        a.settings.save();
        a.update_hud();
        log::info!("Spawn rate set to {rate} (period {period} ms)");
    }

    fn change_gravity(app: &Rc<RefCell<App>>, delta: i32) {
        let mut a = app.borrow_mut();
        let current = a.state.gravity as i32;
        let gravity = a.state.set_gravity(current + delta);
        a.settings.gravity = gravity;
        a.settings.save();
        a.update_hud();
        log::info!("Gravity set to {gravity}");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One display frame: update strictly precedes render strictly precedes
    /// metrics recomputation.
    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.state.tick();
            a.render();
            a.state.refresh_metrics();
            a.update_hud();
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
    use shape_rain::sim::SimState;

    env_logger::init();
    log::info!("Shape Rain (native) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    // Headless demo: ten simulated seconds at 60 frames/sec, spawning on the
    // cadence the browser interval would.
    let mut state = SimState::new(seed);
    log::info!("Headless run with seed: {seed}");

    let fps = 60u64;
    let spawn_every = (fps / u64::from(state.spawn_rate)).max(1);
    for frame in 0..10 * fps {
        if frame % spawn_every == 0 {
            state.spawn_at_top();
        }
        state.tick();
        state.refresh_metrics();
        if frame % fps == fps - 1 {
            log::info!(
                "t={}s shapes={} area={:.2}",
                (frame + 1) / fps,
                state.metrics.count,
                state.metrics.total_area,
            );
        }
    }

    println!(
        "Final: {} shapes on screen, {:.2} px^2 total area",
        state.metrics.count, state.metrics.total_area
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
