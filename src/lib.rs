#![cfg(target_arch = "wasm32")]
use instant::Instant;
use raindrops_core::{SimConfig, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod color;
mod constants;
mod dom;
mod events;
mod frame;
mod query;
mod render;

use constants::APP_CANVAS_ID;

// Keep the backing store and the simulation's bounds in step with the window.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, sim: Rc<RefCell<Simulation>>) {
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move |_ev| {
        let size = dom::sync_canvas_backing_size(&canvas_resize);
        log::debug!("[resize] {:.0}x{:.0}", size.width, size.height);
        sim.borrow_mut().resize(size);
    });
}

fn pick_seed() -> u64 {
    dom::query_param("seed")
        .as_deref()
        .and_then(query::parse_seed)
        .unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u64)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("raindrops starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(APP_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", APP_CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let size = dom::sync_canvas_backing_size(&canvas);
    let renderer = render::CanvasRenderer::new(&canvas)?;

    // The timeline runs from page load; the first interaction only starts spawning.
    let origin = Instant::now();
    let seed = pick_seed();
    let sim = Rc::new(RefCell::new(Simulation::new(
        SimConfig::default(),
        size,
        seed,
        frame::elapsed_ms(origin),
    )?));
    log::info!(
        "[sim] seed={} canvas={:.0}x{:.0}",
        seed,
        size.width,
        size.height
    );

    let synth = Rc::new(RefCell::new(None));
    wire_canvas_resize(&canvas, sim.clone());
    events::wire_interaction(events::InteractionWiring {
        sim: sim.clone(),
        synth: synth.clone(),
        origin,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        synth,
        renderer,
        origin,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
