use crate::audio::{self, PlopSynth};
use crate::dom;
use crate::frame::elapsed_ms;
use instant::Instant;
use raindrops_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Any of these counts as the first interaction.
const INTERACTION_EVENTS: [&str; 3] = ["pointerdown", "touchstart", "keydown"];

pub struct InteractionWiring {
    pub sim: Rc<RefCell<Simulation>>,
    pub synth: Rc<RefCell<Option<PlopSynth>>>,
    pub origin: Instant,
}

pub fn wire_interaction(wiring: InteractionWiring) {
    for name in INTERACTION_EVENTS {
        let sim = wiring.sim.clone();
        let synth = wiring.synth.clone();
        let origin = wiring.origin;
        dom::add_window_listener(name, move |_ev| {
            handle_interaction(&sim, &synth, origin);
        });
    }
}

fn handle_interaction(
    sim: &Rc<RefCell<Simulation>>,
    synth: &Rc<RefCell<Option<PlopSynth>>>,
    origin: Instant,
) {
    if !sim.borrow_mut().on_user_interaction(elapsed_ms(origin)) {
        return;
    }
    log::info!("[gesture] starting drops after first interaction");

    // Browsers only allow audio to start from inside the gesture handler.
    let audio_ctx = match web::AudioContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("AudioContext error: {:?}", e);
            return;
        }
    };
    let sim = sim.clone();
    let synth = synth.clone();
    spawn_local(async move {
        if audio::unlock(&audio_ctx).await {
            let plop = sim.borrow().plop_config().clone();
            if let Some(s) = PlopSynth::new(audio_ctx, &plop) {
                *synth.borrow_mut() = Some(s);
                sim.borrow_mut().set_audio_enabled(true);
                return;
            }
        }
        log::warn!("[gesture] audio unavailable; continuing without sound");
        sim.borrow_mut().set_audio_enabled(false);
    });
}
