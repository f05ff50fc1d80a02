use crate::audio::PlopSynth;
use crate::constants::MAX_NOTES_PER_FRAME;
use crate::dom;
use crate::render::CanvasRenderer;
use instant::Instant;
use raindrops_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since `origin`, the time base shared by frames and input.
#[inline]
pub fn elapsed_ms(origin: Instant) -> f64 {
    origin.elapsed().as_secs_f64() * 1000.0
}

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub synth: Rc<RefCell<Option<PlopSynth>>>,
    pub renderer: CanvasRenderer,
    pub origin: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let now_ms = elapsed_ms(self.origin);

        let report = self.sim.borrow_mut().step(now_ms, dt.as_secs_f32());

        if !report.notes.is_empty() {
            if let Some(synth) = self.synth.borrow_mut().as_mut() {
                if report.notes.len() > MAX_NOTES_PER_FRAME {
                    log::debug!(
                        "[frame] {} notes due, playing {}",
                        report.notes.len(),
                        MAX_NOTES_PER_FRAME
                    );
                }
                for note in report.notes.iter().take(MAX_NOTES_PER_FRAME) {
                    note.play(synth);
                }
            }
        }

        let sim = self.sim.borrow();
        self.renderer
            .begin_frame(sim.pool().canvas(), dom::device_pixel_ratio());
        sim.render(&mut self.renderer);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
