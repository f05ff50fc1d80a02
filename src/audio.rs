use crate::constants::{MASTER_GAIN, NOTE_LEAD_SEC, NOTE_STOP_PAD_SEC};
use raindrops_core::{AudioSink, Envelope, PlopConfig, Waveform};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> Option<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Some(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            None
        }
    }
}

/// Resume the context inside a user gesture; true once it is running.
pub async fn unlock(audio_ctx: &web::AudioContext) -> bool {
    match audio_ctx.resume() {
        Ok(promise) => {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("AudioContext resume rejected: {:?}", e);
                return false;
            }
        }
        Err(e) => {
            log::warn!("AudioContext resume error: {:?}", e);
            return false;
        }
    }
    audio_ctx.state() == web::AudioContextState::Running
}

/// Monophonic-style plop voice: each note is a fresh oscillator through an
/// ADSR gain, and `glide_to` bends the most recent one.
pub struct PlopSynth {
    audio_ctx: web::AudioContext,
    master: web::GainNode,
    waveform: Waveform,
    envelope: Envelope,
    last_osc: Option<web::OscillatorNode>,
}

impl PlopSynth {
    pub fn new(audio_ctx: web::AudioContext, config: &PlopConfig) -> Option<Self> {
        let master = create_gain(&audio_ctx, MASTER_GAIN, "Master")?;
        if let Err(e) = master.connect_with_audio_node(&audio_ctx.destination()) {
            log::error!("connect error: {:?}", e);
            return None;
        }
        Some(Self {
            audio_ctx,
            master,
            waveform: config.waveform,
            envelope: config.envelope,
            last_osc: None,
        })
    }
}

impl AudioSink for PlopSynth {
    fn play_note(&mut self, frequency_hz: f32, velocity: f32, duration_sec: f32) {
        let Ok(src) = web::OscillatorNode::new(&self.audio_ctx) else {
            return;
        };
        match self.waveform {
            Waveform::Sine => src.set_type(web::OscillatorType::Sine),
            Waveform::Square => src.set_type(web::OscillatorType::Square),
            Waveform::Saw => src.set_type(web::OscillatorType::Sawtooth),
            Waveform::Triangle => src.set_type(web::OscillatorType::Triangle),
        }
        src.frequency().set_value(frequency_hz);
        let Some(g) = create_gain(&self.audio_ctx, 0.0, "Note") else {
            return;
        };

        let env = self.envelope;
        let t0 = self.audio_ctx.current_time() + NOTE_LEAD_SEC;
        let attack_end = t0 + env.attack as f64;
        let decay_end = attack_end + env.decay as f64;
        let note_end = (t0 + duration_sec as f64).max(decay_end);
        let release_end = note_end + env.release as f64;
        let sustain = velocity * env.sustain;
        let gain = g.gain();
        _ = gain.set_value_at_time(0.0, t0);
        _ = gain.linear_ramp_to_value_at_time(velocity, attack_end);
        _ = gain.linear_ramp_to_value_at_time(sustain, decay_end);
        _ = gain.set_value_at_time(sustain, note_end);
        _ = gain.linear_ramp_to_value_at_time(0.0, release_end);

        _ = src.connect_with_audio_node(&g);
        _ = g.connect_with_audio_node(&self.master);
        _ = src.start_with_when(t0);
        _ = src.stop_with_when(release_end + NOTE_STOP_PAD_SEC);
        self.last_osc = Some(src);
    }

    fn glide_to(&mut self, frequency_hz: f32, glide_sec: f32) {
        let Some(src) = &self.last_osc else {
            return;
        };
        let freq = src.frequency();
        let t0 = self.audio_ctx.current_time() + NOTE_LEAD_SEC;
        _ = freq.set_value_at_time(freq.value(), t0);
        _ = freq.exponential_ramp_to_value_at_time(frequency_hz.max(1.0), t0 + glide_sec as f64);
    }
}
