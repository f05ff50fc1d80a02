use crate::config::PlopConfig;
use rand::seq::SliceRandom;
use rand::Rng;

/// Basic oscillator shape used by the synth in each frontend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Saw,
    Triangle,
}

/// A short percussive note paired with a drop.
///
/// Fields:
/// - `frequency_hz`: starting pitch (already converted from MIDI)
/// - `velocity`: normalized loudness 0..1
/// - `duration_sec`: nominal note length handed to the envelope
/// - `glide_to_hz`: pitch the oscillator slides down to right after the attack
/// - `glide_sec`: length of that slide
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlopNote {
    pub frequency_hz: f32,
    pub velocity: f32,
    pub duration_sec: f32,
    pub glide_to_hz: f32,
    pub glide_sec: f32,
}

/// Sound output collaborator. Calls are best-effort; sinks never fail the caller.
pub trait AudioSink {
    fn play_note(&mut self, frequency_hz: f32, velocity: f32, duration_sec: f32);
    fn glide_to(&mut self, frequency_hz: f32, glide_sec: f32);
}

impl PlopNote {
    /// Trigger the note, then the downward glide.
    pub fn play<S: AudioSink + ?Sized>(&self, sink: &mut S) {
        sink.play_note(self.frequency_hz, self.velocity, self.duration_sec);
        sink.glide_to(self.glide_to_hz, self.glide_sec);
    }
}

/// Pick a random scale degree and a random downward slide for one drop.
pub fn pick_plop<R: Rng + ?Sized>(config: &PlopConfig, rng: &mut R) -> PlopNote {
    let midi = config.scale_midi.choose(rng).copied().unwrap_or(67);
    let frequency_hz = midi_to_hz(midi as f32);
    let drop = if config.max_drop_semitones > config.min_drop_semitones {
        rng.gen_range(config.min_drop_semitones..config.max_drop_semitones)
    } else {
        config.min_drop_semitones
    };
    PlopNote {
        frequency_hz,
        velocity: config.velocity,
        duration_sec: config.duration_sec,
        glide_to_hz: frequency_hz * 2.0_f32.powf(-drop / 12.0),
        glide_sec: config.glide_sec,
    }
}

/// Convert a MIDI note number to Hertz (A4=440 Hz).
///
/// Monotonic and exhibits octave symmetry: +12 semitones doubles the frequency.
pub fn midi_to_hz(midi: f32) -> f32 {
    440.0 * (2.0_f32).powf((midi - 69.0) / 12.0)
}
