// Web frontend constants.

pub const APP_CANVAS_ID: &str = "app-canvas";

// Text
pub const HINT_FONT_FAMILY: &str = "system-ui, sans-serif";
pub const HINT_TEXT_HSL: [f32; 3] = [0.0, 0.0, 100.0]; // white

// After a long pause (hidden tab) many drops come due at once; only this many
// of them get a note so the audio graph is not flooded.
pub const MAX_NOTES_PER_FRAME: usize = 8;

// Master output level for the plop synth
pub const MASTER_GAIN: f32 = 0.8;

// Lead time before a note starts, so envelope ramps are scheduled in the future
pub const NOTE_LEAD_SEC: f64 = 0.005;
// Extra time an oscillator keeps running after its release ends
pub const NOTE_STOP_PAD_SEC: f64 = 0.02;
