// Shared tuning constants used as configuration defaults by every frontend.

// Ripple growth and stroke
pub const GROWTH_RATE_PX_PER_SEC: f32 = 140.0; // ring expansion speed
pub const START_RADIUS: f32 = 0.0; // 0 = point birth
pub const STROKE_WEIGHT: f32 = 2.0; // ring outline thickness

// Ring color in HSL: dark blue -> light blue as it grows, plus alpha fade-out
pub const RING_HUE: f32 = 210.0;
pub const RING_SATURATION: f32 = 80.0; // percent
pub const LIGHT_DARK: f32 = 25.0; // starting lightness (percent)
pub const LIGHT_LIGHT: f32 = 70.0; // ending lightness (percent)
pub const FADE_CURVE_POWER: f32 = 1.4; // 1 = linear; >1 lingers darker then fades

// Canvas background (HSL)
pub const BACKGROUND_HSL: [f32; 3] = [210.0, 70.0, 12.0];

// Spawn interval timeline (milliseconds between drops)
pub const SLOW_INTERVAL_MS: f64 = 10_000.0;
pub const FAST_INTERVAL_MS: f64 = 250.0;
pub const OPENING_RAMP_SECONDS: f64 = 45.0; // slow -> fast
pub const FAST_HOLD_SECONDS: f64 = 45.0; // preset hold after the opening ramp
pub const RANDOM_DURATIONS_SEC: &[f64] = &[15.0, 30.0, 45.0];
pub const MIN_INTERVAL_MS: f64 = 250.0;
pub const MAX_INTERVAL_MS: f64 = 10_000.0;
pub const INTERVAL_STEP_MS: f64 = 250.0;
pub const MAX_INTERVAL_STEPS: usize = 1_000_000; // upper bound on grid values a config may define

// Periodic cycle variant
pub const CYCLE_RAMP_UP_SECONDS: f64 = 45.0;
pub const CYCLE_FAST_HOLD_SECONDS: f64 = 45.0;
pub const CYCLE_RAMP_DOWN_SECONDS: f64 = 30.0;
pub const CYCLE_SLOW_HOLD_SECONDS: f64 = 30.0;
pub const CYCLE_RAMP_UP_POWER: f32 = 3.0; // ease-in cubic (steepening)
pub const CYCLE_RAMP_DOWN_POWER: f32 = 2.0; // ease-in quad (more gradual)

// Spawn process
pub const FIRST_SPAWN_DELAY_MS: f64 = 10.0;
pub const BURST_PROB: f64 = 0.12;
pub const BURST_MAX_EXTRA: u32 = 3;
pub const BURST_OFFSET_MIN_MS: f64 = 5.0;
pub const BURST_OFFSET_MAX_MS: f64 = 25.0;

// Plop notes
pub const NOTE_LEN_SECONDS: f32 = 0.10;
pub const NOTE_VELOCITY: f32 = 0.12;
pub const PLOP_MIN_DROP_SEMITONES: f32 = 3.0;
pub const PLOP_MAX_DROP_SEMITONES: f32 = 7.0;
pub const PLOP_GLIDE_TIME: f32 = 0.05;

// Synth envelope (seconds / level)
pub const ATTACK: f32 = 0.004;
pub const DECAY: f32 = 0.07;
pub const SUSTAIN: f32 = 0.0;
pub const RELEASE: f32 = 0.12;

/// G major from G4 to G5.
pub const G_MAJOR_MIDI: &[u8] = &[67, 69, 71, 72, 74, 76, 78, 79];

// Hint text
pub const HINT_TITLE: &str = "RAIN DROPS";
pub const HINT_TITLE_SIZE: f32 = 28.0;
pub const HINT_TITLE_DY: f32 = -22.0; // offset from canvas center
pub const HINT_TEXT: &str = "CLICK TO START";
pub const HINT_TEXT_SIZE: f32 = 21.0;
pub const HINT_TEXT_DY: f32 = 12.0;
pub const HINT_FADE_SECONDS: f32 = 1.0;
