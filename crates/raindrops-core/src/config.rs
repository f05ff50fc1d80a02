//! Tunable parameters for the simulation, with defaults taken from `constants`.
//!
//! Every group implements `Default`; `SimConfig::validate` rejects values the
//! scheduler and pool cannot work with (non-positive intervals, empty choice
//! lists, probabilities outside `[0, 1]`).

use crate::constants::*;
use crate::plop::Waveform;
use thiserror::Error;

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must be finite and non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be within [0, 1] (got {value})")]
    OutOfUnitRange { field: &'static str, value: f64 },
    #[error("interval range is inverted: min {min} > max {max}")]
    InvertedRange { min: f64, max: f64 },
    #[error("burst offset range is inverted: min {min} > max {max}")]
    InvertedBurstOffset { min: f64, max: f64 },
    #[error("interval grid {min}..={max} in steps of {step} has more than {limit} values")]
    StepGridTooLarge {
        min: f64,
        max: f64,
        step: f64,
        limit: usize,
    },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// How the timeline picks its next segment once the current one expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimelineMode {
    /// Opening ramp and preset hold, then an unbounded random walk of ramps.
    #[default]
    RandomWalk,
    /// Fixed ramp-up / hold-fast / ramp-down / hold-slow loop.
    Cycle,
}

#[derive(Clone, Debug)]
pub struct TimelineConfig {
    pub mode: TimelineMode,
    pub slow_interval_ms: f64,
    pub fast_interval_ms: f64,
    pub opening_ramp_sec: f64,
    pub fast_hold_sec: f64,
    pub random_durations_sec: Vec<f64>,
    pub min_interval_ms: f64,
    pub max_interval_ms: f64,
    pub interval_step_ms: f64,
    pub cycle: CycleConfig,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            mode: TimelineMode::RandomWalk,
            slow_interval_ms: SLOW_INTERVAL_MS,
            fast_interval_ms: FAST_INTERVAL_MS,
            opening_ramp_sec: OPENING_RAMP_SECONDS,
            fast_hold_sec: FAST_HOLD_SECONDS,
            random_durations_sec: RANDOM_DURATIONS_SEC.to_vec(),
            min_interval_ms: MIN_INTERVAL_MS,
            max_interval_ms: MAX_INTERVAL_MS,
            interval_step_ms: INTERVAL_STEP_MS,
            cycle: CycleConfig::default(),
        }
    }
}

impl TimelineConfig {
    /// A timeline pinned to one interval: every segment holds `interval_ms`.
    pub fn constant(interval_ms: f64) -> Self {
        Self {
            slow_interval_ms: interval_ms,
            fast_interval_ms: interval_ms,
            min_interval_ms: interval_ms,
            max_interval_ms: interval_ms,
            ..Self::default()
        }
    }
}

/// Phase lengths and curve steepness for `TimelineMode::Cycle`.
#[derive(Clone, Debug)]
pub struct CycleConfig {
    pub ramp_up_sec: f64,
    pub fast_hold_sec: f64,
    pub ramp_down_sec: f64,
    pub slow_hold_sec: f64,
    pub ramp_up_power: f32,
    pub ramp_down_power: f32,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            ramp_up_sec: CYCLE_RAMP_UP_SECONDS,
            fast_hold_sec: CYCLE_FAST_HOLD_SECONDS,
            ramp_down_sec: CYCLE_RAMP_DOWN_SECONDS,
            slow_hold_sec: CYCLE_SLOW_HOLD_SECONDS,
            ramp_up_power: CYCLE_RAMP_UP_POWER,
            ramp_down_power: CYCLE_RAMP_DOWN_POWER,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SpawnConfig {
    pub first_spawn_delay_ms: f64,
    pub burst_probability: f64,
    pub burst_max_extra: u32,
    pub burst_offset_min_ms: f64,
    pub burst_offset_max_ms: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            first_spawn_delay_ms: FIRST_SPAWN_DELAY_MS,
            burst_probability: BURST_PROB,
            burst_max_extra: BURST_MAX_EXTRA,
            burst_offset_min_ms: BURST_OFFSET_MIN_MS,
            burst_offset_max_ms: BURST_OFFSET_MAX_MS,
        }
    }
}

/// Growth and look of a single ring.
#[derive(Clone, Debug)]
pub struct RippleConfig {
    pub growth_rate_px_per_sec: f32,
    pub start_radius: f32,
    pub stroke_width: f32,
    pub hue: f32,
    pub saturation: f32,
    pub light_min: f32,
    pub light_max: f32,
    pub fade_curve_power: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            growth_rate_px_per_sec: GROWTH_RATE_PX_PER_SEC,
            start_radius: START_RADIUS,
            stroke_width: STROKE_WEIGHT,
            hue: RING_HUE,
            saturation: RING_SATURATION,
            light_min: LIGHT_DARK,
            light_max: LIGHT_LIGHT,
            fade_curve_power: FADE_CURVE_POWER,
        }
    }
}

/// One centered line of hint text.
#[derive(Clone, Debug)]
pub struct HintLine {
    pub text: String,
    pub font_size: f32,
    /// Vertical offset from the canvas center in pixels.
    pub dy: f32,
}

#[derive(Clone, Debug)]
pub struct HintConfig {
    pub lines: Vec<HintLine>,
    pub fade_sec: f32,
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            lines: vec![
                HintLine {
                    text: HINT_TITLE.to_string(),
                    font_size: HINT_TITLE_SIZE,
                    dy: HINT_TITLE_DY,
                },
                HintLine {
                    text: HINT_TEXT.to_string(),
                    font_size: HINT_TEXT_SIZE,
                    dy: HINT_TEXT_DY,
                },
            ],
            fade_sec: HINT_FADE_SECONDS,
        }
    }
}

/// Note selection and synth envelope for the per-drop "plop".
#[derive(Clone, Debug)]
pub struct PlopConfig {
    pub scale_midi: Vec<u8>,
    pub velocity: f32,
    pub duration_sec: f32,
    pub min_drop_semitones: f32,
    pub max_drop_semitones: f32,
    pub glide_sec: f32,
    pub waveform: Waveform,
    pub envelope: Envelope,
}

impl Default for PlopConfig {
    fn default() -> Self {
        Self {
            scale_midi: G_MAJOR_MIDI.to_vec(),
            velocity: NOTE_VELOCITY,
            duration_sec: NOTE_LEN_SECONDS,
            min_drop_semitones: PLOP_MIN_DROP_SEMITONES,
            max_drop_semitones: PLOP_MAX_DROP_SEMITONES,
            glide_sec: PLOP_GLIDE_TIME,
            waveform: Waveform::Sine,
            envelope: Envelope::default(),
        }
    }
}

/// ADSR envelope handed to the synth collaborator (times in seconds).
#[derive(Clone, Copy, Debug)]
pub struct Envelope {
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: ATTACK,
            decay: DECAY,
            sustain: SUSTAIN,
            release: RELEASE,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SimConfig {
    pub timeline: TimelineConfig,
    pub spawn: SpawnConfig,
    pub ripple: RippleConfig,
    pub hint: HintConfig,
    pub plop: PlopConfig,
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

impl SimConfig {
    /// Check every field the scheduler, pool and hint rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timeline;
        positive("timeline.slow_interval_ms", t.slow_interval_ms)?;
        positive("timeline.fast_interval_ms", t.fast_interval_ms)?;
        positive("timeline.opening_ramp_sec", t.opening_ramp_sec)?;
        positive("timeline.fast_hold_sec", t.fast_hold_sec)?;
        positive("timeline.min_interval_ms", t.min_interval_ms)?;
        positive("timeline.max_interval_ms", t.max_interval_ms)?;
        positive("timeline.interval_step_ms", t.interval_step_ms)?;
        if t.min_interval_ms > t.max_interval_ms {
            return Err(ConfigError::InvertedRange {
                min: t.min_interval_ms,
                max: t.max_interval_ms,
            });
        }
        if (t.max_interval_ms - t.min_interval_ms) / t.interval_step_ms >= MAX_INTERVAL_STEPS as f64
        {
            return Err(ConfigError::StepGridTooLarge {
                min: t.min_interval_ms,
                max: t.max_interval_ms,
                step: t.interval_step_ms,
                limit: MAX_INTERVAL_STEPS,
            });
        }
        if t.random_durations_sec.is_empty() {
            return Err(ConfigError::Empty("timeline.random_durations_sec"));
        }
        for d in &t.random_durations_sec {
            positive("timeline.random_durations_sec", *d)?;
        }
        let c = &t.cycle;
        positive("timeline.cycle.ramp_up_sec", c.ramp_up_sec)?;
        positive("timeline.cycle.fast_hold_sec", c.fast_hold_sec)?;
        positive("timeline.cycle.ramp_down_sec", c.ramp_down_sec)?;
        positive("timeline.cycle.slow_hold_sec", c.slow_hold_sec)?;
        positive("timeline.cycle.ramp_up_power", c.ramp_up_power as f64)?;
        positive("timeline.cycle.ramp_down_power", c.ramp_down_power as f64)?;

        let s = &self.spawn;
        non_negative("spawn.first_spawn_delay_ms", s.first_spawn_delay_ms)?;
        unit("spawn.burst_probability", s.burst_probability)?;
        if s.burst_probability > 0.0 && s.burst_max_extra == 0 {
            return Err(ConfigError::NonPositive {
                field: "spawn.burst_max_extra",
                value: 0.0,
            });
        }
        non_negative("spawn.burst_offset_min_ms", s.burst_offset_min_ms)?;
        non_negative("spawn.burst_offset_max_ms", s.burst_offset_max_ms)?;
        if s.burst_offset_min_ms > s.burst_offset_max_ms {
            return Err(ConfigError::InvertedBurstOffset {
                min: s.burst_offset_min_ms,
                max: s.burst_offset_max_ms,
            });
        }

        let r = &self.ripple;
        positive("ripple.growth_rate_px_per_sec", r.growth_rate_px_per_sec as f64)?;
        positive("ripple.fade_curve_power", r.fade_curve_power as f64)?;
        non_negative("ripple.start_radius", r.start_radius as f64)?;
        non_negative("ripple.stroke_width", r.stroke_width as f64)?;

        positive("hint.fade_sec", self.hint.fade_sec as f64)?;

        let p = &self.plop;
        if p.scale_midi.is_empty() {
            return Err(ConfigError::Empty("plop.scale_midi"));
        }
        unit("plop.velocity", p.velocity as f64)?;
        positive("plop.duration_sec", p.duration_sec as f64)?;
        positive("plop.glide_sec", p.glide_sec as f64)?;
        non_negative("plop.min_drop_semitones", p.min_drop_semitones as f64)?;
        non_negative("plop.max_drop_semitones", p.max_drop_semitones as f64)?;
        if p.min_drop_semitones > p.max_drop_semitones {
            return Err(ConfigError::InvertedRange {
                min: p.min_drop_semitones as f64,
                max: p.max_drop_semitones as f64,
            });
        }
        Ok(())
    }
}
