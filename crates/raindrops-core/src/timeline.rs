//! Mean spawn interval over time, expressed as a chain of ramp and hold segments.
//!
//! Exactly one segment is active. When it expires it is replaced by a freshly
//! built successor that starts where the previous one ended; segments are
//! never edited in place.

use crate::config::{TimelineConfig, TimelineMode};
use crate::constants::MAX_INTERVAL_STEPS;
use crate::easing::{lerp, Easing};
use rand::seq::SliceRandom;
use rand::Rng;

/// Interval eases from `from_ms` to `to_ms` across the segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Ramp {
    pub start_sec: f64,
    pub duration_sec: f64,
    pub from_ms: f64,
    pub to_ms: f64,
    pub easing: Easing,
    /// One-shot marker: the successor is the preset fast hold.
    pub preset_hold_next: bool,
}

/// Interval stays at `value_ms` across the segment.
#[derive(Clone, Debug, PartialEq)]
pub struct Hold {
    pub start_sec: f64,
    pub duration_sec: f64,
    pub value_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    Ramp(Ramp),
    Hold(Hold),
}

impl Segment {
    pub fn start_sec(&self) -> f64 {
        match self {
            Segment::Ramp(r) => r.start_sec,
            Segment::Hold(h) => h.start_sec,
        }
    }

    pub fn duration_sec(&self) -> f64 {
        match self {
            Segment::Ramp(r) => r.duration_sec,
            Segment::Hold(h) => h.duration_sec,
        }
    }

    pub fn end_sec(&self) -> f64 {
        self.start_sec() + self.duration_sec()
    }

    pub fn start_value_ms(&self) -> f64 {
        match self {
            Segment::Ramp(r) => r.from_ms,
            Segment::Hold(h) => h.value_ms,
        }
    }

    /// Value the segment settles on; the next ramp starts from here.
    pub fn end_value_ms(&self) -> f64 {
        match self {
            Segment::Ramp(r) => r.to_ms,
            Segment::Hold(h) => h.value_ms,
        }
    }

    pub fn is_expired(&self, now_sec: f64) -> bool {
        now_sec - self.start_sec() >= self.duration_sec()
    }

    /// Interval at `now_sec`; elapsed fraction is clamped to the segment.
    pub fn value_at(&self, now_sec: f64) -> f64 {
        match self {
            Segment::Hold(h) => h.value_ms,
            Segment::Ramp(r) => {
                let t = (now_sec - r.start_sec) / r.duration_sec;
                lerp(r.from_ms, r.to_ms, r.easing.apply(t))
            }
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Segment::Ramp(_) => "ramp",
            Segment::Hold(_) => "hold",
        }
    }
}

/// Active segment plus the rules for building its successor.
#[derive(Clone, Debug)]
pub struct Timeline {
    config: TimelineConfig,
    segment: Segment,
    cycle_phase: usize,
    transitions: u64,
}

impl Timeline {
    /// Build the opening segment, starting at `now_sec`.
    pub fn new(config: TimelineConfig, now_sec: f64) -> Self {
        let segment = match config.mode {
            TimelineMode::RandomWalk => Segment::Ramp(Ramp {
                start_sec: now_sec,
                duration_sec: config.opening_ramp_sec,
                from_ms: config.slow_interval_ms,
                to_ms: config.fast_interval_ms,
                easing: Easing::InOutCubic,
                preset_hold_next: true,
            }),
            TimelineMode::Cycle => cycle_segment(&config, 0, now_sec),
        };
        Self {
            config,
            segment,
            cycle_phase: 0,
            transitions: 0,
        }
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Number of segment replacements so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Mean interval in milliseconds at `now_sec`, replacing expired segments first.
    pub fn interval_ms<R: Rng + ?Sized>(&mut self, now_sec: f64, rng: &mut R) -> f64 {
        while self.segment.is_expired(now_sec) {
            let next = self.successor(rng);
            log::debug!(
                "[timeline] {} {:.0}ms -> {} {:.0}ms..{:.0}ms over {:.0}s",
                self.segment.kind(),
                self.segment.end_value_ms(),
                next.kind(),
                next.start_value_ms(),
                next.end_value_ms(),
                next.duration_sec()
            );
            self.segment = next;
            self.transitions += 1;
        }
        self.segment.value_at(now_sec)
    }

    fn successor<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Segment {
        let start_sec = self.segment.end_sec();
        if self.config.mode == TimelineMode::Cycle {
            self.cycle_phase = (self.cycle_phase + 1) % 4;
            return cycle_segment(&self.config, self.cycle_phase, start_sec);
        }
        let cfg = &self.config;
        if let Segment::Ramp(Ramp {
            preset_hold_next: true,
            ..
        }) = self.segment
        {
            return Segment::Hold(Hold {
                start_sec,
                duration_sec: cfg.fast_hold_sec,
                value_ms: cfg.fast_interval_ms,
            });
        }
        let from_ms = self.segment.end_value_ms();
        let duration_sec = cfg
            .random_durations_sec
            .choose(rng)
            .copied()
            .unwrap_or(cfg.fast_hold_sec);
        let to_ms = stepped_interval_ms(
            cfg.min_interval_ms,
            cfg.max_interval_ms,
            cfg.interval_step_ms,
            from_ms,
            rng,
        );
        Segment::Ramp(Ramp {
            start_sec,
            duration_sec,
            from_ms,
            to_ms,
            easing: Easing::InOutCubic,
            preset_hold_next: false,
        })
    }
}

/// Segment for `phase` of the periodic loop: up, hold fast, down, hold slow.
fn cycle_segment(config: &TimelineConfig, phase: usize, start_sec: f64) -> Segment {
    let c = &config.cycle;
    match phase {
        0 => Segment::Ramp(Ramp {
            start_sec,
            duration_sec: c.ramp_up_sec,
            from_ms: config.slow_interval_ms,
            to_ms: config.fast_interval_ms,
            easing: Easing::InPow(c.ramp_up_power),
            preset_hold_next: false,
        }),
        1 => Segment::Hold(Hold {
            start_sec,
            duration_sec: c.fast_hold_sec,
            value_ms: config.fast_interval_ms,
        }),
        2 => Segment::Ramp(Ramp {
            start_sec,
            duration_sec: c.ramp_down_sec,
            from_ms: config.fast_interval_ms,
            to_ms: config.slow_interval_ms,
            easing: Easing::InPow(c.ramp_down_power),
            preset_hold_next: false,
        }),
        _ => Segment::Hold(Hold {
            start_sec,
            duration_sec: c.slow_hold_sec,
            value_ms: config.slow_interval_ms,
        }),
    }
}

/// Uniform pick from `min..=max` quantized to `step`, never equal to `current`.
///
/// A draw that lands on `current` moves to the next step (wrapping). With a
/// single step available the floor value is returned as is. Oversized grids
/// are truncated to `MAX_INTERVAL_STEPS` values above the floor.
pub fn stepped_interval_ms<R: Rng + ?Sized>(
    min_ms: f64,
    max_ms: f64,
    step_ms: f64,
    current_ms: f64,
    rng: &mut R,
) -> f64 {
    let span = ((max_ms - min_ms) / step_ms).floor();
    if !(span >= 1.0) {
        return min_ms;
    }
    let steps = span.min(MAX_INTERVAL_STEPS as f64) as usize + 1;
    let mut idx = rng.gen_range(0..steps);
    let mut val = min_ms + idx as f64 * step_ms;
    if (val - current_ms).abs() < 1e-9 {
        idx = (idx + 1) % steps;
        val = min_ms + idx as f64 * step_ms;
    }
    val
}
