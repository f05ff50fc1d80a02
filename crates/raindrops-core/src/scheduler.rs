//! Decides when drops are born.
//!
//! Births follow a Poisson-like process: each gap is an exponential draw whose
//! mean is the timeline's current interval. With a fixed probability a birth
//! comes with a small burst of extra drops. Nothing is emitted until `start`
//! has been called, but the timeline keeps advancing regardless.

use crate::config::{SpawnConfig, TimelineConfig};
use crate::timeline::Timeline;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnKind {
    Scheduled,
    Burst,
}

/// One drop birth. `due_ms` is the scheduled time, which may lie slightly
/// before the frame that emits it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnEvent {
    pub due_ms: f64,
    pub kind: SpawnKind,
}

pub type SpawnEvents = SmallVec<[SpawnEvent; 8]>;

pub struct SpawnScheduler {
    config: SpawnConfig,
    timeline: Timeline,
    started: bool,
    next_due_ms: Option<f64>,
    // Mean for the gap after the opening drop; consumed once.
    seed_mean_ms: Option<f64>,
}

impl SpawnScheduler {
    pub fn new(timeline: TimelineConfig, config: SpawnConfig, now_ms: f64) -> Self {
        Self {
            config,
            timeline: Timeline::new(timeline, now_ms / 1000.0),
            started: false,
            next_due_ms: None,
            seed_mean_ms: None,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn next_due_ms(&self) -> Option<f64> {
        self.next_due_ms
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Current mean gap between births. Advances the timeline; call every frame.
    pub fn current_interval_ms<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> f64 {
        self.timeline.interval_ms(now_ms / 1000.0, rng)
    }

    /// Begin emitting births. Only the first call has any effect; returns
    /// whether this call started the scheduler.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.next_due_ms = Some(now_ms + self.config.first_spawn_delay_ms);
        self.seed_mean_ms = Some(self.timeline.config().slow_interval_ms);
        log::info!(
            "[scheduler] started at {:.0}ms, first drop in {:.0}ms",
            now_ms,
            self.config.first_spawn_delay_ms
        );
        true
    }

    /// Emit every birth due at or before `now_ms`, rescheduling after each.
    ///
    /// `mean_ms` is the interval returned by `current_interval_ms` this frame.
    /// Gaps are measured from the previous due time, so a long frame yields
    /// every birth that fell inside it.
    pub fn tick<R: Rng + ?Sized>(&mut self, now_ms: f64, mean_ms: f64, rng: &mut R) -> SpawnEvents {
        let mut events = SpawnEvents::new();
        if !self.started {
            return events;
        }
        while let Some(due) = self.next_due_ms {
            if due > now_ms {
                break;
            }
            events.push(SpawnEvent {
                due_ms: due,
                kind: SpawnKind::Scheduled,
            });
            let mut baseline = due;
            if self.config.burst_probability > 0.0 && rng.gen_bool(self.config.burst_probability) {
                let extra = rng.gen_range(1..=self.config.burst_max_extra);
                for _ in 0..extra {
                    events.push(SpawnEvent {
                        due_ms: due,
                        kind: SpawnKind::Burst,
                    });
                }
                baseline = due
                    + rng.gen_range(
                        self.config.burst_offset_min_ms..=self.config.burst_offset_max_ms,
                    );
                log::debug!("[scheduler] burst of {} at {:.0}ms", extra, due);
            }
            let mean = self.seed_mean_ms.take().unwrap_or(mean_ms);
            self.next_due_ms = Some(baseline + exp_ms(mean, rng));
        }
        events
    }
}

/// Exponential inter-arrival time with the given mean (inverse-CDF sampling).
#[inline]
pub fn exp_ms<R: Rng + ?Sized>(mean_ms: f64, rng: &mut R) -> f64 {
    let u: f64 = rng.gen();
    -(1.0 - u).ln() * mean_ms
}
