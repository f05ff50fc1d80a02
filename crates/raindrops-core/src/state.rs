//! The whole toy as one explicit value.
//!
//! Frontends own a `Simulation`, call `step` once per animation frame, then
//! `render`. Interaction, resize and audio unlock are forwarded through the
//! matching methods. All randomness comes from the seeded RNG held here, so a
//! given seed and input sequence always produces the same frames.

use crate::config::{ConfigError, PlopConfig, SimConfig};
use crate::hint::{HintOverlay, TextRenderer};
use crate::plop::{pick_plop, PlopNote};
use crate::ripple::{CanvasSize, RingRenderer, RipplePool};
use crate::scheduler::{SpawnEvents, SpawnScheduler};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

/// What happened during one `step`.
#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    /// Mean spawn interval in effect this frame.
    pub interval_ms: f64,
    pub spawns: SpawnEvents,
    /// One note per spawn, only while audio is enabled.
    pub notes: SmallVec<[PlopNote; 8]>,
}

pub struct Simulation {
    plop: PlopConfig,
    rng: StdRng,
    scheduler: SpawnScheduler,
    pool: RipplePool,
    hint: HintOverlay,
    audio_enabled: bool,
}

impl Simulation {
    /// Validate `config` and build the opening timeline at `now_ms`.
    pub fn new(
        config: SimConfig,
        canvas: CanvasSize,
        seed: u64,
        now_ms: f64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let SimConfig {
            timeline,
            spawn,
            ripple,
            hint,
            plop,
        } = config;
        Ok(Self {
            plop,
            rng: StdRng::seed_from_u64(seed),
            scheduler: SpawnScheduler::new(timeline, spawn, now_ms),
            pool: RipplePool::new(ripple, canvas),
            hint: HintOverlay::new(hint),
            audio_enabled: false,
        })
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    pub fn pool(&self) -> &RipplePool {
        &self.pool
    }

    pub fn hint(&self) -> &HintOverlay {
        &self.hint
    }

    pub fn plop_config(&self) -> &PlopConfig {
        &self.plop
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    /// Set by the frontend once audio playback is (or is not) unlocked.
    pub fn set_audio_enabled(&mut self, enabled: bool) {
        if enabled != self.audio_enabled {
            log::info!("[sim] audio {}", if enabled { "enabled" } else { "disabled" });
        }
        self.audio_enabled = enabled;
    }

    /// Pointer, touch or key input. Starts spawning and fades the hint;
    /// returns true only for the call that actually started the scheduler.
    pub fn on_user_interaction(&mut self, now_ms: f64) -> bool {
        self.hint.trigger_fade_out();
        self.scheduler.start(now_ms)
    }

    pub fn resize(&mut self, canvas: CanvasSize) {
        self.pool.on_resize(canvas);
    }

    /// Advance everything by one frame ending at `now_ms`, `dt_sec` after the last.
    pub fn step(&mut self, now_ms: f64, dt_sec: f32) -> FrameReport {
        let interval_ms = self.scheduler.current_interval_ms(now_ms, &mut self.rng);
        let spawns = self.scheduler.tick(now_ms, interval_ms, &mut self.rng);

        let mut notes = SmallVec::new();
        let canvas = self.pool.canvas();
        for _ in &spawns {
            let position = Vec2::new(
                self.rng.gen::<f32>() * canvas.width,
                self.rng.gen::<f32>() * canvas.height,
            );
            self.pool.spawn(position);
            if self.audio_enabled {
                notes.push(pick_plop(&self.plop, &mut self.rng));
            }
        }

        self.pool.advance(dt_sec);
        self.hint.advance(dt_sec);

        FrameReport {
            interval_ms,
            spawns,
            notes,
        }
    }

    /// Rings first, hint text on top.
    pub fn render<R: RingRenderer + TextRenderer + ?Sized>(&self, renderer: &mut R) {
        self.pool.render(renderer);
        self.hint.render(renderer, self.pool.canvas());
    }
}
