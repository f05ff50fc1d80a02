use clap::{Parser, ValueEnum};
use raindrops_core::{CanvasSize, SimConfig, Simulation, SpawnKind, TimelineMode};

mod recorder;

use recorder::Recorder;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    RandomWalk,
    Cycle,
}

#[derive(Parser, Debug)]
#[command(name = "raindrops-native")]
#[command(about = "Headless raindrops run: steps the simulation at a fixed frame rate and logs a summary", long_about = None)]
struct Args {
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Simulated run length in seconds
    #[arg(long, default_value_t = 120.0)]
    seconds: f64,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 720.0)]
    height: f32,

    /// Time of the simulated first click, in seconds
    #[arg(long, default_value_t = 0.0)]
    click_at: f64,

    /// Override the burst probability (0..1)
    #[arg(long)]
    burst_probability: Option<f64>,

    /// Timeline shape
    #[arg(long, value_enum, default_value_t = Mode::RandomWalk)]
    mode: Mode,

    /// Treat audio as unlocked so every drop also produces a note
    #[arg(long, default_value_t = false)]
    audio: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let mut config = SimConfig::default();
    config.timeline.mode = match args.mode {
        Mode::RandomWalk => TimelineMode::RandomWalk,
        Mode::Cycle => TimelineMode::Cycle,
    };
    if let Some(p) = args.burst_probability {
        config.spawn.burst_probability = p;
    }

    let canvas = CanvasSize::new(args.width, args.height);
    let mut sim = Simulation::new(config, canvas, args.seed, 0.0)?;
    let mut out = Recorder::default();

    let fps = args.fps.max(1);
    let dt_sec = 1.0 / fps as f64;
    let total_frames = (args.seconds * fps as f64).ceil() as u64;
    let click_ms = args.click_at * 1000.0;
    log::info!(
        "raindrops-native: seed={} {}x{} {} frames at {}fps, click at {:.1}s",
        args.seed,
        canvas.width,
        canvas.height,
        total_frames,
        fps,
        args.click_at
    );

    let mut scheduled = 0u64;
    let mut bursts = 0u64;
    let mut second_spawns = 0u64;
    let mut peak_live = 0usize;
    let mut next_report_ms = 1000.0;

    for frame in 1..=total_frames {
        let now_ms = frame as f64 * dt_sec * 1000.0;
        if now_ms >= click_ms && !sim.scheduler().is_started() {
            sim.on_user_interaction(now_ms);
            sim.set_audio_enabled(args.audio);
        }

        let report = sim.step(now_ms, dt_sec as f32);
        for ev in &report.spawns {
            match ev.kind {
                SpawnKind::Scheduled => scheduled += 1,
                SpawnKind::Burst => bursts += 1,
            }
        }
        second_spawns += report.spawns.len() as u64;
        for note in &report.notes {
            note.play(&mut out);
        }
        sim.render(&mut out);
        peak_live = peak_live.max(sim.pool().len());

        if now_ms >= next_report_ms {
            log::info!(
                "t={:>5.1}s interval={:>7.0}ms live={:>3} spawned={:>2} hint={:.2}",
                now_ms / 1000.0,
                report.interval_ms,
                sim.pool().len(),
                second_spawns,
                sim.hint().opacity()
            );
            second_spawns = 0;
            next_report_ms += 1000.0;
        }
    }

    log::info!(
        "done: {} scheduled + {} burst drops, peak {} live, {} rings drawn (max alpha {:.2}), {} texts drawn, {} segment changes",
        scheduled,
        bursts,
        peak_live,
        out.rings_drawn,
        out.max_alpha_seen,
        out.texts_drawn,
        sim.scheduler().timeline().transitions()
    );
    if out.notes_played > 0 {
        log::info!(
            "audio: {} notes, {} glides, range {:.1}..{:.1}Hz",
            out.notes_played,
            out.glides,
            out.lowest_note_hz.unwrap_or_default(),
            out.highest_note_hz.unwrap_or_default()
        );
    }
    Ok(())
}
