// Host-side tests for the spawn-interval timeline.

use raindrops_core::easing::{ease_in_out_cubic, Easing};
use raindrops_core::{stepped_interval_ms, Segment, Timeline, TimelineConfig, TimelineMode};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn ease_in_out_cubic_hits_anchor_points() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-12);
    assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
}

#[test]
fn ease_in_out_cubic_is_point_symmetric() {
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        let sum = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
        assert!((sum - 1.0).abs() < 1e-9, "asymmetric at t={t}");
    }
}

#[test]
fn easing_clamps_input() {
    assert_eq!(Easing::InOutCubic.apply(-1.0), 0.0);
    assert_eq!(Easing::InOutCubic.apply(2.0), 1.0);
    assert_eq!(Easing::InPow(3.0).apply(0.5), 0.125);
    assert_eq!(Easing::Linear.apply(0.3), 0.3);
}

#[test]
fn opening_ramp_eases_from_slow_to_fast() {
    let mut r = rng(1);
    let mut tl = Timeline::new(TimelineConfig::default(), 0.0);
    assert!((tl.interval_ms(0.0, &mut r) - 10_000.0).abs() < 1e-9);
    // Midpoint of the cubic is the midpoint of the values
    assert!((tl.interval_ms(22.5, &mut r) - 5_125.0).abs() < 1e-6);
    let late = tl.interval_ms(44.0, &mut r);
    assert!(late < 300.0 && late > 250.0, "late ramp value {late}");
    assert_eq!(tl.transitions(), 0);
}

#[test]
fn opening_ramp_is_followed_by_preset_fast_hold() {
    let mut r = rng(2);
    let mut tl = Timeline::new(TimelineConfig::default(), 0.0);
    assert_eq!(tl.interval_ms(45.0, &mut r), 250.0);
    match tl.segment() {
        Segment::Hold(h) => {
            assert_eq!(h.start_sec, 45.0);
            assert_eq!(h.duration_sec, 45.0);
            assert_eq!(h.value_ms, 250.0);
        }
        other => panic!("expected hold, got {other:?}"),
    }
    // Still holding just before the end
    assert_eq!(tl.interval_ms(89.9, &mut r), 250.0);
}

#[test]
fn random_ramps_start_where_previous_segment_ended() {
    let mut r = rng(3);
    let cfg = TimelineConfig::default();
    let mut tl = Timeline::new(cfg.clone(), 0.0);
    tl.interval_ms(90.0, &mut r);
    match tl.segment() {
        Segment::Ramp(ramp) => {
            assert_eq!(ramp.from_ms, 250.0);
            assert!(!ramp.preset_hold_next);
            assert!(cfg.random_durations_sec.contains(&ramp.duration_sec));
            assert_eq!(ramp.start_sec, 90.0);
        }
        other => panic!("expected ramp, got {other:?}"),
    }
}

#[test]
fn successor_target_never_repeats_previous_end_value() {
    let mut r = rng(4);
    let cfg = TimelineConfig::default();
    let mut tl = Timeline::new(cfg.clone(), 0.0);
    // Skip the opening ramp and the preset hold
    tl.interval_ms(90.0, &mut r);
    for _ in 0..500 {
        let prev = tl.segment().clone();
        tl.interval_ms(prev.end_sec(), &mut r);
        let next = tl.segment();
        assert_eq!(next.start_value_ms(), prev.end_value_ms());
        assert_ne!(next.end_value_ms(), prev.end_value_ms());
        let v = next.end_value_ms();
        assert!(v >= cfg.min_interval_ms && v <= cfg.max_interval_ms);
        assert_eq!(v % cfg.interval_step_ms, 0.0, "{v} is not on the step grid");
    }
}

#[test]
fn interval_stays_between_segment_endpoints() {
    let mut r = rng(5);
    let mut tl = Timeline::new(TimelineConfig::default(), 0.0);
    let mut t = 0.0;
    while t < 600.0 {
        let v = tl.interval_ms(t, &mut r);
        let seg = tl.segment();
        let lo = seg.start_value_ms().min(seg.end_value_ms());
        let hi = seg.start_value_ms().max(seg.end_value_ms());
        assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "{v} outside [{lo}, {hi}]");
        t += 0.016;
    }
}

#[test]
fn large_time_jump_replaces_every_expired_segment() {
    let mut r = rng(6);
    let mut tl = Timeline::new(TimelineConfig::default(), 0.0);
    tl.interval_ms(3_600.0, &mut r);
    // Ramps last at most 45s, so at least 78 of them follow the preset hold
    assert!(tl.transitions() >= 1 + (3_600 - 90) / 45);
    let seg = tl.segment();
    assert!(seg.start_sec() <= 3_600.0 && seg.end_sec() > 3_600.0);
}

#[test]
fn stepped_interval_moves_off_current_value() {
    let mut r = rng(7);
    // Two-value space: the only legal answer is the other value
    for _ in 0..100 {
        assert_eq!(stepped_interval_ms(250.0, 500.0, 250.0, 250.0, &mut r), 500.0);
        assert_eq!(stepped_interval_ms(250.0, 500.0, 250.0, 500.0, &mut r), 250.0);
    }
}

#[test]
fn stepped_interval_single_step_returns_floor() {
    let mut r = rng(8);
    assert_eq!(stepped_interval_ms(250.0, 250.0, 250.0, 250.0, &mut r), 250.0);
    assert_eq!(stepped_interval_ms(300.0, 400.0, 250.0, 300.0, &mut r), 300.0);
}

#[test]
fn constant_timeline_never_changes_interval() {
    let mut r = rng(9);
    let mut tl = Timeline::new(TimelineConfig::constant(250.0), 0.0);
    for i in 0..1_000 {
        assert_eq!(tl.interval_ms(i as f64 * 0.5, &mut r), 250.0);
    }
}

#[test]
fn cycle_mode_repeats_its_four_phases() {
    let mut r = rng(10);
    let cfg = TimelineConfig {
        mode: TimelineMode::Cycle,
        ..TimelineConfig::default()
    };
    let mut tl = Timeline::new(cfg, 0.0);
    assert!(matches!(tl.segment(), Segment::Ramp(_)));
    assert_eq!(tl.interval_ms(50.0, &mut r), 250.0); // fast hold
    let down = tl.interval_ms(105.0, &mut r); // mid ramp down, eased 0.25
    assert!((down - 2_687.5).abs() < 1e-6, "got {down}");
    assert_eq!(tl.interval_ms(130.0, &mut r), 10_000.0); // slow hold
    let first = {
        let mut fresh = Timeline::new(
            TimelineConfig {
                mode: TimelineMode::Cycle,
                ..TimelineConfig::default()
            },
            0.0,
        );
        fresh.interval_ms(22.5, &mut r)
    };
    let again = tl.interval_ms(150.0 + 22.5, &mut r);
    assert!((first - again).abs() < 1e-6);
    assert_eq!(tl.transitions(), 4);
}

#[test]
fn cycle_ramp_up_uses_steepening_curve() {
    let mut r = rng(11);
    let cfg = TimelineConfig {
        mode: TimelineMode::Cycle,
        ..TimelineConfig::default()
    };
    let mut tl = Timeline::new(cfg, 0.0);
    // t = 0.5, eased = 0.125 -> 10000 + (250 - 10000) * 0.125
    let v = tl.interval_ms(22.5, &mut r);
    assert!((v - 8_781.25).abs() < 1e-6, "got {v}");
}

#[test]
fn stepped_interval_survives_oversized_grid() {
    let mut r = rng(12);
    for _ in 0..100 {
        let v = stepped_interval_ms(250.0, f64::INFINITY, 250.0, 250.0, &mut r);
        assert!(v.is_finite() && v > 250.0);
        let v = stepped_interval_ms(250.0, 1e300, 250.0, 250.0, &mut r);
        assert!(v.is_finite() && v > 250.0);
    }
    assert_eq!(stepped_interval_ms(250.0, f64::NAN, 250.0, 250.0, &mut r), 250.0);
}
