// Host-side tests for the trail buffer, card tilt, scroll parallax, typewriter and config.

use glam::Vec2;
use motion_core::constants::{TRAIL_CAPACITY, TRAIL_TTL};
use motion_core::tilt::{card_tilt, scroll_parallax_y, scroll_progress, CardTilt};
use motion_core::typewriter::Typewriter;
use motion_core::{Capabilities, ConfigError, IntroSchedule, MotionConfig, PointerSample, PointerTrail};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

const REDUCED: Capabilities = Capabilities {
    reduced_motion: true,
    coarse_pointer: false,
};

#[test]
fn trail_keeps_six_newest() {
    let mut trail = PointerTrail::default();
    for i in 0..9u64 {
        trail.push(PointerSample::new(i as f32, 0.0, ms(i)));
    }
    assert_eq!(trail.len(), TRAIL_CAPACITY);
    let xs: Vec<f32> = trail.live(ms(9)).map(|(s, _)| s.position.x).collect();
    assert_eq!(xs, vec![3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
}

#[test]
fn trail_samples_expire_after_ttl() {
    let mut trail = PointerTrail::default();
    trail.push(PointerSample::new(1.0, 1.0, ms(0)));
    trail.push(PointerSample::new(2.0, 2.0, ms(100)));

    assert_eq!(trail.live(ms(150)).count(), 2);
    assert_eq!(trail.live(ms(151)).count(), 1);

    // Pushing prunes expired samples.
    trail.push(PointerSample::new(3.0, 3.0, ms(400)));
    assert_eq!(trail.len(), 1);
    assert_eq!(trail.latest().unwrap().position, Vec2::new(3.0, 3.0));
}

#[test]
fn trail_life_fades_with_age() {
    let mut trail = PointerTrail::new(TRAIL_CAPACITY, TRAIL_TTL);
    trail.push(PointerSample::new(0.0, 0.0, ms(0)));
    let (_, fresh) = trail.live(ms(0)).next().unwrap();
    let (_, old) = trail.live(ms(120)).next().unwrap();
    assert_eq!(fresh, 1.0);
    assert!(old < fresh && old > 0.0);
}

#[test]
fn trail_capacity_is_capped() {
    let mut trail = PointerTrail::new(64, TRAIL_TTL);
    for i in 0..20u64 {
        trail.push(PointerSample::new(i as f32, 0.0, ms(i)));
    }
    assert_eq!(trail.len(), TRAIL_CAPACITY);
}

#[test]
fn card_tilt_maps_corners_to_ten_degrees() {
    let origin = Vec2::new(100.0, 100.0);
    let size = Vec2::new(200.0, 100.0);

    let centre = card_tilt(Vec2::new(200.0, 150.0), origin, size, Capabilities::FULL, 1280.0);
    assert_eq!(centre, CardTilt::REST);

    let bottom_right = card_tilt(Vec2::new(300.0, 200.0), origin, size, Capabilities::FULL, 1280.0);
    assert!((bottom_right.rotate_y_deg - 10.0).abs() < 1e-5);
    assert!((bottom_right.rotate_x_deg + 10.0).abs() < 1e-5);
    assert!((bottom_right.light_x_pct - 100.0).abs() < 1e-4);

    let far_outside = card_tilt(Vec2::new(-900.0, -900.0), origin, size, Capabilities::FULL, 1280.0);
    assert!((far_outside.rotate_y_deg + 10.0).abs() < 1e-5);
    assert!((far_outside.rotate_x_deg - 10.0).abs() < 1e-5);
}

#[test]
fn card_tilt_rests_when_gated_or_narrow() {
    let origin = Vec2::ZERO;
    let size = Vec2::new(100.0, 100.0);
    let p = Vec2::new(100.0, 100.0);
    assert_eq!(card_tilt(p, origin, size, REDUCED, 1280.0), CardTilt::REST);
    assert_eq!(card_tilt(p, origin, size, Capabilities::FULL, 600.0), CardTilt::REST);
    assert_eq!(card_tilt(p, origin, Vec2::ZERO, Capabilities::FULL, 1280.0), CardTilt::REST);
}

#[test]
fn scroll_parallax_sweeps_linearly() {
    let f = |p: f32| scroll_parallax_y(p, 50.0, 0.5, Capabilities::FULL, 1280.0);
    assert_eq!(f(0.0), -25.0);
    assert_eq!(f(0.5), 0.0);
    assert_eq!(f(1.0), 25.0);
    assert_eq!(f(4.0), 25.0);
    assert_eq!(scroll_parallax_y(1.0, 50.0, 0.5, REDUCED, 1280.0), 0.0);
    assert_eq!(scroll_parallax_y(1.0, 50.0, 0.5, Capabilities::FULL, 500.0), 0.0);
}

#[test]
fn scroll_progress_spans_enter_to_exit() {
    // Section 200px tall in an 800px viewport.
    assert_eq!(scroll_progress(800.0, 200.0, 800.0), 0.0);
    assert_eq!(scroll_progress(-200.0, 200.0, 800.0), 1.0);
    assert_eq!(scroll_progress(300.0, 200.0, 800.0), 0.5);
}

#[test]
fn typewriter_reveals_after_delay() {
    let tw = Typewriter::new("STARK", ms(200), Capabilities::FULL).with_interval(ms(50));
    assert_eq!(tw.visible(ms(0)), "");
    assert_eq!(tw.visible(ms(199)), "");
    assert_eq!(tw.visible(ms(250)), "S");
    assert_eq!(tw.visible(ms(349)), "ST");
    assert!(!tw.is_complete(ms(400)));
    assert_eq!(tw.visible(ms(450)), "STARK");
    assert!(tw.is_complete(ms(450)));
    assert_eq!(tw.total_duration(), ms(450));
}

#[test]
fn typewriter_respects_char_boundaries() {
    let tw = Typewriter::new("Ñé…", ms(0), Capabilities::FULL).with_interval(ms(10));
    assert_eq!(tw.visible(ms(10)), "Ñ");
    assert_eq!(tw.visible(ms(25)), "Ñé");
    assert_eq!(tw.visible(ms(30)), "Ñé…");
}

#[test]
fn typewriter_is_instant_under_reduced_motion() {
    let tw = Typewriter::new("Welcome", ms(1000), REDUCED);
    assert_eq!(tw.visible(ms(0)), "Welcome");
    assert!(tw.is_complete(ms(0)));
    assert_eq!(tw.total_duration(), Duration::ZERO);
}

#[test]
fn default_config_is_valid() {
    let config = MotionConfig::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!(config.parallax_bound(), 6.0);
}

#[test]
fn config_rejects_bad_numbers() {
    let config = MotionConfig {
        magnetic_intensity: f32::NAN,
        ..MotionConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidNumber {
            name: "magnetic_intensity",
            ..
        })
    ));

    let config = MotionConfig {
        parallax_max_px: -1.0,
        ..MotionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = MotionConfig {
        trail_capacity: 0,
        ..MotionConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::TrailCapacity(0)));
}

#[test]
fn config_rejects_unordered_schedule() {
    let schedule = IntroSchedule {
        systems_online: ms(1000),
        ..IntroSchedule::default()
    };
    assert_eq!(
        schedule.validate(),
        Err(ConfigError::ScheduleOrder { index: 2 })
    );
    let err = MotionConfig {
        intro: schedule,
        ..MotionConfig::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

const TOUCH: Capabilities = Capabilities {
    reduced_motion: false,
    coarse_pointer: true,
};

#[test]
fn touch_screens_keep_scroll_parallax_and_tilt() {
    assert_eq!(scroll_parallax_y(1.0, 50.0, 0.5, TOUCH, 1280.0), 25.0);
    assert_eq!(scroll_parallax_y(0.0, 50.0, 0.5, TOUCH, 1280.0), -25.0);
    assert_eq!(scroll_parallax_y(1.0, 50.0, 0.5, TOUCH, 600.0), 0.0);

    let t = card_tilt(
        Vec2::new(100.0, 100.0),
        Vec2::ZERO,
        Vec2::new(100.0, 100.0),
        TOUCH,
        1280.0,
    );
    assert!((t.rotate_y_deg - 10.0).abs() < 1e-5);
}

#[test]
fn zero_interval_still_waits_for_delay() {
    let tw = Typewriter::new("STARK", ms(1000), Capabilities::FULL).with_interval(Duration::ZERO);
    assert_eq!(tw.visible(ms(0)), "");
    assert!(!tw.is_complete(ms(999)));
    assert_eq!(tw.visible(ms(1000)), "STARK");
    assert!(tw.is_complete(ms(1000)));
    assert_eq!(tw.total_duration(), ms(1000));
    assert_eq!(tw.next_reveal(ms(400)), Some(ms(600)));
    assert_eq!(tw.next_reveal(ms(1000)), None);
}

#[test]
fn next_reveal_follows_the_char_interval() {
    let tw = Typewriter::new("ABC", ms(100), Capabilities::FULL).with_interval(ms(80));
    // First char lands at delay + interval.
    assert_eq!(tw.next_reveal(ms(0)), Some(ms(180)));
    assert_eq!(tw.next_reveal(ms(150)), Some(ms(30)));
    assert_eq!(tw.visible(ms(180)), "A");
    assert_eq!(tw.next_reveal(ms(180)), Some(ms(80)));
    assert_eq!(tw.next_reveal(ms(339)), Some(ms(1)));
    assert_eq!(tw.visible(ms(340)), "ABC");
    assert_eq!(tw.next_reveal(ms(340)), None);

    let instant = Typewriter::new("ABC", ms(100), REDUCED).with_interval(ms(80));
    assert_eq!(instant.next_reveal(ms(0)), None);
}
