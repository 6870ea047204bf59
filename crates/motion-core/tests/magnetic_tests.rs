// Host-side tests for magnetic hover.

use glam::Vec2;
use motion_core::constants::{DEFAULT_MAGNET_INTENSITY, MAGNET_MAX_PX};
use motion_core::magnetic::{attraction, Easing};
use motion_core::{Capabilities, MagnetTarget, MagneticController, ManualScheduler, Scheduler};

fn button() -> MagnetTarget {
    // 100x40 button at (200, 100): centre (250, 120)
    MagnetTarget::from_rect(200.0, 100.0, 100.0, 40.0)
}

fn controller() -> MagneticController {
    MagneticController::new(Capabilities::FULL, DEFAULT_MAGNET_INTENSITY, MAGNET_MAX_PX)
}

#[test]
fn target_centre_comes_from_rect() {
    let t = button();
    assert_eq!(t.center(), Vec2::new(250.0, 120.0));
    assert_eq!((t.width, t.height), (100.0, 40.0));
}

#[test]
fn translation_matches_clamped_formula() {
    let t = button();
    let cases = [
        (Vec2::new(260.0, 125.0), 0.3),
        (Vec2::new(300.0, 140.0), 0.3),
        (Vec2::new(150.0, 90.0), 0.3),
        (Vec2::new(251.0, 119.0), 1.0),
        (Vec2::new(400.0, 0.0), 0.05),
    ];
    for (pointer, intensity) in cases {
        let got = attraction(&t, pointer, intensity, 6.0);
        let d = pointer - t.center();
        let want = Vec2::new(
            (d.x * intensity).clamp(-6.0, 6.0),
            (d.y * intensity).clamp(-6.0, 6.0),
        );
        assert!((got - want).length() < 1e-5, "{pointer:?} @ {intensity}: {got:?} vs {want:?}");
        assert!(got.x.abs() <= 6.0 && got.y.abs() <= 6.0);
    }
}

#[test]
fn axes_clamp_independently() {
    // Far right, barely below: x saturates, y stays proportional.
    let got = attraction(&button(), Vec2::new(1000.0, 125.0), 0.3, 6.0);
    assert_eq!(got.x, 6.0);
    assert!((got.y - 1.5).abs() < 1e-5);
}

#[test]
fn hover_follows_pointer_once_per_frame() {
    let mut mag = controller();
    let mut sched = ManualScheduler::new();

    let enter = mag.pointer_enter().expect("enabled");
    assert_eq!(enter.easing, Some(Easing::Follow));

    mag.pointer_move(&mut sched, Vec2::new(255.0, 120.0), Some(button()));
    mag.pointer_move(&mut sched, Vec2::new(260.0, 125.0), Some(button()));
    assert_eq!(sched.pending_frames(), 1);

    let id = sched.run_frame()[0];
    let update = mag.on_frame(id).expect("frame applies");
    assert!((update.translate - Vec2::new(3.0, 1.5)).length() < 1e-5);
    assert_eq!(update.easing, None);
    assert_eq!(mag.applied(), update.translate);
}

#[test]
fn moves_outside_hover_are_ignored() {
    let mut mag = controller();
    let mut sched = ManualScheduler::new();
    mag.pointer_move(&mut sched, Vec2::new(260.0, 125.0), Some(button()));
    assert_eq!(sched.pending(), 0);
}

#[test]
fn leave_cancels_pending_and_settles_to_rest() {
    let mut mag = controller();
    let mut sched = ManualScheduler::new();
    mag.pointer_enter();
    mag.pointer_move(&mut sched, Vec2::new(260.0, 125.0), Some(button()));

    let reset = mag.pointer_leave(&mut sched).expect("enabled");
    assert_eq!(reset.translate, Vec2::ZERO);
    assert_eq!(reset.easing, Some(Easing::Settle));
    assert!(Easing::Settle.duration_ms() > Easing::Follow.duration_ms());
    assert_eq!(sched.pending(), 0);
    assert!(!mag.is_hovering());
}

#[test]
fn detached_element_drops_the_update() {
    let mut mag = controller();
    let mut sched = ManualScheduler::new();
    mag.pointer_enter();
    mag.pointer_move(&mut sched, Vec2::new(260.0, 125.0), Some(button()));
    mag.pointer_move(&mut sched, Vec2::new(270.0, 125.0), None);
    assert_eq!(sched.pending(), 0);
    assert!(sched.run_frame().is_empty());
}

#[test]
fn teardown_mid_hover_stops_all_updates() {
    let mut mag = controller();
    let mut sched = ManualScheduler::new();
    mag.pointer_enter();
    mag.pointer_move(&mut sched, Vec2::new(260.0, 125.0), Some(button()));
    let orphan = sched.request_frame();

    mag.teardown(&mut sched);
    assert_eq!(sched.pending(), 1, "only the unrelated frame survives");

    let mut updates = 0;
    for id in sched.run_frame().into_iter().chain([orphan]) {
        if mag.on_frame(id).is_some() {
            updates += 1;
        }
    }
    mag.pointer_move(&mut sched, Vec2::new(280.0, 125.0), Some(button()));
    if mag.pointer_enter().is_some() {
        updates += 1;
    }
    if mag.pointer_leave(&mut sched).is_some() {
        updates += 1;
    }
    assert_eq!(updates, 0);
    assert_eq!(sched.pending(), 0);
}

#[test]
fn gated_controller_is_inert() {
    let caps = Capabilities {
        reduced_motion: false,
        coarse_pointer: true,
    };
    let mut mag = MagneticController::new(caps, 0.3, 6.0);
    let mut sched = ManualScheduler::new();
    assert!(!mag.is_enabled());
    assert!(mag.pointer_enter().is_none());
    mag.pointer_move(&mut sched, Vec2::new(260.0, 125.0), Some(button()));
    assert!(mag.pointer_leave(&mut sched).is_none());
    assert_eq!(sched.frames_requested(), 0);
}
