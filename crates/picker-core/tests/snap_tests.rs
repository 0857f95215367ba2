use picker_core::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn height() -> Domain {
    Domain::new(100.0, 250.0, 1.0, 0).unwrap()
}

fn run(animator: &mut SnapAnimator) -> (usize, Option<SettleEvent>) {
    for frame in 0..1000 {
        match animator.tick(FRAME) {
            Some(AnimationFrame::Moving { .. }) => {}
            Some(AnimationFrame::Settled(event)) => return (frame + 1, Some(event)),
            None => return (frame, None),
        }
    }
    (1000, None)
}

#[test]
fn slow_release_snaps_to_nearest() {
    let d = height();
    let at = grid_offset(70, 16.0) - 5.0;
    assert_eq!(release_target(at, 0.3, 16.0, &d, SnapPolicy::momentum()), 70);
    assert_eq!(release_target(at, 0.0, 16.0, &d, SnapPolicy::momentum()), 70);
}

#[test]
fn fast_release_projects_forward() {
    let d = height();
    let at = grid_offset(70, 16.0);
    // 1 px/ms over 150 ms is 9.375 items back towards the start.
    assert_eq!(release_target(at, 1.0, 16.0, &d, SnapPolicy::momentum()), 61);
    assert_eq!(release_target(at, -1.0, 16.0, &d, SnapPolicy::momentum()), 79);
    assert_eq!(release_target(at, 1.0, 16.0, &d, SnapPolicy::Direct), 70);
}

#[test]
fn release_target_is_monotonic_in_velocity() {
    let d = height();
    let at = grid_offset(70, 16.0) + 3.0;
    let mut previous = usize::MAX;
    for step in -100..=100 {
        let v = step as f64 * 0.05;
        let index = release_target(at, v, 16.0, &d, SnapPolicy::momentum());
        assert!(index <= previous, "v={} gave {} after {}", v, index, previous);
        previous = index;
    }
}

#[test]
fn release_target_stays_in_domain() {
    let d = height();
    let at = grid_offset(3, 16.0);
    let p = SnapPolicy::momentum();
    assert_eq!(release_target(at, 1e12, 16.0, &d, p), 0);
    assert_eq!(release_target(at, -1e12, 16.0, &d, p), 150);
    assert_eq!(release_target(at, f64::NAN, 16.0, &d, p), 3);
}

#[test]
fn origami_spring_mapping() {
    let ruler = SpringConfig::ruler();
    assert!((ruler.stiffness() - 266.4).abs() < 1e-9);
    assert!((ruler.damping() - 37.0).abs() < 1e-9);
    let dial = SpringConfig::dial();
    assert!((dial.stiffness() - 375.0).abs() < 1e-9);
    assert!(SpringConfig::new(20.0, 12.0).validate().is_ok());
    assert!(SpringConfig::new(-30.0, 12.0).validate().is_err());
}

#[test]
fn task_settles_exactly_once_on_target() {
    let mut animator = SnapAnimator::new(SpringConfig::ruler());
    let generation = animator.start(grid_offset(65, 16.0) + 8.0, 0.0, 65, 16.0);
    let (frames, event) = run(&mut animator);
    let event = event.expect("settle event");
    assert_eq!(event.generation, generation);
    assert_eq!(event.index, 65);
    assert_eq!(event.offset, grid_offset(65, 16.0));
    assert!(frames > 1);
    assert!(!animator.is_running());
    assert_eq!(animator.tick(FRAME), None);
}

#[test]
fn settle_absorbs_release_velocity() {
    let mut animator = SnapAnimator::new(SpringConfig::dial());
    animator.start(-60.0, 3.0, 15, 4.0);
    let (_, event) = run(&mut animator);
    assert_eq!(event.map(|e| e.offset), Some(-60.0));
}

#[test]
fn task_is_bounded_by_max_duration() {
    let spring = SpringConfig {
        rest_displacement: 1e-12,
        rest_speed: 1e-12,
        max_duration: Duration::from_millis(100),
        ..SpringConfig::ruler()
    };
    let mut animator = SnapAnimator::new(spring);
    animator.start(-400.0, 0.0, 0, 16.0);
    let (frames, event) = run(&mut animator);
    assert!(frames <= 8, "took {} frames", frames);
    assert_eq!(event.map(|e| e.offset), Some(0.0));
}

#[test]
fn restart_and_cancel() {
    let mut animator = SnapAnimator::new(SpringConfig::ruler());
    let first = animator.start(0.0, 0.0, 10, 16.0);
    animator.tick(FRAME);
    let mid = animator.current_offset().unwrap();
    assert!(mid < 0.0 && mid > -160.0);

    let second = animator.start(mid, 0.0, 2, 16.0);
    assert!(second > first);
    assert_eq!(animator.target_index(), Some(2));

    assert_eq!(animator.cancel(), Some(mid));
    assert!(!animator.is_running());
    assert_eq!(animator.tick(FRAME), None);
    assert_eq!(animator.cancel(), None);
}
