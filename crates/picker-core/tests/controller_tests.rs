use picker_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

struct Harness {
    picker: PickerController,
    commits: Rc<RefCell<Vec<Commit>>>,
    haptics: Rc<RefCell<Vec<HapticTier>>>,
}

impl Harness {
    fn new(config: PickerConfig) -> Self {
        let commits = Rc::new(RefCell::new(Vec::new()));
        let haptics = Rc::new(RefCell::new(Vec::new()));
        let commit_sink = commits.clone();
        let haptic_sink = haptics.clone();
        let picker = PickerController::new(
            config,
            move |commit: &Commit| commit_sink.borrow_mut().push(*commit),
            move |tier: HapticTier| -> Result<(), HapticError> {
                haptic_sink.borrow_mut().push(tier);
                Ok(())
            },
        )
        .unwrap();
        Self {
            picker,
            commits,
            haptics,
        }
    }

    fn drag_to(&mut self, distance_px: f64, velocity: f64) {
        let orientation = self.picker.config().orientation;
        self.picker
            .gesture_move(GestureSample::along(orientation, distance_px, velocity));
    }

    fn release(&mut self, distance_px: f64, velocity: f64) {
        let orientation = self.picker.config().orientation;
        self.picker
            .gesture_end(GestureSample::along(orientation, distance_px, velocity));
    }

    fn settle(&mut self) {
        for _ in 0..600 {
            if self.picker.phase() != Phase::Settling {
                return;
            }
            self.picker.tick(FRAME);
        }
        panic!("picker never settled");
    }

    fn commits(&self) -> Vec<Commit> {
        self.commits.borrow().clone()
    }

    fn haptics(&self) -> Vec<HapticTier> {
        self.haptics.borrow().clone()
    }

    fn successes(&self) -> usize {
        self.haptics()
            .iter()
            .filter(|t| **t == HapticTier::Success)
            .count()
    }
}

#[test]
fn drag_five_items_then_release_settles_on_165() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    assert_eq!(h.picker.value(), 170.0);

    h.picker.gesture_start();
    for item in 1..=5 {
        h.drag_to(item as f64 * 16.0, 0.0);
    }
    assert_eq!(h.picker.value(), 165.0);
    assert_eq!(
        h.commits().iter().map(|c| c.value).collect::<Vec<_>>(),
        vec![169.0, 168.0, 167.0, 166.0, 165.0]
    );
    assert!(h.commits().iter().all(|c| c.kind == CommitKind::Live));

    h.release(80.0, 0.0);
    assert_eq!(h.picker.phase(), Phase::Settling);
    h.settle();

    assert_eq!(h.picker.phase(), Phase::Idle);
    assert_eq!(h.picker.value(), 165.0);
    assert_eq!(h.picker.offset(), grid_offset(65, 16.0));
    let last = *h.commits().last().unwrap();
    assert_eq!(last.kind, CommitKind::Settled);
    assert_eq!(last.value, 165.0);
    assert_eq!(h.successes(), 1);
    assert_eq!(
        h.haptics(),
        vec![
            HapticTier::Light,
            HapticTier::Light,
            HapticTier::Light,
            HapticTier::Light,
            HapticTier::Medium,
            HapticTier::Success,
        ]
    );
}

#[test]
fn fling_projects_forward_before_settling() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    h.picker.gesture_start();
    h.drag_to(16.0, 1.0);
    h.drag_to(32.0, 1.0);
    h.release(32.0, 1.0);
    h.settle();

    // 168 at release, then 150 px of momentum.
    assert_eq!(h.picker.value(), 159.0);
    assert_eq!(h.successes(), 1);
    assert_eq!(h.haptics().last(), Some(&HapticTier::Success));
    let settled: Vec<_> = h
        .commits()
        .into_iter()
        .filter(|c| c.kind == CommitKind::Settled)
        .collect();
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].value, 159.0);
}

#[test]
fn age_nudges_fire_tiered_haptics() {
    let mut h = Harness::new(PickerConfig::age_dial().unwrap());
    assert_eq!(h.picker.value(), 25.0);

    h.picker.nudge(10.0);
    assert_eq!(h.picker.value(), 35.0);
    h.picker.nudge(10.0);
    assert_eq!(h.picker.value(), 45.0);
    h.picker.nudge(-5.0);
    assert_eq!(h.picker.value(), 40.0);
    assert_eq!(
        h.haptics(),
        vec![HapticTier::Medium, HapticTier::Medium, HapticTier::Strong]
    );

    h.settle();
    assert_eq!(h.picker.value(), 40.0);
    assert_eq!(h.picker.offset(), grid_offset(30, 4.0));
    // Quick adjustments do not confirm on settle.
    assert_eq!(h.successes(), 0);
    let kinds: Vec<_> = h.commits().iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CommitKind::Nudge,
            CommitKind::Nudge,
            CommitKind::Nudge,
            CommitKind::Settled
        ]
    );
}

#[test]
fn quick_select_and_nudge_clamp_to_domain() {
    let mut h = Harness::new(PickerConfig::age_dial().unwrap());
    h.picker.select_value(60.0);
    assert_eq!(h.picker.value(), 60.0);
    h.picker.nudge(1000.0);
    assert_eq!(h.picker.value(), 100.0);
    h.settle();
    h.picker.nudge(10.0);
    assert_eq!(h.picker.phase(), Phase::Idle);
    assert_eq!(h.commits().last().map(|c| c.kind), Some(CommitKind::Settled));
}

#[test]
fn dial_drag_maps_swipe_to_degrees() {
    let mut h = Harness::new(PickerConfig::age_dial().unwrap());
    h.picker.gesture_start();
    // 40 px * 0.5 deg/px = 20 deg = 5 ages back.
    h.drag_to(40.0, 0.0);
    assert_eq!(h.picker.value(), 20.0);
    h.release(40.0, 5.0);
    h.settle();
    assert_eq!(h.picker.value(), 20.0);
    assert_eq!(h.successes(), 1);
}

#[test]
fn weight_steps_by_tenths() {
    let mut h = Harness::new(PickerConfig::weight_kg().unwrap());
    h.picker.nudge(0.1);
    assert_eq!(h.picker.value(), 70.1);
    h.picker.nudge(-0.1);
    h.picker.nudge(-0.1);
    assert_eq!(h.picker.value(), 69.9);
    h.settle();
    assert_eq!(
        ValueLabel {
            value: h.picker.value(),
            decimal_places: h.picker.config().domain.decimal_places(),
            unit: &h.picker.config().unit_label,
        }
        .to_string(),
        "69.9 kg"
    );
}

#[test]
fn grabbing_a_settling_picker_continues_from_current_offset() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    h.picker.nudge(10.0);
    assert_eq!(h.picker.value(), 180.0);
    h.picker.tick(FRAME);
    let mid = h.picker.offset();
    assert!(mid < grid_offset(70, 16.0) && mid > grid_offset(80, 16.0));

    h.picker.gesture_start();
    assert_eq!(h.picker.phase(), Phase::Tracking);
    assert_eq!(h.picker.offset(), mid);

    // The cancelled nudge never completes.
    for _ in 0..200 {
        h.picker.tick(FRAME);
    }
    assert!(h.commits().iter().all(|c| c.kind != CommitKind::Settled));

    h.drag_to(0.0, 0.0);
    h.release(0.0, 0.0);
    assert_eq!(h.picker.phase(), Phase::Settling);
    h.settle();

    let index = discretize(mid, 16.0, &h.picker.config().domain).index;
    assert_eq!(h.picker.index(), index);
    assert_eq!(h.picker.offset(), grid_offset(index, 16.0));
    let settled: Vec<_> = h
        .commits()
        .into_iter()
        .filter(|c| c.kind == CommitKind::Settled)
        .collect();
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].index, index);
}

#[test]
fn release_without_movement_is_a_no_op() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    h.picker.gesture_start();
    h.drag_to(6.0, 0.0);
    h.drag_to(0.0, 0.0);
    h.release(0.0, 0.0);
    assert_eq!(h.picker.phase(), Phase::Idle);
    assert!(h.commits().is_empty());
    assert!(h.haptics().is_empty());
    assert_eq!(h.picker.offset(), grid_offset(70, 16.0));
}

#[test]
fn moves_without_a_start_are_ignored() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    h.drag_to(160.0, 0.0);
    h.release(160.0, 0.0);
    assert_eq!(h.picker.value(), 170.0);
    assert_eq!(h.picker.phase(), Phase::Idle);
    assert!(h.commits().is_empty());
}

#[test]
fn nudges_are_ignored_while_dragging() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    h.picker.gesture_start();
    h.picker.nudge(10.0);
    h.picker.select_value(120.0);
    assert_eq!(h.picker.phase(), Phase::Tracking);
    assert_eq!(h.picker.value(), 170.0);
}

#[test]
fn overscroll_clamps_value_and_display() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    h.picker.gesture_start();
    h.drag_to(10_000.0, 0.0);
    assert_eq!(h.picker.value(), 100.0);
    assert!(h.picker.offset() > 0.0);
    assert_eq!(h.picker.display_offset(), 0.0);
    h.release(10_000.0, 0.0);
    h.settle();
    assert_eq!(h.picker.offset(), 0.0);
    assert_eq!(h.picker.value(), 100.0);

    h.picker.gesture_start();
    h.drag_to(f64::NAN, f64::INFINITY);
    assert_eq!(h.picker.value(), 100.0);
    h.drag_to(-1e12, 0.0);
    assert_eq!(h.picker.value(), 250.0);
}

#[test]
fn moves_within_one_item_or_past_a_bound_buzz_once() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    h.picker.gesture_start();
    h.drag_to(-3.0, 0.0);
    h.drag_to(-5.0, 0.0);
    assert_eq!(h.picker.value(), 170.0);
    assert!(h.haptics().is_empty());
    assert!(h.commits().is_empty());

    for px in [-1300.0, -1400.0, -1500.0, -2000.0] {
        h.drag_to(px, 0.0);
        assert_eq!(h.picker.value(), 250.0);
    }
    assert_eq!(h.haptics(), vec![HapticTier::Strong]);
    assert_eq!(h.commits().len(), 1);

    h.release(-2000.0, 0.0);
    h.settle();
    assert_eq!(h.picker.value(), 250.0);
    assert_eq!(h.haptics(), vec![HapticTier::Strong, HapticTier::Success]);
}

#[test]
fn set_value_jumps_without_haptics() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    h.picker.set_value(200.4);
    assert_eq!(h.picker.value(), 200.0);
    assert_eq!(h.picker.offset(), grid_offset(100, 16.0));
    assert_eq!(h.picker.phase(), Phase::Idle);
    h.picker.set_value(f64::NAN);
    h.picker.set_value(999.0);
    assert_eq!(h.picker.value(), 250.0);
    assert!(h.haptics().is_empty());
    let kinds: Vec<_> = h.commits().iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![CommitKind::Programmatic, CommitKind::Programmatic]);
}

#[test]
fn events_dispatch_in_order() {
    let mut h = Harness::new(PickerConfig::height_cm().unwrap());
    let sample = |d| GestureSample::along(Orientation::Vertical, d, 0.0);
    for event in [
        PickerEvent::GestureStart,
        PickerEvent::GestureMove(sample(-32.0)),
        PickerEvent::GestureEnd(sample(-32.0)),
    ] {
        h.picker.handle(event);
    }
    for _ in 0..300 {
        h.picker.handle(PickerEvent::Frame(FRAME));
    }
    assert_eq!(h.picker.value(), 172.0);
    assert_eq!(h.picker.phase(), Phase::Idle);
    h.picker.handle(PickerEvent::Set(150.0));
    assert_eq!(h.picker.value(), 150.0);
}

#[test]
fn failing_haptics_never_block_commits() {
    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = commits.clone();
    let mut picker = PickerController::new(
        PickerConfig::height_cm().unwrap(),
        move |c: &Commit| sink.borrow_mut().push(*c),
        |_tier: HapticTier| -> Result<(), HapticError> { Err(HapticError::Unavailable) },
    )
    .unwrap();
    picker.nudge(5.0);
    assert_eq!(picker.value(), 175.0);
    assert_eq!(picker.last_haptic_value(), Some(175.0));
    assert_eq!(commits.borrow().len(), 1);
}

#[test]
fn edited_config_is_rejected() {
    let mut config = PickerConfig::height_cm().unwrap();
    config.unit_extent = 0.0;
    let result = PickerController::new(
        config,
        |_: &Commit| {},
        NoopHaptics,
    );
    assert!(matches!(
        result,
        Err(ConfigError::NonPositive {
            name: "unit extent",
            ..
        })
    ));
}

#[test]
fn haptic_emitter_dedups_by_value() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = fired.clone();
    let mut emitter = HapticEmitter::new(
        Box::new(move |tier: HapticTier| -> Result<(), HapticError> {
            sink.borrow_mut().push(tier);
            Ok(())
        }),
        Some(25.0),
    );
    assert_eq!(emitter.on_selection(25.0), None);
    assert_eq!(emitter.on_selection(26.0), Some(HapticTier::Light));
    assert_eq!(emitter.on_selection(26.0), None);
    assert_eq!(emitter.on_selection(30.0), Some(HapticTier::Strong));
    assert_eq!(emitter.confirm(), HapticTier::Success);
    assert_eq!(
        *fired.borrow(),
        vec![HapticTier::Light, HapticTier::Strong, HapticTier::Success]
    );
}
