//! Per-picker interaction state machine.
//!
//! ```text
//! Idle --start--> Tracking --end--> Settling --settle--> Idle
//!                    ^                  |
//!                    +------start-------+   (cancels the settle)
//! ```
//!
//! The controller exclusively owns the committed selection and the haptic
//! de-dup state. Hosts feed it one ordered stream of events on the UI thread;
//! the settle completion arrives later through [`PickerController::tick`].

use crate::config::PickerConfig;
use crate::discretize::{clamp_offset, discretize, grid_offset, nearest_grid_offset, Selection};
use crate::error::ConfigError;
use crate::gesture::{GestureSample, GestureTracker};
use crate::haptics::{HapticChannel, HapticEmitter};
use crate::snap::{release_target, AnimationFrame, SettleEvent, SnapAnimator};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Tracking,
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitKind {
    /// Selection changed under the finger.
    Live,
    /// Quick-adjust or quick-select, committed before its animation runs.
    Nudge,
    /// Host-driven jump.
    Programmatic,
    /// Final value once a snap animation has settled.
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Commit {
    pub value: f64,
    pub index: usize,
    pub kind: CommitKind,
}

/// Receives every committed value.
pub trait ValueListener {
    fn on_commit(&mut self, commit: &Commit);
}

impl<F> ValueListener for F
where
    F: FnMut(&Commit),
{
    fn on_commit(&mut self, commit: &Commit) {
        self(commit)
    }
}

/// Everything a host can ask of a picker, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickerEvent {
    GestureStart,
    GestureMove(GestureSample),
    GestureEnd(GestureSample),
    Frame(Duration),
    Nudge(f64),
    Select(f64),
    Set(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SettleOrigin {
    Release,
    Nudge,
}

pub struct PickerController {
    config: PickerConfig,
    tracker: GestureTracker,
    animator: SnapAnimator,
    haptics: HapticEmitter,
    listener: Box<dyn ValueListener>,
    phase: Phase,
    offset: f64,
    committed: Selection,
    pending_settle: Option<(u64, SettleOrigin)>,
}

impl PickerController {
    pub fn new(
        config: PickerConfig,
        listener: impl ValueListener + 'static,
        haptics: impl HapticChannel + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let committed = Selection::nearest(config.initial_value, &config.domain);
        let offset = grid_offset(committed.index, config.unit_extent);
        log::debug!(
            "[picker] new {} picker at {} ({} items)",
            config.unit_label,
            committed.value,
            config.domain.total_items()
        );
        Ok(Self {
            tracker: GestureTracker::new(config.orientation),
            animator: SnapAnimator::new(config.spring),
            haptics: HapticEmitter::new(Box::new(haptics), Some(committed.value)),
            listener: Box::new(listener),
            phase: Phase::Idle,
            offset,
            committed,
            pending_settle: None,
            config,
        })
    }

    pub fn handle(&mut self, event: PickerEvent) {
        match event {
            PickerEvent::GestureStart => self.gesture_start(),
            PickerEvent::GestureMove(sample) => self.gesture_move(sample),
            PickerEvent::GestureEnd(sample) => self.gesture_end(sample),
            PickerEvent::Frame(dt) => {
                self.tick(dt);
            }
            PickerEvent::Nudge(delta) => self.nudge(delta),
            PickerEvent::Select(value) => self.select_value(value),
            PickerEvent::Set(value) => self.set_value(value),
        }
    }

    pub fn gesture_start(&mut self) {
        if self.phase == Phase::Settling {
            if let Some(at) = self.animator.cancel() {
                self.offset = at;
            }
        }
        self.pending_settle = None;
        self.tracker.begin(self.offset);
        self.phase = Phase::Tracking;
        log::debug!("[picker] drag from {:.2}", self.offset);
    }

    pub fn gesture_move(&mut self, sample: GestureSample) {
        if self.phase != Phase::Tracking {
            log::trace!("[picker] move ignored while {:?}", self.phase);
            return;
        }
        if let Some(tracked) = self.tracker.track(sample) {
            self.offset = tracked.offset;
            self.update_live();
        }
    }

    pub fn gesture_end(&mut self, sample: GestureSample) {
        if self.phase != Phase::Tracking {
            log::trace!("[picker] release ignored while {:?}", self.phase);
            return;
        }
        let Some(session) = self.tracker.finish(sample) else {
            self.phase = Phase::Idle;
            return;
        };
        self.offset = session.current_offset;
        self.update_live();

        let extent = self.config.unit_extent;
        let on_grid = self.offset == nearest_grid_offset(self.offset, extent, &self.config.domain);
        if session.displacement() == 0.0 && on_grid {
            log::debug!("[picker] release without movement");
            self.phase = Phase::Idle;
            return;
        }

        let target = release_target(
            self.offset,
            session.velocity,
            extent,
            &self.config.domain,
            self.config.snap,
        );
        log::debug!(
            "[picker] release at {:.2} v={:.3}/ms -> index {}",
            self.offset,
            session.velocity,
            target
        );
        self.start_settle(session.velocity, target, SettleOrigin::Release);
    }

    /// Advances a running settle. Returns the animation frame, if any.
    pub fn tick(&mut self, dt: Duration) -> Option<AnimationFrame> {
        if self.phase != Phase::Settling {
            return None;
        }
        let frame = self.animator.tick(dt);
        match frame {
            Some(AnimationFrame::Moving { offset }) => self.offset = offset,
            Some(AnimationFrame::Settled(event)) => self.on_settled(event),
            None => {
                log::warn!("[picker] settling without a snap task");
                self.phase = Phase::Idle;
            }
        }
        frame
    }

    /// Moves the committed value by `delta`, clamped to the domain.
    pub fn nudge(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.animate_to(self.committed.value + delta);
    }

    /// Jumps to a fixed value with the same animation and haptics as a nudge.
    pub fn select_value(&mut self, value: f64) {
        self.animate_to(value);
    }

    /// Host-driven jump without animation or haptics.
    pub fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.animator.cancel();
        self.tracker.abort();
        self.pending_settle = None;
        self.phase = Phase::Idle;

        let selection = Selection::nearest(value, &self.config.domain);
        self.offset = grid_offset(selection.index, self.config.unit_extent);
        if selection.index != self.committed.index {
            self.committed = selection;
            self.notify(CommitKind::Programmatic);
        }
    }

    pub fn value(&self) -> f64 {
        self.committed.value
    }

    pub fn index(&self) -> usize {
        self.committed.index
    }

    pub fn selection(&self) -> Selection {
        self.committed
    }

    /// Raw offset, which may overscroll past either end during a drag.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Offset limited to the grid, for drawing.
    pub fn display_offset(&self) -> f64 {
        clamp_offset(self.offset, self.config.unit_extent, &self.config.domain)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn last_haptic_value(&self) -> Option<f64> {
        self.haptics.last_emitted()
    }

    fn animate_to(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        if self.phase == Phase::Tracking {
            log::debug!("[picker] quick adjust ignored during drag");
            return;
        }
        if let Some(at) = self.animator.cancel() {
            self.offset = at;
        }
        self.pending_settle = None;

        let selection = Selection::nearest(value, &self.config.domain);
        if selection.index != self.committed.index {
            self.committed = selection;
            self.haptics.on_selection(selection.value);
            self.notify(CommitKind::Nudge);
        }

        if self.offset == grid_offset(selection.index, self.config.unit_extent) {
            self.phase = Phase::Idle;
            return;
        }
        self.start_settle(0.0, selection.index, SettleOrigin::Nudge);
    }

    fn start_settle(&mut self, velocity: f64, target: usize, origin: SettleOrigin) {
        let generation = self
            .animator
            .start(self.offset, velocity, target, self.config.unit_extent);
        self.pending_settle = Some((generation, origin));
        self.phase = Phase::Settling;
    }

    fn on_settled(&mut self, event: SettleEvent) {
        let origin = match self.pending_settle.take() {
            Some((generation, origin)) if generation == event.generation => origin,
            stale => {
                log::debug!(
                    "[picker] stale settle {} (expected {:?})",
                    event.generation,
                    stale.map(|(g, _)| g)
                );
                return;
            }
        };
        self.offset = event.offset;
        self.phase = Phase::Idle;
        self.committed = Selection::at(event.index, &self.config.domain);
        self.notify(CommitKind::Settled);
        if origin == SettleOrigin::Release {
            self.haptics.on_selection(self.committed.value);
            self.haptics.confirm();
        }
    }

    fn update_live(&mut self) {
        let selection = discretize(self.offset, self.config.unit_extent, &self.config.domain);
        if selection.index != self.committed.index {
            self.committed = selection;
            log::trace!("[picker] live {}", selection.value);
            self.haptics.on_selection(selection.value);
            self.notify(CommitKind::Live);
        }
    }

    fn notify(&mut self, kind: CommitKind) {
        let commit = Commit {
            value: self.committed.value,
            index: self.committed.index,
            kind,
        };
        self.listener.on_commit(&commit);
    }
}

impl std::fmt::Debug for PickerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerController")
            .field("phase", &self.phase)
            .field("offset", &self.offset)
            .field("committed", &self.committed)
            .field("haptics", &self.haptics)
            .finish_non_exhaustive()
    }
}
