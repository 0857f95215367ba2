//! Release target selection and the settle animation.
//!
//! A release picks a target index (directly, or after projecting a fast flick
//! forward) and starts a [`SnapTask`]: a damped spring pulling the offset onto
//! that index's grid position. The host advances it with [`SnapAnimator::tick`]
//! once per frame; each task yields exactly one [`SettleEvent`].

use crate::constants::*;
use crate::discretize::grid_offset;
use crate::domain::Domain;
use crate::error::ConfigError;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapPolicy {
    /// Snap to the index nearest the released offset.
    Direct,
    /// Project fast releases forward by `velocity * window_ms` first.
    Momentum { threshold: f64, window_ms: f64 },
}

impl SnapPolicy {
    pub fn momentum() -> Self {
        SnapPolicy::Momentum {
            threshold: MOMENTUM_VELOCITY_THRESHOLD,
            window_ms: MOMENTUM_WINDOW_MS,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let SnapPolicy::Momentum {
            threshold,
            window_ms,
        } = *self
        {
            for (name, value) in [("momentum threshold", threshold), ("momentum window", window_ms)] {
                if !value.is_finite() {
                    return Err(ConfigError::NotFinite { name, value });
                }
                if value < 0.0 {
                    return Err(ConfigError::NonPositive { name, value });
                }
            }
        }
        Ok(())
    }
}

/// Index a release at `offset` moving at `velocity` (units/ms) comes to rest on.
/// Always within the domain, whatever the velocity.
pub fn release_target(
    offset: f64,
    velocity: f64,
    unit_extent: f64,
    domain: &Domain,
    policy: SnapPolicy,
) -> usize {
    let projected = match policy {
        SnapPolicy::Momentum {
            threshold,
            window_ms,
        } if velocity.abs() > threshold => offset + velocity * window_ms,
        _ => offset,
    };
    domain.clamp_index(-projected / unit_extent)
}

/// Spring tuning in React-Native `tension` / `friction` terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f64,
    pub friction: f64,
    pub rest_displacement: f64,
    pub rest_speed: f64,
    pub max_duration: Duration,
}

impl SpringConfig {
    pub fn new(tension: f64, friction: f64) -> Self {
        Self {
            tension,
            friction,
            rest_displacement: REST_DISPLACEMENT,
            rest_speed: REST_SPEED,
            max_duration: Duration::from_secs_f64(MAX_SETTLE_SECS),
        }
    }

    pub fn ruler() -> Self {
        Self::new(RULER_SPRING_TENSION, RULER_SPRING_FRICTION)
    }

    pub fn dial() -> Self {
        Self::new(DIAL_SPRING_TENSION, DIAL_SPRING_FRICTION)
    }

    /// Origami mapping used by React Native's `Animated.spring`.
    pub fn stiffness(&self) -> f64 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    pub fn damping(&self) -> f64 {
        (self.friction - 8.0) * 3.0 + 25.0
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("spring tension", self.tension),
            ("spring friction", self.friction),
            ("rest displacement", self.rest_displacement),
            ("rest speed", self.rest_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        for (name, value) in [
            ("spring stiffness", self.stiffness()),
            ("spring damping", self.damping()),
            ("rest displacement", self.rest_displacement),
            ("rest speed", self.rest_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::ruler()
    }
}

/// Completion of one snap task.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleEvent {
    pub generation: u64,
    pub index: usize,
    pub offset: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationFrame {
    Moving { offset: f64 },
    Settled(SettleEvent),
}

#[derive(Clone, Copy, Debug)]
struct SnapTask {
    generation: u64,
    target_index: usize,
    target_offset: f64,
    offset: f64,
    /// Units per second.
    velocity: f64,
    elapsed: f64,
}

#[derive(Clone, Debug)]
pub struct SnapAnimator {
    spring: SpringConfig,
    task: Option<SnapTask>,
    next_generation: u64,
}

impl SnapAnimator {
    pub fn new(spring: SpringConfig) -> Self {
        Self {
            spring,
            task: None,
            next_generation: 1,
        }
    }

    pub fn spring(&self) -> &SpringConfig {
        &self.spring
    }

    /// Starts animating from `from` towards `target_index`, seeded with the
    /// release velocity in units/ms. Replaces any running task.
    pub fn start(
        &mut self,
        from: f64,
        velocity_per_ms: f64,
        target_index: usize,
        unit_extent: f64,
    ) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        let velocity = if velocity_per_ms.is_finite() {
            velocity_per_ms * 1000.0
        } else {
            0.0
        };
        let target_offset = grid_offset(target_index, unit_extent);
        log::debug!(
            "[snap] task {} from {:.2} to index {} ({:.2}) v={:.1}/s",
            generation,
            from,
            target_index,
            target_offset,
            velocity
        );
        self.task = Some(SnapTask {
            generation,
            target_index,
            target_offset,
            offset: if from.is_finite() { from } else { target_offset },
            velocity,
            elapsed: 0.0,
        });
        generation
    }

    /// Advances the running task by `dt`. Returns `None` when idle.
    pub fn tick(&mut self, dt: Duration) -> Option<AnimationFrame> {
        let spring = self.spring;
        let task = self.task.as_mut()?;
        let k = spring.stiffness();
        let c = spring.damping();
        let max_secs = spring.max_duration.as_secs_f64();

        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 && task.elapsed < max_secs {
            let h = remaining.min(SPRING_SUBSTEP_SECS);
            let accel = -k * (task.offset - task.target_offset) - c * task.velocity;
            task.velocity += accel * h;
            task.offset += task.velocity * h;
            task.elapsed += h;
            remaining -= h;
        }

        let at_rest = (task.offset - task.target_offset).abs() < spring.rest_displacement
            && task.velocity.abs() < spring.rest_speed;
        if at_rest || task.elapsed >= max_secs || !task.offset.is_finite() {
            let event = SettleEvent {
                generation: task.generation,
                index: task.target_index,
                offset: task.target_offset,
            };
            log::debug!(
                "[snap] task {} settled on index {} after {:.3}s",
                event.generation,
                event.index,
                task.elapsed
            );
            self.task = None;
            return Some(AnimationFrame::Settled(event));
        }
        Some(AnimationFrame::Moving {
            offset: task.offset,
        })
    }

    /// Stops the running task, returning where it was.
    pub fn cancel(&mut self) -> Option<f64> {
        let task = self.task.take()?;
        log::debug!(
            "[snap] task {} cancelled at {:.2}",
            task.generation,
            task.offset
        );
        Some(task.offset)
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn current_offset(&self) -> Option<f64> {
        self.task.map(|t| t.offset)
    }

    pub fn target_index(&self) -> Option<usize> {
        self.task.map(|t| t.target_index)
    }

    pub fn generation(&self) -> Option<u64> {
        self.task.map(|t| t.generation)
    }
}
