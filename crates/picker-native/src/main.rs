use picker_core::{
    format_feet_inches, Commit, GestureSample, HapticError, HapticTier, Orientation,
    PickerConfig, PickerController, Phase, ValueLabel,
};
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);
const SETTLE_FRAME_LIMIT: usize = 600;

/// One scripted interaction.
#[derive(Clone, Copy, Debug)]
enum Step {
    /// Press, move `items` worth of pointer travel over `ms`, release.
    Drag { items: f64, ms: u64 },
    Nudge(f64),
    Select(f64),
    /// Start a nudge, grab the picker after `frames` and let go in place.
    Interrupt { delta: f64, frames: usize },
}

struct Replay {
    picker: PickerController,
    px_per_item: f64,
    elapsed: Duration,
}

impl Replay {
    fn new(config: PickerConfig) -> anyhow::Result<Self> {
        let px_per_item = match config.orientation {
            Orientation::Dial { degrees_per_px } => config.unit_extent / degrees_per_px,
            Orientation::Vertical | Orientation::Horizontal => config.unit_extent,
        };
        let picker = PickerController::new(
            config,
            |c: &Commit| log::info!("[commit] {:?} {} (index {})", c.kind, c.value, c.index),
            |tier: HapticTier| -> Result<(), HapticError> {
                log::info!("[haptics] {:?}", tier);
                Ok(())
            },
        )?;
        Ok(Self {
            picker,
            px_per_item,
            elapsed: Duration::ZERO,
        })
    }

    fn run(&mut self, step: Step) {
        log::info!("[replay] {:?} at {:.3}s", step, self.elapsed.as_secs_f64());
        match step {
            Step::Drag { items, ms } => self.drag(items * self.px_per_item, ms),
            Step::Nudge(delta) => self.picker.nudge(delta),
            Step::Select(value) => self.picker.select_value(value),
            Step::Interrupt { delta, frames } => {
                self.picker.nudge(delta);
                for _ in 0..frames {
                    self.frame();
                }
                self.picker.gesture_start();
                self.picker.gesture_end(GestureSample::default());
            }
        }
        self.settle();
    }

    fn drag(&mut self, distance_px: f64, ms: u64) {
        let orientation = self.picker.config().orientation;
        let frames = ((ms as f64 / (FRAME.as_secs_f64() * 1000.0)).ceil() as usize).max(1);
        let velocity = distance_px / ms.max(1) as f64;
        self.picker.gesture_start();
        for i in 1..=frames {
            let travelled = distance_px * i as f64 / frames as f64;
            self.picker
                .gesture_move(GestureSample::along(orientation, travelled, velocity));
            self.elapsed += FRAME;
        }
        self.picker
            .gesture_end(GestureSample::along(orientation, distance_px, velocity));
    }

    fn settle(&mut self) {
        for _ in 0..SETTLE_FRAME_LIMIT {
            if self.picker.phase() != Phase::Settling {
                return;
            }
            self.frame();
        }
        log::warn!("[replay] still settling after {} frames", SETTLE_FRAME_LIMIT);
    }

    fn frame(&mut self) {
        self.picker.tick(FRAME);
        self.elapsed += FRAME;
    }
}

/// Slow drag, fast fling, every quick step, the first quick value and an
/// interrupted settle.
fn default_script(config: &PickerConfig) -> Vec<Step> {
    let mut steps = vec![
        Step::Drag {
            items: 5.0,
            ms: 600,
        },
        Step::Drag {
            items: -3.0,
            ms: 50,
        },
    ];
    steps.extend(config.quick_steps.iter().copied().map(Step::Nudge));
    steps.extend(config.quick_values.first().copied().map(Step::Select));
    if let Some(&widest) = config
        .quick_steps
        .iter()
        .max_by(|a, b| a.abs().total_cmp(&b.abs()))
    {
        steps.push(Step::Interrupt {
            delta: widest,
            frames: 3,
        });
    }
    steps
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let preset = std::env::args().nth(1).unwrap_or_else(|| "height".to_string());
    let config = PickerConfig::preset(&preset)?;
    let script = default_script(&config);
    log::info!(
        "[replay] preset {} starts at {} with {} steps",
        preset,
        config.initial_value,
        script.len()
    );

    let mut replay = Replay::new(config)?;
    for step in script {
        replay.run(step);
    }

    let picker = &replay.picker;
    let config = picker.config();
    let label = ValueLabel {
        value: picker.value(),
        decimal_places: config.domain.decimal_places(),
        unit: &config.unit_label,
    };
    if config.unit_label == "cm" {
        log::info!("[replay] final {} ({})", label, format_feet_inches(picker.value()));
    } else {
        log::info!("[replay] final {}", label);
    }
    Ok(())
}
