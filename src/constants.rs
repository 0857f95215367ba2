/// Drawing, pointer and feedback tuning for the web host.
///
/// Interaction tuning (momentum, springs, haptic tiers) lives in
/// `picker_core::constants`; these only shape how the browser presents it.
// Canvas element and preset lookup
pub const CANVAS_ID: &str = "picker-canvas";
pub const PRESET_ATTRIBUTE: &str = "data-preset";
pub const DEFAULT_PRESET: &str = "height";

// Readout elements
pub const VALUE_ID: &str = "picker-value";
pub const IMPERIAL_ID: &str = "picker-imperial";
pub const QUICK_STEPS_ID: &str = "picker-steps";
pub const QUICK_VALUES_ID: &str = "picker-quick";

// Ticks drawn each side of the indicator
pub const VISIBLE_RADIUS_ITEMS: f64 = 12.0;

// Tick lengths (CSS px, before falloff scaling)
pub const TICK_LEN_MAJOR: f64 = 36.0;
pub const TICK_LEN_MEDIUM: f64 = 24.0;
pub const TICK_LEN_MINOR: f64 = 14.0;
pub const TICK_WIDTH: f64 = 2.0;
pub const LABEL_GAP: f64 = 10.0; // between a major tick and its label

// Dial geometry
pub const DIAL_RADIUS_FRACTION: f64 = 0.38; // of the shorter canvas side
pub const DIAL_VISIBLE_DEGREES: f64 = 70.0; // each side of the indicator

// Colors
pub const BACKGROUND_COLOR: &str = "#0a0e18";
pub const TICK_COLOR: &str = "#cfe7ff";
pub const INDICATOR_COLOR: &str = "#4f8cff";
pub const LABEL_FONT: &str = "13px system-ui";

// Vibration per haptic tier (ms)
pub const VIBRATE_LIGHT_MS: u32 = 8;
pub const VIBRATE_MEDIUM_MS: u32 = 16;
pub const VIBRATE_STRONG_MS: u32 = 28;
pub const VIBRATE_SUCCESS_PATTERN: [u32; 3] = [18, 40, 18]; // buzz, pause, buzz

// Pointer velocity estimation
pub const VELOCITY_HORIZON_MS: f64 = 100.0; // only recent samples count
pub const ASSUME_STOPPED_MS: f64 = 40.0; // a pause this long before release means no fling
pub const POINTER_HISTORY: usize = 20;

// Keyboard
pub const KEY_COARSE_STEPS: f64 = 10.0; // Shift+Arrow and PageUp/PageDown

// Frame pacing
pub const MAX_FRAME_DT_MS: u64 = 100; // clamp after tab switches
