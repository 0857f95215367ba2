// Shared interaction tuning constants used by the web and native hosts.

// Momentum (release flick)
pub const MOMENTUM_VELOCITY_THRESHOLD: f64 = 0.5; // units per ms; slower releases snap directly
pub const MOMENTUM_WINDOW_MS: f64 = 150.0; // how far ahead a flick is projected

// Spring, React-Native style parameters
pub const RULER_SPRING_TENSION: f64 = 50.0;
pub const RULER_SPRING_FRICTION: f64 = 12.0;
pub const DIAL_SPRING_TENSION: f64 = 80.0;
pub const DIAL_SPRING_FRICTION: f64 = 12.0;

// Settle detection
pub const REST_DISPLACEMENT: f64 = 0.05; // units from target
pub const REST_SPEED: f64 = 2.0; // units per second
pub const MAX_SETTLE_SECS: f64 = 2.0; // hard bound; the task snaps to target after this
pub const SPRING_SUBSTEP_SECS: f64 = 1.0 / 240.0;

// Haptic tiers
pub const MARK_TOLERANCE: f64 = 0.01; // slack for float step accumulation
pub const MAJOR_MARK_EVERY: f64 = 10.0;
pub const MEDIUM_MARK_EVERY: f64 = 5.0;

// Visible window falloff (items from center -> scale / opacity / lateral shift)
pub const VIEW_FALLOFF_ITEMS: [f64; 3] = [0.0, 4.0, 8.0];
pub const VIEW_SCALE: [f64; 3] = [1.0, 0.8, 0.6];
pub const VIEW_OPACITY: [f64; 3] = [1.0, 0.5, 0.2];
pub const VIEW_SHIFT: [f64; 3] = [0.0, -5.0, -15.0];

// Item extents of the presets
pub const HEIGHT_ITEM_PX: f64 = 16.0;
pub const WEIGHT_ITEM_PX: f64 = 20.0;
pub const AGE_DEGREES_PER_ITEM: f64 = 4.0;
pub const DIAL_DEGREES_PER_PX: f64 = 0.5;

pub const CM_PER_INCH: f64 = 2.54;
